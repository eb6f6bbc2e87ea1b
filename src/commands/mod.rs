//! Command implementations for the `gofr-scaffold` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Route registration — `gofr-scaffold add`.
///
/// Validates the path and method spec, skips already-registered methods,
/// inserts registration lines before the startup call, injects the handler
/// package import and writes handler stubs under `http/`.
pub mod add;

/// Project diagnostics — `gofr-scaffold doctor`.
///
/// Health checks: main file, startup marker, framework import, handler
/// directory, Go toolchain, configuration file.
pub mod doctor;

/// Entity scaffolding — `gofr-scaffold entity`.
///
/// Layers: `core` (interface + template + model), `composite` (interface +
/// template), `consumer` (bare package stub under `http/`).
pub mod entity;

/// Route listing — `gofr-scaffold routes`.
///
/// Static scan of the main file for registration lines; prints method,
/// path, handler and line number.
pub mod routes;

/// Name helpers and Go code templates shared by the commands.
pub mod templates;
