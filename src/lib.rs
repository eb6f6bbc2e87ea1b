//! # gofr-scaffold
//!
//! Command-line tool that mutates an existing GoFr-style Go project:
//! registers HTTP routes in the startup file and scaffolds layered entity
//! boilerplate.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `gofr-scaffold add --path <p> [--methods <csv\|all>]` | Register methods against a path and write handler stubs |
//! | `gofr-scaffold entity --name <n> [--type <layer>]` | Scaffold a core/composite/consumer entity |
//! | `gofr-scaffold routes` | List registrations found in the main file |
//! | `gofr-scaffold doctor` | Run project health checks |
//!
//! ## Architecture
//!
//! The mutation engine is deliberately textual: it scans and rewrites source
//! files line by line against the canonical shapes this tool itself emits
//! (`k.GET("/path", pkg.Handler)`, a `.Start(` marker line, a two-element
//! sorted import block). It never parses the target project as a syntax
//! tree, so hand-edited registrations in a different shape are invisible to
//! it — a documented limitation, traded for simplicity.
//!
//! Mutations are ordered, independently-committing steps with no rollback:
//! main file first, handler files second.
//!
//! - [`validate`] — path grammar and HTTP method-set checks
//! - [`detect`] — line-oriented duplicate-registration scan
//! - [`mutate`] — read-whole-file/transform/rewrite primitives
//! - [`fsys`] — filesystem port with OS-backed and in-memory implementations
//! - [`config`] — target-project conventions, `scaffold.toml` overrides
//! - [`report`] — injectable console reporter
//! - [`commands`] — the CLI command pipelines built from the above

pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod fsys;
pub mod mutate;
pub mod report;
pub mod validate;
