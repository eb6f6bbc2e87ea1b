use std::io;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::detect::{self, DuplicateRecord};
use crate::error::ScaffoldError;
use crate::fsys::Fsys;
use crate::mutate;
use crate::report::Reporter;
use crate::validate;

use super::templates::handler;

/// Top-level directory all generated handler packages live under.
pub const HANDLER_ROOT: &str = "http";

/// Register one or more HTTP methods against `raw_path`.
///
/// Pipeline: validate path and methods, scan the main file for existing
/// registrations (duplicates are skipped with a warning; an all-duplicate
/// batch is a `PathExists` error), then commit three ordered steps:
/// registration lines before the startup marker, import injection next to
/// the framework import, and handler stubs in
/// `http/<path directory>/<package>.go`. Steps commit independently; there
/// is no rollback.
pub fn run(
    fsys: &dyn Fsys,
    reporter: &Reporter,
    cfg: &ProjectConfig,
    methods_spec: &str,
    raw_path: &str,
) -> Result<(), ScaffoldError> {
    let path = validate::normalize_path(raw_path);
    if !validate::valid_path(path) {
        return Err(ScaffoldError::InvalidPath(raw_path.to_string()));
    }
    let methods = validate::parse_methods(methods_spec)?;

    let dir = validate::path_directory(path);
    if dir.is_empty() {
        // a parameter in the first segment leaves no directory to name the
        // handler package after
        return Err(ScaffoldError::InvalidPath(raw_path.to_string()));
    }
    let package = dir.rsplit('/').next().unwrap_or(dir);

    let main_file = Path::new(&cfg.main_file);
    let main_content = match fsys.read_to_string(main_file) {
        Ok(content) => content,
        // no main file means no prior registrations; the mutator below will
        // report the real open failure
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let mut fresh = Vec::new();
    let mut first_duplicate: Option<DuplicateRecord> = None;
    for method in methods {
        match detect::find_route(&main_content, method, path) {
            Some(line) => {
                reporter.warn(&format!(
                    "{} /{} already registered at {}:{}, skipping",
                    method, path, cfg.main_file, line
                ));
                if first_duplicate.is_none() {
                    first_duplicate = Some(DuplicateRecord {
                        line,
                        file: cfg.main_file.clone(),
                        method,
                        path: path.to_string(),
                    });
                }
            }
            None => fresh.push(method),
        }
    }

    if fresh.is_empty() {
        if let Some(dup) = first_duplicate {
            return Err(ScaffoldError::PathExists {
                path: dup.path,
                method: dup.method.as_str().to_string(),
                file: dup.file,
                line: dup.line,
            });
        }
        return Ok(());
    }

    let mut registrations = String::new();
    let mut stubs = String::new();
    for method in &fresh {
        registrations.push_str(&handler::registration_line(cfg, *method, path, package));
        stubs.push_str(&handler::handler_stub(cfg, *method, path));
    }

    mutate::insert_before_marker(fsys, main_file, &cfg.start_marker, &registrations)?;
    reporter.step(&format!(
        "Registered {} route(s) in {}",
        fresh.len(),
        cfg.main_file
    ));

    let import_path = format!("{}/{}/{}", project_name(fsys)?, HANDLER_ROOT, dir);
    mutate::inject_import(fsys, main_file, &cfg.framework_import, &import_path)?;

    let handler_dir = Path::new(HANDLER_ROOT).join(dir);
    mutate::ensure_dir(fsys, Path::new(HANDLER_ROOT))?;
    mutate::ensure_dir(fsys, &handler_dir)?;
    let handler_file = handler_dir.join(format!("{package}.go"));
    mutate::populate_file(
        fsys,
        &handler_file,
        &handler::file_header(cfg, package),
        &stubs,
    )?;
    reporter.step(&format!("Wrote handler stubs to {}", handler_file.display()));

    reporter.success(&format!("Added route: {path}"));
    Ok(())
}

/// Module name of the target project, taken from the working directory's
/// base name. Used as the prefix of injected import paths.
fn project_name(fsys: &dyn Fsys) -> Result<String, ScaffoldError> {
    let cwd = fsys.getwd()?;
    Ok(cwd
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string()))
}
