use std::path::Path;
use std::process::Command;

use colored::Colorize;

use crate::config::ProjectConfig;
use crate::error::ScaffoldError;
use crate::fsys::Fsys;

enum CheckResult {
    Ok(String),
    Warning(String),
    Error(String),
}

/// Check that the current directory looks like a scaffoldable project.
///
/// Verifies the main file, the startup-call marker, the framework import,
/// the handler directory, the Go toolchain and the optional `scaffold.toml`.
/// Results are printed with colored indicators; always returns `Ok(())`.
pub fn run(fsys: &dyn Fsys, cfg: &ProjectConfig) -> Result<(), ScaffoldError> {
    println!("{}", "Doctor — checking project health".bold());
    println!();

    let mut issues = 0;
    let main_content = fsys
        .read_to_string(Path::new(&cfg.main_file))
        .unwrap_or_default();

    check(
        &format!("{} exists", cfg.main_file),
        || {
            if main_content.is_empty() {
                CheckResult::Error(format!("{} not found or empty", cfg.main_file))
            } else {
                CheckResult::Ok("Found".into())
            }
        },
        &mut issues,
    );

    check(
        "Startup-call marker",
        || {
            if main_content.contains(&cfg.start_marker) {
                CheckResult::Ok(format!("'{}' found", cfg.start_marker))
            } else {
                CheckResult::Error(format!(
                    "'{}' not found — route insertion would fail",
                    cfg.start_marker
                ))
            }
        },
        &mut issues,
    );

    check(
        "Framework import",
        || {
            if main_content.contains(&cfg.framework_import) {
                CheckResult::Ok(format!("'{}' found", cfg.framework_import))
            } else {
                CheckResult::Warning(format!(
                    "'{}' not imported — import injection would fail",
                    cfg.framework_import
                ))
            }
        },
        &mut issues,
    );

    check(
        "Handler directory",
        || match fsys.exists(Path::new(super::add::HANDLER_ROOT)) {
            Ok(true) => CheckResult::Ok("http/ found".into()),
            Ok(false) => CheckResult::Warning("http/ not found (no handlers scaffolded yet)".into()),
            Err(e) => CheckResult::Error(e.to_string()),
        },
        &mut issues,
    );

    check(
        "Go toolchain",
        || match Command::new("go").arg("version").output() {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
                CheckResult::Ok(version)
            }
            _ => CheckResult::Warning("go not found on PATH".into()),
        },
        &mut issues,
    );

    check(
        "Configuration file",
        || match fsys.exists(Path::new(crate::config::CONFIG_FILE)) {
            Ok(true) => CheckResult::Ok("scaffold.toml found".into()),
            Ok(false) => CheckResult::Ok("scaffold.toml not present (defaults apply)".into()),
            Err(e) => CheckResult::Error(e.to_string()),
        },
        &mut issues,
    );

    println!();
    if issues == 0 {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!("{}", format!("{issues} issue(s) found").yellow().bold());
    }

    Ok(())
}

fn check<F>(name: &str, f: F, issues: &mut usize)
where
    F: FnOnce() -> CheckResult,
{
    match f() {
        CheckResult::Ok(msg) => {
            println!("  {} {} — {}", "✓".green(), name, msg.dimmed());
        }
        CheckResult::Warning(msg) => {
            println!("  {} {} — {}", "!".yellow(), name, msg.yellow());
            *issues += 1;
        }
        CheckResult::Error(msg) => {
            println!("  {} {} — {}", "x".red(), name, msg.red());
            *issues += 1;
        }
    }
}
