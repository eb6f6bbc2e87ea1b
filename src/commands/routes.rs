use colored::Colorize;

use crate::config::ProjectConfig;
use crate::error::ScaffoldError;
use crate::fsys::Fsys;

/// One registration extracted from the main file.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
    pub handler: String,
    /// 1-based line number in the main file.
    pub line: usize,
}

/// List all routes registered in the main file.
pub fn run(fsys: &dyn Fsys, cfg: &ProjectConfig) -> Result<(), ScaffoldError> {
    let content = fsys.read_to_string(std::path::Path::new(&cfg.main_file))?;
    let routes = scan(&content, &cfg.receiver);

    if routes.is_empty() {
        println!("{}", "No routes found.".dimmed());
        return Ok(());
    }

    println!("{}", "Registered routes:".bold());
    println!();
    println!(
        "  {:<8} {:<35} {:<25} {}",
        "METHOD".dimmed(),
        "PATH".dimmed(),
        "HANDLER".dimmed(),
        "LINE".dimmed()
    );
    println!("  {}", "-".repeat(76).dimmed());

    for route in &routes {
        let method_colored = match route.method.as_str() {
            "GET" => route.method.green(),
            "POST" => route.method.blue(),
            "PUT" => route.method.yellow(),
            "DELETE" => route.method.red(),
            _ => route.method.normal(),
        };
        println!(
            "  {:<8} {:<35} {:<25} {}:{}",
            method_colored, route.path, route.handler, cfg.main_file, route.line,
        );
    }

    println!();
    println!("  {} routes total", routes.len());
    Ok(())
}

/// Extract registration lines of the shape `k.GET("/path", pkg.Handler)`.
///
/// Same textual idiom the duplicate detector matches on; commented-out or
/// reshaped registrations are not recognized.
pub fn scan(content: &str, receiver: &str) -> Vec<RouteEntry> {
    let mut routes = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        for method in ["GET", "PUT", "POST", "DELETE"] {
            let pattern = format!("{receiver}.{method}(\"");
            if !trimmed.starts_with(&pattern) {
                continue;
            }
            let Some(path) = extract_quoted(trimmed) else {
                continue;
            };
            let handler = trimmed
                .rfind(", ")
                .and_then(|i| trimmed[i + 2..].strip_suffix(')'))
                .unwrap_or("?")
                .to_string();
            routes.push(RouteEntry {
                method: method.to_string(),
                path,
                handler,
                line: idx + 1,
            });
        }
    }
    routes
}

fn extract_quoted(line: &str) -> Option<String> {
    let start = line.find('"')?;
    let rest = &line[start + 1..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}
