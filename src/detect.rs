//! Duplicate route detection.
//!
//! Registrations are always emitted in one canonical shape
//! (`k.GET("/path", pkg.Handler)`), so an exact textual scan for
//! `.METHOD("/path",` is enough to decide whether a route already exists.
//! This is deliberately not a parser: a registration hand-edited into a
//! different shape will not be recognized, which is a documented limitation
//! of the tool.

use crate::validate::Method;

/// Where an existing registration was found.
#[derive(Debug, Clone)]
pub struct DuplicateRecord {
    /// 1-based line number.
    pub line: usize,
    pub file: String,
    pub method: Method,
    pub path: String,
}

/// Scan `content` line by line for an existing `(method, path)` registration.
///
/// Returns the 1-based line number of the first match. The caller passes the
/// full main-file content; a missing main file is treated upstream as "no
/// prior registrations".
pub fn find_route(content: &str, method: Method, path: &str) -> Option<usize> {
    let token = search_token(method, path);
    content
        .lines()
        .position(|line| line.contains(&token))
        .map(|idx| idx + 1)
}

fn search_token(method: Method, path: &str) -> String {
    format!(".{}(\"/{}\",", method.as_str(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN: &str = "package main\n\nfunc main() {\n\tk := gofr.New()\n\n\tk.GET(\"/hello\", hello.Index)\n\tk.Start()\n}\n";

    #[test]
    fn finds_existing_registration_with_line_number() {
        assert_eq!(find_route(MAIN, Method::Get, "hello"), Some(6));
    }

    #[test]
    fn different_method_on_same_path_is_not_a_duplicate() {
        assert_eq!(find_route(MAIN, Method::Post, "hello"), None);
    }

    #[test]
    fn different_path_is_not_a_duplicate() {
        assert_eq!(find_route(MAIN, Method::Get, "hell"), None);
    }

    #[test]
    fn matches_paths_with_parameters() {
        let content = "\tk.DELETE(\"/order/{id}\", order.Delete)\n";
        assert_eq!(find_route(content, Method::Delete, "order/{id}"), Some(1));
    }

    #[test]
    fn empty_content_has_no_routes() {
        assert_eq!(find_route("", Method::Get, "hello"), None);
    }
}
