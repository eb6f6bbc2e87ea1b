//! Path and method validation.
//!
//! Pure checks; nothing here touches the filesystem. Route paths are held to
//! the character grammar `[a-zA-Z/{}.~_-]+` — permissive enough for path
//! parameters and slash separators, strict enough to reject query strings
//! and spaces.

use crate::error::ScaffoldError;

/// Supported HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Get, Method::Put, Method::Post, Method::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }

    /// Name of the generated handler function for this method.
    pub fn handler_name(&self) -> &'static str {
        match self {
            Method::Get => "Index",
            Method::Put => "Update",
            Method::Post => "Create",
            Method::Delete => "Delete",
        }
    }

    pub fn parse(token: &str) -> Option<Method> {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "PUT" => Some(Method::Put),
            "POST" => Some(Method::Post),
            "DELETE" => Some(Method::Delete),
            _ => None,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether every character of `path` belongs to the allowed grammar.
pub fn valid_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '{' | '}' | '.' | '~' | '_' | '-'))
}

/// Strip leading and trailing slashes.
pub fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Directory prefix of `path`: everything before the first `{` parameter
/// marker, without a trailing separator.
pub fn path_directory(path: &str) -> &str {
    let dir = match path.find('{') {
        Some(idx) => &path[..idx],
        None => path,
    };
    dir.trim_end_matches('/')
}

/// Parse a comma-separated method spec into a deduplicated set.
///
/// An empty spec or the literal `all` (any case) expands to the full
/// supported set. Any token outside the supported set fails with
/// `InvalidMethod`.
pub fn parse_methods(spec: &str) -> Result<Vec<Method>, ScaffoldError> {
    let spec = spec.trim();
    if spec.is_empty() || spec.eq_ignore_ascii_case("all") {
        return Ok(Method::ALL.to_vec());
    }

    let mut methods = Vec::new();
    for token in spec.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match Method::parse(token) {
            Some(m) if !methods.contains(&m) => methods.push(m),
            Some(_) => {}
            None => return Err(ScaffoldError::InvalidMethod(token.to_string())),
        }
    }
    if methods.is_empty() {
        return Ok(Method::ALL.to_vec());
    }
    Ok(methods)
}
