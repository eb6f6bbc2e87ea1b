/// Errors produced by the scaffolding pipelines.
///
/// Every variant is terminal for the current invocation; nothing is retried.
/// Validation variants short-circuit before any file is touched, while `Io`
/// carries whatever the filesystem reported mid-mutation (earlier writes in
/// the pipeline stay committed).
#[derive(Debug)]
pub enum ScaffoldError {
    /// A requested HTTP method token is outside GET/PUT/POST/DELETE.
    InvalidMethod(String),
    /// The path contains a character outside the allowed grammar, or has no
    /// usable directory prefix.
    InvalidPath(String),
    /// Every requested method for the path is already registered.
    PathExists {
        path: String,
        method: String,
        file: String,
        line: usize,
    },
    /// The entity layer is not core, composite or consumer.
    InvalidType(String),
    /// A required anchor line (startup call or framework import) is missing
    /// from the main file.
    MarkerNotFound { file: String, marker: String },
    /// `scaffold.toml` exists but cannot be parsed.
    Config(String),
    Other(String),
    Io(std::io::Error),
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::InvalidMethod(name) => {
                write!(f, "Invalid method '{name}'. Supported: GET, PUT, POST, DELETE")
            }
            ScaffoldError::InvalidPath(path) => write!(f, "Invalid path '{path}'"),
            ScaffoldError::PathExists {
                path,
                method,
                file,
                line,
            } => write!(
                f,
                "Path '/{path}' already exists for {method} (registered at {file}:{line})"
            ),
            ScaffoldError::InvalidType(name) => {
                write!(
                    f,
                    "Invalid entity type '{name}'. Supported: core, composite, consumer"
                )
            }
            ScaffoldError::MarkerNotFound { file, marker } => {
                write!(f, "Marker '{marker}' not found in {file}")
            }
            ScaffoldError::Config(msg) => write!(f, "Config error: {msg}"),
            ScaffoldError::Other(msg) => write!(f, "{msg}"),
            ScaffoldError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        ScaffoldError::Io(err)
    }
}
