//! Target-project conventions.
//!
//! The generator assumes a GoFr-style project layout: a `main.go` whose
//! `main` function builds the app in a receiver variable and ends with a
//! startup call. Every convention can be overridden through an optional
//! `scaffold.toml` at the project root.

use std::path::Path;

use crate::error::ScaffoldError;
use crate::fsys::Fsys;

pub const CONFIG_FILE: &str = "scaffold.toml";

/// Conventions of the target project's source tree.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Startup file at the project root.
    pub main_file: String,
    /// Import path of the framework; doubles as the anchor line for import
    /// injection.
    pub framework_import: String,
    /// Variable the app is bound to in `main` (`k := gofr.New()`).
    pub receiver: String,
    /// Token on the line registrations must precede.
    pub start_marker: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            main_file: "main.go".to_string(),
            framework_import: "gofr.dev/pkg/gofr".to_string(),
            receiver: "k".to_string(),
            start_marker: ".Start(".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Load overrides from `scaffold.toml` when present, defaults otherwise.
    ///
    /// A missing file or missing key falls back silently; a file that exists
    /// but does not parse is a terminal error.
    pub fn load(fsys: &dyn Fsys) -> Result<Self, ScaffoldError> {
        let mut cfg = ProjectConfig::default();
        let path = Path::new(CONFIG_FILE);
        if !fsys.exists(path)? {
            return Ok(cfg);
        }

        let content = fsys.read_to_string(path)?;
        let doc = content
            .parse::<toml_edit::DocumentMut>()
            .map_err(|e| ScaffoldError::Config(format!("{CONFIG_FILE}: {e}")))?;

        let read = |key: &str| doc.get(key).and_then(|item| item.as_str());
        if let Some(v) = read("main_file") {
            cfg.main_file = v.to_string();
        }
        if let Some(v) = read("framework_import") {
            cfg.framework_import = v.to_string();
        }
        if let Some(v) = read("receiver") {
            cfg.receiver = v.to_string();
        }
        if let Some(v) = read("start_marker") {
            cfg.start_marker = v.to_string();
        }
        Ok(cfg)
    }

    /// Go package name of the framework, derived from its import path.
    pub fn framework_package(&self) -> &str {
        self.framework_import
            .rsplit('/')
            .next()
            .unwrap_or(&self.framework_import)
    }
}
