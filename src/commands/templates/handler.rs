//! Route fragments: handler stubs, registration lines, handler-file headers.
//!
//! Inputs are assumed pre-validated; these functions only assemble strings.
//! The stub body is a placeholder for the developer to complete by hand.

use crate::config::ProjectConfig;
use crate::validate::Method;

/// Package header for a newly created handler file.
pub fn file_header(cfg: &ProjectConfig, package: &str) -> String {
    format!(
        "package {package}\n\nimport \"{import}\"\n",
        import = cfg.framework_import
    )
}

/// Handler-function stub for `method` on `path`.
pub fn handler_stub(cfg: &ProjectConfig, method: Method, path: &str) -> String {
    format!(
        r#"
// {name} handles {method} /{path} requests.
func {name}(ctx *{pkg}.Context) (interface{{}}, error) {{
	// TODO: implement the handler
	return nil, nil
}}
"#,
        name = method.handler_name(),
        pkg = cfg.framework_package(),
    )
}

/// One-line registration statement binding `method` + `path` to the stub.
pub fn registration_line(cfg: &ProjectConfig, method: Method, path: &str, package: &str) -> String {
    format!(
        "\t{receiver}.{method}(\"/{path}\", {package}.{name})\n",
        receiver = cfg.receiver,
        method = method.as_str(),
        name = method.handler_name(),
    )
}
