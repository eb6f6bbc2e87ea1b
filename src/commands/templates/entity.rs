//! Entity-layer boilerplate: interface declarations, entity templates,
//! model files and the bare consumer stub.

use crate::config::ProjectConfig;

/// Header of a layer's shared interface file (`core/interface.go`,
/// `composite/interface.go`).
pub fn interface_header(cfg: &ProjectConfig, layer_package: &str) -> String {
    format!(
        "package {layer_package}\n\nimport \"{import}\"\n",
        import = cfg.framework_import
    )
}

/// Interface declaration appended for one entity.
///
/// The method set mirrors the four supported HTTP methods so a core entity
/// can back a scaffolded route one-to-one.
pub fn interface_block(cfg: &ProjectConfig, pascal_name: &str) -> String {
    format!(
        r#"
type {pascal_name} interface {{
	Get(ctx *{pkg}.Context) (interface{{}}, error)
	Create(ctx *{pkg}.Context) (interface{{}}, error)
	Update(ctx *{pkg}.Context) (interface{{}}, error)
	Delete(ctx *{pkg}.Context) (interface{{}}, error)
}}
"#,
        pkg = cfg.framework_package(),
    )
}

/// Per-entity template file (`core/<entity>/<entity>.go`).
pub fn entity_file(snake_name: &str, pascal_name: &str) -> String {
    format!(
        r#"package {snake_name}

type {pascal_name} struct {{
}}

func New() {pascal_name} {{
	return {pascal_name}{{}}
}}
"#
    )
}

/// Data-model file (`models/<entity>.go`), created for core entities only.
pub fn model_file(pascal_name: &str) -> String {
    format!("package models\n\ntype {pascal_name} struct {{\n\tID int `json:\"id\"`\n}}\n")
}

/// Bare package stub for a consumer entity (`http/<entity>/<entity>.go`).
pub fn consumer_stub(snake_name: &str) -> String {
    format!("package {snake_name}\n")
}
