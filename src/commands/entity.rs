use std::path::Path;

use dialoguer::Select;

use crate::config::ProjectConfig;
use crate::error::ScaffoldError;
use crate::fsys::Fsys;
use crate::mutate;
use crate::report::Reporter;

use super::templates::{self, entity};

/// Scaffolding layer of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Business logic plus a data model.
    Core,
    /// Aggregation of cores; no model file.
    Composite,
    /// HTTP-facing handler stub only.
    Consumer,
}

impl Layer {
    pub fn parse(token: &str) -> Result<Layer, ScaffoldError> {
        match token {
            "core" => Ok(Layer::Core),
            "composite" => Ok(Layer::Composite),
            "consumer" => Ok(Layer::Consumer),
            _ => Err(ScaffoldError::InvalidType(token.to_string())),
        }
    }
}

/// Scaffold the named entity at the given layer.
///
/// With `layer_spec` omitted the layer is chosen interactively. Directory
/// creation tolerates existing directories; the shared interface file is
/// append-only (repeated runs append duplicate declarations — a known
/// limitation), while per-entity template and model files are only written
/// when missing or empty.
pub fn run(
    fsys: &dyn Fsys,
    reporter: &Reporter,
    cfg: &ProjectConfig,
    layer_spec: Option<&str>,
    name: &str,
) -> Result<(), ScaffoldError> {
    let layer = match layer_spec {
        Some(token) => Layer::parse(token)?,
        None => prompt_layer()?,
    };

    let snake = templates::to_snake_case(name);
    let pascal = templates::to_pascal_case(&snake);

    match layer {
        Layer::Core => scaffold_interface_layer(fsys, reporter, cfg, "core", &snake, &pascal, true)?,
        Layer::Composite => {
            scaffold_interface_layer(fsys, reporter, cfg, "composite", &snake, &pascal, false)?
        }
        Layer::Consumer => scaffold_consumer(fsys, reporter, &snake)?,
    }

    reporter.success(&format!("Successfully created entity: {name}"));
    Ok(())
}

fn scaffold_interface_layer(
    fsys: &dyn Fsys,
    reporter: &Reporter,
    cfg: &ProjectConfig,
    layer_dir: &str,
    snake: &str,
    pascal: &str,
    with_model: bool,
) -> Result<(), ScaffoldError> {
    mutate::ensure_dir(fsys, Path::new(layer_dir))?;

    let interface_file = Path::new(layer_dir).join("interface.go");
    mutate::populate_file(
        fsys,
        &interface_file,
        &entity::interface_header(cfg, layer_dir),
        &entity::interface_block(cfg, pascal),
    )?;
    reporter.step(&format!(
        "Declared {} interface in {}",
        pascal,
        interface_file.display()
    ));

    let entity_dir = Path::new(layer_dir).join(snake);
    mutate::ensure_dir(fsys, &entity_dir)?;
    let entity_file = entity_dir.join(format!("{snake}.go"));
    write_or_skip(
        fsys,
        reporter,
        &entity_file,
        &entity::entity_file(snake, pascal),
    )?;

    if with_model {
        mutate::ensure_dir(fsys, Path::new("models"))?;
        let model_file = Path::new("models").join(format!("{snake}.go"));
        write_or_skip(fsys, reporter, &model_file, &entity::model_file(pascal))?;
    }
    Ok(())
}

fn scaffold_consumer(
    fsys: &dyn Fsys,
    reporter: &Reporter,
    snake: &str,
) -> Result<(), ScaffoldError> {
    mutate::ensure_dir(fsys, Path::new(super::add::HANDLER_ROOT))?;
    let entity_dir = Path::new(super::add::HANDLER_ROOT).join(snake);
    mutate::ensure_dir(fsys, &entity_dir)?;
    let stub_file = entity_dir.join(format!("{snake}.go"));
    write_or_skip(fsys, reporter, &stub_file, &entity::consumer_stub(snake))
}

fn write_or_skip(
    fsys: &dyn Fsys,
    reporter: &Reporter,
    file: &Path,
    contents: &str,
) -> Result<(), ScaffoldError> {
    if mutate::create_file_if_absent(fsys, file, contents)? {
        reporter.step(&format!("Created {}", file.display()));
    } else {
        reporter.warn(&format!(
            "{} already exists, leaving it unchanged",
            file.display()
        ));
    }
    Ok(())
}

fn prompt_layer() -> Result<Layer, ScaffoldError> {
    let choices = ["core", "composite", "consumer"];
    let idx = Select::new()
        .with_prompt("Entity layer")
        .items(&choices)
        .default(0)
        .interact()
        .map_err(|e| ScaffoldError::Other(format!("Layer prompt failed: {e}")))?;
    Layer::parse(choices[idx])
}
