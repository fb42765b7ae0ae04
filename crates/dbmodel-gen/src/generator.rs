//! Writes one class file per table of a schema.
//!
//! Classes for a schema loaded from `<scripts>/Global` land in
//! `<project>/Generated/Db/Global/<ClassName>.cs`, in the namespace
//! `<project name>.Generated.Db.Global`. The output directory is recreated on
//! every run so that classes of dropped tables disappear.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dbmodel_core::{class_name, generate_class, Schema, Table};
use tracing::{debug, info, warn};

use crate::error::{GenerateError, Result};
use crate::params::Parameters;

/// Source of one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    /// Table the class was generated for.
    pub table: String,
    /// Class name, also the file stem.
    pub class_name: String,
    /// Generated C# source.
    pub content: String,
}

impl GeneratedClass {
    /// File name of the class (`UserProfileDb.cs`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.cs", self.class_name)
    }
}

/// Reads a schema from a JSON file.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|source| GenerateError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

/// Last path component, as used for namespace segments.
fn last_segment(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| GenerateError::MissingNamespace(path.to_path_buf()))
}

/// Namespace of the classes generated for `schema`.
pub fn class_namespace(schema: &Schema, parameters: &Parameters) -> Result<String> {
    let project = last_segment(&parameters.project_path)?;
    let scripts = last_segment(&schema.script_directory)?;
    Ok(format!("{project}.Generated.Db.{scripts}"))
}

/// Directory receiving the classes generated for `schema`.
pub fn output_directory(schema: &Schema, parameters: &Parameters) -> Result<PathBuf> {
    let scripts = last_segment(&schema.script_directory)?;
    Ok(parameters
        .project_path
        .join("Generated")
        .join("Db")
        .join(scripts))
}

/// Generates the class for a single table.
pub fn render_table(table: &Table, ns: &str, parameters: &Parameters) -> Result<GeneratedClass> {
    let content = generate_class(
        ns,
        table,
        parameters.entity_interface.as_deref(),
        parameters.primary_key_attribute.as_deref(),
        parameters.auto_increment_attribute.as_deref(),
        parameters.suffix.as_deref(),
    )?;
    Ok(GeneratedClass {
        table: table.name.clone(),
        class_name: class_name(table, parameters.suffix.as_deref()),
        content,
    })
}

/// Generates the classes for every table without touching the file system.
pub fn render(schema: &Schema, parameters: &Parameters) -> Result<Vec<GeneratedClass>> {
    if schema.tables.is_empty() {
        return Ok(Vec::new());
    }

    let ns = class_namespace(schema, parameters)?;
    schema
        .tables
        .iter()
        .map(|table| render_table(table, &ns, parameters))
        .collect()
}

/// Generates and writes the classes for every table of `schema`.
///
/// Every class is rendered before anything is written, so a bad
/// specification leaves the previous output untouched. Returns the written
/// files in table order.
///
/// Files are written as UTF-8 without a byte-order mark, byte for byte the
/// text returned by [`render`]. Output of tools writing a BOM will differ in
/// its first three bytes.
pub fn generate(schema: &Schema, parameters: &Parameters) -> Result<Vec<PathBuf>> {
    if schema.tables.is_empty() {
        warn!(
            "No tables found in '{}', nothing generated",
            schema.script_directory.display()
        );
        return Ok(Vec::new());
    }

    let classes = render(schema, parameters)?;
    let generated_path = output_directory(schema, parameters)?;

    match fs::remove_dir_all(&generated_path) {
        Ok(()) => debug!("Removed {}", generated_path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(&generated_path)?;

    let mut written = Vec::with_capacity(classes.len());
    for class in classes {
        let output_file = generated_path.join(class.file_name());
        fs::write(&output_file, &class.content)?;
        info!("Table '{}' -> {}", class.table, output_file.display());
        written.push(output_file);
    }

    Ok(written)
}
