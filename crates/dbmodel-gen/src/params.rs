//! Generation parameters.

use std::path::PathBuf;

/// Settings shared by every table of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    /// Project directory; its name prefixes the generated namespaces and
    /// classes are written below `<project>/Generated/Db`.
    pub project_path: PathBuf,
    /// `;`-separated interface specification.
    pub entity_interface: Option<String>,
    /// `Namespace.ClassName` of the primary key attribute.
    pub primary_key_attribute: Option<String>,
    /// `Namespace.ClassName` of the auto-increment attribute.
    pub auto_increment_attribute: Option<String>,
    /// Class name suffix (e.g. `Db`).
    pub suffix: Option<String>,
}

impl Parameters {
    /// Creates parameters for a project with nothing else configured.
    #[must_use]
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            ..Self::default()
        }
    }

    /// Sets the interface specification.
    #[must_use]
    pub fn entity_interface(mut self, spec: impl Into<String>) -> Self {
        self.entity_interface = Some(spec.into());
        self
    }

    /// Sets the primary key attribute.
    #[must_use]
    pub fn primary_key_attribute(mut self, spec: impl Into<String>) -> Self {
        self.primary_key_attribute = Some(spec.into());
        self
    }

    /// Sets the auto-increment attribute.
    #[must_use]
    pub fn auto_increment_attribute(mut self, spec: impl Into<String>) -> Self {
        self.auto_increment_attribute = Some(spec.into());
        self
    }

    /// Sets the class name suffix.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}
