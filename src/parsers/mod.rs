pub mod common;
pub mod typescript;

use anyhow::Result;
use std::path::Path;

/// An exported interface and the properties declared in its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub name: String,
    pub description: String,
    /// Name from the `extends` clause. Not resolved at parse time.
    pub parent: Option<String>,
    pub properties: Vec<PropertyRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    pub name: String,
    pub optional: bool,
    pub type_text: String,
    pub description: String,
}

impl InterfaceRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parent: None,
            properties: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_property(mut self, property: PropertyRecord) -> Self {
        self.properties.push(property);
        self
    }
}

impl PropertyRecord {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            type_text: type_text.into(),
            description: String::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

pub trait DeclarationParser {
    fn parse_source(&self, source: &str) -> Vec<InterfaceRecord>;

    fn parse_file(&self, file_path: &Path) -> Result<Vec<InterfaceRecord>> {
        let source = common::read_source(file_path)?;
        Ok(self.parse_source(&source))
    }

    fn dialect_name(&self) -> &str;
}
