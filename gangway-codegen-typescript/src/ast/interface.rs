//! TypeScript interface builder.

use gangway_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    generic: Option<String>,
    fields: Vec<InterfaceField>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generic: None,
            fields: Vec::new(),
            exported: true,
        }
    }

    /// Add a type parameter.
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generic = Some(param.into());
        self
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional());
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let generic = self
            .generic
            .as_ref()
            .map(|param| format!("<{}>", param))
            .unwrap_or_default();
        format!("{}interface {}{}", export, self.name, generic)
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .map(|field| {
                let optional = if field.optional { "?" } else { "" };
                CodeFragment::Line(format!("{}{}: {};", field.name, optional, field.ty))
            })
            .collect()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            vec![CodeFragment::Line(format!("{} {{}}", self.header()))]
        } else {
            vec![CodeFragment::Block {
                header: format!("{} {{", self.header()),
                body: self.fields_to_fragments(),
                close: Some("}".to_string()),
            }]
        }
    }
}
