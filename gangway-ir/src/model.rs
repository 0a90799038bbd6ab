//! Model and field descriptors.

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

/// A named record type whose shape is projected into a client declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Declared type name. An empty name marks an anonymous shape, which
    /// registries drop as a no-op.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// An unnamed shape. Registries ignore it.
    pub fn anonymous() -> Self {
        Self::new("")
    }

    /// Append a field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// One field of a model: declared name, type reference, and tag metadata.
///
/// The declared name is used for diagnostics only; the name that crosses the
/// client boundary always comes from the tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeRef,
    pub tags: Tags,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            tags: Tags::default(),
        }
    }

    /// Set the primary external-name tag.
    pub fn json(mut self, tag: impl Into<String>) -> Self {
        self.tags.json = Some(tag.into());
        self
    }

    /// Set the query-binding tag.
    pub fn form(mut self, tag: impl Into<String>) -> Self {
        self.tags.form = Some(tag.into());
        self
    }

    /// Set the path-parameter tag.
    pub fn uri(mut self, tag: impl Into<String>) -> Self {
        self.tags.uri = Some(tag.into());
        self
    }

    /// Set the validation-binding tag.
    pub fn binding(mut self, tag: impl Into<String>) -> Self {
        self.tags.binding = Some(tag.into());
        self
    }
}

/// Layered tag metadata of one field, kept exactly as declared — markers and
/// separators included. Resolution into clean external names happens here so
/// every emitter applies the same rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tags {
    pub json: Option<String>,
    pub form: Option<String>,
    pub uri: Option<String>,
    pub binding: Option<String>,
}

impl Tags {
    /// Resolve the external field name and its optionality.
    ///
    /// Tag namespaces are tried in fixed priority order (json, form, uri);
    /// the first non-empty value wins. Returns `None` when no namespace has a
    /// value, in which case the field is omitted from output entirely.
    ///
    /// A field is optional when the chosen tag value carries the `omitempty`
    /// marker, or when the binding tag does not mark it `required` — absence
    /// of a binding tag defaults toward optional.
    pub fn external(&self) -> Option<ExternalName> {
        let raw = [
            self.json.as_deref(),
            self.form.as_deref(),
            self.uri.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|tag| !tag.is_empty())?;

        let required = self
            .binding
            .as_deref()
            .is_some_and(|binding| binding.contains("required"));
        Some(ExternalName {
            name: clean(raw),
            optional: raw.contains("omitempty") || !required,
        })
    }

    /// The clean query key, when the field carries a form tag.
    pub fn form_name(&self) -> Option<String> {
        self.form.as_deref().filter(|tag| !tag.is_empty()).map(clean)
    }

    /// The clean path-parameter name, when the field carries a uri tag.
    pub fn uri_name(&self) -> Option<String> {
        self.uri.as_deref().filter(|tag| !tag.is_empty()).map(clean)
    }

    /// Whether the field binds to a path placeholder.
    pub fn is_path_param(&self) -> bool {
        self.uri.as_deref().is_some_and(|tag| !tag.is_empty())
    }
}

/// Strip the omit-if-empty marker and separator punctuation from a tag value.
fn clean(tag: &str) -> String {
    tag.replace("omitempty", "").replace(',', "")
}

/// An external field name resolved from tag metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalName {
    pub name: String,
    pub optional: bool,
}

/// Supplies the descriptor for one model type.
///
/// Implementing this trait is how a server-side record type describes its own
/// shape to the generator:
///
/// ```
/// use gangway_ir::{FieldDescriptor, ModelDescriptor, ScalarKind, Schema, TypeRef};
///
/// struct User;
///
/// impl Schema for User {
///     fn descriptor() -> ModelDescriptor {
///         ModelDescriptor::new("User")
///             .field(
///                 FieldDescriptor::new("Name", TypeRef::scalar(ScalarKind::String))
///                     .json("name")
///                     .binding("required"),
///             )
///             .field(
///                 FieldDescriptor::new("Age", TypeRef::scalar(ScalarKind::I64))
///                     .json("age,omitempty"),
///             )
///     }
/// }
/// ```
pub trait Schema {
    fn descriptor() -> ModelDescriptor;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalarKind;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, TypeRef::scalar(ScalarKind::String))
    }

    #[test]
    fn test_anonymous_model() {
        assert!(ModelDescriptor::anonymous().is_anonymous());
        assert!(!ModelDescriptor::new("User").is_anonymous());
    }

    #[test]
    fn test_external_priority_order() {
        let tags = field("F").json("j").form("f").uri("u").tags;
        assert_eq!(tags.external().map(|e| e.name), Some("j".to_string()));

        let tags = field("F").form("f").uri("u").tags;
        assert_eq!(tags.external().map(|e| e.name), Some("f".to_string()));

        let tags = field("F").uri("u").tags;
        assert_eq!(tags.external().map(|e| e.name), Some("u".to_string()));
    }

    #[test]
    fn test_external_skips_empty_values() {
        let tags = field("F").json("").form("fallback").tags;
        assert_eq!(
            tags.external().map(|e| e.name),
            Some("fallback".to_string())
        );
    }

    #[test]
    fn test_untagged_field_has_no_external_name() {
        assert_eq!(field("F").tags.external(), None);
    }

    #[test]
    fn test_omitempty_marker_forces_optional() {
        let tags = field("F").json("age,omitempty").binding("required").tags;
        let external = tags.external().unwrap();
        assert_eq!(external.name, "age");
        assert!(external.optional);
    }

    #[test]
    fn test_required_binding_without_marker_is_required() {
        let tags = field("F").json("name").binding("required").tags;
        let external = tags.external().unwrap();
        assert_eq!(external.name, "name");
        assert!(!external.optional);
    }

    #[test]
    fn test_missing_binding_defaults_to_optional() {
        let external = field("F").json("name").tags.external().unwrap();
        assert!(external.optional);
    }

    #[test]
    fn test_form_and_uri_names_are_cleaned() {
        let tags = field("F").form("query,omitempty").uri("id,").tags;
        assert_eq!(tags.form_name(), Some("query".to_string()));
        assert_eq!(tags.uri_name(), Some("id".to_string()));
        assert!(tags.is_path_param());
    }
}
