//! Type references for model fields and route payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{ModelDescriptor, Schema};

/// Scalar kinds that can appear in a model field.
///
/// Not every kind has a projection in every target language; kinds without
/// one are rejected by the emitter at generation time rather than silently
/// mis-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    String,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// Raw byte blobs. No JSON projection.
    Bytes,
    /// A single character. No JSON projection.
    Char,
}

impl ScalarKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Bytes => "bytes",
            ScalarKind::Char => "char",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to the type of a field or payload.
///
/// `Record` carries the nested descriptor inline and is descended into during
/// emission; `Reference` names a model without carrying its shape and is
/// never descended into, which makes it the safe form for self-referential
/// and forward references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeRef {
    /// A scalar kind, mapped through the target language's type table.
    Scalar(ScalarKind),
    /// A nested record carried inline.
    Record(Box<ModelDescriptor>),
    /// A record referenced by name only.
    Reference(String),
    /// A collection of the element type.
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// A scalar reference.
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }

    /// A nested record reference carrying the descriptor inline.
    pub fn record(model: ModelDescriptor) -> Self {
        Self::Record(Box::new(model))
    }

    /// A nested record reference built from a [`Schema`] impl.
    pub fn record_of<T: Schema>() -> Self {
        Self::Record(Box::new(T::descriptor()))
    }

    /// A by-name record reference.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// An array of the element type.
    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    /// The referenced model name, if this reference points at a record.
    pub fn model_name(&self) -> Option<&str> {
        match self {
            TypeRef::Record(model) => Some(&model.name),
            TypeRef::Reference(name) => Some(name),
            TypeRef::Scalar(_) | TypeRef::Array(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldDescriptor;

    #[test]
    fn test_scalar_kind_as_str() {
        assert_eq!(ScalarKind::String.as_str(), "string");
        assert_eq!(ScalarKind::U64.as_str(), "u64");
        assert_eq!(ScalarKind::Bytes.as_str(), "bytes");
    }

    #[test]
    fn test_type_ref_constructors() {
        assert_eq!(
            TypeRef::scalar(ScalarKind::Bool),
            TypeRef::Scalar(ScalarKind::Bool)
        );
        assert_eq!(
            TypeRef::array(TypeRef::scalar(ScalarKind::I64)),
            TypeRef::Array(Box::new(TypeRef::Scalar(ScalarKind::I64)))
        );
    }

    #[test]
    fn test_model_name() {
        let user = ModelDescriptor::new("User")
            .field(FieldDescriptor::new("Name", TypeRef::scalar(ScalarKind::String)).json("name"));

        assert_eq!(TypeRef::record(user).model_name(), Some("User"));
        assert_eq!(TypeRef::reference("Post").model_name(), Some("Post"));
        assert_eq!(TypeRef::scalar(ScalarKind::F64).model_name(), None);
        assert_eq!(
            TypeRef::array(TypeRef::reference("Post")).model_name(),
            None
        );
    }
}
