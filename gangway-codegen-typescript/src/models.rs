//! Model registry and declaration emitter.

use std::collections::BTreeSet;

use gangway_codegen::TypeMapper;
use gangway_ir::{FieldDescriptor, ModelDescriptor, TypeRef};
use indexmap::IndexMap;

use crate::ast::{Interface, InterfaceField};
use crate::error::{Error, Result};
use crate::type_mapper::TypeScriptTypes;

/// Accumulates distinct named record types and emits one `export interface`
/// declaration per type.
///
/// Registration and emission are two separate phases: the registry fills up
/// during route registration and is walked read-only by [`to_source`].
///
/// [`to_source`]: ModelEmitter::to_source
#[derive(Default)]
pub struct ModelEmitter {
    models: IndexMap<String, ModelDescriptor>,
}

impl ModelEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model.
    ///
    /// Anonymous shapes are dropped. The first shape registered under a name
    /// wins; later registrations under the same name are ignored, so
    /// registering the same model once per route stays idempotent. Two
    /// structurally different models sharing a name collide silently — a
    /// known constraint of the name-keyed registry.
    pub fn add(&mut self, model: ModelDescriptor) {
        if model.is_anonymous() {
            return;
        }
        self.models.entry(model.name.clone()).or_insert(model);
    }

    /// Register the record reachable through a type reference, if any.
    ///
    /// Array wrappers are unwrapped to their element; scalars and by-name
    /// references are no-ops.
    pub fn add_type(&mut self, ty: &TypeRef) {
        match ty {
            TypeRef::Record(model) => self.add((**model).clone()),
            TypeRef::Array(element) => self.add_type(element),
            TypeRef::Scalar(_) | TypeRef::Reference(_) => {}
        }
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Render every registered model in ascending name order, blank lines
    /// between blocks.
    ///
    /// Emission is recursive: records nested in fields (directly or through
    /// arrays) are emitted ahead of their container. A global memo guarantees
    /// each name appears exactly once no matter how many models reach it.
    pub fn to_source(&self) -> Result<String> {
        let mut entries: Vec<(&String, &ModelDescriptor)> = self.models.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut emitted = BTreeSet::new();
        let mut blocks = Vec::new();
        for (_, model) in entries {
            self.emit_model(model, &mut emitted, &mut blocks)?;
        }
        Ok(blocks.join("\n"))
    }

    fn emit_model(
        &self,
        model: &ModelDescriptor,
        emitted: &mut BTreeSet<String>,
        out: &mut Vec<String>,
    ) -> Result<()> {
        if model.is_anonymous() || emitted.contains(&model.name) {
            return Ok(());
        }
        // Recorded before the field walk so a self-referential field resolves
        // to the bare name instead of re-descending.
        emitted.insert(model.name.clone());

        let mut nested = Vec::new();
        let mut interface = Interface::new(&model.name);
        for field in &model.fields {
            // No recognized name tag: the field stays server-side.
            let Some(external) = field.tags.external() else {
                continue;
            };
            let ty = self.field_type(model, field, &field.ty, emitted, &mut nested)?;
            let mut rendered = InterfaceField::new(external.name, ty);
            if external.optional {
                rendered = rendered.optional();
            }
            interface = interface.field_with(rendered);
        }

        out.extend(nested);
        out.push(interface.build());
        Ok(())
    }

    fn field_type(
        &self,
        model: &ModelDescriptor,
        field: &FieldDescriptor,
        ty: &TypeRef,
        emitted: &mut BTreeSet<String>,
        out: &mut Vec<String>,
    ) -> Result<String> {
        match ty {
            TypeRef::Scalar(kind) => TypeScriptTypes
                .scalar(*kind)
                .map(str::to_owned)
                .ok_or_else(|| Error::UnsupportedScalar {
                    model: model.name.clone(),
                    field: field.name.clone(),
                    kind: *kind,
                }),
            TypeRef::Record(nested) => {
                self.emit_model(nested, emitted, out)?;
                Ok(nested.name.clone())
            }
            TypeRef::Reference(name) => {
                if let Some(known) = self.models.get(name) {
                    self.emit_model(known, emitted, out)?;
                }
                Ok(name.clone())
            }
            TypeRef::Array(element) => Ok(format!(
                "{}[]",
                self.field_type(model, field, element, emitted, out)?
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use gangway_ir::ScalarKind;

    use super::*;

    fn user() -> ModelDescriptor {
        ModelDescriptor::new("User")
            .field(
                FieldDescriptor::new("Name", TypeRef::scalar(ScalarKind::String))
                    .json("name")
                    .binding("required"),
            )
            .field(FieldDescriptor::new("Age", TypeRef::scalar(ScalarKind::I64)).json("age,omitempty"))
    }

    #[test]
    fn test_anonymous_registration_is_a_noop() {
        let mut emitter = ModelEmitter::new();
        emitter.add(ModelDescriptor::anonymous());
        assert!(emitter.is_empty());
    }

    #[test]
    fn test_first_registration_wins() {
        let mut emitter = ModelEmitter::new();
        emitter.add(user());
        emitter.add(ModelDescriptor::new("User"));
        assert_eq!(emitter.len(), 1);

        let source = emitter.to_source().unwrap();
        assert!(source.contains("name: string;"));
    }

    #[test]
    fn test_add_type_unwraps_arrays() {
        let mut emitter = ModelEmitter::new();
        emitter.add_type(&TypeRef::array(TypeRef::record(user())));
        assert_eq!(emitter.len(), 1);

        emitter.add_type(&TypeRef::scalar(ScalarKind::String));
        emitter.add_type(&TypeRef::reference("Ghost"));
        assert_eq!(emitter.len(), 1);
    }

    #[test]
    fn test_unsupported_scalar_aborts() {
        let mut emitter = ModelEmitter::new();
        emitter.add(
            ModelDescriptor::new("Blob")
                .field(FieldDescriptor::new("Data", TypeRef::scalar(ScalarKind::Bytes)).json("data")),
        );

        let err = emitter.to_source().unwrap_err();
        let Error::UnsupportedScalar { model, field, kind } = err;
        assert_eq!(model, "Blob");
        assert_eq!(field, "Data");
        assert_eq!(kind, ScalarKind::Bytes);
    }

    #[test]
    fn test_self_reference_resolves_by_name() {
        let mut emitter = ModelEmitter::new();
        emitter.add(
            ModelDescriptor::new("Category")
                .field(
                    FieldDescriptor::new("Name", TypeRef::scalar(ScalarKind::String)).json("name"),
                )
                .field(
                    FieldDescriptor::new(
                        "Children",
                        TypeRef::array(TypeRef::reference("Category")),
                    )
                    .json("children,omitempty"),
                ),
        );

        let source = emitter.to_source().unwrap();
        assert_eq!(source.matches("export interface Category {").count(), 1);
        assert!(source.contains("children?: Category[];"));
    }
}
