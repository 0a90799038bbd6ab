//! Descriptor types for the gangway client generator.
//!
//! This crate provides the unified type definitions consumed by the code
//! generation pipeline. A server describes its request/response record types
//! and its routes with these descriptors; the generators project them into a
//! typed client surface.
//!
//! # Architecture
//!
//! ```text
//! Schema impls / builders → gangway-ir (descriptors) → codegen
//! ```
//!
//! The descriptor types are designed to be:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Self-contained (serde is the only dependency)
//! - Explicit: every model supplies its own field list, there is no hidden
//!   runtime introspection

mod model;
mod route;
mod types;

pub use model::{ExternalName, FieldDescriptor, ModelDescriptor, Schema, Tags};
pub use route::{HttpMethod, RouteDescriptor};
pub use types::{ScalarKind, TypeRef};
