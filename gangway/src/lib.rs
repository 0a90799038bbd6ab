//! Derive a typed TypeScript client from route and model descriptors.
//!
//! A server registers every request/response record type and every route
//! once at startup; [`Registry::generate`] then renders two deterministic
//! artifacts:
//!
//! - `model.ts` — one interface declaration per distinct registered model,
//!   nested and collection-valued records resolved recursively and emitted
//!   exactly once, in name-sorted order.
//! - `api.ts` — a fixed transport preamble followed by one typed async call
//!   function per route, in key-sorted order, with verb-specific request
//!   decomposition (path templating and query flattening for reads, opaque
//!   body passthrough for writes).
//!
//! # Example
//!
//! ```
//! use gangway::{
//!     FieldDescriptor, HttpMethod, ModelDescriptor, Registry, RouteDescriptor, ScalarKind,
//!     TypeRef,
//! };
//!
//! let request = ModelDescriptor::new("GetUserRequest").field(
//!     FieldDescriptor::new("ID", TypeRef::scalar(ScalarKind::String))
//!         .uri("id")
//!         .binding("required"),
//! );
//! let user = ModelDescriptor::new("User")
//!     .field(
//!         FieldDescriptor::new("Name", TypeRef::scalar(ScalarKind::String))
//!             .json("name")
//!             .binding("required"),
//!     )
//!     .field(FieldDescriptor::new("Age", TypeRef::scalar(ScalarKind::I64)).json("age,omitempty"));
//!
//! let mut registry = Registry::new();
//! registry.register_route(
//!     RouteDescriptor::new(HttpMethod::Get, "/users/:id")
//!         .request(request)
//!         .response(TypeRef::record(user))
//!         .handler("api::users::get_user_handler"),
//! );
//!
//! let sources = registry.generate()?;
//! assert!(sources.models.contains("export interface User {"));
//! assert!(sources.api.contains("export const getUser"));
//! # Ok::<(), gangway::Error>(())
//! ```
//!
//! Registration takes `&mut Registry`, generation takes `&Registry`: the
//! register-then-generate phase discipline is enforced by the borrow checker
//! rather than by convention.

mod registry;

pub use gangway_codegen::{ClientCodegen, GenerateResult, PreviewFile};
pub use gangway_codegen_typescript::{ApiEmitter, ApiSource, Error, ModelEmitter};
pub use gangway_ir::{
    ExternalName, FieldDescriptor, HttpMethod, ModelDescriptor, RouteDescriptor, ScalarKind,
    Schema, Tags, TypeRef,
};
pub use registry::{ClientSources, Registry};
