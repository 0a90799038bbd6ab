//! TypeScript AST builders.
//!
//! Small composable builders for the handful of TypeScript constructs the
//! emitters produce: interfaces, arrow functions, and imports. Each builds
//! [`CodeFragment`](gangway_codegen::CodeFragment)s so nodes nest freely.

mod fns;
mod imports;
mod interface;

pub use fns::{ArrowFn, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
