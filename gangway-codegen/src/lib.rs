//! Shared code generation building blocks for the gangway client generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation primitives (CodeBuilder, Indent)
//! - [`renderable`] - Fragment representation decoupling AST nodes from output
//! - [`naming`] - Language naming conventions and reserved-word handling
//! - [`language`] - Generator traits and shared result types

pub mod builder;

mod language;
mod naming;
mod renderable;

pub use builder::{CodeBuilder, Indent};
pub use language::{ClientCodegen, GenerateResult, PreviewFile, TypeMapper};
pub use naming::NamingConvention;
pub use renderable::{CodeFragment, Renderable};
