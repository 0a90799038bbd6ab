//! Generation errors.

use gangway_ir::ScalarKind;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for TypeScript emission.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions that abort a generation pass.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A scalar kind with no TypeScript projection reached the emitter.
    /// Aborting here keeps schema drift a build-time failure instead of a
    /// silently mis-typed client.
    #[error("no TypeScript type for scalar kind `{kind}` on {model}.{field}")]
    #[diagnostic(
        code(gangway::unsupported_scalar),
        help("only string, bool, integer and float fields can cross the client boundary")
    )]
    UnsupportedScalar {
        model: String,
        field: String,
        kind: ScalarKind,
    },
}
