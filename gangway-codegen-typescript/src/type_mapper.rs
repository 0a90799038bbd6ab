//! TypeScript type mapper implementation.

use gangway_codegen::TypeMapper;
use gangway_ir::ScalarKind;

/// TypeScript type mapper implementation.
///
/// The table is closed on purpose: kinds outside it return `None` and the
/// emitters abort, so a new scalar kind cannot reach generated clients
/// without an explicit mapping decision.
pub struct TypeScriptTypes;

impl TypeMapper for TypeScriptTypes {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn scalar(&self, kind: ScalarKind) -> Option<&'static str> {
        match kind {
            ScalarKind::String => Some("string"),
            ScalarKind::Bool => Some("boolean"),
            ScalarKind::I8
            | ScalarKind::I16
            | ScalarKind::I32
            | ScalarKind::I64
            | ScalarKind::U8
            | ScalarKind::U16
            | ScalarKind::U32
            | ScalarKind::U64
            | ScalarKind::F32
            | ScalarKind::F64 => Some("number"),
            ScalarKind::Bytes | ScalarKind::Char => None,
        }
    }
}
