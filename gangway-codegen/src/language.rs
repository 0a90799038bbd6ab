//! Language-agnostic generator traits and shared result types.

use std::path::Path;

use eyre::Result;
use gangway_ir::ScalarKind;

/// Trait for client code generators.
///
/// Implement this trait to derive a client surface for a new target language
/// from the same descriptor registries.
pub trait ClientCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render the generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Render and write all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Paths written, relative to the output directory
    pub written: Vec<String>,
    /// Routes that could not be emitted (e.g. unsupported methods)
    pub warnings: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping descriptor scalar kinds to language-specific types.
///
/// Returning `None` marks a kind as having no projection in the target
/// language; emitters treat that as fatal so schema drift is caught at build
/// time instead of being silently mis-coded.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a scalar kind to a language-specific type string
    fn scalar(&self, kind: ScalarKind) -> Option<&'static str>;
}
