//! TypeScript import builder.

use gangway_codegen::{CodeFragment, Renderable};

/// Builder for import statements.
#[derive(Debug, Clone)]
pub struct Import {
    module: String,
    named: Vec<String>,
    namespace: Option<String>,
}

impl Import {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            named: Vec::new(),
            namespace: None,
        }
    }

    /// Add a named binding.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import the whole module under an alias (`import * as alias from ...`).
    pub fn namespace(mut self, alias: impl Into<String>) -> Self {
        self.namespace = Some(alias.into());
        self
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let statement = match &self.namespace {
            Some(alias) => format!("import * as {} from \"{}\";", alias, self.module),
            None => format!(
                "import {{ {} }} from \"{}\";",
                self.named.join(", "),
                self.module
            ),
        };
        vec![CodeFragment::Line(statement)]
    }
}

#[cfg(test)]
mod tests {
    use gangway_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_namespace_import() {
        let code = CodeBuilder::typescript()
            .emit(&Import::new("./model").namespace("model"))
            .build();
        assert_eq!(code, "import * as model from \"./model\";\n");
    }

    #[test]
    fn test_named_import() {
        let code = CodeBuilder::typescript()
            .emit(&Import::new("./api").named("get").named("post"))
            .build();
        assert_eq!(code, "import { get, post } from \"./api\";\n");
    }
}
