//! TypeScript arrow function builder.

use gangway_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for `const name = async (...) => { ... };` style functions.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    name: String,
    exported: bool,
    is_async: bool,
    generic: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl ArrowFn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            is_async: false,
            generic: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Add a type parameter.
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generic = Some(param.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a fragment to the function body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Add several fragments to the function body.
    pub fn body_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }

    fn signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let generic = self
            .generic
            .as_ref()
            .map(|param| format!("<{}>", param))
            .unwrap_or_default();

        let params = self
            .params
            .iter()
            .map(|p| {
                let optional = if p.optional { "?" } else { "" };
                format!("{}{}: {}", p.name, optional, p.ty)
            })
            .collect::<Vec<_>>()
            .join(", ");

        let returns = self
            .return_type
            .as_ref()
            .map(|ty| format!(": {}", ty))
            .unwrap_or_default();

        format!(
            "{}const {} = {}{}({}){} => {{",
            export, self.name, async_kw, generic, params, returns
        )
    }
}

impl Renderable for ArrowFn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: self.signature(),
            body: self.body.clone(),
            close: Some("};".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = ArrowFn::new("greet").body_line("return;").build();
        assert_eq!(f, "export const greet = () => {\n  return;\n};\n");
    }

    #[test]
    fn test_async_generic_fn() {
        let f = ArrowFn::new("get")
            .async_()
            .generic("T")
            .param(Param::new("host", "string"))
            .returns("Promise<T>")
            .build();
        assert!(f.contains("export const get = async <T>(host: string): Promise<T> => {"));
    }

    #[test]
    fn test_optional_param_is_last() {
        let f = ArrowFn::new("call")
            .param(Param::new("host", "string"))
            .param(Param::new("headers", "any").optional())
            .build();
        assert!(f.contains("(host: string, headers?: any)"));
    }

    #[test]
    fn test_private_fn() {
        let f = ArrowFn::new("helper").private().build();
        assert!(f.starts_with("const helper"));
        assert!(!f.contains("export"));
    }

    #[test]
    fn test_nested_body_fragment() {
        let f = ArrowFn::new("list")
            .body_line("return get(host, \"/items\", [")
            .body_fragment(CodeFragment::indent(vec![CodeFragment::line(
                "[\"page\", page.toString()],",
            )]))
            .body_line("], headers);")
            .build();
        assert_eq!(
            f,
            "export const list = () => {\n  return get(host, \"/items\", [\n    [\"page\", page.toString()],\n  ], headers);\n};\n"
        );
    }
}
