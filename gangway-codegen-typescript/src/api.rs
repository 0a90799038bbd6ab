//! Route registry and typed call function emitter.

use gangway_codegen::{CodeFragment, TypeMapper};
use gangway_ir::{HttpMethod, RouteDescriptor, TypeRef};
use indexmap::IndexMap;

use crate::ast::{ArrowFn, Param};
use crate::error::{Error, Result};
use crate::naming::TS_NAMING;
use crate::preamble;
use crate::type_mapper::TypeScriptTypes;

/// The synthetic suffix registration call sites carry on handler factory
/// identities; stripped before deriving the client function name.
const HANDLER_SUFFIX: &str = "_handler";

/// Rendered client source plus the routes that could not be emitted.
#[derive(Debug)]
pub struct ApiSource {
    pub source: String,
    pub warnings: Vec<String>,
}

/// Accumulates route descriptors and emits one exported async function per
/// route, prefixed by the fixed transport preamble.
#[derive(Default)]
pub struct ApiEmitter {
    routes: IndexMap<String, RouteDescriptor>,
}

impl ApiEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route.
    ///
    /// Routes sharing a `(method, path)` key overwrite each other, last
    /// write wins. Path syntax is not validated here.
    pub fn add(&mut self, route: RouteDescriptor) {
        self.routes.insert(route.key(), route);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Render the client file: preamble plus one function per route,
    /// ascending by `(method, path)` key.
    ///
    /// Routes with methods outside GET/POST/PUT/DELETE contribute a warning
    /// and no output; the rest of the file is unaffected.
    pub fn to_source(&self) -> Result<ApiSource> {
        let mut entries: Vec<(&String, &RouteDescriptor)> = self.routes.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut file = preamble::code_file();
        let mut warnings = Vec::new();
        for (_, route) in entries {
            match route.method {
                HttpMethod::Get => file = file.add(self.read_fn(route)?),
                HttpMethod::Post => file = file.add(self.write_fn(route, "post")?),
                HttpMethod::Put => file = file.add(self.write_fn(route, "put")?),
                HttpMethod::Delete => file = file.add(self.write_fn(route, "del")?),
                method => warnings.push(format!(
                    "skipping {} {}: no client emission for this method",
                    method, route.path
                )),
            }
        }
        Ok(ApiSource {
            source: file.render(),
            warnings,
        })
    }

    /// Emit a GET route: path templating from uri-tagged fields, query list
    /// from form-tagged fields plus pagination/sort pairs.
    fn read_fn(&self, route: &RouteDescriptor) -> Result<ArrowFn> {
        let request = route.request.as_ref().filter(|model| !model.is_anonymous());
        let response = self.response_type(route)?;

        let mut path_params = Vec::new();
        let mut query: Vec<(String, String)> = Vec::new();
        if let Some(request) = request {
            for field in &request.fields {
                if let Some(name) = field.tags.uri_name() {
                    path_params.push(name);
                }
            }
            for field in &request.fields {
                // Path-parameter fields never feed the query list.
                if field.tags.is_path_param() {
                    continue;
                }
                if let Some(name) = field.tags.form_name() {
                    query.push((name.clone(), format!("req.{}", name)));
                }
            }
        }
        if route.pagination {
            query.push(("page".to_string(), "page.toString()".to_string()));
            query.push(("size".to_string(), "size.toString()".to_string()));
        }
        if route.sort {
            query.push(("sortBy".to_string(), "sortBy.toString()".to_string()));
            query.push(("asc".to_string(), "asc ? \"true\" : \"false\"".to_string()));
        }

        let mut function = ArrowFn::new(function_name(&route.handler))
            .async_()
            .param(Param::new("host", "string"));
        if let Some(request) = request {
            function = function.param(Param::new("req", format!("model.{}", request.name)));
        }
        if route.pagination {
            function = function
                .param(Param::new("page", "number"))
                .param(Param::new("size", "number"));
        }
        if route.sort {
            function = function
                .param(Param::new("sortBy", "string"))
                .param(Param::new("asc", "boolean"));
        }
        function = function
            .param(Param::new("headers", "any").optional())
            .returns(format!("Promise<[Response<{}> | null, number]>", response));

        let path = path_expression(&route.path, &path_params);
        if query.is_empty() {
            // The explicit undefined keeps headers out of the params slot.
            function = function.body_line(format!(
                "return get<{}>(host, {}, undefined, headers);",
                response, path
            ));
        } else {
            function = function.body_line(format!("return get<{}>(host, {}, [", response, path));
            let pairs = query
                .iter()
                .map(|(key, value)| CodeFragment::line(format!("[\"{}\", {}],", key, value)))
                .collect();
            function = function
                .body_fragment(CodeFragment::indent(pairs))
                .body_line("], headers);");
        }
        Ok(function)
    }

    /// Emit a POST/PUT/DELETE route: literal path, request passed wholesale
    /// as the body argument.
    fn write_fn(&self, route: &RouteDescriptor, verb: &str) -> Result<ArrowFn> {
        let request = route.request.as_ref().filter(|model| !model.is_anonymous());
        let response = self.response_type(route)?;

        let mut function = ArrowFn::new(function_name(&route.handler))
            .async_()
            .param(Param::new("host", "string"));
        if let Some(request) = request {
            function = function.param(Param::new("req", format!("model.{}", request.name)));
        }
        let body = if request.is_some() { "req" } else { "undefined" };
        function = function
            .param(Param::new("headers", "any").optional())
            .returns(format!("Promise<[Response<{}> | null, number]>", response))
            .body_line(format!(
                "return {}<{}>(host, \"{}\", {}, headers);",
                verb, response, route.path, body
            ));
        Ok(function)
    }

    fn response_type(&self, route: &RouteDescriptor) -> Result<String> {
        match &route.response {
            None => Ok("null".to_string()),
            Some(ty) => self.type_expr(route, ty),
        }
    }

    fn type_expr(&self, route: &RouteDescriptor, ty: &TypeRef) -> Result<String> {
        match ty {
            TypeRef::Scalar(kind) => TypeScriptTypes
                .scalar(*kind)
                .map(str::to_owned)
                .ok_or_else(|| Error::UnsupportedScalar {
                    model: route.key(),
                    field: "response".to_string(),
                    kind: *kind,
                }),
            TypeRef::Record(model) => Ok(format!("model.{}", model.name)),
            TypeRef::Reference(name) => Ok(format!("model.{}", name)),
            TypeRef::Array(element) => Ok(format!("{}[]", self.type_expr(route, element)?)),
        }
    }
}

/// Derive the exported function name from a handler identity: final path
/// segment, synthetic suffix stripped, lowerCamelCase, reserved words
/// escaped.
fn function_name(handler: &str) -> String {
    let last = handler.rsplit("::").next().unwrap_or(handler);
    let base = last.strip_suffix(HANDLER_SUFFIX).unwrap_or(last);
    TS_NAMING.function_name(base)
}

/// Build the TypeScript expression for a path template.
///
/// Segments matching `:name` for a declared path parameter become `req.name`
/// references; literal segments and the slashes around them are preserved.
/// `/items/:id` with parameter `id` renders as `"/items/" + req.id`.
fn path_expression(path: &str, params: &[String]) -> String {
    if params.is_empty() {
        return format!("\"{}\"", path);
    }

    let mut parts: Vec<String> = Vec::new();
    let mut literal = String::new();
    for segment in path.split('/') {
        if segment.is_empty() {
            continue;
        }
        match segment.strip_prefix(':') {
            Some(name) if params.iter().any(|p| p == name) => {
                literal.push('/');
                parts.push(format!("\"{}\"", literal));
                literal.clear();
                parts.push(format!("req.{}", name));
            }
            _ => {
                literal.push('/');
                literal.push_str(segment);
            }
        }
    }
    if !literal.is_empty() {
        parts.push(format!("\"{}\"", literal));
    }
    if parts.is_empty() {
        return format!("\"{}\"", path);
    }
    parts.join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_path_without_params_is_verbatim() {
        assert_eq!(path_expression("/users", &[]), "\"/users\"");
        assert_eq!(path_expression("/users/:id", &[]), "\"/users/:id\"");
    }

    #[test]
    fn test_path_with_trailing_param() {
        assert_eq!(
            path_expression("/users/:id", &params(&["id"])),
            "\"/users/\" + req.id"
        );
    }

    #[test]
    fn test_path_with_inner_param() {
        assert_eq!(
            path_expression("/users/:id/posts", &params(&["id"])),
            "\"/users/\" + req.id + \"/posts\""
        );
    }

    #[test]
    fn test_path_with_two_params() {
        assert_eq!(
            path_expression("/users/:id/posts/:post", &params(&["id", "post"])),
            "\"/users/\" + req.id + \"/posts/\" + req.post"
        );
    }

    #[test]
    fn test_unmatched_placeholder_stays_literal() {
        assert_eq!(
            path_expression("/users/:id/:other", &params(&["id"])),
            "\"/users/\" + req.id + \"/:other\""
        );
    }

    #[test]
    fn test_function_name_strips_suffix_and_camels() {
        assert_eq!(function_name("api::users::list_users_handler"), "listUsers");
        assert_eq!(function_name("list_users"), "listUsers");
        assert_eq!(function_name("GetUser"), "getUser");
    }

    #[test]
    fn test_function_name_escapes_reserved_words() {
        assert_eq!(function_name("api::admin::delete_handler"), "_delete");
    }
}
