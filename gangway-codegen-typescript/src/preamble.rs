//! The fixed transport preamble of the generated client.
//!
//! Every generated `api.ts` starts with the same header: the shared
//! response/pagination/error shapes, the parameterized read helper, the three
//! generic write helpers, and the upload helper. Route functions delegate to
//! these so the per-route output stays small.

use gangway_codegen::CodeFragment;

use crate::ast::{ArrowFn, Import, Interface, Param};
use crate::code_file::CodeFile;

const RESULT_TYPE: &str = "Promise<[Response<T> | null, number]>";

/// The preamble as a [`CodeFile`], ready for route functions to be appended.
pub(crate) fn code_file() -> CodeFile {
    CodeFile::new()
        .import(Import::new("./model").namespace("model"))
        .add(response_interface())
        .add(pagination_interface())
        .add(error_interface())
        .add(get_helper())
        .add(post_helper())
        .add(put_helper())
        .add(del_helper())
        .add(upload_helper())
        .add(non_get_helper())
        .add(handle_response_helper())
}

fn response_interface() -> Interface {
    Interface::new("Response")
        .generic("T")
        .field("success", "boolean")
        .optional_field("error", "Error")
        .optional_field("pagination", "Pagination")
        .optional_field("data", "T")
}

fn pagination_interface() -> Interface {
    Interface::new("Pagination")
        .field("page", "number")
        .field("size", "number")
        .field("total", "number")
}

fn error_interface() -> Interface {
    Interface::new("Error")
        .field("code", "string")
        .field("message", "string")
}

fn get_helper() -> ArrowFn {
    let build_query = CodeFragment::block(
        "if (params) {",
        vec![
            CodeFragment::line("const parts: string[] = [];"),
            CodeFragment::block(
                "for (const [key, value] of params) {",
                vec![CodeFragment::block(
                    "if (key !== undefined && key !== null && value !== undefined && value !== null) {",
                    vec![CodeFragment::line("parts.push(key + \"=\" + value);")],
                    Some("}".to_string()),
                )],
                Some("}".to_string()),
            ),
            CodeFragment::line("target += \"?\" + parts.join(\"&\");"),
        ],
        Some("}".to_string()),
    );

    ArrowFn::new("get")
        .async_()
        .generic("T")
        .param(Param::new("host", "string"))
        .param(Param::new("url", "string"))
        .param(Param::new("params", "any[][]").optional())
        .param(Param::new("headers", "any").optional())
        .returns(RESULT_TYPE)
        .body_fragments(try_catch(vec![
            CodeFragment::line("let target = host + url;"),
            build_query,
            CodeFragment::line(
                "const response = await fetch(target, { method: \"GET\", headers: headers });",
            ),
            CodeFragment::line("return handleResponse<T>(response);"),
        ]))
}

fn post_helper() -> ArrowFn {
    verb_helper("post", "POST")
}

fn put_helper() -> ArrowFn {
    verb_helper("put", "PUT")
}

fn del_helper() -> ArrowFn {
    verb_helper("del", "DELETE")
}

fn verb_helper(name: &str, method: &str) -> ArrowFn {
    ArrowFn::new(name)
        .async_()
        .generic("T")
        .param(Param::new("host", "string"))
        .param(Param::new("url", "string"))
        .param(Param::new("body", "any").optional())
        .param(Param::new("headers", "any").optional())
        .returns(RESULT_TYPE)
        .body_line(format!(
            "return nonGet<T>(\"{}\", host + url, body, headers);",
            method
        ))
}

fn upload_helper() -> ArrowFn {
    ArrowFn::new("upload")
        .async_()
        .generic("T")
        .param(Param::new("host", "string"))
        .param(Param::new("url", "string"))
        .param(Param::new("file", "File"))
        .param(Param::new("headers", "any").optional())
        .returns(RESULT_TYPE)
        .body_fragments(try_catch(vec![
            CodeFragment::line("const form = new FormData();"),
            CodeFragment::line("form.append(\"file\", file);"),
            CodeFragment::line(
                "const response = await fetch(host + url, { method: \"POST\", headers: headers, body: form });",
            ),
            CodeFragment::line("return handleResponse<T>(response);"),
        ]))
}

fn non_get_helper() -> ArrowFn {
    ArrowFn::new("nonGet")
        .private()
        .async_()
        .generic("T")
        .param(Param::new("method", "string"))
        .param(Param::new("url", "string"))
        .param(Param::new("body", "any").optional())
        .param(Param::new("headers", "any").optional())
        .returns(RESULT_TYPE)
        .body_fragments(try_catch(vec![
            CodeFragment::line("const merged = { \"Content-Type\": \"application/json\", ...headers };"),
            CodeFragment::line(
                "const response = await fetch(url, { method: method, headers: merged, body: JSON.stringify(body) });",
            ),
            CodeFragment::line("return handleResponse<T>(response);"),
        ]))
}

fn handle_response_helper() -> ArrowFn {
    ArrowFn::new("handleResponse")
        .private()
        .async_()
        .generic("T")
        .param(Param::new("resp", "globalThis.Response"))
        .returns(RESULT_TYPE)
        .body_fragments(vec![
            CodeFragment::block(
                "if (resp.status === 200) {",
                vec![CodeFragment::line(
                    "return [await resp.json() as Response<T>, resp.status];",
                )],
                Some("}".to_string()),
            ),
            CodeFragment::line("return [null, resp.status];"),
        ])
}

fn try_catch(body: Vec<CodeFragment>) -> Vec<CodeFragment> {
    vec![
        CodeFragment::block("try {", body, None),
        CodeFragment::block(
            "} catch (err) {",
            vec![
                CodeFragment::line("console.error(err);"),
                CodeFragment::line("return [null, 0];"),
            ],
            Some("}".to_string()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_declares_shared_shapes() {
        let rendered = code_file().render();
        assert!(rendered.starts_with("import * as model from \"./model\";\n"));
        assert!(rendered.contains("export interface Response<T> {"));
        assert!(rendered.contains("export interface Pagination {"));
        assert!(rendered.contains("export interface Error {"));
    }

    #[test]
    fn test_preamble_declares_transport_helpers() {
        let rendered = code_file().render();
        assert!(rendered.contains("export const get = async <T>(host: string, url: string, params?: any[][], headers?: any)"));
        assert!(rendered.contains("export const post = async <T>"));
        assert!(rendered.contains("export const put = async <T>"));
        assert!(rendered.contains("export const del = async <T>"));
        assert!(rendered.contains("export const upload = async <T>"));
        assert!(rendered.contains("const nonGet = async <T>"));
        assert!(rendered.contains("const handleResponse = async <T>"));
    }

    #[test]
    fn test_write_helpers_share_one_transport() {
        let rendered = code_file().render();
        assert!(rendered.contains("return nonGet<T>(\"POST\", host + url, body, headers);"));
        assert!(rendered.contains("return nonGet<T>(\"PUT\", host + url, body, headers);"));
        assert!(rendered.contains("return nonGet<T>(\"DELETE\", host + url, body, headers);"));
    }
}
