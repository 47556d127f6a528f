//! Lifecycle hooks, rendered inline in the component options.

use oxc_ast::ast::MethodDefinition;
use serde::Serialize;

use super::method::{self, render_function, signature, Parameter};
use crate::writer::CodeWriter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hook {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: String,
    pub statements: Vec<String>,
    pub is_async: bool,
}

pub fn extract(hook: &MethodDefinition<'_>, source: &str) -> Hook {
    let method = method::extract(hook, source);
    Hook {
        name: method.name,
        parameters: method.parameters,
        return_type: method.return_type.unwrap_or_else(|| "void".to_string()),
        statements: method.statements.unwrap_or_default(),
        is_async: method.is_async,
    }
}

pub fn render(hook: &Hook, writer: &mut CodeWriter) {
    let head = signature(hook.is_async, &hook.name, &hook.parameters, Some(hook.return_type.as_str()));
    render_function(writer, &head, &hook.statements);
}
