//! `@Watch` methods: an entry of the `watch` map referencing the handler
//! by name, while the handler itself is rendered with the methods.

use oxc_ast::ast::{Expression, MethodDefinition};
use serde::Serialize;

use super::method::{self, Method};
use crate::ast_util::{expression_text, object_entries, single_quoted, DecoratorCall};
use crate::error::{CompileError, Result};
use crate::writer::CodeWriter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Watch {
    /// Watched path.
    pub name: String,
    pub handler: Method,
    pub immediate: Option<bool>,
    pub deep: Option<bool>,
}

pub fn extract(watcher: &MethodDefinition<'_>, decorator: &DecoratorCall<'_, '_>, source: &str) -> Result<Watch> {
    let handler = method::extract(watcher, source);
    let invalid = |reason: String| CompileError::InvalidWatchOptions {
        handler: handler.name.clone(),
        reason,
    };

    let name = match decorator.arguments.first().copied() {
        Some(Expression::StringLiteral(lit)) => lit.value.to_string(),
        Some(other) => {
            return Err(invalid(format!(
                "watched path must be a string literal, found `{}`",
                expression_text(other, source)
            )))
        }
        None => return Err(invalid("missing watched path".to_string())),
    };

    let mut immediate = None;
    let mut deep = None;
    match decorator.arguments.get(1).copied() {
        None => {}
        Some(Expression::ObjectExpression(options)) => {
            for (key, value) in object_entries(options, source) {
                let flag = match value {
                    Expression::BooleanLiteral(lit) => lit.value,
                    other => {
                        return Err(invalid(format!(
                            "`{}` must be a boolean literal, found `{}`",
                            key,
                            expression_text(other, source)
                        )))
                    }
                };
                match key.as_str() {
                    "immediate" => immediate = Some(flag),
                    "deep" => deep = Some(flag),
                    other => return Err(invalid(format!("unknown option `{}`", other))),
                }
            }
        }
        Some(other) => {
            return Err(invalid(format!(
                "options must be an object literal, found `{}`",
                expression_text(other, source)
            )))
        }
    }

    Ok(Watch {
        name,
        handler,
        immediate,
        deep,
    })
}

pub fn render(watch: &Watch, writer: &mut CodeWriter) {
    writer
        .write(&format!("{}: ", single_quoted(&watch.name)))
        .inline_block(|w| {
            w.write_line(&format!("handler: {},", single_quoted(&watch.handler.name)));
            if let Some(immediate) = watch.immediate {
                w.write_line(&format!("immediate: {},", immediate));
            }
            if let Some(deep) = watch.deep {
                w.write_line(&format!("deep: {},", deep));
            }
        })
        .write(",")
        .new_line();
}
