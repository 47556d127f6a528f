//! `@Emit` methods.
//!
//! One structure, two renderings: the invocation form goes into `methods`
//! with the `$emit` trigger merged into its body, the declaration form into
//! the `emits` map as a validator stub.

use oxc_ast::ast::{Expression, MethodDefinition, Statement};
use serde::Serialize;

use super::method::{self, render_function, signature, Parameter};
use crate::ast_util::{expression_text, hyphenate, single_quoted, DecoratorCall};
use crate::writer::CodeWriter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emit {
    pub name: String,
    pub event: EmitEvent,
    pub parameters: Vec<Parameter>,
    /// Declared return type of the source method, `void` when absent.
    pub return_type: String,
    /// Body with the trigger call merged in.
    pub statements: Vec<String>,
    pub is_async: bool,
}

/// The event an `@Emit` method triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum EmitEvent {
    /// A literal event name, without quotes.
    Name(String),
    /// Any other argument, kept as source text and evaluated at runtime.
    Expression(String),
}

impl EmitEvent {
    /// First argument of `$emit`.
    pub fn argument(&self) -> String {
        match self {
            EmitEvent::Name(name) => single_quoted(name),
            EmitEvent::Expression(expression) => expression.clone(),
        }
    }

    /// Key in the `emits` map.
    pub fn key(&self) -> String {
        match self {
            EmitEvent::Name(name) => single_quoted(name),
            EmitEvent::Expression(expression) => format!("[{}]", expression),
        }
    }
}

pub fn extract(emit: &MethodDefinition<'_>, decorator: &DecoratorCall<'_, '_>, source: &str) -> Emit {
    let method = method::extract(emit, source);
    let event = match decorator.arguments.first().copied() {
        Some(Expression::StringLiteral(lit)) => EmitEvent::Name(lit.value.to_string()),
        Some(other) => EmitEvent::Expression(expression_text(other, source)),
        None => EmitEvent::Name(hyphenate(&method.name)),
    };

    let trailing_return = emit
        .value
        .body
        .as_ref()
        .and_then(|body| body.statements.last())
        .and_then(|statement| match statement {
            Statement::ReturnStatement(ret) => {
                Some(ret.argument.as_ref().map(|argument| expression_text(argument, source)))
            }
            _ => None,
        });

    let statements = merge_trigger(
        method.statements.as_deref().unwrap_or_default(),
        trailing_return.as_ref().map(Option::as_deref),
        &event,
        &method.parameters,
    );

    Emit {
        name: method.name,
        event,
        parameters: method.parameters,
        return_type: method.return_type.unwrap_or_else(|| "void".to_string()),
        statements,
        is_async: method.is_async,
    }
}

/// Returns the body with a trailing `return` (if any) replaced by the
/// trigger call. `trailing_return` is `Some(payload)` when the last
/// statement is a return, where `payload` is its argument.
pub fn merge_trigger(
    statements: &[String],
    trailing_return: Option<Option<&str>>,
    event: &EmitEvent,
    parameters: &[Parameter],
) -> Vec<String> {
    let (kept, payload) = match trailing_return {
        Some(payload) if !statements.is_empty() => (&statements[..statements.len() - 1], payload),
        _ => (statements, None),
    };

    let mut arguments = vec![event.argument()];
    arguments.extend(payload.map(str::to_string));
    arguments.extend(parameters.iter().map(|p| p.argument().to_string()));

    let mut merged = kept.to_vec();
    merged.push(format!("this.$emit({})", arguments.join(", ")));
    merged
}

/// Invocation form, for the `methods` map.
pub fn render(emit: &Emit, writer: &mut CodeWriter) {
    let return_type = if emit.is_async { "Promise<void>" } else { "void" };
    let head = signature(emit.is_async, &emit.name, &emit.parameters, Some(return_type));
    render_function(writer, &head, &emit.statements);
}

/// Declaration form, for the `emits` map.
pub fn render_validator(emit: &Emit, writer: &mut CodeWriter) {
    let head = signature(false, &emit.event.key(), &emit.parameters, Some("boolean"));
    render_function(
        writer,
        &head,
        &["// TODO add validator".to_string(), "return true".to_string()],
    );
}
