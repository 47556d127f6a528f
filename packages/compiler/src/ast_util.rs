//! AST helpers shared by the structure builders.
//!
//! Everything here reads oxc nodes and returns owned text slices of the
//! original source; nothing is re-printed from the AST.

use oxc_ast::ast::{
    Argument, BindingPatternKind, Decorator, Expression, FormalParameters, FunctionBody,
    ObjectExpression, ObjectPropertyKind, PropertyKey, TSTypeAnnotation,
};
use oxc_span::GetSpan;

use crate::source_file::span_text;
use crate::structures::method::Parameter;
use crate::syntax;

/// A decorator reduced to its callee name and call arguments.
/// `@Component` and `@Component()` both have no arguments.
pub struct DecoratorCall<'n, 'a> {
    pub name: String,
    pub arguments: Vec<&'n Expression<'a>>,
}

pub fn decorator_call<'n, 'a>(decorator: &'n Decorator<'a>, source: &str) -> DecoratorCall<'n, 'a> {
    match &decorator.expression {
        Expression::CallExpression(call) => DecoratorCall {
            name: callee_name(&call.callee, source),
            arguments: call.arguments.iter().filter_map(Argument::as_expression).collect(),
        },
        expression => DecoratorCall {
            name: callee_name(expression, source),
            arguments: Vec::new(),
        },
    }
}

pub fn decorator_names(decorators: &[Decorator<'_>], source: &str) -> Vec<String> {
    decorators.iter().map(|d| decorator_call(d, source).name).collect()
}

pub fn callee_name(callee: &Expression<'_>, source: &str) -> String {
    match callee {
        Expression::Identifier(ident) => ident.name.to_string(),
        other => span_text(source, other.span()).to_string(),
    }
}

pub fn property_key_name(key: &PropertyKey<'_>, source: &str) -> String {
    match key {
        PropertyKey::StaticIdentifier(id) => id.name.to_string(),
        PropertyKey::PrivateIdentifier(id) => id.name.to_string(),
        PropertyKey::StringLiteral(lit) => lit.value.to_string(),
        PropertyKey::Identifier(id) => id.name.to_string(),
        other => span_text(source, other.span()).to_string(),
    }
}

pub fn expression_text(expression: &Expression<'_>, source: &str) -> String {
    span_text(source, expression.span()).to_string()
}

pub fn type_text(annotation: Option<&TSTypeAnnotation<'_>>, source: &str) -> Option<String> {
    annotation.map(|a| span_text(source, a.type_annotation.span()).to_string())
}

/// Key/value pairs of an object literal, in declaration order. Shorthand
/// entries yield the key as value; spreads are skipped.
pub fn object_entries<'n, 'a>(
    object: &'n ObjectExpression<'a>,
    source: &str,
) -> Vec<(String, &'n Expression<'a>)> {
    object
        .properties
        .iter()
        .filter_map(|property| match property {
            ObjectPropertyKind::ObjectProperty(p) => Some((property_key_name(&p.key, source), &p.value)),
            ObjectPropertyKind::SpreadProperty(_) => None,
        })
        .collect()
}

pub fn single_quoted(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// `addToCount` -> `add-to-count`
pub fn hyphenate(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (i, c) in name.char_indices() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

pub fn parameters(params: &FormalParameters<'_>, source: &str) -> Vec<Parameter> {
    let mut result: Vec<Parameter> = params
        .items
        .iter()
        .map(|param| {
            let pattern = &param.pattern;
            match &pattern.kind {
                BindingPatternKind::BindingIdentifier(id) => Parameter {
                    name: if pattern.optional {
                        format!("{}?", id.name)
                    } else {
                        id.name.to_string()
                    },
                    type_: type_text(pattern.type_annotation.as_deref(), source),
                },
                kind => Parameter {
                    name: span_text(source, kind.span()).to_string(),
                    type_: type_text(pattern.type_annotation.as_deref(), source),
                },
            }
        })
        .collect();

    if let Some(rest) = &params.rest {
        let argument = &rest.argument;
        result.push(Parameter {
            name: format!("...{}", span_text(source, argument.kind.span())),
            type_: type_text(argument.type_annotation.as_deref(), source),
        });
    }
    result
}

/// Source text of each statement in a body, dedented to column zero.
pub fn statement_texts(body: &FunctionBody<'_>, source: &str) -> Vec<String> {
    body.statements
        .iter()
        .map(|stmt| dedent_statement(source, stmt.span().start as usize, stmt.span().end as usize))
        .collect()
}

/// Removes the indentation a statement had in its original position from
/// its continuation lines. Lines that begin inside a template literal are
/// content and stay untouched.
pub fn dedent_statement(source: &str, start: usize, end: usize) -> String {
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let indent = source[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    let text = &source[start..end];
    text.split('\n')
        .zip(syntax::template_lines(text))
        .enumerate()
        .map(|(i, (line, in_template))| {
            if i == 0 || in_template {
                return line.to_string();
            }
            let leading = line.chars().take_while(|c| *c == ' ' || *c == '\t').count();
            line[leading.min(indent)..].to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
