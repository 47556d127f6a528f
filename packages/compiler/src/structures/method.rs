//! Plain methods, plus the function-shaped rendering shared by hooks,
//! emits and watch handlers.

use oxc_ast::ast::MethodDefinition;
use serde::Serialize;

use crate::ast_util::{parameters, property_key_name, statement_texts, type_text};
use crate::writer::CodeWriter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Binding text, with a trailing `?` for optional parameters.
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

impl Parameter {
    pub fn new(name: &str, type_: Option<&str>) -> Self {
        Parameter {
            name: name.to_string(),
            type_: type_.map(str::to_string),
        }
    }

    pub fn declaration(&self) -> String {
        match &self.type_ {
            Some(type_) => format!("{}: {}", self.name, type_),
            None => self.name.clone(),
        }
    }

    /// The parameter as a call argument: `num?` -> `num`, `a = 1` -> `a`.
    pub fn argument(&self) -> &str {
        if self.name.starts_with('{') || self.name.starts_with('[') {
            return &self.name;
        }
        let end = self
            .name
            .find(|c| c == '=' || c == ':')
            .unwrap_or(self.name.len());
        self.name[..end].trim().trim_end_matches('?')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<String>,
    /// `None` for body-less declarations (overload signatures).
    pub statements: Option<Vec<String>>,
    pub is_async: bool,
}

pub fn extract(method: &MethodDefinition<'_>, source: &str) -> Method {
    let function = &method.value;
    Method {
        name: property_key_name(&method.key, source),
        parameters: parameters(&function.params, source),
        return_type: type_text(function.return_type.as_deref(), source),
        statements: function.body.as_ref().map(|body| statement_texts(body, source)),
        is_async: function.r#async,
    }
}

pub fn render(method: &Method, writer: &mut CodeWriter) {
    let head = signature(
        method.is_async,
        &method.name,
        &method.parameters,
        method.return_type.as_deref(),
    );
    render_function(writer, &head, method.statements.as_deref().unwrap_or_default());
}

/// `async name (a: number, b): T `
pub(crate) fn signature(
    is_async: bool,
    name: &str,
    parameters: &[Parameter],
    return_type: Option<&str>,
) -> String {
    let parameters = parameters
        .iter()
        .map(Parameter::declaration)
        .collect::<Vec<_>>()
        .join(", ");
    let return_type = return_type.map(|t| format!(": {}", t)).unwrap_or_default();
    format!(
        "{}{} ({}){} ",
        if is_async { "async " } else { "" },
        name,
        parameters,
        return_type
    )
}

/// Writes `head{ statements },` as one entry of an object literal.
pub(crate) fn render_function(writer: &mut CodeWriter, head: &str, statements: &[String]) {
    writer
        .write(head)
        .inline_block(|w| {
            for statement in statements {
                w.write_line(statement);
            }
        })
        .write(",")
        .new_line();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_argument_strips_optional_marker_and_default() {
        assert_eq!(Parameter::new("num?", Some("number")).argument(), "num");
        assert_eq!(Parameter::new("a = 1", None).argument(), "a");
        assert_eq!(Parameter::new("...rest", None).argument(), "...rest");
    }

    #[test]
    fn renders_method_without_types() {
        let method = Method {
            name: "logSomething".into(),
            parameters: vec![Parameter::new("something", None)],
            return_type: None,
            statements: Some(vec!["console.log(something)".into()]),
            is_async: false,
        };
        let mut writer = CodeWriter::new(4);
        render(&method, &mut writer);
        assert_eq!(
            writer.to_source(),
            "logSomething (something) {\n    console.log(something)\n},\n"
        );
    }
}
