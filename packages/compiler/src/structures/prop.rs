//! `@Prop` fields, rendered into the `props` map.
//!
//! Only `type`, `default`, `validator` and `required` are read from the
//! decorator's option object. A non-object argument is the `type`
//! shorthand (`@Prop(String)`).

use oxc_ast::ast::{Expression, PropertyDefinition};
use serde::Serialize;

use crate::ast_util::{expression_text, object_entries, property_key_name, type_text, DecoratorCall};
use crate::writer::CodeWriter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prop {
    pub name: String,
    pub is_readonly: bool,
    /// True only for a literal `required: true`.
    pub is_required: bool,
    /// Runtime constructor: `String`, `Number`, `[String, Number]`...
    pub prop_type: Option<String>,
    /// Declared TypeScript type, `any` when absent.
    pub native_type: String,
    pub default_value: Option<String>,
    pub validator: Option<String>,
}

pub fn extract(field: &PropertyDefinition<'_>, decorator: &DecoratorCall<'_, '_>, source: &str) -> Prop {
    let mut prop = Prop {
        name: property_key_name(&field.key, source),
        is_readonly: field.readonly,
        is_required: false,
        prop_type: None,
        native_type: type_text(field.type_annotation.as_deref(), source)
            .unwrap_or_else(|| "any".to_string()),
        default_value: None,
        validator: None,
    };

    match decorator.arguments.first().copied() {
        Some(Expression::ObjectExpression(options)) => {
            for (key, value) in object_entries(options, source) {
                match key.as_str() {
                    "type" => prop.prop_type = Some(expression_text(value, source)),
                    "default" => prop.default_value = Some(expression_text(value, source)),
                    "validator" => prop.validator = Some(expression_text(value, source)),
                    "required" => {
                        prop.is_required = matches!(value, Expression::BooleanLiteral(lit) if lit.value)
                    }
                    _ => {}
                }
            }
        }
        Some(shorthand) => prop.prop_type = Some(expression_text(shorthand, source)),
        None => {}
    }
    prop
}

pub fn render(prop: &Prop, writer: &mut CodeWriter) {
    writer
        .write(&format!("{}: ", prop.name))
        .inline_block(|w| {
            if let Some(prop_type) = &prop.prop_type {
                w.write_line(&format!("type: {} as PropType<{}>,", prop_type, prop.native_type));
            }
            if prop.is_required {
                w.write_line("required: true,");
            }
            if let Some(default_value) = &prop.default_value {
                w.write_line(&format!("default: {},", default_value));
            }
            if let Some(validator) = &prop.validator {
                w.write_line(&format!("validator: {},", validator));
            }
        })
        .write(",")
        .new_line();
}
