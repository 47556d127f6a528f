//! Undecorated fields: entries of the `data()` factory and of the `Data`
//! type alias that types it.

use oxc_ast::ast::PropertyDefinition;
use serde::Serialize;

use crate::ast_util::{expression_text, property_key_name, type_text};
use crate::writer::CodeWriter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataField {
    pub name: String,
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub is_readonly: bool,
}

impl DataField {
    /// Entry of the synthesized `Data` type alias.
    pub fn type_entry(&self) -> String {
        format!(
            "{}{}: {}",
            if self.is_readonly { "readonly " } else { "" },
            self.name,
            self.type_.as_deref().unwrap_or("any")
        )
    }
}

pub fn extract(field: &PropertyDefinition<'_>, source: &str) -> DataField {
    DataField {
        name: property_key_name(&field.key, source),
        value: field.value.as_ref().map(|value| expression_text(value, source)),
        type_: type_text(field.type_annotation.as_deref(), source),
        is_readonly: field.readonly,
    }
}

pub fn render(data: &DataField, writer: &mut CodeWriter) {
    let value = data.value.as_deref().unwrap_or("undefined");
    writer.write_line(&format!("{}: {},", data.name, value));
}
