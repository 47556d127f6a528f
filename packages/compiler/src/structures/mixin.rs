//! Arguments of the `Mixins(...)` heritage call.

use oxc_ast::ast::Expression;
use serde::Serialize;

use crate::ast_util::expression_text;
use crate::writer::CodeWriter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mixin {
    pub name: String,
}

pub fn extract(argument: &Expression<'_>, source: &str) -> Mixin {
    Mixin {
        name: expression_text(argument, source),
    }
}

/// Writes the bare name; the code generator owns the surrounding array.
pub fn render(mixin: &Mixin, writer: &mut CodeWriter) {
    writer.write(&mixin.name);
}
