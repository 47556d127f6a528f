//! Code Generator
//!
//! Assembles the options-API module from a classified symbol table and the
//! parsed source it came from. Sections appear in a fixed order and a
//! section whose backing list is empty is left out entirely.

use crate::dialect::Dialect;
use crate::format;
use crate::source_file::{PassThroughKind, SourceFile};
use crate::structures::{component, computed, data, emit, hook, method, mixin, prop, refs, watch};
use crate::symbol_table::SymbolTable;
use crate::writer::CodeWriter;

pub fn generate(source: &SourceFile<'_>, table: &SymbolTable, dialect: &Dialect) -> String {
    let mut writer = CodeWriter::new(dialect.indent_width);

    write_imports(&mut writer, source, table, dialect);
    write_declarations(&mut writer, source);
    if table.has_data() {
        write_data_type(&mut writer, table);
    }

    writer.blank_line().write("export default defineComponent(");
    writer.inline_block(|w| write_options(w, table)).write(")").new_line();

    format::normalize(&writer.to_source(), dialect.indent_width)
}

fn write_imports(writer: &mut CodeWriter, source: &SourceFile<'_>, table: &SymbolTable, dialect: &Dialect) {
    writer.write_line("import { defineComponent } from 'vue'");
    if table.has_props() {
        writer.write_line("import type { PropType } from 'vue'");
    }

    let imports: Vec<&str> = source
        .import_declarations()
        .into_iter()
        .filter(|decl| !dialect.is_decorator_import_source(&decl.source.value))
        .map(|decl| source.slice(decl.span))
        .collect();
    if !imports.is_empty() {
        writer.blank_line();
        for import in imports {
            writer.write_line(import);
        }
    }
}

/// Type aliases, then interfaces, then every other module-level statement.
fn write_declarations(writer: &mut CodeWriter, source: &SourceFile<'_>) {
    let pass_through = source.pass_through();
    for kind in [PassThroughKind::TypeAlias, PassThroughKind::Interface, PassThroughKind::Other] {
        for (_, text) in pass_through.iter().filter(|(k, _)| *k == kind) {
            writer.blank_line().write_line(text);
        }
    }
}

/// ```ts
/// type Data = {
///     readonly MY_CONST: number
///     myDataOne: string
/// }
/// ```
fn write_data_type(writer: &mut CodeWriter, table: &SymbolTable) {
    writer
        .blank_line()
        .write("type Data = ")
        .inline_block(|w| {
            for field in table.data() {
                w.write_line(&field.type_entry());
            }
        })
        .new_line();
}

fn write_options(w: &mut CodeWriter, table: &SymbolTable) {
    if let Some(meta) = table.component() {
        component::render(meta, w);
    }

    if table.has_mixins() {
        w.blank_line().write("mixins: [");
        for (i, m) in table.mixins().iter().enumerate() {
            if i > 0 {
                w.write(", ");
            }
            mixin::render(m, w);
        }
        w.write("],").new_line();
    }

    if table.has_props() {
        w.blank_line()
            .write("props: ")
            .inline_block(|w| table.props().iter().for_each(|p| prop::render(p, w)))
            .write(",")
            .new_line();
    }

    if table.has_data() {
        w.blank_line()
            .write("data (): Data ")
            .inline_block(|w| {
                w.write("return ")
                    .inline_block(|w| table.data().iter().for_each(|d| data::render(d, w)))
                    .new_line();
            })
            .write(",")
            .new_line();
    }

    if table.has_hooks() {
        w.blank_line();
        table.hooks().iter().for_each(|h| hook::render(h, w));
    }

    if table.has_watch() {
        w.blank_line()
            .write("watch: ")
            .inline_block(|w| table.watch().iter().for_each(|wt| watch::render(wt, w)))
            .write(",")
            .new_line();
    }

    if table.has_computed() {
        w.blank_line()
            .write("computed: ")
            .inline_block(|w| {
                table.getters().iter().for_each(|c| computed::render(c, w));
                table.refs().iter().for_each(|r| refs::render(r, w));
            })
            .write(",")
            .new_line();
    }

    if table.has_methods() {
        w.blank_line()
            .write("methods: ")
            .inline_block(|w| {
                table.methods().iter().for_each(|m| method::render(m, w));
                table.emits().iter().for_each(|e| emit::render(e, w));
                table.watch().iter().for_each(|wt| method::render(&wt.handler, w));
            })
            .write(",")
            .new_line();
    }

    if table.has_emits() {
        w.blank_line()
            .write("emits: ")
            .inline_block(|w| table.emits().iter().for_each(|e| emit::render_validator(e, w)))
            .write(",")
            .new_line();
    }
}
