//! Compiler Entry Points
//!
//! parse -> classify -> generate, for a bare script or a whole SFC.

use oxc_allocator::Allocator;

use crate::classifier::build_symbol_table;
use crate::code_generator::generate;
use crate::dialect::Dialect;
use crate::error::{CompileError, Result};
use crate::sfc::SfcDescriptor;
use crate::source_file::SourceFile;
use crate::symbol_table::SymbolTable;

/// Classifies a script without generating anything.
pub fn analyze(script: &str, dialect: &Dialect) -> Result<SymbolTable> {
    let allocator = Allocator::default();
    let source = SourceFile::parse(&allocator, script)?;
    classify(&source, dialect)
}

/// Rewrites a class-component script into options-API source.
pub fn compile_script(script: &str, dialect: &Dialect) -> Result<String> {
    let allocator = Allocator::default();
    let source = SourceFile::parse(&allocator, script)?;
    let table = classify(&source, dialect)?;
    Ok(generate(&source, &table, dialect))
}

fn classify(source: &SourceFile<'_>, dialect: &Dialect) -> Result<SymbolTable> {
    let table = build_symbol_table(source, dialect)?;
    if table.is_empty() {
        return Err(CompileError::EmptySymbolTable);
    }
    table.dump();
    Ok(table)
}

/// Returns a copy of the descriptor whose script holds the rewritten
/// component. Every other block is carried over unchanged.
pub fn compile(descriptor: &SfcDescriptor, dialect: &Dialect) -> Result<SfcDescriptor> {
    let script = descriptor.script.as_ref().ok_or(CompileError::NoScript)?;
    if script.content.trim().is_empty() {
        return Err(CompileError::NoScript);
    }

    let content = compile_script(&script.content, dialect)?;

    let mut output = descriptor.clone();
    if let Some(script) = output.script.as_mut() {
        script.content = format!("\n{}", content);
        if script.lang.is_none() {
            script.set_lang("ts");
        }
    }
    Ok(output)
}
