#![deny(clippy::all)]

//! Decorators to Options
//!
//! Rewrites Vue single-file components written with class decorators
//! (`vue-property-decorator`) into `defineComponent` options-API source.

pub mod ast_util;
pub mod classifier;
pub mod code_generator;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod format;
pub mod sfc;
pub mod source_file;
pub mod structures;
pub mod symbol_table;
pub mod syntax;
pub mod writer;

pub use compiler::{analyze, compile, compile_script};
pub use dialect::{Dialect, LifecycleHooks, Target};
pub use error::{CompileError, MemberKind, Result};
pub use sfc::{parse_sfc, SfcBlock, SfcDescriptor};
pub use symbol_table::SymbolTable;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
