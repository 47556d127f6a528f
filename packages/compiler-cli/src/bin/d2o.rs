/**
 * d2o
 *
 * Converts class-decorator Vue components to the options API
 */
use std::process;

fn main() {
    let code = d2o_compiler_cli::main_entry::main_fn(std::env::args_os());
    process::exit(code);
}
