//! Main Entry Point
//!
//! Argument handling for the `d2o` binary, kept in the library so it can be
//! driven from tests.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::error;

use d2o_compiler::Target;

use crate::config::ProjectConfig;
use crate::logging::{self, Verbosity};
use crate::perform_compile::{perform_compilation, CompileOptions};

pub fn command() -> Command {
    Command::new("d2o")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrites Vue class-decorator components into defineComponent options components")
        .arg(
            Arg::new("files")
                .short('f')
                .long("files")
                .value_name("PATHS")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Files, directories or glob patterns to convert"),
        )
        .arg(
            Arg::new("overwrite")
                .short('o')
                .long("overwrite")
                .action(ArgAction::SetTrue)
                .help("Replace the input files instead of writing Name.options.vue"),
        )
        .arg(
            Arg::new("linter")
                .short('l')
                .long("linter")
                .value_name("CONFIG")
                .help("ESLint config used to fix the generated files"),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .action(ArgAction::SetTrue)
                .help("Only report errors"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every classified member"),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .value_name("VERSION")
                .value_parser(["vue2", "vue3"])
                .help("Lifecycle hook set of the generated component"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to d2o.json"),
        )
        .arg(
            Arg::new("dump-ir")
                .long("dump-ir")
                .action(ArgAction::SetTrue)
                .help("Print each component's symbol table as JSON"),
        )
}

/// Builds the run options from parsed arguments, reading the config file.
pub fn compile_options(matches: &ArgMatches) -> anyhow::Result<CompileOptions> {
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = ProjectConfig::resolve(config_path.as_deref())?;
    if let Some(target) = matches.get_one::<String>("target") {
        config.dialect.target = target.parse::<Target>().map_err(anyhow::Error::msg)?;
    }

    Ok(CompileOptions {
        files: matches
            .get_many::<String>("files")
            .map(|files| files.cloned().collect())
            .unwrap_or_default(),
        overwrite: matches.get_flag("overwrite"),
        linter_config: matches.get_one::<String>("linter").map(PathBuf::from),
        dump_ir: matches.get_flag("dump-ir"),
        config,
    })
}

/// Runs `d2o` with the given arguments and returns the process exit code.
pub fn main_fn<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = command();
    let matches = match command.try_get_matches_from_mut(args) {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            return e.exit_code();
        }
    };

    if matches.get_many::<String>("files").is_none() {
        let _ = command.print_help();
        return 1;
    }

    logging::init(Verbosity::from_flags(
        matches.get_flag("silent"),
        matches.get_flag("verbose"),
    ));

    let options = match compile_options(&matches) {
        Ok(options) => options,
        Err(e) => {
            error!("{:#}", e);
            return 1;
        }
    };

    match perform_compilation(&options) {
        Ok(report) => {
            for file in &report.files {
                if let Some(ir) = &file.ir {
                    println!("// {}\n{}", file.input.display(), ir);
                }
            }
            report.exit_code()
        }
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}
