use std::process::ExitCode;

use clap::Parser as _;
use tracing::{debug, info};

use crate::{
    code_gen::code_gen::CodeGen,
    models::{
        args::{AppArgs, USAGE_EXAMPLES},
        config::Config,
    },
    utils::{errors::EmptyResult, logger::LoggerUtils},
};

mod code_gen;
mod models;
mod utils;

fn main() -> ExitCode {
    let args = match AppArgs::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            _ = err.print();
            eprintln!("{USAGE_EXAMPLES}");
            return ExitCode::from(2);
        }
        Err(err) => err.exit(),
    };

    LoggerUtils::init();

    let version = env!("CARGO_PKG_VERSION");
    debug!("🔧 Feature generator, Version: {version}");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("ERROR: {err}");
            if err.is_usage() {
                eprintln!("{USAGE_EXAMPLES}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: AppArgs) -> EmptyResult {
    args.validate()?;

    let config = Config::from_dir(&args.template_dir)?;
    let code_gen = CodeGen::new(args, config);
    let state = code_gen.execute()?;

    if !state.dirs_created().is_empty() {
        info!("Created {} output directories", state.dirs_created().len());
    }

    for line in state.summary_lines() {
        println!("{line}");
    }

    Ok(())
}
