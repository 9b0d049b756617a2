use clap::Parser;
use pom_version::{app, args::Args, config::Config, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors exit with 2 and --help/--version with 0, both via clap.
    let args = Args::try_parse().unwrap_or_else(|e| e.exit());
    logging::init(pom_version::config::Verbosity::from_flags(args.verbose, args.quiet));

    let result = Config::from_args(args).and_then(|config| app::run(&config));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.exit_code() == 2 {
                eprintln!("usage: pom_version [OPTIONS] <NEW_VERSION>");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
