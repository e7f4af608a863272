use clap::Parser;
use looking_for_chars_cli::args::Args;
use looking_for_chars_cli::config::Config;
use looking_for_chars_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return e.exit_code();
        }
    };
    logging::init(config.verbose);

    let outcome = looking_for_chars_cli::run(&config).and_then(|report| {
        let mut stdout = std::io::stdout().lock();
        presentation::write_report(&mut stdout, &report, config.format)
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
