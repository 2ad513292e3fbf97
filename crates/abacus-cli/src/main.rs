use abacus_cli::app::App;
use abacus_cli::cli::Cli;
use abacus_cli::config::AbacusConfig;
use abacus_cli::logging;
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = AbacusConfig::load()?.apply_profile();
    logging::init(&config.logging, cli.verbose)?;
    config.log_source();

    let app = App::new(&config, cli.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(&cli.command, &mut out)
}
