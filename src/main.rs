use clap::Parser;
use roster::{
    cli::{init_verbose, Cli, FULL_VERSION},
    commands,
    utils::util::{report_error, Result},
};
use std::time;

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    log::trace!("CLI options set: {:?}", cli);

    log::info!("Running {}-{}", env!("CARGO_PKG_NAME"), &**FULL_VERSION);

    let start_timer = time::Instant::now();
    commands::roster(&cli)?;
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());

    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        report_error(e);
    }
}
