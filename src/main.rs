use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use flicker::{
    app::AppRunner,
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // File configuration first, command line on top
    let mut config = Config::new()?;
    config.override_flicker(args.flicker_overrides());
    if let Some(validation) = args.validation() {
        config.validation = Some(validation);
    }

    let tui = Arc::new(Mutex::new(
        RealTui::new()?.frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(config, tui)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
