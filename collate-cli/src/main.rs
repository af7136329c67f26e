use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod commands;
mod fs;

use std::{env, fs::File, io, path::Path, sync::Arc};

use clap::Parser;
use tracing::info;

use self::{cli::Cli, commands::merge};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log.as_deref() {
        init_logging(path)?;
    }

    merge(cli)?;

    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    info!("program started");

    let args: Vec<String> = env::args().collect();
    info!(command = %args.join(" "), "command line");

    Ok(())
}
