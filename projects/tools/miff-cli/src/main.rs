#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod png_writer;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Inspection and extraction tool for MIFF asset containers
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Images(commands::images::ImagesCmd),
    List(commands::list::ListCmd),
    Extract(commands::extract::ExtractCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Images(cmd) => {
            commands::images::handle_images_command(cmd)?;
        }
        Commands::List(cmd) => {
            commands::list::handle_list_command(cmd)?;
        }
        Commands::Extract(cmd) => {
            commands::extract::handle_extract_command(cmd)?;
        }
    }

    Ok(())
}
