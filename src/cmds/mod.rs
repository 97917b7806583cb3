use self::generate::{generate, GenerateArgs};
use anyhow::Result;
use clap::Parser;

pub mod generate;

pub fn handle_commands() -> Result<()> {
    let args = GenerateArgs::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simplelog::SimpleLogger::init(level, Default::default())?;

    generate(&args)
}
