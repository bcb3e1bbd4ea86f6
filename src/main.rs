mod cli;

use clap::{Parser, crate_version};

use crate::cli::{Args, Command, prelude::*};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Normalize(args) => args.run()?,
        Command::Tariffs(args) => args.run()?,
        Command::Catalog(args) => args.run()?,
        Command::Compare(args) => args.run()?,
        Command::Size(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
