mod cli;
mod client;
mod command;
mod config;
mod error;
mod trace;
mod utils;

use client::RiakClient;
use command::Command;
use config::Configuration;
use std::io::Write;

type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

fn main() -> Result<()> {
    let args = cli::parse_args();
    trace::init();

    let config = Configuration::resolve(&args)?;
    let command = Command::classify(&args, std::io::stdin())?.refine(&config);
    let client = RiakClient::new(&config)?;

    // Not locked: trace records share stdout while requests are in flight.
    let mut out = std::io::stdout();
    command::execute(command, &client, &mut out)?;
    out.flush()?;

    Ok(())
}
