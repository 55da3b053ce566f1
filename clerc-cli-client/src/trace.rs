//! Verbose tracing. Every record goes to stdout as `*** <message>`, so it
//! interleaves with regular output in the order operations happen.
//!
//! Whether a record is printed depends on the global max level at the
//! moment of the call. The configuration resolver flips it after each
//! merge step through [`set_verbose`]. Only records from this crate are
//! printed; dependencies (reqwest, hyper) stay silent.

use log::{LevelFilter, Record};
use std::io::{self, Write};

pub const PREFIX: &str = "*** ";

const CRATE: &str = env!("CARGO_CRATE_NAME");

pub fn init() {
    let _ = builder().try_init();
    set_verbose(false);
}

pub fn set_verbose(verbose: bool) {
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    });
}

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| write_record(buf, record))
        .target(env_logger::Target::Stdout)
        .write_style(env_logger::WriteStyle::Never)
        .filter_level(LevelFilter::Off)
        .filter_module(CRATE, LevelFilter::Debug);
    builder
}

fn write_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(out, "{}{}", PREFIX, record.args())
}
