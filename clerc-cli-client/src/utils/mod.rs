pub mod pretty;

#[cfg(test)]
pub mod fake_riak;

pub use pretty::print_object;

use std::io::{self, Write};

/// One item per line, in the order given.
pub fn print_lines<W, I>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for item in items {
        writeln!(out, "{}", item.as_ref())?;
    }
    Ok(())
}
