use super::*;
use crate::utils::print_lines;

pub fn execute<W: Write>(client: &RiakClient, out: &mut W) -> Result<()> {
    let buckets = client.list_buckets()?;

    log::debug!("Listing buckets:");
    print_lines(out, buckets)?;

    Ok(())
}
