use super::*;
use crate::utils::print_lines;
use anyhow::Context;

pub fn execute<W: Write>(client: &RiakClient, bucket: &str, out: &mut W) -> Result<()> {
    let keys = client.list_keys(bucket)?;

    log::debug!("Listing keys:");
    print_lines(out, keys)?;

    Ok(())
}

/// One request for the listing, then one per key. The first failing fetch
/// aborts the whole listing.
pub fn execute_with_objects<W: Write>(
    client: &RiakClient,
    bucket: &str,
    out: &mut W,
) -> Result<()> {
    let keys = client.list_keys(bucket)?;

    for key in keys {
        writeln!(out, "Key: {}", key)?;
        super::object::execute(client, bucket, &key, out)
            .with_context(|| format!("Failure fetching {}/{}", bucket, key))?;
        writeln!(out)?;
    }

    Ok(())
}
