use super::*;
use crate::utils::print_object;

pub fn execute<W: Write>(client: &RiakClient, bucket: &str, key: &str, out: &mut W) -> Result<()> {
    let body = client.get_object(bucket, key)?;

    log::debug!("Showing object: {}/{}", bucket, key);
    print_object(out, &body)?;

    Ok(())
}
