use super::*;

pub fn execute(client: &RiakClient, bucket: &str, key: &str) -> Result<()> {
    client.delete_object(bucket, key)?;
    Ok(())
}
