use super::*;

pub fn execute(client: &RiakClient, bucket: &str, key: &str, body: Bytes) -> Result<()> {
    client.put_object(bucket, key, body)?;
    Ok(())
}
