pub mod buckets;
pub mod delete;
pub mod keys;
pub mod object;
pub mod put;

use super::cli::Args;
use super::Result;
use crate::client::RiakClient;
use crate::config::Configuration;
use crate::error::ClercError;
use bytes::Bytes;
use std::io::{Read, Write};

/// Bucket argument that selects the bucket listing.
const ALL_BUCKETS: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListBuckets,
    ListKeys { bucket: String },
    ShowObject { bucket: String, key: String },
    ShowAllObjects { bucket: String },
    PutObject { bucket: String, key: String, body: Bytes },
    DeleteObject { bucket: String, key: String },
}

impl Command {
    /// Later rules win: bucket listing, then key listing, upgraded by a key,
    /// then by `--put`, then by `--delete`. A `/` bucket always lists
    /// buckets. `stdin` is read to the end only for `--put`.
    pub fn classify<R: Read>(args: &Args, mut stdin: R) -> crate::error::Result<Self> {
        if args.bucket == ALL_BUCKETS {
            return Ok(Command::ListBuckets);
        }

        if args.put && args.delete {
            return Err(ClercError::Argument(
                "--put and --delete cannot be used together".to_string(),
            ));
        }

        let bucket = args.bucket.clone();
        let mut command = Command::ListKeys {
            bucket: bucket.clone(),
        };

        if let Some(key) = &args.key {
            command = Command::ShowObject {
                bucket: bucket.clone(),
                key: key.clone(),
            };
        }

        if args.put {
            let key = required_key(args, "--put")?;
            let mut body = Vec::new();
            stdin.read_to_end(&mut body).map_err(ClercError::Stdin)?;
            command = Command::PutObject {
                bucket: bucket.clone(),
                key,
                body: Bytes::from(body),
            };
        }

        if args.delete {
            let key = required_key(args, "--delete")?;
            command = Command::DeleteObject { bucket, key };
        }

        Ok(command)
    }

    /// Key listing turns into a listing of whole objects when `show` is on.
    pub fn refine(self, config: &Configuration) -> Self {
        match self {
            Command::ListKeys { bucket } if config.show_objects => {
                Command::ShowAllObjects { bucket }
            }
            command => command,
        }
    }
}

fn required_key(args: &Args, flag: &str) -> crate::error::Result<String> {
    args.key
        .clone()
        .ok_or_else(|| ClercError::Argument(format!("{} requires a KEY", flag)))
}

pub fn execute<W: Write>(command: Command, client: &RiakClient, out: &mut W) -> Result<()> {
    match command {
        Command::ListBuckets => buckets::execute(client, out),
        Command::ListKeys { bucket } => keys::execute(client, &bucket, out),
        Command::ShowAllObjects { bucket } => keys::execute_with_objects(client, &bucket, out),
        Command::ShowObject { bucket, key } => object::execute(client, &bucket, &key, out),
        Command::PutObject { bucket, key, body } => put::execute(client, &bucket, &key, body),
        Command::DeleteObject { bucket, key } => delete::execute(client, &bucket, &key),
    }
}
