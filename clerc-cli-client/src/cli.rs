use structopt::StructOpt;

pub fn parse_args() -> Args {
    Args::from_args()
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "clerc",
    about = "clerc - Command LinE Riak Client",
    version = "(Command LinE Riak Client) 0.1"
)]
pub struct Args {
    /// Bucket to operate on. Pass `/` to list all buckets
    #[structopt(name = "BUCKET")]
    pub bucket: String,

    /// Key of the object inside BUCKET
    #[structopt(name = "KEY")]
    pub key: Option<String>,

    /// Set the URL of the riak web API
    #[structopt(long, value_name = "URL")]
    pub url: Option<String>,

    /// Put object which is read from stdin
    #[structopt(long, requires = "KEY", conflicts_with = "delete")]
    pub put: bool,

    /// Delete the object
    #[structopt(long, requires = "KEY")]
    pub delete: bool,

    /// Show additional information, useful for debugging
    #[structopt(long)]
    pub verbose: bool,

    /// List objects instead of keys when listing a bucket
    #[structopt(long, conflicts_with = "KEY")]
    pub show: bool,
}
