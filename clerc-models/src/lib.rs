pub mod config_file;
pub mod listing;

pub use config_file::ConfigFile;
pub use listing::{Buckets, Keys};
