use serde::{Deserialize, Serialize};

/// On-disk shape of `~/.clerc`. Every field is optional; absent fields
/// leave the built-in default untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub show: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_none() {
        let file: ConfigFile = serde_json::from_str("{}").unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn partial_file() {
        let file: ConfigFile =
            serde_json::from_str(r#"{"url":"http://riak:8098","show":true}"#).unwrap();

        assert_eq!(file.url.as_deref(), Some("http://riak:8098"));
        assert_eq!(file.verbose, None);
        assert_eq!(file.show, Some(true));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(serde_json::from_str::<ConfigFile>(r#"{"verbose":"yes"}"#).is_err());
    }
}
