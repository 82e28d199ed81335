//! Configuration and input loading from files

use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use yt_harvest::config::{load_config, load_config_with_hash};
use yt_harvest::harvest::load_input_urls;
use yt_harvest::{resolve, ConfigError, Identifier};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_placeholder_key_is_rejected() {
    let file = write_config("[api]\nkey = \"YOUR_API_KEY_HERE\"\n");
    let result = load_config(file.path());
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
fn test_config_hash_tracks_content() {
    let first = write_config("[api]\nkey = \"one\"\n");
    let second = write_config("[api]\nkey = \"two\"\n");

    let (config, hash) = load_config_with_hash(first.path()).unwrap();
    let (_, other_hash) = load_config_with_hash(second.path()).unwrap();

    assert_eq!(config.api.key, "one");
    assert_eq!(hash.len(), 64);
    assert_ne!(hash, other_hash);
}

#[test]
fn test_input_list_resolves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input_urls.txt");
    std::fs::write(
        &path,
        "# sample input\n\
         https://www.youtube.com/channel/UC123/\n\
         https://www.youtube.com/@someHandle\n\
         \n\
         https://youtu.be/abc123?t=30\n\
         https://www.youtube.com/watch?v=ABC&extra=1\n\
         https://www.youtube.com/user/name\n",
    )
    .unwrap();

    let identifiers: Vec<Identifier> = load_input_urls(&path)
        .unwrap()
        .iter()
        .map(|url| resolve(url))
        .collect();

    assert_eq!(
        identifiers,
        vec![
            Identifier::ChannelId("UC123".to_string()),
            Identifier::ChannelHandle("@someHandle".to_string()),
            Identifier::VideoId("abc123".to_string()),
            Identifier::VideoId("ABC".to_string()),
            Identifier::Unrecognized,
        ]
    );
}
