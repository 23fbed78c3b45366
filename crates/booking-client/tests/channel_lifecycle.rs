// crates/booking-client/tests/channel_lifecycle.rs
use std::os::unix::fs::FileTypeExt;

use booking_client::channel::{self, ReplyChannel};
use booking_client::config::Config;
use booking_core::ClientId;
use tempfile::TempDir;

fn is_fifo(path: &std::path::Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.file_type().is_fifo())
        .unwrap_or(false)
}

#[test]
fn create_makes_a_fifo_and_remove_unlinks_it() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("ans00042");

    let channel = ReplyChannel::create(path.clone()).expect("create reply fifo");
    assert!(is_fifo(&path), "created path should be a fifo");
    assert_eq!(channel.path(), path);

    channel.remove();
    assert!(!path.exists(), "remove should unlink the fifo");

    // Removing again is fine.
    channel.remove();
    assert!(!path.exists());
}

#[test]
fn dropping_the_guard_unlinks_the_fifo() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("ans00007");

    {
        let _channel = ReplyChannel::create(path.clone()).expect("create reply fifo");
        assert!(is_fifo(&path));
    }
    assert!(!path.exists(), "drop should unlink the fifo");
}

#[test]
fn creating_over_an_existing_path_fails() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("ans00100");

    let first = ReplyChannel::create(path.clone()).expect("first create");
    let second = ReplyChannel::create(path.clone());
    assert!(second.is_err(), "a name collision must surface, not be ignored");

    // The loser must not have unlinked the winner's fifo.
    drop(second);
    assert!(is_fifo(&path), "collision must leave the existing fifo alone");
    drop(first);
    assert!(!path.exists());
}

#[test]
fn unlink_of_a_never_created_path_is_harmless() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("ans99999");

    channel::unlink(&path);
    channel::unlink(&path);
    assert!(!path.exists());
}

#[test]
fn config_places_the_reply_fifo_inside_the_fifo_dir() {
    let dir = TempDir::new().expect("tempdir");
    let config = Config {
        fifo_dir: dir.path().to_path_buf(),
        request_fifo: "requests".to_string(),
        log_file: dir.path().join("clog.txt"),
    };

    let path = config.reply_fifo_path(ClientId(7));
    assert_eq!(path, dir.path().join("ans00007"));
    assert_eq!(config.request_fifo_path(), dir.path().join("requests"));
}
