// crates/booking-client/tests/client_flow.rs
//
// End-to-end runs of the booking-client binary against a fake server
// living in the test: a temp directory holds the request FIFO, the
// test reads the request line from it and answers (or deliberately
// does not) on the client's reply FIFO.
use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::os::unix::fs::{FileTypeExt, OpenOptionsExt};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::{Duration, Instant};

use booking_core::ClientId;
use booking_protocol::wire::reply_fifo_name;
use nix::libc;
use nix::sys::stat::Mode;
use nix::unistd::mkfifo;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_booking-client");

fn make_request_fifo(dir: &Path) -> PathBuf {
    let path = dir.join("requests");
    mkfifo(&path, Mode::S_IRWXU).expect("mkfifo requests");
    path
}

/// Open the request FIFO for reading without blocking on a writer.
fn open_request_reader(path: &Path) -> fs::File {
    fs::OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
        .expect("open request fifo for reading")
}

fn client_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.args(args)
        .env("BOOKING_FIFO_DIR", dir)
        .env("BOOKING_LOG_FILE", dir.join("clog.txt"));
    cmd
}

/// Poll the non-blocking reader until one full request line arrives.
fn read_request_line(reader: &mut fs::File) -> String {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut buf = Vec::new();
    let mut chunk = [0u8; 256];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => {} // no writer attached yet
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.contains(&b'\n') {
                    break;
                }
            }
            Err(e) if e.kind() == ErrorKind::WouldBlock => {}
            Err(e) => panic!("request fifo read failed: {e}"),
        }
        assert!(Instant::now() < deadline, "no request arrived in time");
        thread::sleep(Duration::from_millis(10));
    }
    String::from_utf8(buf).expect("request line is utf-8")
}

/// Open the client's reply FIFO for writing, retrying until the client
/// has its read end open.
fn open_reply_writer(path: &Path) -> fs::File {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        match fs::OpenOptions::new()
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
        {
            Ok(file) => return file,
            Err(e) if e.raw_os_error() == Some(libc::ENXIO) => {
                assert!(Instant::now() < deadline, "client never opened {path:?}");
                thread::sleep(Duration::from_millis(10));
            }
            Err(e) => panic!("cannot open reply fifo {path:?}: {e}"),
        }
    }
}

fn leftover_reply_fifos(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read fifo dir")
        .map(|entry| entry.expect("dir entry").file_name().into_string().unwrap())
        .filter(|name| name.starts_with("ans"))
        .collect();
    names.sort();
    names
}

#[test]
fn allocation_reply_is_recorded_and_exits_clean() {
    let dir = TempDir::new().expect("tempdir");
    let request_path = make_request_fifo(dir.path());
    let mut reader = open_request_reader(&request_path);

    let mut child = client_command(dir.path(), &["10", "2", "3 4"])
        .spawn()
        .expect("spawn client");

    let line = read_request_line(&mut reader);
    let tokens: Vec<&str> = line.trim_end().split(' ').collect();
    assert!(tokens.len() >= 2, "short request line: {line:?}");
    let pid: u32 = tokens[0].parse().expect("identity token");
    assert_eq!(&tokens[1..], ["2", "3", "4"]);

    let reply_path = dir.path().join(reply_fifo_name(ClientId(pid)));
    assert!(
        fs::metadata(&reply_path)
            .expect("reply fifo exists before the request is published")
            .file_type()
            .is_fifo()
    );

    let mut writer = open_reply_writer(&reply_path);
    writer.write_all(b"3 10 12 15\n").expect("write reply");
    drop(writer);

    let status = child.wait().expect("client exits");
    assert_eq!(status.code(), Some(0));

    let log = fs::read_to_string(dir.path().join("clog.txt")).expect("booking log written");
    assert_eq!(log.trim_end(), "booked 4 3 10 12 15");

    assert!(!reply_path.exists(), "reply fifo must be unlinked on exit");
}

#[test]
fn refusal_reply_still_exits_clean() {
    let dir = TempDir::new().expect("tempdir");
    let request_path = make_request_fifo(dir.path());
    let mut reader = open_request_reader(&request_path);

    let mut child = client_command(dir.path(), &["10", "1", ""])
        .spawn()
        .expect("spawn client");

    let line = read_request_line(&mut reader);
    let pid: u32 = line
        .split(' ')
        .next()
        .expect("identity token")
        .parse()
        .expect("identity is numeric");

    let reply_path = dir.path().join(reply_fifo_name(ClientId(pid)));
    let mut writer = open_reply_writer(&reply_path);
    writer.write_all(b"-5\n").expect("write reply");
    drop(writer);

    let status = child.wait().expect("client exits");
    assert_eq!(status.code(), Some(0), "a server refusal is not a client failure");

    let log = fs::read_to_string(dir.path().join("clog.txt")).expect("booking log written");
    assert_eq!(log.trim_end(), "refused -5");
    assert!(!reply_path.exists());
}

#[test]
fn malformed_reply_exits_with_the_parse_status() {
    let dir = TempDir::new().expect("tempdir");
    let request_path = make_request_fifo(dir.path());
    let mut reader = open_request_reader(&request_path);

    let mut child = client_command(dir.path(), &["10", "1", "2"])
        .spawn()
        .expect("spawn client");

    let line = read_request_line(&mut reader);
    let pid: u32 = line
        .split(' ')
        .next()
        .expect("identity token")
        .parse()
        .expect("identity is numeric");

    let reply_path = dir.path().join(reply_fifo_name(ClientId(pid)));
    let mut writer = open_reply_writer(&reply_path);
    writer.write_all(b"x y z\n").expect("write reply");
    drop(writer);

    let status = child.wait().expect("client exits");
    assert_eq!(status.code(), Some(6));

    assert!(
        !dir.path().join("clog.txt").exists(),
        "nothing gets recorded for a malformed reply"
    );
    assert!(!reply_path.exists(), "reply fifo must be unlinked on failure too");
}

#[test]
fn times_out_when_no_server_replies() {
    let dir = TempDir::new().expect("tempdir");
    let request_path = make_request_fifo(dir.path());
    // Hold a reader so the broadcast itself succeeds; then stay silent.
    let _reader = open_request_reader(&request_path);

    let start = Instant::now();
    let status = client_command(dir.path(), &["1", "2", "3 4"])
        .status()
        .expect("run client");
    let elapsed = start.elapsed();

    assert_eq!(status.code(), Some(7));
    assert!(elapsed >= Duration::from_secs(1), "timed out early: {elapsed:?}");
    assert_eq!(
        leftover_reply_fifos(dir.path()),
        Vec::<String>::new(),
        "timeout must not leak the reply fifo"
    );
}

#[test]
fn missing_request_fifo_fails_the_broadcast() {
    let dir = TempDir::new().expect("tempdir");

    let status = client_command(dir.path(), &["5", "1", "2"])
        .status()
        .expect("run client");

    assert_eq!(status.code(), Some(8));
    assert_eq!(
        leftover_reply_fifos(dir.path()),
        Vec::<String>::new(),
        "broadcast failure must not leak the reply fifo"
    );
}

#[test]
fn request_fifo_without_a_reader_fails_the_broadcast() {
    let dir = TempDir::new().expect("tempdir");
    make_request_fifo(dir.path());
    // Nobody opens the read end: the publish must fail fast, not hang.

    let start = Instant::now();
    let status = client_command(dir.path(), &["5", "1", "2"])
        .status()
        .expect("run client");

    assert_eq!(status.code(), Some(8));
    assert!(
        start.elapsed() < Duration::from_secs(4),
        "publish with no server must fail fast"
    );
}

#[test]
fn invalid_parameters_exit_with_the_usage_status() {
    let dir = TempDir::new().expect("tempdir");

    for args in [
        ["0", "2", "3"],   // zero timeout
        ["x", "2", "3"],   // non-numeric timeout
        ["5", "two", "3"], // non-numeric seat count
        ["5", "2", "3 x"], // non-numeric preference
    ] {
        let status = client_command(dir.path(), &args)
            .status()
            .expect("run client");
        assert_eq!(status.code(), Some(2), "args {args:?}");
    }

    assert!(
        fs::read_dir(dir.path()).expect("read dir").next().is_none(),
        "usage errors must not touch the filesystem"
    );
}

#[test]
fn wrong_argument_count_exits_with_the_usage_status() {
    let dir = TempDir::new().expect("tempdir");

    let status = client_command(dir.path(), &["5"])
        .status()
        .expect("run client");
    assert_eq!(status.code(), Some(2));
}
