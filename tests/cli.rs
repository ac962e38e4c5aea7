use std::io::Write;
use std::process::{Command, Output};

use halfblock_anim::render::{CLEANUP, CLEAR_SCREEN};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const ESC: u8 = 0x1b;

fn halfblock() -> Command {
    Command::new(env!("CARGO_BIN_EXE_halfblock"))
}

fn animation_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn missing_filename_exits_cleanly() {
    let output = halfblock().output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_text(&output), "No filename provided.\n");
}

#[test]
fn unreadable_file_reports_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let output = halfblock().arg(&path).output().unwrap();
    let text = stdout_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.starts_with("open "), "{text:?}");
    assert_eq!(text.lines().count(), 1);
    assert!(!output.stdout.contains(&ESC));
}

#[test]
fn malformed_file_leaves_terminal_untouched() {
    let file = animation_file(r#"{"not":"an array"}"#);

    let output = halfblock().arg(file.path()).output().unwrap();
    let text = stdout_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.starts_with("decode "), "{text:?}");
    assert_eq!(text.lines().count(), 1);
    assert!(!output.stdout.contains(&ESC));
}

#[test]
fn single_pass_restores_terminal() {
    let file = animation_file("[[[0,255]]]");

    let output = halfblock().args(["-f", "0", "-bg", "3"]).arg(file.path()).output().unwrap();
    let text = stdout_text(&output);

    assert!(output.status.success());
    assert_eq!(
        text,
        format!(
            "{CLEAR_SCREEN}\x1b[0m\x1b[48;5;0;38;5;3m\u{2584}\x1b[0m\x1b[48;5;255;38;5;3m\u{2584}\n{CLEANUP}"
        )
    );
}

#[test]
fn empty_animation_only_cleans_up() {
    let file = animation_file("[]");

    let output = halfblock().arg(file.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_text(&output), CLEANUP);
}

#[cfg(unix)]
#[test]
fn sigint_writes_cleanup_last() {
    use std::io::Read;
    use std::process::Stdio;

    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let file = animation_file("[[[1,2],[3,4]],[[5],[6]]]");
    let mut child = halfblock()
        .args(["-f", "5", "-i"])
        .arg(file.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    let mut stdout = child.stdout.take().unwrap();

    // The handler is installed before playback starts, so any output means it is live.
    let mut buf = vec![0; 4096];
    let n = stdout.read(&mut buf).unwrap();
    assert!(n > 0);
    buf.truncate(n);

    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).unwrap();

    stdout.read_to_end(&mut buf).unwrap();
    let status = child.wait().unwrap();

    assert!(status.success());
    assert!(buf.starts_with(CLEAR_SCREEN.as_bytes()));
    assert!(buf.ends_with(CLEANUP.as_bytes()));
}
