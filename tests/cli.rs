//! End-to-end runs of the `binaryio` binary.

use std::{fs, path::PathBuf, process::Command};

use rstest::{fixture, rstest};

struct SampleFile(PathBuf);

impl Drop for SampleFile {
    fn drop(&mut self) { let _ = fs::remove_file(&self.0); }
}

#[fixture]
fn sample(#[default("sample")] name: &str) -> SampleFile {
    let path = std::env::temp_dir().join(format!("binaryio-{name}-{}.bin", std::process::id()));
    fs::write(&path, [0x00u8, 0x01, 0x00, 0x02, 0xAB, 0xCD, 0xEF]).expect("write sample file");
    SampleFile(path)
}

fn run(args: &[&str], file: &SampleFile) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_binaryio"))
        .args(args)
        .arg(&file.0)
        .output()
        .expect("spawn binaryio");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[rstest]
fn decodes_big_endian_stream(#[with("big")] sample: SampleFile) {
    let (ok, stdout, _) = run(&["--layout", "u16[2],bytes:2"], &sample);
    assert!(ok);
    assert_eq!(stdout, "u16[2] = [1, 2]\nbytes:2 = abcd\n");
}

#[rstest]
fn buffered_mode_reports_remaining(#[with("little")] sample: SampleFile) {
    let (ok, stdout, _) = run(&["--order", "little", "--buffered", "--layout", "u16,skip:2"], &sample);
    assert!(ok);
    assert_eq!(stdout, "u16 = 256\nskip:2 = skipped 2\nremaining = 3\n");
}

#[rstest]
fn short_file_fails_with_error(#[with("short")] sample: SampleFile) {
    let (ok, stdout, stderr) = run(&["--layout", "bytes:16"], &sample);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("short read: expected 16 bytes, got 7"), "{stderr}");
}

#[rstest]
fn bad_layout_is_reported(#[with("layout")] sample: SampleFile) {
    let (ok, _, stderr) = run(&["--layout", "f32"], &sample);
    assert!(!ok);
    assert!(stderr.contains("unknown layout field"), "{stderr}");
}

#[rstest]
fn unallocatable_byte_run_is_reported(#[with("huge")] sample: SampleFile) {
    let (ok, stdout, stderr) = run(&["--layout", "bytes:18446744073709551615"], &sample);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("byte source error"), "{stderr}");
}
