//! Integration tests for TesseractEngine
//!
//! A real Tesseract install is not assumed. On Unix the engine is pointed at
//! small shell scripts standing in for the executable, which lets these tests
//! cover argument passing, exit codes, timeouts and launch failures.

use camino::{Utf8Path, Utf8PathBuf};
use ocrmover::models::OcrSettings;
use ocrmover::services::{OcrEngine, OcrError, TesseractEngine, TextClass, classify_image};
use std::fs;
use tempfile::TempDir;

fn temp_root() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, root)
}

fn write_png(path: &Utf8Path) {
    image::RgbImage::new(4, 4).save(path.as_std_path()).unwrap();
}

fn engine_with_exe(exe: &Utf8Path, timeout_secs: u64) -> TesseractEngine {
    let settings = OcrSettings {
        tesseract_exe: exe.to_string(),
        timeout_secs,
        ..OcrSettings::default()
    };
    TesseractEngine::new(settings, Some(Utf8PathBuf::from("/data/tessdata"))).unwrap()
}

#[test]
fn test_non_image_file_is_load_error() {
    let (_temp_dir, root) = temp_root();
    let not_an_image = root.join("notes.png");
    fs::write(&not_an_image, b"definitely not a png").unwrap();

    let engine = engine_with_exe(Utf8Path::new("tesseract-not-installed"), 0);
    let result = engine.extract_text(&not_an_image);

    assert!(matches!(result, Err(OcrError::ImageLoad { .. })));
}

// All subprocess cases share one test so no other test thread forks while a
// stand-in script is still open for writing.
#[cfg(unix)]
#[test]
fn test_engine_with_stand_in_executables() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp_dir, root) = temp_root();
    let image_path = root.join("scan.png");
    write_png(&image_path);

    let script = |name: &str, body: &str| -> Utf8PathBuf {
        let path = root.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    };

    let echo_args = script("echo_args.sh", "echo \"$@\"");
    let silent = script("silent.sh", "printf ' \\n\\n'");
    let failing = script("failing.sh", "echo 'bad traineddata' >&2\nexit 3");
    let slow = script("slow.sh", "exec sleep 5");

    // Arguments reach the executable and stdout comes back as the text
    let text = engine_with_exe(&echo_args, 0).extract_text(&image_path).unwrap();
    assert!(text.contains(image_path.as_str()));
    assert!(text.contains("stdout -l hin+eng"));
    assert!(text.contains("--tessdata-dir /data/tessdata"));
    assert!(text.contains("page_separator="));

    // Whitespace-only output classifies as blank
    let class = classify_image(&engine_with_exe(&silent, 0), &image_path).unwrap();
    assert_eq!(class, TextClass::Blank);

    // Non-zero exit surfaces code and stderr
    match engine_with_exe(&failing, 0).extract_text(&image_path) {
        Err(OcrError::EngineFailed { code, stderr }) => {
            assert_eq!(code, 3);
            assert_eq!(stderr, "bad traineddata");
        }
        other => panic!("expected EngineFailed, got {:?}", other),
    }

    // Timeout kills the run
    let result = engine_with_exe(&slow, 1).extract_text(&image_path);
    assert!(matches!(result, Err(OcrError::Timeout(_))));

    // Missing executable
    let result = engine_with_exe(&root.join("missing.sh"), 0).extract_text(&image_path);
    assert!(matches!(result, Err(OcrError::Launch { .. })));

    // The same engine serves several files
    let engine = engine_with_exe(&echo_args, 0);
    let second = root.join("second.png");
    write_png(&second);
    assert!(engine.extract_text(&image_path).is_ok());
    assert!(engine.extract_text(&second).unwrap().contains("second.png"));
}
