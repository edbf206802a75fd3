// Core Pipeline Integration Tests
// Run the full read, classify and report pipeline against files on disk

use logsift_core::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SAMPLE: &str = "\
2025-07-02T15:00:00 DEBUG starting service
2025-07-02T15:00:01 INFO service started
2025-07-02T15:00:02 ERROR connection lost
";

fn sift_into(root: &Path) -> LogSift {
    let mut config = Config::default();
    config.output.directory = Some(root.to_path_buf());
    LogSift::new(config)
}

#[test]
fn test_end_to_end_sample() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("service.log");
    fs::write(&input, SAMPLE).unwrap();

    let mut console = Vec::new();
    let report = sift_into(dir.path())
        .run(&input, OutputFormat::Text, &mut console)
        .unwrap();

    assert_eq!(
        report.summary,
        RunSummary {
            total: 3,
            debug: 1,
            info: 1,
            error: 1,
            other: 0,
        }
    );
    assert_eq!(report.output_directory, dir.path().join("service_logs"));

    let debug = fs::read_to_string(dir.path().join("service_logs/service_debug.log")).unwrap();
    assert_eq!(
        debug,
        "1. Line:1 -> DEBUG | Date:2025-07-02, Time:15:00:00 => starting service\n"
    );
    let other = fs::read_to_string(dir.path().join("service_logs/service_other.log")).unwrap();
    assert!(other.is_empty());

    let summary = fs::read_to_string(dir.path().join("service_logs/service_summary.txt")).unwrap();
    assert!(summary.contains("Total Log Lines : 3"));
    assert!(summary.contains("Other Log Lines : 0"));

    let console = String::from_utf8(console).unwrap();
    assert!(console.contains("1. Line:3 -> ERROR | Date:2025-07-02, Time:15:00:02 => connection lost"));
    assert!(console.contains("✅ Output files generated inside"));
}

#[test]
fn test_total_excludes_blank_and_malformed_lines() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("noisy.txt");
    fs::write(
        &input,
        "\n2025-07-02T15:00:00 info first\n---------\n\nJul 2 kernel: oops\nts Warning disk\n   \n",
    )
    .unwrap();

    let report = sift_into(dir.path())
        .run(&input, OutputFormat::Text, &mut Vec::new())
        .unwrap();
    let s = report.summary;
    assert_eq!(s.total, 3);
    assert_eq!(s.total, s.debug + s.info + s.error + s.other);
    assert_eq!((s.info, s.other, s.error), (1, 1, 1));

    let other = fs::read_to_string(dir.path().join("noisy_logs/noisy_other.log")).unwrap();
    assert_eq!(other, "1. Line:5 -> 2 | Date:Jul, Time:N/A => kernel: oops\n");
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("service.log");
    fs::write(&input, SAMPLE).unwrap();
    let sift = sift_into(dir.path());

    let first = sift.run(&input, OutputFormat::Text, &mut Vec::new()).unwrap();
    let snapshot: Vec<Vec<u8>> = first.files.iter().map(|f| fs::read(f).unwrap()).collect();

    let second = sift.run(&input, OutputFormat::Text, &mut Vec::new()).unwrap();
    assert_eq!(first.files, second.files);
    for (path, before) in second.files.iter().zip(snapshot) {
        assert_eq!(fs::read(path).unwrap(), before, "{} changed", path.display());
    }
}

#[test]
fn test_missing_file_creates_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.log");

    let result = sift_into(dir.path()).run(&input, OutputFormat::Text, &mut Vec::new());
    assert!(matches!(result, Err(SiftError::FileNotFound { .. })));
    assert!(!dir.path().join("absent_logs").exists());
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let input = dir.path().join("locked.log");
    fs::write(&input, SAMPLE).unwrap();
    fs::set_permissions(&input, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores file modes, nothing to check there
    if fs::File::open(&input).is_ok() {
        return;
    }

    let result = sift_into(dir.path()).run(&input, OutputFormat::Text, &mut Vec::new());
    fs::set_permissions(&input, fs::Permissions::from_mode(0o644)).unwrap();

    match result {
        Err(err @ SiftError::PermissionDenied { .. }) => {
            assert!(err.to_string().starts_with("Permission denied to read"));
        }
        other => panic!("expected PermissionDenied, got {:?}", other.map(|r| r.summary)),
    }
    assert!(!dir.path().join("locked_logs").exists());
}

#[test]
fn test_directory_input_is_fatal_before_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("folder.log");
    fs::create_dir(&input).unwrap();

    let result = sift_into(dir.path()).run(&input, OutputFormat::Text, &mut Vec::new());
    assert!(result.is_err());
    assert!(!dir.path().join("folder_logs").exists());
}

#[test]
fn test_json_mode_writes_same_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("service.log");
    fs::write(&input, SAMPLE).unwrap();

    let mut out = Vec::new();
    let report = sift_into(dir.path())
        .run(&input, OutputFormat::Json, &mut out)
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["summary"]["total"], 3);
    assert_eq!(value["files"].as_array().unwrap().len(), 5);
    for file in report.files {
        assert!(file.exists());
    }
}

#[test]
fn test_analyze_file_directly() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("mixed.log");
    fs::write(&input, "t1 infodebug a\nt2 CRITICAL b\nt3 eRrOr c\nt4 notice d\n").unwrap();

    let analysis = analyze_file(&input).unwrap();
    assert_eq!(analysis.buckets.entries(Bucket::Debug)[0].line_number, 1);
    assert_eq!(analysis.buckets.entries(Bucket::Error).len(), 2);
    assert_eq!(analysis.buckets.entries(Bucket::Other)[0].category_token, "notice");
}
