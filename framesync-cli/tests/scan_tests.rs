use std::fs;
use tempfile::tempdir;

use framesync_cli::commands::scan;
use framesync_core::encoder::encode_stream;

/// Helper: a clean stream of `n` six-byte frames
fn create_test_frames(n: usize) -> Vec<u8> {
    let bodies: Vec<Vec<u8>> = (0..n)
        .map(|i| {
            let b = (i as u8).wrapping_mul(31).wrapping_add(5);
            vec![b, b ^ 0x11, b.wrapping_add(2), b.wrapping_sub(9), b]
        })
        .collect();
    encode_stream(bodies)
}

#[test]
fn test_scan_clean_file() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("frames.fsy");
    let output_path = td.path().join("output.json");

    fs::write(&input_path, create_test_frames(3)).unwrap();

    scan::execute(
        input_path.to_str().unwrap(),
        Some(output_path.to_str().unwrap()),
        6,
        false,
    )
    .unwrap();

    assert!(output_path.exists());

    let output_json = fs::read_to_string(&output_path).unwrap();
    let frames: Vec<serde_json::Value> = serde_json::from_str(&output_json).unwrap();

    assert_eq!(frames.len(), 3);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame["index"].as_u64().unwrap(), i as u64);
        assert_eq!(frame["len"].as_u64().unwrap(), 6);
        assert_eq!(frame["validated"].as_bool().unwrap(), true);
    }
}

#[test]
fn test_scan_with_garbage_prefix() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("noisy.fsy");
    let output_path = td.path().join("output.json");

    let mut data = vec![2u8; 17]; // never validates at length 6, alone or mixed with the first frame
    data.extend_from_slice(&create_test_frames(4));
    fs::write(&input_path, data).unwrap();

    scan::execute(
        input_path.to_str().unwrap(),
        Some(output_path.to_str().unwrap()),
        6,
        false,
    )
    .unwrap();

    let output_json = fs::read_to_string(&output_path).unwrap();
    let frames: Vec<serde_json::Value> = serde_json::from_str(&output_json).unwrap();

    // All four real frames recovered, garbage silently skipped
    let validated = frames
        .iter()
        .filter(|f| f["validated"].as_bool().unwrap())
        .count();
    assert_eq!(validated, 4);
}

#[test]
fn test_scan_reports_unvalidated_tail() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("truncated.fsy");
    let output_path = td.path().join("output.json");

    let mut data = create_test_frames(2);
    data.truncate(data.len() - 2); // cut the last frame short
    fs::write(&input_path, data).unwrap();

    scan::execute(
        input_path.to_str().unwrap(),
        Some(output_path.to_str().unwrap()),
        6,
        false,
    )
    .unwrap();

    let output_json = fs::read_to_string(&output_path).unwrap();
    let frames: Vec<serde_json::Value> = serde_json::from_str(&output_json).unwrap();

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["validated"].as_bool().unwrap(), true);

    let tail = &frames[1];
    assert_eq!(tail["validated"].as_bool().unwrap(), false);
    assert_eq!(tail["len"].as_u64().unwrap(), 4);
}

#[test]
fn test_scan_stats_only() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("frames.fsy");
    let output_path = td.path().join("should_not_exist.json");

    fs::write(&input_path, create_test_frames(4)).unwrap();

    scan::execute(input_path.to_str().unwrap(), None, 6, true).unwrap();

    assert!(!output_path.exists());
}

#[test]
fn test_scan_empty_file() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("empty.fsy");
    let output_path = td.path().join("output.json");

    fs::write(&input_path, b"").unwrap();

    scan::execute(
        input_path.to_str().unwrap(),
        Some(output_path.to_str().unwrap()),
        6,
        false,
    )
    .unwrap();

    let output_json = fs::read_to_string(&output_path).unwrap();
    let frames: Vec<serde_json::Value> = serde_json::from_str(&output_json).unwrap();
    assert_eq!(frames.len(), 0);
}

#[test]
fn test_scan_invalid_length() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("frames.fsy");

    fs::write(&input_path, create_test_frames(1)).unwrap();

    assert!(scan::execute(input_path.to_str().unwrap(), None, 0, true).is_err());
}
