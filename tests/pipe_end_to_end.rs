//! End-to-end pipeline runs against real files.

use std::fs;
use tempfile::TempDir;

use pipefitter::{DropAll, FileSink, FileSource, JsonWrap, Pipe, RedactFilter, RunOutcome};

#[test]
fn test_text_file_through_stages_produces_filtered_json_output() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let output_path = dir.path().join("output.json");
    fs::write(&input_path, "This is a test.\nUnneeded data").unwrap();

    let pipe = Pipe::new()
        .add_stage(Box::new(FileSource::new(&input_path, "txt_file")))
        .add_stage(Box::new(RedactFilter::new("Unneeded data")))
        .add_stage(Box::new(JsonWrap::new("content")))
        .add_stage(Box::new(FileSink::new(&output_path)));

    let outcome = pipe.execute().unwrap();

    assert!(output_path.exists(), "Output file does not exist");
    let expected = "{\"content\":\"This is a test.\\n\"}";
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        expected,
        "File content does not match expected content"
    );

    // The sink returns the written message as the run's final result.
    match outcome {
        RunOutcome::Completed(msg) => {
            assert_eq!(msg.protocol(), "json");
            assert_eq!(msg.payload(), expected);
        }
        other => panic!("expected Completed, got {other:?}"),
    }
}

#[test]
fn test_rerunning_pipe_rewrites_output_from_scratch() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let output_path = dir.path().join("output.json");
    fs::write(&input_path, "stable content").unwrap();

    let pipe = Pipe::new()
        .add_stage(Box::new(FileSource::new(&input_path, "txt_file")))
        .add_stage(Box::new(JsonWrap::new("content")))
        .add_stage(Box::new(FileSink::new(&output_path)));

    let first = pipe.execute().unwrap();
    let first_content = fs::read_to_string(&output_path).unwrap();

    let second = pipe.execute().unwrap();
    let second_content = fs::read_to_string(&output_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_content, second_content);
}

#[test]
fn test_dropping_filter_prevents_sink_from_writing() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let output_path = dir.path().join("output.json");
    fs::write(&input_path, "anything").unwrap();

    let pipe = Pipe::new()
        .add_stage(Box::new(FileSource::new(&input_path, "txt_file")))
        .add_stage(Box::new(DropAll))
        .add_stage(Box::new(JsonWrap::new("content")))
        .add_stage(Box::new(FileSink::new(&output_path)));

    let outcome = pipe.execute().unwrap();

    assert!(outcome.is_dropped());
    assert!(!output_path.exists(), "Sink must not run after a drop");
}

#[test]
fn test_missing_input_file_reports_source_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.txt");
    let output_path = dir.path().join("output.json");

    let pipe = Pipe::new()
        .add_stage(Box::new(FileSource::new(&missing, "txt_file")))
        .add_stage(Box::new(FileSink::new(&output_path)));

    let err = pipe.execute().unwrap_err();
    assert_eq!(err.stage_index(), Some(0));
    assert!(err.to_string().contains("'FileSource'"));
    assert!(!output_path.exists());
}
