//! End-to-end merge pipeline tests.

use std::fs;

use pdfbind::config::MergeConfig;
use pdfbind::output::{NoopSink, ProgressEvent};
use pdfbind::run_merge;
use tempfile::TempDir;

use crate::common::{RecordingSink, build_pdf, page_count, pdf_version, under};

#[test]
fn test_output_page_count_is_sum_of_inputs() {
    let temp = TempDir::new().unwrap();
    build_pdf(&under(temp.path(), "a.pdf"), 1, "1.4");
    build_pdf(&under(temp.path(), "b.pdf"), 2, "1.4");
    build_pdf(&under(temp.path(), "c.pdf"), 3, "1.4");

    let config = MergeConfig::new(temp.path());
    let report = run_merge(&config, &NoopSink).unwrap();

    assert_eq!(report.files_merged, 3);
    assert_eq!(report.total_pages, 6);
    assert_eq!(page_count(&report.output_path), 6);
}

#[test]
fn test_page_sum_holds_for_any_directive() {
    let temp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    build_pdf(&under(temp.path(), "x.pdf"), 2, "1.4");
    build_pdf(&under(temp.path(), "y.pdf"), 3, "1.4");

    for directive in ["None", "FileName Desc", "DateModified", "FilePath Desc"] {
        let config = MergeConfig {
            sort: directive.parse().unwrap(),
            output: Some(under(out.path(), "merged.pdf")),
            ..MergeConfig::new(temp.path())
        };
        let report = run_merge(&config, &NoopSink).unwrap();
        assert_eq!(report.total_pages, 5, "directive {directive}");
    }
}

#[test]
fn test_empty_directory_merges_to_zero_page_output() {
    let temp = TempDir::new().unwrap();

    let config = MergeConfig::new(temp.path());
    let report = run_merge(&config, &NoopSink).unwrap();

    assert_eq!(report.files_merged, 0);
    assert_eq!(report.total_pages, 0);
    assert_eq!(report.version.to_string(), "1.4");
    assert!(report.output_path.exists());
    assert_eq!(page_count(&report.output_path), 0);
}

#[test]
fn test_default_output_path_is_inside_input_dir() {
    let temp = TempDir::new().unwrap();
    build_pdf(&under(temp.path(), "only.pdf"), 1, "1.4");

    let report = run_merge(&MergeConfig::new(temp.path()), &NoopSink).unwrap();

    assert_eq!(report.output_path, under(temp.path(), "output.pdf"));
    assert!(report.output_path.exists());
}

#[test]
fn test_recursive_toggle_controls_nesting() {
    let temp = TempDir::new().unwrap();
    build_pdf(&under(temp.path(), "top.pdf"), 3, "1.4");
    let nested = temp.path().join("nested");
    fs::create_dir(&nested).unwrap();
    build_pdf(&under(&nested, "inner.pdf"), 2, "1.4");

    let out = TempDir::new().unwrap();
    let flat = MergeConfig {
        recursive: false,
        output: Some(under(out.path(), "flat.pdf")),
        ..MergeConfig::new(temp.path())
    };
    let report = run_merge(&flat, &NoopSink).unwrap();
    assert_eq!(report.total_pages, 3);

    let deep = MergeConfig {
        recursive: true,
        output: Some(under(out.path(), "deep.pdf")),
        ..MergeConfig::new(temp.path())
    };
    let report = run_merge(&deep, &NoopSink).unwrap();
    assert_eq!(report.total_pages, 5);
}

#[test]
fn test_output_version_is_max_of_inputs() {
    let temp = TempDir::new().unwrap();
    build_pdf(&under(temp.path(), "a.pdf"), 1, "1.4");
    build_pdf(&under(temp.path(), "b.pdf"), 1, "1.7");
    build_pdf(&under(temp.path(), "c.pdf"), 1, "1.5");

    let report = run_merge(&MergeConfig::new(temp.path()), &NoopSink).unwrap();

    assert_eq!(report.version.to_string(), "1.7");
    assert_eq!(pdf_version(&report.output_path), "1.7");
}

#[test]
fn test_output_is_overwritten_on_success() {
    let temp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    build_pdf(&under(temp.path(), "a.pdf"), 1, "1.4");
    let target = under(out.path(), "merged.pdf");
    fs::write(&target, b"stale bytes from an earlier run").unwrap();

    let config = MergeConfig {
        output: Some(target.clone()),
        ..MergeConfig::new(temp.path())
    };
    run_merge(&config, &NoopSink).unwrap();

    assert_eq!(page_count(&target), 1);
}

#[test]
fn test_event_sequence_of_a_full_run() {
    let temp = TempDir::new().unwrap();
    build_pdf(&under(temp.path(), "a.pdf"), 1, "1.4");
    build_pdf(&under(temp.path(), "b.pdf"), 1, "1.4");

    let sink = RecordingSink::new();
    run_merge(&MergeConfig::new(temp.path()), &sink).unwrap();

    let events = sink.events();
    assert!(matches!(
        events[0],
        ProgressEvent::SearchStarted { recursive: true, .. }
    ));
    assert!(matches!(events[1], ProgressEvent::SortChosen { .. }));
    assert_eq!(events[2], ProgressEvent::FilesFound { count: 2 });
    assert!(matches!(events[3], ProgressEvent::FileProcessing { .. }));
    assert!(matches!(events[4], ProgressEvent::FileProcessing { .. }));
    assert!(matches!(events[5], ProgressEvent::SaveTarget { .. }));
    assert_eq!(events[6], ProgressEvent::Done);
    assert_eq!(events.len(), 7);
}

#[test]
fn test_nested_file_reports_relative_path() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("sub");
    fs::create_dir(&nested).unwrap();
    build_pdf(&under(&nested, "inner.pdf"), 1, "1.4");

    let sink = RecordingSink::new();
    run_merge(&MergeConfig::new(temp.path()), &sink).unwrap();

    let processing: Vec<_> = sink
        .events()
        .into_iter()
        .filter_map(|event| match event {
            ProgressEvent::FileProcessing {
                name,
                relative_path,
            } => Some((name, relative_path)),
            _ => None,
        })
        .collect();
    assert_eq!(processing.len(), 1);
    assert_eq!(processing[0].0, "inner.pdf");
    assert_eq!(processing[0].1, std::path::PathBuf::from("sub/inner.pdf"));
}
