use std::fs;
use std::path::Path;

use burn::data::dataset::Dataset;
use component_classifier::data::dataset::ClassSample;
use component_classifier::infra::exporter::{
    DatasetExporter, CONFIG_FILE, LABEL_MAP_FILE, TEST_FILE, TRAIN_FILE,
};
use component_classifier::infra::report::REPORT_FILE;
use component_classifier::{PipelineConfig, PipelineError, PrepareUseCase};
use tempfile::tempdir;

fn write_component(root: &Path, component: &str, files: usize, ext: &str) {
    let dir = root.join(component);
    fs::create_dir_all(&dir).unwrap();
    for i in 0..files {
        fs::write(
            dir.join(format!("file_{i}{ext}")),
            format!("// Copyright 2024\nnamespace {component} {{ int Value{i}(); }}\n"),
        )
        .unwrap();
    }
}

fn config(root: &Path, out: &Path) -> PipelineConfig {
    PipelineConfig {
        root_path: root.to_path_buf(),
        output_dir: out.to_path_buf(),
        ..PipelineConfig::default()
    }
}

#[test]
fn prepares_gfx_and_ipc_with_per_label_ratio() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("target");
    write_component(&root, "gfx", 10, ".cc");
    write_component(&root, "ipc", 5, ".h");
    // ignored: wrong extension
    write_component(&root, "ipc", 3, ".py");

    let out = tmp.path().join("prepared");
    let output = PrepareUseCase::new(config(&root, &out)).execute().unwrap();

    assert_eq!(output.split.train.len(), 12);
    assert_eq!(output.split.test.len(), 3);
    assert!(output.read_failures.is_empty());

    let counts = output.report.counts();
    assert_eq!(counts.len(), 2);
    assert_eq!((counts[0].label.as_str(), counts[0].train, counts[0].test), ("gfx", 8, 2));
    assert_eq!((counts[1].label.as_str(), counts[1].train, counts[1].test), ("ipc", 4, 1));

    for name in [TRAIN_FILE, TEST_FILE, LABEL_MAP_FILE, CONFIG_FILE, REPORT_FILE] {
        assert!(out.join(name).is_file(), "missing {name}");
    }

    let exporter = DatasetExporter::new(&out).unwrap();
    let train = exporter.load_dataset(TRAIN_FILE).unwrap();
    assert_eq!(train, output.split.train);
    assert!(train.iter().all(|r| r.text.starts_with("copyright namespace")));

    let labels = exporter.load_label_map().unwrap();
    assert_eq!(labels.labels(), &["gfx", "ipc"]);

    let saved = PipelineConfig::from_json_file(&out.join(CONFIG_FILE)).unwrap();
    assert_eq!(saved, config(&root, &out));
}

#[test]
fn identical_runs_produce_identical_files() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("target");
    write_component(&root, "browser", 17, ".cc");
    write_component(&root, "content", 9, ".cc");
    write_component(&root, "dom", 4, ".h");

    let out_a = tmp.path().join("a");
    let out_b = tmp.path().join("b");
    PrepareUseCase::new(config(&root, &out_a)).execute().unwrap();
    PrepareUseCase::new(config(&root, &out_b)).execute().unwrap();

    for name in [TRAIN_FILE, TEST_FILE, LABEL_MAP_FILE, REPORT_FILE] {
        assert_eq!(
            fs::read(out_a.join(name)).unwrap(),
            fs::read(out_b.join(name)).unwrap(),
            "{name} differs between runs"
        );
    }
}

#[test]
fn single_file_label_goes_to_train() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("target");
    write_component(&root, "db", 1, ".cc");

    let out = tmp.path().join("prepared");
    let output = PrepareUseCase::new(config(&root, &out)).execute().unwrap();
    assert_eq!(output.split.train.len(), 1);
    assert!(output.split.test.is_empty());
}

#[test]
fn empty_directory_is_empty_corpus_and_writes_nothing() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("target");
    fs::create_dir_all(root.join("gfx")).unwrap();

    let out = tmp.path().join("prepared");
    let err = PrepareUseCase::new(config(&root, &out)).execute().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::EmptyCorpus)
    ));
    assert!(!out.exists());
}

#[test]
fn missing_root_is_reported() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("nowhere");
    let err = PrepareUseCase::new(config(&root, &tmp.path().join("out")))
        .execute()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::RootNotFound(_))
    ));
}

#[test]
fn mozilla_extensions_select_cpp_files() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("target");
    write_component(&root, "accessible", 5, ".cpp");
    write_component(&root, "intl", 5, ".cc");

    let cfg = PipelineConfig {
        extensions: vec![".cpp".into(), ".h".into()],
        ..config(&root, &tmp.path().join("out"))
    };
    let output = PrepareUseCase::new(cfg).execute().unwrap();
    assert_eq!(output.split.num_labels(), 1);
    assert_eq!(output.split.total(), 5);
}

#[test]
fn prepare_output_hands_burn_datasets_to_the_trainer() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("target");
    write_component(&root, "gfx", 10, ".cc");
    write_component(&root, "ipc", 5, ".cc");

    let output = PrepareUseCase::new(config(&root, &tmp.path().join("out")))
        .execute()
        .unwrap();
    let (train, test) = output.datasets();

    assert_eq!(train.len(), 12);
    assert_eq!(test.len(), 3);
    assert_eq!(train.num_labels(), 2);
    assert_eq!(test.num_labels(), 2);

    let first: ClassSample = test.get(0).unwrap();
    assert_eq!(first.text, output.split.test[0].text);
    assert_eq!(first.label, output.split.test[0].label);
    assert!(test.get(3).is_none());
}
