// ============================================================
// Layer 5 — Dataset Exporter
// ============================================================
// Writes the prepared datasets to disk for the external
// classifier trainer.
//
// Output directory layout:
//   prepared/
//     train.jsonl            ← one {"text", "label"} object per line
//     test.jsonl             ← same shape, held-out records
//     label_map.json         ← {"0": "browser", "1": "gfx", ...}
//     pipeline_config.json   ← the config that produced the files
//
// Labels in the JSONL files are integer ids; label_map.json is
// the only place the id → component name mapping lives, so it is
// always written together with the datasets.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::application::prepare_use_case::PipelineConfig;
use crate::data::splitter::SplitDatasets;
use crate::domain::label_space::LabelSpace;
use crate::domain::record::LabeledRecord;

pub const TRAIN_FILE: &str = "train.jsonl";
pub const TEST_FILE: &str = "test.jsonl";
pub const LABEL_MAP_FILE: &str = "label_map.json";
pub const CONFIG_FILE: &str = "pipeline_config.json";

/// Manages the files of one prepared dataset directory.
pub struct DatasetExporter {
    dir: PathBuf,
}

impl DatasetExporter {
    /// Create a new DatasetExporter, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write train.jsonl, test.jsonl and label_map.json.
    pub fn save_split(&self, split: &SplitDatasets) -> Result<()> {
        self.write_jsonl(TRAIN_FILE, &split.train)?;
        self.write_jsonl(TEST_FILE, &split.test)?;
        self.save_label_map(&split.label_space)?;

        tracing::info!(
            dir = %self.dir.display(),
            train = split.train.len(),
            test = split.test.len(),
            "Exported datasets"
        );
        Ok(())
    }

    /// Read one of the exported JSONL datasets back.
    pub fn load_dataset(&self, name: &str) -> Result<Vec<LabeledRecord>> {
        let path = self.dir.join(name);
        let file = File::open(&path)
            .with_context(|| format!("Cannot open dataset '{}'", path.display()))?;

        let mut records = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: LabeledRecord = serde_json::from_str(&line).with_context(|| {
                format!("Malformed record at {}:{}", path.display(), line_no + 1)
            })?;
            records.push(record);
        }
        Ok(records)
    }

    pub fn save_label_map(&self, space: &LabelSpace) -> Result<()> {
        let path = self.dir.join(LABEL_MAP_FILE);
        let json = serde_json::to_string_pretty(&space.id_to_label())?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write label map to '{}'", path.display()))?;
        tracing::debug!("Saved label map to '{}'", path.display());
        Ok(())
    }

    pub fn load_label_map(&self) -> Result<LabelSpace> {
        let path = self.dir.join(LABEL_MAP_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read label map from '{}'", path.display()))?;
        let map: BTreeMap<usize, String> = serde_json::from_str(&json)?;
        Ok(LabelSpace::from_id_map(map)?)
    }

    /// Save the effective pipeline configuration as JSON.
    pub fn save_config(&self, cfg: &PipelineConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        tracing::debug!("Saved pipeline config to '{}'", path.display());
        Ok(())
    }

    fn write_jsonl(&self, name: &str, records: &[LabeledRecord]) -> Result<()> {
        let path = self.dir.join(name);
        let file = File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        let mut out = BufWriter::new(file);

        for record in records {
            serde_json::to_writer(&mut out, record)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}
