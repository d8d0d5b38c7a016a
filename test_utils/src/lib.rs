use keyword_census::{LabeledTable, Pipeline, PipelineConfig, TechnologyKey, TokenStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
pub mod constants;
use constants::{FIXTURE_INPUT_DIRECTORY, FIXTURE_OUTPUT_DIRECTORY, FIXTURE_TAXONOMY_PATH};

/// A throwaway directory tree laid out like a real pipeline run.
pub struct Fixture {
    dir: TempDir,
    pub config: PipelineConfig,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path();

        let config = PipelineConfig {
            input_dir: root.join(&*FIXTURE_INPUT_DIRECTORY),
            output_dir: root.join(&*FIXTURE_OUTPUT_DIRECTORY),
            taxonomy_path: root.join(&*FIXTURE_TAXONOMY_PATH),
            ..PipelineConfig::default()
        };
        fs::create_dir_all(&config.input_dir).expect("Failed to create input dir");

        Fixture { dir, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.config.clone())
    }

    pub fn write_taxonomy(&self, csv: &str) {
        let path = &self.config.taxonomy_path;
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create taxonomy dir");
        fs::write(path, csv).expect("Failed to write taxonomy");
    }

    /// Places a report file of a company in the input directory.
    pub fn add_report(&self, company: &str, file_name: &str, content: &str) -> PathBuf {
        let company_dir = self.config.input_dir.join(company);
        fs::create_dir_all(&company_dir).expect("Failed to create company dir");
        let path = company_dir.join(file_name);
        fs::write(&path, content).expect("Failed to write report");
        path
    }

    /// Writes the token file a tokenizer would have produced for one report year.
    pub fn write_tokens(&self, technology: &TechnologyKey, company: &str, year: &str, words: &[&str]) {
        TokenStore::new(&self.config.output_dir, self.config.compress_tokens)
            .save(technology, company, year, &tokens(words))
            .expect("Failed to write tokens");
    }

    /// Adds one report per year and the same tokens for every technology combination.
    pub fn add_company_with_tokens(&self, company: &str, years_and_words: &[(&str, &[&str])]) {
        for (year, words) in years_and_words {
            self.add_report(company, &format!("{}_{}.pdf", company, year), "");
            for technology in TechnologyKey::all() {
                self.write_tokens(&technology, company, year, words);
            }
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// Builds a labeled table from row-major values.
pub fn table(rows: &[&str], columns: &[&str], values: &[&[f64]]) -> LabeledTable {
    let mut table = LabeledTable::new(rows.iter().map(|row| row.to_string()).collect());
    for (column_index, column) in columns.iter().enumerate() {
        let column_values: Vec<f64> = values.iter().map(|row| row[column_index]).collect();
        table
            .insert_column(column, &column_values)
            .expect("Failed to build table");
    }
    table
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {} but got {}",
        expected,
        actual
    );
}

/// Modification times of every file below a directory, sorted by path.
pub fn snapshot_modification_times(dir: &Path) -> Vec<(PathBuf, std::time::SystemTime)> {
    let mut snapshot = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).expect("Failed to read dir") {
            let entry = entry.expect("Failed to read dir entry");
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else {
                let modified = entry
                    .metadata()
                    .and_then(|metadata| metadata.modified())
                    .expect("Failed to read modification time");
                snapshot.push((path, modified));
            }
        }
    }
    snapshot.sort();
    snapshot
}
