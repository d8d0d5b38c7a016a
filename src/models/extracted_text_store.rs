use crate::constants::EXTRACTED_TEXTS_DIRECTORY;
use crate::utils::sanitize_file_name;
use crate::{Error, Extractor};
use std::fs;
use std::path::{Path, PathBuf};

/// Keeps the raw text of every report, filed by extractor and company.
pub struct ExtractedTextStore {
    root: PathBuf,
}

impl ExtractedTextStore {
    /// `output_dir` is the directory holding `ExtractedTexts`.
    pub fn new(output_dir: &Path) -> Self {
        ExtractedTextStore {
            root: output_dir.join(EXTRACTED_TEXTS_DIRECTORY),
        }
    }

    /// `<extractor>/<company>/<report name>.txt`
    pub fn text_path(&self, extractor: Extractor, company: &str, report: &Path) -> PathBuf {
        let file_name = report
            .file_name()
            .map(|name| PathBuf::from(name).with_extension("txt"))
            .unwrap_or_else(|| PathBuf::from("report.txt"));

        self.root
            .join(extractor.name())
            .join(sanitize_file_name(company))
            .join(file_name)
    }

    pub fn save(
        &self,
        extractor: Extractor,
        company: &str,
        report: &Path,
        text: &str,
    ) -> Result<PathBuf, Error> {
        let path = self.text_path(extractor, company, report);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, text)?;
        Ok(path)
    }

    pub fn load(&self, extractor: Extractor, company: &str, report: &Path) -> Result<String, Error> {
        let path = self.text_path(extractor, company, report);
        if !path.exists() {
            return Err(Error::MissingPrerequisite(path));
        }
        Ok(fs::read_to_string(&path)?)
    }
}
