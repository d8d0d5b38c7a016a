use crate::constants::PAGE_SEPARATOR;
use crate::{Error, Extractor};
use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A page which yielded no text. Recorded for manual review, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionGap {
    pub file: PathBuf,
    /// Zero-based page index.
    pub page: usize,
}

impl fmt::Display for ExtractionGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (page {})", self.file.display(), self.page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub gaps: Vec<ExtractionGap>,
}

/// Turns a report file into raw text.
pub trait TextExtractor {
    /// Technology the text is filed under.
    fn extractor(&self) -> Extractor;

    /// Extracts the text of every page. Pages without text become gaps instead of failing the
    /// whole document.
    fn extract(&self, path: &Path) -> Result<ExtractedText, Error>;
}

/// Imports page-delimited plain text (pages separated by form feeds), the output format of
/// common PDF-to-text tools.
pub struct PagedTextExtractor {
    extractor: Extractor,
}

impl PagedTextExtractor {
    pub fn new(extractor: Extractor) -> Self {
        PagedTextExtractor { extractor }
    }

    pub fn extract_from_str(&self, path: &Path, content: &str) -> ExtractedText {
        let mut pages: Vec<&str> = content.split(PAGE_SEPARATOR).collect();

        // A trailing separator closes the last page rather than opening a new one
        if pages.len() > 1 && pages.last().map_or(false, |page| page.trim().is_empty()) {
            pages.pop();
        }

        let mut extracted = ExtractedText::default();
        for (page_index, page) in pages.iter().enumerate() {
            if page.trim().is_empty() {
                debug!("No text on page {} of {:?}", page_index, path);
                extracted.gaps.push(ExtractionGap {
                    file: path.to_path_buf(),
                    page: page_index,
                });
                continue;
            }
            extracted.text.push('\n');
            extracted.text.push_str(page);
        }

        extracted
    }
}

impl TextExtractor for PagedTextExtractor {
    fn extractor(&self) -> Extractor {
        self.extractor
    }

    fn extract(&self, path: &Path) -> Result<ExtractedText, Error> {
        if !path.exists() {
            return Err(Error::MissingPrerequisite(path.to_path_buf()));
        }
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.extract_from_str(path, &content))
    }
}
