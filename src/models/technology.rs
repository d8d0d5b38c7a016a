use crate::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Library used to pull the raw text out of a PDF report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Extractor {
    PdfPlumber,
    PyPdf2,
}

/// Library used to tokenize and lemmatize the extracted text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenizerKind {
    Spacy,
    Nltk,
}

/// One of the four (extractor × tokenizer) data-collection pipelines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TechnologyKey {
    pub extractor: Extractor,
    pub tokenizer: TokenizerKind,
}

impl Extractor {
    pub const ALL: [Extractor; 2] = [Extractor::PdfPlumber, Extractor::PyPdf2];

    /// Directory name used for everything this extractor produced.
    pub fn name(self) -> &'static str {
        match self {
            Extractor::PdfPlumber => "pdfplumber",
            Extractor::PyPdf2 => "pypdf2",
        }
    }
}

impl TokenizerKind {
    pub const ALL: [TokenizerKind; 2] = [TokenizerKind::Spacy, TokenizerKind::Nltk];

    /// Directory name (and token file prefix) used for this tokenizer.
    pub fn name(self) -> &'static str {
        match self {
            TokenizerKind::Spacy => "spacy",
            TokenizerKind::Nltk => "nltk",
        }
    }
}

impl TechnologyKey {
    pub fn new(extractor: Extractor, tokenizer: TokenizerKind) -> Self {
        TechnologyKey {
            extractor,
            tokenizer,
        }
    }

    /// All four combinations, extractor-major.
    pub fn all() -> Vec<TechnologyKey> {
        Extractor::ALL
            .iter()
            .flat_map(|&extractor| {
                TokenizerKind::ALL
                    .iter()
                    .map(move |&tokenizer| TechnologyKey::new(extractor, tokenizer))
            })
            .collect()
    }

    /// Relative directory (`<extractor>/<tokenizer>`) of this combination.
    pub fn relative_dir(&self) -> PathBuf {
        PathBuf::from(self.extractor.name()).join(self.tokenizer.name())
    }
}

impl fmt::Display for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TechnologyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.extractor, self.tokenizer)
    }
}

impl FromStr for Extractor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Extractor::ALL
            .into_iter()
            .find(|extractor| extractor.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::ParserError(format!("Unknown extractor: {}", s)))
    }
}

impl FromStr for TokenizerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenizerKind::ALL
            .into_iter()
            .find(|tokenizer| tokenizer.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::ParserError(format!("Unknown tokenizer: {}", s)))
    }
}
