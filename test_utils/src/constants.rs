#![allow(unused)] // Ignore due to all constants not being utilized across all test files

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables, relative to a fixture root
pub static FIXTURE_INPUT_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("assets", "PDF-Data"));

pub static FIXTURE_OUTPUT_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("ExtractedData"));

pub static FIXTURE_TAXONOMY_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("assets", "keywords.csv"));

pub static SAMPLE_TAXONOMY_CSV: &str = "\
AI,Digitalisierung,Internet
KI,Digitalisierung,Internet
AI,Digitalisierungsstrategie,Internet-Technologie
Künstliche Intelligenz,,
";
