pub mod config;
pub use config::{CategoryBoundary, ConfigFile, PipelineConfig};
pub mod constants;
pub mod models;
pub use models::{
    BatchReport, CategorySummarizer, CategorySummary, CompanyResultStore, CompletionManifest,
    CrossTechnologyAggregator, CsvTabularStore, Error, ExtractedText, ExtractedTextStore,
    ExtractionGap, Extractor, FrequencyVector, HeuristicAnalyzer, KeywordLedger, KeywordTaxonomy,
    KeywordValidationTable, LabeledTable, LedgerEntry, LemmaTokenizer, PagedTextExtractor,
    Pipeline, PooledOverview, ProgressTracker, RuleBasedTokenizer, StageOutcome, TableKey,
    TabularStore, TechnologyKey, TechnologyStatistics, TextExtractor, TokenStore, TokenizerKind,
    Workbook,
};
pub mod types;
pub mod utils;
pub use types::{CategoryName, CompanyName, Keyword, KeywordFrequency, Token, TokenRef, Year};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Counts the occurrences of a single keyword in a token sequence.
///
/// See [`utils::count_keyword_occurrences`] for the matching rules.
pub fn count_keyword(keyword: &str, tokens: &[Token]) -> KeywordFrequency {
    utils::count_keyword_occurrences(keyword, tokens)
}

/// Computes the per-category frequency vector of one token sequence.
pub fn analyse_tokens(tokens: &[Token], taxonomy: &KeywordTaxonomy) -> FrequencyVector {
    let mut analyzer = HeuristicAnalyzer::new(taxonomy, "");
    analyzer.analyse_tokens(tokens)
}
