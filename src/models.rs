pub mod category_summarizer;
pub use category_summarizer::{CategorySummarizer, CategorySummary, PooledOverview};

pub mod company_result_store;
pub use company_result_store::CompanyResultStore;

pub mod completion_manifest;
pub use completion_manifest::CompletionManifest;

pub mod cross_technology_aggregator;
pub use cross_technology_aggregator::{CrossTechnologyAggregator, TechnologyStatistics};

pub mod error;
pub use error::Error;

pub mod extracted_text_store;
pub use extracted_text_store::ExtractedTextStore;

pub mod frequency_vector;
pub use frequency_vector::FrequencyVector;

pub mod heuristic_analyzer;
pub use heuristic_analyzer::HeuristicAnalyzer;

pub mod keyword_ledger;
pub use keyword_ledger::{KeywordLedger, LedgerEntry};

pub mod keyword_taxonomy;
pub use keyword_taxonomy::KeywordTaxonomy;

pub mod keyword_validation_table;
pub use keyword_validation_table::KeywordValidationTable;

pub mod labeled_table;
pub use labeled_table::LabeledTable;

pub mod pipeline;
pub use pipeline::{BatchReport, Pipeline};

pub mod progress_tracker;
pub use progress_tracker::ProgressTracker;

pub mod stage_outcome;
pub use stage_outcome::StageOutcome;

pub mod tabular_store;
pub use tabular_store::{CsvTabularStore, TableKey, TabularStore, Workbook};

pub mod technology;
pub use technology::{Extractor, TechnologyKey, TokenizerKind};

pub mod text_extractor;
pub use text_extractor::{ExtractedText, ExtractionGap, PagedTextExtractor, TextExtractor};

pub mod token_store;
pub use token_store::TokenStore;

pub mod tokenizer;
pub use tokenizer::{preprocess_text, LemmaTokenizer, RuleBasedTokenizer};
