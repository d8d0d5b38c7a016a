use keyword_census::constants::HEURISTIC_DATA_DIRECTORY;
use keyword_census::{
    CompanyResultStore, Extractor, LemmaTokenizer, PagedTextExtractor, Pipeline, PipelineConfig,
    RuleBasedTokenizer, TableKey, TabularStore, TechnologyKey, TokenStore, TokenizerKind,
};
use std::cell::RefCell;
use test_utils::constants::SAMPLE_TAXONOMY_CSV;
use test_utils::{assert_close, snapshot_modification_times, Fixture};

/// Keeps every word and remembers how many words each slice had.
#[derive(Default)]
struct SliceRecordingTokenizer {
    slice_sizes: RefCell<Vec<usize>>,
}

impl LemmaTokenizer for SliceRecordingTokenizer {
    fn tokenizer_kind(&self) -> TokenizerKind {
        TokenizerKind::Spacy
    }

    fn lemmatize_slice(&self, slice: &str) -> Vec<String> {
        let words: Vec<String> = slice.split_whitespace().map(str::to_string).collect();
        self.slice_sizes.borrow_mut().push(words.len());
        words
    }
}

fn fixture_with_two_companies() -> Fixture {
    let fixture = Fixture::new();
    fixture.write_taxonomy(SAMPLE_TAXONOMY_CSV);
    fixture.add_company_with_tokens(
        "ACME",
        &[
            ("2019", &["ki", "ki", "cloud"][..]),
            ("2020", &["künstliche", "intelligenz", "internet"][..]),
        ],
    );
    fixture.add_company_with_tokens(
        "Globex",
        &[
            ("2019", &["ki", "ki", "ki", "ki"][..]),
            ("2020", &["digitalisierung"][..]),
        ],
    );
    fixture
}

#[cfg(test)]
mod pipeline_discovery_tests {
    use super::*;

    #[test]
    fn test_companies_are_sorted_directories() {
        let fixture = fixture_with_two_companies();
        let pipeline = fixture.pipeline();

        assert_eq!(pipeline.companies().unwrap(), vec!["ACME", "Globex"]);
    }

    #[test]
    fn test_missing_input_dir_is_a_missing_prerequisite() {
        let fixture = Fixture::new();
        let config = PipelineConfig {
            input_dir: fixture.root().join("nowhere"),
            ..fixture.config.clone()
        };

        let err = Pipeline::new(config).companies().unwrap_err();
        assert!(err.is_missing_prerequisite());
    }

    #[test]
    fn test_reports_without_year_are_skipped() {
        let fixture = Fixture::new();
        fixture.add_report("ACME", "ACME_2020.pdf", "");
        fixture.add_report("ACME", "summary.pdf", "");
        fixture.add_report("ACME", "ACME_2018.pdf", "");

        let years: Vec<String> = fixture
            .pipeline()
            .reports("ACME")
            .unwrap()
            .into_iter()
            .map(|(year, _)| year)
            .collect();

        assert_eq!(years, vec!["2018", "2020"]);
    }
}

#[cfg(test)]
mod duplicate_year_tests {
    use super::*;

    #[test]
    fn test_last_report_of_a_year_wins() {
        let fixture = Fixture::new();
        let first = fixture.add_report("ACME", "ACME_2019_GB.pdf", "");
        let last = fixture.add_report("ACME", "ACME_2019_summary.pdf", "");

        let reports = fixture.pipeline().reports("ACME").unwrap();

        assert_eq!(reports, vec![("2019".to_string(), last)]);
        assert!(!reports.iter().any(|(_, path)| *path == first));
    }

    #[test]
    fn test_duplicate_year_is_counted_once() {
        let fixture = Fixture::new();
        fixture.write_taxonomy(SAMPLE_TAXONOMY_CSV);
        fixture.add_report("ACME", "ACME_2019_GB.pdf", "");
        fixture.add_report("ACME", "ACME_2019_summary.pdf", "");
        let technology = TechnologyKey::all()[0];
        fixture.write_tokens(&technology, "ACME", "2019", &["ki"]);

        let pipeline = fixture.pipeline();
        pipeline.analyse(technology).unwrap();

        let validation = pipeline
            .store()
            .load_required(&TableKey::KeywordValidation { technology })
            .unwrap();
        let validation = validation.sheet("validation").unwrap();
        assert_eq!(validation.get("KI", "ACME"), Some(1.0));
    }
}

#[cfg(test)]
mod pipeline_stage_tests {
    use super::*;

    #[test]
    fn test_extract_then_tokenize() {
        let fixture = Fixture::new();
        fixture.add_report(
            "ACME",
            "ACME_2019.pdf",
            "KI und Cloud\u{000C}\u{000C}Künstliche Intelligenz\u{000C}",
        );
        let pipeline = fixture.pipeline();

        let extraction = pipeline
            .extract(&PagedTextExtractor::new(Extractor::PdfPlumber))
            .unwrap();
        assert_eq!(extraction.processed, vec!["ACME"]);
        assert_eq!(extraction.gaps.len(), 1);
        assert_eq!(extraction.gaps[0].page, 1);

        let tokenizer = RuleBasedTokenizer::new(TokenizerKind::Spacy);
        pipeline.tokenize(Extractor::PdfPlumber, &tokenizer).unwrap();

        let technology = TechnologyKey::new(Extractor::PdfPlumber, TokenizerKind::Spacy);
        let tokens = TokenStore::new(&fixture.config.output_dir, false)
            .load(&technology, "ACME", "2019")
            .unwrap();
        assert_eq!(tokens, vec!["ki", "cloud", "künstliche", "intelligenz"]);
    }

    #[test]
    fn test_tokenize_uses_configured_slice_length() {
        let mut fixture = Fixture::new();
        fixture.config.slice_length = 2;
        fixture.add_report("ACME", "ACME_2019.pdf", "Cloud Plattform KI Daten Netz");
        let pipeline = fixture.pipeline();
        pipeline
            .extract(&PagedTextExtractor::new(Extractor::PdfPlumber))
            .unwrap();

        let tokenizer = SliceRecordingTokenizer::default();
        pipeline.tokenize(Extractor::PdfPlumber, &tokenizer).unwrap();

        assert_eq!(*tokenizer.slice_sizes.borrow(), vec![2, 2, 1]);
    }

    #[test]
    fn test_tokenize_requires_extraction() {
        let fixture = Fixture::new();
        fixture.add_report("ACME", "ACME_2019.pdf", "KI");

        let tokenizer = RuleBasedTokenizer::new(TokenizerKind::Nltk);
        let err = fixture
            .pipeline()
            .tokenize(Extractor::PyPdf2, &tokenizer)
            .unwrap_err();

        assert!(err.is_missing_prerequisite());
    }

    #[test]
    fn test_analyse_records_frequencies_and_validation() {
        let fixture = fixture_with_two_companies();
        let pipeline = fixture.pipeline();
        let technology = TechnologyKey::all()[0];

        let report = pipeline.analyse(technology).unwrap();
        assert_eq!(report.processed, vec!["ACME", "Globex"]);

        let results = CompanyResultStore::new(pipeline.store(), pipeline.heuristic_root());
        let acme = results.load_required("ACME", &technology).unwrap();
        assert_eq!(acme.get("AI", "2019"), Some(2.0));
        assert_eq!(acme.get("AI", "2020"), Some(1.0));
        assert_eq!(acme.get("Internet", "2020"), Some(1.0));

        let validation = pipeline
            .store()
            .load_required(&TableKey::KeywordValidation { technology })
            .unwrap();
        let validation = validation.sheet("validation").unwrap();
        assert_eq!(validation.get("KI", "ACME"), Some(2.0));
        assert_eq!(validation.get("KI", "Globex"), Some(4.0));
    }

    #[test]
    fn test_analyse_requires_tokens() {
        let fixture = Fixture::new();
        fixture.write_taxonomy(SAMPLE_TAXONOMY_CSV);
        fixture.add_report("ACME", "ACME_2019.pdf", "");

        let err = fixture
            .pipeline()
            .analyse(TechnologyKey::all()[0])
            .unwrap_err();

        assert!(err.is_missing_prerequisite());
    }

    #[test]
    fn test_aggregate_requires_every_technology() {
        let fixture = fixture_with_two_companies();
        let pipeline = fixture.pipeline();

        pipeline.analyse(TechnologyKey::all()[0]).unwrap();
        let err = pipeline.aggregate().unwrap_err();

        assert!(err.is_missing_prerequisite());
    }
}

#[cfg(test)]
mod pipeline_run_all_tests {
    use super::*;

    #[test]
    fn test_run_all_produces_pooled_overview() {
        let fixture = fixture_with_two_companies();
        let pipeline = fixture.pipeline();

        let reports = pipeline.run_all().unwrap();
        assert_eq!(reports.len(), 6);

        let overview = pipeline
            .store()
            .load_required(&TableKey::PooledOverview)
            .unwrap();
        let mean = overview.sheet("mean").unwrap();
        let std = overview.sheet("std").unwrap();

        // Identical tokens for every technology, so the spread is zero
        assert_close(mean.get("2019", "AI").unwrap(), 3.0);
        assert_close(mean.get("2020", "AI").unwrap(), 0.5);
        assert_close(std.get("2019", "AI").unwrap(), 0.0);
        assert_close(mean.get("2020", "Digitalisierung").unwrap(), 0.5);
    }

    #[test]
    fn test_zero_counts_leave_std_in_percent_empty() {
        let fixture = fixture_with_two_companies();
        let pipeline = fixture.pipeline();
        pipeline.run_all().unwrap();

        let statistics = pipeline
            .store()
            .load_required(&TableKey::CompanyStatistics {
                company: "ACME".to_string(),
            })
            .unwrap();

        let std_in_percent = statistics.sheet("std_in_percent").unwrap();
        assert_close(std_in_percent.get("AI", "2019").unwrap(), 0.0);
        assert!(std_in_percent.get("Digitalisierung", "2019").unwrap().is_nan());
    }

    #[test]
    fn test_rerun_skips_everything_and_touches_nothing() {
        let fixture = fixture_with_two_companies();
        let pipeline = fixture.pipeline();
        pipeline.run_all().unwrap();

        let heuristic_dir = fixture.config.output_dir.join(HEURISTIC_DATA_DIRECTORY);
        let before = snapshot_modification_times(&heuristic_dir);

        let reports = pipeline.run_all().unwrap();
        for report in &reports {
            assert!(report.processed.is_empty(), "{} recomputed", report.stage);
        }

        assert_eq!(snapshot_modification_times(&heuristic_dir), before);
    }

    #[test]
    fn test_truncated_manifest_is_recomputed() {
        let fixture = fixture_with_two_companies();
        let pipeline = fixture.pipeline();
        let technology = TechnologyKey::all()[0];
        pipeline.analyse(technology).unwrap();

        let key = TableKey::CompanyResult {
            company: "ACME".to_string(),
            technology,
        };
        let manifest = pipeline.store().location(&key).join("_manifest.json");
        let content = std::fs::read(&manifest).unwrap();
        std::fs::write(&manifest, &content[..content.len() / 2]).unwrap();

        let report = pipeline.analyse(technology).unwrap();
        assert_eq!(report.processed, vec!["ACME"]);
        assert!(pipeline.store().is_complete(&key).unwrap());
    }

    #[test]
    fn test_partial_workbook_is_recomputed() {
        let fixture = fixture_with_two_companies();
        let pipeline = fixture.pipeline();
        let technology = TechnologyKey::all()[0];
        pipeline.analyse(technology).unwrap();

        let key = TableKey::CompanyResult {
            company: "ACME".to_string(),
            technology,
        };
        let manifest = pipeline.store().location(&key).join("_manifest.json");
        std::fs::remove_file(manifest).unwrap();

        let report = pipeline.analyse(technology).unwrap();
        assert_eq!(report.processed, vec!["ACME"]);
        assert_eq!(report.skipped, vec!["Globex"]);
    }
}
