use crate::config::PipelineConfig;
use crate::constants::{HEURISTIC_DATA_DIRECTORY, VALIDATION_SHEET};
use crate::types::{CompanyName, Year};
use crate::utils::extract_year;
use crate::{
    CategorySummarizer, CompanyResultStore, CrossTechnologyAggregator, CsvTabularStore, Error,
    ExtractedTextStore, ExtractionGap, Extractor, HeuristicAnalyzer, KeywordLedger,
    KeywordTaxonomy, LabeledTable, LemmaTokenizer, ProgressTracker, StageOutcome, TableKey,
    TabularStore, TechnologyKey, TechnologyStatistics, TextExtractor, TokenStore, Workbook,
};
use log::{error, info, warn};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// What one batch run over all companies (or categories) did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub stage: String,
    pub processed: Vec<String>,
    pub skipped: Vec<String>,
    /// Pages without extractable text, for manual review.
    pub gaps: Vec<ExtractionGap>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn new(stage: &str) -> Self {
        BatchReport {
            stage: stage.to_string(),
            ..Default::default()
        }
    }

    pub fn log_summary(&self) {
        info!(
            "{}: {} processed, {} skipped, finished after {}",
            self.stage,
            self.processed.len(),
            self.skipped.len(),
            crate::utils::format_duration(self.elapsed)
        );

        if !self.gaps.is_empty() {
            warn!(
                "There are {} suspicious pages where no text was found. Please double check and adjust the exported data.",
                self.gaps.len()
            );
            for gap in &self.gaps {
                warn!("    {}", gap);
            }
        }
    }
}

/// Runs the pipeline stages company by company over the configured directories.
pub struct Pipeline {
    config: PipelineConfig,
    store: CsvTabularStore,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let store = CsvTabularStore::new(config.output_dir.join(HEURISTIC_DATA_DIRECTORY));
        Pipeline { config, store }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn store(&self) -> &CsvTabularStore {
        &self.store
    }

    pub fn heuristic_root(&self) -> PathBuf {
        self.store.root().to_path_buf()
    }

    pub fn load_taxonomy(&self) -> Result<KeywordTaxonomy, Error> {
        KeywordTaxonomy::from_path(&self.config.taxonomy_path, &self.config.category_boundary)
    }

    /// Company names are the sub-directories of the input directory, sorted.
    pub fn companies(&self) -> Result<Vec<CompanyName>, Error> {
        let input_dir = &self.config.input_dir;
        if !input_dir.is_dir() {
            return Err(Error::MissingPrerequisite(input_dir.clone()));
        }

        let mut companies = Vec::new();
        for entry in fs::read_dir(input_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                companies.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        companies.sort();

        Ok(companies)
    }

    /// Report files of a company with their year, one per year, sorted by file name. Files
    /// without a year in their name are skipped; of several reports for one year the last file
    /// name wins.
    pub fn reports(&self, company: &str) -> Result<Vec<(Year, PathBuf)>, Error> {
        let company_dir = self.config.input_dir.join(company);
        if !company_dir.is_dir() {
            return Err(Error::MissingPrerequisite(company_dir));
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&company_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let mut reports: Vec<(Year, PathBuf)> = Vec::new();
        for path in paths {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            match extract_year(&file_name) {
                Some(year) => match reports.iter_mut().find(|(existing, _)| *existing == year) {
                    Some(entry) => {
                        warn!(
                            "{} has several reports for {}; {:?} replaces {:?}",
                            company, year, path, entry.1
                        );
                        entry.1 = path;
                    }
                    None => reports.push((year, path)),
                },
                None => warn!("Skipping {:?}: no year in file name", path),
            }
        }

        Ok(reports)
    }

    /// Extracts the text of every report and files it under the extractor.
    pub fn extract(&self, extractor: &dyn TextExtractor) -> Result<BatchReport, Error> {
        let companies = self.companies()?;
        let text_store = ExtractedTextStore::new(&self.config.output_dir);
        let stage = format!("Extraction ({})", extractor.extractor());

        self.run_batch(&stage, &companies, |company| {
            let mut gaps = Vec::new();
            for (_, report) in self.reports(company)? {
                let extracted = extractor.extract(&report)?;
                text_store.save(extractor.extractor(), company, &report, &extracted.text)?;
                gaps.extend(extracted.gaps);
            }
            Ok(StageOutcome::Computed(gaps))
        })
    }

    /// Tokenizes the previously extracted texts of every report, in slices of the configured
    /// length.
    pub fn tokenize(
        &self,
        extractor: Extractor,
        tokenizer: &dyn LemmaTokenizer,
    ) -> Result<BatchReport, Error> {
        let companies = self.companies()?;
        let text_store = ExtractedTextStore::new(&self.config.output_dir);
        let token_store = TokenStore::new(&self.config.output_dir, self.config.compress_tokens);
        let technology = TechnologyKey::new(extractor, tokenizer.tokenizer_kind());
        let stage = format!("Tokenization ({})", technology);

        self.run_batch(&stage, &companies, |company| {
            for (year, report) in self.reports(company)? {
                let text = text_store.load(extractor, company, &report)?;
                let tokens = tokenizer.tokenize_in_slices(&text, self.config.slice_length);
                token_store.save(&technology, company, &year, &tokens)?;
            }
            Ok(StageOutcome::Computed(Vec::new()))
        })
    }

    /// Counts the taxonomy keywords of one company for one technology combination, unless its
    /// result table is already complete.
    pub fn analyse_company(
        &self,
        taxonomy: &KeywordTaxonomy,
        technology: &TechnologyKey,
        company: &str,
    ) -> Result<StageOutcome<LabeledTable>, Error> {
        let results = CompanyResultStore::new(&self.store, self.heuristic_root());
        if results.is_complete(company, technology)? {
            info!(
                "Keyword frequencies of {} ({}) already complete, skipping",
                company, technology
            );
            return Ok(StageOutcome::Skipped);
        }

        let token_store = TokenStore::new(&self.config.output_dir, self.config.compress_tokens);
        let mut analyzer = HeuristicAnalyzer::new(taxonomy, company);

        for (year, _) in self.reports(company)? {
            let tokens = token_store.load(technology, company, &year)?;
            analyzer.analyse_year(&year, &tokens)?;
        }

        let (result_table, validation_table) = analyzer.into_parts();
        results.save(&result_table, &validation_table, company, technology)?;

        Ok(StageOutcome::Computed(result_table))
    }

    /// Runs the keyword analysis of every company for one technology combination and refreshes
    /// the technology's keyword validation table.
    pub fn analyse(&self, technology: TechnologyKey) -> Result<BatchReport, Error> {
        let taxonomy = self.load_taxonomy()?;
        let companies = self.companies()?;
        let stage = format!("Analysis ({})", technology);

        let report = self.run_batch(&stage, &companies, |company| {
            Ok(without_gaps(
                self.analyse_company(&taxonomy, &technology, company)?,
            ))
        })?;

        if !report.processed.is_empty() {
            let validation_table =
                KeywordLedger::for_technology(&self.heuristic_root(), &technology)
                    .validation_table()?;
            self.store.save(
                &TableKey::KeywordValidation { technology },
                &Workbook::new().with_sheet(VALIDATION_SHEET, validation_table),
            )?;
        }

        Ok(report)
    }

    /// Computes the cross-technology statistics of every company.
    pub fn aggregate(&self) -> Result<BatchReport, Error> {
        let companies = self.companies()?;
        let results = CompanyResultStore::new(&self.store, self.heuristic_root());
        let aggregator = CrossTechnologyAggregator::new(&self.store, &results);

        self.run_batch("Aggregation", &companies, |company| {
            Ok(without_gaps(aggregator.aggregate(company)?))
        })
    }

    /// Summarizes every category across companies, then pools all categories into the
    /// overview.
    pub fn summarize(&self) -> Result<BatchReport, Error> {
        let taxonomy = self.load_taxonomy()?;
        let companies = self.companies()?;
        let results = CompanyResultStore::new(&self.store, self.heuristic_root());
        let aggregator = CrossTechnologyAggregator::new(&self.store, &results);
        let summarizer = CategorySummarizer::new(&self.store);

        let company_statistics = companies
            .iter()
            .map(|company| {
                aggregator
                    .load(company)
                    .map(|statistics| (company.clone(), statistics))
            })
            .collect::<Result<Vec<(CompanyName, TechnologyStatistics)>, Error>>()?;

        let categories = taxonomy.category_names();
        let report = self.run_batch("Category summaries", &categories, |category| {
            Ok(without_gaps(
                summarizer.summarize(category, &company_statistics)?,
            ))
        })?;

        if summarizer.pool_overview(&categories)?.is_skipped() {
            info!("Pooled overview left unchanged");
        }

        Ok(report)
    }

    /// Analysis for all four technology combinations, then aggregation and summaries.
    pub fn run_all(&self) -> Result<Vec<BatchReport>, Error> {
        let mut reports = Vec::new();
        for technology in TechnologyKey::all() {
            reports.push(self.analyse(technology)?);
        }
        reports.push(self.aggregate()?);
        reports.push(self.summarize()?);
        Ok(reports)
    }

    fn run_batch<F>(&self, stage: &str, items: &[String], mut work: F) -> Result<BatchReport, Error>
    where
        F: FnMut(&str) -> Result<StageOutcome<Vec<ExtractionGap>>, Error>,
    {
        let mut report = BatchReport::new(stage);
        let mut tracker = ProgressTracker::new(items.len());

        info!("{}...", stage);
        info!("{}", tracker.progress_line());

        for item in items {
            let started = Instant::now();
            let outcome = work(item);
            tracker.record(started.elapsed());

            match outcome {
                Ok(StageOutcome::Computed(gaps)) => {
                    report.processed.push(item.clone());
                    report.gaps.extend(gaps);
                }
                Ok(StageOutcome::Skipped) => report.skipped.push(item.clone()),
                Err(err) => {
                    report.elapsed = tracker.elapsed();
                    if err.is_missing_prerequisite() {
                        error!("It seems like you are missing a previous step: {}", err);
                    } else {
                        error!("{} failed for {}: {}", stage, item, err);
                    }
                    report.log_summary();
                    return Err(err);
                }
            }

            info!("{}", tracker.progress_line());
        }

        report.elapsed = tracker.elapsed();
        report.log_summary();

        Ok(report)
    }
}

fn without_gaps<T>(outcome: StageOutcome<T>) -> StageOutcome<Vec<ExtractionGap>> {
    match outcome {
        StageOutcome::Computed(_) => StageOutcome::Computed(Vec::new()),
        StageOutcome::Skipped => StageOutcome::Skipped,
    }
}
