use crate::constants::KEYWORD_LEDGER_FILE_NAME;
use crate::types::{CompanyName, Keyword, KeywordFrequency};
use crate::{Error, KeywordValidationTable, LabeledTable, TechnologyKey};
use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// One appended ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub keyword: Keyword,
    pub company: CompanyName,
    pub count: KeywordFrequency,
}

/// Append-only record of keyword counts for one technology combination.
///
/// Every completed company pass appends one row per keyword. Totals are derived on load by
/// summing all rows sharing a (keyword, company) pair, so repeated runs accumulate.
pub struct KeywordLedger {
    path: PathBuf,
}

impl KeywordLedger {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        KeywordLedger { path: path.into() }
    }

    pub fn for_technology(heuristic_root: &Path, technology: &TechnologyKey) -> Self {
        Self::new(
            heuristic_root
                .join(technology.relative_dir())
                .join(KEYWORD_LEDGER_FILE_NAME),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(
        &self,
        company: &str,
        validation_table: &KeywordValidationTable,
    ) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new().has_headers(is_new).from_writer(file);
        for (keyword, count) in validation_table.iter() {
            writer.serialize(LedgerEntry {
                keyword: keyword.clone(),
                company: company.to_string(),
                count,
            })?;
        }
        writer.flush()?;

        info!(
            "Appended {} keyword counts of {} to {:?}",
            validation_table.len(),
            company,
            self.path
        );

        Ok(())
    }

    pub fn entries(&self) -> Result<Vec<LedgerEntry>, Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        reader
            .deserialize()
            .map(|entry| entry.map_err(Error::from))
            .collect()
    }

    /// Grand totals per (keyword, company), in order of first appearance.
    pub fn totals(&self) -> Result<Vec<((Keyword, CompanyName), KeywordFrequency)>, Error> {
        let mut totals: Vec<((Keyword, CompanyName), KeywordFrequency)> = Vec::new();
        let mut positions: HashMap<(Keyword, CompanyName), usize> = HashMap::new();

        for entry in self.entries()? {
            let pair = (entry.keyword, entry.company);
            match positions.get(&pair) {
                Some(&position) => totals[position].1 += entry.count,
                None => {
                    positions.insert(pair.clone(), totals.len());
                    totals.push((pair, entry.count));
                }
            }
        }

        Ok(totals)
    }

    /// Keyword × company table of the grand totals. Pairs never recorded are left undefined.
    pub fn validation_table(&self) -> Result<LabeledTable, Error> {
        let totals = self.totals()?;

        let mut keywords: Vec<Keyword> = Vec::new();
        let mut companies: Vec<CompanyName> = Vec::new();
        for ((keyword, company), _) in &totals {
            if !keywords.contains(keyword) {
                keywords.push(keyword.clone());
            }
            if !companies.contains(company) {
                companies.push(company.clone());
            }
        }

        let mut table = LabeledTable::filled_with_nan(keywords, companies);
        for ((keyword, company), total) in &totals {
            table.set(keyword, company, *total as f64);
        }

        Ok(table)
    }
}
