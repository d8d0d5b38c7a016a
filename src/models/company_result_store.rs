use crate::constants::FREQUENCY_SHEET;
use crate::{
    Error, FrequencyVector, KeywordLedger, KeywordTaxonomy, KeywordValidationTable, LabeledTable,
    TableKey, TabularStore, TechnologyKey, Workbook,
};
use log::info;
use std::path::PathBuf;

/// Persists the category × year frequency table of each (company, technology) pair.
pub struct CompanyResultStore<'a> {
    store: &'a dyn TabularStore,
    heuristic_root: PathBuf,
}

impl<'a> CompanyResultStore<'a> {
    /// `heuristic_root` is where the per-technology keyword ledgers are kept.
    pub fn new<P: Into<PathBuf>>(store: &'a dyn TabularStore, heuristic_root: P) -> Self {
        CompanyResultStore {
            store,
            heuristic_root: heuristic_root.into(),
        }
    }

    fn key(company: &str, technology: &TechnologyKey) -> TableKey {
        TableKey::CompanyResult {
            company: company.to_string(),
            technology: *technology,
        }
    }

    /// A table with one row per taxonomy category and no year columns yet.
    pub fn empty_table(taxonomy: &KeywordTaxonomy) -> LabeledTable {
        LabeledTable::new(taxonomy.category_names())
    }

    pub fn is_complete(&self, company: &str, technology: &TechnologyKey) -> Result<bool, Error> {
        self.store.is_complete(&Self::key(company, technology))
    }

    pub fn load(
        &self,
        company: &str,
        technology: &TechnologyKey,
    ) -> Result<Option<LabeledTable>, Error> {
        Ok(self
            .store
            .load(&Self::key(company, technology))?
            .and_then(|workbook| workbook.into_sheet(FREQUENCY_SHEET)))
    }

    /// Like [`CompanyResultStore::load`], but an absent table means a previous step is missing.
    pub fn load_required(
        &self,
        company: &str,
        technology: &TechnologyKey,
    ) -> Result<LabeledTable, Error> {
        let key = Self::key(company, technology);
        self.store
            .load_required(&key)?
            .into_sheet(FREQUENCY_SHEET)
            .ok_or_else(|| Error::MissingPrerequisite(self.store.location(&key)))
    }

    /// Appends the frequency vector of one year as a new column. Categories unknown to the
    /// table are added as rows; categories missing from the vector stay undefined.
    pub fn append_year(
        table: &mut LabeledTable,
        year: &str,
        frequency_vector: &FrequencyVector,
    ) -> Result<(), Error> {
        for (category, _) in frequency_vector.iter() {
            table.ensure_row(category);
        }

        let values: Vec<f64> = table
            .row_labels()
            .iter()
            .map(|category| {
                frequency_vector
                    .get(category)
                    .map_or(f64::NAN, |frequency| frequency as f64)
            })
            .collect();

        table.insert_column(year, &values)
    }

    /// Saves the frequency table and then records the keyword counts in the technology's
    /// ledger.
    pub fn save(
        &self,
        table: &LabeledTable,
        validation_table: &KeywordValidationTable,
        company: &str,
        technology: &TechnologyKey,
    ) -> Result<(), Error> {
        let workbook = Workbook::new().with_sheet(FREQUENCY_SHEET, table.clone());
        self.store.save(&Self::key(company, technology), &workbook)?;

        KeywordLedger::for_technology(&self.heuristic_root, technology)
            .append(company, validation_table)?;

        info!("Saved keyword frequencies of {} ({})", company, technology);

        Ok(())
    }
}
