use crate::types::{CompanyName, Token};
use crate::utils::count_keyword_occurrences;
use crate::{
    CompanyResultStore, Error, FrequencyVector, KeywordTaxonomy, KeywordValidationTable,
    LabeledTable,
};
use log::debug;

/// Counts the taxonomy keywords of one company + technology pass, year by year.
///
/// Every analysed year is appended as a column to the company result table, while the
/// per-keyword counts accumulate in the validation table.
pub struct HeuristicAnalyzer<'a> {
    taxonomy: &'a KeywordTaxonomy,
    company: CompanyName,
    validation_table: KeywordValidationTable,
    result_table: LabeledTable,
}

impl<'a> HeuristicAnalyzer<'a> {
    pub fn new(taxonomy: &'a KeywordTaxonomy, company: &str) -> Self {
        HeuristicAnalyzer {
            taxonomy,
            company: company.to_string(),
            validation_table: KeywordValidationTable::with_keywords(taxonomy.keywords()),
            result_table: CompanyResultStore::empty_table(taxonomy),
        }
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    /// Computes the frequency vector of one token sequence and adds every keyword count to the
    /// validation table.
    pub fn analyse_tokens(&mut self, tokens: &[Token]) -> FrequencyVector {
        let mut frequency_vector = FrequencyVector::new();

        for (category, keywords) in self.taxonomy.categories() {
            let mut category_frequency = 0;

            for keyword in keywords {
                let keyword_frequency = count_keyword_occurrences(keyword, tokens);
                self.validation_table.record(keyword, keyword_frequency);
                category_frequency += keyword_frequency;
            }

            frequency_vector.push(category, category_frequency);
        }

        frequency_vector
    }

    /// Analyses the tokens of one report year and appends the result as a new year column.
    pub fn analyse_year(&mut self, year: &str, tokens: &[Token]) -> Result<FrequencyVector, Error> {
        let frequency_vector = self.analyse_tokens(tokens);

        debug!(
            "{} {}: {} keyword occurrences in {} tokens",
            self.company,
            year,
            frequency_vector.total(),
            tokens.len()
        );

        CompanyResultStore::append_year(&mut self.result_table, year, &frequency_vector)?;

        Ok(frequency_vector)
    }

    pub fn validation_table(&self) -> &KeywordValidationTable {
        &self.validation_table
    }

    pub fn result_table(&self) -> &LabeledTable {
        &self.result_table
    }

    pub fn into_parts(self) -> (LabeledTable, KeywordValidationTable) {
        (self.result_table, self.validation_table)
    }
}
