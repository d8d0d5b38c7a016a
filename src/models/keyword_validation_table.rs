use crate::types::{Keyword, KeywordFrequency};

/// Running per-keyword totals of one company + technology pass.
///
/// Totals only ever grow; a new table is started for every company.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordValidationTable {
    entries: Vec<(Keyword, KeywordFrequency)>,
}

impl KeywordValidationTable {
    /// Seeds the table with every keyword at zero so that keywords which never occur are still
    /// reported.
    pub fn with_keywords<'a, I>(keywords: I) -> Self
    where
        I: IntoIterator<Item = &'a Keyword>,
    {
        let mut table = KeywordValidationTable::default();
        for keyword in keywords {
            table.record(keyword, 0);
        }
        table
    }

    /// Adds `frequency` to the keyword's running total.
    pub fn record(&mut self, keyword: &str, frequency: KeywordFrequency) {
        match self.entries.iter_mut().find(|(k, _)| k == keyword) {
            Some((_, total)) => *total += frequency,
            None => self.entries.push((keyword.to_string(), frequency)),
        }
    }

    pub fn get(&self, keyword: &str) -> Option<KeywordFrequency> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Keyword, KeywordFrequency)> {
        self.entries.iter().map(|(keyword, total)| (keyword, *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
