use crate::types::{CategoryName, KeywordFrequency};

/// Per-category keyword counts of one (company, year, technology) triple, in taxonomy order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyVector {
    entries: Vec<(CategoryName, KeywordFrequency)>,
}

impl FrequencyVector {
    pub fn new() -> Self {
        FrequencyVector {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, category: &str, frequency: KeywordFrequency) {
        self.entries.push((category.to_string(), frequency));
    }

    pub fn get(&self, category: &str) -> Option<KeywordFrequency> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, frequency)| *frequency)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryName, KeywordFrequency)> {
        self.entries
            .iter()
            .map(|(category, frequency)| (category, *frequency))
    }

    /// Sum over all categories.
    pub fn total(&self) -> KeywordFrequency {
        self.entries.iter().map(|(_, frequency)| frequency).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
