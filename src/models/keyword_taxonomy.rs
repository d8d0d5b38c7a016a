use crate::config::CategoryBoundary;
use crate::types::{CategoryName, Keyword};
use crate::Error;
use csv::ReaderBuilder;
use log::{debug, info};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Ordered mapping from category name to its ordered keyword list.
///
/// Category order is fixed once loaded and is used as the row order of every derived table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTaxonomy {
    categories: Vec<(CategoryName, Vec<Keyword>)>,
}

impl KeywordTaxonomy {
    pub fn new(categories: Vec<(CategoryName, Vec<Keyword>)>) -> Self {
        KeywordTaxonomy { categories }
    }

    pub fn from_path(path: &Path, boundary: &CategoryBoundary) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::MissingPrerequisite(path.to_path_buf()));
        }
        info!("Reading keyword taxonomy from {:?}", path);
        Self::from_reader(File::open(path)?, boundary)
    }

    pub fn from_csv_str(csv: &str, boundary: &CategoryBoundary) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(csv), boundary)
    }

    /// Reads a taxonomy laid out column-wise: the header row holds the category names, each
    /// column lists that category's keywords downwards.
    ///
    /// Empty and purely numeric cells are discarded.
    pub fn from_reader<R: Read>(reader: R, boundary: &CategoryBoundary) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let category_count = Self::category_count(&headers, boundary)?;

        let mut categories: Vec<(CategoryName, Vec<Keyword>)> = headers
            .iter()
            .take(category_count)
            .map(|header| (header.trim().to_string(), Vec::new()))
            .collect();

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            for (column_index, (_, keywords)) in categories.iter_mut().enumerate() {
                if let Some(cell) = record.get(column_index) {
                    if is_keyword_cell(cell) {
                        keywords.push(cell.trim().to_string());
                    } else if !cell.trim().is_empty() {
                        debug!("Discarding non-keyword cell {:?}", cell);
                    }
                }
            }
        }

        info!("Loaded {} keyword categories", categories.len());

        Ok(KeywordTaxonomy { categories })
    }

    fn category_count(
        headers: &csv::StringRecord,
        boundary: &CategoryBoundary,
    ) -> Result<usize, Error> {
        let count = match boundary {
            CategoryBoundary::All => headers.len(),
            CategoryBoundary::Count(count) => {
                if *count > headers.len() {
                    return Err(Error::ParserError(format!(
                        "Expected {} categories but the taxonomy only has {} columns",
                        count,
                        headers.len()
                    )));
                }
                *count
            }
            CategoryBoundary::EndMarker(marker) => headers
                .iter()
                .position(|header| header.trim() == marker.trim())
                .unwrap_or(headers.len()),
        };

        if let Some(blank) = headers.iter().take(count).position(|h| h.trim().is_empty()) {
            return Err(Error::ParserError(format!(
                "Taxonomy column {} has no category name; configure a category boundary",
                blank + 1
            )));
        }

        Ok(count)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&CategoryName, &[Keyword])> {
        self.categories
            .iter()
            .map(|(category, keywords)| (category, keywords.as_slice()))
    }

    pub fn category_names(&self) -> Vec<CategoryName> {
        self.categories
            .iter()
            .map(|(category, _)| category.clone())
            .collect()
    }

    pub fn keywords_of(&self, category: &str) -> Option<&[Keyword]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, keywords)| keywords.as_slice())
    }

    /// All keywords in taxonomy order. Keywords listed under several categories appear once per
    /// listing.
    pub fn keywords(&self) -> Vec<&Keyword> {
        self.categories
            .iter()
            .flat_map(|(_, keywords)| keywords.iter())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn is_keyword_cell(cell: &str) -> bool {
    let cell = cell.trim();
    !cell.is_empty() && cell.parse::<f64>().is_err()
}
