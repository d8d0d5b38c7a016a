use crate::constants::{MEAN_SHEET, POOLED_COLUMN, STD_SHEET};
use crate::types::{CategoryName, CompanyName, Year};
use crate::utils::mean;
use crate::{
    Error, LabeledTable, StageOutcome, TableKey, TabularStore, TechnologyStatistics, Workbook,
};
use log::{info, warn};

/// Cross-company view of one category: year × company tables of the per-company means and stds,
/// each with a trailing pooled column.
///
/// The pooled std is the plain mean of the companies' stds. This is an approximation and not
/// a pooled variance; it matches the heuristic the downstream comparisons were built on.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: CategoryName,
    pub mean: LabeledTable,
    pub std: LabeledTable,
}

impl CategorySummary {
    /// Fails if a company carries the label of the pooled column.
    pub fn from_company_statistics(
        category: &str,
        company_statistics: &[(CompanyName, TechnologyStatistics)],
    ) -> Result<Self, Error> {
        if let Some((company, _)) = company_statistics
            .iter()
            .find(|(company, _)| company == POOLED_COLUMN)
        {
            return Err(Error::ParserError(format!(
                "Company name '{}' is reserved for the pooled column; rename its directory",
                company
            )));
        }

        let mut years: Vec<Year> = Vec::new();
        for (_, statistics) in company_statistics {
            for year in statistics.mean.column_labels() {
                if !years.contains(year) {
                    years.push(year.clone());
                }
            }
        }
        years.sort();

        let companies: Vec<CompanyName> = company_statistics
            .iter()
            .map(|(company, _)| company.clone())
            .collect();

        let mut means = LabeledTable::new(years.clone());
        let mut stds = LabeledTable::new(years.clone());

        for (company, statistics) in company_statistics {
            if statistics.mean.row_index(category).is_none() {
                warn!("{} has no statistics for category {}", company, category);
            }

            let company_means: Vec<f64> = years
                .iter()
                .map(|year| statistics.mean.get(category, year).unwrap_or(f64::NAN))
                .collect();
            let company_stds: Vec<f64> = years
                .iter()
                .map(|year| statistics.std.get(category, year).unwrap_or(f64::NAN))
                .collect();

            means.insert_column(company, &company_means)?;
            stds.insert_column(company, &company_stds)?;
        }

        let pooled_means = pool_rows(&means, &companies);
        let pooled_stds = pool_rows(&stds, &companies);
        means.insert_column(POOLED_COLUMN, &pooled_means)?;
        stds.insert_column(POOLED_COLUMN, &pooled_stds)?;

        Ok(CategorySummary {
            category: category.to_string(),
            mean: means,
            std: stds,
        })
    }

    /// Pooled mean per year.
    pub fn pooled_mean(&self) -> Vec<(Year, f64)> {
        pooled_column(&self.mean)
    }

    /// Mean of the companies' stds per year.
    pub fn pooled_std(&self) -> Vec<(Year, f64)> {
        pooled_column(&self.std)
    }

    pub fn to_workbook(&self) -> Workbook {
        Workbook::new()
            .with_sheet(MEAN_SHEET, self.mean.clone())
            .with_sheet(STD_SHEET, self.std.clone())
    }

    pub fn from_workbook(category: &str, workbook: &Workbook) -> Result<Self, Error> {
        Ok(CategorySummary {
            category: category.to_string(),
            mean: workbook.require_sheet(MEAN_SHEET)?.clone(),
            std: workbook.require_sheet(STD_SHEET)?.clone(),
        })
    }
}

/// Pooled means and stds of every category, year × category.
#[derive(Debug, Clone, PartialEq)]
pub struct PooledOverview {
    pub mean: LabeledTable,
    pub std: LabeledTable,
}

impl PooledOverview {
    pub fn from_summaries(summaries: &[CategorySummary]) -> Result<Self, Error> {
        let mut years: Vec<Year> = Vec::new();
        for summary in summaries {
            for year in summary.mean.row_labels() {
                if !years.contains(year) {
                    years.push(year.clone());
                }
            }
        }
        years.sort();

        let mut means = LabeledTable::new(years.clone());
        let mut stds = LabeledTable::new(years.clone());

        for summary in summaries {
            let pooled_means: Vec<f64> = years
                .iter()
                .map(|year| summary.mean.get(year, POOLED_COLUMN).unwrap_or(f64::NAN))
                .collect();
            let pooled_stds: Vec<f64> = years
                .iter()
                .map(|year| summary.std.get(year, POOLED_COLUMN).unwrap_or(f64::NAN))
                .collect();

            means.insert_column(&summary.category, &pooled_means)?;
            stds.insert_column(&summary.category, &pooled_stds)?;
        }

        Ok(PooledOverview {
            mean: means,
            std: stds,
        })
    }

    pub fn to_workbook(&self) -> Workbook {
        Workbook::new()
            .with_sheet(MEAN_SHEET, self.mean.clone())
            .with_sheet(STD_SHEET, self.std.clone())
    }
}

/// Builds and persists the per-category summaries and the pooled overview.
pub struct CategorySummarizer<'a> {
    store: &'a dyn TabularStore,
}

impl<'a> CategorySummarizer<'a> {
    pub fn new(store: &'a dyn TabularStore) -> Self {
        CategorySummarizer { store }
    }

    fn key(category: &str) -> TableKey {
        TableKey::CategorySummary {
            category: category.to_string(),
        }
    }

    pub fn summarize(
        &self,
        category: &str,
        company_statistics: &[(CompanyName, TechnologyStatistics)],
    ) -> Result<StageOutcome<CategorySummary>, Error> {
        let key = Self::key(category);
        if self.store.is_complete(&key)? {
            info!("Summary of category {} already complete, skipping", category);
            return Ok(StageOutcome::Skipped);
        }

        let summary = CategorySummary::from_company_statistics(category, company_statistics)?;
        self.store.save(&key, &summary.to_workbook())?;

        info!(
            "Summarized category {} across {} companies",
            category,
            company_statistics.len()
        );

        Ok(StageOutcome::Computed(summary))
    }

    pub fn load(&self, category: &str) -> Result<CategorySummary, Error> {
        let workbook = self.store.load_required(&Self::key(category))?;
        CategorySummary::from_workbook(category, &workbook)
    }

    /// Merges the pooled columns of the given categories' summaries into one overview.
    pub fn pool_overview(
        &self,
        categories: &[CategoryName],
    ) -> Result<StageOutcome<PooledOverview>, Error> {
        let key = TableKey::PooledOverview;
        if self.store.is_complete(&key)? {
            info!("Pooled overview already complete, skipping");
            return Ok(StageOutcome::Skipped);
        }

        let summaries = categories
            .iter()
            .map(|category| self.load(category))
            .collect::<Result<Vec<CategorySummary>, Error>>()?;

        let overview = PooledOverview::from_summaries(&summaries)?;
        self.store.save(&key, &overview.to_workbook())?;

        info!("Pooled {} categories", summaries.len());

        Ok(StageOutcome::Computed(overview))
    }
}

fn pool_rows(table: &LabeledTable, companies: &[CompanyName]) -> Vec<f64> {
    table
        .row_labels()
        .iter()
        .map(|year| {
            let values: Vec<f64> = companies
                .iter()
                .map(|company| table.get(year, company).unwrap_or(f64::NAN))
                .collect();
            mean(&values)
        })
        .collect()
}

fn pooled_column(table: &LabeledTable) -> Vec<(Year, f64)> {
    table
        .row_labels()
        .iter()
        .map(|year| {
            (
                year.clone(),
                table.get(year, POOLED_COLUMN).unwrap_or(f64::NAN),
            )
        })
        .collect()
}
