use crate::constants::{MEAN_SHEET, STD_IN_PERCENT_SHEET, STD_SHEET};
use crate::types::{CategoryName, Year};
use crate::utils::{mean, percentage_error, population_std};
use crate::{
    CompanyResultStore, Error, LabeledTable, StageOutcome, TableKey, TabularStore, TechnologyKey,
    Workbook,
};
use log::info;

/// Spread of one company's counts across the technology combinations.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnologyStatistics {
    pub mean: LabeledTable,
    /// Population standard deviation (divisor `N`).
    pub std: LabeledTable,
    /// `std / mean × 100`; undefined where the mean is zero.
    pub percentage_error: LabeledTable,
}

impl TechnologyStatistics {
    /// Stacks the category × year tables of several technologies and reduces every
    /// (category, year) cell across them.
    ///
    /// Tables are matched by label: categories keep the order in which they are first seen,
    /// years are sorted. Cells a technology does not have are left out of the reduction.
    pub fn from_technology_tables(tables: &[LabeledTable]) -> Self {
        let mut categories: Vec<CategoryName> = Vec::new();
        let mut years: Vec<Year> = Vec::new();
        for table in tables {
            for category in table.row_labels() {
                if !categories.contains(category) {
                    categories.push(category.clone());
                }
            }
            for year in table.column_labels() {
                if !years.contains(year) {
                    years.push(year.clone());
                }
            }
        }
        years.sort();

        let mut means = LabeledTable::filled_with_nan(categories.clone(), years.clone());
        let mut stds = LabeledTable::filled_with_nan(categories.clone(), years.clone());
        let mut percentage_errors = LabeledTable::filled_with_nan(categories.clone(), years.clone());

        for category in &categories {
            for year in &years {
                let stacked: Vec<f64> = tables
                    .iter()
                    .filter_map(|table| table.get(category, year))
                    .collect();

                let cell_mean = mean(&stacked);
                let cell_std = population_std(&stacked);

                means.set(category, year, cell_mean);
                stds.set(category, year, cell_std);
                percentage_errors.set(category, year, percentage_error(cell_std, cell_mean));
            }
        }

        TechnologyStatistics {
            mean: means,
            std: stds,
            percentage_error: percentage_errors,
        }
    }

    pub fn to_workbook(&self) -> Workbook {
        Workbook::new()
            .with_sheet(MEAN_SHEET, self.mean.clone())
            .with_sheet(STD_SHEET, self.std.clone())
            .with_sheet(STD_IN_PERCENT_SHEET, self.percentage_error.clone())
    }

    pub fn from_workbook(workbook: &Workbook) -> Result<Self, Error> {
        Ok(TechnologyStatistics {
            mean: workbook.require_sheet(MEAN_SHEET)?.clone(),
            std: workbook.require_sheet(STD_SHEET)?.clone(),
            percentage_error: workbook.require_sheet(STD_IN_PERCENT_SHEET)?.clone(),
        })
    }
}

/// Merges the results of all technology combinations of a company into one statistics
/// workbook.
pub struct CrossTechnologyAggregator<'a> {
    store: &'a dyn TabularStore,
    results: &'a CompanyResultStore<'a>,
    technologies: Vec<TechnologyKey>,
}

impl<'a> CrossTechnologyAggregator<'a> {
    pub fn new(store: &'a dyn TabularStore, results: &'a CompanyResultStore<'a>) -> Self {
        CrossTechnologyAggregator {
            store,
            results,
            technologies: TechnologyKey::all(),
        }
    }

    /// Restricts aggregation to a subset of technology combinations.
    pub fn with_technologies(mut self, technologies: Vec<TechnologyKey>) -> Self {
        self.technologies = technologies;
        self
    }

    fn key(company: &str) -> TableKey {
        TableKey::CompanyStatistics {
            company: company.to_string(),
        }
    }

    /// Computes and saves the statistics of a company, unless they are already complete.
    ///
    /// Every technology's result table must exist.
    pub fn aggregate(&self, company: &str) -> Result<StageOutcome<TechnologyStatistics>, Error> {
        let key = Self::key(company);
        if self.store.is_complete(&key)? {
            info!("Statistics of {} already complete, skipping", company);
            return Ok(StageOutcome::Skipped);
        }

        let tables = self
            .technologies
            .iter()
            .map(|technology| self.results.load_required(company, technology))
            .collect::<Result<Vec<LabeledTable>, Error>>()?;

        let statistics = TechnologyStatistics::from_technology_tables(&tables);
        self.store.save(&key, &statistics.to_workbook())?;

        info!(
            "Aggregated {} technology results of {}",
            tables.len(),
            company
        );

        Ok(StageOutcome::Computed(statistics))
    }

    pub fn load(&self, company: &str) -> Result<TechnologyStatistics, Error> {
        let workbook = self.store.load_required(&Self::key(company))?;
        TechnologyStatistics::from_workbook(&workbook)
    }
}
