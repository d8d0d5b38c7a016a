use crate::constants::{
    CATEGORY_SUMMARIES_WORKBOOK, KEYWORD_FREQUENCY_WORKBOOK, KEYWORD_VALIDATION_WORKBOOK,
    POOLED_OVERVIEW_WORKBOOK, STATISTICS_WORKBOOK,
};
use crate::models::completion_manifest::{sha256_hex, SheetDigest};
use crate::types::{CategoryName, CompanyName, SheetName};
use crate::utils::sanitize_file_name;
use crate::{CompletionManifest, Error, LabeledTable, TechnologyKey};
use log::{debug, warn};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Identifies one persisted workbook.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableKey {
    /// Raw category × year frequencies of one company for one technology combination.
    CompanyResult {
        company: CompanyName,
        technology: TechnologyKey,
    },
    /// Keyword × company grand totals of one technology combination.
    KeywordValidation { technology: TechnologyKey },
    /// Cross-technology mean, std and std-in-percent of one company.
    CompanyStatistics { company: CompanyName },
    /// Pooled cross-company mean and std of one category.
    CategorySummary { category: CategoryName },
    /// Pooled means and stds of all categories side by side.
    PooledOverview,
}

impl TableKey {
    pub fn relative_dir(&self) -> PathBuf {
        match self {
            TableKey::CompanyResult {
                company,
                technology,
            } => technology
                .relative_dir()
                .join(KEYWORD_FREQUENCY_WORKBOOK)
                .join(sanitize_file_name(company)),
            TableKey::KeywordValidation { technology } => {
                technology.relative_dir().join(KEYWORD_VALIDATION_WORKBOOK)
            }
            TableKey::CompanyStatistics { company } => {
                PathBuf::from(STATISTICS_WORKBOOK).join(sanitize_file_name(company))
            }
            TableKey::CategorySummary { category } => {
                PathBuf::from(CATEGORY_SUMMARIES_WORKBOOK).join(sanitize_file_name(category))
            }
            TableKey::PooledOverview => PathBuf::from(POOLED_OVERVIEW_WORKBOOK),
        }
    }
}

/// Named sheets of labeled tables, persisted together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<(SheetName, LabeledTable)>,
}

impl Workbook {
    pub fn new() -> Self {
        Workbook { sheets: Vec::new() }
    }

    pub fn with_sheet(mut self, name: &str, table: LabeledTable) -> Self {
        self.insert_sheet(name, table);
        self
    }

    pub fn insert_sheet(&mut self, name: &str, table: LabeledTable) {
        match self.sheets.iter_mut().find(|(sheet, _)| sheet == name) {
            Some((_, existing)) => *existing = table,
            None => self.sheets.push((name.to_string(), table)),
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&LabeledTable> {
        self.sheets
            .iter()
            .find(|(sheet, _)| sheet == name)
            .map(|(_, table)| table)
    }

    /// Like [`Workbook::sheet`], but a missing sheet is an error.
    pub fn require_sheet(&self, name: &str) -> Result<&LabeledTable, Error> {
        self.sheet(name)
            .ok_or_else(|| Error::ParserError(format!("Workbook has no sheet named '{}'", name)))
    }

    pub fn sheets(&self) -> impl Iterator<Item = (&SheetName, &LabeledTable)> {
        self.sheets.iter().map(|(name, table)| (name, table))
    }

    pub fn into_sheet(self, name: &str) -> Option<LabeledTable> {
        self.sheets
            .into_iter()
            .find(|(sheet, _)| sheet == name)
            .map(|(_, table)| table)
    }
}

/// Durable storage of workbooks.
pub trait TabularStore {
    /// Whether the workbook was completely written by an earlier run.
    fn is_complete(&self, key: &TableKey) -> Result<bool, Error>;

    /// Loads a complete workbook, `None` if it is absent or partial.
    fn load(&self, key: &TableKey) -> Result<Option<Workbook>, Error>;

    /// Writes (or overwrites) a workbook and marks it complete.
    fn save(&self, key: &TableKey, workbook: &Workbook) -> Result<(), Error>;

    /// Location used for error reporting.
    fn location(&self, key: &TableKey) -> PathBuf;

    /// Loads a workbook which an earlier stage must have produced.
    fn load_required(&self, key: &TableKey) -> Result<Workbook, Error> {
        self.load(key)?
            .ok_or_else(|| Error::MissingPrerequisite(self.location(key)))
    }
}

/// Stores each workbook as a directory of `<sheet>.csv` files plus a completion manifest.
pub struct CsvTabularStore {
    root: PathBuf,
}

impl CsvTabularStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        CsvTabularStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn workbook_dir(&self, key: &TableKey) -> PathBuf {
        self.root.join(key.relative_dir())
    }
}

impl TabularStore for CsvTabularStore {
    fn is_complete(&self, key: &TableKey) -> Result<bool, Error> {
        let directory = self.workbook_dir(key);

        match CompletionManifest::read(&directory)? {
            Some(manifest) => manifest.verify(&directory),
            None => {
                if directory.exists() {
                    warn!(
                        "{:?} exists without a completion manifest; treating it as partial",
                        directory
                    );
                }
                Ok(false)
            }
        }
    }

    fn load(&self, key: &TableKey) -> Result<Option<Workbook>, Error> {
        if !self.is_complete(key)? {
            return Ok(None);
        }

        let directory = self.workbook_dir(key);
        let manifest = match CompletionManifest::read(&directory)? {
            Some(manifest) => manifest,
            None => return Ok(None),
        };

        let mut workbook = Workbook::new();
        for sheet in &manifest.sheets {
            let file = File::open(directory.join(&sheet.file_name))?;
            workbook.insert_sheet(&sheet.name, LabeledTable::read_csv(file)?);
        }

        debug!("Loaded {:?}", directory);

        Ok(Some(workbook))
    }

    fn save(&self, key: &TableKey, workbook: &Workbook) -> Result<(), Error> {
        let directory = self.workbook_dir(key);
        fs::create_dir_all(&directory)?;

        // Invalidate first so an interrupted save is never mistaken for a complete one
        let manifest_path = CompletionManifest::path_in(&directory);
        if manifest_path.exists() {
            fs::remove_file(&manifest_path)?;
        }

        let mut sheets = Vec::new();
        for (name, table) in workbook.sheets() {
            let file_name = format!("{}.csv", sanitize_file_name(name));

            let mut buffer = Vec::new();
            table.write_csv(&mut buffer)?;
            fs::write(directory.join(&file_name), &buffer)?;

            sheets.push(SheetDigest {
                name: name.clone(),
                file_name,
                sha256: sha256_hex(&buffer),
            });
        }

        CompletionManifest { sheets }.write(&directory)?;

        debug!("Saved {:?}", directory);

        Ok(())
    }

    fn location(&self, key: &TableKey) -> PathBuf {
        self.workbook_dir(key)
    }
}
