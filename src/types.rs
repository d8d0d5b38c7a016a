// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the lowercase lemmas produced by a
/// tokenizer for one report.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A single keyword of the taxonomy, as written in the taxonomy file (original casing,
/// possibly hyphenated or containing several words).
pub type Keyword = String;

/// Name of a keyword category (e.g. `"AI"`, `"Digitalisierung"`).
pub type CategoryName = String;

/// Represents the name of a company. Company names double as directory names.
pub type CompanyName = String;

/// A four-digit report year, kept as a string since it is used as a table column label.
pub type Year = String;

/// Represents the total number of occurrences of a keyword (or of all keywords of a category)
/// within a token sequence.
pub type KeywordFrequency = usize;

/// Name of a sheet within a persisted workbook (e.g. `"mean"`, `"std"`).
pub type SheetName = String;
