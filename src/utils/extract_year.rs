use crate::types::Year;
use regex::Regex;
use std::sync::LazyLock;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("year pattern is a valid regex"));

/// Extracts the report year from a file name: the last group of four consecutive ASCII digits.
///
/// Longer digit runs are cut into consecutive, non-overlapping groups of four.
///
/// # Example
/// ```
/// use keyword_census::utils::extract_year;
///
/// assert_eq!(extract_year("adidas_2019_GB.pdf"), Some("2019".to_string()));
/// assert_eq!(extract_year("report_2018-2019.pdf"), Some("2019".to_string()));
/// assert_eq!(extract_year("summary.pdf"), None);
/// ```
pub fn extract_year(file_name: &str) -> Option<Year> {
    YEAR_PATTERN
        .find_iter(file_name)
        .last()
        .map(|year| year.as_str().to_string())
}
