pub mod count_keyword_occurrences;
pub mod extract_year;
pub mod format_duration;
pub mod population_statistics;
pub mod sanitize_file_name;
pub mod slice_words;

pub use count_keyword_occurrences::count_keyword_occurrences;
pub use extract_year::extract_year;
pub use format_duration::format_duration;
pub use population_statistics::{mean, percentage_error, population_std};
pub use sanitize_file_name::sanitize_file_name;
pub use slice_words::slice_words;
