use keyword_census::{CategoryBoundary, Error, KeywordTaxonomy};
use test_utils::constants::SAMPLE_TAXONOMY_CSV;

#[cfg(test)]
mod keyword_taxonomy_tests {
    use super::*;

    #[test]
    fn test_reads_categories_column_wise() {
        let taxonomy =
            KeywordTaxonomy::from_csv_str(SAMPLE_TAXONOMY_CSV, &CategoryBoundary::All).unwrap();

        assert_eq!(
            taxonomy.category_names(),
            vec!["AI", "Digitalisierung", "Internet"]
        );
        assert_eq!(
            taxonomy.keywords_of("AI").unwrap(),
            &["KI", "AI", "Künstliche Intelligenz"]
        );
        assert_eq!(
            taxonomy.keywords_of("Internet").unwrap(),
            &["Internet", "Internet-Technologie"]
        );
    }

    #[test]
    fn test_discards_empty_and_numeric_cells() {
        let csv = "AI,Cloud\nKI,2019\n,Cloud\n3.5,\n";
        let taxonomy = KeywordTaxonomy::from_csv_str(csv, &CategoryBoundary::All).unwrap();

        assert_eq!(taxonomy.keywords_of("AI").unwrap(), &["KI"]);
        assert_eq!(taxonomy.keywords_of("Cloud").unwrap(), &["Cloud"]);
    }

    #[test]
    fn test_count_boundary_keeps_leading_columns() {
        let csv = "AI,Cloud,Notes\nKI,Cloud,ignore me\n";
        let taxonomy = KeywordTaxonomy::from_csv_str(csv, &CategoryBoundary::Count(2)).unwrap();

        assert_eq!(taxonomy.category_names(), vec!["AI", "Cloud"]);
        assert_eq!(taxonomy.keywords(), vec!["KI", "Cloud"]);
    }

    #[test]
    fn test_count_boundary_beyond_columns_is_rejected() {
        let csv = "AI,Cloud\nKI,Cloud\n";
        let result = KeywordTaxonomy::from_csv_str(csv, &CategoryBoundary::Count(3));

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_end_marker_boundary_stops_before_marker() {
        let csv = "AI,Cloud,END,Scratch\nKI,Cloud,,Entwurf\n";
        let boundary = CategoryBoundary::EndMarker("END".to_string());
        let taxonomy = KeywordTaxonomy::from_csv_str(csv, &boundary).unwrap();

        assert_eq!(taxonomy.category_names(), vec!["AI", "Cloud"]);
    }

    #[test]
    fn test_blank_header_is_rejected_without_boundary() {
        let csv = "AI,,Cloud\nKI,x,Cloud\n";
        let result = KeywordTaxonomy::from_csv_str(csv, &CategoryBoundary::All);

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_blank_header_past_boundary_is_ignored() {
        let csv = "AI,Cloud,,\nKI,Cloud,x,y\n";
        let taxonomy = KeywordTaxonomy::from_csv_str(csv, &CategoryBoundary::Count(2)).unwrap();

        assert_eq!(taxonomy.len(), 2);
    }

    #[test]
    fn test_keywords_keep_duplicates_across_categories() {
        let csv = "AI,Cloud\nKI,KI\n";
        let taxonomy = KeywordTaxonomy::from_csv_str(csv, &CategoryBoundary::All).unwrap();

        assert_eq!(taxonomy.keywords(), vec!["KI", "KI"]);
    }

    #[test]
    fn test_missing_file_is_a_missing_prerequisite() {
        let result = KeywordTaxonomy::from_path(
            std::path::Path::new("does/not/exist.csv"),
            &CategoryBoundary::All,
        );

        assert!(result.unwrap_err().is_missing_prerequisite());
    }
}
