use keyword_census::{analyse_tokens, HeuristicAnalyzer, KeywordTaxonomy};
use test_utils::tokens;

fn ai_taxonomy() -> KeywordTaxonomy {
    KeywordTaxonomy::new(vec![(
        "AI".to_string(),
        vec!["KI".to_string(), "Künstliche Intelligenz".to_string()],
    )])
}

#[cfg(test)]
mod heuristic_analyzer_tests {
    use super::*;

    #[test]
    fn test_frequency_vector_sums_keywords_per_category() {
        let taxonomy = ai_taxonomy();
        let tokens = tokens(&["ki", "künstliche", "intelligenz", "cloud"]);

        let frequency_vector = analyse_tokens(&tokens, &taxonomy);

        assert_eq!(frequency_vector.get("AI"), Some(2));
        assert_eq!(frequency_vector.len(), 1);
    }

    #[test]
    fn test_category_without_keywords_counts_zero() {
        let taxonomy = KeywordTaxonomy::new(vec![
            ("AI".to_string(), vec!["KI".to_string()]),
            ("Empty".to_string(), Vec::new()),
        ]);

        let frequency_vector = analyse_tokens(&tokens(&["ki"]), &taxonomy);

        assert_eq!(frequency_vector.get("Empty"), Some(0));
        assert_eq!(frequency_vector.total(), 1);
    }

    #[test]
    fn test_validation_table_accumulates_across_years() {
        let taxonomy = ai_taxonomy();
        let mut analyzer = HeuristicAnalyzer::new(&taxonomy, "ACME");

        analyzer.analyse_year("2019", &tokens(&["ki", "ki"])).unwrap();
        analyzer
            .analyse_year("2020", &tokens(&["ki", "künstliche", "intelligenz"]))
            .unwrap();

        let validation = analyzer.validation_table();
        assert_eq!(validation.get("KI"), Some(3));
        assert_eq!(validation.get("Künstliche Intelligenz"), Some(1));
    }

    #[test]
    fn test_unmatched_keywords_stay_in_validation_table() {
        let taxonomy = ai_taxonomy();
        let mut analyzer = HeuristicAnalyzer::new(&taxonomy, "ACME");

        analyzer.analyse_tokens(&tokens(&["cloud"]));

        assert_eq!(analyzer.validation_table().get("KI"), Some(0));
        assert_eq!(analyzer.validation_table().len(), 2);
    }

    #[test]
    fn test_result_table_gains_one_column_per_year() {
        let taxonomy = ai_taxonomy();
        let mut analyzer = HeuristicAnalyzer::new(&taxonomy, "ACME");

        analyzer.analyse_year("2019", &tokens(&["ki"])).unwrap();
        analyzer.analyse_year("2020", &tokens(&["ki", "ki"])).unwrap();

        let (result_table, _) = analyzer.into_parts();
        assert_eq!(result_table.column_labels(), &["2019", "2020"]);
        assert_eq!(result_table.get("AI", "2019"), Some(1.0));
        assert_eq!(result_table.get("AI", "2020"), Some(2.0));
    }

    #[test]
    fn test_repeated_year_replaces_its_column() {
        let taxonomy = ai_taxonomy();
        let mut analyzer = HeuristicAnalyzer::new(&taxonomy, "ACME");

        analyzer.analyse_year("2019", &tokens(&["ki"])).unwrap();
        analyzer.analyse_year("2019", &tokens(&["ki", "ki", "ki"])).unwrap();

        let result_table = analyzer.result_table();
        assert_eq!(result_table.column_labels(), &["2019"]);
        assert_eq!(result_table.get("AI", "2019"), Some(3.0));
    }
}
