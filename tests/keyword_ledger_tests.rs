use keyword_census::{KeywordLedger, KeywordValidationTable, TechnologyKey};

fn validation(counts: &[(&str, usize)]) -> KeywordValidationTable {
    let keywords: Vec<String> = counts.iter().map(|(keyword, _)| keyword.to_string()).collect();
    let mut table = KeywordValidationTable::with_keywords(keywords.iter());
    for (keyword, count) in counts {
        table.record(keyword, *count);
    }
    table
}

#[cfg(test)]
mod keyword_ledger_tests {
    use super::*;

    #[test]
    fn test_missing_ledger_has_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = KeywordLedger::new(dir.path().join("keyword_ledger.csv"));

        assert!(ledger.entries().unwrap().is_empty());
        assert!(ledger.validation_table().unwrap().is_empty());
    }

    #[test]
    fn test_appends_one_row_per_keyword() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = KeywordLedger::new(dir.path().join("keyword_ledger.csv"));

        ledger.append("ACME", &validation(&[("KI", 2), ("Cloud", 0)])).unwrap();

        let entries = ledger.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].keyword, "KI");
        assert_eq!(entries[0].company, "ACME");
        assert_eq!(entries[0].count, 2);
    }

    #[test]
    fn test_totals_sum_repeated_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = KeywordLedger::new(dir.path().join("keyword_ledger.csv"));

        ledger.append("ACME", &validation(&[("KI", 2)])).unwrap();
        ledger.append("ACME", &validation(&[("KI", 3)])).unwrap();
        ledger.append("Globex", &validation(&[("KI", 1)])).unwrap();

        let totals = ledger.totals().unwrap();
        assert_eq!(
            totals,
            vec![
                (("KI".to_string(), "ACME".to_string()), 5),
                (("KI".to_string(), "Globex".to_string()), 1),
            ]
        );
    }

    #[test]
    fn test_validation_table_leaves_unrecorded_pairs_undefined() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = KeywordLedger::new(dir.path().join("keyword_ledger.csv"));

        ledger.append("ACME", &validation(&[("KI", 2)])).unwrap();
        ledger.append("Globex", &validation(&[("Cloud", 4)])).unwrap();

        let table = ledger.validation_table().unwrap();
        assert_eq!(table.row_labels(), &["KI", "Cloud"]);
        assert_eq!(table.column_labels(), &["ACME", "Globex"]);
        assert_eq!(table.get("Cloud", "Globex"), Some(4.0));
        assert!(table.get("KI", "Globex").unwrap().is_nan());
    }

    #[test]
    fn test_ledger_lives_next_to_the_technology_outputs() {
        let root = std::path::Path::new("HeuristicData");
        let ledger = KeywordLedger::for_technology(root, &TechnologyKey::all()[3]);

        assert_eq!(
            ledger.path(),
            root.join("pypdf2").join("nltk").join("keyword_ledger.csv")
        );
    }
}
