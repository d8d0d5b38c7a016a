use keyword_census::utils::{mean, percentage_error, population_std};
use keyword_census::TechnologyStatistics;
use test_utils::{assert_close, table};

#[cfg(test)]
mod population_statistics_tests {
    use super::*;

    #[test]
    fn test_population_std_uses_divisor_n() {
        let values = [2.0, 4.0, 4.0, 6.0];

        assert_close(mean(&values), 4.0);
        assert_close(population_std(&values), 2f64.sqrt());
        assert_close(
            percentage_error(population_std(&values), mean(&values)),
            35.35533905932738,
        );
    }

    #[test]
    fn test_identical_values_have_no_spread() {
        let values = [5.0, 5.0, 5.0, 5.0];

        assert_close(population_std(&values), 0.0);
        assert_close(percentage_error(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_zero_mean_makes_percentage_error_undefined() {
        let values = [0.0, 0.0, 0.0, 0.0];

        assert_close(mean(&values), 0.0);
        assert!(percentage_error(population_std(&values), mean(&values)).is_nan());
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let values = [f64::NAN, 3.0, 5.0];

        assert_close(mean(&values), 4.0);
        assert_close(population_std(&values), 1.0);
    }

    #[test]
    fn test_nothing_to_reduce() {
        assert!(mean(&[]).is_nan());
        assert!(population_std(&[f64::NAN]).is_nan());
    }
}

#[cfg(test)]
mod technology_statistics_tests {
    use super::*;

    #[test]
    fn test_reduces_each_cell_across_technologies() {
        let tables = [
            table(&["AI"], &["2019"], &[&[2.0]]),
            table(&["AI"], &["2019"], &[&[4.0]]),
            table(&["AI"], &["2019"], &[&[4.0]]),
            table(&["AI"], &["2019"], &[&[6.0]]),
        ];

        let statistics = TechnologyStatistics::from_technology_tables(&tables);

        assert_close(statistics.mean.get("AI", "2019").unwrap(), 4.0);
        assert_close(statistics.std.get("AI", "2019").unwrap(), 2f64.sqrt());
        assert_close(
            statistics.percentage_error.get("AI", "2019").unwrap(),
            35.35533905932738,
        );
    }

    #[test]
    fn test_tables_are_matched_by_label() {
        let tables = [
            table(&["AI", "Cloud"], &["2019", "2020"], &[&[1.0, 2.0], &[3.0, 4.0]]),
            table(&["Cloud", "AI"], &["2020", "2019"], &[&[6.0, 5.0], &[4.0, 3.0]]),
        ];

        let statistics = TechnologyStatistics::from_technology_tables(&tables);

        assert_eq!(statistics.mean.row_labels(), &["AI", "Cloud"]);
        assert_eq!(statistics.mean.column_labels(), &["2019", "2020"]);
        assert_close(statistics.mean.get("AI", "2019").unwrap(), 2.0);
        assert_close(statistics.mean.get("Cloud", "2020").unwrap(), 5.0);
    }

    #[test]
    fn test_years_are_the_sorted_union() {
        let tables = [
            table(&["AI"], &["2020"], &[&[2.0]]),
            table(&["AI"], &["2018"], &[&[4.0]]),
        ];

        let statistics = TechnologyStatistics::from_technology_tables(&tables);

        assert_eq!(statistics.mean.column_labels(), &["2018", "2020"]);
        assert_close(statistics.std.get("AI", "2018").unwrap(), 0.0);
    }

    #[test]
    fn test_zero_counts_leave_percentage_error_undefined() {
        let tables = [
            table(&["AI"], &["2019"], &[&[0.0]]),
            table(&["AI"], &["2019"], &[&[0.0]]),
        ];

        let statistics = TechnologyStatistics::from_technology_tables(&tables);

        assert_close(statistics.mean.get("AI", "2019").unwrap(), 0.0);
        assert!(statistics.percentage_error.get("AI", "2019").unwrap().is_nan());
    }
}
