//! # Stats Module Unit Tests / Stats 模块单元测试
//!
//! Tests for the summary statistics, including the zero-denominator average.
//!
//! 汇总统计的测试，包括分母为零时的平均值。

mod common;

use common::{make_result, sample_results};
use result_inspector::core::stats::{Summary, average_response_time};
use result_inspector::models::Status;

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn test_sample_summary_counts() {
        let summary = Summary::from_results(&sample_results());

        assert_eq!(summary.total, 8);
        assert_eq!(summary.passed, 4);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.pending, 2);
    }

    #[test]
    fn test_average_excludes_pending_from_sum_and_count() {
        let avg = average_response_time(&sample_results()).unwrap();
        let expected = (120.0 + 350.0 + 200.0 + 180.0 + 300.0 + 150.0) / 6.0;

        assert!((avg - expected).abs() < 1e-9);
        assert_eq!(format!("{:.2}", avg), "216.67");
    }

    #[test]
    fn test_format_average_uses_precision() {
        let summary = Summary::from_results(&sample_results());

        assert_eq!(summary.format_average(2), "216.67ms");
        assert_eq!(summary.format_average(0), "217ms");
    }

    #[test]
    fn test_empty_collection_has_no_average() {
        let summary = Summary::from_results(&[]);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_response_time, None);
        assert_eq!(summary.format_average(2), "N/A");
        assert_eq!(summary.pass_rate(), None);
    }

    #[test]
    fn test_all_pending_collection_has_no_average() {
        let results = vec![
            make_result("p-1", "/a", "GET", Status::Pending, None, "2024-01-01T00:00:00Z"),
            make_result("p-2", "/b", "GET", Status::Pending, None, "2024-01-01T00:00:00Z"),
        ];
        let summary = Summary::from_results(&results);

        assert_eq!(summary.pending, 2);
        assert!(summary.average_response_time.is_none());
    }

    #[test]
    fn test_average_of_huge_response_times() {
        let results = vec![
            make_result("h-1", "/a", "GET", Status::Passed, Some(u64::MAX), "2024-01-01T00:00:00Z"),
            make_result("h-2", "/b", "GET", Status::Passed, Some(2), "2024-01-01T00:00:00Z"),
        ];

        let avg = average_response_time(&results).unwrap();
        let expected = (u64::MAX as f64 + 2.0) / 2.0;
        assert!((avg - expected).abs() / expected < 1e-12);
        assert!(avg > u64::MAX as f64 / 4.0);
    }

    #[test]
    fn test_pass_rate() {
        let summary = Summary::from_results(&sample_results());
        assert_eq!(summary.pass_rate(), Some(0.5));
    }
}
