#[cfg(test)]
mod tests {
    use crate::availability::{is_available, is_available_in, parse_calendar_date};
    use crate::models::{DateRange, Device};
    use chrono::{Duration, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn device(ref_count: usize, start: Option<&str>, end: Option<&str>) -> Device {
        Device {
            id: "dev-1".to_string(),
            name: "Neo 4 - 01".to_string(),
            tag: "Neo 4".to_string(),
            location_ref_count: ref_count,
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }

    #[test]
    fn test_unassigned_device_is_available_regardless_of_dates() {
        // Scenario A
        let stale = device(0, Some("2025-01-01"), Some("2025-01-31"));
        assert!(is_available(&stale, date(2025, 1, 1), date(2025, 1, 10)));

        let broken = device(0, Some("not a date"), None);
        assert!(is_available(&broken, date(2025, 1, 1), date(2025, 1, 10)));
    }

    #[test]
    fn test_located_device_without_dates_is_never_available() {
        let occupied = device(1, None, None);
        assert!(!is_available(&occupied, date(1990, 1, 1), date(1990, 1, 1)));
        assert!(!is_available(&occupied, date(2025, 1, 1), date(2030, 12, 31)));
    }

    #[test]
    fn test_contained_overlap_is_unavailable() {
        // Scenario B
        let rented = device(1, Some("2025-03-01"), Some("2025-03-10"));
        assert!(!is_available(&rented, date(2025, 3, 5), date(2025, 3, 7)));
    }

    #[test]
    fn test_disjoint_range_is_available() {
        // Scenario C
        let rented = device(1, Some("2025-03-01"), Some("2025-03-10"));
        assert!(is_available(&rented, date(2025, 4, 1), date(2025, 4, 5)));
    }

    #[test]
    fn test_open_ended_occupancy() {
        // Scenario D
        let open = device(1, Some("2025-06-01"), None);
        assert!(is_available(&open, date(2025, 5, 1), date(2025, 5, 31)));
        assert!(!is_available(&open, date(2025, 6, 15), date(2025, 6, 20)));
        // the first occupied day already blocks
        assert!(!is_available(&open, date(2025, 5, 20), date(2025, 6, 1)));
    }

    #[test]
    fn test_occupancy_with_only_an_end_date() {
        let until = device(2, None, Some("2025-02-15"));
        assert!(!is_available(&until, date(2024, 1, 1), date(2024, 1, 2)));
        assert!(!is_available(&until, date(2025, 2, 15), date(2025, 2, 20)));
        assert!(is_available(&until, date(2025, 2, 16), date(2025, 2, 20)));
    }

    #[test]
    fn test_touching_end_boundary_is_unavailable() {
        let rented = device(1, Some("2025-03-01"), Some("2025-03-10"));
        assert!(!is_available(&rented, date(2025, 3, 10), date(2025, 3, 12)));
    }

    #[test]
    fn test_day_before_start_is_available() {
        let rented = device(1, Some("2025-03-01"), Some("2025-03-10"));
        let start = date(2025, 3, 1);
        assert!(is_available(
            &rented,
            date(2025, 2, 20),
            start - Duration::days(1)
        ));
        assert!(!is_available(&rented, date(2025, 2, 20), start));
    }

    #[test]
    fn test_malformed_date_fails_closed() {
        let garbled = device(1, Some("03/01/2025"), Some("2025-03-10"));
        assert!(!is_available(&garbled, date(2026, 1, 1), date(2026, 1, 2)));

        let garbled_end = device(1, None, Some("soon"));
        assert!(!is_available(&garbled_end, date(2020, 1, 1), date(2020, 1, 2)));
    }

    #[test]
    fn test_datetime_values_compare_by_date() {
        let rented = device(
            1,
            Some("2025-03-01T09:30:00.000+01:00"),
            Some("2025-03-10T18:00:00"),
        );
        assert!(!is_available(&rented, date(2025, 3, 10), date(2025, 3, 10)));
        assert!(is_available(&rented, date(2025, 3, 11), date(2025, 3, 11)));
    }

    #[test]
    fn test_parse_calendar_date_formats() {
        assert_eq!(parse_calendar_date("2025-03-01"), Some(date(2025, 3, 1)));
        assert_eq!(
            parse_calendar_date("2025-03-01T23:30:00-05:00"),
            Some(date(2025, 3, 1))
        );
        assert_eq!(
            parse_calendar_date("2025-03-01T23:30:00.123"),
            Some(date(2025, 3, 1))
        );
        assert_eq!(parse_calendar_date(" 2025-03-01 "), Some(date(2025, 3, 1)));
        assert_eq!(parse_calendar_date("2025-02-30"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn test_is_available_in_range() {
        let rented = device(1, Some("2025-03-01"), Some("2025-03-10"));
        let range = DateRange::new(date(2025, 3, 11), date(2025, 3, 20)).unwrap();
        assert!(is_available_in(&rented, &range));
    }
}
