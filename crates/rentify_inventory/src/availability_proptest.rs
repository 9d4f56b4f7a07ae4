#[cfg(test)]
mod tests {
    use crate::availability::is_available;
    use crate::models::Device;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn day(offset: i64) -> NaiveDate {
        base() + Duration::days(offset)
    }

    fn located(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Device {
        Device {
            id: "dev".to_string(),
            name: "Unit".to_string(),
            tag: "Ultra".to_string(),
            location_ref_count: 1,
            start_date: start.map(|date| date.format("%Y-%m-%d").to_string()),
            end_date: end.map(|date| date.format("%Y-%m-%d").to_string()),
        }
    }

    // Occupied days per the device's dates, clipped to the window under test.
    fn occupied(day_offset: i64, start: Option<i64>, end: Option<i64>) -> bool {
        match (start, end) {
            (Some(start), Some(end)) => day_offset >= start && day_offset <= end,
            (Some(start), None) => day_offset >= start,
            (None, Some(end)) => day_offset <= end,
            (None, None) => true,
        }
    }

    proptest! {
        #[test]
        fn test_unassigned_devices_are_always_available(
            start in proptest::option::of(0..400i64),
            end in proptest::option::of(0..400i64),
            query_start in 0..400i64,
            span in 0..60i64,
        ) {
            let mut device = located(start.map(day), end.map(day));
            device.location_ref_count = 0;
            prop_assert!(is_available(&device, day(query_start), day(query_start + span)));
        }

        #[test]
        fn test_located_devices_without_dates_are_never_available(
            ref_count in 1..5usize,
            query_start in 0..400i64,
            span in 0..60i64,
        ) {
            let mut device = located(None, None);
            device.location_ref_count = ref_count;
            prop_assert!(!is_available(&device, day(query_start), day(query_start + span)));
        }

        #[test]
        fn test_available_iff_no_queried_day_is_occupied(
            start in proptest::option::of(0..120i64),
            length in 0..30i64,
            has_end in any::<bool>(),
            query_start in 0..150i64,
            span in 0..20i64,
        ) {
            let end = if has_end { Some(start.unwrap_or(60) + length) } else { None };
            prop_assume!(start.is_some() || end.is_some());

            let device = located(start.map(day), end.map(day));
            let query_end = query_start + span;
            let expected = (query_start..=query_end).all(|offset| !occupied(offset, start, end));

            prop_assert_eq!(is_available(&device, day(query_start), day(query_end)), expected);
        }
    }
}
