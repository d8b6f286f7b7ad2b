#[cfg(test)]
mod tests {
    use crate::form::{validate_guest_count, GUESTS_OUT_OF_RANGE};
    use crate::logic::{default_slots, is_weekend};
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use proptest::prelude::*;

    // Any date between 2000-01-01 and roughly 2100
    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (0i64..36_500).prop_map(|offset| {
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
        })
    }

    proptest! {
        #[test]
        fn test_default_slots_sorted_and_unique(day in any_date()) {
            let slots = default_slots(day);
            let list = slots.as_slice();
            for pair in list.windows(2) {
                prop_assert!(pair[0] < pair[1], "Slots not strictly ascending: {:?}", list);
            }
        }

        #[test]
        fn test_default_slots_size_follows_weekday(day in any_date()) {
            let slots = default_slots(day);
            match day.weekday() {
                Weekday::Sat | Weekday::Sun => {
                    prop_assert!(is_weekend(day));
                    prop_assert_eq!(slots.len(), 12);
                }
                _ => {
                    prop_assert!(!is_weekend(day));
                    prop_assert_eq!(slots.len(), 6);
                }
            }
            // Dinner service is offered every day.
            for hour in 17..=22 {
                let slot = format!("{hour}:00");
                prop_assert!(slots.contains(&slot));
            }
        }

        #[test]
        fn test_guest_count_in_range_accepted(guests in 1i64..=10) {
            prop_assert_eq!(validate_guest_count(guests), Ok(guests as u8));
        }

        #[test]
        fn test_guest_count_out_of_range_rejected(
            guests in prop_oneof![i64::MIN..1i64, 11i64..i64::MAX]
        ) {
            prop_assert_eq!(validate_guest_count(guests), Err(GUESTS_OUT_OF_RANGE));
        }
    }
}
