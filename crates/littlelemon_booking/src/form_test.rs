#[cfg(test)]
mod tests {
    use crate::error::BookingError;
    use crate::form::*;
    use crate::logic::{default_slots, SlotList, SubmissionResult, ERRORED_MESSAGE};
    use chrono::NaiveDate;
    use little_lemon_common::{Occasion, Seating};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // A Saturday form with every required field filled in.
    fn filled_form() -> BookingForm {
        let mut form = BookingForm::with_min_date(date(2025, 6, 13));
        let ticket = form.begin_date_change("2025-06-14").unwrap();
        assert!(form.apply_slots(&ticket, default_slots(ticket.date)));
        form.set_time("17:00").unwrap();
        form.set_guests("4").unwrap();
        form
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let form = BookingForm::new();
        let errors = form.field_errors();
        assert_eq!(errors.get(Field::Date), Some(DATE_REQUIRED));
        assert_eq!(errors.get(Field::Time), Some(TIME_REQUIRED));
        assert_eq!(errors.get(Field::Guests), Some(GUESTS_REQUIRED));
        assert!(!errors.contains(Field::Occasion));
        assert!(!errors.contains(Field::Seating));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_filled_form_is_valid() {
        let form = filled_form();
        let request = form.validate().unwrap();
        assert_eq!(request.date, date(2025, 6, 14));
        assert_eq!(request.time, "17:00");
        assert_eq!(request.guests, 4);
        assert_eq!(request.occasion, Occasion::Unspecified);
        assert_eq!(request.seating, Seating::Unspecified);
        assert!(form.can_submit());
    }

    #[test]
    fn test_guest_range_shares_one_message() {
        for raw in ["0", "11", "-3", "99999999999999999999999", "11.0", "1e2", "-0.0"] {
            let mut form = filled_form();
            form.set_guests(raw).unwrap();
            assert_eq!(
                form.field_errors().get(Field::Guests),
                Some(GUESTS_OUT_OF_RANGE),
                "guests = {raw}"
            );
        }
        for raw in ["1", "10", " 7 "] {
            let mut form = filled_form();
            form.set_guests(raw).unwrap();
            assert!(form.validate().is_ok(), "guests = {raw}");
        }
    }

    #[test]
    fn test_decimal_spellings_of_whole_guest_counts() {
        for (raw, expected) in [("4.0", 4), ("10.00", 10), ("1e1", 10), (" 2.0 ", 2)] {
            let mut form = filled_form();
            form.set_guests(raw).unwrap();
            assert_eq!(form.field_errors().get(Field::Guests), None, "guests = {raw}");
            assert_eq!(form.validate().unwrap().guests, expected, "guests = {raw}");
        }
    }

    #[test]
    fn test_guests_must_be_whole() {
        let mut form = filled_form();
        form.set_guests("2.5").unwrap();
        assert_eq!(form.field_errors().get(Field::Guests), Some(GUESTS_NOT_WHOLE));
        form.set_guests("four").unwrap();
        assert_eq!(form.field_errors().get(Field::Guests), Some(GUESTS_NOT_WHOLE));
        form.set_guests("4.5e0").unwrap();
        assert_eq!(form.field_errors().get(Field::Guests), Some(GUESTS_NOT_WHOLE));
        form.set_guests("inf").unwrap();
        assert_eq!(form.field_errors().get(Field::Guests), Some(GUESTS_NOT_WHOLE));
    }

    #[test]
    fn test_time_must_be_offered() {
        let mut form = filled_form();
        form.set_time("16:00").unwrap();
        assert_eq!(form.field_errors().get(Field::Time), Some(TIME_UNAVAILABLE));

        // Lunch is only offered at weekends.
        form.set_time("11:00").unwrap();
        assert!(form.validate().is_ok());
        let ticket = form.begin_date_change("2025-06-16").unwrap();
        form.apply_slots(&ticket, default_slots(ticket.date));
        assert_eq!(form.field_errors().get(Field::Time), Some(TIME_UNAVAILABLE));
    }

    #[test]
    fn test_past_and_malformed_dates() {
        let mut form = filled_form();
        assert!(matches!(
            form.begin_date_change("2025-06-12"),
            Ok(ticket) if ticket.date == date(2025, 6, 12)
        ));
        assert_eq!(form.field_errors().get(Field::Date), Some(DATE_IN_PAST));

        let err = form.begin_date_change("not-a-date").unwrap_err();
        assert_eq!(err, BookingError::InvalidDate("not-a-date".to_string()));
        assert_eq!(form.values().date, "not-a-date");
        assert_eq!(form.field_errors().get(Field::Date), Some(DATE_INVALID));
    }

    #[test]
    fn test_occasion_and_seating_membership() {
        let mut form = filled_form();
        form.set_occasion("birthday").unwrap();
        form.set_seating("window").unwrap();
        let request = form.validate().unwrap();
        assert_eq!(request.occasion, Occasion::Birthday);
        assert_eq!(request.seating, Seating::Window);

        form.set_occasion("wedding").unwrap();
        form.set_seating("rooftop").unwrap();
        let errors = form.field_errors();
        assert_eq!(errors.get(Field::Occasion), Some(OCCASION_INVALID));
        assert_eq!(errors.get(Field::Seating), Some(SEATING_INVALID));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_initialize_and_update_replace_slots() {
        let mut form = BookingForm::new();
        form.initialize(SlotList::from_static(&["17:00", "18:00"]));
        assert_eq!(form.slots().len(), 2);
        form.update(SlotList::from_static(&["19:00"]));
        assert_eq!(form.slots(), &SlotList::from_static(&["19:00"]));
        form.initialize(SlotList::default());
        assert!(form.slots().is_empty());
    }

    #[test]
    fn test_superseded_slot_list_is_discarded() {
        let mut form = BookingForm::new();
        let first = form.begin_date_change("2025-06-14").unwrap();
        let second = form.begin_date_change("2025-06-16").unwrap();

        // The Monday answer arrives first, then the stale Saturday one.
        assert!(form.apply_slots(&second, default_slots(second.date)));
        assert!(!form.apply_slots(&first, default_slots(first.date)));
        assert_eq!(form.slots(), &default_slots(date(2025, 6, 16)));
        assert_eq!(form.values().date, "2025-06-16");
    }

    #[test]
    fn test_invalid_date_supersedes_pending_lookup() {
        let mut form = BookingForm::new();
        let ticket = form.begin_date_change("2025-06-14").unwrap();
        assert!(form.begin_date_change("").is_err());
        assert!(!form.apply_slots(&ticket, default_slots(ticket.date)));
    }

    #[test]
    fn test_submission_state_machine() {
        let mut form = filled_form();
        assert_eq!(form.status(), &SubmissionStatus::Idle);

        let request = form.begin_submit().unwrap();
        assert_eq!(request.time, "17:00");
        assert!(form.is_locked());
        assert!(!form.can_submit());
        assert_eq!(form.set_guests("5"), Err(BookingError::FormLocked));
        assert_eq!(form.begin_submit(), Err(BookingError::FormLocked));
        assert_eq!(form.begin_date_change("2025-06-15"), Err(BookingError::FormLocked));

        form.finish_submit(&SubmissionResult::errored("timeout"));
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failed {
                message: ERRORED_MESSAGE.to_string()
            }
        );
        // Editable again for a retry.
        assert!(form.set_guests("5").is_ok());
        form.dismiss_error();
        assert_eq!(form.status(), &SubmissionStatus::Idle);

        form.begin_submit().unwrap();
        form.finish_submit(&SubmissionResult::accepted());
        assert_eq!(form.status(), &SubmissionStatus::Confirmed);
        assert_eq!(form.begin_submit(), Err(BookingError::AlreadyConfirmed));
        assert_eq!(form.set_time("18:00"), Err(BookingError::AlreadyConfirmed));
    }

    #[test]
    fn test_failed_goes_straight_to_submitting_on_retry() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(&SubmissionResult::rejected());
        assert!(matches!(form.status(), SubmissionStatus::Failed { .. }));
        form.begin_submit().unwrap();
        assert_eq!(form.status(), &SubmissionStatus::Submitting);
    }

    #[test]
    fn test_begin_submit_on_invalid_form() {
        let mut form = filled_form();
        form.set_guests("11").unwrap();
        match form.begin_submit() {
            Err(BookingError::NotSubmittable(errors)) => {
                assert_eq!(errors.get(Field::Guests), Some(GUESTS_OUT_OF_RANGE));
            }
            other => panic!("Expected NotSubmittable, got {other:?}"),
        }
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_finish_without_submission_is_ignored() {
        let mut form = filled_form();
        form.finish_submit(&SubmissionResult::accepted());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_reset_keeps_min_date() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(&SubmissionResult::accepted());
        form.reset();
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.values(), &FormValues::default());
        assert!(form.slots().is_empty());
        assert_eq!(form.min_date(), Some(date(2025, 6, 13)));
    }

    #[test]
    fn test_form_values_accept_numeric_guests() {
        let values: FormValues = serde_json::from_str(
            r#"{"date":"2025-06-14","time":"17:00","guests":4,"occasion":"","seating":""}"#,
        )
        .unwrap();
        assert_eq!(values.guests, "4");

        let values: FormValues = serde_json::from_str(r#"{"guests":"7"}"#).unwrap();
        assert_eq!(values.guests, "7");
        assert_eq!(values.date, "");

        let values: FormValues = serde_json::from_str(r#"{"guests":null}"#).unwrap();
        assert_eq!(values.guests, "");
    }

    #[test]
    fn test_field_errors_display_and_json() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Guests, GUESTS_OUT_OF_RANGE);
        errors.insert(Field::Date, DATE_REQUIRED);
        assert_eq!(
            errors.to_string(),
            "date: Please select a date; guests: Number of guests must be between 1 and 10"
        );
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["guests"], GUESTS_OUT_OF_RANGE);
    }

    #[test]
    fn test_status_serializes_with_state_tag() {
        let json = serde_json::to_value(SubmissionStatus::Failed {
            message: "nope".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"state": "failed", "message": "nope"}));
    }
}
