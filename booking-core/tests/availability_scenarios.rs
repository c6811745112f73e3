//! End-to-end booking-form flow over the public API: deserialize schedule and
//! settings as the document store delivers them, resolve the weekday, compute
//! slots, and validate the booking-side bounds.

use booking_core::{
    booking_date_range, compute_available_slots, validate_guest_count, ReservationSettings,
    WeeklySchedule,
};
use chrono::{NaiveDate, NaiveTime};

const SCHEDULE_JSON: &str = r#"[
    {"dayOfWeek": "monday", "isOpen": false, "timeSlots": []},
    {"dayOfWeek": "tuesday", "isOpen": true,
     "timeSlots": [{"startTime": "17:00", "endTime": "22:00"}]},
    {"dayOfWeek": "saturday", "isOpen": true,
     "timeSlots": [{"startTime": "12:00", "endTime": "14:30"},
                   {"startTime": "18:00", "endTime": "22:00"}]}
]"#;

const SETTINGS_JSON: &str = r#"{
    "minAdvanceReservationHours": 2,
    "timeSlotIntervalMinutes": 30,
    "bookingLeadTimeDays": 14,
    "maxGuestsPerBooking": 8
}"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_form_flow_for_a_future_saturday() {
    let schedule: WeeklySchedule = serde_json::from_str(SCHEDULE_JSON).unwrap();
    let settings: ReservationSettings = serde_json::from_str(SETTINGS_JSON).unwrap();
    settings.validate().unwrap();

    let today = date(2025, 6, 9); // a Monday
    let picked = date(2025, 6, 14); // the following Saturday
    let (first, last) = booking_date_range(today, &settings);
    assert!(picked >= first && picked <= last);

    let now = today.and_hms_opt(9, 0, 0).unwrap();
    let day = schedule.for_date(picked);
    let slots = compute_available_slots(picked, &day, &settings, now).unwrap();

    // Both service windows, lunch before dinner, closing times excluded
    let times: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(
        times,
        vec![
            "12:00", "12:30", "13:00", "13:30", "14:00", "18:00", "18:30", "19:00", "19:30",
            "20:00", "20:30", "21:00", "21:30"
        ]
    );

    // Every slot honors the wire format and the lead-time policy
    let earliest = now + chrono::Duration::hours(2);
    for slot in &slots {
        let t = NaiveTime::parse_from_str(&slot.time, "%H:%M").unwrap();
        assert_eq!(slot.time.len(), 5);
        assert!(picked.and_time(t) >= earliest);
    }

    validate_guest_count(4, &settings).unwrap();
    assert!(validate_guest_count(9, &settings).is_err());
}

#[test]
fn same_day_booking_respects_the_two_hour_lead() {
    let schedule: WeeklySchedule = serde_json::from_str(SCHEDULE_JSON).unwrap();
    let settings: ReservationSettings = serde_json::from_str(SETTINGS_JSON).unwrap();

    let today = date(2025, 6, 10); // a Tuesday, dinner 17:00-22:00
    let now = today.and_hms_opt(17, 30, 0).unwrap();
    let slots = compute_available_slots(today, &schedule.for_date(today), &settings, now).unwrap();

    // earliest bookable is 19:30
    let times: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times, vec!["19:30", "20:00", "20:30", "21:00", "21:30"]);
    assert_eq!(slots[0].label, "7:30 PM");
}

#[test]
fn absurd_advance_hours_from_the_store_yield_no_slots() {
    // A corrupt settings document with a lead time beyond chrono's range
    // must degrade to an empty slot list, not a panic
    let schedule: WeeklySchedule = serde_json::from_str(SCHEDULE_JSON).unwrap();
    let settings: ReservationSettings =
        serde_json::from_str(r#"{"minAdvanceReservationHours": 1e15}"#).unwrap();

    let picked = date(2025, 6, 14);
    let now = date(2025, 6, 9).and_hms_opt(9, 0, 0).unwrap();
    let slots =
        compute_available_slots(picked, &schedule.for_date(picked), &settings, now).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn unconfigured_or_closed_days_have_no_slots() {
    let schedule: WeeklySchedule = serde_json::from_str(SCHEDULE_JSON).unwrap();
    let settings: ReservationSettings = serde_json::from_str(SETTINGS_JSON).unwrap();
    let now = date(2025, 6, 1).and_hms_opt(8, 0, 0).unwrap();

    // Monday is explicitly closed, Wednesday was never configured
    for picked in [date(2025, 6, 16), date(2025, 6, 18)] {
        let slots =
            compute_available_slots(picked, &schedule.for_date(picked), &settings, now).unwrap();
        assert!(slots.is_empty());
    }
}
