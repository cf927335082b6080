// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AircraftType, AirportCode, CrewMember, DEFAULT_SENIORITY, DutyHistory, Flight, Pairing,
};
use chrono::{NaiveDate, NaiveDateTime};

fn dt(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn flight(
    id: &str,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    night: bool,
    international: bool,
    layover: bool,
) -> Flight {
    Flight::new(
        String::from(id),
        format!("AS{id}"),
        AirportCode::new("SEA").unwrap(),
        AirportCode::new("LAX").unwrap(),
        departure,
        arrival,
        3.0,
        5.0,
        AircraftType::new("B738"),
        night,
        international,
        layover,
    )
    .unwrap()
}

#[test]
fn test_effective_seniority_defaults_when_missing() {
    let member: CrewMember = CrewMember::new(
        String::from("C1"),
        String::from("Pat"),
        None,
        AircraftType::new("B738"),
    );
    assert_eq!(member.effective_seniority(), DEFAULT_SENIORITY);

    let senior: CrewMember = CrewMember::new(
        String::from("C2"),
        String::from("Lee"),
        Some(3),
        AircraftType::new("B738"),
    );
    assert_eq!(senior.effective_seniority(), 3);
}

#[test]
fn test_record_flight_accumulates_windows_and_counts() {
    let mut history: DutyHistory = DutyHistory::new();
    history.record_flight(&flight("1", dt(10, 8), dt(10, 11), true, true, true));

    assert_eq!(history.flight_hours_monthly, 3.0);
    assert_eq!(history.flight_hours_last_28_days, 3.0);
    assert_eq!(history.flight_hours_last_365_days, 3.0);
    assert_eq!(history.duty_hours_monthly, 5.0);
    assert_eq!(history.night_flights, 1);
    assert_eq!(history.international_flights, 1);
    assert_eq!(history.domestic_flights, 0);
    assert_eq!(history.layover_count, 1);
    assert_eq!(history.consecutive_duty_days, 1);
    assert_eq!(history.last_duty_end, Some(dt(10, 11)));
}

#[test]
fn test_record_flight_same_day_extends_daily_totals() {
    let mut history: DutyHistory = DutyHistory::new();
    history.record_flight(&flight("1", dt(10, 8), dt(10, 11), false, false, false));
    history.record_flight(&flight("2", dt(10, 13), dt(10, 16), false, false, false));

    assert_eq!(history.flight_hours_daily, 6.0);
    assert_eq!(history.duty_hours_daily, 10.0);
    assert_eq!(history.consecutive_duty_days, 1);
}

#[test]
fn test_record_flight_next_day_resets_daily_and_extends_streak() {
    let mut history: DutyHistory = DutyHistory::new();
    history.record_flight(&flight("1", dt(10, 8), dt(10, 11), false, false, false));
    history.record_flight(&flight("2", dt(11, 8), dt(11, 11), false, false, false));

    assert_eq!(history.flight_hours_daily, 3.0);
    assert_eq!(history.consecutive_duty_days, 2);

    // A gap of more than one day breaks the streak.
    history.record_flight(&flight("3", dt(14, 8), dt(14, 11), false, false, false));
    assert_eq!(history.consecutive_duty_days, 1);
}

#[test]
fn test_rest_hours_before() {
    let mut history: DutyHistory = DutyHistory::new();
    assert_eq!(history.rest_hours_before(dt(10, 8)), None);

    history.last_duty_end = Some(dt(10, 0));
    assert_eq!(history.rest_hours_before(dt(10, 8)), Some(8.0));
}

#[test]
fn test_record_pairing_folds_trip_totals() {
    let flights: Vec<Flight> = vec![
        Flight::new(
            String::from("1"),
            String::from("AS1"),
            AirportCode::new("SEA").unwrap(),
            AirportCode::new("LAX").unwrap(),
            dt(10, 8),
            dt(10, 11),
            3.0,
            5.0,
            AircraftType::new("B738"),
            true,
            false,
            false,
        )
        .unwrap(),
        Flight::new(
            String::from("2"),
            String::from("AS2"),
            AirportCode::new("LAX").unwrap(),
            AirportCode::new("SEA").unwrap(),
            dt(11, 8),
            dt(11, 11),
            3.0,
            5.0,
            AircraftType::new("B738"),
            false,
            false,
            false,
        )
        .unwrap(),
    ];
    let pairing: Pairing = Pairing::new(
        String::from("SEA-001"),
        AirportCode::new("SEA").unwrap(),
        flights,
        vec![],
    )
    .unwrap();

    let mut history: DutyHistory = DutyHistory::baseline();
    history.record_pairing(&pairing);

    assert_eq!(history.flight_hours_monthly, 6.0);
    assert_eq!(history.flight_hours_last_365_days, 6.0);
    assert_eq!(history.duty_hours_last_28_days, 10.0);
    assert_eq!(history.night_flights, 1);
    assert_eq!(history.domestic_flights, 2);
    assert_eq!(history.last_duty_end, Some(dt(11, 11)));
}
