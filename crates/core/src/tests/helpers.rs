// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for the engine scenario tests.

use airsched_domain::{
    AircraftType, AirportCode, BidPeriod, BidPeriodStatus, BidType, CrewBid, CrewMember, Flight,
    Pairing,
};
use chrono::{NaiveDate, NaiveDateTime};

/// A timestamp on the given day of March 2026.
pub fn dt(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn airport(code: &str) -> AirportCode {
    AirportCode::new(code).unwrap()
}

pub fn fleet() -> AircraftType {
    AircraftType::new("B738")
}

/// A domestic day flight on the test fleet with no derived flags set.
#[allow(clippy::too_many_arguments)]
pub fn flight(
    flight_id: &str,
    origin: &str,
    destination: &str,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    flight_hours: f64,
    duty_hours: f64,
) -> Flight {
    Flight::new(
        flight_id.to_string(),
        format!("AS{flight_id}"),
        airport(origin),
        airport(destination),
        departure,
        arrival,
        flight_hours,
        duty_hours,
        fleet(),
        false,
        false,
        false,
    )
    .unwrap()
}

pub fn crew(crew_id: &str, seniority: Option<u32>) -> CrewMember {
    CrewMember::new(
        crew_id.to_string(),
        format!("Crew {crew_id}"),
        seniority,
        fleet(),
    )
}

/// A two-leg SEA round trip spanning `start_day` through `end_day`, with
/// `leg_duty_hours` of duty credit per leg.
pub fn round_trip(pairing_id: &str, start_day: u32, end_day: u32, leg_duty_hours: f64) -> Pairing {
    let outbound: Flight = flight(
        &format!("{pairing_id}-OUT"),
        "SEA",
        "LAX",
        dt(start_day, 8, 0),
        dt(start_day, 11, 0),
        3.0,
        leg_duty_hours,
    );
    let inbound: Flight = flight(
        &format!("{pairing_id}-IN"),
        "LAX",
        "SEA",
        dt(end_day, 12, 0),
        dt(end_day, 15, 0),
        3.0,
        leg_duty_hours,
    );
    Pairing::new(
        pairing_id.to_string(),
        airport("SEA"),
        vec![outbound, inbound],
        Vec::new(),
    )
    .unwrap()
}

pub fn preference_bid(bid_id: &str, crew_id: &str, pairing_id: &str, priority: u32) -> CrewBid {
    CrewBid::new(
        bid_id.to_string(),
        crew_id.to_string(),
        pairing_id.to_string(),
        priority,
        BidType::Preference,
    )
}

pub fn closed_period() -> BidPeriod {
    BidPeriod::new(
        3,
        2026,
        fleet(),
        dt(1, 0, 0),
        dt(5, 0, 0),
        BidPeriodStatus::Closed,
    )
    .unwrap()
}
