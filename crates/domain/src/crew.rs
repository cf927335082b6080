// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew roster records and the per-pass duty accumulator.

use crate::types::{AircraftType, Flight, Pairing};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Seniority assigned to crew members with no recorded seniority number.
///
/// Lower numbers are more senior; a missing number sorts last.
pub const DEFAULT_SENIORITY: u32 = 9999;

/// Represents a crew member as supplied by the crew-profile store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    /// The crew member's identifier.
    pub crew_id: String,
    /// The crew member's name (informational).
    pub name: String,
    /// Seniority number; lower is more senior. `None` sorts last.
    pub seniority: Option<u32>,
    /// The fleet type this crew member is qualified on.
    pub qualification: AircraftType,
}

impl CrewMember {
    /// Creates a new `CrewMember`.
    #[must_use]
    pub const fn new(
        crew_id: String,
        name: String,
        seniority: Option<u32>,
        qualification: AircraftType,
    ) -> Self {
        Self {
            crew_id,
            name,
            seniority,
            qualification,
        }
    }

    /// Returns the seniority number used for ordering.
    ///
    /// Missing seniority defaults to [`DEFAULT_SENIORITY`], the least
    /// senior position.
    #[must_use]
    pub fn effective_seniority(&self) -> u32 {
        self.seniority.unwrap_or(DEFAULT_SENIORITY)
    }
}

/// Running duty and flight-time accumulator for one crew member.
///
/// Created at the start of one scheduling pass, mutated in place as flights
/// or pairings are assigned within that pass, and discarded (or persisted
/// externally) at the end. This is the only mutable shared state in the
/// core, and it is mutated strictly sequentially.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DutyHistory {
    /// Block hours on the current duty day.
    pub flight_hours_daily: f64,
    /// Block hours in the scheduling month.
    pub flight_hours_monthly: f64,
    /// Block hours over the rolling 28-day window.
    pub flight_hours_last_28_days: f64,
    /// Block hours over the rolling 365-day window.
    pub flight_hours_last_365_days: f64,
    /// Duty hours on the current duty day.
    pub duty_hours_daily: f64,
    /// Duty hours in the scheduling month.
    pub duty_hours_monthly: f64,
    /// Duty hours over the rolling 28-day window.
    pub duty_hours_last_28_days: f64,
    /// Duty hours over the rolling 365-day window.
    pub duty_hours_last_365_days: f64,
    /// Count of night flights flown.
    pub night_flights: u32,
    /// Count of international flights flown.
    pub international_flights: u32,
    /// Count of domestic flights flown.
    pub domestic_flights: u32,
    /// Count of layovers served.
    pub layover_count: u32,
    /// Consecutive calendar days with duty.
    pub consecutive_duty_days: u32,
    /// End of the most recent duty, if any duty has been recorded.
    pub last_duty_end: Option<NaiveDateTime>,
}

impl DutyHistory {
    /// Creates a zeroed accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the neutral baseline used by the bid award processor.
    ///
    /// Zeroed rolling totals with no recorded prior duty: the crew member
    /// is treated as fully rested going into the bid period.
    #[must_use]
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns the rest gap in hours between the last duty end and `start`.
    ///
    /// Returns `None` when no prior duty has been recorded, which callers
    /// treat as unbounded rest. A negative value means `start` precedes the
    /// recorded duty end.
    #[must_use]
    pub fn rest_hours_before(&self, start: NaiveDateTime) -> Option<f64> {
        self.last_duty_end.map(|end| {
            #[allow(clippy::cast_precision_loss)]
            let hours: f64 = (start - end).num_minutes() as f64 / 60.0;
            hours
        })
    }

    /// Accumulates one assigned flight into the rolling windows.
    ///
    /// Daily totals reset when the flight departs on a different calendar
    /// day than the last recorded duty end; consecutive-duty-day tracking
    /// advances on day changes and resets after a gap of more than one day.
    pub fn record_flight(&mut self, flight: &Flight) {
        let same_day: bool = self
            .last_duty_end
            .is_some_and(|end| end.date() == flight.departure.date());

        if same_day {
            self.flight_hours_daily += flight.flight_hours;
            self.duty_hours_daily += flight.duty_hours;
        } else {
            self.flight_hours_daily = flight.flight_hours;
            self.duty_hours_daily = flight.duty_hours;
            self.consecutive_duty_days = self.last_duty_end.map_or(1, |end| {
                if flight.departure.date() - end.date() == Duration::days(1) {
                    self.consecutive_duty_days + 1
                } else {
                    1
                }
            });
        }

        self.flight_hours_monthly += flight.flight_hours;
        self.flight_hours_last_28_days += flight.flight_hours;
        self.flight_hours_last_365_days += flight.flight_hours;
        self.duty_hours_monthly += flight.duty_hours;
        self.duty_hours_last_28_days += flight.duty_hours;
        self.duty_hours_last_365_days += flight.duty_hours;

        if flight.is_night_flight {
            self.night_flights += 1;
        }
        if flight.is_international {
            self.international_flights += 1;
        } else {
            self.domestic_flights += 1;
        }
        if flight.requires_layover {
            self.layover_count += 1;
        }

        self.last_duty_end = Some(flight.arrival);
    }

    /// Accumulates an awarded pairing's totals.
    ///
    /// Pairing awards fold whole-trip totals into the monthly and rolling
    /// windows; per-day tracking is left to the roster pass, which works at
    /// flight granularity.
    pub fn record_pairing(&mut self, pairing: &Pairing) {
        self.flight_hours_monthly += pairing.total_flight_hours;
        self.flight_hours_last_28_days += pairing.total_flight_hours;
        self.flight_hours_last_365_days += pairing.total_flight_hours;
        self.duty_hours_monthly += pairing.total_duty_hours;
        self.duty_hours_last_28_days += pairing.total_duty_hours;
        self.duty_hours_last_365_days += pairing.total_duty_hours;

        for flight in &pairing.flights {
            if flight.is_night_flight {
                self.night_flights += 1;
            }
            if flight.is_international {
                self.international_flights += 1;
            } else {
                self.domestic_flights += 1;
            }
        }
        self.layover_count += u32::try_from(pairing.layovers.len()).unwrap_or(u32::MAX);

        self.last_duty_end = Some(pairing.ends_at);
    }
}
