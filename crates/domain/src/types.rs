// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Represents an IATA or ICAO airport code.
///
/// Codes are normalized to uppercase to ensure case-insensitive equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AirportCode {
    /// The code value (3-4 alphabetic characters, uppercase).
    value: String,
}

impl AirportCode {
    /// Creates a new `AirportCode`.
    ///
    /// # Arguments
    ///
    /// * `value` - The code (will be normalized to uppercase)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAirportCode` if the code is not 3-4
    /// ASCII-alphabetic characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        let valid_length: bool = (3..=4).contains(&trimmed.len());
        if !valid_length || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidAirportCode(value.to_string()));
        }
        Ok(Self {
            value: trimmed.to_uppercase(),
        })
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for AirportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents an aircraft fleet type (e.g., "B738", "A320").
///
/// Fleet codes are normalized to uppercase; pairings only chain flights of
/// one fleet type, and crew are qualified on exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AircraftType {
    /// The fleet code (uppercase).
    value: String,
}

impl AircraftType {
    /// Creates a new `AircraftType`.
    ///
    /// # Arguments
    ///
    /// * `value` - The fleet code (will be normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_uppercase(),
        }
    }

    /// Returns the fleet code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for AircraftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a single scheduled flight leg.
///
/// Flights are immutable once constructed. The `is_night_flight`,
/// `is_international`, and `requires_layover` flags are derived upstream by
/// the schedule store and arrive pre-computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// The flight record identifier.
    pub flight_id: String,
    /// The commercial flight number (e.g., "AS1042").
    pub flight_number: String,
    /// Departure airport.
    pub origin: AirportCode,
    /// Arrival airport.
    pub destination: AirportCode,
    /// Scheduled departure.
    pub departure: NaiveDateTime,
    /// Scheduled arrival.
    pub arrival: NaiveDateTime,
    /// Block hours credited toward flight-time limits.
    pub flight_hours: f64,
    /// Duty hours consumed by the leg (report to release).
    pub duty_hours: f64,
    /// The fleet type operating the leg.
    pub aircraft_type: AircraftType,
    /// Whether any portion of the leg operates at night.
    pub is_night_flight: bool,
    /// Whether the leg crosses an international boundary.
    pub is_international: bool,
    /// Whether the leg ends in a scheduled layover.
    pub requires_layover: bool,
}

impl Flight {
    /// Creates a new `Flight`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The arrival is not strictly after the departure
    /// - Flight hours or duty hours are negative
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_id: String,
        flight_number: String,
        origin: AirportCode,
        destination: AirportCode,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        flight_hours: f64,
        duty_hours: f64,
        aircraft_type: AircraftType,
        is_night_flight: bool,
        is_international: bool,
        requires_layover: bool,
    ) -> Result<Self, DomainError> {
        if arrival <= departure {
            return Err(DomainError::InvalidFlightTimes {
                flight_id,
                departure,
                arrival,
            });
        }
        if flight_hours < 0.0 {
            return Err(DomainError::InvalidFlightHours {
                flight_id,
                reason: format!("flight hours must be non-negative, got {flight_hours}"),
            });
        }
        if duty_hours < 0.0 {
            return Err(DomainError::InvalidFlightHours {
                flight_id,
                reason: format!("duty hours must be non-negative, got {duty_hours}"),
            });
        }
        Ok(Self {
            flight_id,
            flight_number,
            origin,
            destination,
            departure,
            arrival,
            flight_hours,
            duty_hours,
            aircraft_type,
            is_night_flight,
            is_international,
            requires_layover,
        })
    }
}

/// Represents a rest gap between two flights of a pairing at a non-base
/// location.
///
/// Layovers are derived by the pairing generator and have no independent
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layover {
    /// The layover airport.
    pub location: AirportCode,
    /// Start of the rest gap (arrival of the inbound flight).
    pub start: NaiveDateTime,
    /// End of the rest gap (departure of the outbound flight).
    pub end: NaiveDateTime,
    /// Duration of the gap in hours.
    pub duration_hours: f64,
}

impl Layover {
    /// Creates a new `Layover`, deriving the duration from the gap.
    #[must_use]
    pub fn new(location: AirportCode, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let duration_hours: f64 = (end - start).num_minutes() as f64 / 60.0;
        Self {
            location,
            start,
            end,
            duration_hours,
        }
    }
}

/// Represents an ordered sequence of flights departing from and returning to
/// one base airport.
///
/// Pairings are created once by the pairing generator and are read-only
/// thereafter. Structural invariants:
///
/// - `destination(i) == origin(i + 1)` for consecutive flights
/// - the first origin and last destination equal the base
/// - every connection gap is at least the minimum connection time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    /// Deterministic pairing code (base plus sequence number).
    pub pairing_id: String,
    /// The operating base all flights return to.
    pub base_airport: AirportCode,
    /// The flights of the pairing, in departure order.
    pub flights: Vec<Flight>,
    /// Sum of the flights' block hours.
    pub total_flight_hours: f64,
    /// Sum of the flights' duty hours.
    pub total_duty_hours: f64,
    /// Rest gaps at non-base locations.
    pub layovers: Vec<Layover>,
    /// The fleet type shared by all flights.
    pub aircraft_type: AircraftType,
    /// Departure of the first flight.
    pub starts_at: NaiveDateTime,
    /// Arrival of the last flight.
    pub ends_at: NaiveDateTime,
}

impl Pairing {
    /// Creates a new `Pairing`, deriving aggregates from the flight list.
    ///
    /// The aircraft type and date range are taken from the flights; totals
    /// are summed. Structural invariants are checked separately via
    /// [`Pairing::validate`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyPairing` if `flights` is empty.
    pub fn new(
        pairing_id: String,
        base_airport: AirportCode,
        flights: Vec<Flight>,
        layovers: Vec<Layover>,
    ) -> Result<Self, DomainError> {
        let (Some(first), Some(last)) = (flights.first(), flights.last()) else {
            return Err(DomainError::EmptyPairing(pairing_id));
        };
        let total_flight_hours: f64 = flights.iter().map(|f| f.flight_hours).sum();
        let total_duty_hours: f64 = flights.iter().map(|f| f.duty_hours).sum();
        let aircraft_type: AircraftType = first.aircraft_type.clone();
        let starts_at: NaiveDateTime = first.departure;
        let ends_at: NaiveDateTime = last.arrival;
        Ok(Self {
            pairing_id,
            base_airport,
            flights,
            total_flight_hours,
            total_duty_hours,
            layovers,
            aircraft_type,
            starts_at,
            ends_at,
        })
    }

    /// Returns the pairing's date range as (first departure, last arrival).
    #[must_use]
    pub const fn date_range(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.starts_at, self.ends_at)
    }

    /// Checks whether this pairing's date range overlaps another's.
    ///
    /// Two pairings overlap when either boundary of `self` falls inside
    /// `other`, or `self` fully contains `other`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (start, end) = self.date_range();
        let (other_start, other_end) = other.date_range();

        (start >= other_start && start <= other_end)
            || (end >= other_start && end <= other_end)
            || (start <= other_start && end >= other_end)
    }

    /// Validates the pairing's structural invariants.
    ///
    /// # Arguments
    ///
    /// * `min_connection_minutes` - The minimum gap between consecutive flights
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The flight list is empty
    /// - The first origin or last destination is not the base
    /// - A flight does not depart from the previous flight's destination
    /// - A connection gap is below the minimum
    pub fn validate(&self, min_connection_minutes: i64) -> Result<(), DomainError> {
        let (Some(first), Some(last)) = (self.flights.first(), self.flights.last()) else {
            return Err(DomainError::EmptyPairing(self.pairing_id.clone()));
        };

        if first.origin != self.base_airport {
            return Err(DomainError::PairingBaseMismatch {
                pairing_id: self.pairing_id.clone(),
                expected: self.base_airport.value().to_string(),
                actual: first.origin.value().to_string(),
            });
        }
        if last.destination != self.base_airport {
            return Err(DomainError::PairingBaseMismatch {
                pairing_id: self.pairing_id.clone(),
                expected: self.base_airport.value().to_string(),
                actual: last.destination.value().to_string(),
            });
        }

        for (index, window) in self.flights.windows(2).enumerate() {
            let inbound: &Flight = &window[0];
            let outbound: &Flight = &window[1];

            if outbound.origin != inbound.destination {
                return Err(DomainError::PairingDiscontinuity {
                    pairing_id: self.pairing_id.clone(),
                    position: index + 1,
                });
            }

            let gap_minutes: i64 = (outbound.departure - inbound.arrival).num_minutes();
            if gap_minutes < min_connection_minutes {
                return Err(DomainError::InsufficientConnection {
                    pairing_id: self.pairing_id.clone(),
                    position: index + 1,
                    gap_minutes,
                });
            }
        }

        Ok(())
    }
}
