// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDateTime;

/// Errors that can occur during domain validation.
///
/// Regulatory breaches are NOT errors: they are reported as data in a
/// [`crate::ComplianceResult`] or as denial reasons so that processing can
/// continue for everything else. `DomainError` is reserved for records that
/// are malformed and must never enter an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Airport code is not 3-4 alphabetic characters.
    InvalidAirportCode(String),
    /// Flight arrival is not strictly after departure.
    InvalidFlightTimes {
        /// The flight identifier.
        flight_id: String,
        /// The scheduled departure.
        departure: NaiveDateTime,
        /// The scheduled arrival.
        arrival: NaiveDateTime,
    },
    /// Flight or duty hour figures are negative.
    InvalidFlightHours {
        /// The flight identifier.
        flight_id: String,
        /// Description of the invalid figure.
        reason: String,
    },
    /// Bid period month is outside 1-12.
    InvalidBidPeriodMonth {
        /// The invalid month value.
        month: u32,
    },
    /// Bid period close timestamp is not after its open timestamp.
    InvalidBidPeriodWindow {
        /// The open timestamp.
        opens_at: NaiveDateTime,
        /// The close timestamp.
        closes_at: NaiveDateTime,
    },
    /// Bid is missing a required field or carries an invalid value.
    InvalidBid(String),
    /// Crew member already has a bid for this pairing.
    DuplicateBidPairing {
        /// The submitting crew member.
        crew_id: String,
        /// The pairing already bid on.
        pairing_id: String,
    },
    /// Crew member already has a bid at this priority.
    DuplicateBidPriority {
        /// The submitting crew member.
        crew_id: String,
        /// The priority already in use.
        priority: u32,
    },
    /// Crew member has reached the per-period bid cap.
    BidLimitExceeded {
        /// The submitting crew member.
        crew_id: String,
        /// The configured maximum number of bids.
        limit: usize,
    },
    /// Pairing contains no flights.
    EmptyPairing(String),
    /// Consecutive pairing flights do not connect.
    PairingDiscontinuity {
        /// The pairing identifier.
        pairing_id: String,
        /// Zero-based index of the flight whose origin does not match.
        position: usize,
    },
    /// Pairing does not start and end at its base airport.
    PairingBaseMismatch {
        /// The pairing identifier.
        pairing_id: String,
        /// The configured base airport.
        expected: String,
        /// The offending airport.
        actual: String,
    },
    /// A connection gap within a pairing is below the minimum.
    InsufficientConnection {
        /// The pairing identifier.
        pairing_id: String,
        /// Zero-based index of the arriving flight.
        position: usize,
        /// The gap in minutes.
        gap_minutes: i64,
    },
    /// Bid status string is not recognized.
    InvalidBidStatus(String),
    /// Bid period status string is not recognized.
    InvalidBidPeriodStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAirportCode(code) => {
                write!(
                    f,
                    "Invalid airport code '{code}': must be 3-4 alphabetic characters"
                )
            }
            Self::InvalidFlightTimes {
                flight_id,
                departure,
                arrival,
            } => {
                write!(
                    f,
                    "Flight '{flight_id}' arrival {arrival} is not after departure {departure}"
                )
            }
            Self::InvalidFlightHours { flight_id, reason } => {
                write!(f, "Flight '{flight_id}' has invalid hours: {reason}")
            }
            Self::InvalidBidPeriodMonth { month } => {
                write!(f, "Invalid bid period month: {month}. Must be 1-12")
            }
            Self::InvalidBidPeriodWindow { opens_at, closes_at } => {
                write!(
                    f,
                    "Bid period close {closes_at} is not after open {opens_at}"
                )
            }
            Self::InvalidBid(msg) => write!(f, "Invalid bid: {msg}"),
            Self::DuplicateBidPairing {
                crew_id,
                pairing_id,
            } => {
                write!(
                    f,
                    "Crew member '{crew_id}' already has a bid for pairing '{pairing_id}'"
                )
            }
            Self::DuplicateBidPriority { crew_id, priority } => {
                write!(
                    f,
                    "Crew member '{crew_id}' already has a bid at priority {priority}"
                )
            }
            Self::BidLimitExceeded { crew_id, limit } => {
                write!(
                    f,
                    "Crew member '{crew_id}' has reached the maximum of {limit} bids for this period"
                )
            }
            Self::EmptyPairing(pairing_id) => {
                write!(f, "Pairing '{pairing_id}' contains no flights")
            }
            Self::PairingDiscontinuity {
                pairing_id,
                position,
            } => {
                write!(
                    f,
                    "Pairing '{pairing_id}' flight at index {position} does not depart from the previous arrival airport"
                )
            }
            Self::PairingBaseMismatch {
                pairing_id,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Pairing '{pairing_id}' must start and end at base '{expected}', found '{actual}'"
                )
            }
            Self::InsufficientConnection {
                pairing_id,
                position,
                gap_minutes,
            } => {
                write!(
                    f,
                    "Pairing '{pairing_id}' connection before flight at index {position} is only {gap_minutes} minutes"
                )
            }
            Self::InvalidBidStatus(s) => write!(f, "Unknown bid status: {s}"),
            Self::InvalidBidPeriodStatus(s) => write!(f, "Unknown bid period status: {s}"),
        }
    }
}

impl std::error::Error for DomainError {}
