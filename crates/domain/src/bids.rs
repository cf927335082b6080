// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bid records and the bid period lifecycle.

use crate::error::DomainError;
use crate::types::AircraftType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the kind of request a bid expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidType {
    /// The crew member wants this pairing.
    Preference,
    /// The crew member wants to avoid this pairing.
    Avoid,
}

impl BidType {
    /// Returns the string representation of this bid type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preference => "Preference",
            Self::Avoid => "Avoid",
        }
    }
}

/// Represents the lifecycle state of a single bid.
///
/// Bids start `Pending` and are finalized exactly once by the award
/// processor to `Awarded` or `Denied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BidStatus {
    /// Submitted, not yet processed.
    #[default]
    Pending,
    /// Awarded to the crew member.
    Awarded,
    /// Denied; the denial reason is recorded on the bid.
    Denied,
}

impl BidStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Awarded => "Awarded",
            Self::Denied => "Denied",
        }
    }
}

impl FromStr for BidStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Awarded" => Ok(Self::Awarded),
            "Denied" => Ok(Self::Denied),
            _ => Err(DomainError::InvalidBidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents one crew member's ranked request for a pairing.
///
/// Created by the submission collaborator, consumed and finalized (status
/// mutation only) by the bid award processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewBid {
    /// The bid record identifier.
    pub bid_id: String,
    /// The submitting crew member.
    pub crew_id: String,
    /// The pairing requested.
    pub pairing_id: String,
    /// Rank of the request: 1 is most wanted, unique per crew member
    /// within a bid period.
    pub priority: u32,
    /// Whether the bid is a preference or an avoidance.
    pub bid_type: BidType,
    /// Current lifecycle state.
    pub status: BidStatus,
    /// Reason recorded when the bid is denied.
    pub denial_reason: Option<String>,
}

impl CrewBid {
    /// Creates a new pending bid.
    #[must_use]
    pub const fn new(
        bid_id: String,
        crew_id: String,
        pairing_id: String,
        priority: u32,
        bid_type: BidType,
    ) -> Self {
        Self {
            bid_id,
            crew_id,
            pairing_id,
            priority,
            bid_type,
            status: BidStatus::Pending,
            denial_reason: None,
        }
    }

    /// Marks the bid awarded.
    pub const fn award(&mut self) {
        self.status = BidStatus::Awarded;
    }

    /// Marks the bid denied with a human-readable reason.
    pub fn deny(&mut self, reason: String) {
        self.status = BidStatus::Denied;
        self.denial_reason = Some(reason);
    }
}

/// Represents the lifecycle state of a bid period.
///
/// Valid transitions: `Open` → `Closed` → `Processing` → `Completed`.
/// Only `Closed` periods may enter award processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BidPeriodStatus {
    /// Accepting bid submissions.
    #[default]
    Open,
    /// Submissions closed; awaiting award processing.
    Closed,
    /// Award processing in progress.
    Processing,
    /// Awards finalized.
    Completed,
}

impl BidPeriodStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
        }
    }

    /// Checks if a transition from this state to another is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Open, Self::Closed)
                | (Self::Closed, Self::Processing)
                | (Self::Processing, Self::Completed)
        )
    }

    /// Returns whether new bid submissions are accepted in this state.
    #[must_use]
    pub const fn is_accepting_bids(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl FromStr for BidPeriodStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            "Processing" => Ok(Self::Processing),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidBidPeriodStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BidPeriodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the scheduling window crew bid into.
///
/// Supplied by the caller; the core mutates only the externally visible
/// `status` field as award processing runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidPeriod {
    /// The scheduled month (1-12).
    pub month: u32,
    /// The scheduled year.
    pub year: i32,
    /// The fleet type this period covers.
    pub aircraft_type: AircraftType,
    /// When the period opened for submissions.
    pub opens_at: NaiveDateTime,
    /// When the period closed for submissions.
    pub closes_at: NaiveDateTime,
    /// Current lifecycle state.
    pub status: BidPeriodStatus,
}

impl BidPeriod {
    /// Creates a new `BidPeriod`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The month is outside 1-12
    /// - The close timestamp is not after the open timestamp
    pub fn new(
        month: u32,
        year: i32,
        aircraft_type: AircraftType,
        opens_at: NaiveDateTime,
        closes_at: NaiveDateTime,
        status: BidPeriodStatus,
    ) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidBidPeriodMonth { month });
        }
        if closes_at <= opens_at {
            return Err(DomainError::InvalidBidPeriodWindow { opens_at, closes_at });
        }
        Ok(Self {
            month,
            year,
            aircraft_type,
            opens_at,
            closes_at,
            status,
        })
    }
}
