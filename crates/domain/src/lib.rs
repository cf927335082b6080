// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod bids;
mod compliance;
mod crew;
mod error;
mod fatigue;
mod limits;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use bids::{BidPeriod, BidPeriodStatus, BidStatus, BidType, CrewBid};
pub use compliance::{
    AssignmentCheck, ComplianceResult, ProposedDuty, can_assign_pilot, check_duty_compliance,
};
pub use crew::{CrewMember, DEFAULT_SENIORITY, DutyHistory};
pub use error::DomainError;
pub use fatigue::{
    AlertnessLevel, FatigueDutyPeriod, FatigueScore, RestHistory, RiskLevel, SleepPeriod,
    calculate_fatigue_score,
};
pub use limits::RegulatoryLimits;
pub use types::{AircraftType, AirportCode, Flight, Layover, Pairing};
pub use validation::validate_bid;
