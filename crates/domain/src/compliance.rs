// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duty, flight-time, and rest rule evaluation.
//!
//! All functions here are pure: the same inputs always produce the same
//! result, and a rule breach is reported as data, never as an error. The
//! engines call these checks repeatedly while folding per-crew duty state.

use crate::crew::DutyHistory;
use crate::limits::RegulatoryLimits;
use crate::types::{Flight, Pairing};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fraction of the 28-day cap beyond which a warning is emitted.
const NEAR_LIMIT_FRACTION: f64 = 0.9;

/// A duty period proposed for assignment, before it is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedDuty {
    /// Report time of the duty period.
    pub start: NaiveDateTime,
    /// Block hours the duty would add.
    pub flight_hours: f64,
    /// Duty hours the period spans.
    pub duty_hours: f64,
    /// Number of sectors (legs) flown in the period.
    pub sectors: usize,
    /// Whether the duty operates at night.
    pub is_night_duty: bool,
}

impl ProposedDuty {
    /// Derives a proposed duty from a pairing's aggregates.
    #[must_use]
    pub fn from_pairing(pairing: &Pairing) -> Self {
        Self {
            start: pairing.starts_at,
            flight_hours: pairing.total_flight_hours,
            duty_hours: pairing.total_duty_hours,
            sectors: pairing.flights.len(),
            is_night_duty: pairing.flights.iter().any(|f| f.is_night_flight),
        }
    }
}

/// Outcome of a compliance check.
///
/// Ephemeral: returned per check, never persisted. The result is
/// non-compliant exactly when `violations` is non-empty; warnings are
/// advisory and do not block assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Whether all hard rules passed.
    pub compliant: bool,
    /// One entry per failed rule.
    pub violations: Vec<String>,
    /// Advisory notices for near-limit conditions.
    pub warnings: Vec<String>,
}

impl ComplianceResult {
    /// Builds a result from collected violations and warnings.
    #[must_use]
    pub const fn new(violations: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            compliant: violations.is_empty(),
            violations,
            warnings,
        }
    }
}

/// Evaluates a proposed duty period against a crew member's history.
///
/// Each rule is checked independently and appends at most one violation:
///
/// 1. The rolling 28-day flight-time total plus the proposed block hours
///    must not exceed the 28-day cap.
/// 2. The proposed duty hours must not exceed the sector-dependent duty
///    ceiling (single-sector and multi-sector thresholds differ).
/// 3. The rest before the duty must meet the required minimum: the
///    baseline, raised to the extended figure after a long duty day, plus
///    the night supplement for night duty.
///
/// A crew member with no recorded prior duty is treated as fully rested.
#[must_use]
pub fn check_duty_compliance(
    duty: &ProposedDuty,
    history: &DutyHistory,
    limits: &RegulatoryLimits,
) -> ComplianceResult {
    let mut violations: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let projected_28_days: f64 = history.flight_hours_last_28_days + duty.flight_hours;
    if projected_28_days > limits.max_flight_hours_per_28_days {
        violations.push(format!(
            "28-day flight time would reach {projected_28_days:.1} h, exceeding the {:.1} h limit",
            limits.max_flight_hours_per_28_days
        ));
    } else if projected_28_days > limits.max_flight_hours_per_28_days * NEAR_LIMIT_FRACTION {
        warnings.push(format!(
            "28-day flight time would reach {projected_28_days:.1} h, within 10% of the {:.1} h limit",
            limits.max_flight_hours_per_28_days
        ));
    }

    let duty_ceiling: f64 = if duty.sectors <= 1 {
        limits.max_duty_hours_single_sector
    } else {
        limits.max_duty_hours_multi_sector
    };
    if duty.duty_hours > duty_ceiling {
        violations.push(format!(
            "duty period of {:.1} h exceeds the {duty_ceiling:.1} h ceiling for {} sector(s)",
            duty.duty_hours, duty.sectors
        ));
    }

    let mut required_rest: f64 = if history.duty_hours_daily > limits.long_duty_threshold_hours {
        limits.extended_rest_hours
    } else {
        limits.min_rest_hours
    };
    if duty.is_night_duty {
        required_rest += limits.night_duty_rest_supplement_hours;
    }
    if let Some(rest) = history.rest_hours_before(duty.start) {
        if rest < required_rest {
            violations.push(format!(
                "rest of {rest:.1} h before duty is below the required {required_rest:.1} h"
            ));
        }
    }

    ComplianceResult::new(violations, warnings)
}

/// Outcome of the fairness engine's per-flight eligibility gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentCheck {
    /// Whether the crew member may take the flight.
    pub can_assign: bool,
    /// One entry per failed eligibility rule.
    pub reasons: Vec<String>,
}

/// Checks whether a crew member is eligible to fly one more flight.
///
/// Eligibility requires that the projected monthly block hours stay within
/// the monthly cap, that the flight's duty hours fit under the daily duty
/// ceiling, and that the rest gap since the crew member's last duty end
/// meets the minimum-rest floor.
#[must_use]
pub fn can_assign_pilot(
    flight: &Flight,
    history: &DutyHistory,
    limits: &RegulatoryLimits,
) -> AssignmentCheck {
    let mut reasons: Vec<String> = Vec::new();

    let projected_monthly: f64 = history.flight_hours_monthly + flight.flight_hours;
    if projected_monthly > limits.max_flight_hours_per_month {
        reasons.push(format!(
            "monthly flight time would reach {projected_monthly:.1} h, exceeding the {:.1} h limit",
            limits.max_flight_hours_per_month
        ));
    }

    if flight.duty_hours > limits.max_duty_hours_per_day {
        reasons.push(format!(
            "duty of {:.1} h exceeds the {:.1} h daily ceiling",
            flight.duty_hours, limits.max_duty_hours_per_day
        ));
    }

    if let Some(rest) = history.rest_hours_before(flight.departure) {
        if rest < limits.min_rest_hours {
            reasons.push(format!(
                "rest of {rest:.1} h before departure is below the {:.1} h minimum",
                limits.min_rest_hours
            ));
        }
    }

    AssignmentCheck {
        can_assign: reasons.is_empty(),
        reasons,
    }
}
