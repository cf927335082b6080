// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fairness assignment: assigning individual flights directly to crew.
//!
//! Used when no bidding round exists. Flights are processed in ascending
//! departure order — this ordering is load-bearing: it determines which
//! crew member's cumulative stats are visible when a later flight is
//! scored, so the pass is deterministic for a fixed input but makes no
//! claim of global optimality.

use airsched_domain::{
    AssignmentCheck, CrewMember, DutyHistory, Flight, RegulatoryLimits, can_assign_pilot,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Score adjustment favoring crew below the monthly flight-hour target.
const UNDER_MIN_FLIGHT_HOURS_ADJUSTMENT: f64 = -50.0;
/// Score adjustment favoring crew below the monthly duty-hour target.
const UNDER_MIN_DUTY_HOURS_ADJUSTMENT: f64 = -30.0;
/// Score adjustment steering away from crew near the monthly maximum.
const NEAR_MAX_FLIGHT_HOURS_ADJUSTMENT: f64 = 100.0;
/// Margin to the monthly maximum at which the steering adjustment applies.
const NEAR_MAX_MARGIN_HOURS: f64 = 10.0;

/// Options for a roster generation pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RosterOptions {
    /// The limit configuration applied by the eligibility gate.
    pub limits: RegulatoryLimits,
}

/// One flight assigned to one crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Deterministic entry id (`R-{nnnn}`).
    pub entry_id: String,
    /// The assigned flight.
    pub flight_id: String,
    /// The crew member taking the flight.
    pub crew_id: String,
}

/// A flight no crew member could legally take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedFlight {
    /// The flight left unassigned.
    pub flight_id: String,
    /// Why no assignment was possible.
    pub reason: String,
}

/// Result of a roster generation pass.
///
/// Always a complete, best-effort result: infeasibility is reported through
/// `unassigned_flights` and `warnings`, never as a failure of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterResult {
    /// Assignments in flight order.
    pub entries: Vec<RosterEntry>,
    /// Final per-crew accumulators, keyed by crew id.
    pub stats: HashMap<String, DutyHistory>,
    /// Flights with no eligible crew, with reasons.
    pub unassigned_flights: Vec<UnassignedFlight>,
    /// Under-utilization warnings emitted after the pass.
    pub warnings: Vec<String>,
}

/// Assigns flights to crew, balancing workload fairness against limits.
///
/// For each flight (ascending departure order): crew qualified on the
/// flight's fleet are filtered through the compliance eligibility gate,
/// each survivor is scored by weighted deviation from the cohort's running
/// averages, and the lowest score wins (ties go to the first crew member
/// seen, in roster iteration order). The winner's accumulator is updated
/// in place before the next flight is considered.
///
/// After all flights, a warning is emitted for every crew member still
/// below the configured monthly minimum flight-hour or duty-hour targets.
#[must_use]
pub fn generate_roster(
    flights: &[Flight],
    crew: &[CrewMember],
    options: &RosterOptions,
) -> RosterResult {
    let limits: &RegulatoryLimits = &options.limits;

    let mut stats: HashMap<String, DutyHistory> = crew
        .iter()
        .map(|member| (member.crew_id.clone(), DutyHistory::new()))
        .collect();

    let mut order: Vec<usize> = (0..flights.len()).collect();
    order.sort_by_key(|&index| flights[index].departure);

    let mut entries: Vec<RosterEntry> = Vec::new();
    let mut unassigned_flights: Vec<UnassignedFlight> = Vec::new();
    let mut sequence: u32 = 0;

    for &index in &order {
        let flight: &Flight = &flights[index];

        let qualified: Vec<&CrewMember> = crew
            .iter()
            .filter(|member| member.qualification == flight.aircraft_type)
            .collect();
        if qualified.is_empty() {
            unassigned_flights.push(UnassignedFlight {
                flight_id: flight.flight_id.clone(),
                reason: format!("no crew qualified on {}", flight.aircraft_type),
            });
            continue;
        }

        let eligible: Vec<&CrewMember> = qualified
            .iter()
            .copied()
            .filter(|member| {
                stats.get(&member.crew_id).is_some_and(|history| {
                    let check: AssignmentCheck = can_assign_pilot(flight, history, limits);
                    check.can_assign
                })
            })
            .collect();

        if eligible.is_empty() {
            unassigned_flights.push(UnassignedFlight {
                flight_id: flight.flight_id.clone(),
                reason: String::from(
                    "no eligible crew member within duty, flight-hour, and rest limits",
                ),
            });
            continue;
        }

        let averages: CohortAverages = CohortAverages::compute(crew, &stats);

        let mut best: Option<(&CrewMember, f64)> = None;
        for member in eligible {
            if let Some(history) = stats.get(&member.crew_id) {
                let score: f64 = fairness_score(flight, history, &averages, limits);
                // Strict comparison keeps the first-seen candidate on ties.
                let improved: bool = best.is_none_or(|(_, best_score)| score < best_score);
                if improved {
                    best = Some((member, score));
                }
            }
        }

        if let Some((winner, score)) = best {
            if let Some(history) = stats.get_mut(&winner.crew_id) {
                history.record_flight(flight);
            }
            sequence += 1;
            debug!(
                flight_id = %flight.flight_id,
                crew_id = %winner.crew_id,
                score,
                "assigned flight"
            );
            entries.push(RosterEntry {
                entry_id: format!("R-{sequence:04}"),
                flight_id: flight.flight_id.clone(),
                crew_id: winner.crew_id.clone(),
            });
        }
    }

    let mut warnings: Vec<String> = Vec::new();
    for member in crew {
        if let Some(history) = stats.get(&member.crew_id) {
            if history.flight_hours_monthly < limits.min_monthly_flight_hours {
                warnings.push(format!(
                    "crew member {} is below the monthly minimum of {:.1} flight hours ({:.1} h assigned)",
                    member.crew_id, limits.min_monthly_flight_hours, history.flight_hours_monthly
                ));
            }
            if history.duty_hours_monthly < limits.min_monthly_duty_hours {
                warnings.push(format!(
                    "crew member {} is below the monthly minimum of {:.1} duty hours ({:.1} h assigned)",
                    member.crew_id, limits.min_monthly_duty_hours, history.duty_hours_monthly
                ));
            }
        }
    }

    info!(
        assigned = entries.len(),
        unassigned = unassigned_flights.len(),
        warnings = warnings.len(),
        "roster generation pass complete"
    );

    RosterResult {
        entries,
        stats,
        unassigned_flights,
        warnings,
    }
}

/// Cohort running averages used as the fairness reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CohortAverages {
    flight_hours_monthly: f64,
    duty_hours_monthly: f64,
    night_flights: f64,
    layover_count: f64,
    international_flights: f64,
}

impl CohortAverages {
    /// Averages over the whole cohort, from the accumulators as they stand
    /// when one flight is about to be scored.
    fn compute(crew: &[CrewMember], stats: &HashMap<String, DutyHistory>) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let cohort_size: f64 = crew.len().max(1) as f64;

        let mut totals: Self = Self {
            flight_hours_monthly: 0.0,
            duty_hours_monthly: 0.0,
            night_flights: 0.0,
            layover_count: 0.0,
            international_flights: 0.0,
        };
        for member in crew {
            if let Some(history) = stats.get(&member.crew_id) {
                totals.flight_hours_monthly += history.flight_hours_monthly;
                totals.duty_hours_monthly += history.duty_hours_monthly;
                totals.night_flights += f64::from(history.night_flights);
                totals.layover_count += f64::from(history.layover_count);
                totals.international_flights += f64::from(history.international_flights);
            }
        }

        Self {
            flight_hours_monthly: totals.flight_hours_monthly / cohort_size,
            duty_hours_monthly: totals.duty_hours_monthly / cohort_size,
            night_flights: totals.night_flights / cohort_size,
            layover_count: totals.layover_count / cohort_size,
            international_flights: totals.international_flights / cohort_size,
        }
    }
}

/// Scores one candidate for one flight. Lower is more deserving.
///
/// The score is the candidate's weighted deviation from the cohort
/// averages, with adjustments biasing toward under-utilized crew and away
/// from crew close to the monthly maximum.
fn fairness_score(
    flight: &Flight,
    history: &DutyHistory,
    averages: &CohortAverages,
    limits: &RegulatoryLimits,
) -> f64 {
    let mut score: f64 = 0.4 * (history.flight_hours_monthly - averages.flight_hours_monthly)
        + 0.3 * (history.duty_hours_monthly - averages.duty_hours_monthly);

    if flight.is_night_flight {
        score += 0.1 * (f64::from(history.night_flights) - averages.night_flights);
    }
    if flight.requires_layover {
        score += 0.1 * (f64::from(history.layover_count) - averages.layover_count);
    }
    if flight.is_international {
        score +=
            0.1 * (f64::from(history.international_flights) - averages.international_flights);
    }

    if history.flight_hours_monthly < limits.min_monthly_flight_hours {
        score += UNDER_MIN_FLIGHT_HOURS_ADJUSTMENT;
    }
    if history.duty_hours_monthly < limits.min_monthly_duty_hours {
        score += UNDER_MIN_DUTY_HOURS_ADJUSTMENT;
    }
    if history.flight_hours_monthly >= limits.max_flight_hours_per_month - NEAR_MAX_MARGIN_HOURS {
        score += NEAR_MAX_FLIGHT_HOURS_ADJUSTMENT;
    }

    score
}
