// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bid award processing: awarding pairing bids in strict seniority order.
//!
//! Crew are processed most-senior first; within one crew member, preference
//! bids are processed in priority order against an evolving temporary duty
//! history. A bid is denied the moment a check fails — availability, then
//! date-range conflict, then duty compliance — and processing continues
//! with the next bid. Denials are data, never errors.

use crate::error::CoreError;
use airsched_domain::{
    BidPeriod, BidPeriodStatus, BidStatus, BidType, CrewBid, CrewMember, DutyHistory, Pairing,
    ProposedDuty, RegulatoryLimits, check_duty_compliance,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

/// One crew member together with their submitted bids for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewWithBids {
    /// The bidding crew member.
    pub member: CrewMember,
    /// The crew member's bids, in submission order.
    pub bids: Vec<CrewBid>,
}

/// A single awarded bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidAward {
    /// The awarded bid.
    pub bid_id: String,
    /// The crew member receiving the pairing.
    pub crew_id: String,
    /// The pairing awarded.
    pub pairing_id: String,
    /// The priority the crew member gave the bid.
    pub priority: u32,
}

/// Result of one bid award pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidProcessingResult {
    /// Total bids considered.
    pub total_bids: usize,
    /// Bids awarded.
    pub awarded: usize,
    /// Bids denied.
    pub denied: usize,
    /// Award entries, in processing order.
    pub awards: Vec<BidAward>,
    /// Pairings left unclaimed, in input order.
    pub unassigned_pairing_ids: Vec<String>,
    /// Wall-clock processing time in milliseconds.
    pub processing_time_ms: u64,
    /// Flat list of human-readable denial reasons.
    pub denial_reasons: Vec<String>,
}

/// Awards crew bids against the available pairing pool.
///
/// Crew members are sorted ascending by seniority number (lower is more
/// senior; a missing number sorts last), ties broken by input order. For
/// each crew member, preference bids are checked in priority order:
///
/// 1. a pairing claimed earlier in the pass denies with "no longer
///    available";
/// 2. a date-range overlap with a pairing already awarded to this crew
///    member in this pass denies as a conflict;
/// 3. a duty compliance failure against the crew member's evolving
///    temporary history denies with the checker's violations.
///
/// Otherwise the bid is awarded: the pairing leaves the pool and its hours
/// fold into the temporary history. Every bid still pending after its
/// owner's turn (including avoid-type bids, which are never award
/// candidates) is denied. There is no cap on awards per crew member beyond
/// what compliance enforces.
///
/// The period must be `Closed`; it is moved through `Processing` to
/// `Completed` — its only externally visible mutation.
///
/// # Errors
///
/// Returns `CoreError::PeriodNotProcessable` if the period is not `Closed`.
pub fn process_bids(
    period: &mut BidPeriod,
    crew_with_bids: &mut [CrewWithBids],
    pairings: &[Pairing],
    limits: &RegulatoryLimits,
) -> Result<BidProcessingResult, CoreError> {
    if !period.status.can_transition_to(BidPeriodStatus::Processing) {
        return Err(CoreError::PeriodNotProcessable {
            status: period.status,
        });
    }
    period.status = BidPeriodStatus::Processing;

    let started: Instant = Instant::now();

    let mut available: HashMap<String, &Pairing> = pairings
        .iter()
        .map(|pairing| (pairing.pairing_id.clone(), pairing))
        .collect();

    // Most senior first; stable sort keeps input order on equal seniority.
    let mut crew_order: Vec<usize> = (0..crew_with_bids.len()).collect();
    crew_order.sort_by_key(|&index| crew_with_bids[index].member.effective_seniority());

    let mut awards: Vec<BidAward> = Vec::new();
    let mut denial_reasons: Vec<String> = Vec::new();

    for &crew_index in &crew_order {
        let entry: &mut CrewWithBids = &mut crew_with_bids[crew_index];
        let crew_id: String = entry.member.crew_id.clone();

        let mut temporary: DutyHistory = DutyHistory::baseline();
        let mut awarded_pairings: Vec<&Pairing> = Vec::new();

        let mut bid_order: Vec<usize> = (0..entry.bids.len())
            .filter(|&index| entry.bids[index].bid_type == BidType::Preference)
            .collect();
        bid_order.sort_by_key(|&index| entry.bids[index].priority);

        for bid_index in bid_order {
            let pairing_id: String = entry.bids[bid_index].pairing_id.clone();

            let Some(&pairing) = available.get(&pairing_id) else {
                let reason: String = format!("pairing {pairing_id} no longer available");
                entry.bids[bid_index].deny(reason.clone());
                denial_reasons.push(format!("crew {crew_id}: {reason}"));
                continue;
            };

            if let Some(conflicting) = awarded_pairings
                .iter()
                .find(|existing| pairing.overlaps(existing))
            {
                let reason: String = format!(
                    "pairing {pairing_id} conflicts with awarded pairing {}",
                    conflicting.pairing_id
                );
                entry.bids[bid_index].deny(reason.clone());
                denial_reasons.push(format!("crew {crew_id}: {reason}"));
                continue;
            }

            let proposed: ProposedDuty = ProposedDuty::from_pairing(pairing);
            let compliance = check_duty_compliance(&proposed, &temporary, limits);
            if !compliance.compliant {
                let reason: String = format!(
                    "pairing {pairing_id} denied for compliance: {}",
                    compliance.violations.join("; ")
                );
                entry.bids[bid_index].deny(reason.clone());
                denial_reasons.push(format!("crew {crew_id}: {reason}"));
                continue;
            }

            entry.bids[bid_index].award();
            temporary.record_pairing(pairing);
            awarded_pairings.push(pairing);
            available.remove(&pairing_id);
            debug!(
                crew_id = %crew_id,
                pairing_id = %pairing_id,
                priority = entry.bids[bid_index].priority,
                "awarded bid"
            );
            awards.push(BidAward {
                bid_id: entry.bids[bid_index].bid_id.clone(),
                crew_id: crew_id.clone(),
                pairing_id,
                priority: entry.bids[bid_index].priority,
            });
        }

        // Everything not explicitly awarded is finalized as denied,
        // including avoid-type bids, which never enter the award loop.
        for bid in &mut entry.bids {
            if bid.status == BidStatus::Pending {
                denial_reasons.push(format!(
                    "crew {crew_id}: bid {} processed without award",
                    bid.bid_id
                ));
                bid.deny(String::from("bid period processed without award"));
            }
        }
    }

    let unassigned_pairing_ids: Vec<String> = pairings
        .iter()
        .filter(|pairing| available.contains_key(&pairing.pairing_id))
        .map(|pairing| pairing.pairing_id.clone())
        .collect();

    let total_bids: usize = crew_with_bids.iter().map(|entry| entry.bids.len()).sum();
    let denied: usize = crew_with_bids
        .iter()
        .flat_map(|entry| entry.bids.iter())
        .filter(|bid| bid.status == BidStatus::Denied)
        .count();

    period.status = BidPeriodStatus::Completed;

    let processing_time_ms: u64 =
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    info!(
        month = period.month,
        year = period.year,
        total_bids,
        awarded = awards.len(),
        denied,
        processing_time_ms,
        "bid award pass complete"
    );

    Ok(BidProcessingResult {
        total_bids,
        awarded: awards.len(),
        denied,
        awards,
        unassigned_pairing_ids,
        processing_time_ms,
        denial_reasons,
    })
}
