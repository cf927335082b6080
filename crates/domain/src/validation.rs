// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bids::CrewBid;
use crate::error::DomainError;
use crate::limits::RegulatoryLimits;
use std::collections::HashSet;

/// Validates a bid at submission time, before it enters the award pipeline.
///
/// This function is pure, deterministic, and has no side effects. Only the
/// submitting crew member's own existing bids are consulted; contention
/// between crew members is resolved later, by the award processor.
///
/// # Arguments
///
/// * `bid` - The bid being submitted
/// * `existing_bids` - All bids already accepted for this bid period
/// * `limits` - The limit configuration (for the per-crew bid cap)
///
/// # Returns
///
/// * `Ok(())` if the bid may be accepted
/// * `Err(DomainError)` describing the first failed rule
///
/// # Errors
///
/// Returns an error if:
/// - The crew id or pairing id is missing, or the priority is zero
/// - The crew member already has a bid for this pairing
/// - The crew member already has a bid at this priority
/// - The crew member has reached the per-period bid cap
pub fn validate_bid(
    bid: &CrewBid,
    existing_bids: &[CrewBid],
    limits: &RegulatoryLimits,
) -> Result<(), DomainError> {
    // Rule: required fields must be present
    if bid.crew_id.is_empty() {
        return Err(DomainError::InvalidBid(String::from(
            "crew id must not be empty",
        )));
    }
    if bid.pairing_id.is_empty() {
        return Err(DomainError::InvalidBid(String::from(
            "pairing id must not be empty",
        )));
    }
    if bid.priority == 0 {
        return Err(DomainError::InvalidBid(String::from(
            "priority must be at least 1",
        )));
    }

    let own_bids: Vec<&CrewBid> = existing_bids
        .iter()
        .filter(|existing| existing.crew_id == bid.crew_id)
        .collect();

    // Rule: one bid per pairing per crew member
    let bid_pairings: HashSet<&str> = own_bids
        .iter()
        .map(|existing| existing.pairing_id.as_str())
        .collect();
    if bid_pairings.contains(bid.pairing_id.as_str()) {
        return Err(DomainError::DuplicateBidPairing {
            crew_id: bid.crew_id.clone(),
            pairing_id: bid.pairing_id.clone(),
        });
    }

    // Rule: priorities are unique per crew member within a bid period
    let used_priorities: HashSet<u32> =
        own_bids.iter().map(|existing| existing.priority).collect();
    if used_priorities.contains(&bid.priority) {
        return Err(DomainError::DuplicateBidPriority {
            crew_id: bid.crew_id.clone(),
            priority: bid.priority,
        });
    }

    // Rule: per-crew bid cap
    if own_bids.len() >= limits.max_bids_per_crew {
        return Err(DomainError::BidLimitExceeded {
            crew_id: bid.crew_id.clone(),
            limit: limits.max_bids_per_crew,
        });
    }

    Ok(())
}
