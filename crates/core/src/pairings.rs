// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pairing generation: chaining raw flights into base-returning duty
//! sequences.
//!
//! The generator is a deterministic greedy heuristic, not a solver. Seed
//! flights are considered in ascending departure order; each chain extends
//! with the earliest-departing legal continuation until it returns to base
//! or must be abandoned. Flights that cannot close a loop are simply absent
//! from the result.

use crate::error::CoreError;
use airsched_domain::{AirportCode, Flight, Layover, Pairing, RegulatoryLimits};
use std::collections::HashSet;
use tracing::{debug, info};

/// Chains flights into pairings departing from and returning to
/// `base_airport`.
///
/// Each flight is used at most once across the whole pass. A chain is
/// accepted the moment it returns to base; it is abandoned (and its flights
/// released back to the pool) when no legal continuation exists or the
/// chain reaches `max_legs_per_pairing` legs without closing. A legal
/// continuation departs from the chain's current location, shares its
/// aircraft type, departs strictly after the current arrival, and leaves a
/// connection gap of at least `min_connection_minutes`.
///
/// Pairing codes are a deterministic sequence (`{BASE}-{nnn}`), so repeated
/// runs over the same input produce identical output.
#[must_use]
pub fn generate_pairings(
    flights: &[Flight],
    base_airport: &AirportCode,
    limits: &RegulatoryLimits,
) -> Vec<Pairing> {
    // Seed and continuation candidates are both consumed in ascending
    // departure order; this ordering is what makes the pass deterministic.
    let mut order: Vec<usize> = (0..flights.len()).collect();
    order.sort_by_key(|&index| flights[index].departure);

    let mut used: HashSet<usize> = HashSet::new();
    let mut pairings: Vec<Pairing> = Vec::new();
    let mut sequence: u32 = 0;

    for &start in &order {
        if used.contains(&start) || flights[start].origin != *base_airport {
            continue;
        }

        let Some(chain) = build_chain(flights, &order, &used, start, base_airport, limits) else {
            continue;
        };

        used.extend(chain.iter().copied());
        sequence += 1;
        let pairing_id: String = format!("{base_airport}-{sequence:03}");

        let chain_flights: Vec<Flight> =
            chain.iter().map(|&index| flights[index].clone()).collect();
        let layovers: Vec<Layover> = derive_layovers(&chain_flights, limits.min_layover_hours);

        match Pairing::new(pairing_id, base_airport.clone(), chain_flights, layovers) {
            Ok(pairing) => {
                debug!(
                    pairing_id = %pairing.pairing_id,
                    legs = pairing.flights.len(),
                    "chained pairing"
                );
                pairings.push(pairing);
            }
            Err(err) => {
                // Chains are non-empty by construction; this is unreachable
                // in practice but must not abort the pass.
                debug!(error = %CoreError::from(err), "discarded malformed chain");
            }
        }
    }

    let unchained: usize = flights.len() - used.len();
    if unchained > 0 {
        debug!(unchained, "flights left without a base-returning chain");
    }
    info!(
        base = %base_airport,
        pairings = pairings.len(),
        "pairing generation pass complete"
    );

    pairings
}

/// Extends a chain from `start` until it returns to base.
///
/// Returns the flight indices of a closed chain, or `None` when the chain
/// must be abandoned.
fn build_chain(
    flights: &[Flight],
    order: &[usize],
    used: &HashSet<usize>,
    start: usize,
    base_airport: &AirportCode,
    limits: &RegulatoryLimits,
) -> Option<Vec<usize>> {
    let mut chain: Vec<usize> = vec![start];
    let mut location: AirportCode = flights[start].destination.clone();
    let mut arrival = flights[start].arrival;
    let fleet = &flights[start].aircraft_type;

    while location != *base_airport {
        if chain.len() >= limits.max_legs_per_pairing {
            return None;
        }

        let next: usize = order.iter().copied().find(|&candidate| {
            !used.contains(&candidate)
                && !chain.contains(&candidate)
                && flights[candidate].origin == location
                && flights[candidate].aircraft_type == *fleet
                && flights[candidate].departure > arrival
                && (flights[candidate].departure - arrival).num_minutes()
                    >= limits.min_connection_minutes
        })?;

        chain.push(next);
        location = flights[next].destination.clone();
        arrival = flights[next].arrival;
    }

    Some(chain)
}

/// Derives layovers from the chain's connection gaps.
///
/// A gap counts as a layover when it is at least `min_layover_hours`;
/// shorter gaps are ordinary connections.
fn derive_layovers(chain_flights: &[Flight], min_layover_hours: f64) -> Vec<Layover> {
    chain_flights
        .windows(2)
        .filter_map(|window| {
            let inbound: &Flight = &window[0];
            let outbound: &Flight = &window[1];
            #[allow(clippy::cast_precision_loss)]
            let gap_hours: f64 =
                (outbound.departure - inbound.arrival).num_minutes() as f64 / 60.0;
            (gap_hours >= min_layover_hours).then(|| {
                Layover::new(
                    inbound.destination.clone(),
                    inbound.arrival,
                    outbound.departure,
                )
            })
        })
        .collect()
}
