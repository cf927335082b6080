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

mod awards;
mod error;
mod pairings;
mod roster;

#[cfg(test)]
mod tests;

pub use awards::{BidAward, BidProcessingResult, CrewWithBids, process_bids};
pub use error::CoreError;
pub use pairings::generate_pairings;
pub use roster::{RosterEntry, RosterOptions, RosterResult, UnassignedFlight, generate_roster};
