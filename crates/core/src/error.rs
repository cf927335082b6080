// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use airsched_domain::{BidPeriodStatus, DomainError};

/// Errors that can occur while running an engine pass.
///
/// Regulatory breaches never surface here: they are returned as data in the
/// pass results. `CoreError` covers inputs that make a pass impossible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The bid period is not in a state that allows award processing.
    PeriodNotProcessable {
        /// The period's current lifecycle state.
        status: BidPeriodStatus,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::PeriodNotProcessable { status } => {
                write!(
                    f,
                    "Bid period in state '{status}' cannot be processed; it must be Closed"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
