// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Regulatory and operational limit configuration.

use serde::{Deserialize, Serialize};

/// Duty, flight-time, and rest limits applied by the engines.
///
/// Defaults supply the baseline rule set; callers may override any field
/// before handing the configuration to an engine. All engines take the
/// limits by reference and never mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryLimits {
    /// Maximum block hours over any rolling 28-day window.
    pub max_flight_hours_per_28_days: f64,
    /// Maximum block hours in one scheduling month.
    pub max_flight_hours_per_month: f64,
    /// Maximum block hours over any rolling 365-day window.
    pub max_flight_hours_per_year: f64,
    /// Maximum duty hours in a single duty day.
    pub max_duty_hours_per_day: f64,
    /// Duty ceiling for a single-sector duty period.
    pub max_duty_hours_single_sector: f64,
    /// Duty ceiling for a multi-sector duty period.
    pub max_duty_hours_multi_sector: f64,
    /// Baseline minimum rest before a duty period.
    pub min_rest_hours: f64,
    /// Minimum rest after a duty day exceeding the long-duty threshold.
    pub extended_rest_hours: f64,
    /// Additional rest required before a night duty.
    pub night_duty_rest_supplement_hours: f64,
    /// Duty-day length beyond which the extended rest requirement applies.
    pub long_duty_threshold_hours: f64,
    /// Minimum connection gap between consecutive pairing flights.
    pub min_connection_minutes: i64,
    /// Maximum legs a pairing chain may reach before being abandoned.
    pub max_legs_per_pairing: usize,
    /// Minimum gap that counts as a layover rather than a connection.
    pub min_layover_hours: f64,
    /// Monthly block-hour target below which crew are flagged under-utilized.
    pub min_monthly_flight_hours: f64,
    /// Monthly duty-hour target below which crew are flagged under-utilized.
    pub min_monthly_duty_hours: f64,
    /// Maximum bids one crew member may hold in a bid period.
    pub max_bids_per_crew: usize,
}

impl Default for RegulatoryLimits {
    fn default() -> Self {
        Self {
            max_flight_hours_per_28_days: 100.0,
            max_flight_hours_per_month: 100.0,
            max_flight_hours_per_year: 1000.0,
            max_duty_hours_per_day: 13.0,
            max_duty_hours_single_sector: 13.0,
            max_duty_hours_multi_sector: 11.0,
            min_rest_hours: 12.0,
            extended_rest_hours: 14.0,
            night_duty_rest_supplement_hours: 2.0,
            long_duty_threshold_hours: 10.0,
            min_connection_minutes: 45,
            max_legs_per_pairing: 6,
            min_layover_hours: 6.0,
            min_monthly_flight_hours: 50.0,
            min_monthly_duty_hours: 60.0,
            max_bids_per_crew: 10,
        }
    }
}
