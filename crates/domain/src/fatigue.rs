// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew fatigue scoring.
//!
//! Maps a duty period plus rest and workload history to a 0-100 fatigue
//! score. The score is a deterministic weighted sum of five components,
//! each capped independently before summing:
//!
//! | component | weight |
//! |---|---|
//! | circadian (time of day of duty start) | 20 |
//! | time awake | 30 |
//! | workload (duty length) | 20 |
//! | cumulative (7-day duty hours) | 15 |
//! | sleep quality deficit | 15 |
//!
//! Scores are advisory: downstream alerting collaborators consume them,
//! nothing in this core acts on them.

use chrono::{NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Hours awake at which the time-awake component saturates.
const TIME_AWAKE_SATURATION_HOURS: f64 = 24.0;
/// Duty length at which the workload component saturates.
const WORKLOAD_SATURATION_HOURS: f64 = 16.0;
/// Seven-day duty total at which the cumulative component saturates.
const CUMULATIVE_SATURATION_HOURS: f64 = 60.0;
/// Reference sleep duration for full duration credit.
const REFERENCE_SLEEP_HOURS: f64 = 8.0;

/// A completed or planned sleep period preceding a duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepPeriod {
    /// When the sleep began.
    pub start: NaiveDateTime,
    /// When the sleep ended.
    pub end: NaiveDateTime,
}

impl SleepPeriod {
    /// Returns the sleep duration in hours.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let hours: f64 = (self.end - self.start).num_minutes() as f64 / 60.0;
        hours.max(0.0)
    }
}

/// The duty period being scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueDutyPeriod {
    /// Report time of the duty.
    pub start: NaiveDateTime,
    /// Length of the duty period in hours.
    pub duty_hours: f64,
    /// Whether the duty operates at night.
    pub is_night_duty: bool,
    /// Number of timezone boundaries crossed during the duty.
    pub timezone_crossings: u32,
}

/// Rest and workload history feeding the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestHistory {
    /// Hours since the crew member's last rest ended.
    pub time_since_last_rest_hours: f64,
    /// Duty hours accumulated over the last 7 days.
    pub last_7_days_duty_hours: f64,
    /// Consecutive calendar days with duty.
    pub consecutive_duty_days: u32,
    /// The most recent recorded sleep period, if any.
    pub last_sleep: Option<SleepPeriod>,
}

/// Alertness classification derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertnessLevel {
    /// Score below 30.
    High,
    /// Score 30-49.
    Moderate,
    /// Score 50-69.
    Low,
    /// Score 70 and above.
    Critical,
}

impl AlertnessLevel {
    /// Returns the string representation of this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::Critical => "critical",
        }
    }
}

/// Operational risk classification derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score below 30.
    Low,
    /// Score 30-49.
    Medium,
    /// Score 50-69.
    High,
    /// Score 70 and above.
    Critical,
}

impl RiskLevel {
    /// Returns the string representation of this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Fatigue assessment for one duty period. Ephemeral output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueScore {
    /// The fatigue score, 0 (fully alert) to 100.
    pub score: f64,
    /// Alertness band for the score.
    pub alertness: AlertnessLevel,
    /// Risk band for the score.
    pub risk: RiskLevel,
    /// Cumulative recommendations and advisories.
    pub recommendations: Vec<String>,
    /// When the assessment was produced (UTC).
    pub calculated_at: NaiveDateTime,
}

/// Circadian pressure by duty-start hour.
///
/// Peaks at 1.0 through the window of circadian low (02:00-06:00), with
/// stepwise shoulders down to 0.2 at mid-day.
const fn circadian_factor(hour: u32) -> f64 {
    match hour {
        2..=5 => 1.0,
        0 | 1 | 6 | 7 => 0.8,
        22 | 23 => 0.6,
        8 | 9 | 18..=21 => 0.4,
        _ => 0.2,
    }
}

/// Quality credit for when a sleep period began.
///
/// Sleep anchored to the biological night scores highest; daytime sleep
/// earns the lowest credit.
const fn time_of_night_quality(start_hour: u32) -> f64 {
    match start_hour {
        21..=23 | 0 | 1 => 1.0,
        2..=4 => 0.7,
        _ => 0.4,
    }
}

/// Sleep quality in [0, 1]: 0 with no recorded sleep, else a blend of
/// duration against the 8-hour reference (70%) and time-of-night quality
/// (30%).
fn sleep_quality(last_sleep: Option<&SleepPeriod>) -> f64 {
    last_sleep.map_or(0.0, |sleep| {
        let duration_quality: f64 = (sleep.duration_hours() / REFERENCE_SLEEP_HOURS).min(1.0);
        let night_quality: f64 = time_of_night_quality(sleep.start.hour());
        0.7 * duration_quality + 0.3 * night_quality
    })
}

/// Scores crew alertness for a duty period.
///
/// Deterministic in its inputs and monotonically non-decreasing in
/// `time_since_last_rest_hours`. Band thresholds: below 30 high
/// alertness / low risk, below 50 moderate / medium, below 70 low / high,
/// 70 and above critical / critical. Recommendations accumulate as bands
/// escalate; night duty, more than 3 timezone crossings, and more than 5
/// consecutive duty days append advisories independently of the score.
#[must_use]
pub fn calculate_fatigue_score(duty: &FatigueDutyPeriod, history: &RestHistory) -> FatigueScore {
    let circadian: f64 = circadian_factor(duty.start.hour()) * 20.0;
    let time_awake: f64 =
        (history.time_since_last_rest_hours / TIME_AWAKE_SATURATION_HOURS).min(1.0) * 30.0;
    let workload: f64 = (duty.duty_hours / WORKLOAD_SATURATION_HOURS).min(1.0) * 20.0;
    let cumulative: f64 =
        (history.last_7_days_duty_hours / CUMULATIVE_SATURATION_HOURS).min(1.0) * 15.0;
    let sleep_deficit: f64 = (1.0 - sleep_quality(history.last_sleep.as_ref())) * 15.0;

    let score: f64 = (circadian + time_awake + workload + cumulative + sleep_deficit)
        .clamp(0.0, 100.0);

    let (alertness, risk) = if score < 30.0 {
        (AlertnessLevel::High, RiskLevel::Low)
    } else if score < 50.0 {
        (AlertnessLevel::Moderate, RiskLevel::Medium)
    } else if score < 70.0 {
        (AlertnessLevel::Low, RiskLevel::High)
    } else {
        (AlertnessLevel::Critical, RiskLevel::Critical)
    };

    let mut recommendations: Vec<String> = Vec::new();
    if score >= 30.0 {
        recommendations.push(String::from("Monitor fatigue levels during duty"));
    }
    if score >= 50.0 {
        recommendations.push(String::from("Consider additional rest before duty"));
    }
    if score >= 70.0 {
        recommendations.push(String::from(
            "Mandatory rest required - assign replacement crew",
        ));
    }

    if duty.is_night_duty {
        recommendations.push(String::from(
            "Night duty: strategic napping recommended before report",
        ));
    }
    if duty.timezone_crossings > 3 {
        recommendations.push(format!(
            "{} timezone crossings: allow extra acclimatization time",
            duty.timezone_crossings
        ));
    }
    if history.consecutive_duty_days > 5 {
        recommendations.push(format!(
            "{} consecutive duty days: schedule a rest day",
            history.consecutive_duty_days
        ));
    }

    FatigueScore {
        score,
        alertness,
        risk,
        recommendations,
        calculated_at: Utc::now().naive_utc(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn duty_at(hour: u32, duty_hours: f64) -> FatigueDutyPeriod {
        FatigueDutyPeriod {
            start: dt(10, hour),
            duty_hours,
            is_night_duty: false,
            timezone_crossings: 0,
        }
    }

    fn rested() -> RestHistory {
        RestHistory {
            time_since_last_rest_hours: 1.0,
            last_7_days_duty_hours: 0.0,
            consecutive_duty_days: 0,
            last_sleep: Some(SleepPeriod {
                start: dt(9, 22),
                end: dt(10, 6),
            }),
        }
    }

    #[test]
    fn test_wocl_start_no_sleep_scores_critical() {
        // Circadian 1.0 * 20, fully awake 24 h -> 30, duty 8 h -> 10,
        // no 7-day load -> 0, no recorded sleep -> 15. Total 75.
        let duty: FatigueDutyPeriod = duty_at(3, 8.0);
        let history: RestHistory = RestHistory {
            time_since_last_rest_hours: 24.0,
            last_7_days_duty_hours: 0.0,
            consecutive_duty_days: 0,
            last_sleep: None,
        };

        let result: FatigueScore = calculate_fatigue_score(&duty, &history);

        assert_eq!(result.score, 75.0);
        assert_eq!(result.alertness, AlertnessLevel::Critical);
        assert_eq!(result.risk, RiskLevel::Critical);
        assert!(
            result
                .recommendations
                .iter()
                .any(|r| r.contains("Mandatory rest"))
        );
    }

    #[test]
    fn test_rested_midday_duty_scores_low() {
        let duty: FatigueDutyPeriod = duty_at(12, 6.0);
        let result: FatigueScore = calculate_fatigue_score(&duty, &rested());

        assert!(result.score < 30.0);
        assert_eq!(result.alertness, AlertnessLevel::High);
        assert_eq!(result.risk, RiskLevel::Low);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_monotone_in_time_since_rest() {
        let duty: FatigueDutyPeriod = duty_at(9, 8.0);
        let mut previous: f64 = -1.0;

        for hours in [0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0, 30.0] {
            let history: RestHistory = RestHistory {
                time_since_last_rest_hours: hours,
                last_7_days_duty_hours: 20.0,
                consecutive_duty_days: 2,
                last_sleep: None,
            };
            let result: FatigueScore = calculate_fatigue_score(&duty, &history);
            assert!(
                result.score >= previous,
                "score decreased as time awake grew: {} < {previous}",
                result.score
            );
            previous = result.score;
        }
    }

    #[test]
    fn test_components_cap_independently() {
        // Absurd inputs must not push any component past its weight.
        let duty: FatigueDutyPeriod = duty_at(3, 100.0);
        let history: RestHistory = RestHistory {
            time_since_last_rest_hours: 500.0,
            last_7_days_duty_hours: 500.0,
            consecutive_duty_days: 30,
            last_sleep: None,
        };

        let result: FatigueScore = calculate_fatigue_score(&duty, &history);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_recommendations_accumulate_across_bands() {
        let duty: FatigueDutyPeriod = duty_at(3, 14.0);
        let history: RestHistory = RestHistory {
            time_since_last_rest_hours: 24.0,
            last_7_days_duty_hours: 60.0,
            consecutive_duty_days: 0,
            last_sleep: None,
        };

        let result: FatigueScore = calculate_fatigue_score(&duty, &history);
        assert!(result.score >= 70.0);
        // All three band recommendations present at critical.
        assert!(result.recommendations.len() >= 3);
    }

    #[test]
    fn test_night_duty_advisory_is_band_independent() {
        let mut duty: FatigueDutyPeriod = duty_at(12, 4.0);
        duty.is_night_duty = true;

        let result: FatigueScore = calculate_fatigue_score(&duty, &rested());
        assert!(result.score < 30.0);
        assert!(
            result
                .recommendations
                .iter()
                .any(|r| r.contains("Night duty"))
        );
    }

    #[test]
    fn test_timezone_and_consecutive_day_advisories() {
        let mut duty: FatigueDutyPeriod = duty_at(12, 4.0);
        duty.timezone_crossings = 5;

        let mut history: RestHistory = rested();
        history.consecutive_duty_days = 7;

        let result: FatigueScore = calculate_fatigue_score(&duty, &history);
        assert!(
            result
                .recommendations
                .iter()
                .any(|r| r.contains("timezone crossings"))
        );
        assert!(
            result
                .recommendations
                .iter()
                .any(|r| r.contains("consecutive duty days"))
        );
    }

    #[test]
    fn test_sleep_quality_blend() {
        // Full 8 h anchored at 22:00 -> quality 1.0 -> no sleep deficit.
        let full_night: RestHistory = RestHistory {
            time_since_last_rest_hours: 0.0,
            last_7_days_duty_hours: 0.0,
            consecutive_duty_days: 0,
            last_sleep: Some(SleepPeriod {
                start: dt(9, 22),
                end: dt(10, 6),
            }),
        };
        // Same duration starting mid-morning earns only partial credit.
        let day_sleep: RestHistory = RestHistory {
            last_sleep: Some(SleepPeriod {
                start: dt(9, 9),
                end: dt(9, 17),
            }),
            ..full_night.clone()
        };

        let duty: FatigueDutyPeriod = duty_at(12, 4.0);
        let night_score: FatigueScore = calculate_fatigue_score(&duty, &full_night);
        let day_score: FatigueScore = calculate_fatigue_score(&duty, &day_sleep);

        assert!(day_score.score > night_score.score);
    }

    #[test]
    fn test_no_sleep_is_worst_sleep_component() {
        let duty: FatigueDutyPeriod = duty_at(12, 4.0);
        let no_sleep: RestHistory = RestHistory {
            time_since_last_rest_hours: 0.0,
            last_7_days_duty_hours: 0.0,
            consecutive_duty_days: 0,
            last_sleep: None,
        };
        let short_sleep: RestHistory = RestHistory {
            last_sleep: Some(SleepPeriod {
                start: dt(10, 2),
                end: dt(10, 5),
            }),
            ..no_sleep.clone()
        };

        let none: FatigueScore = calculate_fatigue_score(&duty, &no_sleep);
        let some: FatigueScore = calculate_fatigue_score(&duty, &short_sleep);
        assert!(none.score > some.score);
    }
}
