//! Salary band benchmarks and expected-salary comparison

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Benchmark USD bands per role: (role, low, mid, high).
pub const SALARY_BENCHMARKS: &[(&str, u32, u32, u32)] = &[
    ("data analyst", 65_000, 85_000, 110_000),
    ("data scientist", 100_000, 135_000, 175_000),
    ("ml engineer", 115_000, 150_000, 195_000),
    ("software engineer", 95_000, 130_000, 170_000),
    ("devops engineer", 100_000, 130_000, 165_000),
    ("cloud engineer", 100_000, 132_000, 170_000),
    ("product manager", 100_000, 135_000, 175_000),
    ("it project manager", 85_000, 110_000, 140_000),
    ("security engineer", 105_000, 138_000, 180_000),
    ("solutions architect", 120_000, 155_000, 200_000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocationTier {
    Remote,
    LowCost,
    #[default]
    Standard,
    HighCost,
}

impl LocationTier {
    /// Parse a tier name. Unrecognised names fall back to `Standard`.
    pub fn parse(tier: &str) -> Self {
        match tier.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "remote" => LocationTier::Remote,
            "low-cost" | "low" => LocationTier::LowCost,
            "standard" | "" => LocationTier::Standard,
            "high-cost" | "high" => LocationTier::HighCost,
            other => {
                warn!("Unknown location tier '{}', using standard", other);
                LocationTier::Standard
            }
        }
    }

    /// Multiplier in whole percent, so scaling stays in integer arithmetic.
    pub fn multiplier_percent(&self) -> u64 {
        match self {
            LocationTier::Remote => 100,
            LocationTier::LowCost => 90,
            LocationTier::Standard => 100,
            LocationTier::HighCost => 115,
        }
    }
}

impl fmt::Display for LocationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationTier::Remote => write!(f, "remote"),
            LocationTier::LowCost => write!(f, "low-cost"),
            LocationTier::Standard => write!(f, "standard"),
            LocationTier::HighCost => write!(f, "high-cost"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub role: String,
    pub location: LocationTier,
    pub low: u32,
    pub mid: u32,
    pub high: u32,
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (mid {})",
            format_usd(i64::from(self.low)),
            format_usd(i64::from(self.high)),
            format_usd(i64::from(self.mid))
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryStatus {
    BelowMarket,
    WithinMarket,
    AboveMarket,
}

impl fmt::Display for SalaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalaryStatus::BelowMarket => write!(f, "Below market"),
            SalaryStatus::WithinMarket => write!(f, "Within market"),
            SalaryStatus::AboveMarket => write!(f, "Above market"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryVerdict {
    pub status: SalaryStatus,
    pub expected: i64,
    pub note: String,
}

/// Unscaled benchmark for a role, if the role is in the table.
pub fn benchmark_for(role: &str) -> Option<(u32, u32, u32)> {
    let role = role.trim().to_lowercase();
    SALARY_BENCHMARKS
        .iter()
        .find(|(name, ..)| *name == role)
        .map(|&(_, low, mid, high)| (low, mid, high))
}

/// Location-adjusted band for a role, or `None` when no benchmark exists.
pub fn estimate_salary_band(role: &str, location_tier: &str) -> Option<SalaryBand> {
    let Some((low, mid, high)) = benchmark_for(role) else {
        info!("No salary benchmark for role '{}'", role.trim());
        return None;
    };

    let location = LocationTier::parse(location_tier);
    let scale = |value: u32| -> u32 {
        let scaled = u64::from(value) * location.multiplier_percent() / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    };

    Some(SalaryBand {
        role: role.trim().to_lowercase(),
        location,
        low: scale(low),
        mid: scale(mid),
        high: scale(high),
    })
}

/// Place an expected salary relative to a band.
pub fn compare_salary(expected: i64, band: &SalaryBand) -> SalaryVerdict {
    let low = i64::from(band.low);
    let high = i64::from(band.high);
    let range = format!("{} - {}", format_usd(low), format_usd(high));
    let ask = format_usd(expected);

    let (status, note) = if expected < low {
        (
            SalaryStatus::BelowMarket,
            format!(
                "Your expected salary of {} is below the market range of {}. You may be underpricing yourself; consider anchoring nearer the midpoint of {}.",
                ask,
                range,
                format_usd(i64::from(band.mid))
            ),
        )
    } else if expected > high {
        (
            SalaryStatus::AboveMarket,
            format!(
                "Your expected salary of {} is above the market range of {}. Be ready to justify it with niche skills or scope.",
                ask, range
            ),
        )
    } else {
        (
            SalaryStatus::WithinMarket,
            format!(
                "Your expected salary of {} falls within the market range of {}.",
                ask, range
            ),
        )
    };

    SalaryVerdict {
        status,
        expected,
        note,
    }
}

/// `$1,234,567` style formatting.
pub fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
