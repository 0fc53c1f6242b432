use serde::Serialize;
use std::fmt;

use crate::analytics::basic::rate_percentage;
use crate::analytics::extract::first_putts;
use crate::model::Round;

/// Coarse three-band split of putt distance: short under 2 m, medium
/// under 5 m, long from 5 m up. Upper edges are exclusive, so 2.0 m is
/// already medium and 5.0 m already long.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DistanceBand {
    Short,
    Medium,
    Long,
}

impl DistanceBand {
    pub const ALL: [DistanceBand; 3] = [
        DistanceBand::Short,
        DistanceBand::Medium,
        DistanceBand::Long,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DistanceBand::Short => "Short (under 2m)",
            DistanceBand::Medium => "Medium (2-5m)",
            DistanceBand::Long => "Long (5m and up)",
        }
    }
}

impl fmt::Display for DistanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[must_use]
pub fn distance_band(meters: f64) -> DistanceBand {
    if meters < 2.0 {
        DistanceBand::Short
    } else if meters < 5.0 {
        DistanceBand::Medium
    } else {
        DistanceBand::Long
    }
}

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct BandStats {
    pub count: usize,
    pub success_rate: f64,
}

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct DistanceBandBreakdown {
    pub short: BandStats,
    pub medium: BandStats,
    pub long: BandStats,
}

/// Coarse first-putt breakdown over the three bands.
#[must_use]
pub fn distance_band_breakdown(rounds: &[Round]) -> DistanceBandBreakdown {
    let mut counts = [0usize; 3];
    let mut cup_ins = [0usize; 3];

    for putt in first_putts(rounds) {
        let idx = distance_band(putt.distance_meters) as usize;
        counts[idx] += 1;
        if putt.cup_in {
            cup_ins[idx] += 1;
        }
    }

    let stats = |idx: usize| BandStats {
        count: counts[idx],
        success_rate: rate_percentage(cup_ins[idx], counts[idx]),
    };

    DistanceBandBreakdown {
        short: stats(0),
        medium: stats(1),
        long: stats(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_exclusive() {
        assert_eq!(distance_band(0.0), DistanceBand::Short);
        assert_eq!(distance_band(1.99), DistanceBand::Short);
        assert_eq!(distance_band(2.0), DistanceBand::Medium);
        assert_eq!(distance_band(4.99), DistanceBand::Medium);
        assert_eq!(distance_band(5.0), DistanceBand::Long);
        assert_eq!(distance_band(40.0), DistanceBand::Long);
    }
}
