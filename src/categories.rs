use serde::Serialize;

/// Sentinel duration written by the upstream fetcher when no trip was found.
pub const NO_DATA_DURATION: f64 = -1.0;

const DEFAULT_COLOR: &str = "#000000";

pub struct DistanceCategory {
    pub threshold_minutes: i32,
    pub description: &'static str,
    pub color: &'static str,
}

/// Ordered ascending by threshold. The first entry is the "no data" bucket,
/// reached through the sentinel check rather than numeric comparison.
pub const DISTANCE_CATEGORIES: &[DistanceCategory] = &[
    DistanceCategory {
        threshold_minutes: 0,
        description: "No data",
        color: "#d2d2d2",
    },
    DistanceCategory {
        threshold_minutes: 10,
        description: "<= 10 min",
        color: "#2ecc71",
    },
    DistanceCategory {
        threshold_minutes: 15,
        description: "<= 15 min",
        color: "#16a085",
    },
    DistanceCategory {
        threshold_minutes: 20,
        description: "<= 20 min",
        color: "#ffcc00",
    },
    DistanceCategory {
        threshold_minutes: 30,
        description: "<= 30 min",
        color: "#f39c12",
    },
    DistanceCategory {
        threshold_minutes: 40,
        description: "<= 40 min",
        color: "#e74c3c",
    },
    DistanceCategory {
        threshold_minutes: 99,
        description: "<= 99 min",
        color: "#2c3e50",
    },
];

/// Color for a travel duration in minutes. Negative durations mean no data
/// and always land in the first bucket. Durations past the last threshold
/// fall back to black.
pub fn color_for_duration(minutes: f64) -> &'static str {
    if minutes < 0.0 {
        return DISTANCE_CATEGORIES[0].color;
    }
    for category in DISTANCE_CATEGORIES {
        if minutes <= f64::from(category.threshold_minutes) {
            return category.color;
        }
    }
    DEFAULT_COLOR
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub color: &'static str,
    pub description: &'static str,
}

pub fn legend() -> Vec<LegendEntry> {
    DISTANCE_CATEGORIES
        .iter()
        .map(|category| LegendEntry {
            color: category.color,
            description: category.description,
        })
        .collect()
}
