//! Closed enumerations used by case studies and their filters.
//!
//! Wire names follow the content API verbatim (`"B2B"`, `"User Experience"`,
//! `"1000+"`). Parsing via [`FromStr`] is lenient about case and separators so
//! the same values can be typed on the command line.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Lowercase and drop spaces, dashes, and underscores.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn unknown<T: fmt::Display>(kind: &'static str, value: &str, all: &[T]) -> CoreError {
    CoreError::UnknownVariant {
        kind,
        value: value.to_string(),
        expected: all
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

// ---------------------------------------------------------------------------
// Market
// ---------------------------------------------------------------------------

/// Market segment a case study targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Market {
    #[serde(rename = "B2B")]
    B2b,
    #[serde(rename = "B2C")]
    B2c,
    #[serde(rename = "B2B2C")]
    B2b2c,
}

impl Market {
    pub const ALL: [Self; 3] = [Self::B2b, Self::B2c, Self::B2b2c];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::B2b => "B2B",
            Self::B2c => "B2C",
            Self::B2b2c => "B2B2C",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|m| normalize(m.as_str()) == wanted)
            .ok_or_else(|| unknown("market", s, &Self::ALL))
    }
}

// ---------------------------------------------------------------------------
// Objective
// ---------------------------------------------------------------------------

/// Product objective a case study addresses. A case study carries one or more.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Objective {
    Acquisition,
    Activation,
    Retention,
    Engagement,
    Monetization,
    Growth,
    Conversion,
    Onboarding,
    Pricing,
    Expansion,
    Virality,
    #[serde(rename = "User Experience")]
    UserExperience,
    #[serde(rename = "Brand Awareness")]
    BrandAwareness,
    #[serde(rename = "Market Entry")]
    MarketEntry,
}

impl Objective {
    pub const ALL: [Self; 14] = [
        Self::Acquisition,
        Self::Activation,
        Self::Retention,
        Self::Engagement,
        Self::Monetization,
        Self::Growth,
        Self::Conversion,
        Self::Onboarding,
        Self::Pricing,
        Self::Expansion,
        Self::Virality,
        Self::UserExperience,
        Self::BrandAwareness,
        Self::MarketEntry,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acquisition => "Acquisition",
            Self::Activation => "Activation",
            Self::Retention => "Retention",
            Self::Engagement => "Engagement",
            Self::Monetization => "Monetization",
            Self::Growth => "Growth",
            Self::Conversion => "Conversion",
            Self::Onboarding => "Onboarding",
            Self::Pricing => "Pricing",
            Self::Expansion => "Expansion",
            Self::Virality => "Virality",
            Self::UserExperience => "User Experience",
            Self::BrandAwareness => "Brand Awareness",
            Self::MarketEntry => "Market Entry",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|o| normalize(o.as_str()) == wanted)
            .ok_or_else(|| unknown("objective", s, &Self::ALL))
    }
}

// ---------------------------------------------------------------------------
// LikesRange
// ---------------------------------------------------------------------------

/// Like-count bucket used by the case-study filter.
///
/// ```text
/// 0-100 | 101-500 | 501-1000 | 1000+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LikesRange {
    #[serde(rename = "0-100")]
    UpTo100,
    #[serde(rename = "101-500")]
    UpTo500,
    #[serde(rename = "501-1000")]
    UpTo1000,
    #[serde(rename = "1000+")]
    Over1000,
}

impl LikesRange {
    pub const ALL: [Self; 4] = [Self::UpTo100, Self::UpTo500, Self::UpTo1000, Self::Over1000];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpTo100 => "0-100",
            Self::UpTo500 => "101-500",
            Self::UpTo1000 => "501-1000",
            Self::Over1000 => "1000+",
        }
    }

    /// Whether `likes` falls into this bucket. Buckets are disjoint and cover
    /// every count.
    #[must_use]
    pub const fn contains(self, likes: u32) -> bool {
        match self {
            Self::UpTo100 => likes <= 100,
            Self::UpTo500 => likes > 100 && likes <= 500,
            Self::UpTo1000 => likes > 500 && likes <= 1000,
            Self::Over1000 => likes > 1000,
        }
    }
}

impl fmt::Display for LikesRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LikesRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == trimmed)
            .ok_or_else(|| unknown("likes range", s, &Self::ALL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn market_wire_names() {
        assert_eq!(serde_json::to_string(&Market::B2b2c).unwrap(), "\"B2B2C\"");
        let parsed: Market = serde_json::from_str("\"B2C\"").unwrap();
        assert_eq!(parsed, Market::B2c);
    }

    #[test]
    fn market_rejects_values_outside_closed_set() {
        assert!(serde_json::from_str::<Market>("\"D2C\"").is_err());
        assert!("D2C".parse::<Market>().is_err());
    }

    #[test]
    fn market_parse_is_case_insensitive() {
        assert_eq!("b2b".parse::<Market>().unwrap(), Market::B2b);
        assert_eq!("B2b2C".parse::<Market>().unwrap(), Market::B2b2c);
    }

    #[test]
    fn objective_has_fourteen_distinct_wire_names() {
        let names: std::collections::HashSet<_> =
            Objective::ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn objective_display_matches_serde() {
        for objective in Objective::ALL {
            let json = serde_json::to_string(&objective).unwrap();
            assert_eq!(json, format!("\"{objective}\""));
        }
    }

    #[test]
    fn objective_parse_accepts_cli_spellings() {
        assert_eq!(
            "user-experience".parse::<Objective>().unwrap(),
            Objective::UserExperience
        );
        assert_eq!(
            "brand_awareness".parse::<Objective>().unwrap(),
            Objective::BrandAwareness
        );
        assert_eq!("Growth".parse::<Objective>().unwrap(), Objective::Growth);
    }

    #[test]
    fn objective_parse_error_lists_expected_values() {
        let err = "synergy".parse::<Objective>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("synergy"));
        assert!(message.contains("Market Entry"));
    }

    #[test]
    fn likes_range_buckets_are_disjoint_and_total() {
        for likes in [0, 1, 100, 101, 500, 501, 1000, 1001, u32::MAX] {
            let hits = LikesRange::ALL
                .iter()
                .filter(|r| r.contains(likes))
                .count();
            assert_eq!(hits, 1, "likes={likes} should land in exactly one bucket");
        }
    }

    #[test]
    fn likes_range_boundaries() {
        assert!(LikesRange::UpTo100.contains(100));
        assert!(LikesRange::UpTo500.contains(101));
        assert!(LikesRange::UpTo1000.contains(1000));
        assert!(LikesRange::Over1000.contains(1001));
        assert!(!LikesRange::Over1000.contains(1000));
    }

    #[test]
    fn likes_range_parse_roundtrip() {
        for range in LikesRange::ALL {
            assert_eq!(range.as_str().parse::<LikesRange>().unwrap(), range);
        }
        assert!("100-200".parse::<LikesRange>().is_err());
    }
}
