use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk classification for a species or a whole location.
///
/// Backends have used several spellings over time ("Red"/"High",
/// "yellow"/"medium", ...); `classify` folds them all into these four
/// variants. Anything unrecognized is `Unknown` rather than an error.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Zone {
    Red,
    Yellow,
    Green,
    Unknown,
}

impl Zone {
    /// Classify a raw backend zone string.
    pub fn classify(raw: &str) -> Zone {
        match raw.trim().to_lowercase().as_str() {
            "red" | "high" => Zone::Red,
            "yellow" | "medium" => Zone::Yellow,
            "green" | "low" => Zone::Green,
            _ => Zone::Unknown,
        }
    }

    /// Worst-case aggregation over per-species zones.
    ///
    /// Priority-ordered any-match: a single Red species makes the whole
    /// location Red no matter how many Green species are present. An empty
    /// iterator yields `Unknown`.
    pub fn overall<I>(zones: I) -> Zone
    where
        I: IntoIterator<Item = Zone>,
    {
        let mut saw_yellow = false;
        let mut saw_green = false;
        for zone in zones {
            match zone {
                Zone::Red => return Zone::Red,
                Zone::Yellow => saw_yellow = true,
                Zone::Green => saw_green = true,
                Zone::Unknown => {}
            }
        }
        if saw_yellow {
            Zone::Yellow
        } else if saw_green {
            Zone::Green
        } else {
            Zone::Unknown
        }
    }

    /// Display label, matching the backend's canonical capitalization.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Red => "Red",
            Zone::Yellow => "Yellow",
            Zone::Green => "Green",
            Zone::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Zone;

    #[test]
    fn test_classify_canonical_and_synonym_spellings() {
        assert_eq!(Zone::classify("Red"), Zone::Red);
        assert_eq!(Zone::classify("HIGH"), Zone::Red);
        assert_eq!(Zone::classify("yellow"), Zone::Yellow);
        assert_eq!(Zone::classify("Medium"), Zone::Yellow);
        assert_eq!(Zone::classify("green"), Zone::Green);
        assert_eq!(Zone::classify(" low "), Zone::Green);
        assert_eq!(Zone::classify("amber"), Zone::Unknown);
        assert_eq!(Zone::classify(""), Zone::Unknown);
    }

    #[test]
    fn test_overall_priority() {
        assert_eq!(
            Zone::overall([Zone::Green, Zone::Red, Zone::Yellow]),
            Zone::Red
        );
        assert_eq!(Zone::overall([Zone::Green, Zone::Yellow]), Zone::Yellow);
        assert_eq!(Zone::overall([Zone::Green]), Zone::Green);
        assert_eq!(Zone::overall([]), Zone::Unknown);
        assert_eq!(Zone::overall([Zone::Unknown, Zone::Green]), Zone::Green);
    }

    #[test]
    fn test_overall_is_order_independent() {
        let forward = [Zone::Green, Zone::Yellow, Zone::Red];
        let backward = [Zone::Red, Zone::Yellow, Zone::Green];
        assert_eq!(Zone::overall(forward), Zone::overall(backward));
    }

    #[test]
    fn test_overall_single_red_dominates() {
        let zones = vec![Zone::Green; 50].into_iter().chain([Zone::Red]);
        assert_eq!(Zone::overall(zones), Zone::Red);
    }
}
