use serde::{Deserialize, Serialize};

/// A named outcome with its selection probability.
///
/// Identity is the name, scoped to the owning group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub name: String,
    pub probability: f64,
}

impl Variation {
    pub fn new(name: impl Into<String>, probability: f64) -> Self {
        Self {
            name: name.into(),
            probability,
        }
    }

    /// Probability as a percentage with two decimals, e.g. `30.00%`.
    pub fn percent_label(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}

/// A named, ordered set of variations.
///
/// Insertion order drives display and deletion by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variations: Vec::new(),
        }
    }

    pub fn with_variations(name: impl Into<String>, variations: Vec<Variation>) -> Self {
        Self {
            name: name.into(),
            variations,
        }
    }

    pub fn variation(&self, name: &str) -> Option<&Variation> {
        self.variations.iter().find(|variation| variation.name == name)
    }

    pub fn variation_position(&self, name: &str) -> Option<usize> {
        self.variations
            .iter()
            .position(|variation| variation.name == name)
    }

    pub fn contains_variation(&self, name: &str) -> bool {
        self.variation_position(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_label_uses_two_decimals() {
        assert_eq!(Variation::new("Green", 0.3).percent_label(), "30.00%");
        assert_eq!(Variation::new("Realism", 0.45).percent_label(), "45.00%");
        assert_eq!(Variation::new("All", 1.0).percent_label(), "100.00%");
    }

    #[test]
    fn variation_lookup_is_by_name() {
        let group = Group::with_variations(
            "Color",
            vec![Variation::new("Green", 0.3), Variation::new("Red", 0.4)],
        );
        assert_eq!(group.variation_position("Red"), Some(1));
        assert_eq!(group.variation("Green").map(|v| v.probability), Some(0.3));
        assert!(!group.contains_variation("Black"));
    }

    #[test]
    fn group_deserializes_without_variations() {
        let group: Group = serde_json::from_str(r#"{"name":"Mood"}"#).expect("deserialize group");
        assert_eq!(group, Group::new("Mood"));
    }
}
