//! Invariants over the ordered group collection.

use std::collections::HashSet;

use crate::error::{ModelError, Result};
use crate::group::Group;

/// Position of the group with the given name.
pub fn find_group(groups: &[Group], name: &str) -> Option<usize> {
    groups.iter().position(|group| group.name == name)
}

/// Verify that group names are distinct and non-empty, that variation names
/// are distinct and non-empty within each group, and that every probability
/// lies in `[0, 1]`.
pub fn check_invariants(groups: &[Group]) -> Result<()> {
    let mut group_names = HashSet::new();
    for group in groups {
        if group.name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        if !group_names.insert(group.name.as_str()) {
            return Err(ModelError::DuplicateGroup {
                name: group.name.clone(),
            });
        }
        let mut variation_names = HashSet::new();
        for variation in &group.variations {
            if variation.name.trim().is_empty() {
                return Err(ModelError::EmptyName);
            }
            if !variation_names.insert(variation.name.as_str()) {
                return Err(ModelError::DuplicateVariation {
                    group: group.name.clone(),
                    name: variation.name.clone(),
                });
            }
            if !(0.0..=1.0).contains(&variation.probability) {
                return Err(ModelError::ProbabilityOutOfRange {
                    group: group.name.clone(),
                    name: variation.name.clone(),
                    probability: variation.probability,
                });
            }
        }
    }
    Ok(())
}
