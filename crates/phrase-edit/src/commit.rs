//! Validate-then-mutate commits for the group and variation forms.
//!
//! Every check runs against the borrowed collection before a new one is
//! built, so a failed commit has no observable effect.

use phrase_model::{EditIntent, Group, Variation, find_group};
use tracing::{debug, debug_span};

use crate::error::{EditError, Result};

/// Outcome of a successful commit: the next collection and the cleared intent.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub groups: Vec<Group>,
    pub intent: EditIntent,
}

impl Commit {
    fn finish(groups: Vec<Group>) -> Self {
        Self {
            groups,
            intent: EditIntent::Idle,
        }
    }
}

/// Commit the group form for an `AddGroup` or `EditGroup` intent.
///
/// Adding appends an empty group. Editing renames the captured group in
/// place and keeps its variations. Resubmitting a group's own name is
/// accepted.
pub fn commit_group(groups: &[Group], intent: &EditIntent, name: &str) -> Result<Commit> {
    let original = match intent {
        EditIntent::AddGroup => None,
        EditIntent::EditGroup { group } => Some(group),
        other => {
            return Err(EditError::IntentMismatch {
                intent: other.id(),
            });
        }
    };
    let span = debug_span!("commit_group", intent = %intent);
    let _guard = span.enter();

    let name = name.trim();
    if name.is_empty() {
        return Err(EditError::EmptyGroupName);
    }
    let editing = original.map(|group| group.name.as_str());
    if groups
        .iter()
        .any(|group| group.name == name && Some(group.name.as_str()) != editing)
    {
        return Err(EditError::DuplicateGroupName {
            name: name.to_string(),
        });
    }

    let mut next = groups.to_vec();
    match original {
        None => {
            debug!(group = name, "appending group");
            next.push(Group::new(name));
        }
        Some(original) => {
            let index = find_group(groups, &original.name).ok_or_else(|| {
                EditError::UnknownGroup {
                    name: original.name.clone(),
                }
            })?;
            debug!(from = %original.name, to = name, index, "renaming group");
            let variations = std::mem::take(&mut next[index].variations);
            next[index] = Group::with_variations(name, variations);
        }
    }
    Ok(Commit::finish(next))
}

/// Commit the variation form for an `AddVariation` or `EditVariation` intent.
///
/// The group field selects the target group. When editing, a variation that
/// is still found in its own group is replaced at its position; one whose
/// group field now names another group is removed from the captured group and
/// appended to the target.
pub fn commit_variation(
    groups: &[Group],
    intent: &EditIntent,
    group_name: &str,
    variation_name: &str,
    probability_text: &str,
) -> Result<Commit> {
    let original = match intent {
        EditIntent::AddVariation => None,
        EditIntent::EditVariation { group, variation } => Some((group, variation)),
        other => {
            return Err(EditError::IntentMismatch {
                intent: other.id(),
            });
        }
    };
    let span = debug_span!("commit_variation", intent = %intent);
    let _guard = span.enter();

    let group_name = group_name.trim();
    if group_name.is_empty() {
        return Err(EditError::EmptyGroupName);
    }
    let target = find_group(groups, group_name).ok_or_else(|| EditError::UnknownGroup {
        name: group_name.to_string(),
    })?;
    let variation_name = variation_name.trim();
    if variation_name.is_empty() {
        return Err(EditError::EmptyVariationName);
    }
    let probability = parse_probability(probability_text)?;

    // The variation being edited does not collide with itself.
    let editing = original
        .filter(|(group, _)| group.name == group_name)
        .map(|(_, variation)| variation.name.as_str());
    let taken = groups[target].variations.iter().any(|variation| {
        variation.name == variation_name && Some(variation.name.as_str()) != editing
    });
    if taken {
        return Err(EditError::DuplicateVariationName {
            group: group_name.to_string(),
            name: variation_name.to_string(),
        });
    }

    let submitted = Variation::new(variation_name, probability);
    let mut next = groups.to_vec();
    match original {
        None => {
            debug!(group = group_name, variation = variation_name, "appending variation");
            next[target].variations.push(submitted);
        }
        Some((group, variation)) => {
            let origin = find_group(groups, &group.name).ok_or_else(|| EditError::UnknownGroup {
                name: group.name.clone(),
            })?;
            let in_place = if origin == target {
                groups[target].variation_position(&variation.name)
            } else {
                None
            };
            match in_place {
                Some(position) => {
                    debug!(
                        group = group_name,
                        variation = %variation.name,
                        position,
                        "replacing variation in place"
                    );
                    next[target].variations[position] = submitted;
                }
                None => {
                    debug!(
                        from = %group.name,
                        to = group_name,
                        variation = %variation.name,
                        "moving variation"
                    );
                    next[origin]
                        .variations
                        .retain(|existing| existing.name != variation.name);
                    next[target].variations.push(submitted);
                }
            }
        }
    }
    Ok(Commit::finish(next))
}

/// Parse a probability typed by the user.
///
/// Accepts a decimal comma in place of the point and requires a value in
/// `[0, 1]`.
pub fn parse_probability(text: &str) -> Result<f64> {
    let normalized = text.trim().replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| EditError::NotANumber {
        text: text.to_string(),
    })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(EditError::ProbabilityOutOfRange { value });
    }
    Ok(value)
}
