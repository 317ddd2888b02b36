//! Deletions requested directly from the group list.

use std::collections::BTreeSet;

use phrase_model::{Group, find_group};
use tracing::{debug, warn};

/// Remove the group with `name` together with its variations.
///
/// Unknown names leave the collection unchanged.
pub fn delete_group(groups: &[Group], name: &str) -> Vec<Group> {
    let mut next = groups.to_vec();
    match find_group(groups, name) {
        Some(index) => {
            debug!(group = name, index, "deleting group");
            next.remove(index);
        }
        None => debug!(group = name, "no group to delete"),
    }
    next
}

/// Remove the variations at `positions` from the named group in one step.
///
/// Positions refer to the sequence as it is before the deletion. Positions
/// past the end and unknown groups are ignored.
pub fn delete_variation(
    groups: &[Group],
    group_name: &str,
    positions: &BTreeSet<usize>,
) -> Vec<Group> {
    let mut next = groups.to_vec();
    let Some(index) = find_group(groups, group_name) else {
        debug!(group = group_name, "no group to delete variations from");
        return next;
    };
    let variations = &mut next[index].variations;
    let len = variations.len();
    if let Some(last) = positions.last().filter(|&&last| last >= len) {
        warn!(
            group = group_name,
            position = last,
            len,
            "ignoring positions past the end"
        );
    }
    let mut position = 0;
    variations.retain(|_| {
        let keep = !positions.contains(&position);
        position += 1;
        keep
    });
    debug!(
        group = group_name,
        removed = len - variations.len(),
        "deleted variations"
    );
    next
}
