//! What the shared editor form is currently doing.
//!
//! The intent is a single value, so at most one edit form can be open at a
//! time. Edit cases carry a snapshot of the entity taken when the edit
//! started; commits use it to find the original entity even after the form
//! text has diverged from it.

use std::fmt;

use crate::group::{Group, Variation};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditIntent {
    /// No form is open.
    #[default]
    Idle,
    AddGroup,
    AddVariation,
    EditGroup {
        group: Group,
    },
    EditVariation {
        group: Group,
        variation: Variation,
    },
}

impl EditIntent {
    pub fn edit_group(group: &Group) -> Self {
        Self::EditGroup {
            group: group.clone(),
        }
    }

    pub fn edit_variation(group: &Group, variation: &Variation) -> Self {
        Self::EditVariation {
            group: group.clone(),
            variation: variation.clone(),
        }
    }

    /// Human-readable description of the action in progress.
    pub fn title(&self) -> String {
        match self {
            EditIntent::Idle => String::new(),
            EditIntent::AddGroup => "Add new group".to_string(),
            EditIntent::AddVariation => "Add new variation".to_string(),
            EditIntent::EditGroup { group } => format!("Edit '{}' group", group.name),
            EditIntent::EditVariation { group, variation } => format!(
                "Edit '{}' variation in '{}' group",
                variation.name, group.name
            ),
        }
    }

    /// Stable key for the form presented for this intent.
    pub fn id(&self) -> String {
        match self {
            EditIntent::Idle => "disable".to_string(),
            EditIntent::AddGroup => "addGroup".to_string(),
            EditIntent::AddVariation => "addVariation".to_string(),
            EditIntent::EditGroup { group } => format!("editGroup-{}", group.name),
            EditIntent::EditVariation { group, variation } => {
                format!("editVariation-{}-{}", group.name, variation.name)
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditIntent::Idle)
    }

    pub fn is_group_intent(&self) -> bool {
        matches!(self, EditIntent::AddGroup | EditIntent::EditGroup { .. })
    }

    /// True when the form needs the variation name and probability fields.
    pub fn shows_variation_fields(&self) -> bool {
        matches!(
            self,
            EditIntent::AddVariation | EditIntent::EditVariation { .. }
        )
    }
}

impl fmt::Display for EditIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> Group {
        Group::with_variations("Color", vec![Variation::new("Green", 0.3)])
    }

    #[test]
    fn default_intent_is_idle() {
        assert!(EditIntent::default().is_idle());
        assert_eq!(EditIntent::default().title(), "");
    }

    #[test]
    fn titles_name_the_captured_entities() {
        let group = color();
        let variation = group.variations[0].clone();
        assert_eq!(EditIntent::AddGroup.title(), "Add new group");
        assert_eq!(EditIntent::AddVariation.title(), "Add new variation");
        assert_eq!(EditIntent::edit_group(&group).title(), "Edit 'Color' group");
        assert_eq!(
            EditIntent::edit_variation(&group, &variation).title(),
            "Edit 'Green' variation in 'Color' group"
        );
    }

    #[test]
    fn ids_are_keyed_by_snapshot_names() {
        let group = color();
        let variation = group.variations[0].clone();
        assert_eq!(EditIntent::Idle.id(), "disable");
        assert_eq!(EditIntent::edit_group(&group).id(), "editGroup-Color");
        assert_eq!(
            EditIntent::edit_variation(&group, &variation).to_string(),
            "editVariation-Color-Green"
        );
    }

    #[test]
    fn equality_compares_snapshots() {
        let group = color();
        let renamed = Group::new("Style");
        assert_eq!(EditIntent::AddGroup, EditIntent::AddGroup);
        assert_ne!(EditIntent::AddGroup, EditIntent::AddVariation);
        assert_eq!(EditIntent::edit_group(&group), EditIntent::edit_group(&group));
        assert_ne!(EditIntent::edit_group(&group), EditIntent::edit_group(&renamed));

        let green = Variation::new("Green", 0.3);
        let heavier = Variation::new("Green", 0.5);
        assert_ne!(
            EditIntent::edit_variation(&group, &green),
            EditIntent::edit_variation(&group, &heavier)
        );
    }

    #[test]
    fn only_variation_intents_show_variation_fields() {
        let group = color();
        assert!(EditIntent::AddVariation.shows_variation_fields());
        assert!(EditIntent::edit_variation(&group, &group.variations[0]).shows_variation_fields());
        assert!(!EditIntent::AddGroup.shows_variation_fields());
        assert!(!EditIntent::edit_group(&group).shows_variation_fields());
        assert!(EditIntent::edit_group(&group).is_group_intent());
        assert!(!EditIntent::Idle.is_group_intent());
    }
}
