//! Editor state a host keeps between user actions.

use std::collections::BTreeSet;

use phrase_model::{EditIntent, Group};
use tracing::{info, warn};

use crate::commit::{Commit, commit_group, commit_variation};
use crate::error::{EditError, Result};
use crate::form::EditForm;
use crate::ops;

/// The group collection, the open form and the error waiting to be shown.
///
/// The session is the only writer of its collection. Intents leave `Idle`
/// through [`start_intent`](Self::start_intent) and return to it either on a
/// successful [`submit`](Self::submit) or when the host dismisses the form.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    groups: Vec<Group>,
    intent: EditIntent,
    form: EditForm,
    error: Option<EditError>,
}

impl EditorSession {
    pub fn new(groups: Vec<Group>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }

    pub fn intent(&self) -> &EditIntent {
        &self.intent
    }

    pub fn form(&self) -> &EditForm {
        &self.form
    }

    /// Field access for the host while the form is open.
    pub fn form_mut(&mut self) -> &mut EditForm {
        &mut self.form
    }

    /// Error from the last rejected submit, if not yet taken.
    pub fn error(&self) -> Option<&EditError> {
        self.error.as_ref()
    }

    /// Hand the pending error to the host for display and clear it.
    pub fn take_error(&mut self) -> Option<EditError> {
        self.error.take()
    }

    /// Open the form for `intent`, pre-filling fields from its snapshot.
    ///
    /// Starting `Idle` dismisses the form. Any other intent requires the
    /// editor to be idle.
    pub fn start_intent(&mut self, intent: EditIntent) -> Result<()> {
        if intent.is_idle() {
            self.clear_intent();
            return Ok(());
        }
        self.ensure_idle()?;
        info!(intent = %intent, "editing started");
        self.form = EditForm::for_intent(&intent);
        self.intent = intent;
        self.error = None;
        Ok(())
    }

    /// Dismiss the form without committing.
    pub fn clear_intent(&mut self) {
        if !self.intent.is_idle() {
            info!(intent = %self.intent, "editing dismissed");
        }
        self.intent = EditIntent::Idle;
        self.form = EditForm::default();
        self.error = None;
    }

    /// Confirm the open form.
    ///
    /// Dispatches to the group or variation commit depending on the intent;
    /// does nothing while idle. On failure the error is also kept for
    /// [`take_error`](Self::take_error) and the form stays open unchanged.
    pub fn submit(&mut self) -> Result<()> {
        let outcome = match &self.intent {
            EditIntent::Idle => return Ok(()),
            EditIntent::AddGroup | EditIntent::EditGroup { .. } => {
                commit_group(&self.groups, &self.intent, &self.form.group_name)
            }
            EditIntent::AddVariation | EditIntent::EditVariation { .. } => commit_variation(
                &self.groups,
                &self.intent,
                &self.form.group_name,
                &self.form.variation_name,
                &self.form.probability,
            ),
        };
        match outcome {
            Ok(Commit { groups, intent }) => {
                info!(intent = %self.intent, "editing committed");
                self.groups = groups;
                self.intent = intent;
                self.form = EditForm::default();
                self.error = None;
                Ok(())
            }
            Err(error) => {
                warn!(intent = %self.intent, %error, "form rejected");
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Delete a group from the list. Refused while a form is open.
    pub fn delete_group(&mut self, name: &str) -> Result<()> {
        self.ensure_idle()?;
        self.groups = ops::delete_group(&self.groups, name);
        Ok(())
    }

    /// Delete variations by position. Refused while a form is open.
    pub fn delete_variation(
        &mut self,
        group_name: &str,
        positions: &BTreeSet<usize>,
    ) -> Result<()> {
        self.ensure_idle()?;
        self.groups = ops::delete_variation(&self.groups, group_name, positions);
        Ok(())
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.intent.is_idle() {
            Ok(())
        } else {
            Err(EditError::FormOpen {
                intent: self.intent.id(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phrase_model::sample_groups;

    #[test]
    fn rejected_submit_keeps_form_and_intent() {
        let mut session = EditorSession::new(sample_groups());
        session.start_intent(EditIntent::AddGroup).unwrap();
        session.form_mut().group_name = "Color".to_string();

        let error = session.submit().unwrap_err();
        assert!(matches!(error, EditError::DuplicateGroupName { .. }));
        assert_eq!(session.intent(), &EditIntent::AddGroup);
        assert_eq!(session.form().group_name, "Color");
        assert_eq!(session.groups(), sample_groups().as_slice());

        assert_eq!(session.take_error(), Some(error));
        assert_eq!(session.take_error(), None);
    }

    #[test]
    fn corrected_resubmit_commits_and_clears() {
        let mut session = EditorSession::new(sample_groups());
        session.start_intent(EditIntent::AddGroup).unwrap();
        session.form_mut().group_name = "Color".to_string();
        assert!(session.submit().is_err());

        session.form_mut().group_name = "Mood".to_string();
        session.submit().unwrap();
        assert!(session.intent().is_idle());
        assert_eq!(session.form(), &EditForm::default());
        assert!(session.error().is_none());
        assert_eq!(session.groups().last(), Some(&Group::new("Mood")));
    }

    #[test]
    fn starting_while_editing_is_refused() {
        let mut session = EditorSession::new(sample_groups());
        session.start_intent(EditIntent::AddVariation).unwrap();
        assert_eq!(
            session.start_intent(EditIntent::AddGroup),
            Err(EditError::FormOpen {
                intent: "addVariation".to_string()
            })
        );
        assert_eq!(session.intent(), &EditIntent::AddVariation);
    }

    #[test]
    fn start_prefills_from_snapshot() {
        let groups = sample_groups();
        let mut session = EditorSession::new(groups.clone());
        session
            .start_intent(EditIntent::edit_variation(&groups[1], &groups[1].variations[1]))
            .unwrap();
        assert_eq!(session.form().group_name, "Style");
        assert_eq!(session.form().variation_name, "Realism");
        assert_eq!(session.form().probability, "0.45");
    }

    #[test]
    fn submit_while_idle_does_nothing() {
        let mut session = EditorSession::new(sample_groups());
        session.submit().unwrap();
        assert_eq!(session.groups(), sample_groups().as_slice());
    }

    #[test]
    fn dismiss_returns_to_idle() {
        let mut session = EditorSession::new(sample_groups());
        session.start_intent(EditIntent::AddGroup).unwrap();
        session.form_mut().group_name = "Mood".to_string();
        session.clear_intent();
        assert!(session.intent().is_idle());
        assert!(session.form().group_name.is_empty());
        assert_eq!(session.groups().len(), 2);
    }

    #[test]
    fn deletions_are_refused_while_editing() {
        let groups = sample_groups();
        let mut session = EditorSession::new(groups.clone());
        session
            .start_intent(EditIntent::edit_variation(&groups[0], &groups[0].variations[0]))
            .unwrap();

        let open = EditError::FormOpen {
            intent: "editVariation-Color-Green".to_string(),
        };
        assert_eq!(
            session.delete_variation("Color", &BTreeSet::from([0])),
            Err(open.clone())
        );
        assert_eq!(session.delete_group("Color"), Err(open));
        assert_eq!(session.groups(), groups.as_slice());

        session.form_mut().group_name = "Style".to_string();
        session.submit().unwrap();
        let color: Vec<&str> = session.groups()[0]
            .variations
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(color, vec!["Red", "Black"]);
    }

    #[test]
    fn deletions_apply_once_idle() {
        let mut session = EditorSession::new(sample_groups());
        session.delete_variation("Color", &BTreeSet::from([0])).unwrap();
        session.delete_group("Style").unwrap();
        assert_eq!(session.groups().len(), 1);
        assert_eq!(session.groups()[0].variations.len(), 2);
    }
}
