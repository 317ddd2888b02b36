use phrase_model::EditIntent;

/// Raw text of the shared editor form.
///
/// Fields are kept exactly as typed; trimming and number parsing happen at
/// commit time so a rejected submit leaves the user's text intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub group_name: String,
    pub variation_name: String,
    pub probability: String,
}

impl EditForm {
    /// Form contents when the editor opens for `intent`.
    ///
    /// Edit intents pre-fill from their snapshot; add intents start blank.
    pub fn for_intent(intent: &EditIntent) -> Self {
        match intent {
            EditIntent::EditGroup { group } => Self {
                group_name: group.name.clone(),
                ..Self::default()
            },
            EditIntent::EditVariation { group, variation } => Self {
                group_name: group.name.clone(),
                variation_name: variation.name.clone(),
                probability: variation.probability.to_string(),
            },
            EditIntent::Idle | EditIntent::AddGroup | EditIntent::AddVariation => Self::default(),
        }
    }
}
