//! Random edit sequences never break collection invariants.

use std::collections::BTreeSet;

use phrase_edit::EditorSession;
use phrase_model::{EditIntent, check_invariants, sample_groups};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    AddGroup(String),
    EditGroup(usize, String),
    AddVariation(String, String, String),
    EditVariation(usize, usize, String, String, String),
    DeleteGroup(String),
    DeleteVariation(String, BTreeSet<usize>),
}

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Color".to_string()),
        Just("Style".to_string()),
        Just(" Color".to_string()),
        Just("Green".to_string()),
        Just("Red".to_string()),
        Just(String::new()),
        "[A-C]{1,2}",
    ]
}

fn probability() -> impl Strategy<Value = String> {
    prop_oneof![
        (0.0f64..=1.0).prop_map(|value| value.to_string()),
        (0u8..=10).prop_map(|tenth| format!("0,{tenth}")),
        Just("1.5".to_string()),
        Just("abc".to_string()),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        name().prop_map(Action::AddGroup),
        (0usize..4, name()).prop_map(|(index, name)| Action::EditGroup(index, name)),
        (name(), name(), probability())
            .prop_map(|(group, variation, p)| Action::AddVariation(group, variation, p)),
        (0usize..4, 0usize..4, name(), name(), probability()).prop_map(
            |(group, variation, target, name, p)| Action::EditVariation(
                group, variation, target, name, p
            )
        ),
        name().prop_map(Action::DeleteGroup),
        (name(), prop::collection::btree_set(0usize..5, 0..3))
            .prop_map(|(group, positions)| Action::DeleteVariation(group, positions)),
    ]
}

fn apply(session: &mut EditorSession, action: Action) {
    let intent = match &action {
        Action::AddGroup(_) => EditIntent::AddGroup,
        Action::AddVariation(..) => EditIntent::AddVariation,
        Action::EditGroup(index, _) => match session.groups().get(*index) {
            Some(group) => EditIntent::edit_group(group),
            None => return,
        },
        Action::EditVariation(group, variation, ..) => {
            let Some(group) = session.groups().get(*group) else {
                return;
            };
            let Some(variation) = group.variations.get(*variation) else {
                return;
            };
            EditIntent::edit_variation(group, variation)
        }
        Action::DeleteGroup(name) => {
            session.delete_group(name).expect("editor is idle");
            return;
        }
        Action::DeleteVariation(group, positions) => {
            session
                .delete_variation(group, positions)
                .expect("editor is idle");
            return;
        }
    };
    session.start_intent(intent).expect("editor is idle");
    let form = session.form_mut();
    match action {
        Action::AddGroup(name) | Action::EditGroup(_, name) => form.group_name = name,
        Action::AddVariation(group, name, p) | Action::EditVariation(_, _, group, name, p) => {
            form.group_name = group;
            form.variation_name = name;
            form.probability = p;
        }
        Action::DeleteGroup(_) | Action::DeleteVariation(..) => unreachable!(),
    }
    let before = session.groups().to_vec();
    if session.submit().is_err() {
        assert_eq!(session.groups(), before.as_slice());
        assert!(!session.intent().is_idle());
        session.clear_intent();
    } else {
        assert!(session.intent().is_idle());
    }
}

proptest! {
    #[test]
    fn edits_preserve_distinct_names(actions in prop::collection::vec(action(), 1..40)) {
        let mut session = EditorSession::new(sample_groups());
        for action in actions {
            apply(&mut session, action);
            prop_assert_eq!(check_invariants(session.groups()), Ok(()));
        }
    }
}
