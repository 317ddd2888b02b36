//! Line-oriented edit scripts.
//!
//! Each line drives the editor the way a user would through the group list:
//! open a form, fill in fields, confirm or cancel, delete entries. Arguments
//! are separated by `|` so names may contain spaces.
//!
//! ```text
//! # move Green into Style
//! edit-variation Color | Green
//! set group Style
//! confirm
//! delete-variation Style | 0 2
//! ```

use std::collections::BTreeSet;

use phrase_edit::EditorSession;
use phrase_model::{EditIntent, Group};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info_span};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {message}")]
    InvalidArguments { line: usize, message: String },
    #[error("line {line}: no group named '{group}'")]
    NoSuchGroup { line: usize, group: String },
    #[error("line {line}: no variation named '{variation}' in group '{group}'")]
    NoSuchVariation {
        line: usize,
        group: String,
        variation: String,
    },
}

/// Form field addressed by `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Group,
    Variation,
    Probability,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddGroup,
    AddVariation,
    EditGroup(String),
    EditVariation { group: String, variation: String },
    Set(Field, String),
    Confirm,
    Cancel,
    DeleteGroup(String),
    DeleteVariation {
        group: String,
        positions: BTreeSet<usize>,
    },
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// What happened while running a script, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Started { line: usize, title: String },
    Committed { line: usize },
    Rejected { line: usize, message: String },
    Dismissed { line: usize },
    DeletedGroup { line: usize, group: String },
    DeletedVariations {
        line: usize,
        group: String,
        positions: Vec<usize>,
    },
    Shown { line: usize, groups: Vec<Group> },
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = parse_line(line, trimmed)?;
        lines.push(ScriptLine { line, command });
    }
    Ok(lines)
}

fn parse_line(line: usize, text: &str) -> Result<Command, ScriptError> {
    let (verb, rest) = text
        .split_once(char::is_whitespace)
        .map_or((text, ""), |(verb, rest)| (verb, rest.trim_start()));
    let invalid = |message: &str| ScriptError::InvalidArguments {
        line,
        message: message.to_string(),
    };
    let command = match verb {
        "add-group" => Command::AddGroup,
        "add-variation" => Command::AddVariation,
        "confirm" => Command::Confirm,
        "cancel" => Command::Cancel,
        "show" => Command::Show,
        "edit-group" => Command::EditGroup(
            required(rest).ok_or_else(|| invalid("edit-group needs a group name"))?,
        ),
        "delete-group" => Command::DeleteGroup(
            required(rest).ok_or_else(|| invalid("delete-group needs a group name"))?,
        ),
        "edit-variation" => {
            let (group, variation) = pair(rest)
                .ok_or_else(|| invalid("edit-variation needs GROUP | VARIATION"))?;
            Command::EditVariation { group, variation }
        }
        "delete-variation" => {
            let (group, positions) = pair(rest)
                .ok_or_else(|| invalid("delete-variation needs GROUP | POSITIONS"))?;
            let positions = positions
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<BTreeSet<usize>, _>>()
                .map_err(|_| invalid("positions must be non-negative integers"))?;
            Command::DeleteVariation { group, positions }
        }
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = match field {
                "group" => Field::Group,
                "variation" => Field::Variation,
                "probability" => Field::Probability,
                _ => return Err(invalid("set expects group, variation or probability")),
            };
            Command::Set(field, value.to_string())
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };
    Ok(command)
}

fn required(rest: &str) -> Option<String> {
    let value = rest.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn pair(rest: &str) -> Option<(String, String)> {
    let (left, right) = rest.split_once('|')?;
    Some((required(left)?, right.trim().to_string()))
}

/// Apply parsed lines to `session`.
///
/// Validation failures are recorded as [`ScriptEvent::Rejected`] and leave the
/// form open, like a user reading the alert and fixing a field. References to
/// entities that do not exist abort the run.
pub fn run_script(
    session: &mut EditorSession,
    lines: &[ScriptLine],
) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for ScriptLine { line, command } in lines {
        let line = *line;
        let span = info_span!("script_line", line);
        let _guard = span.enter();
        debug!(?command, "running");
        match command {
            Command::AddGroup => start(session, &mut events, line, EditIntent::AddGroup),
            Command::AddVariation => start(session, &mut events, line, EditIntent::AddVariation),
            Command::EditGroup(name) => {
                let group = lookup_group(session, line, name)?;
                let intent = EditIntent::edit_group(group);
                start(session, &mut events, line, intent);
            }
            Command::EditVariation { group, variation } => {
                let owner = lookup_group(session, line, group)?;
                let found = owner
                    .variation(variation)
                    .ok_or_else(|| ScriptError::NoSuchVariation {
                        line,
                        group: group.clone(),
                        variation: variation.clone(),
                    })?;
                let intent = EditIntent::edit_variation(owner, found);
                start(session, &mut events, line, intent);
            }
            Command::Set(field, value) => {
                let form = session.form_mut();
                let slot = match field {
                    Field::Group => &mut form.group_name,
                    Field::Variation => &mut form.variation_name,
                    Field::Probability => &mut form.probability,
                };
                slot.clone_from(value);
            }
            Command::Confirm => {
                if session.intent().is_idle() {
                    continue;
                }
                match session.submit() {
                    Ok(()) => events.push(ScriptEvent::Committed { line }),
                    Err(_) => {
                        // The session keeps the error until it is shown.
                        if let Some(error) = session.take_error() {
                            events.push(ScriptEvent::Rejected {
                                line,
                                message: error.to_string(),
                            });
                        }
                    }
                }
            }
            Command::Cancel => {
                session.clear_intent();
                events.push(ScriptEvent::Dismissed { line });
            }
            Command::DeleteGroup(name) => {
                let event = match session.delete_group(name) {
                    Ok(()) => ScriptEvent::DeletedGroup {
                        line,
                        group: name.clone(),
                    },
                    Err(error) => ScriptEvent::Rejected {
                        line,
                        message: error.to_string(),
                    },
                };
                events.push(event);
            }
            Command::DeleteVariation { group, positions } => {
                let event = match session.delete_variation(group, positions) {
                    Ok(()) => ScriptEvent::DeletedVariations {
                        line,
                        group: group.clone(),
                        positions: positions.iter().copied().collect(),
                    },
                    Err(error) => ScriptEvent::Rejected {
                        line,
                        message: error.to_string(),
                    },
                };
                events.push(event);
            }
            Command::Show => events.push(ScriptEvent::Shown {
                line,
                groups: session.groups().to_vec(),
            }),
        }
    }
    Ok(events)
}

fn start(
    session: &mut EditorSession,
    events: &mut Vec<ScriptEvent>,
    line: usize,
    intent: EditIntent,
) {
    let title = intent.title();
    match session.start_intent(intent) {
        Ok(()) => events.push(ScriptEvent::Started { line, title }),
        Err(error) => events.push(ScriptEvent::Rejected {
            line,
            message: error.to_string(),
        }),
    }
}

fn lookup_group<'a>(
    session: &'a EditorSession,
    line: usize,
    name: &str,
) -> Result<&'a Group, ScriptError> {
    session
        .groups()
        .iter()
        .find(|group| group.name == name)
        .ok_or_else(|| ScriptError::NoSuchGroup {
            line,
            group: name.to_string(),
        })
}
