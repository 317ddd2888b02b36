use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use phrase_cli::script::{ScriptEvent, parse_script, run_script};
use phrase_edit::EditorSession;
use phrase_model::{Group, check_invariants, sample_groups};

use crate::cli::{RunArgs, SourceArgs};
use crate::summary::{print_events, print_groups};

pub fn run_show(args: &SourceArgs) -> Result<()> {
    let groups = load_groups(args.groups.as_deref())?;
    print_groups(&groups);
    Ok(())
}

pub fn run_edit_script(args: &RunArgs) -> Result<Vec<Group>> {
    let span = info_span!("run", script = ?args.script);
    let _guard = span.enter();
    let groups = load_groups(args.source.groups.as_deref())?;
    let text = read_script(args.script.as_deref())?;
    let lines = parse_script(&text).context("parse edit script")?;
    debug!(commands = lines.len(), "parsed edit script");

    let mut session = EditorSession::new(groups);
    let events = run_script(&mut session, &lines).context("run edit script")?;
    print_events(&events);
    let rejected = events
        .iter()
        .filter(|event| matches!(event, ScriptEvent::Rejected { .. }))
        .count();
    if !session.intent().is_idle() {
        info!(intent = %session.intent(), "form still open at end of script");
    }
    info!(events = events.len(), rejected, "edit script finished");

    let groups = session.into_groups();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&groups).context("serialize groups")?
        );
    } else {
        print_groups(&groups);
    }
    Ok(groups)
}

/// Starting collection: the JSON file when given, the sample otherwise.
fn load_groups(path: Option<&Path>) -> Result<Vec<Group>> {
    let Some(path) = path else {
        debug!("using sample groups");
        return Ok(sample_groups());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read groups from {}", path.display()))?;
    let groups: Vec<Group> = serde_json::from_str(&text)
        .with_context(|| format!("parse groups in {}", path.display()))?;
    check_invariants(&groups).with_context(|| format!("invalid groups in {}", path.display()))?;
    info!(groups = groups.len(), path = %path.display(), "loaded groups");
    Ok(groups)
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read edit script {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read edit script from stdin")?;
            Ok(text)
        }
    }
}
