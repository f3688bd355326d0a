use super::{
    command::{HELP, SessionCommand, parse_command},
    render::{render_rules, render_view},
};
use anyhow::Result;
use clientdesk_core::{
    persistence::KeyValueStore,
    table::{ClientTableController, TableEvent, TableIntent},
};
use std::io::{BufRead, Write};
use tracing::debug;

/// Feed one command per input line to `controller`, rendering after every
/// line that changes state. Blank lines and `#` comments are skipped; bad
/// commands print an error and the session carries on.
pub fn run_session<S, R, W>(
    controller: &mut ClientTableController<S>,
    input: R,
    output: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        debug!("Session command {:?}", command);

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(output, "{HELP}")?,
            SessionCommand::Show => write!(output, "{}", render_view(controller.state()))?,
            SessionCommand::Rules => write!(output, "{}", render_rules(controller.state()))?,
            SessionCommand::Intent(intent) => {
                let event = controller.dispatch(intent);
                report(controller, intent, event, output)?;
            }
        }
        output.flush()?;
    }
    Ok(())
}

fn report<S: KeyValueStore, W: Write>(
    controller: &ClientTableController<S>,
    intent: TableIntent,
    event: TableEvent,
    output: &mut W,
) -> Result<()> {
    let state = controller.state();
    match event {
        TableEvent::Unchanged => writeln!(output, "nothing changed")?,
        TableEvent::Updated if intent == TableIntent::ToggleSortPanel => {
            write!(output, "{}", render_rules(state))?
        }
        TableEvent::Updated => write!(output, "{}", render_view(state))?,
        TableEvent::SortApplied { criteria } => {
            let noun = if criteria == 1 { "criterion" } else { "criteria" };
            writeln!(output, "Applied {criteria} sort {noun}")?;
            write!(output, "{}", render_view(state))?;
        }
        TableEvent::SortCleared => {
            writeln!(output, "Sort cleared")?;
            write!(output, "{}", render_view(state))?;
        }
        TableEvent::AddClientRequested => {
            writeln!(output, "Adding clients is not available yet")?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientdesk_core::{
        persistence::{MemoryStore, SortStateRepository},
        table::TableOptions,
    };
    use clientdesk_model::fixtures::sample_clients;

    fn run(script: &str) -> (ClientTableController<MemoryStore>, String) {
        let mut controller = ClientTableController::hydrate(
            sample_clients(),
            SortStateRepository::new(MemoryStore::new()),
            TableOptions::default(),
        );
        let mut out = Vec::new();
        run_session(&mut controller, script.as_bytes(), &mut out).unwrap();
        (controller, String::from_utf8(out).unwrap())
    }

    #[test]
    fn scripted_edits_reach_the_controller() {
        let (controller, out) = run("tab company\nadd name\ndir name desc\napply\n");

        assert_eq!(controller.sort_badge(), Some(1));
        assert!(out.contains("Applied 1 sort criterion"));
        assert!(out.contains("Tab: Company | 5 clients | Sort (1): Client Name Z-A"));
        assert!(controller.repository().store().get("sortOptions").unwrap().is_some());
    }

    #[test]
    fn applied_count_picks_the_noun() {
        let (_, out) = run("add name\nadd email\napply\n");
        assert!(out.contains("Applied 2 sort criteria"));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (controller, out) = run("add shoe\nadd email\n");
        assert!(out.starts_with("error: unknown sort field"));
        assert_eq!(controller.sort_badge(), Some(1));
    }

    #[test]
    fn quit_stops_reading() {
        let (controller, out) = run("# setup\n\nquit\nadd name\n");
        assert!(out.is_empty());
        assert_eq!(controller.sort_badge(), None);
    }

    #[test]
    fn no_op_edits_are_reported() {
        let (_, out) = run("remove name\nmove 1 2\n");
        assert_eq!(out, "nothing changed\nnothing changed\n");
    }

    #[test]
    fn panel_toggle_prints_the_panel() {
        let (controller, out) = run("panel\n");
        assert!(controller.state().sort_panel_open);
        assert!(out.starts_with("Sort panel (open)"));
    }
}
