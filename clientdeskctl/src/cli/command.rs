use clientdesk_core::{
    query::{
        ClientTab, SortDirection, SortField, UnknownSortDirection, UnknownSortField,
        filtering::UnknownTab,
    },
    table::TableIntent,
};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  tab <all|individual|company>   switch the active tab
  panel                          open or close the sort panel
  add <field>                    append a sort field
  remove <field>                 drop a sort field
  dir <field> <asc|desc>         set a field's direction
  toggle <field>                 flip a field's direction
  move <from> <to>               move a criterion by position (1-based)
  drag <field> <field>           drop the first field onto the second
  apply                          persist the sort and close the panel
  clear                          remove every sort field and the saved sort
  add-client                     start adding a client
  show                           print the table
  rules                          print the sort panel
  help                           print this help
  quit                           end the session
Fields accept a key (name, createdAt) or a column label (Client Name).";

/// One parsed line of session input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Intent(TableIntent),
    Show,
    Rules,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{command}' takes no arguments")]
    UnexpectedArgument { command: &'static str },
    #[error("invalid position '{0}' (positions start at 1)")]
    Position(String),
    #[error(transparent)]
    Field(#[from] UnknownSortField),
    #[error(transparent)]
    Direction(#[from] UnknownSortDirection),
    #[error(transparent)]
    Tab(#[from] UnknownTab),
}

pub fn parse_command(line: &str) -> Result<SessionCommand, ParseCommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseCommandError::UnknownCommand(String::new()));
    };
    let args: Vec<&str> = words.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "tab" => {
            let tab: ClientTab = single(&args, "tab", "a tab name")?.parse()?;
            SessionCommand::Intent(TableIntent::ChangeTab(tab))
        }
        "panel" => bare(&args, "panel", SessionCommand::Intent(TableIntent::ToggleSortPanel))?,
        "add" => SessionCommand::Intent(TableIntent::AddSortField(field(&args, "add")?)),
        "remove" | "rm" => {
            SessionCommand::Intent(TableIntent::RemoveSortField(field(&args, "remove")?))
        }
        "toggle" => {
            SessionCommand::Intent(TableIntent::ToggleSortDirection(field(&args, "toggle")?))
        }
        "dir" => {
            let Some((direction, rest)) = args.split_last() else {
                return Err(ParseCommandError::MissingArgument {
                    command: "dir",
                    expected: "a field and a direction",
                });
            };
            let direction: SortDirection = direction.parse()?;
            let field = field(rest, "dir")?;
            SessionCommand::Intent(TableIntent::SetSortDirection(field, direction))
        }
        "move" => match args.as_slice() {
            [from, to] => SessionCommand::Intent(TableIntent::ReorderSortFields {
                from: position(from)?,
                to: position(to)?,
            }),
            _ => {
                return Err(ParseCommandError::MissingArgument {
                    command: "move",
                    expected: "two positions",
                });
            }
        },
        "drag" => match args.as_slice() {
            [active, over] => SessionCommand::Intent(TableIntent::DragSortField {
                active: active.parse()?,
                over: over.parse()?,
            }),
            _ => {
                return Err(ParseCommandError::MissingArgument {
                    command: "drag",
                    expected: "two field keys",
                });
            }
        },
        "apply" => bare(&args, "apply", SessionCommand::Intent(TableIntent::ApplySort))?,
        "clear" => bare(&args, "clear", SessionCommand::Intent(TableIntent::ClearSort))?,
        "add-client" => bare(&args, "add-client", SessionCommand::Intent(TableIntent::AddClient))?,
        "show" => bare(&args, "show", SessionCommand::Show)?,
        "rules" => bare(&args, "rules", SessionCommand::Rules)?,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(ParseCommandError::UnknownCommand(other.to_string())),
    };

    Ok(command)
}

fn bare(
    args: &[&str],
    command: &'static str,
    parsed: SessionCommand,
) -> Result<SessionCommand, ParseCommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseCommandError::UnexpectedArgument { command })
    }
}

fn single<'a>(
    args: &[&'a str],
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, ParseCommandError> {
    match args {
        [value] => Ok(value),
        _ => Err(ParseCommandError::MissingArgument { command, expected }),
    }
}

// Labels contain spaces, so every remaining word belongs to the field
fn field(args: &[&str], command: &'static str) -> Result<SortField, ParseCommandError> {
    if args.is_empty() {
        return Err(ParseCommandError::MissingArgument {
            command,
            expected: "a field",
        });
    }
    Ok(args.join(" ").parse()?)
}

fn position(raw: &str) -> Result<usize, ParseCommandError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(ParseCommandError::Position(raw.to_string())),
    }
}
