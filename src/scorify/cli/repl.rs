//! The interactive command loop.
//!
//! The loop is either `Running` or `Terminated`; `exit` (or end of input, which is treated
//! the same way) is the only transition out of `Running`. Every line is split on
//! whitespace, the first token picks an entry of [`COMMANDS`] case-insensitively, and the
//! remaining tokens are that command's arguments. Handlers return `Result<CmdResult>`;
//! this module alone turns those into terminal output.

use super::print::{print_error, print_list_heading, print_result, print_rule};
use colored::Colorize;
use scorify::api::{parse_price, CmdMessage, CmdResult, ScorifyApi};
use scorify::error::{Result, ScorifyError};
use scorify::store::DataStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

const WELCOME: &str = "Welcome to Scorify. Type 'help' for commands.";
const PROMPT: &str = "scorify>";
const NAME_PROMPT: &str = "> Name: ";
const TAGS_PROMPT: &str = "> Tags (comma separated): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Sell,
    Sold,
    Refund,
    List,
    Update,
    Export,
    Help,
    Exit,
}

struct CommandSpec {
    name: &'static str,
    usage: &'static str,
    summary: &'static str,
    action: Action,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "sell",
        usage: "sell <price>",
        summary: "Add a new sale",
        action: Action::Sell,
    },
    CommandSpec {
        name: "sold",
        usage: "sold <id_or_name>",
        summary: "Mark as sold",
        action: Action::Sold,
    },
    CommandSpec {
        name: "refund",
        usage: "refund <id_or_name>",
        summary: "Remove entry",
        action: Action::Refund,
    },
    CommandSpec {
        name: "list",
        usage: "list",
        summary: "Show all entries",
        action: Action::List,
    },
    CommandSpec {
        name: "update",
        usage: "update",
        summary: "Reload from disk, dropping unsaved changes",
        action: Action::Update,
    },
    CommandSpec {
        name: "export",
        usage: "export <csv|txt|json|sd>",
        summary: "Export in the given format",
        action: Action::Export,
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "Show this summary",
        action: Action::Help,
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Save and quit",
        action: Action::Exit,
    },
];

fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.name == name)
}

fn help_text() -> String {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    let mut text = String::from("Available commands:\n");
    for cmd in COMMANDS {
        text.push_str(&format!(
            "  {:<width$}  - {}\n",
            cmd.usage,
            cmd.summary,
            width = width
        ));
    }
    text
}

/// Joins the argument tokens into one identifier so multi-word names survive splitting.
fn identifier(spec: &CommandSpec, args: &[&str]) -> Result<String> {
    if args.is_empty() {
        return Err(usage_error(spec));
    }
    Ok(args.join(" "))
}

fn usage_error(spec: &CommandSpec) -> ScorifyError {
    ScorifyError::input(format!("Usage: {}", spec.usage))
}

pub struct Repl<S: DataStore, R, W> {
    api: ScorifyApi<S>,
    input: R,
    output: W,
    state: LoopState,
}

impl<S: DataStore, R: BufRead, W: Write> Repl<S, R, W> {
    pub fn new(api: ScorifyApi<S>, input: R, output: W) -> Self {
        Self {
            api,
            input,
            output,
            state: LoopState::Running,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[cfg(test)]
    pub fn api(&self) -> &ScorifyApi<S> {
        &self.api
    }

    /// Greets, loads the ledger, then processes lines until the loop terminates.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", WELCOME.cyan().bold())?;
        let loaded = self.api.load();
        self.report(loaded)?;

        while self.state == LoopState::Running {
            write!(self.output, "{} ", PROMPT.bold())?;
            self.output.flush()?;

            match self.read_line()? {
                Some(line) => self.execute(&line)?,
                None => {
                    debug!("end of input, exiting");
                    writeln!(self.output)?;
                    let saved = self.exit();
                    self.report(saved)?;
                }
            }
        }
        Ok(())
    }

    /// Runs a single command line. Blank lines are ignored.
    pub fn execute(&mut self, line: &str) -> io::Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((first, args)) = tokens.split_first() else {
            return Ok(());
        };
        let name = first.to_lowercase();

        let Some(spec) = lookup(&name) else {
            debug!(command = %name, "unknown command");
            let err = ScorifyError::input(format!("Unknown command '{}'. Type 'help'.", name));
            return self.report(Err(err));
        };

        debug!(command = spec.name, args = args.len(), "dispatching");
        if spec.action == Action::List {
            print_list_heading(&mut self.output)?;
        }
        let outcome = self.dispatch(spec, args);
        self.report(outcome)?;
        if spec.action == Action::List {
            print_rule(&mut self.output)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, spec: &CommandSpec, args: &[&str]) -> Result<CmdResult> {
        match spec.action {
            Action::Sell => self.handle_sell(spec, args),
            Action::Sold => self.api.mark_sold(&identifier(spec, args)?),
            Action::Refund => self.api.refund(&identifier(spec, args)?),
            Action::List => self.api.list(),
            Action::Update => self.api.load(),
            Action::Export => {
                let format = args.first().ok_or_else(|| usage_error(spec))?;
                self.api.export(format)
            }
            Action::Help => Ok(CmdResult::default().with_message(CmdMessage::info(help_text()))),
            Action::Exit => self.exit(),
        }
    }

    fn handle_sell(&mut self, spec: &CommandSpec, args: &[&str]) -> Result<CmdResult> {
        let token = args.first().ok_or_else(|| usage_error(spec))?;
        let price = parse_price(token)?;

        let name = self
            .prompt(NAME_PROMPT)?
            .ok_or_else(|| ScorifyError::input("Sale cancelled: no name given."))?;
        let tags = self.prompt(TAGS_PROMPT)?.unwrap_or_default();

        self.api.sell(price, name, &tags)
    }

    /// Saves and terminates the loop. The loop ends even when the save fails.
    fn exit(&mut self) -> Result<CmdResult> {
        self.state = LoopState::Terminated;
        self.api.save()
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(self.read_line()?)
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn report(&mut self, outcome: Result<CmdResult>) -> io::Result<()> {
        match outcome {
            Ok(result) => print_result(&mut self.output, &result),
            Err(err) => print_error(&mut self.output, &err),
        }
    }
}
