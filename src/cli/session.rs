//! Line-oriented interactive session.
//!
//! Reads one command per line and writes plain text responses. Adding,
//! picking or selecting a task fetches fresh suggestions for it, even when the
//! task is already listed.

use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::client::SuggestionClient;
use crate::suggest::Diagnostic;
use crate::tasks::TaskList;
use crate::traits::HttpClient;

/// Help text for the interactive session.
pub const SESSION_HELP: &str = "\
Commands:
  add <task>      Add a task and show follow-up suggestions
  remove <n>      Remove task number n
  list            Show all tasks
  suggest <task>  Show suggestions without adding the task
  suggest <n>     Show suggestions for task number n
  pick <n>        Add suggestion n from the last list
  help            Show this help
  quit            Exit";

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add(String),
    /// 1-based task number
    Remove(usize),
    List,
    Suggest(String),
    /// 1-based task number
    SuggestTask(usize),
    /// 1-based suggestion number
    Pick(usize),
    Help,
    Quit,
    /// Blank line
    Empty,
    /// Recognized command with a bad argument
    Invalid(String),
    Unknown(String),
}

impl SessionCommand {
    /// Parse a single input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => SessionCommand::Empty,
            "add" => text_arg(rest, "add")
                .map_or_else(SessionCommand::Invalid, SessionCommand::Add),
            "suggest" if rest.parse::<usize>().is_ok() => number_arg(rest, "suggest")
                .map_or_else(SessionCommand::Invalid, SessionCommand::SuggestTask),
            "suggest" => text_arg(rest, "suggest")
                .map_or_else(SessionCommand::Invalid, SessionCommand::Suggest),
            "remove" | "rm" => number_arg(rest, "remove")
                .map_or_else(SessionCommand::Invalid, SessionCommand::Remove),
            "pick" => number_arg(rest, "pick")
                .map_or_else(SessionCommand::Invalid, SessionCommand::Pick),
            "list" | "ls" => SessionCommand::List,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => SessionCommand::Unknown(word.to_string()),
        }
    }
}

fn text_arg(rest: &str, command: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("Usage: {} <task>", command))
    } else {
        Ok(rest.to_string())
    }
}

fn number_arg(rest: &str, command: &str) -> Result<usize, String> {
    match rest.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Usage: {} <n> (n starts at 1)", command)),
    }
}

/// Interactive to-do session state.
pub struct Session<C: HttpClient> {
    client: SuggestionClient<C>,
    tasks: TaskList,
    last_suggestions: Vec<String>,
}

impl<C: HttpClient> Session<C> {
    pub fn new(client: SuggestionClient<C>) -> Self {
        Self {
            client,
            tasks: TaskList::new(),
            last_suggestions: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Suggestions shown most recently
    pub fn last_suggestions(&self) -> &[String] {
        &self.last_suggestions
    }

    /// Read commands from `input` until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "Type 'help' for commands.")?;
        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if !self.execute(SessionCommand::parse(&line), out).await? {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command. Returns `false` when the session should end.
    pub async fn execute<W: Write>(
        &mut self,
        command: SessionCommand,
        out: &mut W,
    ) -> io::Result<bool> {
        match command {
            SessionCommand::Add(task) => self.add_task(&task, out).await?,
            SessionCommand::Remove(n) => match self.tasks.remove(n - 1) {
                Some(task) => writeln!(out, "Removed: {}", task)?,
                None => writeln!(out, "No task number {}", n)?,
            },
            SessionCommand::List => self.print_tasks(out)?,
            SessionCommand::Suggest(task) => self.show_suggestions(&task, out).await?,
            SessionCommand::SuggestTask(n) => match self.tasks.get(n - 1).map(str::to_string) {
                Some(task) => self.show_suggestions(&task, out).await?,
                None => writeln!(out, "No task number {}", n)?,
            },
            SessionCommand::Pick(n) => {
                let picked = if Diagnostic::recognize(&self.last_suggestions).is_some() {
                    None
                } else {
                    self.last_suggestions.get(n - 1).cloned()
                };
                match picked {
                    Some(task) => self.add_task(&task, out).await?,
                    None => writeln!(out, "No suggestion number {}", n)?,
                }
            }
            SessionCommand::Help => writeln!(out, "{}", SESSION_HELP)?,
            SessionCommand::Quit => return Ok(false),
            SessionCommand::Empty => {}
            SessionCommand::Invalid(usage) => writeln!(out, "{}", usage)?,
            SessionCommand::Unknown(word) => {
                writeln!(out, "Unknown command '{}'. Type 'help' for commands.", word)?
            }
        }
        Ok(true)
    }

    async fn add_task<W: Write>(&mut self, task: &str, out: &mut W) -> io::Result<()> {
        if self.tasks.add(task) {
            writeln!(out, "Added: {}", task.trim())?;
        } else {
            writeln!(out, "Already listed: {}", task.trim())?;
        }
        self.show_suggestions(task, out).await
    }

    async fn show_suggestions<W: Write>(&mut self, task: &str, out: &mut W) -> io::Result<()> {
        let suggestions = self.client.suggest(task).await;
        writeln!(out, "Suggestions:")?;
        for (i, suggestion) in suggestions.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, suggestion)?;
        }
        self.last_suggestions = suggestions;
        Ok(())
    }

    fn print_tasks<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.tasks.is_empty() {
            return writeln!(out, "No tasks yet.");
        }
        for (i, task) in self.tasks.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, task)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::AppConfig;
    use crate::traits::HttpError;

    fn session_with(response: MockResponse) -> Session<MockHttpClient> {
        let http = MockHttpClient::new();
        http.set_response(response);
        let config = AppConfig {
            workspace_slug: "todo".to_string(),
            ..AppConfig::default()
        };
        Session::new(SuggestionClient::new(http, config))
    }

    fn trip_suggestions() -> MockResponse {
        MockResponse::sse_fragments(["1. Pack bags\n2. Book hotel"])
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("add  Buy milk "),
            SessionCommand::Add("Buy milk".to_string())
        );
        assert_eq!(SessionCommand::parse("remove 2"), SessionCommand::Remove(2));
        assert_eq!(SessionCommand::parse("PICK 1"), SessionCommand::Pick(1));
        assert_eq!(SessionCommand::parse("suggest 3"), SessionCommand::SuggestTask(3));
        assert_eq!(
            SessionCommand::parse("suggest 3 ways to relax"),
            SessionCommand::Suggest("3 ways to relax".to_string())
        );
        assert_eq!(SessionCommand::parse("list"), SessionCommand::List);
        assert_eq!(SessionCommand::parse("   "), SessionCommand::Empty);
        assert_eq!(SessionCommand::parse("quit"), SessionCommand::Quit);
        assert_eq!(
            SessionCommand::parse("dance"),
            SessionCommand::Unknown("dance".to_string())
        );
    }

    #[test]
    fn test_parse_bad_arguments() {
        assert!(matches!(SessionCommand::parse("add"), SessionCommand::Invalid(_)));
        assert!(matches!(SessionCommand::parse("remove 0"), SessionCommand::Invalid(_)));
        assert!(matches!(SessionCommand::parse("pick two"), SessionCommand::Invalid(_)));
        assert!(matches!(SessionCommand::parse("suggest 0"), SessionCommand::Invalid(_)));
    }

    #[tokio::test]
    async fn test_add_prints_suggestions() {
        let mut session = session_with(trip_suggestions());
        let mut out = Vec::new();

        session
            .execute(SessionCommand::Add("Plan trip".to_string()), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Added: Plan trip"));
        assert!(text.contains("  1. Pack bags"));
        assert!(text.contains("  2. Book hotel"));
        assert_eq!(session.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_pick_adds_suggestion() {
        let mut session = session_with(trip_suggestions());
        let mut out = Vec::new();

        session
            .execute(SessionCommand::Suggest("Plan trip".to_string()), &mut out)
            .await
            .unwrap();
        session.execute(SessionCommand::Pick(2), &mut out).await.unwrap();

        assert_eq!(session.tasks().get(0), Some("Book hotel"));
    }

    #[tokio::test]
    async fn test_suggest_for_listed_task() {
        let mut session = session_with(trip_suggestions());
        let mut out = Vec::new();

        session
            .execute(SessionCommand::Add("Plan trip".to_string()), &mut out)
            .await
            .unwrap();
        session.last_suggestions.clear();
        session.execute(SessionCommand::SuggestTask(1), &mut out).await.unwrap();
        session.execute(SessionCommand::SuggestTask(4), &mut out).await.unwrap();

        assert_eq!(session.last_suggestions(), ["Pack bags", "Book hotel"]);
        assert!(String::from_utf8(out).unwrap().contains("No task number 4"));
        assert_eq!(session.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_add_duplicate_still_suggests() {
        let mut session = session_with(trip_suggestions());
        let mut out = Vec::new();

        for _ in 0..2 {
            session
                .execute(SessionCommand::Add("Plan trip".to_string()), &mut out)
                .await
                .unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Already listed: Plan trip"));
        assert_eq!(text.matches("  1. Pack bags").count(), 2);
        assert_eq!(session.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_pick_ignores_diagnostics() {
        let mut session = session_with(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let mut out = Vec::new();

        session
            .execute(SessionCommand::Suggest("x".to_string()), &mut out)
            .await
            .unwrap();
        assert_eq!(session.last_suggestions()[0], "Connection error");

        session.execute(SessionCommand::Pick(1), &mut out).await.unwrap();
        assert!(session.tasks().is_empty());
        assert!(String::from_utf8(out).unwrap().contains("No suggestion number 1"));
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let mut session = session_with(MockResponse::sse_fragments(["1. Next"]));
        let input: &[u8] = b"add First\nlist\nremove 1\nlist\nquit\nadd Never\n";
        let mut out = Vec::new();

        session.run(input, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. First"));
        assert!(text.contains("Removed: First"));
        assert!(text.contains("No tasks yet."));
        assert!(!text.contains("Never"));
        assert!(session.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_run_stops_at_end_of_input() {
        let mut session = session_with(MockResponse::sse_fragments(["1. Next"]));
        let input: &[u8] = b"help\n";
        let mut out = Vec::new();

        session.run(input, &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().contains("pick <n>"));
    }
}
