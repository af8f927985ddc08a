use leave_calendar_backend::error::AppError;
use leave_calendar_backend::models::Leave;
use leave_calendar_backend::utils::time::parse_month;
use tokio::sync::watch;

use crate::pages::calendar::{panel, utils::parse_leave_form};
use crate::state::leave::{LeaveSnapshot, LeaveStore};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Next,
    Previous,
    Goto(chrono::NaiveDate),
    Add(Vec<String>),
    Json,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };
        let command = match head.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "goto" | "g" => {
                let value = parts
                    .next()
                    .ok_or_else(|| AppError::BadRequest("goto needs YYYY-MM".into()))?;
                let month = parse_month(value)
                    .ok_or_else(|| AppError::BadRequest(format!("invalid month: {value}")))?;
                Command::Goto(month)
            }
            "add" | "a" => Command::Add(parts.map(str::to_string).collect()),
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(AppError::BadRequest(format!("unknown command: {other}"))),
        };
        Ok(Some(command))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Render(Vec<String>),
    Quit,
}

/// Maps user commands onto store actions.
pub struct CalendarViewModel {
    store: LeaveStore,
    default_user: String,
}

impl CalendarViewModel {
    pub fn new(store: LeaveStore, default_user: impl Into<String>) -> Self {
        Self {
            store,
            default_user: default_user.into(),
        }
    }

    pub fn store(&self) -> &LeaveStore {
        &self.store
    }

    pub fn subscribe(&self) -> watch::Receiver<LeaveSnapshot> {
        self.store.subscribe()
    }

    /// Loads the current month and renders it.
    pub async fn refresh(&mut self) -> Result<Vec<String>, AppError> {
        self.store.get_leaves().await?;
        Ok(panel::render_snapshot(&self.store.snapshot()))
    }

    pub async fn handle_line(&mut self, line: &str) -> Result<Outcome, AppError> {
        match Command::parse(line)? {
            Some(command) => self.dispatch(command).await,
            None => Ok(Outcome::Render(Vec::new())),
        }
    }

    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome, AppError> {
        let lines = match command {
            Command::List => self.refresh().await?,
            Command::Next => {
                self.store.next_month().await?;
                self.render()
            }
            Command::Previous => {
                self.store.previous_month().await?;
                self.render()
            }
            Command::Goto(month) => {
                self.store.goto(month).await?;
                self.render()
            }
            Command::Add(fields) => {
                let request =
                    parse_leave_form(fields.iter().map(String::as_str), &self.default_user)?;
                let leave = self.store.add_leave(request).await?;
                self.added_lines(&leave)
            }
            Command::Json => panel::render_json(&self.store.snapshot())?,
            Command::Help => panel::help_lines(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Render(lines))
    }

    fn render(&self) -> Vec<String> {
        panel::render_snapshot(&self.store.snapshot())
    }

    fn added_lines(&self, leave: &Leave) -> Vec<String> {
        let mut lines = vec![format!("Requested leave {}", leave.id)];
        if !leave.intersects_month(self.store.current_month()) {
            lines.push("(outside the month on screen)".to_string());
        }
        lines.push(panel::render_leave(leave));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use leave_calendar_backend::fixtures::GeneratedLeaveRepository;
    use std::sync::Arc;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn view_model() -> CalendarViewModel {
        let store = LeaveStore::new(Arc::new(GeneratedLeaveRepository::new()), ymd(2025, 1, 1));
        CalendarViewModel::new(store, "me")
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("  ").unwrap(), None);
        assert_eq!(Command::parse("NEXT").unwrap(), Some(Command::Next));
        assert_eq!(Command::parse("p").unwrap(), Some(Command::Previous));
        assert_eq!(
            Command::parse("goto 2024-12").unwrap(),
            Some(Command::Goto(ymd(2024, 12, 1)))
        );
        assert_eq!(
            Command::parse("add type=time_off date=2025-01-03").unwrap(),
            Some(Command::Add(vec![
                "type=time_off".to_string(),
                "date=2025-01-03".to_string()
            ]))
        );
        assert!(Command::parse("goto").is_err());
        assert!(Command::parse("goto soon").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[tokio::test]
    async fn list_renders_current_month() {
        let mut vm = view_model();
        let outcome = vm.handle_line("list").await.unwrap();
        match outcome {
            Outcome::Render(lines) => {
                assert_eq!(lines[0], "== 2025-01 (10 leaves) ==");
                assert_eq!(lines.len(), 11);
            }
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test]
    async fn navigation_commands_move_store() {
        let mut vm = view_model();
        vm.handle_line("prev").await.unwrap();
        assert_eq!(vm.store().current_month(), ymd(2024, 12, 1));
        vm.handle_line("next").await.unwrap();
        vm.handle_line("next").await.unwrap();
        assert_eq!(vm.store().current_month(), ymd(2025, 2, 1));
        vm.handle_line("goto 2030-06").await.unwrap();
        assert_eq!(vm.store().current_month(), ymd(2030, 6, 1));
    }

    #[tokio::test]
    async fn add_command_appends_to_store() {
        let mut vm = view_model();
        vm.refresh().await.unwrap();
        let outcome = vm
            .handle_line("add user=user-11 start=2025-01-01 end=2025-01-02 hours=8")
            .await
            .unwrap();
        assert_eq!(vm.store().leaves().len(), 11);
        let Outcome::Render(lines) = outcome else {
            panic!("unexpected quit");
        };
        assert!(lines[0].starts_with("Requested leave "));
        assert_eq!(lines.len(), 2);
    }

    #[tokio::test]
    async fn add_outside_month_is_flagged() {
        let mut vm = view_model();
        let Outcome::Render(lines) = vm
            .handle_line("add type=time_off date=2025-03-03 hours=2")
            .await
            .unwrap()
        else {
            panic!("unexpected quit");
        };
        assert_eq!(lines[1], "(outside the month on screen)");
    }

    #[tokio::test]
    async fn invalid_add_reports_validation_error() {
        let mut vm = view_model();
        let err = vm.handle_line("add start=2025-01-05 end=2025-01-01").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(vm.store().leaves().is_empty());
    }

    #[tokio::test]
    async fn json_dumps_snapshot() {
        let mut vm = view_model();
        vm.refresh().await.unwrap();
        let Outcome::Render(lines) = vm.handle_line("json").await.unwrap() else {
            panic!("unexpected quit");
        };
        let value: serde_json::Value = serde_json::from_str(&lines.join("\n")).unwrap();
        assert_eq!(value["currentMonth"], "2025-01-01");
        assert_eq!(value["leaves"].as_array().map(Vec::len), Some(10));
        assert_eq!(value["leaves"][0]["userId"], "user-1");
    }

    #[tokio::test]
    async fn quit_ends_session() {
        let mut vm = view_model();
        assert_eq!(vm.handle_line("quit").await.unwrap(), Outcome::Quit);
    }
}
