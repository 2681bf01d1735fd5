//! Interactive menu loop.
//!
//! Reads choices line by line and keeps going after rejected operations.
//! End of input behaves like choosing exit.

use std::io::{BufRead, Write};

use anyhow::Result;
use streak_core::{
    display::HabitRows,
    params::{HabitName, MenuChoice, UserName},
    OperationStatus, Tracker,
};

const OPTIONS: &str = "
Choose an option:
0) Add a new habit
1) Check in today
2) Show status
3) Toggle main habit
4) Delete a habit
5) Exit";

pub struct Menu<'a, R, W> {
    tracker: &'a Tracker,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(tracker: &'a Tracker, input: R, output: W) -> Self {
        Self {
            tracker,
            input,
            output,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let Some(user) = self.greet().await? else {
            return Ok(());
        };
        writeln!(self.output, "\nGreetings, {user} 👋")?;

        loop {
            writeln!(self.output, "{OPTIONS}")?;
            let Some(choice) = self.prompt("Your choice: ")? else {
                break;
            };

            match choice.as_str() {
                "0" => self.add_habit().await?,
                "1" => self.check_in().await?,
                "2" => self.show_status().await?,
                "3" => self.pick_and_toggle_main().await?,
                "4" => self.pick_and_delete().await?,
                "5" => break,
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }

        writeln!(self.output, "See you tomorrow 🔥")?;
        Ok(())
    }

    /// Returns the stored user name, asking for one on first run.
    async fn greet(&mut self) -> Result<Option<String>> {
        if let Some(user) = self.tracker.state().await?.user {
            return Ok(Some(user));
        }

        loop {
            let Some(name) = self.prompt("What's your name? ")? else {
                return Ok(None);
            };
            let status = self.tracker.set_user_name_status(&UserName { name }).await;
            if status.success {
                let user = self.tracker.state().await?.user.unwrap_or_default();
                writeln!(self.output, "It's great to meet you, {user} 🔥")?;
                return Ok(Some(user));
            }
            self.show(&status)?;
        }
    }

    async fn add_habit(&mut self) -> Result<()> {
        if let Some(name) = self.prompt("Enter habit name: ")? {
            let status = self.tracker.add_habit_status(&HabitName::new(name)).await;
            self.show(&status)?;
        }
        Ok(())
    }

    /// Lists habits and checks in every selected number.
    async fn check_in(&mut self) -> Result<()> {
        if !self.list_habits("Which habits did you complete today?").await? {
            return Ok(());
        }
        let Some(raw) = self.prompt("Enter numbers (comma-separated): ")? else {
            return Ok(());
        };

        for choice in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            let status = match self.tracker.habit_name_at(&MenuChoice::new(choice)).await {
                Ok(name) => self.tracker.check_in_status(&HabitName::new(name)).await,
                Err(e) => OperationStatus::failure(e.to_string()),
            };
            self.show(&status)?;
        }
        Ok(())
    }

    async fn show_status(&mut self) -> Result<()> {
        let rows = self.tracker.habit_rows().await?;
        writeln!(self.output, "\nYour habits status:\n")?;
        write!(self.output, "{}", rows.plain())?;
        Ok(())
    }

    async fn pick_and_toggle_main(&mut self) -> Result<()> {
        if let Some(name) = self.pick_habit("Which habit is your main one?").await? {
            let status = self.tracker.toggle_main_habit_status(&name).await;
            self.show(&status)?;
        }
        Ok(())
    }

    async fn pick_and_delete(&mut self) -> Result<()> {
        if let Some(name) = self.pick_habit("Which habit should be deleted?").await? {
            let status = self.tracker.delete_habit_status(&name).await;
            self.show(&status)?;
        }
        Ok(())
    }

    /// Lists habits and resolves one numbered choice.
    async fn pick_habit(&mut self, question: &str) -> Result<Option<HabitName>> {
        if !self.list_habits(question).await? {
            return Ok(None);
        }
        let Some(choice) = self.prompt("Enter number: ")? else {
            return Ok(None);
        };

        match self.tracker.habit_name_at(&MenuChoice::new(choice)).await {
            Ok(name) => Ok(Some(HabitName::new(name))),
            Err(e) => {
                self.show(&OperationStatus::failure(e.to_string()))?;
                Ok(None)
            }
        }
    }

    /// Prints the numbered habit list. Returns false when there is nothing
    /// to choose from.
    async fn list_habits(&mut self, question: &str) -> Result<bool> {
        let rows: HabitRows = self.tracker.habit_rows().await?;
        if rows.is_empty() {
            write!(self.output, "{rows}")?;
            return Ok(false);
        }

        writeln!(self.output, "\n{question}")?;
        for (position, row) in rows.iter().enumerate() {
            writeln!(self.output, "{}) {} {}", position + 1, row.name_title, row.history)?;
        }
        Ok(true)
    }

    fn show(&mut self, status: &OperationStatus) -> Result<()> {
        writeln!(self.output, "{}", status.message)?;
        Ok(())
    }

    /// Writes `text` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
