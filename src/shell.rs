//! Line-oriented interactive shell
//!
//! Reads menu choices and field values from a text input stream and drives
//! the TaskManager, printing results and errors to an output stream. Generic
//! over the streams so whole sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use crate::schedule::{ScheduleError, TaskManager, TaskPatch, TimeField};

/// Run the shell on stdin/stdout until Exit (or end of input).
pub fn run(manager: TaskManager) -> io::Result<()> {
    let stdin = io::stdin();
    Shell::new(stdin.lock(), io::stdout(), manager).run()
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    manager: TaskManager,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, manager: TaskManager) -> Self {
        Self {
            input,
            output,
            manager,
        }
    }

    /// Tear down the shell, handing back the output sink and the manager.
    pub fn into_parts(self) -> (W, TaskManager) {
        (self.output, self.manager)
    }

    /// Menu loop. Returns on Exit or when the input stream ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.add()?,
                "2" => self.remove()?,
                "3" => self.view()?,
                "4" => self.update()?,
                "5" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and 5."
                )?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Astronaut Schedule Manager ---")?;
        writeln!(self.output, "1. Add Task")?;
        writeln!(self.output, "2. Remove Task")?;
        writeln!(self.output, "3. View Tasks")?;
        writeln!(self.output, "4. Update Task")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Enter your choice (1-5): ")?;
        self.output.flush()
    }

    /// Read one line, stripping the trailing newline. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(());
        };
        let Some(start_time) = self.prompt("Enter start time (YYYY-MM-DD HH:MM): ")? else {
            return Ok(());
        };
        let Some(end_time) = self.prompt("Enter end time (YYYY-MM-DD HH:MM): ")? else {
            return Ok(());
        };
        let Some(priority) = self.prompt("Enter priority (High/Medium/Low): ")? else {
            return Ok(());
        };

        if self
            .manager
            .add_task(&description, &start_time, &end_time, &priority)
            .is_err()
        {
            writeln!(self.output, "Invalid date format. Please use YYYY-MM-DD HH:MM.")?;
        }
        Ok(())
    }

    fn remove(&mut self) -> io::Result<()> {
        let Some(description) = self.prompt("Enter task description to remove: ")? else {
            return Ok(());
        };
        // Zero matches is silent, same as a successful removal
        self.manager.remove_task(&description);
        Ok(())
    }

    fn view(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.manager.render_tasks())
    }

    fn update(&mut self) -> io::Result<()> {
        let Some(description) = self.prompt("Enter task description to update: ")? else {
            return Ok(());
        };
        let Some(new_description) =
            self.prompt("Enter new description (leave blank for no change): ")?
        else {
            return Ok(());
        };
        let Some(new_start) =
            self.prompt("Enter new start time (YYYY-MM-DD HH:MM, leave blank for no change): ")?
        else {
            return Ok(());
        };
        let Some(new_end) =
            self.prompt("Enter new end time (YYYY-MM-DD HH:MM, leave blank for no change): ")?
        else {
            return Ok(());
        };
        let Some(new_priority) =
            self.prompt("Enter new priority (High/Medium/Low, leave blank for no change): ")?
        else {
            return Ok(());
        };

        let patch = TaskPatch {
            description: non_empty(new_description),
            start_time: non_empty(new_start),
            end_time: non_empty(new_end),
            priority: non_empty(new_priority),
        };

        match self.manager.update_task(&description, patch) {
            Ok(rejected) => {
                for err in rejected {
                    match err {
                        ScheduleError::InvalidTimestamp {
                            field: TimeField::Start,
                            ..
                        } => writeln!(self.output, "Invalid date format for start time.")?,
                        ScheduleError::InvalidTimestamp {
                            field: TimeField::End,
                            ..
                        } => writeln!(self.output, "Invalid date format for end time.")?,
                        other => writeln!(self.output, "{other}")?,
                    }
                }
            }
            Err(ScheduleError::TaskNotFound(_)) => {
                writeln!(self.output, "Task not found.")?;
            }
            Err(other) => writeln!(self.output, "{other}")?,
        }
        Ok(())
    }
}

/// An empty input line means "leave this field unchanged".
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
