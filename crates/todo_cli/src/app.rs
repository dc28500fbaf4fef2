//! Interactive console loop.
//!
//! # Responsibility
//! - Prompt for menu choices and field values.
//! - Route commands to `TaskService`.
//! - Surface task errors as `Error: <message>` and keep the loop running.
//!
//! # Invariants
//! - Task errors never end the session; only `0` or end of input does.
//! - I/O failures on the console streams are returned to the caller.

use log::{info, warn};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use todo_core::{
    is_blank, parse_task_id, present_error, sanitize_input, validation::normalize_title, Task,
    TaskError, TaskRepository, TaskService, TaskValidationError,
};

const RULE_WIDTH: usize = 50;

#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("end of input")]
    EndOfInput,
}

impl From<TaskValidationError> for CommandError {
    fn from(value: TaskValidationError) -> Self {
        Self::Task(value.into())
    }
}

type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    MarkComplete,
    MarkIncomplete,
    Exit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::MarkComplete),
            "6" => Some(Self::MarkIncomplete),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Console session over arbitrary input/output streams.
pub struct App<R: TaskRepository, I: BufRead, W: Write> {
    service: TaskService<R>,
    input: I,
    output: W,
}

impl<R: TaskRepository, I: BufRead, W: Write> App<R, I, W> {
    pub fn new(service: TaskService<R>, input: I, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Todo Application!")?;

        loop {
            self.display_menu()?;
            let Some(raw) = self.read_line("Enter your choice (0-6): ")? else {
                writeln!(self.output, "\nExiting...")?;
                break;
            };

            let result = match MenuChoice::parse(&raw) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => self.dispatch(choice),
                None => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 0 and 6."
                    )?;
                    continue;
                }
            };

            match result {
                Ok(()) => {}
                Err(CommandError::Task(err)) => {
                    warn!(
                        "event=command_failed module=cli status=error error_code={}",
                        err.code()
                    );
                    writeln!(self.output, "{}", present_error(&err))?;
                }
                Err(CommandError::EndOfInput) => {
                    writeln!(self.output, "\nExiting...")?;
                    break;
                }
                Err(CommandError::Io(err)) => return Err(err),
            }
        }

        writeln!(
            self.output,
            "Thank you for using the Todo Application. Goodbye!"
        )?;
        self.output.flush()
    }

    /// Consumes the session and returns the service.
    pub fn into_service(self) -> TaskService<R> {
        self.service
    }

    fn dispatch(&mut self, choice: MenuChoice) -> CommandResult {
        info!("event=command module=cli status=start command={choice:?}");
        match choice {
            MenuChoice::Add => self.add_task(),
            MenuChoice::View => self.view_all_tasks(),
            MenuChoice::Update => self.update_task(),
            MenuChoice::Delete => self.delete_task(),
            MenuChoice::MarkComplete => self.mark_task(true),
            MenuChoice::MarkIncomplete => self.mark_task(false),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "TODO APPLICATION")?;
        writeln!(self.output, "{rule}")?;
        for line in [
            "1. Add Task",
            "2. View All Tasks",
            "3. Update Task",
            "4. Delete Task",
            "5. Mark Task Complete",
            "6. Mark Task Incomplete",
            "0. Exit",
        ] {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "{rule}")
    }

    fn add_task(&mut self) -> CommandResult {
        writeln!(self.output, "\n--- Add New Task ---")?;
        let title = self.prompt("Enter task title: ")?;
        // Fail before asking for the description.
        normalize_title(&title)?;
        let description = sanitize_input(&self.prompt("Enter task description (optional): ")?);

        let task = self.service.add_task(&title, &description)?;
        writeln!(self.output, "Task added successfully! ID: {}", task.id())?;
        Ok(())
    }

    fn view_all_tasks(&mut self) -> CommandResult {
        writeln!(self.output, "\n--- All Tasks ---")?;
        let tasks = self.service.list_tasks()?;
        if tasks.is_empty() {
            writeln!(self.output, "No tasks found.")?;
            return Ok(());
        }
        for task in tasks {
            writeln!(self.output, "{task}")?;
        }
        Ok(())
    }

    fn update_task(&mut self) -> CommandResult {
        writeln!(self.output, "\n--- Update Task ---")?;
        let task = self.prompt_existing_task("Enter task ID to update: ")?;
        writeln!(
            self.output,
            "Current task: [{}] {}",
            task.status_marker(),
            task.title()
        )?;

        let new_title = self.prompt_optional(&format!(
            "Enter new title (current: '{}', press Enter to keep current): ",
            task.title()
        ))?;
        let new_description = self.prompt_optional(&format!(
            "Enter new description (current: '{}', press Enter to keep current): ",
            task.description()
        ))?;

        let new_title = new_title.filter(|value| value != task.title());
        let new_description = new_description.filter(|value| value != task.description());

        self.service
            .update_task(task.id(), new_title.as_deref(), new_description.as_deref())?;
        writeln!(self.output, "Task updated successfully!")?;
        Ok(())
    }

    fn delete_task(&mut self) -> CommandResult {
        writeln!(self.output, "\n--- Delete Task ---")?;
        let task = self.prompt_existing_task("Enter task ID to delete: ")?;
        writeln!(
            self.output,
            "Task to delete: [{}] {}",
            task.status_marker(),
            task.title()
        )?;

        let confirm = self.prompt("Are you sure you want to delete this task? (y/N): ")?;
        if matches!(sanitize_input(&confirm).to_lowercase().as_str(), "y" | "yes") {
            self.service.delete_task(task.id())?;
            writeln!(self.output, "Task deleted successfully!")?;
        } else {
            writeln!(self.output, "Delete operation cancelled.")?;
        }
        Ok(())
    }

    fn mark_task(&mut self, completed: bool) -> CommandResult {
        let label = if completed { "complete" } else { "incomplete" };
        writeln!(self.output, "\n--- Mark Task {} ---", capitalize(label))?;
        let task = self.prompt_existing_task(&format!("Enter task ID to mark {label}: "))?;

        let task = self.service.set_completed(task.id(), completed)?;
        writeln!(self.output, "Task '{}' marked as {label}!", task.title())?;
        Ok(())
    }

    /// Reads an ID, parses it, and checks the task exists.
    fn prompt_existing_task(&mut self, message: &str) -> Result<Task, CommandError> {
        let raw = self.prompt(message)?;
        let requested = parse_task_id(&raw)?;
        Ok(self.service.resolve_task(&requested)?)
    }

    /// Blank input means "keep current".
    fn prompt_optional(&mut self, message: &str) -> Result<Option<String>, CommandError> {
        let raw = self.prompt(message)?;
        if is_blank(&raw) {
            return Ok(None);
        }
        Ok(Some(sanitize_input(&raw)))
    }

    fn prompt(&mut self, message: &str) -> Result<String, CommandError> {
        self.read_line(message)?.ok_or(CommandError::EndOfInput)
    }

    /// Writes a prompt and reads one line without its terminator.
    ///
    /// Returns `None` at end of input. Bytes that are not UTF-8 become
    /// U+FFFD so a mistyped line is handled like any other input.
    fn read_line(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
