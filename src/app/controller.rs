// src/app/controller.rs
// Session state machine: last log, optional direct execution, menu loop

use super::args::{DirectArgs, StartupArgs};
use crate::calc::{Operator, evaluate, format_number};
use crate::db::{OperationRecord, OperationStore};
use crate::error::{CalcError, Result};
use crate::history::HistoryService;
use crate::log_id::LogIdGenerator;
use crate::ui::{Console, PAUSE_PROMPT, RETRY_PROMPT};
use tracing::{debug, info, warn};

const MENU_PAUSE_PROMPT: &str = "Press ENTER to open the menu...";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    ListAll,
    ListFiltered,
    Exit,
    /// A number outside 1-4
    Invalid(i32),
}

impl MenuChoice {
    /// Map the raw selection. Missing or non-numeric input exits the menu,
    /// matching how earlier releases behaved.
    pub fn from_selection(selection: Option<i32>) -> Self {
        match selection {
            Some(1) => MenuChoice::Calculate,
            Some(2) => MenuChoice::ListAll,
            Some(3) => MenuChoice::ListFiltered,
            Some(4) | None => MenuChoice::Exit,
            Some(other) => MenuChoice::Invalid(other),
        }
    }
}

/// Drives one interactive session
pub struct Controller<C, S, G> {
    console: C,
    history: HistoryService<S>,
    ids: G,
}

impl<C: Console, S: OperationStore, G: LogIdGenerator> Controller<C, S, G> {
    pub fn new(console: C, store: S, ids: G) -> Self {
        Self {
            console,
            history: HistoryService::new(store),
            ids,
        }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run the session to completion.
    ///
    /// Fails only on console I/O errors or when the log cannot be read at
    /// startup; every other error is reported and the session continues.
    pub fn run(&mut self, startup: &StartupArgs) -> Result<()> {
        self.show_last_log()?;

        if let Some(direct) = &startup.direct {
            self.execute_direct(direct)?;
        }

        self.console.pause(MENU_PAUSE_PROMPT)?;
        self.console.clear_screen()?;

        self.menu_loop()
    }

    fn show_last_log(&mut self) -> Result<()> {
        match self.history.latest()? {
            Some(record) => self
                .console
                .show(&format!("Last recorded operation:\n {record}"))?,
            None => self.console.show("No previous operation recorded.")?,
        }
        Ok(())
    }

    fn execute_direct(&mut self, direct: &DirectArgs) -> Result<()> {
        match direct.parse() {
            Ok((operand1, operator, operand2)) => {
                info!(operand1, %operator, operand2, "Direct execution");
                self.perform_calculation(operand1, operator, operand2)
            }
            Err(e) => {
                warn!(?direct, "Direct execution skipped");
                self.report(e)
            }
        }
    }

    /// Evaluate, show and record one operation
    fn perform_calculation(&mut self, operand1: f64, operator: Operator, operand2: f64) -> Result<()> {
        let calculation = match evaluate(operand1, operator, operand2) {
            Ok(calculation) => calculation,
            Err(e) => return self.report(e),
        };
        self.console.show(&calculation.to_string())?;

        let id = self.ids.next_id();
        let result = format_number(calculation.result);
        match self.history.record(&id, operand1, operator, operand2, &result) {
            Ok(()) => {
                debug!(id = %id, result = %result, "Operation recorded");
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.console.show("- - - CALCULATOR - - -")?;
            self.console.show("-1. Perform an operation")?;
            self.console.show("-2. Show full history")?;
            self.console.show("-3. Filter history by operator")?;
            self.console.show("-4. Exit")?;

            let selection = self.console.prompt_int("Select an option: ")?;
            let choice = MenuChoice::from_selection(selection);
            debug!(?selection, ?choice, "Menu selection");

            match choice {
                MenuChoice::Calculate => self.calculation_loop()?,
                MenuChoice::ListAll => self.show_full_history()?,
                MenuChoice::ListFiltered => self.show_filtered_history()?,
                MenuChoice::Invalid(_) => self.console.show_error("Invalid option!")?,
                MenuChoice::Exit => {
                    self.console.show("Exiting...")?;
                    return Ok(());
                }
            }

            self.console.pause(PAUSE_PROMPT)?;
        }
    }

    fn calculation_loop(&mut self) -> Result<()> {
        loop {
            if let Err(e) = self.read_and_calculate() {
                self.report(e)?;
            }
            if !self.console.confirm(RETRY_PROMPT)? {
                break;
            }
        }
        self.console.clear_screen()?;
        Ok(())
    }

    /// One pass of the calculate submenu. Input errors come back as recoverable errors.
    fn read_and_calculate(&mut self) -> Result<()> {
        let operand1 = self
            .console
            .prompt_double("Enter the first number: ")?
            .ok_or_else(|| CalcError::InvalidOperand("first number".into()))?;
        let symbol = self.console.prompt_line("Enter the operator (+, -, x, /): ")?;
        let operator = Operator::parse_token(&symbol)?;
        let operand2 = self
            .console
            .prompt_double("Enter the second number: ")?
            .ok_or_else(|| CalcError::InvalidOperand("second number".into()))?;

        self.perform_calculation(operand1, operator, operand2)
    }

    fn show_full_history(&mut self) -> Result<()> {
        self.console.clear_screen()?;
        match self.history.list_all() {
            Ok(records) => self.show_operations(&records),
            Err(e) => self.report(e),
        }
    }

    fn show_filtered_history(&mut self) -> Result<()> {
        self.console.clear_screen()?;
        let input = self.console.prompt_line(&format!(
            "Enter the operator to filter by ({}): ",
            Operator::help_text()
        ))?;

        let outcome = match input.chars().next() {
            Some(symbol) => self.history.list_by_operator(symbol),
            None => Err(CalcError::InvalidFilterOperator(String::new())),
        };
        match outcome {
            Ok(records) => self.show_operations(&records),
            Err(e) => self.report(e),
        }
    }

    fn show_operations(&mut self, records: &[OperationRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(self.console.show("No operations recorded.")?);
        }
        for record in records {
            self.console.show(&record.to_string())?;
        }
        Ok(())
    }

    /// Show a recoverable error to the user; I/O failures are passed through.
    fn report(&mut self, err: CalcError) -> Result<()> {
        if let CalcError::Io(_) = err {
            return Err(err);
        }
        if err.is_recoverable() {
            debug!(error = %err, "Recoverable error");
        } else {
            warn!(error = %err, "Action failed");
        }
        self.console.show_error(&user_message(&err))?;
        Ok(())
    }
}

/// Console wording for an error
fn user_message(err: &CalcError) -> String {
    match err {
        CalcError::DivisionByZero => "Division by zero is not allowed!".to_string(),
        CalcError::InvalidOperand(what) => format!("The {what} is not valid!"),
        CalcError::UnrecognizedOperator(_) => "The operator is not valid!".to_string(),
        CalcError::InvalidDirectArguments => {
            "Error in the arguments: operation not valid.".to_string()
        }
        CalcError::InvalidFilterOperator(symbol) if symbol.is_empty() => {
            "No operator given to filter by.".to_string()
        }
        CalcError::InvalidFilterOperator(symbol) => {
            format!("'{symbol}' is not an operator to filter by.")
        }
        CalcError::InvalidOperationRecord(reason) => {
            format!("The operation could not be recorded: {reason}")
        }
        CalcError::Storage(e) => format!("Operation log unavailable: {e}"),
        other => other.to_string(),
    }
}
