use super::json_writer::JsonWriter;
use crate::application::dispatcher::Dispatcher;
use crate::domain::menu::{Action, MenuVariant};
use crate::domain::payload::SearchCriteria;
use crate::error::{ConsoleError, Result};
use log::{debug, warn};
use serde_json::Value;
use std::io::{BufRead, Write};

/// The interactive menu loop.
///
/// Reads one choice per line, runs the matching action and prints the result.
/// Operation failures are reported as a single `Error:` line and the loop
/// carries on; only terminal I/O failures end it early. End of input and the
/// quit choice both end it cleanly.
pub struct ConsoleSession<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self, dispatcher: &Dispatcher) -> Result<()> {
        let variant = dispatcher.variant();
        loop {
            self.write_menu(variant)?;
            let Some(choice) = self.ask("Choice")? else {
                break;
            };
            let Some(action) = variant.action_for(&choice) else {
                debug!("ignoring unrecognised choice {choice:?}");
                continue;
            };
            if action == Action::Quit {
                break;
            }

            match self.perform(dispatcher, action).await {
                Ok(Some(value)) => JsonWriter::new(&mut self.output).write_value(&value)?,
                Ok(None) => {}
                Err(ConsoleError::IoError(e)) => return Err(e.into()),
                Err(e) => {
                    warn!("{action} failed: {e}");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }
        Ok(())
    }

    async fn perform(&mut self, dispatcher: &Dispatcher, action: Action) -> Result<Option<Value>> {
        match action {
            Action::ListPayments => dispatcher.list_payments().await.map(Some),
            Action::GetPayment => {
                let id = self.require("Payment id")?;
                dispatcher.get_payment(&id).await.map(Some)
            }
            Action::CreatePayment => dispatcher.create_payment().await.map(Some),
            Action::CancelPayment => {
                let id = self.require("Payment id")?;
                dispatcher.cancel_payment(&id).await.map(Some)
            }
            Action::RefundPayment => {
                let reference = self.require(dispatcher.variant().refund_prompt())?;
                dispatcher.refund_payment(&reference).await?;
                Ok(None)
            }
            Action::SearchPayments => {
                let criteria = self.ask_search_criteria()?;
                dispatcher.search_payments(&criteria).await.map(Some)
            }
            Action::Quit => Ok(None),
        }
    }

    fn write_menu(&mut self, variant: MenuVariant) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Payments console ({variant})")?;
        for (key, action) in variant.entries() {
            writeln!(self.output, "  {key}) {action}")?;
        }
        Ok(())
    }

    /// Prompts and reads one trimmed line; `None` at end of input.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads an identifier that becomes one path segment of the request URL.
    fn require(&mut self, label: &str) -> Result<String> {
        match self.ask(label)? {
            Some(value) if value.is_empty() => Err(ConsoleError::InputError(format!(
                "{label} must not be empty"
            ))),
            Some(value) if !is_path_segment(&value) => Err(ConsoleError::InputError(format!(
                "{label} '{value}' must not contain '/', '?', '#', '..' or whitespace"
            ))),
            Some(value) => Ok(value),
            None => Err(ConsoleError::InputError(format!(
                "input closed while reading {label}"
            ))),
        }
    }

    fn optional(&mut self, label: &str) -> Result<Option<String>> {
        Ok(self
            .ask(&format!("{label} (blank to skip)"))?
            .filter(|value| !value.is_empty()))
    }

    fn ask_search_criteria(&mut self) -> Result<SearchCriteria> {
        let amount = match self.optional("Amount")? {
            Some(raw) => Some(raw.parse::<u32>().map_err(|_| {
                ConsoleError::InputError(format!("amount '{raw}' is not a whole number"))
            })?),
            None => None,
        };
        Ok(SearchCriteria {
            amount,
            application_reference: self.optional("Application reference")?,
            description: self.optional("Description")?,
            payment_reference: self.optional("Payment reference")?,
            created_date: self.optional("Created date")?,
            email: self.optional("Email")?,
        })
    }
}

fn is_path_segment(value: &str) -> bool {
    !value.contains(['/', '?', '#'])
        && !value.contains("..")
        && !value.contains(char::is_whitespace)
}
