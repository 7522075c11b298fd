use crate::domain::model::Stability;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const NUMERIC_INPUT_ERROR: &str = "Invalid input! Please enter a numeric value.";
pub const STABILITY_INPUT_ERROR: &str = "Invalid input! Please enter a number between 0 and 100.";

/// Line-oriented prompts over any reader/writer pair.
///
/// Every `read_*` method returns `Ok(None)` once the input is exhausted, and
/// keeps asking until it gets a usable answer otherwise.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and fail parsing like any bad entry.
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).trim().to_string()))
    }

    /// A number in `1..=max`.
    pub fn read_menu_choice(&mut self, prompt: &str, max: usize) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(value) if (1..=max).contains(&value) => return Ok(Some(value)),
                Ok(value) => {
                    tracing::debug!(value, max, "Menu choice out of range");
                    self.say(format!(
                        "Invalid input! Please enter a number between 1 and {}.",
                        max
                    ))?;
                }
                Err(_) => {
                    tracing::debug!(input = %line, "Menu choice is not a number");
                    self.say(NUMERIC_INPUT_ERROR)?;
                }
            }
        }
    }

    pub fn read_stability(&mut self, prompt: &str) -> Result<Option<Stability>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            let Ok(value) = line.parse::<f64>() else {
                tracing::debug!(input = %line, "Stability is not a number");
                self.say(NUMERIC_INPUT_ERROR)?;
                continue;
            };
            match Stability::new(value) {
                Ok(stability) => return Ok(Some(stability)),
                Err(e) => {
                    tracing::debug!("Rejected stability input: {}", e);
                    self.say(STABILITY_INPUT_ERROR)?;
                }
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
