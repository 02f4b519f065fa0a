//! Line commands read from stdin. Each stands in for a page trigger.

use std::str::FromStr;

use stride_controller::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward a trigger to the controller.
    Trigger(UiEvent),
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown command `{0}` (try `help`)")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "load" | "l" => Ok(Self::Trigger(UiEvent::LoadModel)),
            "run" | "r" => Ok(Self::Trigger(UiEvent::RunPrediction)),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  load, l   load the activity model
  run, r    synthesize a feature vector and classify it
  help, h   show this message
  quit, q   exit";
