use std::fmt;

/// A user trigger on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The "load model" button.
    LoadModel,
    /// The "run prediction" button.
    RunPrediction,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadModel => "load_model",
            Self::RunPrediction => "run_prediction",
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerPhase {
    #[default]
    Idle,
    LoadingModel,
    Ready,
    Predicting,
}

impl ControllerPhase {
    /// Whether an action is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::LoadingModel | Self::Predicting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::LoadingModel => "loading_model",
            Self::Ready => "ready",
            Self::Predicting => "predicting",
        }
    }
}

impl fmt::Display for ControllerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The action ran and its result was rendered.
    Completed,
    /// The action failed and the error was rendered.
    Failed,
    /// The controller was busy; nothing ran.
    Rejected { phase: ControllerPhase },
}
