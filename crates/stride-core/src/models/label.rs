use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ACTIVITY_NAMES;

/// Integer class output of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(u32);

impl Label {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Activity name for labels the reference model was trained on.
    pub fn activity_name(&self) -> Option<&'static str> {
        ACTIVITY_NAMES.get(self.0 as usize).copied()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
