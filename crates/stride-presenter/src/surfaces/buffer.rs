use std::collections::HashMap;

use stride_core::traits::{IRenderSurface, Region};

/// In-memory surface that keeps the current content of each region and the
/// full write history.
#[derive(Debug, Default, Clone)]
pub struct BufferSurface {
    regions: HashMap<Region, String>,
    history: Vec<(Region, String)>,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of `region`, if it was ever written.
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Every write in order.
    pub fn history(&self) -> &[(Region, String)] {
        &self.history
    }

    /// Number of writes to `region`.
    pub fn writes_to(&self, region: Region) -> usize {
        self.history.iter().filter(|(r, _)| *r == region).count()
    }
}

impl IRenderSurface for BufferSurface {
    fn write_region(&mut self, region: Region, content: &str) {
        self.regions.insert(region, content.to_string());
        self.history.push((region, content.to_string()));
    }
}
