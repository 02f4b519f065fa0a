use std::fmt;

/// The two named output regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Status line for the model-load duration.
    LoadTime,
    /// Prediction table or failure message.
    Output,
}

impl Region {
    pub fn id(&self) -> &'static str {
        match self {
            Self::LoadTime => "load-time",
            Self::Output => "out",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where rendered views end up. Writing replaces the region's content.
pub trait IRenderSurface {
    fn write_region(&mut self, region: Region, content: &str);
}

impl<S: IRenderSurface + ?Sized> IRenderSurface for Box<S> {
    fn write_region(&mut self, region: Region, content: &str) {
        (**self).write_region(region, content)
    }
}
