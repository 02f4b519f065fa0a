pub mod buffer;
pub mod terminal;

pub use buffer::BufferSurface;
pub use terminal::TerminalSurface;
