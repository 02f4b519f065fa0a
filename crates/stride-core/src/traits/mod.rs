pub mod activity_model;
pub mod random_source;
pub mod render_surface;

pub use activity_model::IActivityModel;
pub use random_source::IRandomSource;
pub use render_surface::{IRenderSurface, Region};
