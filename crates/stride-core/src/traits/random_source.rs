/// Source of uniform draws for feature synthesis.
pub trait IRandomSource {
    /// Draw a value uniformly from the inclusive range `[low, high]`.
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

impl<R: IRandomSource + ?Sized> IRandomSource for Box<R> {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        (**self).uniform(low, high)
    }
}
