//! Wall-clock timing around synchronous and asynchronous operations.
//!
//! Durations are reported in fractional milliseconds (`Instant` resolution).
//! The fallible variants record the duration of failed attempts too and hand
//! the original error back inside [`Timed`].

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::time::Instant;

/// Measures elapsed wall-clock time from construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Run `operation` and return its output with the elapsed milliseconds.
pub fn measure<T>(operation: impl FnOnce() -> T) -> (T, f64) {
    let watch = Stopwatch::start();
    let output = operation();
    (output, watch.elapsed_ms())
}

/// Await `operation` and return its output with the elapsed milliseconds.
pub async fn measure_async<F: Future>(operation: F) -> (F::Output, f64) {
    let watch = Stopwatch::start();
    let output = operation.await;
    (output, watch.elapsed_ms())
}

/// Like [`measure`], but a failure carries its duration in a [`Timed`].
pub fn measure_result<T, E>(operation: impl FnOnce() -> Result<T, E>) -> Result<(T, f64), Timed<E>> {
    let (result, duration_ms) = measure(operation);
    split(result, duration_ms)
}

/// Like [`measure_async`], but a failure carries its duration in a [`Timed`].
pub async fn measure_result_async<T, E, F>(operation: F) -> Result<(T, f64), Timed<E>>
where
    F: Future<Output = Result<T, E>>,
{
    let (result, duration_ms) = measure_async(operation).await;
    split(result, duration_ms)
}

fn split<T, E>(result: Result<T, E>, duration_ms: f64) -> Result<(T, f64), Timed<E>> {
    match result {
        Ok(value) => Ok((value, duration_ms)),
        Err(error) => Err(Timed { error, duration_ms }),
    }
}

/// An error from a timed operation, with how long the attempt ran.
#[derive(Debug)]
pub struct Timed<E> {
    pub error: E,
    pub duration_ms: f64,
}

impl<E> Timed<E> {
    /// Drop the duration and return the original error.
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: fmt::Display> fmt::Display for Timed<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (after {:.3} ms)", self.error, self.duration_ms)
    }
}

impl<E: Error + 'static> Error for Timed<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
