/// Number of values in a feature vector.
pub const FEATURE_COUNT: usize = 6;

/// Feature names in vector order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["mean_x", "mean_y", "mean_z", "std_x", "std_y", "std_z"];

/// Inclusive range for the per-axis mean components.
pub const MEAN_RANGE: (f32, f32) = (-1.5, 1.5);

/// Inclusive range for the per-axis standard deviation components.
pub const STD_RANGE: (f32, f32) = (0.0, 2.0);

/// Activity names of the reference model, indexed by label.
pub const ACTIVITY_NAMES: [&str; 5] = [
    "sit",
    "walk-with-hand",
    "walking-in-pocket",
    "climb-up",
    "four-legged-walking",
];

/// Name of the project-level config file.
pub const CONFIG_FILENAME: &str = "stride.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "STRIDE_LOG";

/// Cap on retained latency samples per operation.
pub const MAX_LATENCY_SAMPLES: usize = 10_000;

/// Operation names used for timing samples.
pub mod operations {
    pub const LOAD_MODEL: &str = "load_model";
    pub const PREDICT: &str = "predict";
}
