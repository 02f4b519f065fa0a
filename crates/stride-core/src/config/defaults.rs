// Single source of truth for all default values.

// --- Model ---
pub const DEFAULT_INTRA_THREADS: usize = 2;
pub const DEFAULT_LABEL_COUNT: u32 = 5;

// --- Presentation ---
pub const DEFAULT_PRECISION: usize = 4;
pub const MAX_PRECISION: usize = 10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
