// Bounds on the bootstrap and on the reported results
pub const MAX_REPEATING_SOURCE_LEN: usize = 5;
pub const MIN_RESULT_VALUE: f64 = 1.0;
pub const MAX_RESULT_VALUE: f64 = 100.0;
