// Numeric acceptance thresholds for table insertion
pub const ROUND_SIGNIFICANT_DIGITS: usize = 14;
pub const MAX_MAGNITUDE: f64 = 10000.0;
pub const MAX_FRACTION_TEXT_LEN: usize = 10;
