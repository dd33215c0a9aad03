/// Lowest valid month number of a budget record.
pub const MIN_MONTH: i32 = 1;

/// Highest valid month number of a budget record.
pub const MAX_MONTH: i32 = 12;
