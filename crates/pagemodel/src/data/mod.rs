// Test-data helpers: random field payloads and date/time representations.

pub mod datetime;
pub mod random;
