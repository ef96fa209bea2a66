pub mod activity;
pub mod payout;
pub mod report;

/// Token quantity in the smallest GTT unit.
///
/// Signed so that malformed input (negative budgets or amounts) can be
/// detected and rejected at the component boundary. Text JSON
/// (`serde_json::to_string`) carries the full range, but building a
/// `serde_json::Value` only works for magnitudes that fit in 64 bits.
pub type Balance = i128;

/// Caller-supplied participant identifier, unique within a cycle.
pub type ParticipantId = String;
