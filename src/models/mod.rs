pub mod origin;
pub mod period;
pub mod punch;
pub mod punch_kind;
pub mod schedule;
