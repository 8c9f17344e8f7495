pub mod chronometer;
pub mod clock;
pub mod ledger;
pub mod log;
pub mod scheduler;
pub mod session;
pub mod state_machine;
pub mod timers;
