pub mod pay;
pub mod punch;
pub mod session;
pub mod tracker_state;
