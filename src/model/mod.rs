pub mod briefing;
pub mod constants;
pub mod dispatch;
pub mod event_result;
pub mod game_over;
pub mod game_state;
pub mod minister;
pub mod pmq;
pub mod political_event;
pub mod stats;
