pub mod engine;
pub mod protocol;
pub mod session;
pub mod apply_event;
pub mod dispatch;
pub mod pmq;

pub mod narrative;
pub mod prompt_builder;
pub mod llm_client;
pub mod narrative_parser;
