pub mod error;
pub mod game;
pub mod history;
pub mod model;
pub mod rules;

pub use error::EngineError;
