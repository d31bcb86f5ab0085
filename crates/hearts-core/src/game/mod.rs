pub mod driver;
pub mod player;
pub mod policy;
pub mod serialization;
pub mod state;

pub use driver::{GameConfig, GameOutcome, opening_state, play_game, play_game_with_seed};
pub use player::Player;
pub use policy::{ActionSummary, FnPolicy, Policy, PolicyContext, from_fn, select_action};
pub use state::{GameState, TrickResolution};
