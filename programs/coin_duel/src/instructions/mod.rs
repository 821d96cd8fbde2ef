pub mod auto_resolve;
pub mod cancel_game;
pub mod create_game;
pub mod initialize;
pub mod join_game;
pub mod shared;
pub mod update_config;

pub use auto_resolve::*;
pub use cancel_game::*;
pub use create_game::*;
pub use initialize::*;
pub use join_game::*;
pub use update_config::*;
