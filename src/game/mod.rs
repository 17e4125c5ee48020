// Game modules: characters, game mode

pub mod characters;
pub mod game_mode;

pub use game_mode::GameMode;
