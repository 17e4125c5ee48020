// Engine modules: host capabilities, input, tick clock

pub mod game_loop;
pub mod host;
pub mod input;
