pub mod export;
pub mod game;
pub mod patterns;
pub mod render;
pub mod terminal;
