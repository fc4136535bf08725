pub mod player;
pub mod speech;
