pub mod config;
pub mod player;
pub mod repositories;
pub mod storage;
