pub mod archive;
pub mod config;
pub mod core;
pub mod fs_utils;
pub mod game;
pub mod gameinfo;
pub mod mods;
