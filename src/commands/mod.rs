pub mod game_cmds;
pub mod mod_cmds;

#[cfg(test)]
#[path = "tests/mod_cmds_tests.rs"]
mod mod_cmds_tests;

#[cfg(test)]
#[path = "tests/game_cmds_tests.rs"]
mod game_cmds_tests;
