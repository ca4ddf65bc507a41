//! Wire types for the minesweeper game service HTTP API.

pub mod models;
pub mod protocol;
