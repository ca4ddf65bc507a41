//! Minesweeper Client Library
//!
//! Async client for the minesweeper game service HTTP API. Each call issues a
//! single request and hands back the response body as raw JSON; game rules,
//! board state and validation all live on the service.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use minesweeper_client::{Game, MinesweeperClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let client = MinesweeperClient::new("http://localhost:8000")?;
//!
//!     let created = client.new_game(9, 9, 10).await?;
//!     let game = Game::from_value(created)?;
//!
//!     client.flag_cell(game.id.clone(), 1, 1, true).await?;
//!     let state = Game::from_value(client.reveal_cell(game.id, 0, 0).await?)?;
//!     println!("Game over: {}, Won: {}", state.is_over, state.was_won);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, MinesweeperClient};
pub use error::{Error, Result};

// Re-export common types for convenience
pub use minesweeper_common::{models::*, protocol::*};
pub use serde_json::Value;
