use minesweeper_client::{DEFAULT_BASE_URL, Game, MinesweeperClient, NewGame};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let client = MinesweeperClient::new(&base_url)?;

    // Create a new game
    let params = NewGame::default();
    let created = client
        .new_game(params.rows, params.columns, params.mines)
        .await?;
    let game = Game::from_value(created)?;
    println!(
        "Created game {}: {}x{} with {} mines",
        game.id, game.rows, game.columns, game.mines
    );

    let games = client.list().await?;
    println!(
        "Service knows {} game(s)",
        games.as_array().map_or(0, Vec::len)
    );

    let fetched = Game::from_value(client.retrieve(game.id.clone()).await?)?;
    println!("Retrieved game {}, over: {}", fetched.id, fetched.is_over);

    // Flag a cell, then reveal another
    let flagged = Game::from_value(client.flag_cell(game.id.clone(), 1, 1, true).await?)?;
    println!("Flagged (1, 1), board: {}", flagged.board);

    let revealed = Game::from_value(client.reveal_cell(game.id, 0, 0).await?)?;
    println!("Revealed (0, 0), board: {}", revealed.board);
    println!(
        "Game state - Won: {}, Lost: {}",
        revealed.was_won, revealed.was_lost
    );

    Ok(())
}
