use minesweeper_common::{
    models::{FlagCell, GameId, NewGame, Pos, RevealCell},
    protocol::Route,
};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::{Error, Result};

/// Address of the game service when none is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// HTTP client for the minesweeper game service API
///
/// Responses are returned as raw JSON. Calls share no state, so a client can
/// be cloned and used from several tasks at once.
#[derive(Clone, Debug)]
pub struct MinesweeperClient {
    client: Client,
    base_url: Url,
}

impl MinesweeperClient {
    /// Create a new client connecting to the specified server URL
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(base_url, Client::new())
    }

    /// Create a client for the service at [`DEFAULT_BASE_URL`]
    pub fn localhost() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Create a client that sends its requests through `client`
    pub fn with_http_client(base_url: &str, client: Client) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        // Without the slash, joining would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a service resource
    pub fn endpoint(&self, route: &Route) -> Result<Url> {
        Ok(self.base_url.join(&route.path())?)
    }

    /// Create a new game and return its descriptor
    pub async fn new_game(&self, rows: usize, columns: usize, mines: usize) -> Result<Value> {
        let body = NewGame {
            rows,
            columns,
            mines,
        };
        self.post(Route::Collection, &body).await
    }

    /// List every game known to the service
    pub async fn list(&self) -> Result<Value> {
        self.get(Route::Collection).await
    }

    /// Fetch a single game
    pub async fn retrieve(&self, game_id: impl Into<GameId>) -> Result<Value> {
        self.get(Route::Game(game_id.into())).await
    }

    /// Reveal the cell at `(x, y)` and return the updated game
    pub async fn reveal_cell(
        &self,
        game_id: impl Into<GameId>,
        x: usize,
        y: usize,
    ) -> Result<Value> {
        let body = RevealCell::from(Pos { x, y });
        self.post(Route::RevealCell(game_id.into()), &body).await
    }

    /// Set or clear the flag on the cell at `(x, y)` and return the updated game
    pub async fn flag_cell(
        &self,
        game_id: impl Into<GameId>,
        x: usize,
        y: usize,
        is_flagged: bool,
    ) -> Result<Value> {
        let body = FlagCell::new(Pos { x, y }, is_flagged);
        self.post(Route::FlagCell(game_id.into()), &body).await
    }

    async fn get(&self, route: Route) -> Result<Value> {
        let url = self.endpoint(&route)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        read_body(response).await
    }

    async fn post<B: Serialize + ?Sized>(&self, route: Route, body: &B) -> Result<Value> {
        let url = self.endpoint(&route)?;
        debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<Value> {
    let status = response.status();
    let url = response.url().clone();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{} responded with {}: {}", url, status, body);
        return Err(Error::Status { status, body });
    }

    debug!("{} responded with {}", url, status);
    Ok(response.json().await?)
}
