use crate::models::GameId;

/// Collection resource of the game service, relative to the host root.
pub const COLLECTION_PATH: &str = "api/minesweeper/";

/// Resources exposed by the game service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET` lists games, `POST` creates one.
    Collection,
    Game(GameId),
    RevealCell(GameId),
    FlagCell(GameId),
}

impl Route {
    /// Path of the resource relative to the host root.
    ///
    /// Single games are addressed without a trailing slash; the cell actions
    /// always end with one.
    pub fn path(&self) -> String {
        match self {
            Route::Collection => COLLECTION_PATH.to_owned(),
            Route::Game(id) => format!("{}{}", COLLECTION_PATH, id),
            Route::RevealCell(id) => format!("{}{}/reveal_cell/", COLLECTION_PATH, id),
            Route::FlagCell(id) => format!("{}{}/flag_cell/", COLLECTION_PATH, id),
        }
    }
}
