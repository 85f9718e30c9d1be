//! HTTP client wrapper for the `games` resource family.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::ServerSide`] since the catalog is only
//! fetched from the browser.
//!
//! Errors are not classified or retried here; any transport failure or
//! non-2xx status surfaces to the caller as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use super::error::ApiError;
use super::types::{Game, GameCollection, GameFilters};

/// Base URL of the API host, fixed at compile time.
///
/// Empty when `GAMELOG_ROOT_API` is unset, which makes every constructed
/// URL same-origin relative.
#[must_use]
pub fn root_api() -> &'static str {
    option_env!("GAMELOG_ROOT_API").unwrap_or("")
}

/// Fetch a filtered, paginated page of games from `GET /api/games`.
///
/// Filters are passed through verbatim as query parameters.
///
/// # Errors
///
/// Propagates transport failures and non-2xx statuses unchanged.
pub async fn get_games(filters: &GameFilters) -> Result<GameCollection, ApiError> {
    fetch_collection(&filters.to_query()).await
}

/// Fetch the games flagged as searched (the wishlist).
///
/// # Errors
///
/// Propagates transport failures and non-2xx statuses unchanged.
pub async fn get_searched_games() -> Result<Vec<Game>, ApiError> {
    let filters = GameFilters { is_searched: Some(true), ..GameFilters::default() };
    Ok(fetch_collection(&filters.to_query()).await?.member)
}

/// Fetch the games with a non-null completion timestamp.
///
/// # Errors
///
/// Propagates transport failures and non-2xx statuses unchanged.
pub async fn get_finished_games() -> Result<Vec<Game>, ApiError> {
    let filters = GameFilters { finished_exists: Some(true), ..GameFilters::default() };
    Ok(fetch_collection(&filters.to_query()).await?.member)
}

/// Fetch a single game by id from `GET /api/games/{id}`.
///
/// # Errors
///
/// Propagates transport failures and non-2xx statuses unchanged.
pub async fn get_game(id: u32) -> Result<Game, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/games/{id}", root_api());
        let resp = gloo_net::http::Request::get(&url).send().await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.json::<Game>().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::ServerSide)
    }
}

/// Search games by name: merges a name filter into the general fetch.
///
/// # Errors
///
/// Propagates transport failures and non-2xx statuses unchanged.
pub async fn search_games(query: &str, filters: GameFilters) -> Result<GameCollection, ApiError> {
    get_games(&filters.with_name(query)).await
}

/// Direct URL of a game's cover image. No request is made.
#[must_use]
pub fn game_cover_url(game_id: u32) -> String {
    format!("{}/game/{game_id}/cover", root_api())
}

/// Direct URL of a game's picture image. No request is made.
#[must_use]
pub fn game_picture_url(game_id: u32) -> String {
    format!("{}/game/{game_id}/picture", root_api())
}

#[cfg(feature = "hydrate")]
async fn fetch_collection(params: &[(String, String)]) -> Result<GameCollection, ApiError> {
    let url = format!("{}/api/games", root_api());
    let resp = gloo_net::http::Request::get(&url)
        .query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<GameCollection>().await?)
}

#[cfg(not(feature = "hydrate"))]
async fn fetch_collection(params: &[(String, String)]) -> Result<GameCollection, ApiError> {
    let _ = params;
    Err(ApiError::ServerSide)
}
