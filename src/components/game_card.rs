//! Reusable card component for games in list pages.

use leptos::prelude::*;

use crate::net::games::game_cover_url;
use crate::net::types::Game;
use crate::routes::article_path;

/// A clickable card linking to a game's article page.
#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    let href = article_path(&game.slug, game.id);
    let cover = game_cover_url(game.id);

    view! {
        <a class="game-card" href=href>
            <img class="game-card__cover" src=cover alt=game.name.clone()/>
            <span class="game-card__name">{game.name}</span>
            <span class="game-card__platform">{game.platform.name}</span>
        </a>
    }
}
