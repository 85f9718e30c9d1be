//! Home page — recently finished games from the catalog.

use leptos::prelude::*;

use crate::components::game_card::GameCard;

/// Landing page showing the games with a completion date.
#[component]
pub fn HomePage() -> impl IntoView {
    let finished = LocalResource::new(|| async {
        crate::net::games::get_finished_games()
            .await
            .map_err(|e| e.to_string())
    });

    view! {
        <div class="home-page">
            <h1>"Gamelog"</h1>
            <h2>"Recently finished"</h2>
            <Suspense fallback=move || view! { <p>"Loading games..."</p> }>
                {move || {
                    finished
                        .get()
                        .map(|result| match result {
                            Ok(games) => {
                                view! {
                                    <div class="home-page__cards">
                                        {games
                                            .into_iter()
                                            .map(|game| view! { <GameCard game=game/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => view! { <p class="error">{err}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
