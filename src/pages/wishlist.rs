//! Wishlist page — games flagged as searched.

use leptos::prelude::*;

use crate::components::game_card::GameCard;

/// List of the games currently being hunted for.
#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = LocalResource::new(|| async {
        crate::net::games::get_searched_games()
            .await
            .map_err(|e| e.to_string())
    });

    view! {
        <div class="wishlist-page">
            <h1>"Wishlist"</h1>
            <Suspense fallback=move || view! { <p>"Loading wishlist..."</p> }>
                {move || {
                    wishlist
                        .get()
                        .map(|result| match result {
                            Ok(games) if games.is_empty() => {
                                view! { <p>"Nothing on the wishlist right now."</p> }.into_any()
                            }
                            Ok(games) => {
                                view! {
                                    <div class="wishlist-page__cards">
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
