//! Article list page with name search over the game catalog.

use leptos::prelude::*;

use crate::components::game_card::GameCard;
use crate::net::types::{GameFilters, SortDirection};

const PAGE_SIZE: u32 = 30;

fn list_filters() -> GameFilters {
    GameFilters {
        items_per_page: Some(PAGE_SIZE),
        order_name: Some(SortDirection::Asc),
        ..GameFilters::default()
    }
}

/// Paginated, searchable list of game articles.
#[component]
pub fn ArticleListPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let page = RwSignal::new(1_u32);

    let games = LocalResource::new(move || {
        let q = query.get();
        let filters = GameFilters { page: Some(page.get()), ..list_filters() };
        async move {
            let result = if q.trim().is_empty() {
                crate::net::games::get_games(&filters).await
            } else {
                crate::net::games::search_games(q.trim(), filters).await
            };
            result.map_err(|e| e.to_string())
        }
    });

    // No further pages while loading, after an error, or past the total.
    let next_disabled = move || {
        games.get().map_or(true, |result| match result {
            Ok(collection) => !collection.has_page_after(page.get(), PAGE_SIZE),
            Err(_) => true,
        })
    };

    view! {
        <div class="article-list-page">
            <h1>"Articles"</h1>
            <input
                class="article-list-page__search"
                type="search"
                placeholder="Search by name"
                prop:value=move || query.get()
                on:input=move |ev| {
                    page.set(1);
                    query.set(event_target_value(&ev));
                }
            />
            <Suspense fallback=move || view! { <p>"Loading articles..."</p> }>
                {move || {
                    games
                        .get()
                        .map(|result| match result {
                            Ok(collection) => {
                                view! {
                                    <p class="article-list-page__count">
                                        {collection.total_items} " games"
                                    </p>
                                    <div class="article-list-page__cards">
                                        {collection
                                            .member
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
            <div class="article-list-page__pager">
                <button
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                    disabled=move || page.get() <= 1
                >
                    "Previous"
                </button>
                <span>{move || page.get()}</span>
                <button on:click=move |_| page.update(|p| *p += 1) disabled=next_disabled>
                    "Next"
                </button>
            </div>
        </div>
    }
}
