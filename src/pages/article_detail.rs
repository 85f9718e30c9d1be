//! Article detail page for a single game.
//!
//! The path carries both the slug and the numeric id in one segment
//! (`/{slug}-article-a{id}`); only the id is needed for the fetch.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::net::games::{game_cover_url, game_picture_url};
use crate::pages::not_found::NotFoundPage;
use crate::routes::parse_article_path;

/// Detail page — parses the article path and fetches the game by id.
#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let location = use_location();
    let game_id = Memo::new(move |_| {
        let path = location.pathname.get();
        parse_article_path(&path).map(|(_, id)| id)
    });

    view! {
        {move || match game_id.get() {
            Some(id) => view! { <GameArticle id=id/> }.into_any(),
            None => view! { <NotFoundPage/> }.into_any(),
        }}
    }
}

#[component]
fn GameArticle(id: u32) -> impl IntoView {
    let game = LocalResource::new(move || async move {
        crate::net::games::get_game(id).await.map_err(|e| e.to_string())
    });

    view! {
        <Suspense fallback=move || view! { <p>"Loading article..."</p> }>
            {move || {
                game.get()
                    .map(|result| match result {
                        Ok(game) => {
                            let finished = game.finished_at.clone().map(|date| {
                                let times = game.finished_times.unwrap_or(1);
                                format!("Finished {date} ({times}x)")
                            });
                            view! {
                                <article class="game-article">
                                    <Title text=game.name.clone()/>
                                    <img
                                        class="game-article__cover"
                                        src=game_cover_url(game.id)
                                        alt=game.name.clone()
                                    />
                                    <h1>{game.name.clone()}</h1>
                                    <p class="game-article__platform">{game.platform.name.clone()}</p>
                                    {finished.map(|text| view! { <p>{text}</p> })}
                                    <img
                                        class="game-article__picture"
                                        src=game_picture_url(game.id)
                                        alt=game.name.clone()
                                    />
                                </article>
                            }
                                .into_any()
                        }
                        Err(err) => view! { <p class="error">{err}</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}
