//! Top navigation bar with auth-aware links.

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};

/// Site navigation — swaps the auth links based on the session.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| auth::logout(auth);

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Gamelog"</a>
            <a href="/articles">"Articles"</a>
            <a href="/wishlist">"Wishlist"</a>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| view! { <a href="/login">"Sign in"</a> }
            >
                <a href="/profile">"Profile"</a>
                <button class="nav-bar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
