//! Profile page (auth-required).

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};

/// Shows the signed-in user's account details.
///
/// The route guard redirects unauthenticated visitors before this renders
/// with an empty session.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| auth::logout(auth);

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        view! {
                            <dl class="profile-page__details">
                                <dt>"Username"</dt>
                                <dd>{user.username}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email}</dd>
                            </dl>
                        }
                    })
            }}
            <button on:click=on_logout>"Sign out"</button>
        </div>
    }
}
