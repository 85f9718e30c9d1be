//! Registration page (guest-only).

use leptos::prelude::*;

/// Account creation form shell.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1>"Create an account"</h1>
            <form class="auth-page__form" method="post" action="/api/auth/register">
                <input type="text" name="username" placeholder="Username" required/>
                <input type="email" name="email" placeholder="Email" required/>
                <input type="password" name="password" placeholder="Password" required/>
                <button type="submit">"Register"</button>
            </form>
            <a href="/login">"Already have an account?"</a>
        </div>
    }
}
