//! Login page (guest-only).

use leptos::prelude::*;

/// Sign-in form shell. Submission is handled server-side via the session
/// endpoints; presentation is intentionally minimal.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>
            <form class="auth-page__form" method="post" action="/api/auth/login">
                <input type="email" name="email" placeholder="Email" required/>
                <input type="password" name="password" placeholder="Password" required/>
                <button type="submit">"Sign in"</button>
            </form>
            <a href="/forgot-password">"Forgot password?"</a>
            <a href="/register">"Create an account"</a>
        </div>
    }
}
