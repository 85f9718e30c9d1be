//! Forgot-password page (guest-only).

use leptos::prelude::*;

/// Password reset request form shell.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1>"Forgot password"</h1>
            <form class="auth-page__form" method="post" action="/api/auth/forgot-password">
                <input type="email" name="email" placeholder="Email" required/>
                <button type="submit">"Send reset link"</button>
            </form>
            <a href="/login">"Back to sign in"</a>
        </div>
    }
}
