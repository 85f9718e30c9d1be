//! Reset-password page (guest-only).

use leptos::prelude::*;

/// Password reset form shell; the reset token arrives via the email link.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1>"Reset password"</h1>
            <form class="auth-page__form" method="post" action="/api/auth/reset-password">
                <input type="password" name="password" placeholder="New password" required/>
                <input
                    type="password"
                    name="password_confirm"
                    placeholder="Confirm new password"
                    required
                />
                <button type="submit">"Reset password"</button>
            </form>
        </div>
    }
}
