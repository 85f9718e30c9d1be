//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::guard::RouteGuard;
use crate::pages::article_detail::ArticleDetailPage;
use crate::pages::article_list::ArticleListPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::info::{
    AboutPage, ContactPage, FaqPage, LegalPage, PrivacyPage, RulesPage, TermsPage,
};
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::wishlist::WishlistPage;
use crate::state::auth::{self, AuthState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session signal and declares the route tree. The
/// router mirrors the static table in `routes.rs`; every page renders
/// behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(AuthState::default());
    provide_context(session);
    auth::load_session(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/gamelog-ui.css"/>
        <Title text="Gamelog"/>

        <Router>
            <NavBar/>
            <RouteGuard>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("articles") view=ArticleListPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                        <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("wishlist") view=WishlistPage/>
                        <Route path=StaticSegment("faq") view=FaqPage/>
                        <Route path=StaticSegment("rules") view=RulesPage/>
                        <Route path=StaticSegment("privacy") view=PrivacyPage/>
                        <Route path=StaticSegment("terms") view=TermsPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("legal") view=LegalPage/>
                        // Single dynamic segment: `/{slug}-article-a{id}`.
                        // The page itself validates the shape and falls back
                        // to the 404 view when it does not parse.
                        <Route path=ParamSegment("article") view=ArticleDetailPage/>
                    </Routes>
                </main>
            </RouteGuard>
        </Router>
    }
}
