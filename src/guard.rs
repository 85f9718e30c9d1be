//! Navigation guard: allow, or redirect to `/login` / `/`.
//!
//! The policy is a pure function over route metadata and the session flag.
//! [`RouteGuard`] wires it into the router and re-evaluates on every
//! transition, including browser back/forward.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{RouteMeta, match_path};
use crate::state::auth::AuthState;

/// Outcome of a guard evaluation. Never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectLogin,
    RedirectHome,
}

impl GuardOutcome {
    /// Redirect target, or `None` when navigation proceeds unchanged.
    #[must_use]
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectLogin => Some("/login"),
            Self::RedirectHome => Some("/"),
        }
    }
}

/// Decide the outcome for a navigation to a route with `meta`.
///
/// Auth-required routes win over guest-only routes; everything else is
/// allowed unchanged.
#[must_use]
pub fn evaluate(meta: RouteMeta, is_authenticated: bool) -> GuardOutcome {
    if meta.requires_auth && !is_authenticated {
        GuardOutcome::RedirectLogin
    } else if meta.guest && is_authenticated {
        GuardOutcome::RedirectHome
    } else {
        GuardOutcome::Allow
    }
}

/// Document title for a path: the route's metadata title or the site name.
#[must_use]
pub fn page_title(path: &str) -> &'static str {
    match_path(path).meta.title.unwrap_or("Gamelog")
}

/// Router-level wrapper that applies [`evaluate`] to the current location
/// and sets the document title from the matched route's metadata.
///
/// Evaluation waits for the startup session probe to finish; redirecting on
/// a half-loaded session would bounce authenticated users off protected
/// pages during a hard reload.
#[component]
pub fn RouteGuard(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move || {
        let session = auth.get();
        if session.loading {
            return;
        }
        let path = pathname.get();
        let meta = match_path(&path).meta;
        if let Some(target) = evaluate(meta, session.is_authenticated()).target() {
            leptos::logging::log!("guard: {path} -> {target}");
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        <Title text=move || page_title(&pathname.get()).to_owned()/>
        {children()}
    }
}
