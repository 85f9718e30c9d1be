//! Static route table and path matching.
//!
//! The table is defined once and immutable at runtime. Matching is a pure
//! function so the guard policy and the catch-all fallback can be exercised
//! without a browser. The router in `app.rs` mirrors this table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Metadata flags attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub guest: bool,
    pub title: Option<&'static str>,
}

const NO_META: RouteMeta = RouteMeta { requires_auth: false, guest: false, title: None };

const fn guest_meta() -> RouteMeta {
    RouteMeta { requires_auth: false, guest: true, title: None }
}

const fn titled(title: &'static str) -> RouteMeta {
    RouteMeta { requires_auth: false, guest: false, title: Some(title) }
}

/// View identifier for every page the router can resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Home,
    ArticleList,
    ArticleDetail,
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Profile,
    Wishlist,
    Faq,
    Rules,
    Privacy,
    Terms,
    Contact,
    About,
    Legal,
    NotFound,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: RouteName,
    pub meta: RouteMeta,
}

/// Static routes, matched by exact path. The article-detail pattern and the
/// NotFound fallback are handled in [`match_path`].
pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: "/", name: RouteName::Home, meta: NO_META },
    RouteDef { path: "/articles", name: RouteName::ArticleList, meta: titled("Articles") },
    RouteDef { path: "/login", name: RouteName::Login, meta: guest_meta() },
    RouteDef { path: "/register", name: RouteName::Register, meta: guest_meta() },
    RouteDef { path: "/forgot-password", name: RouteName::ForgotPassword, meta: guest_meta() },
    RouteDef { path: "/reset-password", name: RouteName::ResetPassword, meta: guest_meta() },
    RouteDef {
        path: "/profile",
        name: RouteName::Profile,
        meta: RouteMeta { requires_auth: true, guest: false, title: None },
    },
    RouteDef { path: "/wishlist", name: RouteName::Wishlist, meta: NO_META },
    RouteDef { path: "/faq", name: RouteName::Faq, meta: titled("FAQ") },
    RouteDef { path: "/rules", name: RouteName::Rules, meta: titled("Community Rules") },
    RouteDef { path: "/privacy", name: RouteName::Privacy, meta: titled("Privacy Policy") },
    RouteDef { path: "/terms", name: RouteName::Terms, meta: titled("Terms of Service") },
    RouteDef { path: "/contact", name: RouteName::Contact, meta: titled("Contact Us") },
    RouteDef { path: "/about", name: RouteName::About, meta: titled("About Us") },
    RouteDef { path: "/legal", name: RouteName::Legal, meta: titled("Legal Notice") },
];

const ARTICLE_DETAIL: RouteDef =
    RouteDef { path: "/{slug}-article-a{id}", name: RouteName::ArticleDetail, meta: NO_META };

const NOT_FOUND: RouteDef = RouteDef { path: "/*", name: RouteName::NotFound, meta: NO_META };

/// Resolve a concrete path to a route table entry.
///
/// Unmatched paths resolve to the NotFound entry. A trailing slash is
/// ignored everywhere except the root.
#[must_use]
pub fn match_path(path: &str) -> &'static RouteDef {
    let path = normalize(path);
    if let Some(route) = ROUTES.iter().find(|route| route.path == path) {
        return route;
    }
    if parse_article_path(path).is_some() {
        return &ARTICLE_DETAIL;
    }
    &NOT_FOUND
}

/// Parse an article-detail path of the shape `/{slug}-article-a{id}`.
///
/// Returns the slug and numeric id, or `None` when the path does not match
/// (extra segments, empty slug, non-numeric id).
#[must_use]
pub fn parse_article_path(path: &str) -> Option<(&str, u32)> {
    let segment = normalize(path).strip_prefix('/')?;
    if segment.contains('/') {
        return None;
    }
    let marker = segment.rfind("-article-a")?;
    let slug = &segment[..marker];
    let id = &segment[marker + "-article-a".len()..];
    if slug.is_empty() || id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((slug, id.parse().ok()?))
}

/// Build the article-detail path for a game.
#[must_use]
pub fn article_path(slug: &str, id: u32) -> String {
    format!("/{slug}-article-a{id}")
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 { path.trim_end_matches('/') } else { path }
}
