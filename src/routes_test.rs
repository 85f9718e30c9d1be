use super::*;

// =============================================================
// Static matching
// =============================================================

#[test]
fn root_matches_home() {
    assert_eq!(match_path("/").name, RouteName::Home);
}

#[test]
fn static_paths_match_their_routes() {
    assert_eq!(match_path("/articles").name, RouteName::ArticleList);
    assert_eq!(match_path("/login").name, RouteName::Login);
    assert_eq!(match_path("/register").name, RouteName::Register);
    assert_eq!(match_path("/forgot-password").name, RouteName::ForgotPassword);
    assert_eq!(match_path("/reset-password").name, RouteName::ResetPassword);
    assert_eq!(match_path("/profile").name, RouteName::Profile);
    assert_eq!(match_path("/wishlist").name, RouteName::Wishlist);
    assert_eq!(match_path("/faq").name, RouteName::Faq);
    assert_eq!(match_path("/legal").name, RouteName::Legal);
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(match_path("/articles/").name, RouteName::ArticleList);
    assert_eq!(match_path("/profile/").name, RouteName::Profile);
}

#[test]
fn unmatched_paths_resolve_to_not_found() {
    assert_eq!(match_path("/nope/deeper").name, RouteName::NotFound);
    assert_eq!(match_path("/articles/42").name, RouteName::NotFound);
    assert_eq!(match_path("").name, RouteName::NotFound);
}

// =============================================================
// Metadata flags
// =============================================================

#[test]
fn profile_requires_auth() {
    let meta = match_path("/profile").meta;
    assert!(meta.requires_auth);
    assert!(!meta.guest);
}

#[test]
fn auth_pages_are_guest_only() {
    for path in ["/login", "/register", "/forgot-password", "/reset-password"] {
        let meta = match_path(path).meta;
        assert!(meta.guest, "{path} should be guest-only");
        assert!(!meta.requires_auth, "{path} should not require auth");
    }
}

#[test]
fn info_pages_carry_titles() {
    assert_eq!(match_path("/faq").meta.title, Some("FAQ"));
    assert_eq!(match_path("/rules").meta.title, Some("Community Rules"));
    assert_eq!(match_path("/terms").meta.title, Some("Terms of Service"));
}

// =============================================================
// Article-detail pattern
// =============================================================

#[test]
fn article_path_matches_detail_route() {
    assert_eq!(match_path("/ocarina-of-time-article-a42").name, RouteName::ArticleDetail);
}

#[test]
fn parse_article_path_extracts_slug_and_id() {
    assert_eq!(parse_article_path("/ocarina-of-time-article-a42"), Some(("ocarina-of-time", 42)));
    assert_eq!(parse_article_path("/doom-article-a1"), Some(("doom", 1)));
}

#[test]
fn parse_article_path_handles_marker_in_slug() {
    // Only the last marker separates the id.
    assert_eq!(
        parse_article_path("/the-article-about-article-a7-article-a99"),
        Some(("the-article-about-article-a7", 99))
    );
}

#[test]
fn parse_article_path_rejects_malformed_segments() {
    assert_eq!(parse_article_path("/no-marker-here"), None);
    assert_eq!(parse_article_path("/-article-a42"), None, "empty slug");
    assert_eq!(parse_article_path("/slug-article-a"), None, "missing id");
    assert_eq!(parse_article_path("/slug-article-axyz"), None, "non-numeric id");
    assert_eq!(parse_article_path("/slug-article-a42/extra"), None, "extra segment");
}

#[test]
fn malformed_article_paths_fall_through_to_not_found() {
    assert_eq!(match_path("/slug-article-axyz").name, RouteName::NotFound);
}

#[test]
fn article_path_round_trips_through_parse() {
    let path = article_path("ocarina-of-time", 42);
    assert_eq!(path, "/ocarina-of-time-article-a42");
    assert_eq!(parse_article_path(&path), Some(("ocarina-of-time", 42)));
}
