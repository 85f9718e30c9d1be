//! Typed request/response shapes for the catalog API.
//!
//! The server speaks JSON-LD (API Platform style): resources carry `@id` and
//! `@type` tags and collections arrive in a hydra envelope. Field names are
//! mapped with serde renames so the Rust side stays snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub username: String,
}

/// A gaming platform resource (console, handheld, PC, ...).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Platform {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub type_tag: String,
    pub id: u32,
    pub name: String,
    pub slug: String,
}

/// A game resource with its article/collection fields.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Game {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub type_tag: String,
    pub id: u32,
    pub name: String,
    pub picture: String,
    pub cover: String,
    pub slug: String,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<String>,
    #[serde(rename = "finishedTimes")]
    pub finished_times: Option<u32>,
    #[serde(rename = "isSearched")]
    pub is_searched: bool,
    pub platform: Platform,
}

/// Hydra collection envelope for `GET /api/games`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct GameCollection {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub type_tag: String,
    #[serde(rename = "hydra:totalItems")]
    pub total_items: u32,
    #[serde(rename = "hydra:member")]
    pub member: Vec<Game>,
}

impl GameCollection {
    /// Whether another page of results exists after `page` when the
    /// collection is fetched `per_page` items at a time.
    #[must_use]
    pub fn has_page_after(&self, page: u32, per_page: u32) -> bool {
        page.saturating_mul(per_page) < self.total_items
    }
}

/// Sort direction for `order[...]` query parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filter and pagination parameters for the games collection.
///
/// Every field is optional; unset fields are simply absent from the query
/// string. Parameter names mirror the server's API verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameFilters {
    pub page: Option<u32>,
    pub items_per_page: Option<u32>,
    pub name: Option<String>,
    pub is_searched: Option<bool>,
    pub finished_exists: Option<bool>,
    pub order_id: Option<SortDirection>,
    pub order_name: Option<SortDirection>,
    pub platform_slug: Option<String>,
}

impl GameFilters {
    /// Returns these filters with the name filter replaced by `query`.
    #[must_use]
    pub fn with_name(mut self, query: &str) -> Self {
        self.name = Some(query.to_owned());
        self
    }

    /// Serialize into `(key, value)` query pairs, in declaration order.
    ///
    /// Deterministic ordering keeps request construction reproducible.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_owned(), page.to_string()));
        }
        if let Some(per_page) = self.items_per_page {
            params.push(("itemsPerPage".to_owned(), per_page.to_string()));
        }
        if let Some(name) = &self.name {
            params.push(("name".to_owned(), name.clone()));
        }
        if let Some(searched) = self.is_searched {
            params.push(("isSearched".to_owned(), searched.to_string()));
        }
        if let Some(exists) = self.finished_exists {
            params.push(("exists[finishedAt]".to_owned(), exists.to_string()));
        }
        if let Some(dir) = self.order_id {
            params.push(("order[id]".to_owned(), dir.as_str().to_owned()));
        }
        if let Some(dir) = self.order_name {
            params.push(("order[name]".to_owned(), dir.as_str().to_owned()));
        }
        if let Some(slug) = &self.platform_slug {
            params.push(("platform.slug".to_owned(), slug.clone()));
        }
        params
    }
}
