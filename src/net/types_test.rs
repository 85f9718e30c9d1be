use super::*;

fn collection_json() -> serde_json::Value {
    serde_json::json!({
        "@context": "/api/contexts/Game",
        "@id": "/api/games",
        "@type": "hydra:Collection",
        "hydra:totalItems": 2,
        "hydra:member": [
            {
                "@id": "/api/games/1",
                "@type": "Game",
                "id": 1,
                "name": "Ocarina of Time",
                "picture": "ocarina.jpg",
                "cover": "ocarina-cover.jpg",
                "slug": "ocarina-of-time",
                "finishedAt": "1999-03-14T00:00:00+00:00",
                "finishedTimes": 3,
                "isSearched": false,
                "platform": {
                    "@id": "/api/platforms/4",
                    "@type": "Platform",
                    "id": 4,
                    "name": "Nintendo 64",
                    "slug": "n64"
                }
            },
            {
                "@id": "/api/games/2",
                "@type": "Game",
                "id": 2,
                "name": "Chrono Trigger",
                "picture": "chrono.jpg",
                "cover": "chrono-cover.jpg",
                "slug": "chrono-trigger",
                "finishedAt": null,
                "finishedTimes": null,
                "isSearched": true,
                "platform": {
                    "@id": "/api/platforms/2",
                    "@type": "Platform",
                    "id": 2,
                    "name": "Super Nintendo",
                    "slug": "snes"
                }
            }
        ]
    })
}

// =============================================================
// JSON-LD deserialization
// =============================================================

#[test]
fn collection_envelope_deserializes() {
    let collection: GameCollection = serde_json::from_value(collection_json()).unwrap();
    assert_eq!(collection.total_items, 2);
    assert_eq!(collection.member.len(), 2);
    assert_eq!(collection.type_tag, "hydra:Collection");
}

#[test]
fn game_fields_map_from_json_ld() {
    let collection: GameCollection = serde_json::from_value(collection_json()).unwrap();
    let game = &collection.member[0];
    assert_eq!(game.iri, "/api/games/1");
    assert_eq!(game.id, 1);
    assert_eq!(game.slug, "ocarina-of-time");
    assert_eq!(game.finished_at.as_deref(), Some("1999-03-14T00:00:00+00:00"));
    assert_eq!(game.finished_times, Some(3));
    assert!(!game.is_searched);
    assert_eq!(game.platform.slug, "n64");
}

#[test]
fn null_completion_fields_deserialize_as_none() {
    let collection: GameCollection = serde_json::from_value(collection_json()).unwrap();
    let game = &collection.member[1];
    assert_eq!(game.finished_at, None);
    assert_eq!(game.finished_times, None);
    assert!(game.is_searched);
}

// =============================================================
// Pagination bound
// =============================================================

#[test]
fn has_page_after_stops_at_the_total() {
    let mut collection: GameCollection = serde_json::from_value(collection_json()).unwrap();
    collection.total_items = 45;

    assert!(collection.has_page_after(1, 30));
    assert!(!collection.has_page_after(2, 30));
}

#[test]
fn empty_collection_has_no_next_page() {
    let mut collection: GameCollection = serde_json::from_value(collection_json()).unwrap();
    collection.total_items = 0;

    assert!(!collection.has_page_after(1, 30));
}

#[test]
fn exact_multiple_of_page_size_has_no_trailing_page() {
    let mut collection: GameCollection = serde_json::from_value(collection_json()).unwrap();
    collection.total_items = 60;

    assert!(collection.has_page_after(1, 30));
    assert!(!collection.has_page_after(2, 30));
}

// =============================================================
// Query construction
// =============================================================

#[test]
fn empty_filters_produce_no_params() {
    assert!(GameFilters::default().to_query().is_empty());
}

#[test]
fn all_filters_serialize_with_api_parameter_names() {
    let filters = GameFilters {
        page: Some(3),
        items_per_page: Some(20),
        name: Some("mario".to_owned()),
        is_searched: Some(true),
        finished_exists: Some(false),
        order_id: Some(SortDirection::Desc),
        order_name: Some(SortDirection::Asc),
        platform_slug: Some("n64".to_owned()),
    };

    let params = filters.to_query();
    assert_eq!(
        params,
        vec![
            ("page".to_owned(), "3".to_owned()),
            ("itemsPerPage".to_owned(), "20".to_owned()),
            ("name".to_owned(), "mario".to_owned()),
            ("isSearched".to_owned(), "true".to_owned()),
            ("exists[finishedAt]".to_owned(), "false".to_owned()),
            ("order[id]".to_owned(), "desc".to_owned()),
            ("order[name]".to_owned(), "asc".to_owned()),
            ("platform.slug".to_owned(), "n64".to_owned()),
        ]
    );
}

#[test]
fn sort_direction_strings() {
    assert_eq!(SortDirection::Asc.as_str(), "asc");
    assert_eq!(SortDirection::Desc.as_str(), "desc");
}
