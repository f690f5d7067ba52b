//! Tests for set operations.

mod common;

use common::{client_for, mock_api_error, mock_get, mock_ok, setup_mock_server};
use tcgdex::SetQueryOptions;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_set_found() {
    let server = setup_mock_server().await;
    mock_get(&server, "/sets/swsh1", mock_ok("set_swsh1.json")).await;

    let client = client_for(&server);
    let set = client.sets().get("swsh1").await.unwrap();

    assert_eq!(set.id, "swsh1");
    assert_eq!(set.name, "Sword & Shield");
    assert_eq!(set.card_count.total, 216);
    assert_eq!(set.card_count.official, 202);
    assert_eq!(set.card_count.reverse, 171);
    assert_eq!(set.release_date, "2020-02-07");
    assert_eq!(set.serie.id, "swsh");
    assert_eq!(set.tcg_online.as_deref(), Some("SSH"));
    assert_eq!(set.abbreviation.official.as_deref(), Some("SSH"));
    assert_eq!(set.cards.len(), 4);
    assert_eq!(set.cards[0].name, "Celebi V");
}

#[tokio::test]
async fn test_get_set_not_found() {
    let server = setup_mock_server().await;
    mock_get(&server, "/sets/notfound", mock_api_error("error_set_not_found.json")).await;

    let client = client_for(&server);
    let err = client.sets().get("notfound").await.unwrap_err();

    let api = err.api_error().expect("expected an API error");
    assert_eq!(api.status, 404);
    assert_eq!(api.endpoint, "/v2/en/sets/notfound");
    assert_eq!(err.operation(), Some("get set"));
}

#[tokio::test]
async fn test_search_sets_by_name_not_found() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/en/sets"))
        .and(query_param("name", "pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let sets = client
        .sets()
        .search(&SetQueryOptions::new().name("pokemon"))
        .await
        .unwrap();

    assert!(sets.is_empty());
}

#[tokio::test]
async fn test_search_sets_by_id_found() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/en/sets"))
        .and(query_param("id", "base2"))
        .respond_with(mock_ok("search_sets_by_id.json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let sets = client
        .sets()
        .search(&SetQueryOptions::new().id("base2"))
        .await
        .unwrap();

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "Jungle");
    assert_eq!(sets[0].card_count.total, 64);
}

#[tokio::test]
async fn test_search_sets_using_pagination() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/en/sets"))
        .and(query_param("pagination:page", "1"))
        .and(query_param("pagination:itemsPerPage", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "base1", "name": "Base Set", "cardCount": {"total": 102, "official": 102}},
            {"id": "base2", "name": "Jungle", "cardCount": {"total": 64, "official": 64}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = SetQueryOptions::new().page(1).items_per_page(2);
    let sets = client.sets().search(&options).await.unwrap();

    assert_eq!(sets.len(), 2);
}

#[tokio::test]
async fn test_card_by_set_and_local_id() {
    let server = setup_mock_server().await;
    mock_get(&server, "/sets/swsh3/136", mock_ok("card_swsh3-136.json")).await;

    let client = client_for(&server);
    let card = client.sets().card("swsh3", "136").await.unwrap();

    assert_eq!(card.id, "swsh3-136");
    assert_eq!(card.category, "Pokemon");
}

#[tokio::test]
async fn test_card_by_set_and_local_id_not_found() {
    let server = setup_mock_server().await;
    mock_get(
        &server,
        "/sets/swsh3111/32",
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "type": "https://tcgdex.dev/errors/not-found",
            "title": "The resource you are trying to reach does not exists",
            "status": 404,
            "endpoint": "/v2/en/sets/swsh3111/32",
            "method": "GET"
        })),
    )
    .await;

    let client = client_for(&server);
    let err = client.sets().card("swsh3111", "32").await.unwrap_err();

    assert!(err.to_string().ends_with(":404:/v2/en/sets/swsh3111/32:GET"));
    assert_eq!(err.operation(), Some("get card by set and local id"));
}
