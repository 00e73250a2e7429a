//! Tests for the pager driver

use super::*;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use crate::page::{LinkedPage, Page};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POOLS_PATH: &str = "/v2.0/lbaas/pools";

fn pools_url(server: &MockServer, page: u32) -> String {
    format!("{}{POOLS_PATH}?page={page}", server.uri())
}

fn page_body(server: &MockServer, ids: &[&str], next: Option<u32>) -> serde_json::Value {
    let pools: Vec<_> = ids.iter().map(|id| json!({"id": id})).collect();
    let links = match next {
        Some(page) => json!([{"href": pools_url(server, page), "rel": "next"}]),
        None => json!([]),
    };
    json!({"pools": pools, "pools_links": links})
}

async fn mount_page(server: &MockServer, page: u32, body: serde_json::Value, expect: u64) {
    Mock::given(method("GET"))
        .and(path(POOLS_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expect)
        .mount(server)
        .await;
}

fn no_retry_client() -> HttpClient {
    HttpClient::with_config(HttpClientConfig::builder().max_retries(0).build())
}

#[tokio::test]
async fn test_each_page_follows_link_chain_in_order() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(&server, &["p1"], Some(2)), 1).await;
    mount_page(&server, 2, page_body(&server, &["p2"], Some(3)), 1).await;
    mount_page(&server, 3, page_body(&server, &["p3"], None), 1).await;

    let client = no_retry_client();
    let pager = Pager::new(&client, Url::parse(&pools_url(&server, 1)).unwrap());

    let mut seen = Vec::new();
    pager
        .each_page(
            |raw| LinkedPage::new(raw, "pools"),
            |page| {
                let ids = page.raw().json().unwrap()["pools"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|p| p["id"].as_str().unwrap().to_string())
                    .collect::<Vec<_>>();
                seen.extend(ids);
                Ok(true)
            },
        )
        .await
        .unwrap();

    assert_eq!(seen, vec!["p1", "p2", "p3"]);
}

#[tokio::test]
async fn test_each_page_empty_page_stops_without_callback() {
    let server = MockServer::start().await;
    // The empty page still advertises a next link; emptiness wins.
    mount_page(&server, 1, page_body(&server, &[], Some(2)), 1).await;
    mount_page(&server, 2, page_body(&server, &["never"], None), 0).await;

    let client = no_retry_client();
    let pager = Pager::new(&client, Url::parse(&pools_url(&server, 1)).unwrap());

    let mut calls = 0;
    pager
        .each_page(
            |raw| LinkedPage::new(raw, "pools"),
            |_page| {
                calls += 1;
                Ok(true)
            },
        )
        .await
        .unwrap();

    assert_eq!(calls, 0);
}

#[tokio::test]
async fn test_each_page_no_content_page_stops_cleanly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(POOLS_PATH))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = no_retry_client();
    let pager = Pager::new(&client, Url::parse(&pools_url(&server, 1)).unwrap());

    let mut calls = 0;
    pager
        .each_page(
            |raw| LinkedPage::new(raw, "pools"),
            |_page| {
                calls += 1;
                Ok(true)
            },
        )
        .await
        .unwrap();

    assert_eq!(calls, 0);
}

#[tokio::test]
async fn test_each_page_visitor_cancellation() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(&server, &["p1"], Some(2)), 1).await;
    mount_page(&server, 2, page_body(&server, &["p2"], Some(3)), 0).await;

    let client = no_retry_client();
    let pager = Pager::new(&client, Url::parse(&pools_url(&server, 1)).unwrap());

    let mut calls = 0;
    pager
        .each_page(
            |raw| LinkedPage::new(raw, "pools"),
            |_page| {
                calls += 1;
                Ok(false)
            },
        )
        .await
        .unwrap();

    assert_eq!(calls, 1);
}

#[tokio::test]
async fn test_each_page_visitor_error_stops_with_that_error() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(&server, &["p1"], Some(2)), 1).await;
    mount_page(&server, 2, page_body(&server, &["p2"], Some(3)), 0).await;

    let client = no_retry_client();
    let pager = Pager::new(&client, Url::parse(&pools_url(&server, 1)).unwrap());

    let err = pager
        .each_page(
            |raw| LinkedPage::new(raw, "pools"),
            |_page| Err(Error::Other("caller gave up".to_string())),
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "caller gave up");
}

#[tokio::test]
async fn test_each_page_fetch_failure_short_circuits() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(&server, &["p1"], Some(2)), 1).await;
    Mock::given(method("GET"))
        .and(path(POOLS_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, 3, page_body(&server, &["p3"], None), 0).await;

    let client = no_retry_client();
    let pager = Pager::new(&client, Url::parse(&pools_url(&server, 1)).unwrap());

    let mut calls = 0;
    let err = pager
        .each_page(
            |raw| LinkedPage::new(raw, "pools"),
            |_page| {
                calls += 1;
                Ok(true)
            },
        )
        .await
        .unwrap_err();

    // The first page was delivered before the failure.
    assert_eq!(calls, 1);
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_each_page_malformed_body_surfaces() {
    let server = MockServer::start().await;
    mount_page(&server, 1, json!({"pools": "not an array"}), 1).await;

    let client = no_retry_client();
    let pager = Pager::new(&client, Url::parse(&pools_url(&server, 1)).unwrap());

    let err = pager
        .each_page(
            |raw| LinkedPage::new(raw, "pools"),
            |_page| Ok(true),
        )
        .await
        .unwrap_err();

    assert!(err.is_malformed());
}

#[tokio::test]
async fn test_collect_drains_chain_into_records() {
    use crate::resources::Pool;

    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        json!({
            "pools": [{"id": "p1", "name": "web", "admin_state_up": true}],
            "pools_links": [{"href": pools_url(&server, 2), "rel": "next"}]
        }),
        1,
    )
    .await;
    mount_page(
        &server,
        2,
        json!({
            "pools": [{"id": "p2", "name": "api", "admin_state_up": false}],
            "pools_links": []
        }),
        1,
    )
    .await;

    let client = no_retry_client();
    let pager = Pager::new(&client, Url::parse(&pools_url(&server, 1)).unwrap());

    let pools: Vec<Pool> = pager.collect().await.unwrap();

    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].id, "p1");
    assert_eq!(pools[0].name, "web");
    assert!(pools[0].admin_state_up);
    assert_eq!(pools[1].id, "p2");
    assert!(!pools[1].admin_state_up);
}
