//! Tests for the suggestion worker thread

use super::*;
use crate::suggest::Catalog;
use proptest::prelude::*;
use std::sync::mpsc;
use std::time::Duration;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn catalog_provider() -> Result<SuggestionProvider, FetchError> {
    Ok(SuggestionProvider::Catalog(Catalog::new(vec![
        Texture::new(1, "Diamond Ore"),
        Texture::new(2, "Dialga Skin"),
        Texture::new(3, "Oak Planks"),
    ])))
}

fn request(query: &str, request_id: u64) -> FetchRequest {
    FetchRequest {
        query: query.to_string(),
        request_id,
    }
}

#[test]
fn test_worker_answers_request_with_matching_id() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(catalog_provider(), request_rx, response_tx);

    request_tx.send(request("oak", 4)).unwrap();

    let response = response_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(response.request_id, 4);
    let textures = response.result.unwrap();
    assert_eq!(textures.len(), 1);
    assert_eq!(textures[0].name, "Oak Planks");
}

#[test]
fn test_worker_reports_unconfigured_provider() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(
        Err(FetchError::NotConfigured("test".to_string())),
        request_rx,
        response_tx,
    );

    request_tx.send(request("dia", 1)).unwrap();

    let response = response_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(response.request_id, 1);
    match response.result {
        Err(FetchError::NotConfigured(msg)) => assert_eq!(msg, "test"),
        other => panic!("Expected NotConfigured error, got {:?}", other),
    }
}

#[test]
fn test_worker_coalesces_queued_requests() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    // Queue everything before the worker starts so it sees a backlog
    request_tx.send(request("di", 1)).unwrap();
    request_tx.send(request("dia", 2)).unwrap();
    request_tx.send(request("oak", 3)).unwrap();
    drop(request_tx);

    worker_loop(catalog_provider(), request_rx, response_tx);

    let responses: Vec<FetchResponse> = response_rx.try_iter().collect();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].request_id, 3);
}

#[test]
fn test_worker_shuts_down_when_channel_closed() {
    let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
    let (response_tx, _response_rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        worker_loop(catalog_provider(), request_rx, response_tx);
    });

    drop(request_tx);

    handle.join().expect("Worker thread should exit cleanly");
}

#[test]
fn test_worker_exits_when_response_receiver_dropped() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    drop(response_rx);

    let handle = std::thread::spawn(move || {
        worker_loop(catalog_provider(), request_rx, response_tx);
    });

    request_tx.send(request("oak", 1)).unwrap();

    handle.join().expect("Worker thread should exit cleanly");
}

#[test]
fn test_latest_request_without_backlog() {
    let (_request_tx, request_rx) = mpsc::channel::<FetchRequest>();
    assert_eq!(latest_request(request("dia", 9), &request_rx), request("dia", 9));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // However many requests are queued, only the newest survives
    #[test]
    fn prop_latest_request_is_last_sent(ids in prop::collection::vec(1u64..10_000, 1..20)) {
        let (request_tx, request_rx) = mpsc::channel();
        for id in &ids[1..] {
            request_tx.send(request("q", *id)).unwrap();
        }

        let latest = latest_request(request("q", ids[0]), &request_rx);

        prop_assert_eq!(latest.request_id, *ids.last().unwrap());
    }
}
