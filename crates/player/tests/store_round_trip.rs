//! Saves and fetches a roster through the HTTP adapter against a local store.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;

use charbuild_domain::{Attribute, CharacterCollection, CharacterId};
use charbuild_player::infrastructure::HttpCharacterStore;
use charbuild_player::ports::outbound::{CharacterStorePort, TransportError};
use axum::http::StatusCode;
use axum::routing::post;
use charbuild_shared::Owner;

async fn spawn_router(router: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_store() -> SocketAddr {
    spawn_router(charbuild_store::app()).await
}

fn client(addr: SocketAddr, owner: &str) -> HttpCharacterStore {
    HttpCharacterStore::with_timeout(
        &format!("http://{}/api", addr),
        Owner::new(owner).unwrap(),
        5,
    )
}

fn edited_roster() -> CharacterCollection {
    let mut roster = CharacterCollection::new();
    let id = roster.add();
    let mut data = roster.get(id).unwrap().data.clone();
    for _ in 0..4 {
        data = data.increment_attribute(Attribute::Intelligence).unwrap();
    }
    data = data
        .toggle_class("Wizard")
        .unwrap()
        .increment_skill("Arcana")
        .unwrap()
        .increment_skill("Arcana")
        .unwrap()
        .decrement_skill("Stealth")
        .unwrap();
    roster.update_by_id(id, data);
    roster
}

#[tokio::test]
async fn saved_roster_is_fetched_back_unchanged() {
    let addr = spawn_store().await;
    let store = client(addr, "round-trip");
    let roster = edited_roster();

    let ack = store.save_all(&roster).await.unwrap();
    assert_eq!(ack.message(), Some("Saved 2 character(s) for round-trip"));

    let fetched = store.fetch_all().await.unwrap();
    assert_eq!(fetched, roster);

    let wizard = &fetched.get(CharacterId::new(2)).unwrap().data;
    assert_eq!(wizard.selected_class.as_deref(), Some("Wizard"));
    assert_eq!(wizard.available_skill_points(), 18);
    assert_eq!(wizard.skills.rank("Stealth").unwrap(), -1);
}

#[tokio::test]
async fn rosters_are_scoped_by_owner() {
    let addr = spawn_store().await;
    client(addr, "alice").save_all(&edited_roster()).await.unwrap();

    let other = client(addr, "bob").fetch_all().await.unwrap();
    assert!(other.is_empty());
}

#[tokio::test]
async fn save_replaces_previous_roster() {
    let addr = spawn_store().await;
    let store = client(addr, "replace");
    store.save_all(&edited_roster()).await.unwrap();
    store.save_all(&CharacterCollection::empty()).await.unwrap();

    assert!(store.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_route_is_http_status_error() {
    let addr = spawn_store().await;
    let store = HttpCharacterStore::new(&format!("http://{}/missing", addr), Owner::default());

    match store.fetch_all().await {
        Err(TransportError::HttpStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected HTTP status error, got {:?}", other),
    }
}

#[tokio::test]
async fn plain_text_save_reply_is_acknowledged() {
    let router = axum::Router::new()
        .route("/api/{owner}/character", post(|| async { "Saved" }))
        .route("/quiet/{owner}/character", post(|| async { StatusCode::NO_CONTENT }));
    let addr = spawn_router(router).await;

    let ack = client(addr, "texty").save_all(&edited_roster()).await.unwrap();
    assert_eq!(ack.0, serde_json::json!("Saved"));
    assert_eq!(ack.message(), None);

    let quiet = HttpCharacterStore::new(&format!("http://{}/quiet", addr), Owner::default());
    let ack = quiet.save_all(&edited_roster()).await.unwrap();
    assert_eq!(ack.0, serde_json::Value::Null);
}
