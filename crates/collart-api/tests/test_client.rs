//! Endpoint mapping of `CollartClient` against a mock backend.

use chrono::{TimeZone, Utc};
use collart_api::CollartClient;
use collart_core::auth::{AuthService, Credentials};
use collart_core::chat::ChatService;
use collart_core::config::ClientConfig;
use collart_core::error::CollartError;
use collart_core::interaction::{InteractionStatus, InteractionsService};
use collart_core::order::{NewOrder, OrderService, TabKind};
use collart_core::settings::{InMemorySettingsStore, SettingKey, SettingsStore};
use collart_core::upload::{TransferProgress, UploadFile};
use collart_core::user::ProfileService;
use collart_core::{Experience, Language, Session};
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;

struct Fixture {
    client: CollartClient,
    session: Session,
    settings: Arc<InMemorySettingsStore>,
}

async fn fixture(server: &Server, token: Option<&str>) -> Fixture {
    let session = Session::with_language(Language::En);
    let settings = Arc::new(InMemorySettingsStore::new());
    if let Some(token) = token {
        session.set_token(token).await;
        settings.set(SettingKey::AuthToken, token).unwrap();
    }
    let config = ClientConfig {
        base_url: server.url(),
        ..Default::default()
    };
    let client = CollartClient::new(&config, session.clone(), settings.clone()).unwrap();
    Fixture {
        client,
        session,
        settings,
    }
}

fn user_json(id: &str, name: &str, surname: &str) -> serde_json::Value {
    json!({
        "user": {"id": id, "name": name, "surname": surname, "experience": "between1And3"},
        "skills": [
            {"nameEn": "Designer", "nameRu": "Дизайнер", "primary": true},
            {"nameEn": "Illustrator", "nameRu": "Иллюстратор", "primary": false}
        ],
        "tools": ["Figma"]
    })
}

#[tokio::test]
async fn test_login_stores_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/authentication/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"email": "a@b.c", "password": "pw"})))
        .with_status(200)
        .with_body(r#"{"token":"tok-1"}"#)
        .create_async()
        .await;

    let f = fixture(&server, None).await;
    let token = f.client.login(&Credentials::new("a@b.c", "pw")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(token, "tok-1");
    assert_eq!(f.session.token().await.as_deref(), Some("tok-1"));
    assert_eq!(
        f.settings.get(SettingKey::AuthToken).unwrap().as_deref(),
        Some("tok-1")
    );
}

#[tokio::test]
async fn test_failed_login_clears_previous_token() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/authentication/login")
        .with_status(400)
        .with_body(r#"{"error":true,"reason":"Invalid credentials"}"#)
        .create_async()
        .await;

    let f = fixture(&server, Some("old")).await;
    let err = f
        .client
        .login(&Credentials::new("a@b.c", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err, CollartError::status(400, "Invalid credentials"));
    assert!(!f.session.is_authenticated().await);
    assert_eq!(f.settings.get(SettingKey::AuthToken).unwrap(), None);
}

#[tokio::test]
async fn test_unauthorized_response_expires_session() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/messages/chats")
        .match_header("authorization", "Bearer stale")
        .with_status(401)
        .create_async()
        .await;

    let f = fixture(&server, Some("stale")).await;
    let err = f.client.chats().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(f.session.token().await, None);
    assert_eq!(f.settings.get(SettingKey::AuthToken).unwrap(), None);
}

#[tokio::test]
async fn test_missing_token_short_circuits() {
    let server = Server::new_async().await;
    let f = fixture(&server, None).await;

    let err = f.client.search_orders().await.unwrap_err();
    assert_eq!(err, CollartError::MissingToken);
}

#[tokio::test]
async fn test_search_orders_transforms_wire_records() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/orders/all")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(
            json!([{
                "order": {
                    "id": "O1",
                    "title": "Logo",
                    "experience": "between1And3",
                    "tools": ["Figma", "Sketch"],
                    "isActive": true,
                    "owner": {"id": "U9"}
                },
                "user": {"id": "U9", "name": "Ann", "surname": "Lee"}
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    let orders = f.client.search_orders().await.unwrap();

    mock.assert_async().await;
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.owner_id, "U9");
    assert_eq!(order.author_name, "Ann Lee");
    assert_eq!(order.experience, Experience::Years1To3);
    assert_eq!(order.experience_text, "1-3 years");
    assert_eq!(order.tools_text(), "Figma, Sketch");
    assert_eq!(order.task_description, "");
}

#[tokio::test]
async fn test_skills_are_public_and_localized() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/skills")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"[{"id":"S1","nameEn":"Designer","nameRu":"Дизайнер","primary":false}]"#)
        .create_async()
        .await;

    let f = fixture(&server, None).await;
    f.session.set_language(Language::Ru).await;
    let skills = f.client.skills().await.unwrap();

    assert_eq!(skills[0].id, "S1");
    assert_eq!(skills[0].localized_name(Language::Ru), "Дизайнер");
}

#[tokio::test]
async fn test_search_specialists_splits_professions() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/users/all")
        .with_status(200)
        .with_body(json!([user_json("U2", "Bo", "Kim")]).to_string())
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    let specialists = f.client.search_specialists().await.unwrap();

    assert_eq!(specialists[0].profession, "Designer");
    assert_eq!(specialists[0].sub_professions, vec!["Illustrator"]);
    assert_eq!(specialists[0].display_name(), "Bo Kim");
}

#[tokio::test]
async fn test_empty_and_malformed_bodies() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/authentication/user")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;
    server
        .mock("GET", "/messages/chats")
        .with_status(200)
        .with_body(r#"{"not":"a list"}"#)
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    assert_eq!(
        f.client.current_user().await.unwrap_err(),
        CollartError::EmptyBody
    );
    assert!(matches!(
        f.client.chats().await.unwrap_err(),
        CollartError::Decode(_)
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:1".into(),
        ..Default::default()
    };
    let client = CollartClient::new(
        &config,
        Session::new(),
        Arc::new(InMemorySettingsStore::new()),
    )
    .unwrap();

    let err = client.skills().await.unwrap_err();
    assert!(matches!(err, CollartError::Transport(_)));
}

#[tokio::test]
async fn test_interaction_calls_send_getter_id() {
    let mut server = Server::new_async().await;
    let accept = server
        .mock("POST", "/interactions/accept/I1")
        .match_body(Matcher::Json(json!({"getterID": "me"})))
        .with_status(200)
        .create_async()
        .await;
    let respond = server
        .mock("POST", "/interactions/respond/O1")
        .match_body(Matcher::Json(json!({"getterID": "owner"})))
        .with_status(200)
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    f.client.accept("I1", "me").await.unwrap();
    f.client.respond("O1", "owner").await.unwrap();

    accept.assert_async().await;
    respond.assert_async().await;
}

#[tokio::test]
async fn test_interactions_decode_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/interactions/me")
        .with_status(200)
        .with_body(
            json!([{
                "id": "I1",
                "sender": user_json("U2", "Bo", "Kim"),
                "getter": user_json("me", "Ann", "Lee"),
                "order": {"order": {"id": "O1", "owner": {"id": "me"}}},
                "status": "accepted"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    let interactions = f.client.interactions("me").await.unwrap();

    assert_eq!(interactions[0].status, InteractionStatus::Accepted);
    assert_eq!(interactions[0].order.owner_id, "me");
    assert_eq!(interactions[0].sender.profession, "Designer");
}

#[tokio::test]
async fn test_favorites_use_tab_body() {
    let mut server = Server::new_async().await;
    let add = server
        .mock("POST", "/tab/addOrder")
        .match_body(Matcher::Json(json!({"orderID": "O1", "tabType": "liked"})))
        .with_status(200)
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/tab/removeOrder")
        .match_body(Matcher::Json(json!({"orderID": "O1", "tabType": "liked"})))
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/tab/liked/me")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    f.client.add_liked("O1").await.unwrap();
    f.client.remove_liked("O1").await.unwrap();
    assert!(f.client.tab_orders(TabKind::Liked, "me").await.unwrap().is_empty());

    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_messages_are_sorted_oldest_first() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/messages/between/U2")
        .with_status(200)
        .with_body(
            json!([
                {"id": "M2", "senderID": "U2", "receiverID": "me", "message": "second",
                 "createdAt": "2024-05-01T10:05:00Z"},
                {"id": "M1", "senderID": "me", "receiverID": "U2", "message": "first",
                 "createdAt": "2024-05-01T10:00:00Z", "isRead": true}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    let messages = f.client.messages("U2").await.unwrap();

    let ids: Vec<_> = messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["M1", "M2"]);
    assert!(messages[0].is_from("me"));
}

#[tokio::test]
async fn test_create_order_sends_multipart() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/orders/create")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="title""#.into()),
            Matcher::Regex(r#"filename="brief.pdf""#.into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id":"O7","title":"Logo","isActive":true}"#)
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    let order = NewOrder {
        title: "Logo".into(),
        skill_id: "S1".into(),
        task_description: "Draw".into(),
        project_description: "Cafe".into(),
        experience: Experience::NoExperience,
        tools: vec!["Figma".into()],
        start_time: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        image: UploadFile::new("cover.png", vec![1, 2, 3]),
        files: vec![UploadFile::new("brief.pdf", vec![4])],
    };
    let created = f.client.create_order(&order).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, "O7");
    assert!(created.is_active);
}

#[tokio::test]
async fn test_download_reports_progress() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/files/brief.pdf")
        .with_status(200)
        .with_body(vec![7u8; 4096])
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    let (progress, receiver) = TransferProgress::channel();
    let data = f.client.download("/files/brief.pdf", &progress).await.unwrap();

    assert_eq!(data.len(), 4096);
    assert_eq!(*receiver.borrow(), 1.0);
}

#[tokio::test]
async fn test_download_from_other_host_keeps_token_private() {
    let api = Server::new_async().await;
    let mut cdn = Server::new_async().await;
    let cdn_mock = cdn
        .mock("GET", "/x.pdf")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("pdf")
        .create_async()
        .await;

    let f = fixture(&api, Some("secret-tok")).await;
    let (progress, _receiver) = TransferProgress::channel();
    let data = f
        .client
        .download(&format!("{}/x.pdf", cdn.url()), &progress)
        .await
        .unwrap();

    assert_eq!(data, b"pdf");
    cdn_mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_download_from_other_host_keeps_session() {
    let api = Server::new_async().await;
    let mut cdn = Server::new_async().await;
    cdn.mock("GET", "/private.pdf")
        .with_status(401)
        .create_async()
        .await;

    let f = fixture(&api, Some("tok")).await;
    let (progress, _receiver) = TransferProgress::channel();
    let err = f
        .client
        .download(&format!("{}/private.pdf", cdn.url()), &progress)
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(f.session.token().await.as_deref(), Some("tok"));
    assert_eq!(f.settings.get(SettingKey::AuthToken).unwrap().as_deref(), Some("tok"));
}

#[tokio::test]
async fn test_download_from_api_host_sends_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/files/a.pdf")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body("a")
        .create_async()
        .await;

    let f = fixture(&server, Some("tok")).await;
    let (progress, _receiver) = TransferProgress::channel();
    let absolute = format!("{}/files/a.pdf", server.url());
    f.client.download(&absolute, &progress).await.unwrap();

    mock.assert_async().await;
}
