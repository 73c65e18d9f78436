//! End-to-end tests for the session and repository against a local HTTP mock.

use adwire::client::{Repository, Session};
use adwire::error::{ApiError, Error};
use adwire::models::{Organization, VendorPixel};
use mockito::Matcher;
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn repo_for(server: &mockito::ServerGuard) -> Repository<Session> {
    let session =
        Session::with_base_url(server.url(), Some("test-key".to_string())).expect("session");
    Repository::new(session)
}

#[tokio::test]
async fn find_organization_pulls_wire_payload() {
    init_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/organizations/7")
        .match_header("X-ApiKey", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": {
                    "id": "7",
                    "name": "Example Media",
                    "status": 1,
                    "dmp_enabled": "enabled",
                    "allow_byo_price": 0,
                    "version": 3,
                    "created_on": "2016-01-01T00:00:00"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let repo = repo_for(&server);
    let org: Organization = repo.find(7).await.expect("find organization");

    assert_eq!(org.id, Some(7));
    assert_eq!(org.name.as_deref(), Some("Example Media"));
    assert_eq!(org.status, Some(true));
    assert_eq!(org.dmp_enabled.as_deref(), Some("enabled"));
    assert_eq!(org.allow_byo_price, Some(false));
    assert_eq!(org.version, Some(3));
    assert!(org.created_on.is_some());
    // Enum fields absent from the payload come back as their default.
    assert_eq!(org.org_type.as_deref(), Some("buyer"));

    mock.assert_async().await;
}

#[tokio::test]
async fn save_organization_pushes_wire_payload() {
    init_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/organizations/7")
        .match_header("X-ApiKey", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "id": 7,
            "status": 0,
            "org_type": "partner"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": { "id": 7, "status": 0, "org_type": "partner", "version": 4 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let repo = repo_for(&server);
    let org = Organization {
        id: Some(7),
        status: Some(false),
        org_type: Some("partner".to_string()),
        ..Default::default()
    };

    let saved: Organization = repo.save(&org).await.expect("save organization");
    assert_eq!(saved.status, Some(false));
    assert_eq!(saved.org_type.as_deref(), Some("partner"));
    assert_eq!(saved.version, Some(4));

    mock.assert_async().await;
}

#[tokio::test]
async fn create_vendor_pixel_posts_to_collection() {
    init_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/vendor_pixels")
        .match_body(Matcher::PartialJson(json!({ "creative_id": 55 })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": { "id": 300, "creative_id": 55, "tag_type": "img" }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let repo = repo_for(&server);
    let pixel = VendorPixel {
        creative_id: Some(55),
        tag: Some("<img src=\"https://t.example.com/px\">".to_string()),
        tag_type: Some("img".to_string()),
        ..Default::default()
    };

    let created: VendorPixel = repo.save(&pixel).await.expect("create pixel");
    assert_eq!(created.id, Some(300));
    assert_eq!(created.set_by.as_deref(), Some("USER"));

    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_maps_to_api_error() {
    init_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/organizations/999")
        .with_status(404)
        .with_body("no such organization")
        .create_async()
        .await;

    let repo = repo_for(&server);
    let err = repo.find::<Organization>(999).await.unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::NotFound(_))));
}

#[tokio::test]
async fn unauthorized_maps_to_api_error() {
    init_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/organizations/7")
        .with_status(401)
        .create_async()
        .await;

    let repo = repo_for(&server);
    let err = repo.find::<Organization>(7).await.unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::Unauthorized)));
}

#[tokio::test]
async fn malformed_payload_surfaces_conversion_error() {
    init_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/organizations/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": { "id": "not-a-number" } }).to_string())
        .create_async()
        .await;

    let repo = repo_for(&server);
    let err = repo.find::<Organization>(7).await.unwrap_err();
    assert!(matches!(err, Error::Coerce(_)));
}
