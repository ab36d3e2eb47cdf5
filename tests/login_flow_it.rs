#![cfg(feature = "reqwest")]

// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use serde_json::json;
use time::OffsetDateTime;
// self
use bearer_session::{
	auth::{Credentials, UserIdentity},
	backend::BackendDescriptor,
	client::{ReqwestSessionClient, SessionClient},
	error::Error,
	store::{CredentialStore, MemoryStore},
	url::Url,
};

fn build_client(server: &MockServer) -> (ReqwestSessionClient, Arc<MemoryStore>) {
	let base_url = Url::parse(&server.base_url()).expect("Mock server URL should parse.");
	let backend =
		BackendDescriptor::builder(base_url).build().expect("Backend fixture should build.");
	let store_backend = Arc::new(MemoryStore::default());
	let store: Arc<dyn CredentialStore> = store_backend.clone();
	let client = SessionClient::new(store, backend);

	(client, store_backend)
}

#[tokio::test]
async fn login_stores_credentials_and_returns_identity() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server);
	let login = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/login").json_body(json!({
				"username": "emilys",
				"password": "emilyspass",
				"expiresInMins": 30,
			}));
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({
					"accessToken": "access-1",
					"refreshToken": "refresh-1",
					"id": 1,
					"username": "emilys",
					"email": "emily.johnson@x.dummyjson.com",
					"firstName": "Emily",
				}));
		})
		.await;
	let identity = client.login("emilys", "emilyspass").await.expect("Login should succeed.");

	login.assert_async().await;

	assert_eq!(identity.id, 1);
	assert_eq!(identity.username, "emilys");
	assert_eq!(
		identity.profile.get("firstName").and_then(serde_json::Value::as_str),
		Some("Emily"),
		"Untyped identity fields must be passed through.",
	);

	let stored = store
		.load()
		.await
		.expect("Store load should succeed after login.")
		.expect("Login must persist the issued credentials.");

	assert_eq!(stored.access_token.expose(), "access-1");
	assert_eq!(stored.refresh_token.expose(), "refresh-1");
	assert_eq!(stored.subject.username, "emilys");
}

#[tokio::test]
async fn rejected_login_surfaces_backend_error_without_refreshing() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server);
	let login = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/login");
			then.status(400)
				.header("content-type", "application/json")
				.body(r#"{"message":"Invalid credentials"}"#);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh");
			then.status(200);
		})
		.await;
	let err = client
		.login("emilys", "wrong")
		.await
		.expect_err("A rejected password must surface as a backend error.");

	assert!(
		matches!(err, Error::Backend { status: 400, ref message, .. } if message == "Invalid credentials"),
		"Unexpected error: {err:?}",
	);

	login.assert_async().await;
	refresh.assert_calls_async(0).await;

	assert!(
		store.load().await.expect("Store load should succeed.").is_none(),
		"A failed login must leave the store untouched.",
	);
}

#[tokio::test]
async fn logout_clears_the_stored_session() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server);

	store
		.save(Credentials::new(
			"access-live",
			"refresh-live",
			UserIdentity::new(1, "emilys"),
			OffsetDateTime::now_utc(),
		))
		.await
		.expect("Failed to seed credentials into the store.");

	client.logout().await.expect("Logout should succeed.");

	assert!(store.load().await.expect("Store load should succeed.").is_none());
}

#[tokio::test]
async fn current_user_sends_the_bearer_credential() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server);

	store
		.save(Credentials::new(
			"access-live",
			"refresh-live",
			UserIdentity::new(1, "emilys"),
			OffsetDateTime::now_utc(),
		))
		.await
		.expect("Failed to seed credentials into the store.");

	let me = server
		.mock_async(|when, then| {
			when.method(GET).path("/auth/me").header("authorization", "Bearer access-live");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "id": 1, "username": "emilys", "lastName": "Johnson" }));
		})
		.await;
	let identity =
		client.current_user().await.expect("Identity lookup should succeed with a live session.");

	me.assert_async().await;

	assert_eq!(identity.username, "emilys");
	assert_eq!(
		identity.profile.get("lastName").and_then(serde_json::Value::as_str),
		Some("Johnson"),
	);
}
