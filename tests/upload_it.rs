#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use bearer_session::{error::Error, upload::ImageUploader, url::Url};

fn build_uploader(server: &MockServer) -> ImageUploader {
	let endpoint = Url::parse(&server.url("/v1_1/demo/image/upload"))
		.expect("Upload endpoint fixture should parse.");

	ImageUploader::new(endpoint, "demo-preset").expect("Uploader fixture should build.")
}

#[tokio::test]
async fn upload_returns_the_hosted_url() {
	let server = MockServer::start_async().await;
	let uploader = build_uploader(&server);
	let upload = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1_1/demo/image/upload")
				.body_includes("demo-preset")
				.body_includes("product.png");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"secure_url":"https://media.example.com/product.png"}"#);
		})
		.await;
	let hosted = uploader
		.upload(vec![0x89, 0x50, 0x4E, 0x47], "product.png")
		.await
		.expect("Image upload should succeed.");

	upload.assert_async().await;

	assert_eq!(hosted.as_str(), "https://media.example.com/product.png");
}

#[tokio::test]
async fn upload_rejection_surfaces_backend_error() {
	let server = MockServer::start_async().await;
	let uploader = build_uploader(&server);

	server
		.mock_async(|when, then| {
			when.method(POST).path("/v1_1/demo/image/upload");
			then.status(401)
				.header("content-type", "application/json")
				.body(r#"{"error":{"message":"Unknown upload preset"}}"#);
		})
		.await;

	let err = uploader
		.upload(vec![1, 2, 3], "broken.png")
		.await
		.expect_err("An upload rejection must surface to the caller.");

	assert!(matches!(err, Error::Backend { status: 401, .. }), "Unexpected error: {err:?}");
}
