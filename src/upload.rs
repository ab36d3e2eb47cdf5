//! Unsigned image-upload helper for a hosted media service.
//!
//! The dashboard this client serves stores only image URLs on products; the bytes themselves go
//! straight to a media CDN via an unsigned upload preset. This helper reproduces that flow: one
//! multipart POST carrying the file and the preset name, answered with the hosted `secure_url`.
//! The endpoint is caller-supplied, so any service speaking the same unsigned-preset dialect
//! works.

// crates.io
use reqwest::multipart::{Form, Part};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
};

#[derive(Deserialize)]
struct UploadReceipt {
	secure_url: Url,
}

/// Uploads images to a caller-configured media endpoint using an unsigned preset.
#[derive(Clone)]
pub struct ImageUploader {
	client: ReqwestClient,
	endpoint: Url,
	preset: String,
}
impl ImageUploader {
	/// Creates an uploader for the provided endpoint and unsigned preset.
	pub fn new(endpoint: Url, preset: impl Into<String>) -> Result<Self, ConfigError> {
		Self::with_client(ReqwestClient::default(), endpoint, preset)
	}

	/// Creates an uploader that reuses an existing [`ReqwestClient`].
	pub fn with_client(
		client: ReqwestClient,
		endpoint: Url,
		preset: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let preset = preset.into();

		if preset.trim().is_empty() {
			return Err(ConfigError::MissingUploadPreset);
		}

		Ok(Self { client, endpoint, preset })
	}

	/// Uploads one image and returns its hosted URL.
	pub async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<Url> {
		const KIND: FlowKind = FlowKind::Upload;

		let span = FlowSpan::new(KIND, "upload");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span.instrument(self.upload_inner(bytes, filename)).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	async fn upload_inner(&self, bytes: Vec<u8>, filename: &str) -> Result<Url> {
		let form = Form::new()
			.part("file", Part::bytes(bytes).file_name(filename.to_owned()))
			.text("upload_preset", self.preset.clone());
		let response = self
			.client
			.post(self.endpoint.clone())
			.multipart(form)
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status().as_u16();
		let body = response.bytes().await.map_err(TransportError::from)?;

		if !(200..300).contains(&status) {
			let message = String::from_utf8_lossy(&body).trim().to_owned();

			return Err(Error::Backend {
				status,
				message: if message.is_empty() { "(empty body)".into() } else { message },
				retry_after: None,
			});
		}

		let mut deserializer = serde_json::Deserializer::from_slice(&body);
		let receipt: UploadReceipt = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::Decode { source, status: Some(status) })?;

		Ok(receipt.secure_url)
	}
}
impl Debug for ImageUploader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ImageUploader").field("endpoint", &self.endpoint).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn empty_preset_is_rejected() {
		let endpoint = Url::parse("https://media.example.com/v1_1/demo/image/upload")
			.expect("Upload endpoint fixture should parse.");
		let err = ImageUploader::new(endpoint, "  ")
			.expect_err("Whitespace-only presets must be rejected.");

		assert!(matches!(err, ConfigError::MissingUploadPreset));
	}
}
