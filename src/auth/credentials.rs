//! Stored session credentials and the wire payload that mints them.

// self
use crate::{
	_prelude::*,
	auth::{TokenSecret, UserIdentity},
};

/// Wire payload returned by the backend's login and refresh endpoints.
///
/// Both endpoints answer with the same shape: the rotated token pair plus the identity fields
/// flattened alongside them.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGrant {
	/// Short-lived bearer token authorizing API calls.
	pub access_token: String,
	/// Longer-lived token used solely to obtain the next access token.
	pub refresh_token: String,
	/// Identity of the authenticated user.
	#[serde(flatten)]
	pub subject: UserIdentity,
}
impl SessionGrant {
	/// Converts the wire payload into a storable credential record.
	pub fn into_credentials(self, issued_at: OffsetDateTime) -> Credentials {
		Credentials {
			access_token: TokenSecret::new(self.access_token),
			refresh_token: TokenSecret::new(self.refresh_token),
			subject: self.subject,
			issued_at,
		}
	}
}

/// Credential record owned by the [`CredentialStore`](crate::store::CredentialStore).
///
/// The client reads the record before each dispatch and overwrites it after a successful
/// refresh; it never hands out mutable access to stored state.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
	/// Access token secret; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Refresh token secret consumed by the refresh protocol.
	pub refresh_token: TokenSecret,
	/// Identity attached to the session.
	pub subject: UserIdentity,
	/// Instant the current token pair was issued or last rotated.
	pub issued_at: OffsetDateTime,
}
impl Credentials {
	/// Builds a record directly, primarily for seeding stores in tests and tools.
	pub fn new(
		access_token: impl Into<String>,
		refresh_token: impl Into<String>,
		subject: UserIdentity,
		issued_at: OffsetDateTime,
	) -> Self {
		Self {
			access_token: TokenSecret::new(access_token),
			refresh_token: TokenSecret::new(refresh_token),
			subject,
			issued_at,
		}
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &"<redacted>")
			.field("subject", &self.subject)
			.field("issued_at", &self.issued_at)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::Value;
	use time::macros;
	// self
	use super::*;

	#[test]
	fn grant_decodes_camel_case_and_mints_credentials() {
		let payload = r#"{
			"accessToken": "access-1",
			"refreshToken": "refresh-1",
			"id": 7,
			"username": "emilys",
			"firstName": "Emily"
		}"#;
		let grant: SessionGrant =
			serde_json::from_str(payload).expect("Session grant should deserialize.");
		let issued = macros::datetime!(2025-11-10 12:00 UTC);
		let credentials = grant.into_credentials(issued);

		assert_eq!(credentials.access_token.expose(), "access-1");
		assert_eq!(credentials.refresh_token.expose(), "refresh-1");
		assert_eq!(credentials.subject.id, 7);
		assert_eq!(
			credentials.subject.profile.get("firstName").and_then(Value::as_str),
			Some("Emily"),
		);
		assert_eq!(credentials.issued_at, issued);
	}

	#[test]
	fn debug_redacts_both_secrets() {
		let credentials = Credentials::new(
			"access-secret",
			"refresh-secret",
			UserIdentity::new(1, "emilys"),
			macros::datetime!(2025-11-10 12:00 UTC),
		);
		let rendered = format!("{credentials:?}");

		assert!(!rendered.contains("access-secret"));
		assert!(!rendered.contains("refresh-secret"));
		assert!(rendered.contains("<redacted>"));
	}
}
