//! Opaque user identity payload returned by login and refresh responses.

// crates.io
use serde_json::{Map, Value};
// self
use crate::_prelude::*;

/// Identity of the authenticated user, as reported by the backend.
///
/// Only the fields the client itself relies on are typed. Everything else the backend attaches
/// (names, email, avatar URL, and whatever appears in future API versions) is carried through
/// unmodified in [`profile`](Self::profile) and round-trips losslessly through the stores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
	/// Backend-assigned user identifier.
	pub id: u64,
	/// Login name tied to the session.
	pub username: String,
	/// Remaining profile fields, passed through unmodified.
	#[serde(flatten)]
	pub profile: Map<String, Value>,
}
impl UserIdentity {
	/// Builds an identity with an empty profile map, primarily for fixtures and tools.
	pub fn new(id: u64, username: impl Into<String>) -> Self {
		Self { id, username: username.into(), profile: Map::new() }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn unknown_profile_fields_survive_round_trip() {
		let payload = r#"{
			"id": 1,
			"username": "emilys",
			"email": "emily.johnson@x.dummyjson.com",
			"firstName": "Emily",
			"lastName": "Johnson",
			"image": "https://dummyjson.com/icon/emilys/128"
		}"#;
		let identity: UserIdentity =
			serde_json::from_str(payload).expect("Identity payload should deserialize.");

		assert_eq!(identity.id, 1);
		assert_eq!(identity.username, "emilys");
		assert_eq!(
			identity.profile.get("firstName").and_then(Value::as_str),
			Some("Emily"),
			"Untyped profile fields must be preserved.",
		);

		let reserialized =
			serde_json::to_value(&identity).expect("Identity should reserialize to JSON.");

		assert_eq!(
			reserialized.get("image").and_then(Value::as_str),
			Some("https://dummyjson.com/icon/emilys/128"),
		);
	}
}
