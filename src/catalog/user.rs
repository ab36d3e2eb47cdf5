//! User directory wire types.

// self
use crate::_prelude::*;

/// One registered user as the backend reports it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
	/// Backend-assigned user identifier.
	pub id: u64,
	/// Login name.
	#[serde(default)]
	pub username: String,
	/// Given name.
	#[serde(default)]
	pub first_name: String,
	/// Family name.
	#[serde(default)]
	pub last_name: String,
	/// Contact email address.
	#[serde(default)]
	pub email: String,
	/// Avatar image URL.
	#[serde(default)]
	pub image: Option<String>,
}

/// Page of users plus the backend's pagination envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserPage {
	/// Users in this page.
	pub users: Vec<UserRecord>,
	/// Total registered users across all pages.
	pub total: u64,
	/// Offset this page starts at.
	#[serde(default)]
	pub skip: u64,
	/// Page size the backend applied.
	#[serde(default)]
	pub limit: u64,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn user_page_tolerates_sparse_records() {
		let payload = r#"{
			"users": [{ "id": 1, "firstName": "Emily", "lastName": "Johnson" }],
			"total": 208,
			"skip": 0,
			"limit": 1
		}"#;
		let page: UserPage =
			serde_json::from_str(payload).expect("User page payload should deserialize.");

		assert_eq!(page.total, 208);
		assert_eq!(page.users[0].first_name, "Emily");
		assert!(page.users[0].username.is_empty());
	}
}
