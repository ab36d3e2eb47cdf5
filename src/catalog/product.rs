//! Product catalog wire types.

// self
use crate::_prelude::*;

/// One catalog product as the backend reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	/// Backend-assigned product identifier.
	pub id: u64,
	/// Display title.
	pub title: String,
	/// Long-form description.
	#[serde(default)]
	pub description: String,
	/// Category slug the product belongs to.
	pub category: String,
	/// Unit price.
	pub price: f64,
	/// Current discount, as a percentage.
	#[serde(default)]
	pub discount_percentage: f64,
	/// Average customer rating.
	#[serde(default)]
	pub rating: f64,
	/// Units in stock.
	#[serde(default)]
	pub stock: u32,
	/// Brand name, when the backend knows one.
	#[serde(default)]
	pub brand: Option<String>,
	/// Thumbnail image URL.
	#[serde(default)]
	pub thumbnail: Option<String>,
	/// Gallery image URLs.
	#[serde(default)]
	pub images: Vec<String>,
}

/// Page of products plus the backend's pagination envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductPage {
	/// Products in this page.
	pub products: Vec<Product>,
	/// Total matching products across all pages.
	pub total: u64,
	/// Offset this page starts at.
	#[serde(default)]
	pub skip: u64,
	/// Page size the backend applied.
	#[serde(default)]
	pub limit: u64,
}

/// Category descriptor returned by the categories endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
	/// URL-safe category identifier.
	pub slug: String,
	/// Display name.
	pub name: String,
	/// Backend URL listing the category's products.
	pub url: String,
}

/// Payload for creating a product; the backend assigns the identifier.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
	/// Display title.
	pub title: String,
	/// Long-form description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Category slug.
	pub category: String,
	/// Unit price.
	pub price: f64,
	/// Current discount, as a percentage.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub discount_percentage: Option<f64>,
	/// Units in stock.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stock: Option<u32>,
	/// Brand name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub brand: Option<String>,
	/// Thumbnail image URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<String>,
	/// Gallery image URLs.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub images: Vec<String>,
}

/// Partial product update; `None` fields are omitted from the request body.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
	/// Replacement title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Replacement description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Replacement category slug.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	/// Replacement price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<f64>,
	/// Replacement discount percentage.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub discount_percentage: Option<f64>,
	/// Replacement stock level.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stock: Option<u32>,
	/// Replacement brand name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub brand: Option<String>,
	/// Replacement thumbnail URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<String>,
	/// Replacement gallery image URLs.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub images: Option<Vec<String>>,
}
