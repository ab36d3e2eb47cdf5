//! Typed product and user resource operations issued through the session client.
//!
//! Every call goes through [`SessionClient::send`], so bearer attachment and the transparent
//! refresh cycle apply uniformly; no operation here handles authorization itself.

pub mod product;
pub mod user;

pub use product::{Category, NewProduct, Product, ProductPage, ProductPatch};
pub use user::{UserPage, UserRecord};

// self
use crate::{
	_prelude::*,
	client::SessionClient,
	http::HttpTransport,
	request::{ApiRequest, PageQuery},
};

impl<C> SessionClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Lists catalog products with pagination and field projection.
	pub async fn list_products(&self, page: &PageQuery) -> Result<ProductPage> {
		self.send_json(&page.apply(ApiRequest::get("/products"))).await
	}

	/// Fetches a single product by identifier.
	pub async fn product(&self, id: u64) -> Result<Product> {
		self.send_json(&ApiRequest::get(format!("/products/{id}"))).await
	}

	/// Full-text search across the catalog.
	pub async fn search_products(&self, query: &str, page: &PageQuery) -> Result<ProductPage> {
		self.send_json(&page.apply(ApiRequest::get("/products/search").query("q", query))).await
	}

	/// Lists the catalog's category descriptors.
	pub async fn product_categories(&self) -> Result<Vec<Category>> {
		self.send_json(&ApiRequest::get("/products/categories")).await
	}

	/// Lists products within one category.
	pub async fn products_in_category(&self, slug: &str) -> Result<ProductPage> {
		self.send_json(&ApiRequest::get(format!("/products/category/{slug}"))).await
	}

	/// Creates a product and returns the backend's view of it.
	pub async fn create_product(&self, draft: &NewProduct) -> Result<Product> {
		self.send_json(&ApiRequest::post("/products/add").json(draft)?).await
	}

	/// Applies a partial update to an existing product; `None` fields are left untouched.
	pub async fn update_product(&self, id: u64, patch: &ProductPatch) -> Result<Product> {
		self.send_json(&ApiRequest::put(format!("/products/{id}")).json(patch)?).await
	}

	/// Deletes a product, returning the backend's final view of it.
	pub async fn delete_product(&self, id: u64) -> Result<Product> {
		self.send_json(&ApiRequest::delete(format!("/products/{id}"))).await
	}

	/// Lists registered users with pagination.
	pub async fn list_users(&self, page: &PageQuery) -> Result<UserPage> {
		self.send_json(&page.apply(ApiRequest::get("/users"))).await
	}
}
