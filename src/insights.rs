//! Derived catalog statistics and chart buckets.
//!
//! Everything here is a linear scan over an already-fetched product list; no I/O happens at
//! this layer. Callers typically fetch the full catalog (`limit: 0` asks the backend for
//! everything) and feed the list through these helpers to drive a dashboard.

// self
use crate::{_prelude::*, catalog::Product};

/// Stock level below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

const PRICE_BANDS: [(f64, &str); 4] =
	[(50.0, "0-50"), (100.0, "51-100"), (200.0, "101-200"), (500.0, "201-500")];
const PRICE_BAND_OPEN_LABEL: &str = "500+";

/// Aggregate catalog figures for a dashboard header.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CatalogStats {
	/// Total products in the catalog.
	pub total_products: u64,
	/// Total registered users.
	pub total_users: u64,
	/// Products with stock below [`LOW_STOCK_THRESHOLD`].
	pub low_stock: u64,
	/// Mean unit price across the fetched list.
	pub average_price: f64,
	/// Mean rating across the fetched list.
	pub average_rating: f64,
	/// Total category count.
	pub total_categories: u64,
}

/// Computes aggregate figures from a fetched product list and directory totals.
///
/// `total_products` and `total_users` come from the backends' pagination envelopes rather than
/// the list length, so a truncated fetch still reports full totals. Averages are `0.0` for an
/// empty list.
pub fn catalog_stats(
	products: &[Product],
	total_products: u64,
	total_users: u64,
	total_categories: u64,
) -> CatalogStats {
	let low_stock =
		products.iter().filter(|product| product.stock < LOW_STOCK_THRESHOLD).count() as u64;
	let (average_price, average_rating) = if products.is_empty() {
		(0., 0.)
	} else {
		let count = products.len() as f64;

		(
			products.iter().map(|product| product.price).sum::<f64>() / count,
			products.iter().map(|product| product.rating).sum::<f64>() / count,
		)
	};

	CatalogStats {
		total_products,
		total_users,
		low_stock,
		average_price,
		average_rating,
		total_categories,
	}
}

/// One slice of the category distribution chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
	/// Category slug.
	pub name: String,
	/// Number of products in the category.
	pub count: u64,
}

/// Counts products per category in first-seen order, truncated to `top_n` slices.
pub fn category_distribution(products: &[Product], top_n: usize) -> Vec<CategorySlice> {
	let mut slices: Vec<CategorySlice> = Vec::new();

	for product in products {
		match slices.iter_mut().find(|slice| slice.name == product.category) {
			Some(slice) => slice.count += 1,
			None => slices.push(CategorySlice { name: product.category.clone(), count: 1 }),
		}
	}

	slices.truncate(top_n);

	slices
}

/// One fixed price band and the number of products that fall into it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriceBand {
	/// Band label, e.g. `51-100`.
	pub label: &'static str,
	/// Number of products priced within the band.
	pub count: u64,
}

/// Buckets products into the dashboard's fixed price bands.
pub fn price_bands(products: &[Product]) -> Vec<PriceBand> {
	let mut bands: Vec<PriceBand> =
		PRICE_BANDS.iter().map(|(_, label)| PriceBand { label, count: 0 }).collect();

	bands.push(PriceBand { label: PRICE_BAND_OPEN_LABEL, count: 0 });

	for product in products {
		let index = PRICE_BANDS
			.iter()
			.position(|(ceiling, _)| product.price <= *ceiling)
			.unwrap_or(PRICE_BANDS.len());

		bands[index].count += 1;
	}

	bands
}

/// Product label and rating pair for the top-rated chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatedProduct {
	/// Full product title.
	pub title: String,
	/// Average customer rating.
	pub rating: f64,
}

/// Returns the `n` highest-rated products, best first.
pub fn top_rated(products: &[Product], n: usize) -> Vec<RatedProduct> {
	let mut rated: Vec<RatedProduct> = products
		.iter()
		.map(|product| RatedProduct { title: product.title.clone(), rating: product.rating })
		.collect();

	rated.sort_by(|a, b| b.rating.total_cmp(&a.rating));
	rated.truncate(n);

	rated
}
