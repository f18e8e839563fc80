//! Product and catalog types.
//!
//! The catalog is static reference data: built once at startup, never
//! mutated. Cart lines snapshot product facts at add time, so nothing
//! downstream holds references into the catalog.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Image reference.
    pub img: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Short description.
    pub description: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        img: impl Into<String>,
        sku: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            img: img.into(),
            sku: sku.into(),
            description: description.into(),
        }
    }
}

/// A static, read-only set of products keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Check whether an id exists in the catalog.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over all products.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The demo storefront catalog.
    pub fn demo() -> Self {
        let p = |id: &str, title: &str, price: i64, img: &str, sku: &str, desc: &str| {
            Product::new(id, title, Money::inr(price), img, sku, desc)
        };
        Self::new(vec![
            p(
                "p-101",
                "Classic White Tee",
                299,
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab",
                "WT-001",
                "Soft cotton t-shirt, comfortable fit.",
            ),
            p(
                "p-102",
                "Blue Denim Jeans",
                1499,
                "https://wrogn.com/cdn/shop/files/1_6b8140c5-6f1f-4483-9452-2c5fa2f45e09.jpg",
                "DJ-002",
                "Slim fit denim with stretch.",
            ),
            p(
                "p-103",
                "Running Sneakers",
                3499,
                "https://images.puma.com/image/upload/global/310088/14/fnd/ZAF/fmt/png",
                "SN-003",
                "Lightweight running shoes.",
            ),
            p(
                "p-104",
                "Leather Wallet",
                799,
                "https://urbanforest.co.in/cdn/shop/files/A7402041.jpg",
                "WL-004",
                "Genuine leather, multiple slots.",
            ),
            p(
                "p-105",
                "Smartwatch",
                8999,
                "https://gourban.in/cdn/shop/files/Pulse.jpg",
                "SW-005",
                "Activity tracking and notifications.",
            ),
            p(
                "p-106",
                "Black Hoodie",
                1199,
                "https://nobero.com/cdn/shop/files/believe_in_yourself.jpg",
                "BH-006",
                "Warm fleece hoodie with pockets.",
            ),
            p(
                "p-107",
                "Sports Cap",
                399,
                "https://invincible.in/cdn/shop/products/sports-caps.jpg",
                "CP-007",
                "Breathable cotton sports cap.",
            ),
            p(
                "p-108",
                "Wireless Earbuds",
                2499,
                "https://elver.in/cdn/shop/files/Elver_Buds_X_True_Wireless_Earbuds.png",
                "EB-008",
                "Noise-cancelling wireless earbuds.",
            ),
            p(
                "p-109",
                "Travel Backpack",
                1999,
                "https://icon.in/cdn/shop/files/1_50b8664b.jpg",
                "BP-009",
                "Durable backpack with spacious compartments.",
            ),
            p(
                "p-110",
                "Analog Wrist Watch",
                1599,
                "https://images.unsplash.com/photo-1523275335684-37898b6baf30",
                "AW-010",
                "Stylish analog watch with leather strap.",
            ),
            p(
                "p-111",
                "Sunglasses",
                899,
                "https://images.unsplash.com/photo-1511499767150-a48a237f0083",
                "SG-011",
                "UV-protected polarized sunglasses.",
            ),
            p(
                "p-112",
                "Casual Sneakers",
                2799,
                "https://admin.mochishoes.com/product/71-264/660/71-264-16-40-1.JPG",
                "CS-012",
                "Comfortable sneakers for daily use.",
            ),
            p(
                "p-113",
                "Formal Shirt",
                999,
                "https://images.meesho.com/images/products/398396769/lorj9_512.webp",
                "FS-013",
                "Slim-fit formal shirt for office wear.",
            ),
            p(
                "p-114",
                "Laptop Sleeve",
                599,
                "https://www.thepostbox.in/cdn/shop/files/04_12434f64.jpg",
                "LS-014",
                "Protective sleeve for laptops up to 15 inches.",
            ),
            p(
                "p-115",
                "Fitness Band",
                1999,
                "https://5.imimg.com/data5/SELLER/Default/m4-fitness-band.png",
                "FB-015",
                "Tracks heart rate, steps, and sleep.",
            ),
            p(
                "p-116",
                "Perfume Spray",
                1299,
                "https://instamart-media-assets.swiggy.com/swiggy/image/upload/perfume.png",
                "PF-016",
                "Long-lasting refreshing fragrance.",
            ),
        ])
    }
}
