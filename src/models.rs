//! Frontend Models
//!
//! Data structures matching the backend's JSON records and request bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned record identifier
pub type RecordId = u32;

/// Article record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub image_path: Option<String>,
}

/// Product record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub product_name: String,
    pub description: Option<String>,
    pub price: Price,
    pub product_image_url: Option<String>,
}

/// Price as the backend sends it: a JSON number or a decimal string.
/// Kept verbatim so display never reformats it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

// ========================
// Request Bodies
// ========================

/// Body for POST /admin/articles and PUT /admin/articles/{id}
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub image_path: String,
}

impl From<&Article> for ArticleDraft {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            image_path: article.image_path.clone().unwrap_or_default(),
        }
    }
}

/// Body for POST /admin/products and PUT /admin/products/{id}.
/// `price` is the raw form value; the backend decides how to store it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductDraft {
    pub product_name: String,
    pub product_image_url: String,
    pub description: String,
    pub price: String,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            product_image_url: product.product_image_url.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
        }
    }
}
