//! Resource Kinds
//!
//! The two managed record types and the endpoints that serve them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::models::{Article, ArticleDraft, Product, ProductDraft, RecordId};

/// Which collection a request or notice is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Article,
    Product,
}

impl ResourceKind {
    /// Public list endpoint
    pub fn list_path(self) -> &'static str {
        match self {
            ResourceKind::Article => "/articles",
            ResourceKind::Product => "/products",
        }
    }

    /// Admin collection endpoint (create)
    pub fn admin_path(self) -> &'static str {
        match self {
            ResourceKind::Article => "/admin/articles",
            ResourceKind::Product => "/admin/products",
        }
    }

    /// Admin item endpoint (update, delete)
    pub fn item_path(self, id: RecordId) -> String {
        format!("{}/{}", self.admin_path(), id)
    }

    /// Name of the array field in the list response
    pub fn collection_key(self) -> &'static str {
        match self {
            ResourceKind::Article => "articles",
            ResourceKind::Product => "products",
        }
    }

    /// Singular, capitalized, for messages
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Article => "Article",
            ResourceKind::Product => "Product",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_key())
    }
}

/// A record type the panel can list, create, update and delete
pub trait Resource: Clone + DeserializeOwned + Send + Sync + 'static {
    /// Body sent on create and update
    type Draft: Serialize;

    const KIND: ResourceKind;

    fn id(&self) -> RecordId;
}

impl Resource for Article {
    type Draft = ArticleDraft;
    const KIND: ResourceKind = ResourceKind::Article;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Product {
    type Draft = ProductDraft;
    const KIND: ResourceKind = ResourceKind::Product;

    fn id(&self) -> RecordId {
        self.id
    }
}
