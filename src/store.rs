//! Panel State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Lists are only ever replaced wholesale with a fresh backend response.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Article, Product};
use crate::resource::{Resource, ResourceKind};

/// Which section is on screen. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Articles,
    Products,
}

impl Tab {
    pub fn kind(self) -> ResourceKind {
        match self {
            Tab::Articles => ResourceKind::Article,
            Tab::Products => ResourceKind::Product,
        }
    }

    /// CSS class for a section given the active view
    pub fn section_class(self, section: Tab) -> &'static str {
        if self == section {
            "admin-section"
        } else {
            "admin-section hidden"
        }
    }
}

/// Panel state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PanelState {
    /// Active section
    pub tab: Tab,
    /// Last articles list received from the backend
    pub articles: Vec<Article>,
    /// Last products list received from the backend
    pub products: Vec<Product>,
    /// Article loaded into the form for editing (None = create mode)
    pub editing_article: Option<Article>,
    /// Product loaded into the form for editing (None = create mode)
    pub editing_product: Option<Product>,
}

/// Type alias for the store
pub type PanelStore = Store<PanelState>;

// ========================
// Per-Resource Slots
// ========================

/// Where a resource's list and edit target live in the store
pub trait StoreSlot: Resource {
    /// Clear the list and rebuild it from `records`
    fn replace_records(store: &PanelStore, records: Vec<Self>);

    fn set_editing(store: &PanelStore, record: Option<Self>);

    fn editing(store: &PanelStore) -> Option<Self>;
}

impl StoreSlot for Article {
    fn replace_records(store: &PanelStore, records: Vec<Self>) {
        *store.articles().write() = records;
    }

    fn set_editing(store: &PanelStore, record: Option<Self>) {
        *store.editing_article().write() = record;
    }

    fn editing(store: &PanelStore) -> Option<Self> {
        store.editing_article().get_untracked()
    }
}

impl StoreSlot for Product {
    fn replace_records(store: &PanelStore, records: Vec<Self>) {
        *store.products().write() = records;
    }

    fn set_editing(store: &PanelStore, record: Option<Self>) {
        *store.editing_product().write() = record;
    }

    fn editing(store: &PanelStore) -> Option<Self> {
        store.editing_product().get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    fn make_product(id: u32, name: &str) -> Product {
        Product {
            id,
            product_name: name.to_string(),
            description: None,
            price: Price::Text("1.00".to_string()),
            product_image_url: None,
        }
    }

    #[test]
    fn test_section_class_hides_inactive_view() {
        assert_eq!(Tab::Articles.section_class(Tab::Articles), "admin-section");
        assert_eq!(Tab::Articles.section_class(Tab::Products), "admin-section hidden");
        assert_eq!(Tab::Products.section_class(Tab::Articles), "admin-section hidden");
        assert_eq!(Tab::default(), Tab::Articles);
    }

    #[test]
    fn test_replace_records_drops_previous_list() {
        let store = Store::new(PanelState::default());
        Product::replace_records(&store, vec![make_product(1, "Old"), make_product(2, "Older")]);
        Product::replace_records(&store, vec![make_product(3, "New")]);

        let products = store.products().get_untracked();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_name, "New");
        assert!(store.articles().get_untracked().is_empty());
    }

    #[test]
    fn test_editing_slot() {
        let store = Store::new(PanelState::default());
        Product::set_editing(&store, Some(make_product(5, "Lamp")));
        assert_eq!(Product::editing(&store).map(|p| p.id), Some(5));
        assert_eq!(Article::editing(&store), None);
        Product::set_editing(&store, None);
        assert_eq!(Product::editing(&store), None);
    }
}
