//! User Notifications
//!
//! Outcome messages for create/update/delete/load, shown one at a time.

use leptos::prelude::window;
use std::fmt;

use crate::resource::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created(ResourceKind),
    CreateFailed(ResourceKind),
    Updated(ResourceKind),
    UpdateFailed(ResourceKind),
    Deleted(ResourceKind),
    DeleteFailed(ResourceKind),
    LoadFailed(ResourceKind),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Notice::Created(kind) => write!(f, "{} added!", kind.label()),
            Notice::CreateFailed(kind) => write!(f, "Failed to add {}", kind.label().to_lowercase()),
            Notice::Updated(kind) => write!(f, "{} updated!", kind.label()),
            Notice::UpdateFailed(kind) => write!(f, "Failed to update {}", kind.label().to_lowercase()),
            Notice::Deleted(kind) => write!(f, "{} deleted!", kind.label()),
            Notice::DeleteFailed(kind) => write!(f, "Failed to delete {}", kind.label().to_lowercase()),
            Notice::LoadFailed(kind) => write!(f, "Failed to load {}", kind.collection_key()),
        }
    }
}

/// Sink for user-facing notices
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Blocking `window.alert()` notifier
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        if let Err(err) = window().alert_with_message(&notice.to_string()) {
            tracing::warn!(?err, %notice, "alert failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_messages() {
        assert_eq!(Notice::Created(ResourceKind::Article).to_string(), "Article added!");
        assert_eq!(Notice::CreateFailed(ResourceKind::Article).to_string(), "Failed to add article");
        assert_eq!(Notice::Deleted(ResourceKind::Article).to_string(), "Article deleted!");
        assert_eq!(Notice::DeleteFailed(ResourceKind::Article).to_string(), "Failed to delete article");
    }

    #[test]
    fn test_product_messages() {
        assert_eq!(Notice::Created(ResourceKind::Product).to_string(), "Product added!");
        assert_eq!(Notice::Updated(ResourceKind::Product).to_string(), "Product updated!");
        assert_eq!(Notice::UpdateFailed(ResourceKind::Product).to_string(), "Failed to update product");
        assert_eq!(Notice::LoadFailed(ResourceKind::Product).to_string(), "Failed to load products");
    }
}
