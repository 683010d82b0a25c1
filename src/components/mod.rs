//! UI Components
//!
//! Leptos components for the admin panel.

mod article_form;
mod article_section;
mod product_form;
mod product_section;
mod record_actions;
mod tab_bar;

pub use article_form::ArticleForm;
pub use article_section::ArticleSection;
pub use product_form::ProductForm;
pub use product_section::ProductSection;
pub use record_actions::RecordActions;
pub use tab_bar::TabBar;
