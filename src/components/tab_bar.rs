//! Tab Bar Component
//!
//! Switches between the articles and products sections.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_panel;
use crate::store::{PanelStateStoreFields, Tab};

/// Tab options: (tab, element id, label)
const TABS: &[(Tab, &str, &str)] = &[
    (Tab::Articles, "articles-tab", "Articles"),
    (Tab::Products, "products-tab", "Products"),
];

#[component]
pub fn TabBar() -> impl IntoView {
    let panel = use_panel();
    let store = panel.store();

    view! {
        <nav class="tab-bar">
            {TABS.iter().map(|&(tab, id, label)| {
                let panel = panel.clone();
                let is_active = move || store.tab().get() == tab;
                view! {
                    <button
                        id=id
                        type="button"
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| {
                            let panel = panel.clone();
                            spawn_local(async move {
                                panel.activate(tab).await;
                            });
                        }
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
