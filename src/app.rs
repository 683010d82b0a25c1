//! Shop Admin Panel App
//!
//! Root component: tab bar over the articles and products sections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpTransport;
use crate::components::{ArticleSection, ProductSection, TabBar};
use crate::config::ApiConfig;
use crate::notify::AlertNotifier;
use crate::panel::AdminPanel;
use crate::store::{PanelState, Tab};

/// The controller as wired in the browser
pub type BrowserPanel = AdminPanel<HttpTransport, AlertNotifier>;

/// Get the panel from context
pub fn use_panel() -> BrowserPanel {
    expect_context::<BrowserPanel>()
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    tracing::info!(api_base = config.base_url(), "starting admin panel");

    let panel = AdminPanel::new(
        HttpTransport::new(config),
        AlertNotifier,
        Store::new(PanelState::default()),
    );
    provide_context(panel.clone());

    // Populate the default tab once on mount
    Effect::new(move |_| {
        let panel = panel.clone();
        spawn_local(async move {
            panel.activate(Tab::default()).await;
        });
    });

    view! {
        <div class="admin-layout">
            <h1>"Admin Panel"</h1>
            <TabBar />
            <ArticleSection />
            <ProductSection />
        </div>
    }
}
