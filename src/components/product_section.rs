//! Product Section Component
//!
//! Product form plus the rendered products list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{use_panel, BrowserPanel};
use crate::components::{ProductForm, RecordActions};
use crate::models::Product;
use crate::store::{PanelStateStoreFields, Tab};

#[component]
pub fn ProductSection() -> impl IntoView {
    let store = use_panel().store();

    view! {
        <section id="products-section" class=move || store.tab().get().section_class(Tab::Products)>
            <h2>"Products"</h2>
            <ProductForm />
            <ProductList />
        </section>
    }
}

#[component]
fn ProductList() -> impl IntoView {
    let panel = use_panel();
    let store = panel.store();

    view! {
        <ul id="products-list" class="record-list">
            {move || {
                let panel = panel.clone();
                store.products().get().into_iter().map(move |product| {
                    view! { <ProductItem product=product panel=panel.clone() /> }
                }).collect_view()
            }}
        </ul>
    }
}

#[component]
fn ProductItem(product: Product, panel: BrowserPanel) -> impl IntoView {
    let id = product.id;
    let image = product.product_image_url.clone().map(|src| {
        view! { <img src=src alt=product.product_name.clone() class="record-image" /> }
    });
    let price = format!("Price: {}", product.price);

    let edit_panel = panel.clone();
    let record = product.clone();
    let on_edit = Callback::new(move |_: ()| edit_panel.begin_edit(record.clone()));
    let on_delete = Callback::new(move |_: ()| {
        let panel = panel.clone();
        spawn_local(async move {
            panel.delete::<Product>(id).await;
        });
    });

    view! {
        <li class="record-item">
            <h3>{product.product_name}</h3>
            <p>{product.description.unwrap_or_default()}</p>
            <p class="price">{price}</p>
            {image}
            <RecordActions on_edit=on_edit on_delete=on_delete />
        </li>
    }
}
