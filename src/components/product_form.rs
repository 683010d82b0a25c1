//! Product Form Component
//!
//! Creates products, or updates one when a product is loaded for editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_panel;
use crate::models::{Product, ProductDraft};
use crate::resource::Resource;
use crate::store::{PanelStateStoreFields, StoreSlot};

#[component]
pub fn ProductForm() -> impl IntoView {
    let panel = use_panel();
    let store = panel.store();

    let (name, set_name) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());

    let fill = move |draft: ProductDraft| {
        set_name.set(draft.product_name);
        set_image.set(draft.product_image_url);
        set_description.set(draft.description);
        set_price.set(draft.price);
    };

    Effect::new(move |_| {
        if let Some(product) = store.editing_product().get() {
            fill(ProductDraft::from(&product));
        }
    });

    let submit_panel = panel.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Sent verbatim: no trimming, no numeric parsing of price
        let draft = ProductDraft {
            product_name: name.get_untracked(),
            product_image_url: image.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
        };
        let editing = Product::editing(&store).map(|product| product.id());
        let panel = submit_panel.clone();

        spawn_local(async move {
            let saved = match editing {
                Some(id) => panel.update::<Product>(id, draft).await,
                None => panel.create::<Product>(draft).await,
            };
            if saved {
                fill(ProductDraft::default());
            }
        });
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        panel.cancel_edit::<Product>();
        fill(ProductDraft::default());
    };

    view! {
        <form id="product-form" class="record-form" on:submit=on_submit>
            <input
                id="product-name"
                type="text"
                placeholder="Product name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                id="product-image"
                type="text"
                placeholder="Image URL"
                prop:value=move || image.get()
                on:input=move |ev| set_image.set(event_target_value(&ev))
            />
            <textarea
                id="product-description"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <input
                id="product-price"
                type="text"
                placeholder="Price"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <button type="submit">
                {move || if store.editing_product().get().is_some() { "Save Product" } else { "Add Product" }}
            </button>
            {move || store.editing_product().get().map(|product| {
                let on_cancel = on_cancel.clone();
                view! {
                    <button type="button" class="cancel-btn" on:click=on_cancel>
                        "Cancel (#" {product.id} ")"
                    </button>
                }
            })}
        </form>
    }
}
