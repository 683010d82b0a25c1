//! Article Form Component
//!
//! Creates articles, or updates one when an article is loaded for editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_panel;
use crate::models::{Article, ArticleDraft};
use crate::resource::Resource;
use crate::store::{PanelStateStoreFields, StoreSlot};

#[component]
pub fn ArticleForm() -> impl IntoView {
    let panel = use_panel();
    let store = panel.store();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (image, set_image) = signal(String::new());

    let fill = move |draft: ArticleDraft| {
        set_title.set(draft.title);
        set_content.set(draft.content);
        set_image.set(draft.image_path);
    };

    // Prefill when an article is picked for editing
    Effect::new(move |_| {
        if let Some(article) = store.editing_article().get() {
            fill(ArticleDraft::from(&article));
        }
    });

    let submit_panel = panel.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ArticleDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
            image_path: image.get_untracked(),
        };
        let editing = Article::editing(&store).map(|article| article.id());
        let panel = submit_panel.clone();

        spawn_local(async move {
            let saved = match editing {
                Some(id) => panel.update::<Article>(id, draft).await,
                None => panel.create::<Article>(draft).await,
            };
            if saved {
                fill(ArticleDraft::default());
            }
        });
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        panel.cancel_edit::<Article>();
        fill(ArticleDraft::default());
    };

    view! {
        <form id="article-form" class="record-form" on:submit=on_submit>
            <input
                id="article-title"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                id="article-content"
                placeholder="Content"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            ></textarea>
            <input
                id="article-image"
                type="text"
                placeholder="Image path"
                prop:value=move || image.get()
                on:input=move |ev| set_image.set(event_target_value(&ev))
            />
            <button type="submit">
                {move || if store.editing_article().get().is_some() { "Save Article" } else { "Add Article" }}
            </button>
            {move || store.editing_article().get().map(|article| {
                let on_cancel = on_cancel.clone();
                view! {
                    <button type="button" class="cancel-btn" on:click=on_cancel>
                        "Cancel (#" {article.id} ")"
                    </button>
                }
            })}
        </form>
    }
}
