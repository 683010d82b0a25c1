//! Article Section Component
//!
//! Article form plus the rendered articles list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{use_panel, BrowserPanel};
use crate::components::{ArticleForm, RecordActions};
use crate::models::Article;
use crate::store::{PanelStateStoreFields, Tab};

#[component]
pub fn ArticleSection() -> impl IntoView {
    let store = use_panel().store();

    view! {
        <section id="articles-section" class=move || store.tab().get().section_class(Tab::Articles)>
            <h2>"Articles"</h2>
            <ArticleForm />
            <ArticleList />
        </section>
    }
}

/// Rebuilt in full whenever the articles list is replaced
#[component]
fn ArticleList() -> impl IntoView {
    let panel = use_panel();
    let store = panel.store();

    view! {
        <ul id="articles-list" class="record-list">
            {move || {
                let panel = panel.clone();
                store.articles().get().into_iter().map(move |article| {
                    view! { <ArticleItem article=article panel=panel.clone() /> }
                }).collect_view()
            }}
        </ul>
    }
}

#[component]
fn ArticleItem(article: Article, panel: BrowserPanel) -> impl IntoView {
    let id = article.id;
    let image = article.image_path.clone().map(|src| {
        view! { <img src=src alt=article.title.clone() class="record-image" /> }
    });

    let edit_panel = panel.clone();
    let record = article.clone();
    let on_edit = Callback::new(move |_: ()| edit_panel.begin_edit(record.clone()));
    let on_delete = Callback::new(move |_: ()| {
        let panel = panel.clone();
        spawn_local(async move {
            panel.delete::<Article>(id).await;
        });
    });

    view! {
        <li class="record-item">
            <h3>{article.title}</h3>
            <p>{article.content}</p>
            {image}
            <RecordActions on_edit=on_edit on_delete=on_delete />
        </li>
    }
}
