//! Record Actions Component
//!
//! Edit/Delete buttons for one rendered record.

use leptos::prelude::*;

/// Buttons bound at render time to a single record.
/// Delete fires immediately; there is no confirmation step.
#[component]
pub fn RecordActions(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <div class="record-actions">
            <button type="button" class="edit-btn" on:click=move |_| on_edit.run(())>
                "Edit"
            </button>
            <button type="button" class="delete-btn" on:click=move |_| on_delete.run(())>
                "Delete"
            </button>
        </div>
    }
}
