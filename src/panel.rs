//! Admin Panel Controller
//!
//! Turns UI events into backend calls and writes the results into the store.
//! Every mutation is followed by a full re-fetch of the affected collection.

use leptos::prelude::*;

use crate::api::{self, Transport};
use crate::error::ApiError;
use crate::models::{Article, Product, RecordId};
use crate::notify::{Notice, Notifier};
use crate::store::{PanelStore, PanelStateStoreFields, StoreSlot, Tab};

#[derive(Clone)]
pub struct AdminPanel<T, N> {
    transport: T,
    notifier: N,
    store: PanelStore,
}

impl<T: Transport, N: Notifier> AdminPanel<T, N> {
    pub fn new(transport: T, notifier: N, store: PanelStore) -> Self {
        Self { transport, notifier, store }
    }

    pub fn store(&self) -> PanelStore {
        self.store
    }

    // ========================
    // Tab Selector
    // ========================

    /// Show one section, hide the other, and reload its list
    pub async fn activate(&self, tab: Tab) {
        tracing::debug!(kind = %tab.kind(), "tab activated");
        *self.store.tab().write() = tab;
        match tab {
            Tab::Articles => self.load::<Article>().await,
            Tab::Products => self.load::<Product>().await,
        }
    }

    // ========================
    // Collection Loader
    // ========================

    /// Re-fetch a collection and replace the rendered list.
    /// On failure the previous list stays on screen.
    pub async fn load<R: StoreSlot>(&self) {
        match api::list::<R>(&self.transport).await {
            Ok(records) => {
                tracing::info!(kind = %R::KIND, count = records.len(), "collection loaded");
                R::replace_records(&self.store, records);
            }
            Err(err) => self.report(Notice::LoadFailed(R::KIND), &err),
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Returns true when the backend accepted the record
    pub async fn create<R: StoreSlot>(&self, draft: R::Draft) -> bool {
        match api::create::<R>(&self.transport, &draft).await {
            Ok(()) => {
                tracing::info!(kind = %R::KIND, "record created");
                self.notifier.notify(&Notice::Created(R::KIND));
                self.load::<R>().await;
                true
            }
            Err(err) => {
                self.report(Notice::CreateFailed(R::KIND), &err);
                false
            }
        }
    }

    /// Returns true when the backend accepted the new values
    pub async fn update<R: StoreSlot>(&self, id: RecordId, draft: R::Draft) -> bool {
        match api::update::<R>(&self.transport, id, &draft).await {
            Ok(()) => {
                tracing::info!(kind = %R::KIND, id, "record updated");
                R::set_editing(&self.store, None);
                self.notifier.notify(&Notice::Updated(R::KIND));
                self.load::<R>().await;
                true
            }
            Err(err) => {
                self.report(Notice::UpdateFailed(R::KIND), &err);
                false
            }
        }
    }

    pub async fn delete<R: StoreSlot>(&self, id: RecordId) {
        match api::delete::<R>(&self.transport, id).await {
            Ok(()) => {
                tracing::info!(kind = %R::KIND, id, "record deleted");
                if R::editing(&self.store).map(|r| r.id()) == Some(id) {
                    R::set_editing(&self.store, None);
                }
                self.notifier.notify(&Notice::Deleted(R::KIND));
                self.load::<R>().await;
            }
            Err(err) => self.report(Notice::DeleteFailed(R::KIND), &err),
        }
    }

    // ========================
    // Edit Mode
    // ========================

    /// Load a record into its form; the next submit updates instead of creating
    pub fn begin_edit<R: StoreSlot>(&self, record: R) {
        tracing::debug!(kind = %R::KIND, id = record.id(), "editing record");
        R::set_editing(&self.store, Some(record));
    }

    pub fn cancel_edit<R: StoreSlot>(&self) {
        R::set_editing(&self.store, None);
    }

    /// Single exit for every failed call
    fn report(&self, notice: Notice, err: &ApiError) {
        tracing::error!(error = %err, "{}", notice);
        self.notifier.notify(&notice);
    }
}
