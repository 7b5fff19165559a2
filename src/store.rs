//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every helper
//! that changes the list collection writes the new value through to local
//! storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::lists;
use crate::models::ShoppingList;
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All lists, in tab order
    pub lists: Vec<ShoppingList>,
    /// List currently displayed
    pub active_list: Option<u64>,
    /// Item whose delete control is visible
    pub selected_item: Option<u64>,
    /// Item being renamed inline
    pub editing_item: Option<u64>,
    /// List awaiting delete confirmation
    pub list_to_delete: Option<u64>,
    /// Whether the onboarding instructions are shown
    pub show_instructions: bool,
}

impl AppState {
    /// Build the initial state from local storage
    pub fn load() -> Self {
        let lists = storage::load_lists_or_default();
        let active_list = lists::resolve_active(&lists, None);
        log::info!("[STORE] loaded {} lists", lists.len());
        Self {
            active_list,
            show_instructions: storage::load_show_instructions_or_default(),
            lists,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Current time in milliseconds, used for ids and tap timing
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the collection and persist it. A failed write keeps the
/// in-memory value.
fn commit_lists(store: &AppStore, next: Vec<ShoppingList>) {
    if let Err(e) = storage::save_lists(&next) {
        log::warn!("[STORE] {}; change kept in memory only", e);
    }
    store.lists().set(next);
}

fn clear_item_focus(store: &AppStore) {
    store.selected_item().set(None);
    store.editing_item().set(None);
}

/// Add a new list and make it active
pub fn store_add_list(store: &AppStore) {
    let (next, id) = lists::add_list(&store.lists().get_untracked(), now_ms() as u64);
    log::debug!("[STORE] add list {}", id);
    commit_lists(store, next);
    store_activate_list(store, id);
}

pub fn store_rename_list(store: &AppStore, list_id: u64, name: &str) {
    let current = store.lists().get_untracked();
    let next = lists::rename_list(&current, list_id, name);
    if next != current {
        commit_lists(store, next);
    }
}

/// Show the delete confirmation for a list
pub fn store_request_delete_list(store: &AppStore, list_id: u64) {
    store.list_to_delete().set(Some(list_id));
}

pub fn store_cancel_delete_list(store: &AppStore) {
    store.list_to_delete().set(None);
}

/// Delete the list awaiting confirmation
pub fn store_confirm_delete_list(store: &AppStore) {
    let Some(list_id) = store.list_to_delete().get_untracked() else {
        return;
    };
    let (next, active) = lists::delete_list(
        &store.lists().get_untracked(),
        list_id,
        store.active_list().get_untracked(),
    );
    log::debug!("[STORE] delete list {}, active now {:?}", list_id, active);
    commit_lists(store, next);
    store.list_to_delete().set(None);
    if active != store.active_list().get_untracked() {
        store_activate_list_opt(store, active);
    }
}

pub fn store_activate_list(store: &AppStore, list_id: u64) {
    store_activate_list_opt(store, Some(list_id));
}

fn store_activate_list_opt(store: &AppStore, list_id: Option<u64>) {
    clear_item_focus(store);
    store.active_list().set(list_id);
}

/// Append an item to the active list
pub fn store_add_item(store: &AppStore) {
    let Some(list_id) = store.active_list().get_untracked() else {
        return;
    };
    let (next, id) = lists::add_item(&store.lists().get_untracked(), list_id, now_ms() as u64);
    if id.is_some() {
        commit_lists(store, next);
    }
}

/// Commit an inline rename and leave edit mode. Empty names are discarded.
pub fn store_rename_item(store: &AppStore, item_id: u64, name: &str) {
    if let Some(list_id) = store.active_list().get_untracked() {
        let current = store.lists().get_untracked();
        let next = lists::rename_item(&current, list_id, item_id, name);
        if next != current {
            commit_lists(store, next);
        }
    }
    store.editing_item().set(None);
}

/// Toggle completion and clear the selection
pub fn store_toggle_item(store: &AppStore, item_id: u64) {
    if let Some(list_id) = store.active_list().get_untracked() {
        commit_lists(store, lists::toggle_item(&store.lists().get_untracked(), list_id, item_id));
    }
    store.selected_item().set(None);
}

pub fn store_delete_item(store: &AppStore, item_id: u64) {
    if let Some(list_id) = store.active_list().get_untracked() {
        commit_lists(store, lists::delete_item(&store.lists().get_untracked(), list_id, item_id));
    }
    store.selected_item().set(None);
}

/// Array-move an item within the active list
pub fn store_move_item(store: &AppStore, from: usize, to: usize) {
    if let Some(list_id) = store.active_list().get_untracked() {
        commit_lists(store, lists::move_item(&store.lists().get_untracked(), list_id, from, to));
    }
}

/// Move the selected item up (negative) or down (positive)
pub fn store_shift_selected(store: &AppStore, offset: isize) {
    let (Some(list_id), Some(item_id)) = (
        store.active_list().get_untracked(),
        store.selected_item().get_untracked(),
    ) else {
        return;
    };
    let current = store.lists().get_untracked();
    let next = lists::shift_item(&current, list_id, item_id, offset);
    if next != current {
        commit_lists(store, next);
    }
}

pub fn store_select_item(store: &AppStore, item_id: u64) {
    store.selected_item().set(Some(item_id));
}

/// Enter inline-rename mode for an item
pub fn store_start_editing(store: &AppStore, item_id: u64) {
    store.selected_item().set(None);
    store.editing_item().set(Some(item_id));
}

/// Hide the onboarding instructions for good
pub fn store_dismiss_instructions(store: &AppStore) {
    if let Err(e) = storage::save_show_instructions(false) {
        log::warn!("[STORE] {}", e);
    }
    store.show_instructions().set(false);
}
