//! Shopping Lists App
//!
//! Root component: tab bar, active list, and modals.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DeleteListModal, InstructionsModal, ItemListView, ListTabBar};
use crate::lists::resolve_active;
use crate::store::{store_shift_selected, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::load());
    provide_context(store);

    // Keep a valid list active whenever lists exist
    Effect::new(move |_| {
        let active = store.active_list().get();
        let resolved = store.lists().with(|lists| resolve_active(lists, active));
        if resolved != active {
            log::debug!("[APP] active list {:?} -> {:?}", active, resolved);
            store.active_list().set(resolved);
        }
    });

    // Keyboard reorder of the selected item
    let _keys = window_event_listener(ev::keydown, move |ev| {
        if !ev.alt_key() { return; }
        let offset = match ev.key().as_str() {
            "ArrowUp" => -1,
            "ArrowDown" => 1,
            _ => return,
        };
        ev.prevent_default();
        store_shift_selected(&store, offset);
    });

    view! {
        <div class="container">
            <h1>"Shopping Lists"</h1>

            <ListTabBar />

            <ItemListView />

            <Show when=move || store.lists().with(|lists| lists.is_empty())>
                <p class="empty-hint">"Create your first shopping list!"</p>
            </Show>

            <InstructionsModal />
            <DeleteListModal />
        </div>
    }
}
