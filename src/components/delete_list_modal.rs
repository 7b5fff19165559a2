//! Delete List Modal Component
//!
//! Confirmation dialog shown before a list is deleted.

use leptos::prelude::*;

use crate::store::{
    store_cancel_delete_list, store_confirm_delete_list, use_app_store, AppStateStoreFields,
};

#[component]
pub fn DeleteListModal() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.list_to_delete().get().is_some()>
            <div class="delete-modal">
                <p>"Delete this list?"</p>
                <div class="delete-modal-actions">
                    <button
                        class="confirm-btn"
                        on:click=move |_| store_confirm_delete_list(&store)
                    >
                        "Delete"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |_| store_cancel_delete_list(&store)
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}
