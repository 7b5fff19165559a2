//! Instructions Modal Component
//!
//! First-run gesture cheat sheet. Closing it is remembered in local storage.

use leptos::prelude::*;

use crate::store::{store_dismiss_instructions, use_app_store, AppStateStoreFields};

const INSTRUCTIONS: &[(&str, &str)] = &[
    ("👆", "tap to select an item"),
    ("👆👆", "double tap to cross off"),
    ("👆💫", "long press to edit"),
    ("☰", "drag and drop to reorder"),
];

#[component]
pub fn InstructionsModal() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.show_instructions().get()>
            <div class="instructions-modal">
                <button
                    class="close-instructions"
                    aria-label="Close instructions"
                    on:click=move |_| store_dismiss_instructions(&store)
                >
                    "×"
                </button>
                {INSTRUCTIONS.iter().map(|(icon, text)| view! {
                    <div class="instruction-item">
                        <span class="instruction-icon">{*icon}</span>
                        <span>{*text}</span>
                    </div>
                }).collect_view()}
            </div>
        </Show>
    }
}
