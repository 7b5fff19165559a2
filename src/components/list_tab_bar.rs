//! List Tab Bar Component
//!
//! One tab per list plus a "+" tab. Click activates, long press on the name
//! renames, "×" asks for delete confirmation.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::InlineEdit;
use crate::config::GestureConfig;
use crate::store::{
    store_activate_list, store_add_list, store_rename_list, store_request_delete_list,
    use_app_store, AppStateStoreFields,
};

/// List Tab Bar component
#[component]
pub fn ListTabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="lists-tabs">
            <For
                each=move || store.lists().get()
                // Name is part of the key so a rename re-renders the tab
                key=|list| (list.id, list.name.clone())
                children=move |list| {
                    view! { <ListTab list_id=list.id name=list.name /> }
                }
            />
            <button
                class="tab new-list-tab"
                aria-label="Create new list"
                on:click=move |_| store_add_list(&store)
            >
                "+"
            </button>
        </div>
    }
}

/// A single list tab
#[component]
fn ListTab(list_id: u64, name: String) -> impl IntoView {
    let store = use_app_store();
    let gestures = GestureConfig::default();

    let (editing, set_editing) = signal(false);
    let (long_pressed, set_long_pressed) = signal(false);
    let press_timer = StoredValue::new_local(None::<Timeout>);

    let is_active = move || store.active_list().get() == Some(list_id);
    let tab_class = move || if is_active() { "tab active" } else { "tab" };

    let start_press = move |_| {
        if editing.get_untracked() { return; }
        let timer = Timeout::new(gestures.long_press_ms, move || {
            set_long_pressed.set(true);
            set_editing.set(true);
        });
        press_timer.set_value(Some(timer));
    };
    // Dropping the Timeout cancels it
    let cancel_press = move |_| press_timer.set_value(None);

    let on_click = move |_| {
        if editing.get_untracked() { return; }
        if long_pressed.get_untracked() {
            set_long_pressed.set(false);
            return;
        }
        store_activate_list(&store, list_id);
    };

    // Keyboard activation, matching a native button
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if editing.get_untracked() || ev.target() != ev.current_target() { return; }
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            store_activate_list(&store, list_id);
        }
    };

    let label = name;
    view! {
        <div
            class=tab_class
            role="tab"
            tabindex="0"
            aria-selected=move || is_active().to_string()
            on:click=on_click
            on:keydown=on_keydown
        >
            {move || if editing.get() {
                view! {
                    <InlineEdit
                        initial=label.clone()
                        form_class="list-edit-form"
                        input_class="list-edit-input"
                        on_commit=move |value: String| {
                            store_rename_list(&store, list_id, &value);
                            set_editing.set(false);
                            set_long_pressed.set(false);
                        }
                    />
                }.into_any()
            } else {
                view! {
                    <span
                        class="list-name"
                        on:pointerdown=start_press
                        on:pointerup=cancel_press
                        on:pointerleave=cancel_press
                        on:pointercancel=cancel_press
                    >
                        {label.clone()}
                    </span>
                }.into_any()
            }}
            <button
                class="delete-list"
                aria-label="Delete list"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_request_delete_list(&store, list_id);
                }
            >
                "×"
            </button>
        </div>
    }
}

/// Keys that activate a focused tab
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
