//! Item Row Component
//!
//! Individual item in the list. Tap selects, double tap crosses off,
//! long press renames, dragging reorders.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::InlineEdit;
use crate::config::GestureConfig;
use crate::gesture::{is_long_press, TapOutcome, TapTracker};
use crate::models::Item;
use crate::store::{
    now_ms, store_delete_item, store_rename_item, store_select_item, store_start_editing,
    store_toggle_item, use_app_store, AppStateStoreFields,
};

use leptos_dragdrop::*;

/// A single item row
#[component]
pub fn ItemRow(
    item: Item,
    index: usize,
    dnd: DndSignals,
    taps: StoredValue<TapTracker>,
) -> impl IntoView {
    let store = use_app_store();
    let gestures = GestureConfig::default();

    let id = item.id;
    let completed = item.completed;
    let name = item.name;

    let is_selected = move || store.selected_item().get() == Some(id);
    let is_editing = Signal::derive(move || store.editing_item().get() == Some(id));

    // Long press state
    let press_timer = StoredValue::new_local(None::<Timeout>);
    let press_started = StoredValue::new(None::<f64>);

    let start_press = move |_| {
        if is_editing.get_untracked() { return; }
        press_started.set_value(Some(now_ms()));
        let timer = Timeout::new(gestures.long_press_ms, move || {
            // A press that became a drag is not a long press
            if dnd.is_dragging_untracked() { return; }
            log::debug!("[ITEM] long press on {}", id);
            taps.update_value(|t| t.reset());
            store_start_editing(&store, id);
        });
        press_timer.set_value(Some(timer));
    };
    let cancel_press = move |_| press_timer.set_value(None);

    let on_click = move |_| {
        if is_editing.get_untracked() || dnd.suppress_click_untracked() { return; }
        let now = now_ms();
        // The click that ends a long press is not a tap
        if let Some(started) = press_started.get_value() {
            press_started.set_value(None);
            if is_long_press(now - started, &gestures) { return; }
        }
        let mut tracker = taps.get_value();
        let outcome = tracker.tap(id, now, &gestures);
        taps.set_value(tracker);
        match outcome {
            TapOutcome::Select(id) => store_select_item(&store, id),
            TapOutcome::ToggleComplete(id) => {
                log::debug!("[ITEM] toggle {}", id);
                store_toggle_item(&store, id);
            }
        }
    };

    let on_drag_pointerdown = make_on_pointerdown(dnd, id, index, is_editing);

    let row_class = move || {
        let mut c = String::from("list-item");
        if is_selected() { c.push_str(" selected"); }
        if dnd.dragging_id() == Some(id) { c.push_str(" dragging"); }
        if completed { c.push_str(" completed"); }
        c
    };

    view! {
        <li
            class=row_class
            data-dnd-index=index.to_string()
            on:pointerdown=on_drag_pointerdown
        >
            <div
                class="item-content"
                on:pointerdown=start_press
                on:pointerup=cancel_press
                on:pointerleave=cancel_press
                on:pointercancel=cancel_press
                on:click=on_click
            >
                {move || if is_editing.get() {
                    let name = name.clone();
                    view! {
                        <InlineEdit
                            initial=name
                            form_class="edit-form"
                            input_class="edit-input"
                            on_commit=move |value: String| store_rename_item(&store, id, &value)
                        />
                    }.into_any()
                } else {
                    view! {
                        <div class="item-content-inner">
                            <span class="item-name">{name.clone()}</span>
                            <Show when=is_selected>
                                <button
                                    class="delete-item"
                                    aria-label="Delete item"
                                    on:pointerdown=|ev| ev.stop_propagation()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                        store_delete_item(&store, id);
                                    }
                                >
                                    "×"
                                </button>
                            </Show>
                        </div>
                    }.into_any()
                }}
            </div>
        </li>
    }
}
