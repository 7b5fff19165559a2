//! Item List View Component
//!
//! Displays the active list's items with drag-to-reorder.
//! Uses leptos-dragdrop with explicit DropZones between rows; rows and
//! zones are found under the pointer through their `data-dnd-*` attributes.

use leptos::prelude::*;

use crate::components::{ItemRow, NewItemRow};
use crate::gesture::TapTracker;
use crate::lists::find_list;
use crate::models::Item;
use crate::store::{store_move_item, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Item list view component with DnD support
#[component]
pub fn ItemListView() -> impl IntoView {
    let store = use_app_store();

    let dnd = create_dnd_signals();
    bind_global_pointerup(dnd, move |from, to| store_move_item(&store, from, to));

    // Shared across rows so a tap on another row breaks a double tap
    let taps = StoredValue::new(TapTracker::new());

    let items = Memo::new(move |_| {
        let active = store.active_list().get();
        store.lists().with(|lists| {
            active
                .and_then(|id| find_list(lists, id))
                .map(|list| list.items.clone())
                .unwrap_or_default()
        })
    });
    let has_active = Memo::new(move |_| {
        let active = store.active_list().get();
        store.lists().with(|lists| active.is_some_and(|id| find_list(lists, id).is_some()))
    });

    let indexed = move || items.get().into_iter().enumerate().collect::<Vec<(usize, Item)>>();

    view! {
        <Show when=move || has_active.get()>
            <div class="active-list">
                <ul class="items-list">
                    <DropZone dnd=dnd zone_slot=0 />
                    <For
                        each=indexed
                        // Index is part of the key: row handlers capture it
                        key=|(index, item)| (*index, item.id, item.name.clone(), item.completed)
                        children=move |(index, item)| {
                            view! {
                                <ItemRow item=item index=index dnd=dnd taps=taps />
                                <DropZone dnd=dnd zone_slot=index + 1 />
                            }
                        }
                    />
                    <NewItemRow />
                </ul>
            </div>
        </Show>
    }
}

/// Drop zone component - a horizontal gap a row can be dropped into
#[component]
pub fn DropZone(dnd: DndSignals, zone_slot: usize) -> impl IntoView {
    let slot = zone_slot;
    let is_active = move || dnd.drop_slot_read.get() == Some(slot);
    // Only show when dragging
    let is_dragging = move || dnd.dragging_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <li class=zone_class data-dnd-slot=slot.to_string() />
    }
}
