//! New Item Row Component
//!
//! Trailing "+ Add item" row that appends a default-named item.

use leptos::prelude::*;

use crate::store::{store_add_item, use_app_store};

#[component]
pub fn NewItemRow() -> impl IntoView {
    let store = use_app_store();

    view! {
        <li class="list-item new-item">
            <div class="item-content" on:click=move |_| store_add_item(&store)>
                <span class="item-name">
                    <span class="add-icon">"+"</span>
                    "Add item"
                </span>
            </div>
        </li>
    }
}
