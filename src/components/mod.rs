//! UI Components
//!
//! Reusable Leptos components.

mod inline_edit;
mod list_tab_bar;
mod item_list_view;
mod item_row;
mod new_item_row;
mod delete_list_modal;
mod instructions_modal;

pub use inline_edit::InlineEdit;
pub use list_tab_bar::ListTabBar;
pub use item_list_view::ItemListView;
pub use item_row::ItemRow;
pub use new_item_row::NewItemRow;
pub use delete_list_modal::DeleteListModal;
pub use instructions_modal::InstructionsModal;
