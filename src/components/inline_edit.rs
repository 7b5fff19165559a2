//! Inline Edit Component
//!
//! Text input that replaces a label while renaming. Commits on submit or
//! blur, whichever comes first.

use leptos::html::Input;
use leptos::prelude::*;

#[component]
pub fn InlineEdit(
    /// Text the input starts with
    #[prop(into)] initial: String,
    #[prop(into)] form_class: String,
    #[prop(into)] input_class: String,
    /// Receives the raw input; empty values are the callee's to discard
    #[prop(into)] on_commit: Callback<String>,
) -> impl IntoView {
    let (value, set_value) = signal(initial);
    let committed = StoredValue::new(false);
    let input_ref = NodeRef::<Input>::new();

    // Focus with text selected as soon as the input is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    let commit = move || {
        if committed.get_value() { return; }
        committed.set_value(true);
        on_commit.run(value.get_untracked());
    };

    view! {
        <form
            class=form_class
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                commit();
            }
            on:click=|ev| ev.stop_propagation()
        >
            <input
                node_ref=input_ref
                type="text"
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                on:blur=move |_| commit()
            />
        </form>
    }
}
