//! Repository URL input with submit handling.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::URL_INPUT_PLACEHOLDER;

stylance::import_crate_style!(css, "src/components/viewer/url_form.module.css");

/// URL input field with a submit button.
///
/// Submission is explicit: the button or Enter. Typing only updates the
/// input signal and never triggers a fetch.
#[component]
pub fn UrlForm(on_submit: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let input_url = ctx.viewer.input_url;
    let phase = ctx.viewer.phase;

    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            on_submit.run(());
        }
    };

    view! {
        <div class=css::form>
            <input
                node_ref=input_ref
                class=css::input
                type="text"
                placeholder=URL_INPUT_PLACEHOLDER
                prop:value=move || input_url.get()
                on:input=move |ev| input_url.set(event_target_value(&ev))
                on:keydown=handle_keydown
                aria-label="GitHub repository URL"
            />
            <button
                class=css::button
                on:click=move |_| on_submit.run(())
                disabled=move || phase.with(|p| p.is_loading())
            >
                <Icon icon=ic::SEARCH />
                <span>"Fetch Tree"</span>
            </button>
        </div>
    }
}
