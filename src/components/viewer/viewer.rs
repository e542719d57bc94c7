//! Main viewer component: layout, submission flow, and export action.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use repotree_core::{RepoLocator, TreeListing};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::viewer::{TreeList, UrlForm};
use crate::config::{messages, APP_NAME, APP_VERSION, EXAMPLE_REPO_URL, GITHUB_API_BASE};
use crate::models::FetchPhase;
use crate::utils::{export, fetch_json};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Run one submission: parse the URL, fetch the listing, resolve the phase.
///
/// The machine enters `Loading` before validation, matching the submit
/// semantics: every submission restarts the attempt regardless of the
/// current phase. A parse failure resolves immediately and issues no
/// network request.
fn submit(ctx: AppContext) {
    let token = ctx.viewer.begin_fetch();

    let locator = match RepoLocator::parse(&ctx.viewer.input_url.get_untracked()) {
        Ok(locator) => locator,
        Err(_) => {
            ctx.viewer
                .resolve(token, FetchPhase::Failed(messages::INVALID_URL.to_string()));
            return;
        }
    };

    spawn_local(async move {
        let result = fetch_json::<TreeListing>(&locator.trees_url(GITHUB_API_BASE)).await;

        match &result {
            Ok(listing) if listing.truncated => {
                web_sys::console::warn_1(
                    &format!(
                        "{}/{}: listing truncated by the API, tree is partial",
                        locator.owner, locator.repo
                    )
                    .into(),
                );
            }
            Err(err) => {
                web_sys::console::error_1(&format!("tree fetch failed: {}", err).into());
            }
            _ => {}
        }

        ctx.viewer.resolve(token, FetchPhase::from_listing(result));
    });
}

/// Export the current tree as a PNG. Failures only reach the console and
/// leave the displayed phase untouched.
fn export_current(ctx: AppContext) {
    ctx.viewer.phase.with_untracked(|phase| {
        if let Some(tree) = phase.tree()
            && let Err(err) = export::export_tree_png(tree)
        {
            web_sys::console::error_1(&format!("export failed: {}", err).into());
        }
    });
}

/// Main viewer layout.
#[component]
pub fn Viewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let phase = ctx.viewer.phase;

    let on_submit = Callback::new(move |_: ()| submit(ctx));

    view! {
        <main class=css::viewer>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::hint>
                    "Enter a public GitHub repo URL (e.g. "
                    <code>{EXAMPLE_REPO_URL}</code>
                    ")"
                </p>
            </header>

            <UrlForm on_submit=on_submit />

            <section class=css::output aria-live="polite">
                {move || phase.with(|p| p.is_loading().then(|| view! {
                    <p class=css::loading>"Loading..."</p>
                }))}
                {move || phase.with(|p| p.error().map(|message| view! {
                    <p class=css::error>{message.to_string()}</p>
                }))}
                {move || phase.with(|p| p.tree().map(|tree| view! {
                    <div class=css::summary>
                        <span class=css::count>{format!("{} entries", tree.node_count())}</span>
                        <button
                            class=css::exportButton
                            on:click=move |_| export_current(ctx)
                        >
                            <Icon icon=ic::DOWNLOAD />
                            <span>"Export PNG"</span>
                        </button>
                    </div>
                }))}
                <TreeList />
            </section>

            <footer class=css::footer>{format!("{} v{}", APP_NAME, APP_VERSION)}</footer>
        </main>
    }
}
