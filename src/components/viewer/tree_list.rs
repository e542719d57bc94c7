//! Nested tree listing component.
//!
//! Renders the fetched tree as nested unordered lists in listing order,
//! directories with a folder icon and bold name, files with a file icon.

use leptos::prelude::*;
use leptos_icons::Icon;

use repotree_core::TreeNode;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TREE_REGION_ID;

stylance::import_crate_style!(css, "src/components/viewer/tree_list.module.css");

fn branch(nodes: &[TreeNode]) -> AnyView {
    view! {
        <ul class=css::branch>
            {nodes.iter().map(item).collect_view()}
        </ul>
    }
    .into_any()
}

fn item(node: &TreeNode) -> AnyView {
    let is_dir = node.is_dir();
    let icon = if is_dir { ic::FOLDER } else { ic::FILE };
    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };
    let aria_label = if is_dir {
        format!("Folder: {}", node.name())
    } else {
        format!("File: {}", node.name())
    };

    view! {
        <li class=css::item aria-label=aria_label>
            <span class=css::icon aria-hidden="true">
                <Icon icon=icon />
            </span>
            <span class=name_class>{node.name().to_string()}</span>
            {(!node.children().is_empty()).then(|| branch(node.children()))}
        </li>
    }
    .into_any()
}

/// The rendered tree region.
///
/// Present only in the `Ready` phase; an empty repository renders an
/// empty-listing hint rather than an error. The region carries a stable id
/// so the exporter can reference the same content the user sees.
#[component]
pub fn TreeList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let phase = ctx.viewer.phase;

    move || {
        phase.with(|p| match p.tree() {
            Some(tree) if tree.is_empty() => view! {
                <p class=css::empty>"Repository is empty."</p>
            }
            .into_any(),
            Some(tree) => view! {
                <div id=TREE_REGION_ID class=css::region>
                    {branch(tree.children())}
                </div>
            }
            .into_any(),
            None => ().into_any(),
        })
    }
}
