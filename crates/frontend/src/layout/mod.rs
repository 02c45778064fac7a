pub mod center;
pub mod global_context;
pub mod left;
pub mod navigation;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Оболочка приложения.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |    Content (active screen)   |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <left::Sidebar />
                </div>
                <button
                    class="button button--icon app-layout__toggle"
                    title="Toggle menu"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("more-vertical")}
                </button>
                <center::Center />
            </div>
        </div>
    }
}
