use crate::domain::a001_brand::ui::list::BrandList;
use crate::domain::a002_commission_setting::ui::list::CommissionSettingList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigation::label_for;
use leptos::prelude::*;

/// Рендерит экран по id пункта меню.
///
/// Ids without a screen get a placeholder page titled with the menu label.
pub fn render_page(id: &str) -> AnyView {
    match id {
        // a001: Brands
        "brands" => view! { <BrandList /> }.into_any(),

        // a002: Commission Settings
        "commission-settings" => view! { <CommissionSettingList /> }.into_any(),

        _ => {
            log::debug!("no screen for nav item: {}", id);
            let title = label_for(id).to_string();
            view! {
                <div class="content">
                    <div class="header">
                        <h2>{title}</h2>
                    </div>
                    <div class="placeholder">{"Not implemented yet"}</div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
            {move || render_page(&ctx.active.get())}
        </div>
    }
}
