pub mod state;

use self::state::{create_state, visible_brands, BRAND_TEXTS};
use crate::domain::a001_brand::ui::details::BrandDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, toggle_expanded, SearchInput};
use crate::shared::modal::ConfirmDialog;
use crate::shared::session::{confirm_delete, submit_edit};
use crate::shared::store::EntityStore;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_brand::aggregate::Brand;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    let store =
        use_context::<EntityStore<Brand>>().expect("EntityStore<Brand> not found in context");
    let toasts = use_toasts();
    let state = create_state();
    let store_state = store.state();

    let fetch = {
        let store = store.clone();
        move || {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Ошибка уже лежит в сторе и показывается баннером
                let _ = store.fetch_all().await;
            });
        }
    };

    let on_submit = {
        let store = store.clone();
        Callback::new(move |_: ()| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = submit_edit(state.edit, &store, &toasts, &BRAND_TEXTS).await {
                    log::warn!("brand form not saved: {}", e);
                }
            });
        })
    };

    let on_confirm_delete = {
        let store = store.clone();
        Callback::new(move |_: ()| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = confirm_delete(state.delete, &store, &toasts, &BRAND_TEXTS).await {
                    log::warn!("brand not deleted: {}", e);
                }
            });
        })
    };

    let on_cancel_edit = Callback::new(move |_: ()| state.edit.update(|s| s.cancel()));
    let on_cancel_delete = Callback::new(move |_: ()| state.delete.update(|d| d.cancel()));

    let is_loading = {
        let store = store.clone();
        move || store.is_loading()
    };
    let rows = move || store_state.with(|s| visible_brands(s.items(), &state.query.get()));

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <div class="header__title">
                    <h2>"Brand Management"</h2>
                    <p class="header__subtitle">"Manage system brands"</p>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.edit.update(|s| s.open_new())
                    >
                        "+ New Brand"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                    </Button>
                    <SearchInput
                        value=state.query
                        on_change=Callback::new(move |v: String| state.query.set(v))
                        placeholder="Search brands..."
                    />
                </div>
            </div>

            <Show when=is_loading>
                <div class="loading">
                    <Spinner />
                    <span>"Loading..."</span>
                </div>
            </Show>

            {move || store.error().map(|e| view! {
                <div class="error">{format!("Error: {}", e)}</div>
            })}

            <div class="table-container">
                <div class="table__summary">
                    {move || format!("Total Brands: {}", rows().len())}
                </div>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"S.No"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="3">
                                            "No brands found."
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            let query = state.query.get_untracked();
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, brand)| {
                                    let id = brand.id;
                                    let name = highlight_matches(&brand.name, &query);
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{index + 1}</td>
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--primary button--small"
                                                    on:click=move |_| state.edit.update(|s| s.open_edit(&brand))
                                                >
                                                    {icon("edit")}
                                                    " Update"
                                                </button>
                                                <button
                                                    class="button button--danger button--small"
                                                    on:click=move |_| state.delete.update(|d| d.request(id))
                                                >
                                                    {icon("trash")}
                                                    " Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="card-list">
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        return view! { <p class="card-list__empty">"No brands found."</p> }.into_any();
                    }
                    rows.into_iter()
                        .map(|brand| {
                            let id = brand.id;
                            let name = brand.name.clone();
                            let is_open = move || state.expanded.get() == Some(id);
                            view! {
                                <div class="card">
                                    <div class="card__header">
                                        <p class="card__title">{name}</p>
                                        <button
                                            class="card__toggle"
                                            on:click=move |_| state.expanded.update(|e| *e = toggle_expanded(*e, id))
                                        >
                                            {icon("more-vertical")}
                                        </button>
                                    </div>
                                    <Show when=is_open>
                                        <div class="card__body">
                                            <button
                                                class="button button--primary button--small"
                                                on:click={
                                                    let brand = brand.clone();
                                                    move |_| state.edit.update(|s| s.open_edit(&brand))
                                                }
                                            >
                                                {icon("edit")}
                                                " Update"
                                            </button>
                                            <button
                                                class="button button--danger button--small"
                                                on:click=move |_| state.delete.update(|d| d.request(id))
                                            >
                                                {icon("trash")}
                                                " Delete"
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <Show when=move || state.edit.with(|s| s.is_open())>
                <BrandDetails session=state.edit on_submit=on_submit on_cancel=on_cancel_edit />
            </Show>

            <Show when=move || state.delete.with(|d| d.is_pending())>
                <ConfirmDialog
                    message="Are you sure you want to delete this brand?"
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
