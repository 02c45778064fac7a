pub mod state;

use self::state::{create_state, load_errors, visible_commissions, COMMISSION_TEXTS};
use crate::domain::a002_commission_setting::ui::details::CommissionSettingDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{toggle_expanded, SearchInput};
use crate::shared::modal::ConfirmDialog;
use crate::shared::session::{confirm_delete, submit_edit};
use crate::shared::store::{EntityStore, LookupStore};
use crate::shared::toast::use_toasts;
use contracts::domain::a002_commission_setting::aggregate::CommissionSetting;
use contracts::domain::a003_doctor::aggregate::Doctor;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CommissionSettingList() -> impl IntoView {
    let store = use_context::<EntityStore<CommissionSetting>>()
        .expect("EntityStore<CommissionSetting> not found in context");
    let doctors =
        use_context::<LookupStore<Doctor>>().expect("LookupStore<Doctor> not found in context");
    let toasts = use_toasts();
    let state = create_state();
    let store_state = store.state();

    let fetch = {
        let store = store.clone();
        let doctors = doctors.clone();
        move || {
            let store = store.clone();
            let doctors = doctors.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Ошибки обоих запросов лежат в сторах и показываются баннерами
                if let Err(e) = doctors.fetch().await {
                    log::warn!("doctor lookup unavailable, labels degrade to ids: {}", e);
                }
                let _ = store.fetch_all().await;
            });
        }
    };

    let on_submit = {
        let store = store.clone();
        Callback::new(move |_: ()| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = submit_edit(state.edit, &store, &toasts, &COMMISSION_TEXTS).await {
                    log::warn!("commission form not saved: {}", e);
                }
            });
        })
    };

    let on_confirm_delete = {
        let store = store.clone();
        Callback::new(move |_: ()| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) =
                    confirm_delete(state.delete, &store, &toasts, &COMMISSION_TEXTS).await
                {
                    log::warn!("commission not deleted: {}", e);
                }
            });
        })
    };

    let on_cancel_edit = Callback::new(move |_: ()| state.edit.update(|s| s.cancel()));
    let on_cancel_delete = Callback::new(move |_: ()| state.delete.update(|d| d.cancel()));

    let doctors_for_errors = doctors.clone();
    let is_loading = {
        let store = store.clone();
        move || store.is_loading()
    };
    let rows = {
        let doctors = doctors.clone();
        move || {
            let table = doctors.table();
            store_state.with(|s| visible_commissions(s.items(), &table, &state.query.get()))
        }
    };
    let doctor_label = {
        let doctors = doctors.clone();
        move |setting: &CommissionSetting| doctors.table_untracked().label(setting.doctor_id)
    };
    let card_rows = rows.clone();
    let card_label = doctor_label.clone();

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <div class="header__title">
                    {icon("shield")}
                    <div>
                        <h2>"Commission Settings"</h2>
                        <p class="header__subtitle">"Manage doctor commissions"</p>
                    </div>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.edit.update(|s| s.open_new())
                    >
                        "+ New Commission"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                    </Button>
                    <SearchInput
                        value=state.query
                        on_change=Callback::new(move |v: String| state.query.set(v))
                        placeholder="Search by doctor..."
                    />
                </div>
            </div>

            <Show when=is_loading>
                <div class="loading">
                    <Spinner />
                    <span>"Loading..."</span>
                </div>
            </Show>

            {move || {
                load_errors(store.error(), doctors_for_errors.error())
                    .into_iter()
                    .map(|banner| view! { <div class="error">{banner}</div> })
                    .collect_view()
            }}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"S.No"</th>
                            <th class="table__header-cell">"Doctor"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Source"</th>
                            <th class="table__header-cell">"Value"</th>
                            <th class="table__header-cell">"Calculation"</th>
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="7">
                                            "No commissions found"
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, setting)| {
                                    let id = setting.id;
                                    let doctor = doctor_label(&setting);
                                    let value = setting.value_display();
                                    let kind = setting.commission_type.clone();
                                    let source = setting.source.clone();
                                    let calculation = setting.calculation_type.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{index + 1}</td>
                                            <td class="table__cell">{doctor}</td>
                                            <td class="table__cell">{kind}</td>
                                            <td class="table__cell">{source}</td>
                                            <td class="table__cell">{value}</td>
                                            <td class="table__cell">{calculation}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--primary button--small"
                                                    on:click=move |_| state.edit.update(|s| s.open_edit(&setting))
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
                    let rows = card_rows();
                    if rows.is_empty() {
                        return view! { <p class="card-list__empty">"No commissions found."</p> }
                            .into_any();
                    }
                    rows.into_iter()
                        .map(|setting| {
                            let id = setting.id;
                            let doctor = card_label(&setting);
                            let value = setting.value_display();
                            let kind = setting.commission_type.clone();
                            let source = setting.source.clone();
                            let calculation = setting.calculation_type.clone();
                            let is_open = move || state.expanded.get() == Some(id);
                            view! {
                                <div class="card">
                                    <div class="card__header">
                                        <div>
                                            <p class="card__title">{doctor}</p>
                                            <p class="card__subtitle">{value}</p>
                                        </div>
                                        <button
                                            class=move || if is_open() { "card__toggle card__toggle--open" } else { "card__toggle" }
                                            on:click=move |_| state.expanded.update(|e| *e = toggle_expanded(*e, id))
                                        >
                                            {icon("chevron-up")}
                                        </button>
                                    </div>
                                    <Show when=is_open>
                                        <div class="card__body">
                                            <p><b>"Type: "</b>{kind.clone()}</p>
                                            <p><b>"Source: "</b>{source.clone()}</p>
                                            <p><b>"Calculation: "</b>{calculation.clone()}</p>
                                            <div class="card__actions">
                                                <button
                                                    class="button button--primary button--small"
                                                    on:click={
                                                        let setting = setting.clone();
                                                        move |_| state.edit.update(|s| s.open_edit(&setting))
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
                <CommissionSettingDetails
                    session=state.edit
                    doctors=doctors.clone()
                    on_submit=on_submit
                    on_cancel=on_cancel_edit
                />
            </Show>

            <Show when=move || state.delete.with(|d| d.is_pending())>
                <ConfirmDialog
                    message="Are you sure you want to delete this commission?"
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
