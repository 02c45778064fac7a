use super::model::CommissionDraft;
use crate::shared::modal::Modal;
use crate::shared::session::EditSession;
use crate::shared::store::LookupStore;
use contracts::domain::a003_doctor::aggregate::Doctor;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

/// Текстовое поле формы комиссии, связанное с одним полем черновика
fn draft_input(
    session: RwSignal<EditSession<CommissionDraft>>,
    id: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    read: fn(&CommissionDraft) -> String,
    write: fn(&mut CommissionDraft, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <input
                type=input_type
                id=id
                placeholder=placeholder
                prop:value=move || session.with(|s| read(s.draft()))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| s.edit_draft(|d| write(d, value)));
                }
            />
        </div>
    }
}

/// Форма создания/редактирования настройки комиссии
#[component]
pub fn CommissionSettingDetails(
    session: RwSignal<EditSession<CommissionDraft>>,
    doctors: LookupStore<Doctor>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = move || session.with(|s| s.is_editing_existing());
    let title = Signal::derive(move || {
        if editing() {
            "Edit Commission".to_string()
        } else {
            "Add Commission".to_string()
        }
    });
    let submitting = Signal::derive(move || session.with(|s| s.is_submitting()));
    let selected_doctor = move || session.with(|s| s.draft().doctor_id.clone());

    view! {
        <Modal title=title on_close=on_cancel>
            <div class="details-form">
                <div class="form-group">
                    <select
                        id="commission-doctor"
                        prop:value=selected_doctor
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            session.update(|s| s.edit_draft(|d| d.doctor_id = value));
                        }
                    >
                        <option value="">"Select Doctor"</option>
                        {move || {
                            let current = selected_doctor();
                            doctors
                                .table()
                                .entries()
                                .map(|doctor| {
                                    let value = doctor.id.as_string();
                                    let is_selected = value == current;
                                    view! {
                                        <option value=value selected=is_selected>
                                            {doctor.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                {draft_input(
                    session,
                    "commission-type",
                    "text",
                    "Type",
                    |d| d.commission_type.clone(),
                    |d, v| d.commission_type = v,
                )}
                {draft_input(
                    session,
                    "commission-source",
                    "text",
                    "Source",
                    |d| d.source.clone(),
                    |d, v| d.source = v,
                )}
                {draft_input(
                    session,
                    "commission-value",
                    "number",
                    "Value",
                    |d| d.value.clone(),
                    |d, v| d.value = v,
                )}
                {draft_input(
                    session,
                    "commission-calculation",
                    "text",
                    "Calculation Type",
                    |d| d.calculation_type.clone(),
                    |d, v| d.calculation_type = v,
                )}

                {move || session.with(|s| s.validation_error().map(str::to_string)).map(|e| view! {
                    <div class="error">{e}</div>
                })}

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=submitting
                        on_click=move |_| on_submit.run(())
                    >
                        {move || if editing() { "Save" } else { "Add" }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
