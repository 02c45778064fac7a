use super::model::BrandDraft;
use crate::shared::modal::Modal;
use crate::shared::session::EditSession;
use leptos::prelude::*;
use thaw::*;

/// Форма создания/редактирования бренда.
///
/// Renders only while the session is open; all state lives in `session`.
#[component]
pub fn BrandDetails(
    session: RwSignal<EditSession<BrandDraft>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || {
        if session.with(|s| s.is_editing_existing()) {
            "Update Brand".to_string()
        } else {
            "Add Brand".to_string()
        }
    });
    let submitting = Signal::derive(move || session.with(|s| s.is_submitting()));

    view! {
        <Modal title=title on_close=on_cancel>
            <div class="details-form">
                <div class="form-group">
                    <label for="brand-name">"Name"</label>
                    <input
                        type="text"
                        id="brand-name"
                        placeholder="Brand name"
                        prop:value=move || session.with(|s| s.draft().name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            session.update(|s| s.edit_draft(|d| d.name = value));
                        }
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                on_submit.run(());
                            }
                        }
                    />
                </div>

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
                        {move || if session.with(|s| s.is_editing_existing()) { "Update" } else { "Add" }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
