use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно с заголовком и телом.
///
/// Escape, the close button and a click on the overlay all call `on_close`.
/// Closing does not abort requests already started from the modal.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Диалог подтверждения удаления
#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: String,
    #[prop(into, optional)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    view! {
        <Modal title=Signal::derive(|| "Confirm Delete".to_string()) on_close=on_cancel>
            <p class="modal__message">{message}</p>
            <div class="modal-footer">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                    {icon("trash")}
                    {format!(" {}", confirm_label)}
                </button>
            </div>
        </Modal>
    }
}
