use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::api_utils::RestCollection;
use crate::shared::store::{EntityStore, LookupStore};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::session::load_current_user;
use contracts::domain::a001_brand::aggregate::Brand;
use contracts::domain::a002_commission_setting::aggregate::CommissionSetting;
use contracts::domain::a003_doctor::aggregate::Doctor;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(ToastService::new());

    // Сторы живут всё время работы приложения; экраны получают их из контекста
    provide_context(EntityStore::<Brand>::new(Arc::new(RestCollection::new())));
    provide_context(EntityStore::<CommissionSetting>::new(Arc::new(
        RestCollection::new(),
    )));
    provide_context(LookupStore::<Doctor>::new(Arc::new(RestCollection::new())));

    load_current_user(ctx);

    view! {
        <Shell />
        <ToastHost />
    }
}
