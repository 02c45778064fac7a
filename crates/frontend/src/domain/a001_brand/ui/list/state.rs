use crate::domain::a001_brand::ui::details::BrandDraft;
use crate::shared::list_utils::{apply_display_order, filter_list, DisplayOrder, Searchable};
use crate::shared::session::{DeleteSession, EditSession, NotifyTexts};
use contracts::domain::a001_brand::aggregate::{Brand, BrandId};
use leptos::prelude::*;

pub const BRAND_TEXTS: NotifyTexts = NotifyTexts {
    created: "Brand added successfully!",
    updated: "Brand updated successfully!",
    deleted: "Brand deleted successfully!",
    mutation_failed: "Something went wrong!",
    delete_failed: "Delete failed!",
};

const BRAND_ORDER: DisplayOrder = DisplayOrder::AsFetched;

impl Searchable for Brand {
    fn search_fields(&self, _ctx: &()) -> Vec<String> {
        vec![self.name.clone()]
    }
}

/// Состояние экрана брендов
#[derive(Clone, Copy)]
pub struct BrandListState {
    pub query: RwSignal<String>,
    pub edit: RwSignal<EditSession<BrandDraft>>,
    pub delete: RwSignal<DeleteSession<BrandId>>,
    /// Раскрытая карточка (мобильный вид)
    pub expanded: RwSignal<Option<BrandId>>,
}

pub fn create_state() -> BrandListState {
    BrandListState {
        query: RwSignal::new(String::new()),
        edit: RwSignal::new(EditSession::default()),
        delete: RwSignal::new(DeleteSession::default()),
        expanded: RwSignal::new(None),
    }
}

/// Видимые строки: фильтр по имени, порядок как с сервера
pub fn visible_brands(items: &[Brand], query: &str) -> Vec<Brand> {
    apply_display_order(filter_list(items, &(), query), BRAND_ORDER)
}
