/// Утилиты для списков: поиск по тексту, порядок отображения, UI поиска
use leptos::prelude::*;

/// Trait для типов данных, поддерживающих поиск.
///
/// `Ctx` carries whatever auxiliary data a screen joins in for display, e.g. a
/// lookup table of doctors. Each implementation returns a fixed list of fields;
/// missing values must be returned as empty strings.
pub trait Searchable<Ctx: ?Sized = ()> {
    fn search_fields(&self, ctx: &Ctx) -> Vec<String>;

    /// Текст, по которому ищется подстрока
    fn search_text(&self, ctx: &Ctx) -> String {
        self.search_fields(ctx).join(" ")
    }
}

/// Порядок отображения отфильтрованного списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayOrder {
    /// Как пришло с сервера
    #[default]
    AsFetched,
    /// В обратном порядке (приближение "новые сверху")
    Reversed,
}

/// Запрос сравнивается как есть, без обрезки пробелов; только регистр
fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Проверяет, соответствует ли объект поисковому запросу (case-insensitive)
pub fn matches_query<T, C>(item: &T, ctx: &C, query: &str) -> bool
where
    T: Searchable<C>,
    C: ?Sized,
{
    let needle = normalize_query(query);
    needle.is_empty() || item.search_text(ctx).to_lowercase().contains(&needle)
}

/// Фильтрует список по поисковому запросу.
///
/// Pure and order-preserving: the result is the subsequence of `items` whose
/// search text contains the query. An empty query keeps everything.
pub fn filter_list<T, C>(items: &[T], ctx: &C, query: &str) -> Vec<T>
where
    T: Searchable<C> + Clone,
    C: ?Sized,
{
    let needle = normalize_query(query);
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.search_text(ctx).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn apply_display_order<T>(mut items: Vec<T>, order: DisplayOrder) -> Vec<T> {
    if order == DisplayOrder::Reversed {
        items.reverse();
    }
    items
}

/// Диапазоны совпадений в байтах исходного `text` (case-insensitive).
///
/// Lowercasing may change the byte length of individual chars, so matching
/// runs on the lowercased text and every hit is mapped back to the boundaries
/// of the original chars it covers. Returned ranges never overlap and always
/// fall on char boundaries of `text`.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = normalize_query(filter);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut lowered = String::with_capacity(text.len());
    // Для каждого байта lowered: границы исходного символа
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        for lower in ch.to_lowercase() {
            lowered.push(lower);
            origin.extend(std::iter::repeat((start, end)).take(lower.len_utf8()));
        }
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut from = 0;
    while let Some(pos) = lowered[from..].find(&needle) {
        let hit = from + pos;
        let hit_end = hit + needle.len();
        let start = origin[hit].0;
        let end = origin[hit_end - 1].1;
        match ranges.last_mut() {
            Some(last) if start < last.1 => last.1 = last.1.max(end),
            _ => ranges.push((start, end)),
        }
        from = hit_end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Раскрытая карточка: повторный клик по той же записи сворачивает её
pub fn toggle_expanded<Id: PartialEq>(current: Option<Id>, clicked: Id) -> Option<Id> {
    match current {
        Some(open) if open == clicked => None,
        _ => Some(clicked),
    }
}

/// Поле поиска с кнопкой очистки. Пересчёт на каждое нажатие клавиши.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}
