//! Боковое меню админ-панели.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigation::{grouped_by_section, NavItem};
use crate::shared::icons::icon;
use contracts::system::session::CurrentUser;
use leptos::html;
use leptos::prelude::*;

const GUEST_NAME: &str = "Guest";
const GUEST_INITIALS: &str = "GU";

/// Запомненная прокрутка списка меню.
///
/// Re-rendering after navigation resets the list to the top; the last offset
/// the user scrolled to is put back unless the list is already there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMemory {
    offset: i32,
}

impl ScrollMemory {
    pub fn remember(&mut self, offset: i32) {
        // overscroll на тачпадах даёт отрицательные значения
        self.offset = offset.max(0);
    }

    pub fn restore_to(&self, current: i32) -> Option<i32> {
        (current != self.offset).then_some(self.offset)
    }
}

#[component]
fn SidebarItem(item: &'static NavItem) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <button
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.is_active(item.id)
            on:click=move |_| ctx.navigate(item.id)
        >
            <div class="app-sidebar__item-content">
                {icon(item.icon)}
                <span>{item.label}</span>
            </div>
        </button>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Прокрутка списка переживает смену активного пункта
    let nav_ref = NodeRef::<html::Div>::new();
    let last_scroll = StoredValue::new(ScrollMemory::default());

    Effect::new(move |_| {
        ctx.active.track();
        if let Some(nav) = nav_ref.get_untracked() {
            if let Some(top) = last_scroll.with_value(|m| m.restore_to(nav.scroll_top())) {
                nav.set_scroll_top(top);
            }
        }
    });

    let user_name = move || {
        ctx.user
            .with(|u| u.as_ref().map(|u| u.name().to_string()))
            .unwrap_or_else(|| GUEST_NAME.to_string())
    };
    let user_initials = move || {
        ctx.user
            .with(|u| u.as_ref().map(CurrentUser::initials))
            .filter(|initials| !initials.is_empty())
            .unwrap_or_else(|| GUEST_INITIALS.to_string())
    };

    view! {
        <div class="app-sidebar">
            <div class="app-sidebar__header">
                <div class="app-sidebar__logo">{icon("shield")}</div>
                <span class="app-sidebar__title">"Admin Panel"</span>
            </div>

            <div
                class="app-sidebar__content"
                node_ref=nav_ref
                on:scroll=move |_| {
                    if let Some(nav) = nav_ref.get_untracked() {
                        let top = nav.scroll_top();
                        last_scroll.update_value(|m| m.remember(top));
                    }
                }
            >
                {grouped_by_section()
                    .into_iter()
                    .map(|(section, items)| {
                        view! {
                            <div class="app-sidebar__section">
                                {section.heading().map(|heading| view! {
                                    <h3 class="app-sidebar__heading">{heading}</h3>
                                })}
                                {items
                                    .into_iter()
                                    .map(|item| view! { <SidebarItem item=item /> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="app-sidebar__footer">
                <div class="app-sidebar__avatar">{user_initials}</div>
                <div class="app-sidebar__user">
                    <p class="app-sidebar__user-name">{user_name}</p>
                    <p class="app-sidebar__user-role">"Administrator"</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_is_restored_after_reset() {
        let mut memory = ScrollMemory::default();
        memory.remember(240);

        // список перерисован и прыгнул наверх
        assert_eq!(memory.restore_to(0), Some(240));
        assert_eq!(memory.restore_to(240), None);
    }

    #[test]
    fn test_untouched_list_stays_at_top() {
        let memory = ScrollMemory::default();
        assert_eq!(memory.restore_to(0), None);
    }

    #[test]
    fn test_latest_offset_wins_and_overscroll_is_clamped() {
        let mut memory = ScrollMemory::default();
        memory.remember(120);
        memory.remember(60);
        assert_eq!(memory.restore_to(0), Some(60));

        memory.remember(-15);
        assert_eq!(memory.restore_to(30), Some(0));
    }
}
