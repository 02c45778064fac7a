use super::navigation::DEFAULT_ITEM;
use contracts::system::session::CurrentUser;
use leptos::prelude::*;

/// Общее состояние оболочки: активный пункт меню и текущий пользователь.
///
/// The active id is owned here; the sidebar only reports clicks.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub user: RwSignal<Option<CurrentUser>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_ITEM.to_string()),
            user: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, id: &str) {
        if self.active.with_untracked(|active| active != id) {
            log::debug!("navigate: {}", id);
            self.active.set(id.to_string());
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.with(|active| active == id)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_changes_active_item() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppGlobalContext::new();
        assert!(ctx.is_active(DEFAULT_ITEM));

        ctx.navigate("brands");
        assert!(ctx.is_active("brands"));
        assert!(!ctx.is_active(DEFAULT_ITEM));

        ctx.toggle_left();
        assert!(!ctx.left_open.get_untracked());
    }
}
