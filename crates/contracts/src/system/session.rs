use serde::{Deserialize, Serialize};

/// Текущий пользователь панели. Используется только для отображения имени.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl CurrentUser {
    /// Имя для отображения: display_name, иначе username
    pub fn name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => &self.username,
        }
    }

    /// Инициалы (до двух букв) для аватара
    pub fn initials(&self) -> String {
        self.name()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_display_name() {
        let user = CurrentUser {
            username: "admin".into(),
            display_name: Some("jane doe smith".into()),
        };
        assert_eq!(user.name(), "jane doe smith");
        assert_eq!(user.initials(), "JD");
    }

    #[test]
    fn test_falls_back_to_username() {
        let user = CurrentUser {
            username: "admin".into(),
            display_name: Some("  ".into()),
        };
        assert_eq!(user.name(), "admin");
        assert_eq!(user.initials(), "A");
    }
}
