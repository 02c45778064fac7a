//! Статическое меню админ-панели.

/// Раздел бокового меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSection {
    Main,
    Management,
}

impl NavSection {
    /// Heading shown above the section; the main section has none
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            NavSection::Main => None,
            NavSection::Management => Some("MANAGEMENT SECTION"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub section: NavSection,
}

const fn main(id: &'static str, label: &'static str, icon: &'static str) -> NavItem {
    NavItem {
        id,
        label,
        icon,
        section: NavSection::Main,
    }
}

const fn managed(id: &'static str, label: &'static str, icon: &'static str) -> NavItem {
    NavItem {
        id,
        label,
        icon,
        section: NavSection::Management,
    }
}

pub const DEFAULT_ITEM: &str = "dashboard";

pub const NAV_ITEMS: &[NavItem] = &[
    main("dashboard", "Dashboard", "layout-dashboard"),
    managed("appointments", "Appointments", "heart-plus"),
    managed("brands", "Brands", "user-plus"),
    managed("commission", "Commission", "user-plus"),
    managed("commission-settings", "Commission Settings", "user-plus"),
    managed("create-user", "Create User", "user-plus"),
    managed("doctor", "Doctor", "user-plus"),
    managed("dr-availablities", "Dr Availablities", "user-plus"),
    managed("finance", "Finance", "user-plus"),
    managed("form", "Form", "user-plus"),
    managed("lab-booking", "Lab Booking", "user-plus"),
    managed("lab-results", "Lab Results", "user-plus"),
    managed("labs-emp", "Labs Emp", "user-plus"),
    managed("labs-test", "Labs Test", "user-plus"),
    managed("medical", "Medical", "user-plus"),
    managed("medicine", "Medicine", "user-plus"),
    managed("medicine-purchases", "Medicine Purchases", "user-plus"),
    managed("patients-list", "Patients List", "user-plus"),
    managed("prescriptions", "Prescriptions", "user-plus"),
    managed("receptions", "Receptions", "user-plus"),
    managed("role-management", "Role Management", "user-check"),
    managed("supplier", "Supplier", "user-plus"),
    managed("tax", "Tax", "user-plus"),
    managed("tax-group", "Tax Group", "user-plus"),
    managed("update-user", "Update User", "user-plus"),
    managed("user", "User", "user-plus"),
    managed("user-management", "User Management", "users"),
];

pub fn find_item(id: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.id == id)
}

/// Подпись пункта меню; для неизвестного id возвращается сам id
pub fn label_for(id: &str) -> &str {
    find_item(id).map(|item| item.label).unwrap_or(id)
}

/// Пункты, сгруппированные по разделам в порядке первого появления
pub fn grouped_by_section() -> Vec<(NavSection, Vec<&'static NavItem>)> {
    let mut groups: Vec<(NavSection, Vec<&'static NavItem>)> = Vec::new();
    for item in NAV_ITEMS {
        match groups.iter_mut().find(|(section, _)| *section == item.section) {
            Some((_, items)) => items.push(item),
            None => groups.push((item.section, vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn title_case(id: &str) -> String {
        id.split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = NAV_ITEMS.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_sections_keep_declared_order() {
        let groups = grouped_by_section();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, NavSection::Main);
        assert_eq!(groups[0].1[0].id, DEFAULT_ITEM);

        let management: Vec<&str> = groups[1].1.iter().map(|i| i.id).collect();
        assert_eq!(management.first(), Some(&"appointments"));
        assert_eq!(management.last(), Some(&"user-management"));
        assert_eq!(management.len(), NAV_ITEMS.len() - 1);
    }

    #[test]
    fn test_labels_are_title_cased_ids() {
        for item in NAV_ITEMS {
            assert_eq!(item.label, title_case(item.id), "label of {}", item.id);
        }
    }

    #[test]
    fn test_label_for_unknown_id_falls_back() {
        assert_eq!(label_for("brands"), "Brands");
        assert_eq!(label_for("reports"), "reports");
        assert_eq!(NavSection::Management.heading(), Some("MANAGEMENT SECTION"));
    }
}
