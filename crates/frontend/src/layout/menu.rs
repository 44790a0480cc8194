//! Navigation configuration for the console.
//!
//! The menu ships as a JSON document in the raw configuration shape, so the
//! same data could equally be served by the backend; parsing and visibility
//! live in `contracts`.

use contracts::shared::menu::RawMenuEntry;

const MENU_JSON: &str = r#"[
    { "title": "Dashboard", "target": "/", "icon": "layout-dashboard" },
    {
        "title": "Content",
        "icon": "file-text",
        "children": [
            { "title": "Pages", "target": "/content/pages", "icon": "file-text" },
            { "title": "Media", "target": "/content/media", "icon": "image" }
        ]
    },
    {
        "title": "Users",
        "icon": "users",
        "children": [
            { "title": "All users", "target": "/users", "icon": "users" },
            { "title": "Roles", "target": "/users/roles", "icon": "shield" }
        ]
    },
    {
        "title": "Reports",
        "icon": "bar-chart",
        "children": [
            { "title": "Activity", "target": "/reports/activity", "icon": "activity" },
            { "title": "Audit log", "target": "/reports/audit", "icon": "file-text" }
        ]
    },
    { "title": "Settings", "target": "/settings", "icon": "settings" },
    { "title": "Documentation", "target": "/docs", "icon": "book", "isPublic": true }
]"#;

pub fn main_menu() -> Vec<RawMenuEntry> {
    match serde_json::from_str(MENU_JSON) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("invalid menu configuration: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::menu::{parse_menu, MenuEntry};

    #[test]
    fn test_main_menu_parses() {
        let entries = parse_menu(main_menu());
        assert_eq!(entries.len(), 6);
        assert!(matches!(entries[0], MenuEntry::Simple(_)));
        assert!(matches!(entries[1], MenuEntry::Composed(_)));
        assert!(entries[5].is_public());
    }
}
