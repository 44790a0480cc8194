use serde::{Deserialize, Serialize};

/// Menu entry as it appears in configuration data.
///
/// The configuration format carries no type tag: an entry with a non-empty
/// `children` sequence is a group, anything else is a navigable leaf.
/// [`MenuEntry::from_raw`] performs that discrimination once so downstream
/// code matches on an explicit variant instead of re-checking the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMenuEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, rename = "isPublic", skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawMenuEntry>,
}

/// Navigable leaf entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub title: String,
    pub target: String,
    pub icon: Option<String>,
    pub public: bool,
}

impl MenuItem {
    fn from_raw(raw: RawMenuEntry) -> Self {
        Self {
            title: raw.title,
            target: raw.target.unwrap_or_default(),
            icon: raw.icon,
            public: raw.is_public.unwrap_or(false),
        }
    }
}

/// Group of leaf entries rendered under a common heading.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    pub title: String,
    pub icon: Option<String>,
    pub items: Vec<MenuItem>,
    pub public: bool,
}

/// A configuration entry with the group/leaf distinction made explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Simple(MenuItem),
    Composed(MenuGroup),
}

impl MenuEntry {
    /// Classify a configuration entry by shape.
    ///
    /// An entry is `Composed` iff its `children` sequence is non-empty; a
    /// group declared with an empty `children` list degrades to a leaf.
    /// Children are always leaves; any deeper nesting they declare is
    /// flattened away.
    pub fn from_raw(raw: RawMenuEntry) -> Self {
        if raw.children.is_empty() {
            MenuEntry::Simple(MenuItem::from_raw(raw))
        } else {
            MenuEntry::Composed(MenuGroup {
                title: raw.title,
                icon: raw.icon,
                items: raw.children.into_iter().map(MenuItem::from_raw).collect(),
                public: raw.is_public.unwrap_or(false),
            })
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MenuEntry::Simple(item) => &item.title,
            MenuEntry::Composed(group) => &group.title,
        }
    }

    pub fn is_public(&self) -> bool {
        match self {
            MenuEntry::Simple(item) => item.public,
            MenuEntry::Composed(group) => group.public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawMenuEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_leaf_without_children_is_simple() {
        let entry = MenuEntry::from_raw(raw(json!({
            "title": "Dashboard",
            "target": "/",
            "icon": "layout-dashboard"
        })));
        match entry {
            MenuEntry::Simple(item) => {
                assert_eq!(item.title, "Dashboard");
                assert_eq!(item.target, "/");
                assert!(!item.public);
            }
            MenuEntry::Composed(_) => panic!("expected a leaf"),
        }
    }

    #[test]
    fn test_empty_children_degrades_to_simple() {
        let entry = MenuEntry::from_raw(raw(json!({
            "title": "Content",
            "children": []
        })));
        assert!(matches!(entry, MenuEntry::Simple(_)));
    }

    #[test]
    fn test_non_empty_children_is_composed() {
        let entry = MenuEntry::from_raw(raw(json!({
            "title": "Users",
            "children": [
                { "title": "All users", "target": "/users" },
                { "title": "Roles", "target": "/users/roles" }
            ]
        })));
        match entry {
            MenuEntry::Composed(group) => {
                assert_eq!(group.items.len(), 2);
                assert_eq!(group.items[1].target, "/users/roles");
            }
            MenuEntry::Simple(_) => panic!("expected a group"),
        }
    }

    #[test]
    fn test_is_public_wire_name() {
        let entry = raw(json!({ "title": "Docs", "target": "/docs", "isPublic": true }));
        assert_eq!(entry.is_public, Some(true));

        let serialized = serde_json::to_value(&entry).unwrap();
        assert_eq!(serialized["isPublic"], json!(true));
        // Absent optionals stay off the wire
        assert!(serialized.get("children").is_none());
    }

    #[test]
    fn test_missing_target_defaults_to_empty() {
        let entry = MenuEntry::from_raw(raw(json!({ "title": "Misconfigured" })));
        match entry {
            MenuEntry::Simple(item) => assert_eq!(item.target, ""),
            MenuEntry::Composed(_) => panic!("expected a leaf"),
        }
    }
}
