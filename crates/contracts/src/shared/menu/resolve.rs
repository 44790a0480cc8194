use super::entry::{MenuEntry, RawMenuEntry};

/// Authentication state of the current viewer.
///
/// Owned by the auth layer and passed in explicitly; the resolver reads the
/// single boolean and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewerAuth {
    pub is_authenticated: bool,
}

impl ViewerAuth {
    pub const fn authenticated() -> Self {
        Self {
            is_authenticated: true,
        }
    }

    pub const fn anonymous() -> Self {
        Self {
            is_authenticated: false,
        }
    }
}

/// Options for [`resolve_menu`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveOptions {
    /// When set, non-public entries require an authenticated viewer.
    /// When clear, every entry renders and only the group/leaf shape matters.
    pub enforce_auth_gate: bool,
}

/// Public entries always render; anything else requires authentication.
pub fn is_visible(entry: &MenuEntry, viewer: &ViewerAuth) -> bool {
    entry.is_public() || viewer.is_authenticated
}

/// Parse a configuration sequence into tagged entries, preserving order.
pub fn parse_menu(raw: Vec<RawMenuEntry>) -> Vec<MenuEntry> {
    raw.into_iter().map(MenuEntry::from_raw).collect()
}

/// Parse a server-delivered JSON menu configuration.
pub fn menu_from_json(json: &str) -> Result<Vec<MenuEntry>, serde_json::Error> {
    Ok(parse_menu(serde_json::from_str::<Vec<RawMenuEntry>>(json)?))
}

/// Filter parsed entries for the given viewer.
///
/// Output preserves input order and dropped entries leave no placeholder.
/// A group is admitted or dropped as a unit on its own `public` flag; once
/// admitted, its items render unconditionally.
pub fn resolve_menu(
    entries: Vec<MenuEntry>,
    viewer: &ViewerAuth,
    options: ResolveOptions,
) -> Vec<MenuEntry> {
    entries
        .into_iter()
        .filter(|entry| !options.enforce_auth_gate || is_visible(entry, viewer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const GATED: ResolveOptions = ResolveOptions {
        enforce_auth_gate: true,
    };
    const PERMISSIVE: ResolveOptions = ResolveOptions {
        enforce_auth_gate: false,
    };

    fn sample_menu() -> Vec<MenuEntry> {
        menu_from_json(
            &json!([
                { "title": "Dashboard", "target": "/", "icon": "layout-dashboard" },
                { "title": "Docs", "target": "/docs", "isPublic": true },
                {
                    "title": "Users",
                    "children": [
                        { "title": "All users", "target": "/users" },
                        { "title": "Roles", "target": "/users/roles" }
                    ]
                },
                {
                    "title": "Help",
                    "isPublic": true,
                    "children": [
                        { "title": "About", "target": "/about" }
                    ]
                }
            ])
            .to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_public_entries_visible_regardless_of_auth() {
        for entry in sample_menu().iter().filter(|e| e.is_public()) {
            assert!(is_visible(entry, &ViewerAuth::anonymous()));
            assert!(is_visible(entry, &ViewerAuth::authenticated()));
        }
    }

    #[test]
    fn test_private_entries_require_auth() {
        for entry in sample_menu().iter().filter(|e| !e.is_public()) {
            assert!(!is_visible(entry, &ViewerAuth::anonymous()));
            assert!(is_visible(entry, &ViewerAuth::authenticated()));
        }
    }

    #[test]
    fn test_gated_anonymous_keeps_public_subsequence() {
        let resolved = resolve_menu(sample_menu(), &ViewerAuth::anonymous(), GATED);
        let titles: Vec<&str> = resolved.iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["Docs", "Help"]);
    }

    #[test]
    fn test_gated_authenticated_keeps_everything_in_order() {
        let resolved = resolve_menu(sample_menu(), &ViewerAuth::authenticated(), GATED);
        let titles: Vec<&str> = resolved.iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["Dashboard", "Docs", "Users", "Help"]);
    }

    #[test]
    fn test_permissive_drops_nothing() {
        let resolved = resolve_menu(sample_menu(), &ViewerAuth::anonymous(), PERMISSIVE);
        assert_eq!(resolved.len(), 4);
        assert_eq!(resolved, sample_menu());
    }

    #[test]
    fn test_admitted_group_keeps_all_children() {
        // The gate applies to the group as a unit; children are not
        // re-filtered once the group is in.
        let menu = menu_from_json(
            &json!([
                {
                    "title": "Help",
                    "isPublic": true,
                    "children": [
                        { "title": "About", "target": "/about" },
                        { "title": "Internals", "target": "/internals" }
                    ]
                }
            ])
            .to_string(),
        )
        .unwrap();

        let resolved = resolve_menu(menu, &ViewerAuth::anonymous(), GATED);
        match &resolved[0] {
            MenuEntry::Composed(group) => assert_eq!(group.items.len(), 2),
            MenuEntry::Simple(_) => panic!("expected a group"),
        }
    }
}
