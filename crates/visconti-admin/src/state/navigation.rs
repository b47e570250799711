//! Navigation entries and shell layout state

use visconti_core::Strings;

/// One destination in the sidebar
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    /// Route path
    pub href: &'static str,
    /// Icon glyph shown before the label
    pub icon: &'static str,
    label: fn(&Strings) -> &'static str,
}

impl NavEntry {
    /// Label in the active language
    pub fn label(&self, strings: &Strings) -> &'static str {
        (self.label)(strings)
    }

    /// Whether `path` is this entry or one of its sub-pages
    pub fn is_active(&self, path: &str) -> bool {
        path == self.href
            || path
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Sidebar destinations in display order
pub static NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry {
        href: "/admin/dashboard",
        icon: "▦",
        label: |s| s.nav_dashboard,
    },
    NavEntry {
        href: "/admin/menu",
        icon: "☰",
        label: |s| s.nav_menu,
    },
    NavEntry {
        href: "/admin/offer",
        icon: "%",
        label: |s| s.nav_offers,
    },
    NavEntry {
        href: "/admin/settings",
        icon: "⚙",
        label: |s| s.nav_settings,
    },
    NavEntry {
        href: "/admin/menu-img",
        icon: "▣",
        label: |s| s.nav_menu_images,
    },
];

/// The entry matching `path`, if any
pub fn active_entry(path: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|entry| entry.is_active(path))
}

/// Header title for `path`
pub fn page_title(path: &str, strings: &Strings) -> &'static str {
    active_entry(path).map_or(strings.nav_dashboard, |entry| entry.label(strings))
}

/// Collapse and overlay state of the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    /// Desktop sidebar shows labels
    pub sidebar_expanded: bool,
    /// Mobile overlay is shown
    pub mobile_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            sidebar_expanded: true,
            mobile_open: false,
        }
    }
}

impl ShellState {
    /// Flip the desktop sidebar width
    pub const fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    /// Show the mobile overlay
    pub const fn open_mobile(&mut self) {
        self.mobile_open = true;
    }

    /// Hide the mobile overlay, after a destination or backdrop click
    pub const fn close_mobile(&mut self) {
        self.mobile_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use visconti_core::Locale;

    #[rstest]
    #[case("/admin/menu", Some("/admin/menu"))]
    #[case("/admin/menu/42", Some("/admin/menu"))]
    #[case("/admin/menu-img", Some("/admin/menu-img"))]
    #[case("/admin/menu-img/3", Some("/admin/menu-img"))]
    #[case("/admin/offer", Some("/admin/offer"))]
    #[case("/admin/offers", None)]
    #[case("/admin", None)]
    #[case("/", None)]
    fn test_active_entry(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(active_entry(path).map(|entry| entry.href), expected);
    }

    #[test]
    fn test_at_most_one_entry_active() {
        for path in ["/admin/menu", "/admin/menu-img", "/admin/menu/x"] {
            let active = NAV_ENTRIES.iter().filter(|e| e.is_active(path)).count();
            assert_eq!(active, 1, "{path}");
        }
    }

    #[test]
    fn test_title_falls_back_to_dashboard() {
        let strings = Locale::En.strings();
        assert_eq!(page_title("/admin/offer", strings), "Offers");
        assert_eq!(page_title("/elsewhere", strings), "Dashboard");
        assert_eq!(page_title("/elsewhere", Locale::It.strings()), "Pannello");
    }

    #[test]
    fn test_shell_toggles_are_independent() {
        let mut shell = ShellState::default();
        shell.toggle_sidebar();
        shell.open_mobile();
        assert!(!shell.sidebar_expanded);
        assert!(shell.mobile_open);

        shell.close_mobile();
        assert!(!shell.sidebar_expanded);
        assert!(!shell.mobile_open);
    }
}
