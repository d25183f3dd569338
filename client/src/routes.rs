//! Client-side route paths and the navigation drawer entry table.
//!
//! DESIGN
//! ======
//! Paths live here as constants so the router, the drawer, and the auth flow
//! redirects all agree on one spelling. Drawer selection is an exact string
//! comparison against the current pathname; there is no prefix matching.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LANDING: &str = "/";
pub const HOME: &str = "/home";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

/// Where a successful registration lands.
pub const POST_REGISTER: &str = HOME;

/// Glyph shown next to a drawer entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Login,
    Register,
}

impl NavIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Home => "\u{2302}",
            Self::Login => "\u{2192}",
            Self::Register => "\u{270E}",
        }
    }
}

/// One link in the navigation drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

impl NavEntry {
    /// Whether this entry should render highlighted for `current_path`.
    #[must_use]
    pub fn is_selected(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { label: "Landing", path: LANDING, icon: NavIcon::Home },
    NavEntry { label: "Home", path: HOME, icon: NavIcon::Home },
    NavEntry { label: "Login", path: LOGIN, icon: NavIcon::Login },
    NavEntry { label: "Register", path: REGISTER, icon: NavIcon::Register },
];

/// The drawer entry matching `current_path`, if any.
#[must_use]
pub fn selected_entry(current_path: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|entry| entry.is_selected(current_path))
}
