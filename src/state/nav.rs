/// Navigation shell state: scroll threshold and mobile menu flag

/// Vertical offset (in logical pixels) past which the navbar turns solid
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Page sections reachable from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Portfolio,
    About,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Portfolio,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// Approximate relative scroll position of the section's anchor
    pub fn anchor(self) -> f32 {
        match self {
            Section::Home => 0.0,
            Section::Portfolio => 0.22,
            Section::About => 0.52,
            Section::Services => 0.72,
            Section::Contact => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavShell {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavShell {
    /// Record the current vertical scroll offset
    #[must_use]
    pub fn scrolled_to(self, offset_y: f32) -> Self {
        Self {
            scrolled: offset_y > SCROLL_THRESHOLD,
            ..self
        }
    }

    #[must_use]
    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    #[must_use]
    pub fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_strict() {
        let nav = NavShell::default();
        assert!(!nav.scrolled_to(0.0).scrolled);
        assert!(!nav.scrolled_to(50.0).scrolled);
        assert!(nav.scrolled_to(50.5).scrolled);
        assert!(!nav.scrolled_to(120.0).scrolled_to(10.0).scrolled);
    }

    #[test]
    fn test_menu_toggle() {
        let nav = NavShell::default().toggle_menu();
        assert!(nav.menu_open);
        assert!(!nav.toggle_menu().menu_open);
        assert!(!nav.close_menu().menu_open);
    }

    #[test]
    fn test_flags_are_independent() {
        let nav = NavShell::default().toggle_menu().scrolled_to(200.0);
        assert!(nav.menu_open && nav.scrolled);

        let nav = nav.close_menu();
        assert!(nav.scrolled);
    }
}
