use crate::site::Section;

/// Vertical offset past which the navigation bar switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub section: Section,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        section: Section::Home,
    },
    NavLink {
        label: "About",
        section: Section::About,
    },
    NavLink {
        label: "Skills",
        section: Section::Skills,
    },
    NavLink {
        label: "Projects",
        section: Section::Projects,
    },
    NavLink {
        label: "Contact",
        section: Section::Contact,
    },
];

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

/// Open state of the full-screen menu on small viewports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any menu link closes the overlay.
    pub fn link_activated(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggles_on_each_tap() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn test_link_closes_menu() {
        for link in NAV_LINKS {
            let mut menu = NavMenu::default();
            menu.toggle();
            menu.link_activated();
            assert!(!menu.is_open(), "{} should close the menu", link.label);
        }

        // closing an already closed menu keeps it closed
        let mut menu = NavMenu::default();
        menu.link_activated();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn test_anchors_match_sections() {
        let hrefs = NAV_LINKS
            .iter()
            .map(|l| l.section.href())
            .collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec!["#home", "#about", "#skills", "#projects", "#contact"]
        );
        for link in NAV_LINKS {
            assert!(Section::ALL.contains(&link.section));
        }
    }
}
