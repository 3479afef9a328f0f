/// Expanded/collapsed state of the mobile navigation menu, mirrored in the
/// toggle button's `aria-expanded` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub expanded: bool,
}

impl MenuState {
    /// Only the exact string `"true"` counts as expanded.
    pub fn from_aria(value: Option<&str>) -> Self {
        Self {
            expanded: value == Some("true"),
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    pub fn aria_value(self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Whether toggling from this state opens the menu, in which case focus
    /// moves to its first link.
    pub fn focus_first_link_after_toggle(self) -> bool {
        !self.expanded
    }
}

#[inline]
pub fn closes_on_key(key: &str, menu_open: bool) -> bool {
    menu_open && key == "Escape"
}
