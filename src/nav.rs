//! Navigation menu highlighting.
//!
//! On page load the entry whose href matches the current URL exactly is
//! marked active, every ancestor entry is marked active as well, and the
//! submenus between them are expanded so the active entry stays visible.

/// One menu entry: a link, a submenu container, or both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavItem {
    pub label: String,
    pub href: Option<String>,
    pub active: bool,
    pub expanded: bool,
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// A leaf link.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// A submenu container.
    pub fn menu(label: impl Into<String>, children: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            children,
            ..Self::default()
        }
    }

    /// Mark this entry active if its href equals `url` exactly, or if any
    /// descendant matched; expand this entry's submenu when the match sits
    /// below it. Returns whether the subtree contains a match. Siblings of
    /// the matched path are never touched.
    pub fn highlight(&mut self, url: &str) -> bool {
        let here = self.href.as_deref() == Some(url);
        let mut below = false;
        for child in &mut self.children {
            below |= child.highlight(url);
        }
        if below {
            self.expanded = true;
        }
        if here || below {
            self.active = true;
        }
        here || below
    }
}

/// Highlight a whole top-level menu. Returns whether any entry matched.
pub fn highlight_menu(items: &mut [NavItem], url: &str) -> bool {
    let mut hit = false;
    for item in items {
        hit |= item.highlight(url);
    }
    hit
}
