//! Per-page UI state
//!
//! Each page owns a small amount of interactive state. The router throws it
//! away whenever the reader moves to another page.

use crate::error::ContentError;
use crate::ventures::{find_venture, Venture, VENTURES};

/// Category selection shared by the resources and thoughts pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    categories: Vec<&'static str>,
    selected: usize,
}

impl CategoryFilter {
    /// Pseudo-category that matches every record
    pub const ALL: &'static str = "all";

    /// Build a filter over record categories
    ///
    /// `"all"` comes first, then each distinct category in the order it
    /// first appears.
    pub fn new<I>(record_categories: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let mut categories = vec![Self::ALL];
        for cat in record_categories {
            if !categories.contains(&cat) {
                categories.push(cat);
            }
        }
        Self {
            categories,
            selected: 0,
        }
    }

    /// Filter over [`RESOURCES`](crate::resources::RESOURCES) categories
    pub fn for_resources() -> Self {
        Self::new(crate::resources::RESOURCES.iter().map(|r| r.category))
    }

    /// Filter over [`THOUGHTS`](crate::resources::THOUGHTS) categories
    pub fn for_thoughts() -> Self {
        Self::new(crate::resources::THOUGHTS.iter().map(|t| t.category))
    }

    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    pub fn selected(&self) -> &'static str {
        self.categories[self.selected]
    }

    /// Select a known category; an unknown one leaves the selection as is
    pub fn select(&mut self, category: &str) -> Result<(), ContentError> {
        match self.categories.iter().position(|c| *c == category) {
            Some(idx) => {
                self.selected = idx;
                Ok(())
            }
            None => Err(ContentError::UnknownCategory(category.to_string())),
        }
    }

    /// Advance to the next category, wrapping back to `"all"`
    pub fn cycle(&mut self) -> &'static str {
        self.selected = (self.selected + 1) % self.categories.len();
        self.selected()
    }

    /// Whether a record with this category is shown
    pub fn matches(&self, category: &str) -> bool {
        let selected = self.selected();
        selected == Self::ALL || selected == category
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Expanded venture on the ecosystem page
///
/// At most one venture shows its details at a time. The extended ecosystem
/// section has its own open/closed flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VentureExpansion {
    expanded: Option<&'static str>,
    show_secondary: bool,
}

impl VentureExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<&'static Venture> {
        self.expanded.and_then(find_venture)
    }

    pub fn is_expanded(&self, slug: &str) -> bool {
        self.expanded == Some(slug)
    }

    pub fn show_secondary(&self) -> bool {
        self.show_secondary
    }

    pub fn toggle_secondary(&mut self) -> bool {
        self.show_secondary = !self.show_secondary;
        self.show_secondary
    }

    /// Expand a venture, or collapse it if it is already expanded
    ///
    /// Returns whether the venture is expanded afterwards.
    pub fn toggle(&mut self, slug: &str) -> Result<bool, ContentError> {
        let venture =
            find_venture(slug).ok_or_else(|| ContentError::UnknownVenture(slug.to_string()))?;
        if self.is_expanded(venture.slug) {
            self.expanded = None;
            Ok(false)
        } else {
            self.expand(venture);
            Ok(true)
        }
    }

    /// Apply a deep link such as `#replyby`
    ///
    /// An empty anchor collapses everything.
    pub fn expand_from_anchor(&mut self, anchor: &str) -> Result<(), ContentError> {
        let slug = anchor.trim_start_matches('#');
        if slug.is_empty() {
            self.expanded = None;
            return Ok(());
        }
        let venture =
            find_venture(slug).ok_or_else(|| ContentError::UnknownVenture(slug.to_string()))?;
        self.expand(venture);
        Ok(())
    }

    /// Expand the venture after the current one in directory order
    pub fn expand_next(&mut self) -> &'static Venture {
        let next = match self.expanded {
            Some(slug) => VENTURES
                .iter()
                .position(|v| v.slug == slug)
                .map_or(0, |idx| (idx + 1) % VENTURES.len()),
            None => 0,
        };
        let venture = &VENTURES[next];
        self.expand(venture);
        venture
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    fn expand(&mut self, venture: &'static Venture) {
        self.expanded = Some(venture.slug);
        if !venture.is_primary() {
            self.show_secondary = true;
        }
    }
}

/// Navigation drawer on narrow layouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
