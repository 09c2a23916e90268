//! History-based router
//!
//! Owns the history stack and the per-page UI state. Moving to a different
//! page scrolls to the top, closes the mobile menu and resets page state;
//! changing only the ecosystem anchor keeps the page and updates expansion.

use crate::error::ContentError;
use crate::page::{self, NavView, PageState, PageView};
use crate::profile::NAV_ITEMS;
use crate::route::Route;
use crate::state::{CategoryFilter, MobileMenu, VentureExpansion};

/// Outcome of a navigation, for the host to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub from: Route,
    pub to: Route,
    /// The page changed; the host should scroll its content to the top
    pub scroll_to_top: bool,
}

impl NavigationEvent {
    pub fn page_changed(&self) -> bool {
        self.scroll_to_top
    }
}

#[derive(Debug)]
pub struct Router {
    history: Vec<Route>,
    menu: MobileMenu,
    filter: CategoryFilter,
    ventures: VentureExpansion,
}

impl Router {
    pub fn new(start: Route) -> Self {
        let mut router = Self {
            history: Vec::new(),
            menu: MobileMenu::default(),
            filter: CategoryFilter::new([]),
            ventures: VentureExpansion::new(),
        };
        router.enter(&start);
        router.history.push(start);
        router
    }

    /// Start at a raw path
    pub fn at(path: &str) -> Self {
        Self::new(Route::parse(path))
    }

    pub fn current(&self) -> &Route {
        // history always holds the start route
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Navigate to a path, pushing it onto the history
    pub fn navigate(&mut self, path: &str) -> NavigationEvent {
        self.navigate_to(Route::parse(path))
    }

    pub fn navigate_to(&mut self, route: Route) -> NavigationEvent {
        let from = self.current().clone();
        self.menu.close();

        if route == from {
            return NavigationEvent {
                to: route,
                from,
                scroll_to_top: false,
            };
        }

        let page_changed = !from.same_page(&route);
        if page_changed {
            self.enter(&route);
        } else {
            self.follow_anchor(&route);
        }
        log::debug!("Navigate {} -> {}", from, route);
        self.history.push(route.clone());

        NavigationEvent {
            from,
            to: route,
            scroll_to_top: page_changed,
        }
    }

    /// Return to the previous page
    pub fn back(&mut self) -> Result<NavigationEvent, ContentError> {
        if !self.can_go_back() {
            return Err(ContentError::NoHistory);
        }
        let from = self.history.pop().ok_or(ContentError::NoHistory)?;
        let to = self.current().clone();
        self.menu.close();

        let page_changed = !from.same_page(&to);
        if page_changed {
            self.enter(&to);
        } else {
            self.follow_anchor(&to);
        }
        log::debug!("Back {} -> {}", from, to);

        Ok(NavigationEvent {
            from,
            to,
            scroll_to_top: page_changed,
        })
    }

    /// Navigate to the nth main navigation item
    pub fn go_to_nav(&mut self, index: usize) -> Option<NavigationEvent> {
        let item = NAV_ITEMS.get(index)?;
        Some(self.navigate(item.path))
    }

    /// Navigate to the next main navigation item, wrapping
    ///
    /// Pages outside the main navigation continue from the first item.
    pub fn next_page(&mut self) -> NavigationEvent {
        let next = match self.nav_position() {
            Some(idx) => (idx + 1) % NAV_ITEMS.len(),
            None => 0,
        };
        self.navigate(NAV_ITEMS[next].path)
    }

    /// Navigate to the previous main navigation item, wrapping
    pub fn previous_page(&mut self) -> NavigationEvent {
        let prev = match self.nav_position() {
            Some(0) | None => NAV_ITEMS.len() - 1,
            Some(idx) => idx - 1,
        };
        self.navigate(NAV_ITEMS[prev].path)
    }

    fn nav_position(&self) -> Option<usize> {
        let pathname = self.current().pathname();
        NAV_ITEMS.iter().position(|item| item.path == pathname)
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut CategoryFilter {
        &mut self.filter
    }

    pub fn ventures(&self) -> &VentureExpansion {
        &self.ventures
    }

    pub fn ventures_mut(&mut self) -> &mut VentureExpansion {
        &mut self.ventures
    }

    /// Render the current page with its live state
    pub fn render(&self) -> PageView {
        page::render(
            self.current(),
            &PageState {
                filter: &self.filter,
                ventures: &self.ventures,
            },
        )
    }

    pub fn nav(&self) -> NavView {
        page::nav_view(self.current(), &self.menu)
    }

    /// Fresh page state for a newly entered page
    fn enter(&mut self, route: &Route) {
        self.filter = match route {
            Route::Resources => CategoryFilter::for_resources(),
            Route::Thoughts => CategoryFilter::for_thoughts(),
            _ => CategoryFilter::new([]),
        };
        self.ventures = VentureExpansion::new();
        self.follow_anchor(route);
    }

    fn follow_anchor(&mut self, route: &Route) {
        if !matches!(route, Route::Ecosystem { .. }) {
            return;
        }
        let anchor = route.anchor().unwrap_or("");
        if let Err(err) = self.ventures.expand_from_anchor(anchor) {
            log::warn!("Ignoring ecosystem anchor: {}", err);
            self.ventures.collapse();
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_route() {
        let router = Router::at("/about");
        assert_eq!(router.current(), &Route::About);
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_navigate_and_back() {
        let mut router = Router::default();
        let event = router.navigate("/resources");
        assert_eq!(event.from, Route::Home);
        assert_eq!(event.to, Route::Resources);
        assert!(event.scroll_to_top);

        let event = router.back().unwrap();
        assert_eq!(event.to, Route::Home);
        assert_eq!(router.current(), &Route::Home);
        assert_eq!(router.back(), Err(ContentError::NoHistory));
    }

    #[test]
    fn test_same_route_is_not_pushed() {
        let mut router = Router::default();
        let event = router.navigate("/");
        assert!(!event.scroll_to_top);
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_anchor_change_keeps_page() {
        let mut router = Router::at("/ecosystem");
        let event = router.navigate("/ecosystem#cosmocrat");
        assert!(!event.scroll_to_top);
        assert!(router.ventures().is_expanded("cosmocrat"));

        router.back().unwrap();
        assert!(router.ventures().expanded().is_none());
    }

    #[test]
    fn test_page_change_resets_state() {
        let mut router = Router::at("/resources");
        router.filter_mut().select("deck").unwrap();
        router.navigate("/about");
        router.navigate("/resources");
        assert_eq!(router.filter().selected(), "all");
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut router = Router::default();
        assert!(router.toggle_menu());
        router.navigate("/connect");
        assert!(!router.menu().is_open());
    }

    #[test]
    fn test_unknown_anchor_collapses() {
        let router = Router::at("/ecosystem#acme");
        assert!(router.ventures().expanded().is_none());
    }

    #[test]
    fn test_next_previous_wrap() {
        let mut router = Router::default();
        assert_eq!(router.previous_page().to.path(), "/connect");
        assert_eq!(router.next_page().to.path(), "/");
        assert_eq!(router.next_page().to.path(), "/about");
    }

    #[test]
    fn test_next_from_outside_nav() {
        let mut router = Router::at("/legal");
        assert_eq!(router.next_page().to, Route::Home);
    }

    #[test]
    fn test_go_to_nav_out_of_range() {
        let mut router = Router::default();
        assert!(router.go_to_nav(NAV_ITEMS.len()).is_none());
        assert_eq!(router.go_to_nav(2).map(|e| e.to.path()), Some("/ecosystem".to_string()));
    }
}
