//! Site navigation system
//!
//! Applies input actions to the [`Router`] and reports the rendered page.

use folio_content::{NavigationEvent, PageView, Route, Router};
use crate::config::{DebugConfig, SiteConfig};
use crate::input::InputAction;

/// What the host has to do after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationUpdate {
    /// Moved to another route
    Navigated(NavigationEvent),
    /// Same route, changed page state (filter, expansion, menu)
    Refreshed,
    /// Nothing changed
    Unchanged,
}

impl NavigationUpdate {
    pub fn is_changed(&self) -> bool {
        !matches!(self, NavigationUpdate::Unchanged)
    }
}

/// Owns the router and prints pages as they change
pub struct NavigationSystem {
    router: Router,
    log_pages: bool,
}

impl NavigationSystem {
    pub fn new(site: &SiteConfig, debug: &DebugConfig) -> Self {
        let router = Router::at(&site.start_route);
        log::info!("Starting at {}", router.current());
        Self {
            router,
            log_pages: debug.log_pages,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn current(&self) -> &Route {
        self.router.current()
    }

    /// Short title of the current page, for the window title bar
    pub fn title(&self) -> &'static str {
        self.router.current().title()
    }

    /// Render the current page
    pub fn page(&self) -> PageView {
        self.router.render()
    }

    /// Apply a site action; window and animation actions are left unchanged
    pub fn handle(&mut self, action: InputAction) -> NavigationUpdate {
        let update = match action {
            InputAction::NextPage => NavigationUpdate::Navigated(self.router.next_page()),
            InputAction::PreviousPage => NavigationUpdate::Navigated(self.router.previous_page()),
            InputAction::GoToNav(index) => match self.router.go_to_nav(index) {
                Some(event) => NavigationUpdate::Navigated(event),
                None => NavigationUpdate::Unchanged,
            },
            InputAction::GoBack => match self.router.back() {
                Ok(event) => NavigationUpdate::Navigated(event),
                Err(e) => {
                    log::debug!("{}", e);
                    NavigationUpdate::Unchanged
                }
            },
            InputAction::ToggleMenu => {
                let open = self.router.toggle_menu();
                log::info!("Menu {}", if open { "open" } else { "closed" });
                NavigationUpdate::Refreshed
            }
            InputAction::CycleCategory => self.cycle_category(),
            InputAction::ExpandNextVenture => self.expand_next_venture(),
            InputAction::Exit
            | InputAction::ToggleFullscreen
            | InputAction::Reseed => NavigationUpdate::Unchanged,
        };

        match &update {
            NavigationUpdate::Navigated(event) if event.page_changed() => {
                log::info!("{} -> {}", event.from, event.to);
                self.show_page();
            }
            NavigationUpdate::Navigated(_) | NavigationUpdate::Refreshed => self.show_page(),
            NavigationUpdate::Unchanged => {}
        }
        update
    }

    /// Navigate to a raw path, as a clicked link would
    pub fn follow(&mut self, path: &str) -> NavigationEvent {
        let event = self.router.navigate(path);
        self.show_page();
        event
    }

    /// Log the current page as text when enabled
    pub fn show_page(&self) {
        if self.log_pages {
            let page = self.router.render();
            log::info!("\n{}", page.to_text());
        }
    }

    fn cycle_category(&mut self) -> NavigationUpdate {
        if !matches!(self.current(), Route::Resources | Route::Thoughts) {
            return NavigationUpdate::Unchanged;
        }
        let category = self.router.filter_mut().cycle();
        log::info!("Category: {}", category);
        NavigationUpdate::Refreshed
    }

    fn expand_next_venture(&mut self) -> NavigationUpdate {
        if !matches!(self.current(), Route::Ecosystem { .. }) {
            return NavigationUpdate::Unchanged;
        }
        let venture = self.router.ventures_mut().expand_next();
        log::info!("Expanded {}", venture.name);
        NavigationUpdate::Refreshed
    }
}
