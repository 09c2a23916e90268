//! Folio site content
//!
//! Static records for every page, the route table and router, per-page UI
//! state, and renderer-agnostic page views.

pub mod error;
pub mod images;
pub mod labels;
pub mod legal;
pub mod page;
pub mod profile;
pub mod resources;
pub mod route;
pub mod router;
pub mod state;
pub mod ventures;

pub use error::ContentError;
pub use images::{image_meta, ImageMeta};
pub use labels::{layer_badge, layer_name, LabelTable, CATEGORY_LABELS, FILE_TYPE_LABELS, LAYER_NAMES};
pub use page::{footer_blocks, nav_view, render, Block, Card, Link, NavView, PageState, PageView};
pub use profile::{NavItem, NAV_ITEMS};
pub use resources::{find_case_study, CaseStudy, Resource, Thought, CASE_STUDIES, RESOURCES, THOUGHTS};
pub use route::Route;
pub use router::{NavigationEvent, Router};
pub use state::{CategoryFilter, MobileMenu, VentureExpansion};
pub use ventures::{find_venture, Venture, VENTURES};
