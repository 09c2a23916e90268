//! Page views
//!
//! Every route renders to a [`PageView`]: a title and an ordered list of
//! blocks with no layout or styling attached. Renderers decide how blocks
//! look; tests inspect them directly.

use std::fmt::Write as _;

use crate::images::{image_meta, ABOUT_PORTRAIT, HERO_PORTRAIT};
use crate::labels::{layer_badge, layer_name, CATEGORY_LABELS, FILE_TYPE_LABELS};
use crate::legal::{LegalDocument, IMPRINT, LEGAL_NOTICE, PRIVACY_POLICY};
use crate::profile::{
    BELIEFS, BRAND, BUILD_AREAS, CONTACT_CHANNELS, CORE_PHILOSOPHY, FOOTER, FOOTER_LINKS, HERO,
    HERO_ANCHOR, INTEROPERABILITY, NAV_ITEMS, PILLARS, READINESS_SCAN, SIGNALS, TARGET_AUDIENCE,
    THROUGHLINE,
};
use crate::resources::{find_case_study, CaseStudy, DOCTRINE_ANCHOR, RESOURCES, THOUGHTS};
use crate::route::Route;
use crate::state::{CategoryFilter, MobileMenu, VentureExpansion};
use crate::ventures::{primary_ventures, secondary_ventures, Venture};

/// A hyperlink; internal links start with `/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.href.starts_with('/') && !self.href.starts_with("/resources/")
    }
}

/// A titled card: pillars, ventures, resources, thoughts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub eyebrow: Option<String>,
    pub title: String,
    pub body: String,
    pub badges: Vec<String>,
    /// Labelled detail rows, shown when the card is expanded
    pub details: Vec<(String, String)>,
    pub link: Option<Link>,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { title: String, subtitle: Option<String> },
    Paragraph(String),
    Quote(String),
    List(Vec<String>),
    Card(Card),
    Link(Link),
    Metrics(Vec<(String, String)>),
    FilterBar(Vec<FilterOption>),
    Image { src: String, alt: String },
}

/// A rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub route: Route,
    pub title: String,
    pub subtitle: Option<String>,
    pub blocks: Vec<Block>,
    /// Set for unknown routes and missing case studies
    pub not_found: bool,
}

impl PageView {
    fn new(route: &Route, title: impl Into<String>, subtitle: Option<&str>) -> Self {
        Self {
            route: route.clone(),
            title: title.into(),
            subtitle: subtitle.map(str::to_string),
            blocks: Vec::new(),
            not_found: false,
        }
    }

    fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    fn heading(&mut self, title: &str, subtitle: Option<&str>) -> &mut Self {
        self.push(Block::Heading {
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
        })
    }

    fn paragraph(&mut self, text: &str) -> &mut Self {
        self.push(Block::Paragraph(text.to_string()))
    }

    fn link(&mut self, label: &str, href: &str) -> &mut Self {
        self.push(Block::Link(Link::new(label, href)))
    }

    /// All links on the page, cards included, in reading order
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Link(link) => Some(link),
            Block::Card(card) => card.link.as_ref(),
            _ => None,
        })
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Card(card) => Some(card),
            _ => None,
        })
    }

    pub fn filter_bar(&self) -> Option<&[FilterOption]> {
        self.blocks.iter().find_map(|block| match block {
            Block::FilterBar(options) => Some(options.as_slice()),
            _ => None,
        })
    }

    /// Plain-text rendering, one block per paragraph
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}", self.title);
        if let Some(subtitle) = &self.subtitle {
            let _ = writeln!(out, "{}", subtitle);
        }
        for block in &self.blocks {
            out.push('\n');
            write_block(&mut out, block);
        }
        out
    }
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { title, subtitle } => {
            let _ = writeln!(out, "## {}", title);
            if let Some(sub) = subtitle {
                let _ = writeln!(out, "{}", sub);
            }
        }
        Block::Paragraph(text) => {
            let _ = writeln!(out, "{}", text);
        }
        Block::Quote(text) => {
            let _ = writeln!(out, "> {}", text);
        }
        Block::List(items) => {
            for item in items {
                let _ = writeln!(out, "- {}", item);
            }
        }
        Block::Card(card) => {
            if let Some(eyebrow) = &card.eyebrow {
                let _ = writeln!(out, "[{}]", eyebrow);
            }
            let _ = writeln!(out, "### {}", card.title);
            let _ = writeln!(out, "{}", card.body);
            if !card.badges.is_empty() {
                let _ = writeln!(out, "{}", card.badges.join(" "));
            }
            if card.expanded {
                for (label, value) in &card.details {
                    let _ = writeln!(out, "  {}: {}", label, value);
                }
            }
            if let Some(link) = &card.link {
                let _ = writeln!(out, "-> {} ({})", link.label, link.href);
            }
        }
        Block::Link(link) => {
            let _ = writeln!(out, "-> {} ({})", link.label, link.href);
        }
        Block::Metrics(metrics) => {
            for (value, label) in metrics {
                let _ = writeln!(out, "{:>12}  {}", value, label);
            }
        }
        Block::FilterBar(options) => {
            let line: Vec<String> = options
                .iter()
                .map(|o| {
                    if o.selected {
                        format!("[{}]", o.label)
                    } else {
                        o.label.clone()
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", line.join(" | "));
        }
        Block::Image { src, alt } => {
            let _ = writeln!(out, "(image: {} \"{}\")", src, alt);
        }
    }
}

/// Interactive state the page renderers read
pub struct PageState<'a> {
    pub filter: &'a CategoryFilter,
    pub ventures: &'a VentureExpansion,
}

/// Render any route
pub fn render(route: &Route, state: &PageState<'_>) -> PageView {
    match route {
        Route::Home => home(route),
        Route::About => about(route),
        Route::Ecosystem { .. } => ecosystem(route, state.ventures),
        Route::Resources => resources(route, state.filter),
        Route::CaseStudy(slug) => match find_case_study(slug) {
            Some(study) => case_study(route, study),
            None => case_study_not_found(route),
        },
        Route::Thoughts => thoughts(route, state.filter),
        Route::Connect => connect(route),
        Route::Legal => legal_document(route, &LEGAL_NOTICE),
        Route::Privacy => legal_document(route, &PRIVACY_POLICY),
        Route::Imprint => imprint(route),
        Route::NotFound(path) => not_found(route, path),
    }
}

fn readiness_cta(page: &mut PageView) {
    page.link(READINESS_SCAN.cta, READINESS_SCAN.href);
    page.paragraph(&format!(
        "Deliverables: {}",
        READINESS_SCAN.deliverables.join(" · ")
    ));
}

fn image(src: &str) -> Block {
    Block::Image {
        src: src.to_string(),
        alt: image_meta(src).alt.to_string(),
    }
}

fn home(route: &Route) -> PageView {
    let mut page = PageView::new(route, HERO.name, Some(HERO.positioning));
    page.paragraph(HERO.philosophy);
    readiness_cta(&mut page);
    page.push(image(HERO_PORTRAIT));
    page.push(Block::Quote(HERO_ANCHOR.to_string()));

    for pillar in PILLARS {
        page.push(Block::Card(Card {
            title: pillar.title.to_string(),
            body: pillar.description.to_string(),
            ..Card::default()
        }));
    }

    page.heading("Architecture", Some("Core Competencies"));
    for area in BUILD_AREAS {
        page.push(Block::Card(Card {
            title: area.label.to_string(),
            body: area.description.to_string(),
            ..Card::default()
        }));
    }
    page.paragraph(INTEROPERABILITY);
    page.push(Block::List(SIGNALS.iter().map(|s| s.to_string()).collect()));

    page.heading("Runtime Governance Readiness Scan", Some("Ready to harden your AI stack?"));
    page.paragraph(READINESS_SCAN.summary);
    page.link(READINESS_SCAN.cta, READINESS_SCAN.href);
    page
}

fn about(route: &Route) -> PageView {
    let mut page = PageView::new(route, "The Throughline", Some("Canonical Narrative"));
    for line in THROUGHLINE {
        page.paragraph(line);
    }
    page.heading("Core Philosophy", None);
    page.push(Block::Quote(CORE_PHILOSOPHY.to_string()));

    page.heading("What I Believe", None);
    for (idx, belief) in BELIEFS.iter().enumerate() {
        page.push(Block::Card(Card {
            eyebrow: Some(format!("{:02}", idx + 1)),
            title: belief.statement.to_string(),
            body: belief.detail.to_string(),
            ..Card::default()
        }));
    }

    page.heading("Who This Is For", None);
    page.push(Block::List(TARGET_AUDIENCE.iter().map(|s| s.to_string()).collect()));
    page.push(image(ABOUT_PORTRAIT));
    page
}

fn venture_card(venture: &Venture, ventures: &VentureExpansion) -> Block {
    let expanded = ventures.is_expanded(venture.slug);
    let mut badges = vec![venture.status.to_string()];
    if venture.is_live() {
        badges.push("LIVE".to_string());
    }
    Block::Card(Card {
        eyebrow: Some(venture.role.to_string()),
        title: venture.name.to_string(),
        body: venture.description.to_string(),
        badges,
        details: vec![
            ("Role in the Ecosystem".to_string(), venture.ecosystem_role.to_string()),
            ("Relationship to the System".to_string(), venture.system_relationship.to_string()),
            ("Operating Constraints".to_string(), venture.operating_constraints.to_string()),
            ("Canonical Ref".to_string(), format!("danmercede.com/ecosystem#{}", venture.slug)),
        ],
        link: venture
            .link
            .map(|href| Link::new(format!("Visit {}", venture.name), href)),
        expanded,
    })
}

fn ecosystem(route: &Route, ventures: &VentureExpansion) -> PageView {
    let mut page = PageView::new(route, "Runtime Governance Stack", Some("Core Systems"));
    page.paragraph(
        "The platform and the implementation arm. Cosmocrat is the Governed AI Operating System. \
         Orion Intelligence Agency deploys and hardens it in production.",
    );
    for venture in primary_ventures() {
        page.push(venture_card(venture, ventures));
    }

    page.heading("Enterprise Entry Point", None);
    readiness_cta(&mut page);

    page.heading("Extended Ecosystem", Some("Supporting Ventures & Vehicles"));
    if ventures.show_secondary() {
        for venture in secondary_ventures() {
            page.push(venture_card(venture, ventures));
        }
    }
    page.paragraph(
        "Each entity operates independently under a shared governance framework. \
         The runtime stack (Cosmocrat + OIA) is the enterprise entry point.",
    );
    page
}

fn filter_bar(filter: &CategoryFilter, label: impl Fn(&str) -> String) -> Block {
    Block::FilterBar(
        filter
            .categories()
            .iter()
            .map(|cat| FilterOption {
                key: cat.to_string(),
                label: if *cat == CategoryFilter::ALL {
                    "All".to_string()
                } else {
                    label(cat)
                },
                selected: *cat == filter.selected(),
            })
            .collect(),
    )
}

fn resources(route: &Route, filter: &CategoryFilter) -> PageView {
    let mut page = PageView::new(route, "Resources", Some("Enforcement Artifacts"));
    page.paragraph(
        "Downloadable artifacts mapped to the four-layer enforcement stack. Each resource \
         references runtime enforcement points, produces audit-ready evidence, and maps to \
         enterprise risk reduction.",
    );
    page.push(filter_bar(filter, |cat| CATEGORY_LABELS.label(cat).to_string()));

    for resource in RESOURCES.iter().filter(|r| filter.matches(r.category)) {
        let file_type = FILE_TYPE_LABELS.label(resource.file_type);
        let mut badges: Vec<String> = resource
            .enforcement_layers
            .iter()
            .map(|l| layer_badge(*l))
            .collect();
        badges.push(format!("{} · {}", file_type, resource.file_size));
        page.push(Block::Card(Card {
            eyebrow: Some(CATEGORY_LABELS.label(resource.category).to_string()),
            title: resource.title.to_string(),
            body: resource.description.to_string(),
            badges,
            link: Some(Link::new(format!("Download {}", file_type), resource.file_path)),
            ..Card::default()
        }));
        if let Some(slug) = resource.case_study {
            page.link("Read the case study", &format!("/case-studies/{}", slug));
        }
    }
    page
}

fn case_study(route: &Route, study: &CaseStudy) -> PageView {
    let mut page = PageView::new(route, study.title, Some(study.industry));
    page.link("← Resources", "/resources");
    page.paragraph(study.description);
    page.push(Block::Metrics(
        study
            .metrics
            .iter()
            .map(|m| (m.value.to_string(), m.label.to_string()))
            .collect(),
    ));

    page.heading("Enforcement Layers", None);
    page.push(Block::List(
        study
            .enforcement_layers
            .iter()
            .map(|l| format!("{} {}", layer_badge(*l), layer_name(*l)))
            .collect(),
    ));
    page.heading("Enforcement Points", None);
    page.push(Block::List(
        study.enforcement_points.iter().map(|p| p.to_string()).collect(),
    ));
    page.heading("Commercial Mapping", None);
    page.push(Block::List(
        study.commercial_mapping.iter().map(|p| p.to_string()).collect(),
    ));

    page.link("Download Full Case Study", study.file_path);
    page.link("Schedule Your Readiness Scan", "/connect");
    page
}

fn case_study_not_found(route: &Route) -> PageView {
    let mut page = PageView::new(route, "Case Study Not Found", None);
    page.not_found = true;
    page.link("← Back to Resources", "/resources");
    page
}

fn thoughts(route: &Route, filter: &CategoryFilter) -> PageView {
    let mut page = PageView::new(route, "Thought Direction", Some("Doctrine + Architecture"));
    page.paragraph(
        "Essays on runtime governance, enforcement architecture, and the structural \
         requirements for governed intelligence at scale.",
    );
    page.push(filter_bar(filter, str::to_string));
    for thought in THOUGHTS.iter().filter(|t| filter.matches(t.category)) {
        page.push(Block::Card(Card {
            eyebrow: Some(thought.category.to_string()),
            title: thought.title.to_string(),
            body: thought.preview.to_string(),
            badges: vec![thought.date.to_string()],
            ..Card::default()
        }));
    }
    page.heading("Governing Principle", None);
    page.push(Block::Quote(DOCTRINE_ANCHOR.to_string()));
    page
}

fn connect(route: &Route) -> PageView {
    let mut page = PageView::new(route, "Connect", Some("Initiate Protocol"));
    page.paragraph(
        "For enterprise inquiries, start with the readiness scan. For everything else, \
         reach out directly.",
    );
    readiness_cta(&mut page);
    for channel in CONTACT_CHANNELS {
        page.push(Block::Card(Card {
            eyebrow: Some(channel.kind.to_string()),
            title: channel.label.to_string(),
            link: Some(Link::new(channel.label, channel.href)),
            ..Card::default()
        }));
    }
    page
}

fn legal_document(route: &Route, doc: &LegalDocument) -> PageView {
    let mut page = PageView::new(route, doc.title, Some(doc.subtitle));
    for section in doc.sections {
        page.heading(section.heading, None);
        page.paragraph(section.body);
    }
    page
}

fn imprint(route: &Route) -> PageView {
    let mut page = PageView::new(route, "Imprint", Some("Entity Information"));
    page.push(Block::Metrics(
        IMPRINT
            .iter()
            .map(|(label, value)| (value.to_string(), label.to_string()))
            .collect(),
    ));
    page
}

fn not_found(route: &Route, path: &str) -> PageView {
    let mut page = PageView::new(route, "Page Not Found", None);
    page.not_found = true;
    page.paragraph(&format!("Nothing lives at {}.", path));
    page.link("← Home", "/");
    page
}

/// One entry in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Navigation bar and mobile drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub brand: &'static str,
    pub entries: Vec<NavEntry>,
    pub menu_open: bool,
}

pub fn nav_view(current: &Route, menu: &MobileMenu) -> NavView {
    NavView {
        brand: BRAND,
        entries: NAV_ITEMS
            .iter()
            .map(|item| NavEntry {
                label: item.label,
                path: item.path,
                active: current.pathname() == item.path,
            })
            .collect(),
        menu_open: menu.is_open(),
    }
}

/// Footer blocks shared by every page
pub fn footer_blocks() -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading {
            title: FOOTER.name.to_string(),
            subtitle: Some(FOOTER.title.to_string()),
        },
        Block::Paragraph(format!("{} · {}", FOOTER.entity, FOOTER.jurisdiction)),
    ];
    blocks.extend(
        FOOTER_LINKS
            .iter()
            .map(|item| Block::Link(Link::new(item.label, item.path))),
    );
    blocks
}
