//! Biographical and navigation content

/// A link in the navigation bar or footer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", path: "/" },
    NavItem { label: "About", path: "/about" },
    NavItem { label: "Ecosystem", path: "/ecosystem" },
    NavItem { label: "Thoughts", path: "/thoughts" },
    NavItem { label: "Connect", path: "/connect" },
];

pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { label: "Legal", path: "/legal" },
    NavItem { label: "Privacy", path: "/privacy" },
    NavItem { label: "Imprint", path: "/imprint" },
];

/// Brand shown in the navigation bar
pub const BRAND: &str = "DAN MERCEDE";

pub struct Hero {
    pub name: &'static str,
    pub positioning: &'static str,
    pub philosophy: &'static str,
}

pub const HERO: Hero = Hero {
    name: "DAN MERCEDE",
    positioning: "Systems that scale. Intelligence that serves.",
    philosophy: "Building the infrastructure for human-owned intelligence and governed automation.",
};

/// Line under the hero
pub const HERO_ANCHOR: &str = "If governance isn't enforced at runtime, it isn't governance.";

pub struct Pillar {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Human-Owned Intelligence",
        icon: "cpu",
        description: "AI aligned with operator intent, control, and accountability.",
    },
    Pillar {
        title: "Governance & Accountability",
        icon: "shield-check",
        description: "Traceability, auditability, and policy enforcement by default.",
    },
    Pillar {
        title: "Execution Over Hype",
        icon: "zap",
        description: "Production systems with measurable outcomes, not experiments.",
    },
    Pillar {
        title: "Systems That Scale",
        icon: "network",
        description: "Architectures designed to compound, degrade safely, and endure.",
    },
];

pub struct BuildArea {
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const BUILD_AREAS: &[BuildArea] = &[
    BuildArea {
        label: "Platform",
        icon: "globe",
        description: "Governed AI Operating System design, control planes, and execution frameworks that unify memory, decisioning, and oversight.",
    },
    BuildArea {
        label: "Agency",
        icon: "briefcase",
        description: "Enterprise AI reliability engineering: hardening workflows, enforcing constraints, and shipping governance-ready systems.",
    },
    BuildArea {
        label: "Capital",
        icon: "scale",
        description: "Ownership, structure, and capital alignment for long-term system builders.",
    },
    BuildArea {
        label: "Media",
        icon: "pen-tool",
        description: "Signal creation and narrative architecture to teach categories, not market products.",
    },
];

/// Closing line of the build areas section
pub const INTEROPERABILITY: &str = "Each entity operates independently but shares a common governance framework and capital structure managed by Orion Apex Capital.";

pub const SIGNALS: &[&str] = &["Founder of Cosmocrat", "Director of Orion Intel", "Trademark Holder"];

pub struct Belief {
    pub statement: &'static str,
    pub detail: &'static str,
}

pub const BELIEFS: &[Belief] = &[
    Belief {
        statement: "INTELLIGENCE AUGMENTS HUMANS",
        detail: "Operator authority stays in the loop.",
    },
    Belief {
        statement: "TRUST REQUIRES TRACEABILITY",
        detail: "If it can't be audited, it can't be trusted.",
    },
    Belief {
        statement: "AUTOMATION MUST BE GOVERNED",
        detail: "Fail closed. Log everything. Degrade safely.",
    },
];

/// About page narrative, in reading order
pub const THROUGHLINE: &[&str] = &[
    "From operations to architecture, the mission has remained constant: Governance over chaos.",
    "I build governed AI operating systems: systems that remember, decide, execute, and remain auditable under real conditions.",
    "I don't believe in disruption for its own sake. I believe in systems that endure. My background isn't a straight line, but a thematic progression from managing complex human workflows to building the digital substrates that automate them.",
];

pub const CORE_PHILOSOPHY: &str = "Governance is the seatbelt. Execution is the engine. Without constraints, intelligence becomes liability.";

pub const TARGET_AUDIENCE: &[&str] = &["Builders", "Operators", "Investors", "Enterprise Teams"];

/// Single conversion path used on the home and ecosystem pages
pub struct ReadinessScan {
    pub cta: &'static str,
    pub href: &'static str,
    pub summary: &'static str,
    pub deliverables: &'static [&'static str],
}

pub const READINESS_SCAN: ReadinessScan = ReadinessScan {
    cta: "Book a Runtime Governance Readiness Scan",
    href: "https://calendly.com/danmercede/readiness-scan",
    summary: "A focused assessment that maps your control-plane gaps, identifies failure modes, and delivers a 30/60/90 hardening roadmap.",
    deliverables: &["Control-plane gap map", "Failure-mode register", "30/60/90 hardening roadmap"],
};

/// A way to reach out from the connect page
pub struct ContactChannel {
    pub kind: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: "Email",
        label: "Direct Contact",
        href: "mailto:contact@danmercede.com",
    },
    ContactChannel {
        kind: "Social",
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/danmercede/",
    },
];

pub struct Footer {
    pub name: &'static str,
    pub title: &'static str,
    pub entity: &'static str,
    pub jurisdiction: &'static str,
}

pub const FOOTER: Footer = Footer {
    name: "Dan Mercede",
    title: "Founder & Systems Architect",
    entity: "Orion Apex Capital",
    jurisdiction: "United States",
};

/// Position of a path in the main navigation
pub fn nav_index(path: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.path == path)
}
