//! Venture directory for the ecosystem page

/// One entity in the business ecosystem
#[derive(Debug, PartialEq, Eq)]
pub struct Venture {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub ecosystem_role: &'static str,
    pub system_relationship: &'static str,
    pub operating_constraints: &'static str,
    pub link: Option<&'static str>,
    pub status: &'static str,
    pub logo: &'static str,
    /// Stable identifier used for anchors and expansion state
    pub slug: &'static str,
}

impl Venture {
    /// Ventures running in production or enterprise execution get a live badge
    pub fn is_live(&self) -> bool {
        self.status.contains("PRODUCTION") || self.status.contains("EXECUTION")
    }

    /// Whether this venture is listed in the core systems section
    pub fn is_primary(&self) -> bool {
        PRIMARY_VENTURES.contains(&self.name)
    }
}

pub const VENTURES: &[Venture] = &[
    Venture {
        name: "Cosmocrat",
        role: "Governed AI Operating System",
        description: "Cosmocrat is a Governed AI Operating System that enforces auditability, policy control, and human oversight across AI memory, decisioning, and execution.",
        ecosystem_role: "Cosmocrat is the Governed AI Operating System that serves as the control plane for human-owned intelligence. It governs how AI systems remember, decide, execute, and are audited over time.",
        system_relationship: "Cosmocrat is the core system originated and owned by Orion Apex Capital. All other entities in the ecosystem either deploy, validate, or operate under Cosmocrat's governance model.",
        operating_constraints: "Enterprise-grade, governance-first. Not a chatbot. Not an orchestration tool. Designed to fail closed and remain auditable under real production conditions.",
        link: Some("https://www.cosmocrat.ai"),
        status: "GOVERNED AI OS · CORE",
        logo: "/cosmocrat-.png",
        slug: "cosmocrat",
    },
    Venture {
        name: "Orion Intelligence Agency",
        role: "Enterprise AI Reliability Engineering",
        description: "Orion Intelligence Agency hardens and deploys governed AI systems in production environments, focusing on reliability, auditability, and execution under risk.",
        ecosystem_role: "Orion Intelligence Agency (OIA) applies and hardens governed AI systems in production environments where reliability, compliance, and auditability are required.",
        system_relationship: "OIA deploys and validates Cosmocrat inside real enterprise workflows, translating the operating system into measurable outcomes without compromising governance.",
        operating_constraints: "Enterprise-only. Execution-first. No experimentation in production. Designed for risk, security, and compliance teams.",
        link: Some("https://www.orionintelligenceagency.com"),
        status: "ENTERPRISE EXECUTION",
        logo: "/oia-shield-only-dark.png",
        slug: "orion-intelligence",
    },
    Venture {
        name: "Orion Apex Capital",
        role: "Ownership & Systems Architecture",
        description: "Orion Apex Capital is a systems architecture and holding firm that originates, owns, and governs Cosmocrat, the Governed AI Operating System.",
        ecosystem_role: "Orion Apex Capital is the holding and architecture firm responsible for originating, owning, and governing the ecosystem's intelligence systems.",
        system_relationship: "OAC is the origin authority of Cosmocrat and oversees how the operating system is deployed, validated, and capitalized across domains.",
        operating_constraints: "Ownership and architecture only. Not a services firm. Not a product marketplace.",
        link: Some("https://www.orionapexcapital.com"),
        status: "OWNERSHIP · ARCHITECTURE",
        logo: "/01-OAC-stacked_primary_white-transparent_sm.png",
        slug: "orion-apex-capital",
    },
    Venture {
        name: "ReplyBy",
        role: "Governed Communication Automation (SMB)",
        description: "ReplyBy is a production communication automation system that recovers missed calls through governed execution and structured workflows.",
        ecosystem_role: "ReplyBy is a production communication automation system that recovers missed opportunities through structured, governed execution.",
        system_relationship: "ReplyBy operates as a production-grade application running under governed execution principles derived from Cosmocrat, validated through Orion Intelligence Agency.",
        operating_constraints: "SMB-focused. Narrow scope. Production only. No autonomous decisioning.",
        link: Some("https://www.replychatai.com"),
        status: "PRODUCTION · SMB",
        logo: "/header-icon - replyby.png",
        slug: "replyby",
    },
    Venture {
        name: "Apex Trading Systems",
        role: "Internal Governed Execution Proof",
        description: "Apex Trading Systems is an internal, regime-aware trading execution system demonstrating governed AI decision enforcement under real market conditions.",
        ecosystem_role: "Apex Trading Systems (ATS) is an internal, regime-aware trading execution system used to demonstrate disciplined, risk-first governed execution.",
        system_relationship: "ATS serves as internal validation of Cosmocrat's governance model under continuous, adversarial conditions.",
        operating_constraints: "Internal use only. Not offered publicly. No external capital or client access.",
        link: Some("https://www.apexaitrading.com"),
        status: "INTERNAL · GOVERNED EXECUTION",
        logo: "/ats-logo.png",
        slug: "apex-trading",
    },
    Venture {
        name: "Path of Life Hub",
        role: "Consumer Signal Exploration",
        description: "Path of Life Hub explores how governed decision surfacing can improve everyday life through a daily consumer signal platform.",
        ecosystem_role: "Path of Life Hub is a consumer signal platform exploring how governed decision surfacing can improve everyday life.",
        system_relationship: "It functions as an exploratory edge of the ecosystem, testing how governance principles translate to individual-level decision contexts.",
        operating_constraints: "Consumer-facing. Experimental by design. Not enterprise infrastructure.",
        link: Some("https://pathoflifehub.com"),
        status: "SIGNAL · CONSUMER",
        logo: "/Path-of-Light-Transparant.png",
        slug: "path-of-life",
    },
];

/// Ventures shown in the core systems section; the rest are "extended"
pub const PRIMARY_VENTURES: &[&str] = &["Cosmocrat", "Orion Intelligence Agency", "Orion Apex Capital"];

/// Look up a venture by slug
pub fn find_venture(slug: &str) -> Option<&'static Venture> {
    VENTURES.iter().find(|v| v.slug == slug)
}

/// Core systems, in directory order
pub fn primary_ventures() -> impl Iterator<Item = &'static Venture> {
    VENTURES.iter().filter(|v| v.is_primary())
}

/// Extended ecosystem, in directory order
pub fn secondary_ventures() -> impl Iterator<Item = &'static Venture> {
    VENTURES.iter().filter(|v| !v.is_primary())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_venture() {
        assert_eq!(find_venture("replyby").map(|v| v.name), Some("ReplyBy"));
        assert!(find_venture("missing").is_none());
    }

    #[test]
    fn test_primary_split_covers_all() {
        assert_eq!(primary_ventures().count(), 3);
        assert_eq!(primary_ventures().count() + secondary_ventures().count(), VENTURES.len());
    }

    #[test]
    fn test_live_status() {
        assert!(find_venture("replyby").unwrap().is_live());
        assert!(find_venture("orion-intelligence").unwrap().is_live());
        assert!(find_venture("apex-trading").unwrap().is_live());
        assert!(!find_venture("path-of-life").unwrap().is_live());
    }

    #[test]
    fn test_slugs_unique() {
        for (i, a) in VENTURES.iter().enumerate() {
            for b in &VENTURES[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
