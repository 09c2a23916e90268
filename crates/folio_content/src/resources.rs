//! Downloadable resources, case studies and essays

/// A downloadable artifact on the resources page
#[derive(Debug, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    /// Key into [`CATEGORY_LABELS`](crate::labels::CATEGORY_LABELS)
    pub category: &'static str,
    /// Key into [`FILE_TYPE_LABELS`](crate::labels::FILE_TYPE_LABELS)
    pub file_type: &'static str,
    pub file_size: &'static str,
    pub file_name: &'static str,
    pub file_path: &'static str,
    /// Enforcement stack layers the artifact covers
    pub enforcement_layers: &'static [u8],
    /// Slug of the case study this artifact summarizes
    pub case_study: Option<&'static str>,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        title: "Runtime Governance Readiness Checklist",
        description: "Forty control-plane checks for teams moving AI workflows into production. Each check names the enforcement point and the evidence it produces.",
        category: "lead-magnet",
        file_type: "pdf",
        file_size: "1.2 MB",
        file_name: "runtime-governance-readiness-checklist.pdf",
        file_path: "/resources/runtime-governance-readiness-checklist.pdf",
        enforcement_layers: &[1, 2, 3, 4],
        case_study: None,
    },
    Resource {
        title: "Authority Gate Policy Template",
        description: "Editable policy template for defining who may authorize which AI actions, with escalation paths and fail-closed defaults.",
        category: "template",
        file_type: "docx",
        file_size: "84 KB",
        file_name: "authority-gate-policy-template.docx",
        file_path: "/resources/authority-gate-policy-template.docx",
        enforcement_layers: &[1],
        case_study: None,
    },
    Resource {
        title: "Immutable Receipt Schema",
        description: "Reference schema for decision receipts: inputs, policy version, approver and outcome, hashed and append-only.",
        category: "template",
        file_type: "docx",
        file_size: "62 KB",
        file_name: "immutable-receipt-schema.docx",
        file_path: "/resources/immutable-receipt-schema.docx",
        enforcement_layers: &[2],
        case_study: None,
    },
    Resource {
        title: "Four-Layer Enforcement Stack",
        description: "One-page architecture diagram of the enforcement stack, from authority gate to gated substrate.",
        category: "diagram",
        file_type: "pdf",
        file_size: "640 KB",
        file_name: "four-layer-enforcement-stack.pdf",
        file_path: "/resources/four-layer-enforcement-stack.pdf",
        enforcement_layers: &[1, 2, 3, 4],
        case_study: None,
    },
    Resource {
        title: "Missed-Call Recovery Under Governance",
        description: "How a governed communication workflow recovered missed calls for service businesses without autonomous decisioning.",
        category: "sales-collateral",
        file_type: "pdf",
        file_size: "2.1 MB",
        file_name: "missed-call-recovery-case-study.pdf",
        file_path: "/resources/missed-call-recovery-case-study.pdf",
        enforcement_layers: &[1, 2],
        case_study: Some("missed-call-recovery"),
    },
    Resource {
        title: "Regime-Aware Execution Controls",
        description: "Drift guards and receipts applied to an internal trading execution system operating under adversarial conditions.",
        category: "sales-collateral",
        file_type: "pdf",
        file_size: "1.8 MB",
        file_name: "regime-aware-execution-case-study.pdf",
        file_path: "/resources/regime-aware-execution-case-study.pdf",
        enforcement_layers: &[2, 3, 4],
        case_study: Some("regime-aware-execution"),
    },
    Resource {
        title: "Governed AI Operating System Briefing",
        description: "Executive briefing deck on control planes for human-owned intelligence: what is governed, where, and how it is proven.",
        category: "deck",
        file_type: "pptx",
        file_size: "5.4 MB",
        file_name: "governed-ai-os-briefing.pptx",
        file_path: "/resources/governed-ai-os-briefing.pptx",
        enforcement_layers: &[1, 2, 3, 4],
        case_study: None,
    },
];

/// A headline number on a case study
#[derive(Debug, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

/// A long-form case study reachable at `/case-studies/:slug`
#[derive(Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub industry: &'static str,
    pub description: &'static str,
    pub metrics: &'static [Metric],
    pub enforcement_layers: &'static [u8],
    pub enforcement_points: &'static [&'static str],
    pub commercial_mapping: &'static [&'static str],
    pub file_name: &'static str,
    pub file_path: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "missed-call-recovery",
        title: "Missed-Call Recovery Under Governance",
        industry: "Home Services · SMB",
        description: "A production communication workflow that answers missed calls with structured follow-up. Every outbound message passes an authority gate and leaves a receipt; nothing is decided autonomously.",
        metrics: &[
            Metric { value: "62%", label: "Missed calls recovered" },
            Metric { value: "< 45s", label: "Median response" },
            Metric { value: "100%", label: "Messages with receipts" },
            Metric { value: "0", label: "Autonomous decisions" },
        ],
        enforcement_layers: &[1, 2],
        enforcement_points: &[
            "Outbound templates approved before send",
            "Opt-out honored before every message",
            "Receipt written for each customer touch",
            "Escalation to a human on any off-script reply",
        ],
        commercial_mapping: &[
            "Recovered revenue attributed per receipt",
            "Compliance exposure reduced on messaging rules",
            "Owner time freed from call-back queues",
            "Audit trail available on request",
        ],
        file_name: "missed-call-recovery-case-study.pdf",
        file_path: "/resources/missed-call-recovery-case-study.pdf",
    },
    CaseStudy {
        slug: "regime-aware-execution",
        title: "Regime-Aware Execution Controls",
        industry: "Capital Markets · Internal",
        description: "An internal execution system used to prove governed decision enforcement under continuous, adversarial conditions. Drift guards halt execution when market regime assumptions stop holding.",
        metrics: &[
            Metric { value: "24/7", label: "Governed operation" },
            Metric { value: "3", label: "Drift guards" },
            Metric { value: "100%", label: "Orders with receipts" },
            Metric { value: "Fail closed", label: "Default posture" },
        ],
        enforcement_layers: &[2, 3, 4],
        enforcement_points: &[
            "Regime classifier gates strategy activation",
            "Position limits enforced below the strategy layer",
            "Order receipts hashed and append-only",
            "Execution halts on stale market data",
        ],
        commercial_mapping: &[
            "Risk limits provable to counterparties",
            "Post-trade review from receipts alone",
            "Model drift detected before loss",
            "Internal proof for enterprise deployments",
        ],
        file_name: "regime-aware-execution-case-study.pdf",
        file_path: "/resources/regime-aware-execution-case-study.pdf",
    },
];

/// Look up a case study by slug
pub fn find_case_study(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|cs| cs.slug == slug)
}

/// A short essay on the thoughts page
#[derive(Debug, PartialEq, Eq)]
pub struct Thought {
    pub title: &'static str,
    pub preview: &'static str,
    pub date: &'static str,
    pub category: &'static str,
}

pub const THOUGHTS: &[Thought] = &[
    Thought {
        title: "Governance Is a Runtime Property",
        preview: "Policies written in documents do not govern anything. Governance exists only where it is enforced before state changes.",
        date: "2025-01",
        category: "Doctrine",
    },
    Thought {
        title: "Receipts, Not Logs",
        preview: "Logs describe what a system says happened. Receipts prove what it was allowed to do and who allowed it.",
        date: "2025-02",
        category: "Architecture",
    },
    Thought {
        title: "Fail Closed by Default",
        preview: "A governed system that cannot reach its authority gate should stop, not guess.",
        date: "2025-03",
        category: "Doctrine",
    },
    Thought {
        title: "The Control Plane for Human-Owned Intelligence",
        preview: "Memory, decisioning and execution need one place where an operator can see and constrain all three.",
        date: "2025-04",
        category: "Architecture",
    },
    Thought {
        title: "Drift Is the Default State",
        preview: "Models, markets and workflows drift. Guarding against drift is cheaper than explaining it afterwards.",
        date: "2025-05",
        category: "Operations",
    },
];

/// Closing quote of the thoughts page
pub const DOCTRINE_ANCHOR: &str =
    "If governance is not deterministically enforced before state mutation, it is not governance.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{CATEGORY_LABELS, FILE_TYPE_LABELS};

    #[test]
    fn test_find_case_study() {
        let cs = find_case_study("missed-call-recovery").unwrap();
        assert_eq!(cs.metrics.len(), 4);
        assert!(find_case_study("does-not-exist").is_none());
    }

    #[test]
    fn test_resource_keys_have_labels() {
        for r in RESOURCES {
            assert!(CATEGORY_LABELS.get(r.category).is_some(), "{}", r.category);
            assert!(FILE_TYPE_LABELS.get(r.file_type).is_some(), "{}", r.file_type);
        }
    }

    #[test]
    fn test_resource_case_study_links_resolve() {
        for slug in RESOURCES.iter().filter_map(|r| r.case_study) {
            assert!(find_case_study(slug).is_some(), "dangling case study link {}", slug);
        }
    }
}
