//! Legal notice, privacy policy and imprint

pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct LegalDocument {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [LegalSection],
}

pub const LEGAL_NOTICE: LegalDocument = LegalDocument {
    title: "Legal Notice",
    subtitle: "Terms & Conditions",
    sections: &[
        LegalSection {
            heading: "1. Information on this Website",
            body: "The content on danmercede.com is provided for informational purposes only. No representations or warranties are made regarding accuracy, completeness, or suitability for any purpose. Any reliance on the information is at your own risk.",
        },
        LegalSection {
            heading: "2. Intellectual Property",
            body: "All systems, methodologies, architectures, and branding referenced on this site are the intellectual property of Orion Apex Capital or their respective operating entities. Unauthorized reproduction, distribution, or use without written permission is prohibited.",
        },
        LegalSection {
            heading: "3. Limitation of Liability",
            body: "The owner is not liable for any direct or indirect loss, damage, or injury arising from the use or inability to use the information provided on this site.",
        },
    ],
};

pub const PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    subtitle: "Data Governance",
    sections: &[
        LegalSection {
            heading: "1. General",
            body: "We respect your privacy and treat personal data in accordance with applicable data protection regulations.",
        },
        LegalSection {
            heading: "2. Data Collection",
            body: "This site is a static informational website. We do not collect personal data unless you voluntarily provide it via direct contact (e.g., email).",
        },
        LegalSection {
            heading: "3. Cookies & Tracking",
            body: "We do not use advertising or behavioral tracking cookies. Any local storage used is strictly for essential technical functionality.",
        },
    ],
};

/// Imprint fields as (label, value)
pub const IMPRINT: &[(&str, &str)] = &[
    ("Entity", "Orion Apex Capital"),
    ("Represented by", "Dan Mercede"),
    ("Contact", "contact@danmercede.com"),
    ("Jurisdiction", "United States"),
];
