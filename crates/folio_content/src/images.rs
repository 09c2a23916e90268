//! Alt text and descriptions for portrait images

/// Accessibility metadata for an image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageMeta {
    pub alt: &'static str,
    pub description: Option<&'static str>,
}

const AUTHORITY_ALT: &str = "Dan Mercede, Founder & Systems Architect of a governed AI operating system";
const WORKING_ALT: &str = "Dan Mercede working as founder and systems architect on governed AI systems";
const SOCIAL_ALT: &str = "Dan Mercede, founder and systems architect in a working environment";

/// Keyed by file name (no directory)
pub const IMAGE_METADATA: &[(&str, ImageMeta)] = &[
    (
        "dan-mercede-executive-authority.png",
        ImageMeta {
            alt: AUTHORITY_ALT,
            description: Some("Executive portrait of Dan Mercede, founder and systems architect focused on governed AI systems and enterprise control planes."),
        },
    ),
    (
        "dan-mercede-executive-outdoor.png",
        ImageMeta {
            alt: AUTHORITY_ALT,
            description: Some("Outdoor executive portrait of Dan Mercede, founder and systems architect specializing in governed AI and system control architecture."),
        },
    ),
    (
        "dan-mercede-executive-relaxed.png",
        ImageMeta {
            alt: AUTHORITY_ALT,
            description: Some("Relaxed executive portrait of Dan Mercede, founder and systems architect working in governed AI and enterprise AI governance."),
        },
    ),
    (
        "dan-mercede-founder-headshot.png",
        ImageMeta {
            alt: WORKING_ALT,
            description: Some("Founder headshot of Dan Mercede, actively building and operating governed AI systems with a focus on execution and architecture."),
        },
    ),
    (
        "dan-mercede-founder-headshot-sm.png",
        ImageMeta {
            alt: WORKING_ALT,
            description: Some("Scaled founder headshot of Dan Mercede focused on hands-on AI system design and governance."),
        },
    ),
    (
        "dan-mercede-founder-headshot-xs.png",
        ImageMeta {
            alt: WORKING_ALT,
            description: Some("Compact founder headshot of Dan Mercede emphasizing hands-on work in governed AI systems."),
        },
    ),
    (
        "dan-mercede-founder-social-landscape.png",
        ImageMeta {
            alt: SOCIAL_ALT,
            description: Some("Landscape portrait of Dan Mercede in a casual working environment, representing hands-on leadership in governed AI systems."),
        },
    ),
    (
        "dan-mercede-founder-social-portrait.png",
        ImageMeta {
            alt: SOCIAL_ALT,
            description: Some("Portrait of Dan Mercede in a social working context, reflecting active system design and founder-led execution."),
        },
    ),
    (
        "dan-mercede-founder-working-landscape.png",
        ImageMeta {
            alt: WORKING_ALT,
            description: Some("Landscape image of Dan Mercede actively working on governed AI system architecture and execution."),
        },
    ),
    (
        "dan-mercede-founder-working-portrait.png",
        ImageMeta {
            alt: WORKING_ALT,
            description: Some("Portrait of Dan Mercede in a focused working setting, emphasizing hands-on system building and AI governance."),
        },
    ),
];

/// Returned for images missing from the table
pub const FALLBACK_IMAGE_META: ImageMeta = ImageMeta {
    alt: "Dan Mercede",
    description: None,
};

/// Portrait on the home page hero
pub const HERO_PORTRAIT: &str = "/dan-mercede-founder-headshot-sm.png";
/// Portrait on the about page
pub const ABOUT_PORTRAIT: &str = "/dan-mercede-founder-working-portrait.png";

/// Metadata for an image path or file name
///
/// Only the file name is matched, so `/img/a.png` and `a.png` are the same
/// image. Unknown images get a generic alt text and a warning.
pub fn image_meta(src: &str) -> ImageMeta {
    let key = basename(src);
    match IMAGE_METADATA.iter().find(|(name, _)| *name == key) {
        Some((_, meta)) => *meta,
        None => {
            log::warn!("Missing image metadata for {}", key);
            FALLBACK_IMAGE_META
        }
    }
}

fn basename(src: &str) -> &str {
    match src.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => src,
    }
}
