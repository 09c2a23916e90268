//! Site routes
//!
//! Paths map onto a closed set of pages. Anything unrecognized becomes
//! [`Route::NotFound`] carrying the original path, so it can be shown back
//! to the reader instead of failing.

use std::fmt;

/// A page on the site
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    About,
    /// Ecosystem page, optionally deep-linked to a venture (`#slug`)
    Ecosystem { anchor: Option<String> },
    Resources,
    CaseStudy(String),
    Thoughts,
    Connect,
    Legal,
    Privacy,
    Imprint,
    NotFound(String),
}

impl Route {
    /// Parse a site path such as `/ecosystem#replyby`
    ///
    /// Query strings are dropped and a trailing slash is ignored. Fragments
    /// are only kept for the ecosystem page.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let stripped;
        let without_query = match path.find('?') {
            Some(q) => {
                // a query may sit before a fragment
                let end = path[q..].find('#').map_or(path.len(), |h| q + h);
                stripped = format!("{}{}", &path[..q], &path[end..]);
                stripped.as_str()
            }
            None => path,
        };

        let (pathname, fragment) = match without_query.split_once('#') {
            Some((p, f)) => (p, Some(f)),
            None => (without_query, None),
        };

        let pathname = if pathname.len() > 1 {
            pathname.trim_end_matches('/')
        } else {
            pathname
        };

        match pathname {
            "" | "/" => Route::Home,
            "/about" => Route::About,
            "/ecosystem" => Route::Ecosystem {
                anchor: fragment.filter(|f| !f.is_empty()).map(str::to_string),
            },
            "/resources" => Route::Resources,
            "/thoughts" => Route::Thoughts,
            "/connect" => Route::Connect,
            "/legal" => Route::Legal,
            "/privacy" => Route::Privacy,
            "/imprint" => Route::Imprint,
            other => match other.strip_prefix("/case-studies/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                    Route::CaseStudy(slug.to_string())
                }
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    /// Full path including any fragment
    pub fn path(&self) -> String {
        match self {
            Route::Ecosystem { anchor: Some(slug) } => format!("/ecosystem#{}", slug),
            Route::CaseStudy(slug) => format!("/case-studies/{}", slug),
            Route::NotFound(path) => path.clone(),
            other => other.pathname().to_string(),
        }
    }

    /// Path without the fragment, the part that decides which page is shown
    pub fn pathname(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Ecosystem { .. } => "/ecosystem",
            Route::Resources => "/resources",
            Route::CaseStudy(_) => "/case-studies",
            Route::Thoughts => "/thoughts",
            Route::Connect => "/connect",
            Route::Legal => "/legal",
            Route::Privacy => "/privacy",
            Route::Imprint => "/imprint",
            Route::NotFound(path) => path,
        }
    }

    /// Whether two routes show the same page (fragments ignored)
    pub fn same_page(&self, other: &Route) -> bool {
        match (self, other) {
            (Route::Ecosystem { .. }, Route::Ecosystem { .. }) => true,
            (a, b) => a == b,
        }
    }

    /// Short page title for window titles and logs
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Ecosystem { .. } => "Ecosystem",
            Route::Resources => "Resources",
            Route::CaseStudy(_) => "Case Study",
            Route::Thoughts => "Thoughts",
            Route::Connect => "Connect",
            Route::Legal => "Legal Notice",
            Route::Privacy => "Privacy Policy",
            Route::Imprint => "Imprint",
            Route::NotFound(_) => "Not Found",
        }
    }

    /// Ventures anchor, if any
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Route::Ecosystem { anchor } => anchor.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_pages() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/resources/"), Route::Resources);
        assert_eq!(Route::parse("/imprint"), Route::Imprint);
    }

    #[test]
    fn test_parse_ecosystem_anchor() {
        assert_eq!(
            Route::parse("/ecosystem#replyby"),
            Route::Ecosystem { anchor: Some("replyby".to_string()) }
        );
        assert_eq!(Route::parse("/ecosystem#"), Route::Ecosystem { anchor: None });
        assert_eq!(Route::parse("/ecosystem"), Route::Ecosystem { anchor: None });
    }

    #[test]
    fn test_parse_case_study() {
        assert_eq!(
            Route::parse("/case-studies/missed-call-recovery"),
            Route::CaseStudy("missed-call-recovery".to_string())
        );
        assert_eq!(
            Route::parse("/case-studies/"),
            Route::NotFound("/case-studies/".to_string())
        );
        assert_eq!(
            Route::parse("/case-studies/a/b"),
            Route::NotFound("/case-studies/a/b".to_string())
        );
    }

    #[test]
    fn test_parse_drops_query() {
        assert_eq!(Route::parse("/about?ref=nav"), Route::About);
        assert_eq!(
            Route::parse("/ecosystem?x=1#cosmocrat"),
            Route::Ecosystem { anchor: Some("cosmocrat".to_string()) }
        );
    }

    #[test]
    fn test_unknown_is_not_found() {
        assert_eq!(Route::parse("/blog"), Route::NotFound("/blog".to_string()));
    }

    #[test]
    fn test_path_round_trip() {
        for path in [
            "/",
            "/about",
            "/ecosystem",
            "/ecosystem#cosmocrat",
            "/resources",
            "/case-studies/regime-aware-execution",
            "/thoughts",
            "/connect",
            "/legal",
            "/privacy",
            "/imprint",
            "/nowhere",
        ] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_same_page_ignores_anchor() {
        let plain = Route::parse("/ecosystem");
        let anchored = Route::parse("/ecosystem#replyby");
        assert!(plain.same_page(&anchored));
        assert!(!plain.same_page(&Route::About));
        assert!(!Route::parse("/case-studies/a").same_page(&Route::parse("/case-studies/b")));
    }
}
