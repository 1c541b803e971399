//! Section routes
//!
//! Every search result carries a URL built from its type and id. Selecting a
//! result parses the URL back into a [`Route`] so the UI can switch section
//! and highlight the anchored entry.

use crate::search::ContentType;

/// A top-level portfolio section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Timeline,
    Skills,
    Projects,
    Publications,
    Blog,
    Talks,
    Consultancy,
}

impl Section {
    /// Sections in navigation order
    pub const ALL: [Section; 9] = [
        Section::About,
        Section::Experience,
        Section::Timeline,
        Section::Skills,
        Section::Projects,
        Section::Publications,
        Section::Blog,
        Section::Talks,
        Section::Consultancy,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Section::About => "/",
            Section::Experience => "/experience",
            Section::Timeline => "/timeline",
            Section::Skills => "/skills",
            Section::Projects => "/projects",
            Section::Publications => "/publications",
            Section::Blog => "/blog",
            Section::Talks => "/talks",
            Section::Consultancy => "/consultancy",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Timeline => "Timeline",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Publications => "Publications",
            Section::Blog => "Blog",
            Section::Talks => "Talks",
            Section::Consultancy => "Consultancy",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.path() == path)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next section, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl From<ContentType> for Section {
    fn from(kind: ContentType) -> Self {
        match kind {
            ContentType::Project => Section::Projects,
            ContentType::Publication => Section::Publications,
            ContentType::Experience => Section::Experience,
            ContentType::Talk => Section::Talks,
            ContentType::Blog => Section::Blog,
        }
    }
}

/// A section plus an optional entry to highlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub section: Section,
    pub anchor: Option<String>,
}

impl Route {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            anchor: None,
        }
    }

    pub fn with_anchor(section: Section, anchor: impl Into<String>) -> Self {
        Self {
            section,
            anchor: Some(anchor.into()),
        }
    }

    /// Route to a searchable record
    pub fn for_content(kind: ContentType, id: &str) -> Self {
        Self::with_anchor(kind.into(), id)
    }

    /// Blog posts get their own path; everything else is `<section>#<anchor>`
    pub fn url(&self) -> String {
        match (&self.anchor, self.section) {
            (None, section) => section.path().to_string(),
            (Some(slug), Section::Blog) => format!("/blog/{}", slug),
            (Some(anchor), section) => format!("{}#{}", section.path(), anchor),
        }
    }

    /// Parse a URL produced by [`url`](Self::url). Returns `None` for unknown paths.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        if !url.starts_with('/') {
            return None;
        }

        let (path, fragment) = match url.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (url, None),
        };

        if let Some(slug) = path.strip_prefix("/blog/") {
            let slug = slug.trim_end_matches('/');
            if !slug.is_empty() {
                return Some(Self::with_anchor(Section::Blog, slug));
            }
        }

        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let section = Section::from_path(path)?;
        Some(Self {
            section,
            anchor: fragment.filter(|f| !f.is_empty()).map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_urls() {
        assert_eq!(
            Route::for_content(ContentType::Project, "site").url(),
            "/projects#site"
        );
        assert_eq!(
            Route::for_content(ContentType::Publication, "p1").url(),
            "/publications#p1"
        );
        assert_eq!(
            Route::for_content(ContentType::Experience, "acme").url(),
            "/experience#acme"
        );
        assert_eq!(Route::for_content(ContentType::Talk, "t").url(), "/talks#t");
        assert_eq!(
            Route::for_content(ContentType::Blog, "hello-world").url(),
            "/blog/hello-world"
        );
    }

    #[test]
    fn test_parse_roundtrips_every_section() {
        for section in Section::ALL {
            let plain = Route::new(section);
            assert_eq!(Route::parse(&plain.url()), Some(plain));

            let anchored = Route::with_anchor(section, "entry");
            assert_eq!(Route::parse(&anchored.url()), Some(anchored));
        }
    }

    #[test]
    fn test_parse_edge_cases() {
        assert_eq!(Route::parse("/"), Some(Route::new(Section::About)));
        assert_eq!(Route::parse("/talks/"), Some(Route::new(Section::Talks)));
        assert_eq!(Route::parse("/talks#"), Some(Route::new(Section::Talks)));
        assert_eq!(Route::parse("/blog/"), Some(Route::new(Section::Blog)));
        assert_eq!(Route::parse("/nowhere"), None);
        assert_eq!(Route::parse("https://example.com/talks"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::About.prev(), Section::Consultancy);
        assert_eq!(Section::Consultancy.next(), Section::About);
        assert_eq!(Section::Skills.next(), Section::Projects);
    }
}
