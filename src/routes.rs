//! URL path ↔ page mapping.
//!
//! Paths are matched ASCII case-insensitively with a single trailing slash,
//! query string and fragment ignored. Unknown paths map to `None` and the
//! shell leaves the main area empty.

use crate::constants::SITE_TITLE_SUFFIX;
use crate::content;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectSlug {
    InnoFeed,
    AgricultureTraceability,
    TaxChain,
    Quants,
}

impl ProjectSlug {
    pub const ALL: [ProjectSlug; 4] = [
        ProjectSlug::InnoFeed,
        ProjectSlug::AgricultureTraceability,
        ProjectSlug::TaxChain,
        ProjectSlug::Quants,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectSlug::InnoFeed => "innofeed",
            ProjectSlug::AgricultureTraceability => "agriculture-traceability",
            ProjectSlug::TaxChain => "tax-chain",
            ProjectSlug::Quants => "quants",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slug| slug.as_str().eq_ignore_ascii_case(segment))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Skills,
    Certifications,
    Contact,
    ProjectDetail(ProjectSlug),
}

impl Route {
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        if path.is_empty() || path == "/" {
            return Some(Route::Home);
        }

        let lower = path.to_ascii_lowercase();
        match lower.as_str() {
            "/about" => Some(Route::About),
            "/projects" => Some(Route::Projects),
            "/skills" => Some(Route::Skills),
            "/certifications" => Some(Route::Certifications),
            "/contact" => Some(Route::Contact),
            other => other
                .strip_prefix("/projects/")
                .and_then(ProjectSlug::from_segment)
                .map(Route::ProjectDetail),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Skills => "/skills",
            Route::Certifications => "/certifications",
            Route::Contact => "/contact",
            Route::ProjectDetail(ProjectSlug::InnoFeed) => "/projects/innofeed",
            Route::ProjectDetail(ProjectSlug::AgricultureTraceability) => "/projects/agriculture-traceability",
            Route::ProjectDetail(ProjectSlug::TaxChain) => "/projects/tax-chain",
            Route::ProjectDetail(ProjectSlug::Quants) => "/projects/quants",
        }
    }

    /// The `<h1>` text that identifies the rendered page.
    pub fn heading(&self) -> &'static str {
        match self {
            Route::Home => content::home::NAME,
            Route::About => content::about::HEADING,
            Route::Projects => content::projects::HEADING,
            Route::Skills => content::skills::HEADING,
            Route::Certifications => content::certifications::HEADING,
            Route::Contact => content::contact::HEADING,
            Route::ProjectDetail(slug) => content::project_details::by_slug(slug.as_str())
                .map(|d| d.title)
                .unwrap_or_default(),
        }
    }

    /// Sidebar label for top-level routes.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects | Route::ProjectDetail(_) => "Projects",
            Route::Skills => "Skills",
            Route::Certifications => "Certifications",
            Route::Contact => "Contact",
        }
    }

    pub fn title(&self) -> String {
        match self {
            Route::Home => SITE_TITLE_SUFFIX.to_string(),
            Route::ProjectDetail(_) => format!("{} | {}", self.heading(), SITE_TITLE_SUFFIX),
            _ => format!("{} | {}", self.label(), SITE_TITLE_SUFFIX),
        }
    }

    pub fn all() -> Vec<Route> {
        let mut routes = Self::nav_items().to_vec();
        routes.extend(ProjectSlug::ALL.into_iter().map(Route::ProjectDetail));
        routes
    }

    pub fn nav_items() -> [Route; 6] {
        [
            Route::Home,
            Route::About,
            Route::Projects,
            Route::Skills,
            Route::Certifications,
            Route::Contact,
        ]
    }

    /// Which sidebar entry is highlighted while this route is shown.
    pub fn nav_parent(&self) -> Route {
        match self {
            Route::ProjectDetail(_) => Route::Projects,
            other => *other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(route), "{}", route.path());
        }
        assert_eq!(Route::all().len(), 10);
    }

    #[test]
    fn matching_ignores_case_and_trailing_slash() {
        assert_eq!(Route::from_path("/Contact"), Some(Route::Contact));
        assert_eq!(Route::from_path("/projects/"), Some(Route::Projects));
        assert_eq!(
            Route::from_path("/Projects/Tax-Chain/"),
            Some(Route::ProjectDetail(ProjectSlug::TaxChain))
        );
        assert_eq!(Route::from_path(""), Some(Route::Home));
    }

    #[test]
    fn query_and_fragment_are_stripped() {
        assert_eq!(Route::from_path("/skills?ref=cv"), Some(Route::Skills));
        assert_eq!(Route::from_path("/about#journey"), Some(Route::About));
        assert_eq!(Route::from_path("/?utm=x"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(Route::from_path("/blog"), None);
        assert_eq!(Route::from_path("/projects/unknown"), None);
        assert_eq!(Route::from_path("/projects/innofeed/extra"), None);
    }

    #[test]
    fn headings_are_distinct() {
        let mut headings: Vec<_> = Route::all().iter().map(|r| r.heading()).collect();
        assert!(headings.iter().all(|h| !h.is_empty()));
        headings.sort_unstable();
        headings.dedup();
        assert_eq!(headings.len(), 10);
    }

    #[test]
    fn detail_pages_highlight_projects() {
        assert_eq!(Route::ProjectDetail(ProjectSlug::Quants).nav_parent(), Route::Projects);
        assert_eq!(Route::About.nav_parent(), Route::About);
        assert_eq!(Route::ProjectDetail(ProjectSlug::InnoFeed).title(), "InnoFeed | Magesh C M | Portfolio");
    }

    #[test]
    fn slugs_match_project_content() {
        for slug in ProjectSlug::ALL {
            assert!(content::projects::by_slug(slug.as_str()).is_some(), "{:?}", slug);
        }
    }
}
