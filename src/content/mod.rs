//! Hard-coded site content.
//!
//! Order within every slice is the order the pages render it in.

pub mod about;
pub mod certifications;
pub mod contact;
pub mod home;
pub mod project_details;
pub mod projects;
pub mod skills;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<I: IntoIterator<Item = String>>(keys: I, what: &str) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(!key.is_empty(), "empty render key in {}", what);
            assert!(seen.insert(key.clone()), "duplicate render key {} in {}", key, what);
        }
    }

    #[test]
    fn render_keys_are_unique_per_list() {
        assert_unique(skills::SKILL_CATEGORIES.iter().map(|c| c.key()), "skill categories");
        assert_unique(certifications::CERTIFICATIONS.iter().map(|c| c.key()), "certifications");
        assert_unique(projects::PROJECTS.iter().map(|p| p.key().to_string()), "projects");
        assert_unique(contact::CHANNELS.iter().map(|c| c.key()), "contact channels");
        for detail in project_details::ALL {
            assert_unique(detail.sections.iter().map(|s| s.key()), detail.slug);
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in skills::SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} has no skills", category.title);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} is {}%", skill.name, skill.level);
            }
        }
    }

    #[test]
    fn only_quantitative_finance_is_marked_learning() {
        let learning: Vec<_> = skills::SKILL_CATEGORIES
            .iter()
            .filter(|c| c.learning)
            .map(|c| c.title)
            .collect();
        assert_eq!(learning, vec!["Quantitative Finance"]);
    }

    #[test]
    fn every_project_has_a_detail_page() {
        for project in projects::PROJECTS {
            let detail = project_details::by_slug(project.slug)
                .unwrap_or_else(|| panic!("no detail page for {}", project.slug));
            assert_eq!(detail.coming_soon, project.coming_soon);
        }
        assert_eq!(project_details::ALL.len(), projects::PROJECTS.len());
    }

    #[test]
    fn coming_soon_projects_have_no_external_links() {
        for project in projects::PROJECTS.iter().filter(|p| p.coming_soon) {
            assert!(project.github.is_none());
            assert!(project.live.is_none());
        }
    }

    #[test]
    fn certification_dates_are_iso() {
        for cert in certifications::CERTIFICATIONS {
            assert_ne!(cert.issued_display(), cert.issued, "{} issued date did not parse", cert.id);
            if let (Some(raw), Some(shown)) = (cert.valid_until, cert.valid_until_display()) {
                assert_ne!(raw, shown);
            }
        }
    }

    #[test]
    fn declared_order_is_preserved() {
        let titles: Vec<_> = projects::PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["InnoFeed", "Agriculture Traceability", "Tax Chain", "Quants Project"]);
        let ids: Vec<_> = certifications::CERTIFICATIONS.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
