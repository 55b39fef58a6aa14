//! Static content types rendered by the pages.
//!
//! Everything here is `'static` literal data declared in `crate::content`.
//! Each list entry exposes a `key()` used as its `data-key` render identity.

use chrono::NaiveDate;

/// A single skill bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub color: &'static str,
    pub skills: &'static [Skill],
    /// Shows the "Currently Learning" badge.
    pub learning: bool,
}

impl SkillCategory {
    pub fn key(&self) -> String {
        slugify(self.title)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub id: u32,
    pub title: &'static str,
    pub issuer: &'static str,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub issued: &'static str,
    pub description: &'static str,
    pub verify: Option<&'static str>,
    pub color: &'static str,
    pub courses: Option<u8>,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub valid_until: Option<&'static str>,
    pub cert_id: Option<&'static str>,
}

impl Certification {
    pub fn key(&self) -> String {
        format!("cert-{}", self.id)
    }

    /// Issue date as shown on the card, e.g. `May 2, 2025`.
    pub fn issued_display(&self) -> String {
        display_date(self.issued)
    }

    pub fn valid_until_display(&self) -> Option<String> {
        self.valid_until.map(display_date)
    }
}

/// Format an ISO date the way the certificate cards show it. Unparseable
/// input is shown verbatim.
pub fn display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
    /// Card gradient, start and end colours.
    pub gradient: (&'static str, &'static str),
    pub coming_soon: bool,
}

impl Project {
    pub fn key(&self) -> &'static str {
        self.slug
    }

    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
    pub color: &'static str,
}

impl ContactChannel {
    pub fn key(&self) -> String {
        slugify(self.label)
    }

    /// Web links open in a new tab, `mailto:`/`tel:` stay in place.
    pub fn opens_new_tab(&self) -> bool {
        self.link.is_some_and(|l| l.starts_with("http"))
    }
}

// ---------------------------------------------------------------------------
// Project detail pages
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleCard {
    pub role: &'static str,
    pub actions: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitledBlock {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionBody {
    Paragraphs(&'static [&'static str]),
    /// Icon-less feature grid.
    Features(&'static [Card]),
    Bullets(&'static [&'static str]),
    /// Cards prefixed with their 1-based position.
    Numbered(&'static [Card]),
    Roles(&'static [RoleCard]),
    Tech(&'static [&'static str]),
    /// Sub-headed blocks, e.g. "Why Blockchain?" followed by "Technical Details".
    Titled(&'static [TitledBlock]),
}

impl SectionBody {
    /// Number of visual entries the body renders.
    pub fn len(&self) -> usize {
        match self {
            SectionBody::Paragraphs(items) | SectionBody::Bullets(items) | SectionBody::Tech(items) => {
                items.len()
            }
            SectionBody::Features(cards) | SectionBody::Numbered(cards) => cards.len(),
            SectionBody::Roles(roles) => roles.len(),
            SectionBody::Titled(blocks) => blocks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: SectionBody,
    /// Rendered with the accent highlight background.
    pub highlight: bool,
}

impl Section {
    pub fn key(&self) -> String {
        slugify(self.heading)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectDetail {
    pub slug: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub accent: &'static str,
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
    pub coming_soon: bool,
    pub sections: &'static [Section],
    /// Closing call-to-action card, if any.
    pub outro: Option<Card>,
}

/// Lower-case, dash separated identifier built from display text.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Blockchain & Web3"), "blockchain-web3");
        assert_eq!(slugify("  User Roles & Actions "), "user-roles-actions");
        assert_eq!(slugify("HTML/CSS"), "html-css");
    }

    #[test]
    fn display_date_formats_iso_and_passes_through_garbage() {
        assert_eq!(display_date("2025-05-02"), "May 2, 2025");
        assert_eq!(display_date("2027-10-13"), "Oct 13, 2027");
        assert_eq!(display_date("soon"), "soon");
    }

    #[test]
    fn contact_channel_tab_target() {
        let web = ContactChannel { label: "GitHub", value: "@x", link: Some("https://github.com/x"), color: "#000" };
        let mail = ContactChannel { label: "Email", value: "a@b", link: Some("mailto:a@b"), color: "#000" };
        let none = ContactChannel { label: "Location", value: "Here", link: None, color: "#000" };
        assert!(web.opens_new_tab());
        assert!(!mail.opens_new_tab());
        assert!(!none.opens_new_tab());
    }
}
