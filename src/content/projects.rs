use crate::models::Project;

pub const HEADING: &str = "My Projects";
pub const SUBTITLE: &str = "Building solutions that matter, one commit at a time";

pub static PROJECTS: &[Project] = &[
    Project {
        slug: "innofeed",
        title: "InnoFeed",
        description: "A modern social media platform for innovation and creativity sharing with real-time updates.",
        tech: &["React", "Node.js", "MongoDB", "Socket.io"],
        github: Some("https://github.com/MageshCM/Inno-Feed"),
        live: Some("https://inno-feed.vercel.app/"),
        gradient: ("#3b82f6", "#06b6d4"),
        coming_soon: false,
    },
    Project {
        slug: "agriculture-traceability",
        title: "Agriculture Traceability",
        description: "Blockchain-based supply chain tracking system for agricultural products ensuring transparency.",
        tech: &["Solidity", "Web3.js", "React", "Ethereum"],
        github: Some("https://github.com/MageshCM/Agriculture-Traceability"),
        live: Some("https://agriculture-traceability-alpha.vercel.app/"),
        gradient: ("#22c55e", "#10b981"),
        coming_soon: false,
    },
    Project {
        slug: "tax-chain",
        title: "Tax Chain",
        description: "Decentralized tax management system leveraging blockchain for secure and transparent transactions.",
        tech: &["Solidity", "React", "Web3.js", "Smart Contracts"],
        github: Some("https://github.com/MageshCM/Tax-chain-"),
        live: Some("https://tax-chain-opal.vercel.app/"),
        gradient: ("#a855f7", "#ec4899"),
        coming_soon: false,
    },
    Project {
        slug: "quants",
        title: "Quants Project",
        description: "Quantitative finance and algorithmic trading system (Currently in development).",
        tech: &["Python", "Machine Learning", "Data Analysis"],
        github: None,
        live: None,
        gradient: ("#f97316", "#ef4444"),
        coming_soon: true,
    },
];

pub fn by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}
