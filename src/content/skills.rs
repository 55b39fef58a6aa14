use crate::models::{Skill, SkillCategory};

pub const HEADING: &str = "Skills & Expertise";
pub const SUBTITLE: &str = "A collection of tools and technologies I've learned to build with";

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        color: "#3b82f6",
        skills: &[
            skill("Python", 85),
            skill("JavaScript", 80),
            skill("Java", 75),
            skill("Solidity", 70),
        ],
        learning: false,
    },
    SkillCategory {
        title: "Blockchain & Web3",
        color: "#10b981",
        skills: &[
            skill("Smart Contracts", 75),
            skill("Web3.js", 70),
            skill("Ethereum", 70),
            skill("DApp Development", 65),
        ],
        learning: false,
    },
    SkillCategory {
        title: "Backend & Databases",
        color: "#8b5cf6",
        skills: &[
            skill("Node.js", 80),
            skill("Express.js", 78),
            skill("MongoDB", 75),
            skill("RESTful APIs", 82),
        ],
        learning: false,
    },
    SkillCategory {
        title: "Frontend Development",
        color: "#06b6d4",
        skills: &[
            skill("React", 85),
            skill("HTML/CSS", 88),
            skill("Tailwind CSS", 80),
            skill("Three.js", 65),
        ],
        learning: false,
    },
    SkillCategory {
        title: "Machine Learning & AI",
        color: "#ec4899",
        skills: &[
            skill("TensorFlow", 60),
            skill("Scikit-learn", 65),
            skill("NLP", 55),
            skill("Data Analysis", 70),
        ],
        learning: false,
    },
    SkillCategory {
        title: "Quantitative Finance",
        color: "#f59e0b",
        skills: &[
            skill("Statistical Analysis", 50),
            skill("Financial Modeling", 45),
            skill("Algorithmic Trading", 40),
            skill("Risk Management", 42),
        ],
        learning: true,
    },
];

pub static TOOLS: &[&str] = &[
    "Git & GitHub",
    "VS Code",
    "Vercel",
    "AWS",
    "Docker",
    "Postman",
    "Figma",
    "Linux",
    "Jupyter",
    "MetaMask",
    "Hardhat",
    "Remix IDE",
];

pub const PHILOSOPHY_TITLE: &str = "My Learning Philosophy";

pub static PHILOSOPHY: &[&str] = &[
    "I believe in learning by building. Every project is an opportunity to push boundaries, \
     every bug is a lesson in disguise, and every technology mastered is a stepping stone to the next challenge. \
     The percentages above aren't just numbers\u{2014}they represent hours of debugging, countless \"aha!\" moments, \
     and the continuous journey of becoming a better developer.",
    "Currently expanding into quantitative finance because why limit yourself to just one complex field \
     when you can juggle multiple? \u{1F604}",
];
