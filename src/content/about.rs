pub const HEADING: &str = "About Me";

pub const BIO_TITLE: &str = "The Human Behind the Code";
pub static BIO: &[&str] = &[
    "Hey there! I'm Magesh C M, a third-year IT student at Saveetha Engineering College, \
     navigating the beautiful chaos of ones and zeros. By day, I'm deciphering algorithms \
     and database schemas. By night, I'm either debugging code that worked yesterday or \
     contemplating why I chose curly braces over sleep.",
    "I believe in writing code that's cleaner than my room (which isn't saying much), \
     learning from every stackoverflow thread, and occasionally pretending I understand \
     blockchain on the first try. Spoiler: I don't. But that's the fun part.",
    "When I'm not arguing with my IDE, you'll find me exploring the fascinating world of \
     quantitative finance, building blockchain solutions that make sense (sometimes), and \
     contributing to the universal developer pastime of turning coffee into features.",
];

pub const JOURNEY_TITLE: &str = "Journey So Far";

pub struct Education {
    pub heading: &'static str,
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub static EDUCATION: Education = Education {
    heading: "\u{1F393} Education",
    degree: "B.Tech in Information Technology",
    school: "Saveetha Engineering College",
    period: "2023 - Present (3rd Year)",
};

pub const EXPERIENCE_HEADING: &str = "\u{1F4BC} Professional Experience";
pub const EXPERIENCE: &str = "Building practical solutions through academic and personal projects. \
                              Focused on blockchain technology, AI/ML applications, and full-stack development. \
                              Currently expanding into quantitative finance and algorithmic trading.";

pub const ACHIEVEMENTS_HEADING: &str = "\u{1F680} Key Achievements";
pub static ACHIEVEMENTS: &[&str] = &[
    "Completed 30+ professional certifications in AI, Cloud, and Data Analytics",
    "Built 4 production-ready blockchain and web applications",
    "AWS Cloud Solutions Architect Professional Certificate",
    "Natural Language Processing Specialization (DeepLearning.AI)",
    "Google Data Analytics Professional Certificate",
];

pub const PHILOSOPHY_TITLE: &str = "My Philosophy";
pub const PHILOSOPHY_QUOTE: &str = "\"Life is a Git repository. Sometimes you commit mistakes, sometimes you push \
                                    boundaries, but you always keep merging forward. And yes, there's always that \
                                    one conflict you didn't see coming.\"";
pub const PHILOSOPHY: &str = "I approach problems with curiosity, tackle challenges with resilience, and celebrate \
                              small victories (like code that runs on the first try). I'm a firm believer that the \
                              best way to learn is to build, break, fix, and repeat\u{2014}preferably with good \
                              documentation this time.";

pub const FUN_FACTS_TITLE: &str = "Random Bits About Me";
pub static FUN_FACTS: &[&str] = &[
    "\u{1F41B} I've written more bugs than features, but we don't talk about that",
    "\u{2615} Coffee isn't a beverage; it's a lifestyle choice",
    "\u{1F4DA} Currently learning quants because why not add math to the mix",
    "\u{1F3AF} Firm believer in \"it works on my machine\" syndrome",
    "\u{1F319} Night owl who thinks best when the world is debugging their sleep",
    "\u{1F4AD} Philosophical about semicolons but practical about deadlines",
];
