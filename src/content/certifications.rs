use crate::models::{Card, Certification};

pub const HEADING: &str = "Certifications & Achievements";
pub const SUBTITLE: &str = "Professional certifications earned through continuous learning";

/// Header badges: total count, professional certificates.
pub static STATS: &[&str] = &["30+ Certifications", "6 Professional Certificates"];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        title: "AWS Cloud Solutions Architect Professional Certificate",
        issuer: "Amazon Web Services (Coursera)",
        issued: "2025-05-02",
        description: "Comprehensive specialization covering cloud architecture, infrastructure deployment, \
                      data lakes, and AWS solutions design.",
        verify: Some("https://coursera.org/verify/professional-cert/9AHZAA46SQ8T"),
        color: "#ff9900",
        courses: Some(4),
        valid_until: None,
        cert_id: None,
    },
    Certification {
        id: 2,
        title: "Natural Language Processing Specialization",
        issuer: "DeepLearning.AI (Coursera)",
        issued: "2025-11-09",
        description: "Advanced NLP specialization covering classification, probabilistic models, \
                      sequence models, and attention mechanisms.",
        verify: Some("https://coursera.org/verify/specialization/55UQSV837DVI"),
        color: "#00a67e",
        courses: Some(4),
        valid_until: None,
        cert_id: None,
    },
    Certification {
        id: 3,
        title: "Google Data Analytics Professional Certificate",
        issuer: "Google (Coursera)",
        issued: "2025-12-02",
        description: "Comprehensive data analytics program covering data preparation, analysis, \
                      visualization, and R programming.",
        verify: Some("https://coursera.org/verify/professional-cert/JRF1UUAYQ25C"),
        color: "#4285f4",
        courses: Some(9),
        valid_until: None,
        cert_id: None,
    },
    Certification {
        id: 4,
        title: "Oracle Cloud Infrastructure 2025 Certified Generative AI Professional",
        issuer: "Oracle",
        issued: "2025-10-13",
        description: "Professional certification demonstrating expertise in Oracle Cloud generative AI \
                      solutions and implementations.",
        verify: None,
        color: "#c74634",
        courses: None,
        valid_until: Some("2027-10-13"),
        cert_id: Some("102904199OCI25GAIOCP"),
    },
    Certification {
        id: 5,
        title: "Oracle Cloud Infrastructure 2025 Certified AI Foundations Associate",
        issuer: "Oracle",
        issued: "2025-10-14",
        description: "Foundational AI certification covering Oracle Cloud AI services and fundamental concepts.",
        verify: None,
        color: "#c74634",
        courses: None,
        valid_until: Some("2027-10-14"),
        cert_id: Some("102904199OCI25AICFA"),
    },
    Certification {
        id: 6,
        title: "Microsoft AI Learning Challenge - AI Innovation 2025",
        issuer: "Microsoft Learn",
        issued: "2025-09-23",
        description: "Successfully completed Microsoft's AI Innovation challenge focusing on cutting-edge \
                      AI technologies.",
        verify: None,
        color: "#00a4ef",
        courses: None,
        valid_until: None,
        cert_id: None,
    },
];

/// "Additional Achievements" cards: the big number is the title.
pub static ACHIEVEMENTS: &[(&str, Card)] = &[
    (
        "30+",
        Card {
            title: "Individual Course Certifications",
            text: "Completed specialized courses in AWS, AI/ML, NLP, Data Analytics, Databases, and Cloud Computing",
        },
    ),
    (
        "3",
        Card {
            title: "Professional Specializations",
            text: "AWS Cloud Solutions Architect, Natural Language Processing, Google Data Analytics",
        },
    ),
    (
        "2025",
        Card {
            title: "Active Learning Year",
            text: "Continuously expanding knowledge in emerging technologies and quantitative finance",
        },
    ),
];

pub const JOURNEY_TITLE: &str = "My Learning Journey";

pub static JOURNEY: &[&str] = &[
    "Each certification represents countless hours of learning, hands-on projects, and pushing beyond \
     comfort zones. From cloud architecture to natural language processing, from data analytics to \
     generative AI\u{2014}every credential is a stepping stone in my continuous quest to master the intersection \
     of technology and innovation.",
    "Currently diving deep into quantitative finance while maintaining expertise across cloud computing, \
     AI/ML, and blockchain technologies. Because why limit yourself to one domain when you can be a \
     polymath? \u{1F680}",
];
