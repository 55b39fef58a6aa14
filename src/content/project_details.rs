//! Long-form content for the `/projects/<slug>` pages.

use crate::models::{Card, ProjectDetail, RoleCard, Section, SectionBody, TitledBlock};

pub const BACK_LINK: &str = "Back to Projects";

const fn card(title: &'static str, text: &'static str) -> Card {
    Card { title, text }
}

const fn section(heading: &'static str, body: SectionBody) -> Section {
    Section { heading, body, highlight: false }
}

const fn highlighted(heading: &'static str, body: SectionBody) -> Section {
    Section { heading, body, highlight: true }
}

pub static INNOFEED: ProjectDetail = ProjectDetail {
    slug: "innofeed",
    badge: "AI Research Platform",
    title: "InnoFeed",
    tagline: "AI-Powered Research & Patent Feed Platform",
    accent: "#3b82f6",
    github: Some("https://github.com/MageshCM/Inno-Feed"),
    live: Some("https://inno-feed.vercel.app/"),
    coming_soon: false,
    sections: &[
        section(
            "Overview",
            SectionBody::Paragraphs(&[
                "InnoFeed is not just another social platform\u{2014}it's a domain-centric knowledge feed platform, \
                 conceptually closer to a personalized research intelligence dashboard. Unlike conventional social media, \
                 users consume curated content rather than generate social posts.",
                "The platform eliminates the need to search multiple platforms (arXiv, Google Patents, etc.) by automatically \
                 classifying content into domains and reducing cognitive load using concise AI summaries. It converts \
                 \"search-driven research\" into a passive feed-driven experience.",
            ]),
        ),
        section(
            "Key Features",
            SectionBody::Features(&[
                card("AI-Powered Summaries", "Leverages Hugging Face Transformers for intelligent content summarization"),
                card("Real-Time Feed", "Chronologically updated feed with latest research papers and patents"),
                card("Domain Classification", "Advanced NLP-based automatic categorization across technology domains"),
                card("Unified Discovery", "Single platform combining arXiv papers and Google Patents"),
            ]),
        ),
        section(
            "Core Functionality",
            SectionBody::Bullets(&[
                "Personalized feed of research papers and patents",
                "Domain-based filtering (user-selected technology areas)",
                "AI-generated summaries for each paper or patent",
                "Direct redirection links to original PDFs (arXiv / patent documents)",
                "User profile with editable domain preferences",
                "Chronologically updated feed (latest-first)",
                "Supabase authentication with email/password accounts",
            ]),
        ),
        section(
            "Technical Challenges",
            SectionBody::Numbered(&[
                card("", "Accurate NLP-based domain classification across heterogeneous documents"),
                card("", "Generating meaningful summaries while preserving technical context"),
                card("", "Handling different APIs, formats, and update cycles reliably"),
                card("", "Building a scalable architecture for future features"),
            ]),
        ),
        section(
            "Technology Stack",
            SectionBody::Tech(&[
                "React",
                "FastAPI",
                "Python",
                "PostgreSQL",
                "Hugging Face",
                "Transformers",
                "HTTPX",
                "Supabase",
                "arXiv API",
                "NLP",
            ]),
        ),
        highlighted(
            "What Makes It Unique",
            SectionBody::Paragraphs(&[
                "The key uniqueness lies in combining patents + research papers in a single AI-curated feed, \
                 which most existing platforms do not offer together. InnoFeed transforms research discovery from an \
                 active search process into a passive, intelligent feed experience\u{2014}like having a personal research \
                 assistant that knows exactly what you need.",
                "With its scalable architecture, the platform is designed for future features like alerts, bookmarking, \
                 and collaborative research tools, making it a comprehensive solution for researchers, innovators, and \
                 technology enthusiasts.",
            ]),
        ),
    ],
    outro: None,
};

pub static AGRICULTURE_TRACEABILITY: ProjectDetail = ProjectDetail {
    slug: "agriculture-traceability",
    badge: "Blockchain Solution",
    title: "Agriculture Traceability",
    tagline: "Blockchain-Based Supply Chain Tracking for Agricultural Products",
    accent: "#10b981",
    github: Some("https://github.com/MageshCM/Agriculture-Traceability"),
    live: Some("https://agriculture-traceability-alpha.vercel.app/"),
    coming_soon: false,
    sections: &[
        section(
            "Overview",
            SectionBody::Paragraphs(&[
                "Agriculture Traceability is a blockchain-based platform that brings transparency \
                 and trust to the agricultural supply chain. By leveraging Ethereum-compatible smart contracts, \
                 it creates an immutable record of every product's journey from farm to consumer.",
                "The platform eliminates information asymmetry in the supply chain, allowing consumers to verify \
                 the authenticity of products, farmers to prove their product quality, and distributors to maintain \
                 transparent logistics records\u{2014}all without relying on a centralized authority.",
            ]),
        ),
        section(
            "Key Features",
            SectionBody::Features(&[
                card("Product Journey Tracking", "Complete farm-to-consumer traceability with immutable records"),
                card("Multi-Stakeholder Platform", "Seamless experience for farmers, distributors, and consumers"),
                card("Tamper-Proof Verification", "Blockchain-backed authenticity without centralized authority"),
                card("Transparent History", "QR code scanning for instant product lifecycle timeline"),
            ]),
        ),
        section(
            "What It Tracks",
            SectionBody::Bullets(&[
                "Complete farm-to-consumer product journey",
                "Product origin details and certifications",
                "Ownership transfers across supply chain",
                "Quality checks and compliance records",
                "Immutable transaction history on blockchain",
                "Timestamp verification for all transactions",
            ]),
        ),
        section(
            "User Roles & Actions",
            SectionBody::Roles(&[
                RoleCard {
                    role: "Farmers",
                    actions: &["Register products", "Add origin details", "Initialize supply chain"],
                },
                RoleCard {
                    role: "Distributors/Suppliers",
                    actions: &["Update ownership", "Track logistics", "Add quality checks"],
                },
                RoleCard {
                    role: "Consumers",
                    actions: &["Verify authenticity", "View complete history", "Scan QR codes"],
                },
                RoleCard {
                    role: "Regulators/Auditors",
                    actions: &["Monitor compliance", "Access audit trails", "Verify certifications"],
                },
            ]),
        ),
        section(
            "Smart Contracts Architecture",
            SectionBody::Numbered(&[
                card(
                    "Product Registration Contract",
                    "Handles initial product registration by farmers with origin details",
                ),
                card("Ownership Transfer Contract", "Manages secure transfer of ownership across supply chain"),
                card("Product Verification Contract", "Enables consumers to verify product authenticity and history"),
                card("History Retrieval Logic", "Read-only functions for transparent product lifecycle access"),
            ]),
        ),
        section(
            "Blockchain Implementation",
            SectionBody::Titled(&[
                TitledBlock {
                    title: "Why Blockchain?",
                    paragraphs: &[],
                    bullets: &[
                        "Immutability: Prevents alteration of supply chain records",
                        "Transparency: All stakeholders have access to verified data",
                        "Trust Minimization: No need for centralized intermediary",
                        "Proof of Provenance: Cryptographic verification of product origin",
                    ],
                },
                TitledBlock {
                    title: "Technical Details",
                    paragraphs: &[
                        "Deployed on Ethereum-compatible blockchain, typically using local testnets or \
                         Polygon-style networks for cost efficiency and faster transactions. The platform balances on-chain \
                         immutability with off-chain data storage, ensuring both security and scalability.",
                    ],
                    bullets: &[],
                },
            ]),
        ),
        highlighted(
            "Technical Challenges Overcome",
            SectionBody::Bullets(&[
                "Balancing on-chain immutability with off-chain data storage requirements",
                "Designing smart contracts that are both secure and cost-efficient",
                "Integrating blockchain transactions smoothly with the web UI",
                "Managing gas optimization for frequent supply chain updates",
                "Creating intuitive UX for users unfamiliar with blockchain technology",
            ]),
        ),
        section(
            "Technology Stack",
            SectionBody::Tech(&[
                "React",
                "Solidity",
                "Web3.js",
                "Ethereum",
                "Smart Contracts",
                "MetaMask",
                "Polygon",
                "IPFS",
                "Node.js",
                "Express",
            ]),
        ),
        highlighted(
            "Impact & Future Scope",
            SectionBody::Paragraphs(&[
                "This platform demonstrates how blockchain technology can solve real-world trust issues \
                 in agriculture and supply chain management. By providing tamper-proof verification and transparent \
                 history, it empowers consumers to make informed decisions while protecting farmers and distributors \
                 from fraud.",
                "Future enhancements include integration with IoT sensors for automated quality tracking, \
                 multi-chain support for broader adoption, and AI-powered analytics for supply chain optimization.",
            ]),
        ),
    ],
    outro: None,
};

pub static TAX_CHAIN: ProjectDetail = ProjectDetail {
    slug: "tax-chain",
    badge: "Blockchain Governance",
    title: "Tax Chain",
    tagline: "Blockchain-Enabled Tax Management & Verification System",
    accent: "#8b5cf6",
    github: Some("https://github.com/MageshCM/Tax-chain-"),
    live: Some("https://tax-chain-opal.vercel.app/"),
    coming_soon: false,
    sections: &[
        section(
            "Overview",
            SectionBody::Paragraphs(&[
                "Tax Chain is a blockchain-enabled tax management system that revolutionizes how \
                 tax records are stored, verified, and audited. By leveraging blockchain's immutability and \
                 transparency, it creates a trustless environment where taxpayers can prove compliance without \
                 exposing sensitive financial data.",
                "The platform focuses on traceability and verification rather than replacing \
                 government tax portals. It serves as a complementary layer that provides cryptographic proof \
                 of tax activities, enabling seamless audits and reducing disputes between taxpayers and authorities.",
            ]),
        ),
        section(
            "Key Features",
            SectionBody::Features(&[
                card("Tax Record Management", "Immutable storage of tax filing records and compliance status"),
                card("Secure Verification", "Hash-based document verification without exposing sensitive data"),
                card("Compliance Tracking", "Automated compliance status logging and verification"),
                card("Transparent Audit Trail", "Clear, immutable audit trail for all tax transactions"),
            ]),
        ),
        section(
            "Tax Processes Handled",
            SectionBody::Bullets(&[
                "Tax filing reference records",
                "Payment tracking and verification",
                "Document verification using cryptographic hashes",
                "Compliance status logging across periods",
                "Audit trail generation and access control",
            ]),
        ),
        section(
            "Why Blockchain for Tax Management?",
            SectionBody::Features(&[
                card(
                    "\u{1F512} Immutability",
                    "Prevents alteration or deletion of tax records, ensuring a permanent audit trail \
                     that cannot be tampered with by any party.",
                ),
                card(
                    "\u{1F441}\u{FE0F} Transparency",
                    "Creates a clear audit trail visible to authorized parties while maintaining \
                     privacy through cryptographic hashing.",
                ),
                card(
                    "\u{1F91D} Trust Minimization",
                    "Removes the need for intermediaries between taxpayers and authorities, \
                     reducing disputes and verification time.",
                ),
                card(
                    "\u{2705} Proof of Compliance",
                    "Enables instant verification of compliance status without exposing \
                     sensitive financial information.",
                ),
            ]),
        ),
        section(
            "User Types & Roles",
            SectionBody::Numbered(&[
                card("Businesses", "Primary users managing corporate tax records and compliance"),
                card("Individuals", "Personal tax filing and payment tracking"),
                card("Tax Authorities", "Verification and audit capabilities without data exposure"),
            ]),
        ),
        section(
            "Smart Contracts Architecture",
            SectionBody::Numbered(&[
                card(
                    "Tax Record Registration Contract",
                    "Stores hash references of tax records on-chain for verification",
                ),
                card(
                    "Payment Proof Logging Contract",
                    "Records payment confirmations with timestamp and transaction hash",
                ),
                card(
                    "Compliance Status Verification Contract",
                    "Manages and verifies compliance status across different tax periods",
                ),
            ]),
        ),
        section(
            "Technical Implementation",
            SectionBody::Titled(&[
                TitledBlock {
                    title: "Blockchain Architecture",
                    paragraphs: &[
                        "Tax Chain uses Ethereum-compatible smart contracts to store cryptographic \
                         hashes of tax documents rather than the documents themselves. This approach ensures:",
                    ],
                    bullets: &[
                        "Privacy: Actual tax data remains off-chain and encrypted",
                        "Verification: Documents can be verified by comparing hashes",
                        "Efficiency: Minimal on-chain storage reduces gas costs",
                        "Compliance: Meets data protection regulations",
                    ],
                },
                TitledBlock {
                    title: "Special Features",
                    paragraphs: &[],
                    bullets: &[
                        "Automated Record Storage: Hash-based document verification system",
                        "Secure Uploads: Off-chain storage with on-chain hash reference",
                        "Compliance Dashboard: Real-time compliance status visualization",
                        "Audit Trail Access: Controlled access for authorized auditors",
                    ],
                },
            ]),
        ),
        highlighted(
            "Technical Challenges Overcome",
            SectionBody::Bullets(&[
                "Designing blockchain logic aligned with real-world tax workflows and regulations",
                "Managing user identity mapping without exposing private financial data",
                "Integrating blockchain records seamlessly with modern web frontend",
                "Balancing transparency requirements with privacy protection",
                "Creating intuitive UX for users with varying blockchain knowledge",
            ]),
        ),
        section(
            "Technology Stack",
            SectionBody::Tech(&[
                "React",
                "Solidity",
                "Web3.js",
                "Ethereum",
                "Smart Contracts",
                "MetaMask",
                "IPFS",
                "Node.js",
                "Express",
                "Cryptography",
            ]),
        ),
        highlighted(
            "Impact & Vision",
            SectionBody::Paragraphs(&[
                "Tax Chain demonstrates how blockchain can bridge the trust gap between \
                 taxpayers and authorities. By providing immutable proof of compliance while respecting \
                 privacy, it reduces audit times, prevents disputes, and creates a more efficient tax ecosystem.",
                "The platform's architecture serves as a blueprint for other governance applications where \
                 transparency and privacy must coexist. Future developments include integration with \
                 automated tax calculation systems, multi-jurisdiction support, and AI-powered compliance checking.",
            ]),
        ),
    ],
    outro: None,
};

pub static QUANTS: ProjectDetail = ProjectDetail {
    slug: "quants",
    badge: "Coming Soon",
    title: "Quantitative Finance Project",
    tagline: "Exploring the intersection of mathematics, statistics, and financial markets",
    accent: "#f97316",
    github: None,
    live: None,
    coming_soon: true,
    sections: &[
        section(
            "Project Vision",
            SectionBody::Paragraphs(&[
                "This project is currently under development as I dive deep into the fascinating world of quantitative finance. \
                 The goal is to build a comprehensive platform that combines mathematical modeling, machine learning, and \
                 algorithmic trading strategies to analyze and predict market behaviors.",
                "As someone transitioning from software development and blockchain to the quants domain, I'm taking a \
                 methodical approach to learning the foundations\u{2014}from probability theory and statistical analysis to \
                 advanced derivatives pricing and risk management techniques.",
            ]),
        ),
        section(
            "Current Learning Focus",
            SectionBody::Features(&[
                card(
                    "Quantitative Analysis",
                    "Statistical methods, probability theory, and mathematical modeling for financial markets.",
                ),
                card(
                    "Machine Learning",
                    "Applying ML algorithms for pattern recognition, prediction models, and automated trading strategies.",
                ),
                card(
                    "Financial Engineering",
                    "Derivatives pricing, risk management, and portfolio optimization techniques.",
                ),
                card(
                    "Algorithmic Trading",
                    "Developing and backtesting trading algorithms, market microstructure, and execution strategies.",
                ),
            ]),
        ),
        section(
            "Planned Features",
            SectionBody::Features(&[
                card(
                    "Real-time Market Data Analysis",
                    "Integration with financial APIs to fetch and analyze live market data, historical trends, and volatility patterns.",
                ),
                card(
                    "Backtesting Framework",
                    "Build a robust backtesting engine to test trading strategies against historical data with performance metrics.",
                ),
                card(
                    "Portfolio Optimization",
                    "Implement modern portfolio theory, mean-variance optimization, and risk-adjusted return calculations.",
                ),
                card(
                    "ML-Powered Predictions",
                    "Apply machine learning models (LSTM, Random Forest, XGBoost) for price prediction and sentiment analysis.",
                ),
                card(
                    "Risk Management System",
                    "Calculate VaR (Value at Risk), expected shortfall, and implement position sizing strategies.",
                ),
            ]),
        ),
        section(
            "Planned Technology Stack",
            SectionBody::Tech(&[
                "Python",
                "Pandas",
                "NumPy",
                "Scikit-learn",
                "TensorFlow",
                "PyTorch",
                "QuantLib",
                "Zipline",
                "Alpha Vantage API",
                "React",
                "D3.js",
            ]),
        ),
        highlighted(
            "Development Timeline",
            SectionBody::Titled(&[
                TitledBlock {
                    title: "Current Phase: Foundation Learning (Q1 2025)",
                    paragraphs: &[
                        "Building strong mathematical and statistical foundations, understanding market mechanics, \
                         and exploring existing quantitative frameworks.",
                    ],
                    bullets: &[],
                },
                TitledBlock {
                    title: "Next Phase: Prototype Development (Q2 2025)",
                    paragraphs: &[
                        "Start building core modules, implement basic backtesting, and create visualization dashboards.",
                    ],
                    bullets: &[],
                },
                TitledBlock {
                    title: "Future Phase: Advanced Features (Q3-Q4 2025)",
                    paragraphs: &[
                        "Integrate ML models, refine strategies, add real-time capabilities, and comprehensive testing.",
                    ],
                    bullets: &[],
                },
            ]),
        ),
    ],
    outro: Some(Card {
        title: "Stay Tuned!",
        text: "This project is being built with patience, curiosity, and lots of coffee. \u{2615} \
               Follow my progress on GitHub or check back here for updates!",
    }),
};

pub static ALL: &[&ProjectDetail] = &[&INNOFEED, &AGRICULTURE_TRACEABILITY, &TAX_CHAIN, &QUANTS];

pub fn by_slug(slug: &str) -> Option<&'static ProjectDetail> {
    ALL.iter().copied().find(|d| d.slug == slug)
}
