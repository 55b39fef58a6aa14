pub const GREETING: &str = "Hi, I'm";
pub const NAME: &str = "Magesh";
pub const TAGLINE: &str = "Student | Developer | Learner";
pub const DESCRIPTION: &str = "Turning caffeine into code and bugs into features. Currently studying IT at \
                               Saveetha Engineering College, building blockchain solutions, and occasionally \
                               questioning the meaning of semicolons.";

/// Hero call-to-action buttons: label, target path, primary.
pub static ACTIONS: &[(&str, &str, bool)] = &[
    ("View Projects", "/projects", true),
    // Capitalised in the published site; routing is case-insensitive.
    ("Get in Touch", "/Contact", false),
];

/// Quick stats under the hero: value, caption.
pub static STATS: &[(&str, &str)] = &[("4+", "Projects"), ("30+", "Certifications"), ("\u{221E}", "Console.logs")];
