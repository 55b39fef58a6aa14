use crate::models::ContactChannel;

pub const HEADING: &str = "Get In Touch";
pub const SUBTITLE: &str = "Have a project in mind or just want to chat? Feel free to reach out!";
pub const FORM_HEADING: &str = "Send a Message";
pub const INFO_HEADING: &str = "Contact Information";

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_BUSY_LABEL: &str = "Sending...";

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try emailing directly.";

pub static CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "mageshsangeethavg@gmail.com",
        link: Some("mailto:mageshsangeethavg@gmail.com"),
        color: "#3b82f6",
    },
    ContactChannel {
        label: "Phone",
        value: "+91 9360582569",
        link: Some("tel:+919360582569"),
        color: "#10b981",
    },
    ContactChannel { label: "Location", value: "Chennai, Tamil Nadu, India", link: None, color: "#ec4899" },
    ContactChannel {
        label: "GitHub",
        value: "@MageshCM",
        link: Some("https://github.com/MageshCM"),
        color: "#8b5cf6",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "Magesh C M",
        link: Some("https://www.linkedin.com/in/magesh-c-m-9635ab379"),
        color: "#0077b5",
    },
];

pub const NOTE_TITLE: &str = "Quick Note";
pub static NOTE: &[&str] = &[
    "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions. \
     Whether it's blockchain development, AI/ML projects, or just a chat about tech\u{2014}don't hesitate to reach out!",
    "Response time: Usually within 24-48 hours \u{26A1}",
];
