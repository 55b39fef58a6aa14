// DOM ids - these are the single source of truth for element lookups
pub const ID_APP: &str = "app";
pub const ID_SIDEBAR: &str = "sidebar";
pub const ID_SIDEBAR_TOGGLE: &str = "sidebar-toggle";
pub const ID_MAIN_CONTENT: &str = "main-content";
pub const ID_BACKGROUND_CANVAS: &str = "background-canvas";
pub const ID_TRANSITION_STYLES: &str = "page-transition-styles";

// Contact form ids
pub const ID_CONTACT_NAME: &str = "name";
pub const ID_CONTACT_EMAIL: &str = "email";
pub const ID_CONTACT_SUBJECT: &str = "subject";
pub const ID_CONTACT_MESSAGE: &str = "message";
pub const ID_CONTACT_STATUS: &str = "contact-status";
pub const ID_CONTACT_SUBMIT: &str = "contact-submit";

// Attributes
pub const ATTR_ROUTE: &str = "data-route";
pub const ATTR_KEY: &str = "data-key";

// Paths
pub const ROUTE_PROJECTS: &str = "/projects";

// CSS classes
pub const CSS_NAV_LINK: &str = "nav-link";
pub const CSS_NAV_LINK_ACTIVE: &str = "nav-link active";
pub const CSS_SIDEBAR_OPEN: &str = "open";
pub const CSS_PAGE_HEADING: &str = "page-title";
pub const CSS_PAGE_ENTER: &str = "page-enter";
pub const CSS_STAGGER_ITEM: &str = "stagger-item";

// Site identity
pub const SITE_OWNER: &str = "Magesh C M";
pub const SITE_OWNER_SHORT: &str = "Magesh";
pub const SITE_TITLE_SUFFIX: &str = "Magesh C M | Portfolio";

// Animation defaults
pub const DEFAULT_FOV_DEGREES: f64 = 75.0;
pub const PRIMARY_BLUE: &str = "#3b82f6";
pub const PURPLE: &str = "#8b5cf6";
pub const PINK: &str = "#ec4899";
pub const GREEN: &str = "#10b981";
pub const AMBER: &str = "#f59e0b";
pub const CYAN: &str = "#06b6d4";
