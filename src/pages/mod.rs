//! One module per page. Each `render` appends the page into the main
//! content element and returns; the caller clears the container first.

pub mod about;
pub mod certifications;
pub mod contact;
pub mod home;
pub mod project_detail;
pub mod projects;
pub mod skills;
