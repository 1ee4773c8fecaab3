pub mod contact;
pub mod elapsed;
pub mod projects;
pub mod skills;
