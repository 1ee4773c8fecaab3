pub mod catalog;
pub mod config;
pub mod level;
pub mod prefs;
pub mod project;
pub mod repo;
pub mod skill;

pub use catalog::*;
pub use config::*;
pub use level::*;
pub use prefs::*;
pub use project::*;
pub use repo::*;
pub use skill::*;
