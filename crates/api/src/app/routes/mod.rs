pub mod projects;
pub mod system;
