pub mod footer;
pub mod home;
pub mod not_found;
pub mod sections;
