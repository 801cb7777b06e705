/// View layer
///
/// Pure functions from state to iced elements. None of them hold state;
/// everything they show comes from the catalog, the session and the config.

pub mod contact;
pub mod gallery;
pub mod hero;
pub mod lightbox;
pub mod navbar;
pub mod photo;
pub mod sections;
pub mod splash;
