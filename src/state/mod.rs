/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Catalog sources and loading (catalog.rs)
/// - Category filtering (filter.rs)
/// - Lightbox selection (lightbox.rs)
/// - Navigation flags (nav.rs)
/// - Loading splash timer (splash.rs)
/// - The root session that ties them together (session.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod lightbox;
pub mod nav;
pub mod session;
pub mod splash;
