//! UI Components

pub mod navbar;
pub mod plexus;

pub use navbar::Navbar;
pub use plexus::PlexusBackground;
