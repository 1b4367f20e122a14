pub mod version_match;

pub use version_match::VersionMatch;
