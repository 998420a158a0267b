//! Core data types shared by the scanner and the manifest generator.

mod arch;
mod artifact;
mod manifest;
mod platform;

pub use arch::Arch;
pub use artifact::Artifact;
pub use manifest::{Manifest, PlatformEntry};
pub use platform::{BundleType, Os};
