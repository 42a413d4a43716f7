/// Open Packaging Conventions (OPC) writer.
///
/// The structure and packaging format shared by every Office Open XML file:
///
/// - Package structure (parts, relationships)
/// - Content type management
/// - ZIP-based physical packaging with reproducible output
pub mod constants;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
