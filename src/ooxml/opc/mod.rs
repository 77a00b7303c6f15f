//! Open Packaging Conventions (OPC) layer.
//!
//! A `.pptx` file is a ZIP archive of parts. Each part has a content type,
//! listed in `[Content_Types].xml`, and may carry a `.rels` part that links
//! it to other parts.

pub mod constants;
pub mod packuri;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use packuri::PackURI;
pub use pkgwriter::PackageWriter;
pub use rel::Relationships;
