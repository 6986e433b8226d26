//! Interfaces to the hosted collaborators: the document store holding
//! products and categories, and the image CDN.
//!
//! The backends themselves live outside this repository; this crate defines
//! the traits they must satisfy plus the pure logic that belongs on this side
//! of the boundary: in-memory product filtering, image batch validation and
//! hosted-URL verification.

pub mod categories;
pub mod error;
pub mod images;
pub mod products;

pub use categories::CategoryStore;
pub use error::{HostError, StoreError};
pub use images::{
    check_host_status, validate_batch, verify_image_urls, BatchValidation, HostStatus,
    ImageCandidate, ImageConstraints, ImageHost, RejectedImage, UploadFailure, UploadReport,
    UploadedImage, UrlCheckReport, UrlFailure, ALLOWED_IMAGE_TYPES,
};
pub use products::{ProductFilter, ProductStore};
