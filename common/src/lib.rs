//! DOM-free core of the photo-to-shopping-search page: data model, error
//! kinds, the HTTP port, and the upload-and-render workflow.

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod workflow;
