//! Invoice document generation and pagination engine.
//!
//! A pure, synchronous transform from a fetched billing record to an
//! ordered list of printable page descriptors: one tax-invoice (or
//! bill-of-supply) primary page plus as many annexure pages as the
//! record-charge count requires. Rendering, fetching, persistence, and
//! print/export all live with external collaborators; this crate only
//! computes the layout.

pub mod config;
pub mod dtos;
pub mod error;
pub mod models;
pub mod services;

pub use config::EngineConfig;
pub use error::EngineError;
pub use models::{InvoiceDocument, InvoiceRecord, PageDescriptor};
pub use services::assembler::assemble;
