//! Data models for command results

pub mod results;

pub use results::{CertificateCheck, CertificateReport, FileIdentification};
