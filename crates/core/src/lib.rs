//! # HMS Core
//!
//! Patient record mapping for the HMS records service.
//!
//! This crate converts between the persistent shape of a patient record and the transfer
//! representations used at the service boundary:
//! - [`record`]: the persistent [`Patient`] with its owned addresses and insurances
//! - [`transfer`]: detail/summary responses and create/update requests
//! - [`mapper`]: the [`RecordMapper`] and the derived-field rules (full name, age)
//! - [`codec`]: JSON/YAML documents for any of the above
//!
//! **No service concerns**: persistence, identifier generation, audit stamping, validation and
//! HTTP handling belong to the callers that supply and consume these values.

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod mapper;
pub mod record;
pub mod transfer;

pub use config::MapperConfig;
pub use error::{MapperError, MapperResult};
pub use mapper::RecordMapper;
pub use record::{Patient, PatientAddress, PatientInsurance, RecordHandle};

pub use hms_types::{NonEmptyText, WorkflowCategory};
