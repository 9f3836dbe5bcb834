//! Shared value types for the HMS patient record workspace.
//!
//! - [`NonEmptyText`]: trimmed text that is guaranteed to contain at least one character
//! - [`WorkflowCategory`]: the closed set of categories used to tag clinical work items

mod text;
mod workflow;

pub use text::{NonEmptyText, TextError};
pub use workflow::{WorkflowCategory, WorkflowCategoryError};
