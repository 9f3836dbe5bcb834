//! Workflow categories used to tag clinical work items.
//!
//! The set is closed and ordered. Beyond identity and equality the type only knows its own
//! wire name (`PATIENT_ROUNDS`, `LAB_REVIEW`, ...), which is what appears in serialised
//! documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown workflow category name.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowCategoryError {
    #[error("unknown workflow category: {0}")]
    Unknown(String),
}

/// Category of a clinical work item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowCategory {
    PatientRounds,
    ClinicalDocumentation,
    OrderEntry,
    MedicationReview,
    LabReview,
    ImagingReview,
    DischargePlanning,
    EmergencyResponse,
    Consultation,
}

impl WorkflowCategory {
    /// Every category, in declaration order.
    pub const ALL: [WorkflowCategory; 9] = [
        WorkflowCategory::PatientRounds,
        WorkflowCategory::ClinicalDocumentation,
        WorkflowCategory::OrderEntry,
        WorkflowCategory::MedicationReview,
        WorkflowCategory::LabReview,
        WorkflowCategory::ImagingReview,
        WorkflowCategory::DischargePlanning,
        WorkflowCategory::EmergencyResponse,
        WorkflowCategory::Consultation,
    ];

    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowCategory::PatientRounds => "PATIENT_ROUNDS",
            WorkflowCategory::ClinicalDocumentation => "CLINICAL_DOCUMENTATION",
            WorkflowCategory::OrderEntry => "ORDER_ENTRY",
            WorkflowCategory::MedicationReview => "MEDICATION_REVIEW",
            WorkflowCategory::LabReview => "LAB_REVIEW",
            WorkflowCategory::ImagingReview => "IMAGING_REVIEW",
            WorkflowCategory::DischargePlanning => "DISCHARGE_PLANNING",
            WorkflowCategory::EmergencyResponse => "EMERGENCY_RESPONSE",
            WorkflowCategory::Consultation => "CONSULTATION",
        }
    }
}

impl fmt::Display for WorkflowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowCategory {
    type Err = WorkflowCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkflowCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| WorkflowCategoryError::Unknown(s.to_string()))
    }
}
