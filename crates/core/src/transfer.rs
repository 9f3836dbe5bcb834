//! Transfer representations used at the service boundary.
//!
//! These values are built per request/response and then discarded. They serialise in camelCase
//! and omit absent fields, so a summary response simply has no `addresses`, `insurances` or
//! clinical-list keys.

use crate::record::{AddressUse, Gender};
use chrono::{DateTime, NaiveDate, Utc};
use hms_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Detail (or summary) view of a patient record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_record_number: Option<NonEmptyText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhir_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhir_version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhir_last_updated: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_medications: Option<Vec<String>>,

    pub active: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<AddressData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurances: Option<Vec<InsuranceData>>,
}

/// Request to register a new patient.
///
/// `medical_record_number` and `active` are accepted so that documents exported from other
/// systems can be replayed, but the mapper ignores both: the record service assigns the number
/// and new records always start active.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientCreateRequest {
    pub medical_record_number: Option<String>,
    pub active: Option<bool>,

    pub prefix: Option<String>,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    pub family_name: Option<String>,
    pub suffix: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,

    pub phone: Option<String>,
    pub email: Option<String>,
    pub preferred_language: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,

    pub allergies: Option<Vec<String>>,
    pub medical_history: Option<Vec<String>>,
    pub current_medications: Option<Vec<String>>,

    pub addresses: Option<Vec<AddressData>>,
    pub insurances: Option<Vec<InsuranceData>>,
}

/// Partial update of an existing patient. Absent fields leave the record untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientUpdateRequest {
    pub prefix: Option<String>,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    pub family_name: Option<String>,
    pub suffix: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,

    pub phone: Option<String>,
    pub email: Option<String>,
    pub preferred_language: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,

    pub allergies: Option<Vec<String>>,
    pub medical_history: Option<Vec<String>>,
    pub current_medications: Option<Vec<String>>,

    pub active: Option<bool>,

    pub addresses: Option<Vec<AddressData>>,
    pub insurances: Option<Vec<InsuranceData>>,
}

/// Boundary form of a patient address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_use: Option<AddressUse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub primary: bool,
}

/// Boundary form of an insurance policy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsuranceData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    pub primary: bool,
}
