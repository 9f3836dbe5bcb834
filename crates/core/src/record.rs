//! Persistent patient record shapes.
//!
//! These are the values handed to and from the persistence layer. A [`Patient`] owns its address
//! and insurance collections; each sub-record holds a non-owning back-reference to its owner in the
//! form of the owner's [`RecordHandle`].
//!
//! Notes:
//! - The persistent `id` is assigned by the persistence layer and is unset on new records, so it
//!   cannot serve as the back-reference target. The handle can: it is minted whenever a `Patient`
//!   value is constructed or deserialised.
//! - Back-references are not serialised. After loading a record from a document, call
//!   [`Patient::link_children`] to re-establish them.

use chrono::{DateTime, NaiveDate, Utc};
use hms_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// In-memory identity of a [`Patient`] value.
///
/// Each `Patient::new()` (or `Default`, or deserialisation) mints a fresh handle, so two empty
/// records never compare equal. Cloning a `Patient` keeps its handle: the clone is the same
/// record, and children linked to the original are also linked to the clone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordHandle(Uuid);

impl RecordHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Administrative gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unknown,
}

/// Purpose of an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressUse {
    Home,
    Work,
    Temporary,
    Billing,
    Mailing,
}

/// A patient record as stored by the persistence layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Patient {
    #[serde(skip)]
    pub(crate) handle: RecordHandle,

    pub id: Option<Uuid>,
    pub medical_record_number: Option<NonEmptyText>,

    pub fhir_id: Option<String>,
    pub fhir_version_id: Option<String>,
    pub fhir_last_updated: Option<DateTime<Utc>>,

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

    pub allergies: Vec<String>,
    pub medical_history: Vec<String>,
    pub current_medications: Vec<String>,

    pub active: bool,

    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub last_modified_by: Option<String>,

    pub addresses: Option<Vec<PatientAddress>>,
    pub insurances: Option<Vec<PatientInsurance>>,
}

impl Patient {
    /// Creates an empty record with a fresh handle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> RecordHandle {
        self.handle
    }

    /// Points every address and insurance back at this record.
    ///
    /// Absent collections are left untouched.
    pub fn link_children(&mut self) {
        let handle = self.handle;

        if let Some(addresses) = self.addresses.as_mut() {
            for address in addresses.iter_mut() {
                address.patient = Some(handle);
            }
        }

        if let Some(insurances) = self.insurances.as_mut() {
            for insurance in insurances.iter_mut() {
                insurance.patient = Some(handle);
            }
        }
    }
}

/// An address owned by a [`Patient`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientAddress {
    pub id: Option<Uuid>,
    #[serde(skip)]
    pub patient: Option<RecordHandle>,

    pub address_use: Option<AddressUse>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub primary: bool,
}

impl PatientAddress {
    /// True when this address points back at `patient`.
    #[cfg(test)]
    pub fn belongs_to(&self, patient: &Patient) -> bool {
        self.patient == Some(patient.handle())
    }
}

/// An insurance policy owned by a [`Patient`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientInsurance {
    pub id: Option<Uuid>,
    #[serde(skip)]
    pub patient: Option<RecordHandle>,

    pub provider_name: Option<String>,
    pub policy_number: Option<String>,
    pub group_number: Option<String>,
    pub plan_name: Option<String>,
    pub subscriber_name: Option<String>,
    pub subscriber_relationship: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub primary: bool,
}

impl PatientInsurance {
    /// True when this policy points back at `patient`.
    #[cfg(test)]
    pub fn belongs_to(&self, patient: &Patient) -> bool {
        self.patient == Some(patient.handle())
    }
}
