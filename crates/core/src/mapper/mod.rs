//! Conversion between patient records and their transfer representations.
//!
//! Every conversion is total: missing input fields produce absent output fields, never errors.
//!
//! Field ownership:
//! - identity (`id`, `medical_record_number`), FHIR identifiers and audit fields are owned by the
//!   record service. Creation leaves them unset and updates never write them.
//! - `full_name` and `age` are derived on the way out and never stored.
//! - address and insurance collections are owned by the patient record. Whenever a conversion
//!   builds or replaces one of them, the children are linked back to the record.

mod address;
mod derived;
mod insurance;

pub use derived::{build_full_name, calculate_age};

use crate::config::MapperConfig;
use crate::record::{Patient, PatientAddress, PatientInsurance};
use crate::transfer::{
    AddressData, InsuranceData, PatientCreateRequest, PatientResponse, PatientUpdateRequest,
};
use chrono::NaiveDate;
use std::sync::Arc;

/// Patient record mapper.
#[derive(Clone, Debug)]
pub struct RecordMapper {
    cfg: Arc<MapperConfig>,
}

impl RecordMapper {
    /// Creates a mapper that computes ages against `cfg`'s reference date.
    pub fn new(cfg: Arc<MapperConfig>) -> Self {
        Self { cfg }
    }

    /// Display name for `patient`, or `None` without one.
    pub fn full_name(&self, patient: Option<&Patient>) -> Option<String> {
        build_full_name(patient)
    }

    /// Completed years since `date_of_birth`, as of the configured "today".
    pub fn age(&self, date_of_birth: Option<NaiveDate>) -> Option<u32> {
        calculate_age(date_of_birth, self.cfg.today())
    }

    /// Detail representation of a record, including nested collections and clinical lists.
    pub fn to_response(&self, patient: &Patient) -> PatientResponse {
        PatientResponse {
            allergies: Some(patient.allergies.clone()),
            medical_history: Some(patient.medical_history.clone()),
            current_medications: Some(patient.current_medications.clone()),
            addresses: patient.addresses.as_deref().map(address::to_data_list),
            insurances: patient.insurances.as_deref().map(insurance::to_data_list),
            ..self.scalar_fields(patient)
        }
    }

    /// Detail representation of an optional record.
    pub fn to_response_opt(&self, patient: Option<&Patient>) -> Option<PatientResponse> {
        patient.map(|p| self.to_response(p))
    }

    pub fn to_response_list(&self, patients: &[Patient]) -> Vec<PatientResponse> {
        patients.iter().map(|p| self.to_response(p)).collect()
    }

    /// Summary representation for list views.
    ///
    /// Carries the derived fields but leaves nested collections and clinical lists unset.
    pub fn to_summary(&self, patient: &Patient) -> PatientResponse {
        self.scalar_fields(patient)
    }

    pub fn to_summary_list(&self, patients: &[Patient]) -> Vec<PatientResponse> {
        patients.iter().map(|p| self.to_summary(p)).collect()
    }

    /// Builds a new record from a creation request.
    ///
    /// Identity, FHIR and audit fields are left unset for the record service to assign, whatever
    /// the request carried. The record always starts active.
    pub fn to_record(&self, request: PatientCreateRequest) -> Patient {
        if request.medical_record_number.is_some() || request.active == Some(false) {
            tracing::debug!("ignoring service-owned fields on patient create request");
        }

        let mut patient = Patient {
            prefix: request.prefix,
            given_name: request.given_name,
            middle_name: request.middle_name,
            family_name: request.family_name,
            suffix: request.suffix,
            date_of_birth: request.date_of_birth,
            gender: request.gender,
            phone: request.phone,
            email: request.email,
            preferred_language: request.preferred_language,
            emergency_contact_name: request.emergency_contact_name,
            emergency_contact_phone: request.emergency_contact_phone,
            allergies: request.allergies.unwrap_or_default(),
            medical_history: request.medical_history.unwrap_or_default(),
            current_medications: request.current_medications.unwrap_or_default(),
            active: true,
            addresses: request.addresses.map(address::to_record_list),
            insurances: request.insurances.map(insurance::to_record_list),
            ..Patient::new()
        };

        patient.link_children();
        patient
    }

    /// Copies the fields present on `request` onto `patient`.
    ///
    /// Absent fields leave the record untouched. Identity, FHIR and audit fields are never
    /// written. A supplied address or insurance list replaces the existing collection.
    pub fn apply_update(&self, request: PatientUpdateRequest, patient: &mut Patient) {
        if let Some(prefix) = request.prefix {
            patient.prefix = Some(prefix);
        }
        if let Some(given_name) = request.given_name {
            patient.given_name = Some(given_name);
        }
        if let Some(middle_name) = request.middle_name {
            patient.middle_name = Some(middle_name);
        }
        if let Some(family_name) = request.family_name {
            patient.family_name = Some(family_name);
        }
        if let Some(suffix) = request.suffix {
            patient.suffix = Some(suffix);
        }
        if let Some(date_of_birth) = request.date_of_birth {
            patient.date_of_birth = Some(date_of_birth);
        }
        if let Some(gender) = request.gender {
            patient.gender = Some(gender);
        }
        if let Some(phone) = request.phone {
            patient.phone = Some(phone);
        }
        if let Some(email) = request.email {
            patient.email = Some(email);
        }
        if let Some(preferred_language) = request.preferred_language {
            patient.preferred_language = Some(preferred_language);
        }
        if let Some(name) = request.emergency_contact_name {
            patient.emergency_contact_name = Some(name);
        }
        if let Some(phone) = request.emergency_contact_phone {
            patient.emergency_contact_phone = Some(phone);
        }
        if let Some(allergies) = request.allergies {
            patient.allergies = allergies;
        }
        if let Some(medical_history) = request.medical_history {
            patient.medical_history = medical_history;
        }
        if let Some(current_medications) = request.current_medications {
            patient.current_medications = current_medications;
        }
        if let Some(active) = request.active {
            patient.active = active;
        }
        if let Some(addresses) = request.addresses {
            patient.addresses = Some(address::to_record_list(addresses));
        }
        if let Some(insurances) = request.insurances {
            patient.insurances = Some(insurance::to_record_list(insurances));
        }

        patient.link_children();
        tracing::debug!(patient_id = ?patient.id, "applied patient update");
    }

    /// Re-establishes back-references after a record was assembled elsewhere.
    pub fn link_children(&self, patient: &mut Patient) {
        patient.link_children();
    }

    pub fn to_address_data(&self, address: &PatientAddress) -> AddressData {
        AddressData::from(address)
    }

    pub fn to_address_record(&self, data: AddressData) -> PatientAddress {
        PatientAddress::from(data)
    }

    pub fn to_address_data_list(&self, addresses: &[PatientAddress]) -> Vec<AddressData> {
        address::to_data_list(addresses)
    }

    pub fn to_address_record_list(&self, data: Vec<AddressData>) -> Vec<PatientAddress> {
        address::to_record_list(data)
    }

    pub fn to_insurance_data(&self, insurance: &PatientInsurance) -> InsuranceData {
        InsuranceData::from(insurance)
    }

    pub fn to_insurance_record(&self, data: InsuranceData) -> PatientInsurance {
        PatientInsurance::from(data)
    }

    pub fn to_insurance_data_list(&self, insurances: &[PatientInsurance]) -> Vec<InsuranceData> {
        insurance::to_data_list(insurances)
    }

    pub fn to_insurance_record_list(&self, data: Vec<InsuranceData>) -> Vec<PatientInsurance> {
        insurance::to_record_list(data)
    }

    // Scalar and derived fields; collections and clinical lists stay unset.
    fn scalar_fields(&self, patient: &Patient) -> PatientResponse {
        PatientResponse {
            id: patient.id,
            medical_record_number: patient.medical_record_number.clone(),
            fhir_id: patient.fhir_id.clone(),
            fhir_version_id: patient.fhir_version_id.clone(),
            fhir_last_updated: patient.fhir_last_updated,
            prefix: patient.prefix.clone(),
            given_name: patient.given_name.clone(),
            middle_name: patient.middle_name.clone(),
            family_name: patient.family_name.clone(),
            suffix: patient.suffix.clone(),
            full_name: self.full_name(Some(patient)),
            date_of_birth: patient.date_of_birth,
            age: self.age(patient.date_of_birth),
            gender: patient.gender,
            phone: patient.phone.clone(),
            email: patient.email.clone(),
            preferred_language: patient.preferred_language.clone(),
            emergency_contact_name: patient.emergency_contact_name.clone(),
            emergency_contact_phone: patient.emergency_contact_phone.clone(),
            active: patient.active,
            created_date: patient.created_date,
            last_modified_date: patient.last_modified_date,
            created_by: patient.created_by.clone(),
            last_modified_by: patient.last_modified_by.clone(),
            ..PatientResponse::default()
        }
    }
}
