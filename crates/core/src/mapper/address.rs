//! Address conversions.
//!
//! Transfer-to-record never carries the id or the back-reference across: both are established
//! by the owning record (see [`Patient::link_children`](crate::record::Patient::link_children))
//! or by the persistence layer.

use crate::record::PatientAddress;
use crate::transfer::AddressData;

impl From<&PatientAddress> for AddressData {
    fn from(address: &PatientAddress) -> Self {
        Self {
            id: address.id,
            address_use: address.address_use,
            line1: address.line1.clone(),
            line2: address.line2.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country.clone(),
            primary: address.primary,
        }
    }
}

impl From<AddressData> for PatientAddress {
    fn from(data: AddressData) -> Self {
        Self {
            id: None,
            patient: None,
            address_use: data.address_use,
            line1: data.line1,
            line2: data.line2,
            city: data.city,
            state: data.state,
            postal_code: data.postal_code,
            country: data.country,
            primary: data.primary,
        }
    }
}

pub(crate) fn to_data_list(addresses: &[PatientAddress]) -> Vec<AddressData> {
    addresses.iter().map(AddressData::from).collect()
}

pub(crate) fn to_record_list(data: Vec<AddressData>) -> Vec<PatientAddress> {
    data.into_iter().map(PatientAddress::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AddressUse, Patient, RecordHandle};
    use uuid::Uuid;

    fn sample_data() -> AddressData {
        AddressData {
            id: Some(Uuid::new_v4()),
            address_use: Some(AddressUse::Home),
            line1: Some("1 Infirmary Street".into()),
            line2: None,
            city: Some("Leeds".into()),
            state: Some("West Yorkshire".into()),
            postal_code: Some("LS1 2JP".into()),
            country: Some("GB".into()),
            primary: true,
        }
    }

    #[test]
    fn record_to_data_copies_id_and_fields() {
        let id = Uuid::new_v4();
        let address = PatientAddress {
            id: Some(id),
            patient: Some(RecordHandle::new()),
            city: Some("York".into()),
            primary: true,
            ..PatientAddress::default()
        };

        let data = AddressData::from(&address);
        assert_eq!(data.id, Some(id));
        assert_eq!(data.city.as_deref(), Some("York"));
        assert!(data.primary);
    }

    #[test]
    fn data_to_record_drops_id_and_back_reference() {
        let data = sample_data();
        let address = PatientAddress::from(data.clone());

        assert_eq!(address.id, None);
        assert_eq!(address.patient, None);
        assert_eq!(address.address_use, Some(AddressUse::Home));
        assert_eq!(address.line1, data.line1);
        assert_eq!(address.postal_code, data.postal_code);
        assert!(address.primary);
        assert!(!address.belongs_to(&Patient::new()));
    }

    #[test]
    fn list_conversions_preserve_order() {
        let first = AddressData {
            city: Some("Leeds".into()),
            ..AddressData::default()
        };
        let second = AddressData {
            city: Some("Bradford".into()),
            ..AddressData::default()
        };

        let records = to_record_list(vec![first, second]);
        let cities: Vec<_> = to_data_list(&records)
            .into_iter()
            .map(|d| d.city.unwrap_or_default())
            .collect();
        assert_eq!(cities, vec!["Leeds", "Bradford"]);
    }
}
