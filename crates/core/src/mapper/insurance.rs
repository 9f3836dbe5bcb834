//! Insurance conversions.
//!
//! As with addresses, the id and back-reference are never taken from the transfer object.

use crate::record::PatientInsurance;
use crate::transfer::InsuranceData;

impl From<&PatientInsurance> for InsuranceData {
    fn from(insurance: &PatientInsurance) -> Self {
        Self {
            id: insurance.id,
            provider_name: insurance.provider_name.clone(),
            policy_number: insurance.policy_number.clone(),
            group_number: insurance.group_number.clone(),
            plan_name: insurance.plan_name.clone(),
            subscriber_name: insurance.subscriber_name.clone(),
            subscriber_relationship: insurance.subscriber_relationship.clone(),
            effective_date: insurance.effective_date,
            expiration_date: insurance.expiration_date,
            primary: insurance.primary,
        }
    }
}

impl From<InsuranceData> for PatientInsurance {
    fn from(data: InsuranceData) -> Self {
        Self {
            id: None,
            patient: None,
            provider_name: data.provider_name,
            policy_number: data.policy_number,
            group_number: data.group_number,
            plan_name: data.plan_name,
            subscriber_name: data.subscriber_name,
            subscriber_relationship: data.subscriber_relationship,
            effective_date: data.effective_date,
            expiration_date: data.expiration_date,
            primary: data.primary,
        }
    }
}

pub(crate) fn to_data_list(insurances: &[PatientInsurance]) -> Vec<InsuranceData> {
    insurances.iter().map(InsuranceData::from).collect()
}

pub(crate) fn to_record_list(data: Vec<InsuranceData>) -> Vec<PatientInsurance> {
    data.into_iter().map(PatientInsurance::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordHandle;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn record_to_data_copies_dates_and_id() {
        let id = Uuid::new_v4();
        let effective = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
        let insurance = PatientInsurance {
            id: Some(id),
            patient: Some(RecordHandle::new()),
            provider_name: Some("Northern Mutual".into()),
            policy_number: Some("NM-55821".into()),
            effective_date: Some(effective),
            ..PatientInsurance::default()
        };

        let data = InsuranceData::from(&insurance);
        assert_eq!(data.id, Some(id));
        assert_eq!(data.provider_name.as_deref(), Some("Northern Mutual"));
        assert_eq!(data.policy_number.as_deref(), Some("NM-55821"));
        assert_eq!(data.effective_date, Some(effective));
        assert_eq!(data.expiration_date, None);
    }

    #[test]
    fn data_to_record_drops_id_and_back_reference() {
        let data = InsuranceData {
            id: Some(Uuid::new_v4()),
            plan_name: Some("Gold".into()),
            primary: true,
            ..InsuranceData::default()
        };

        let insurance = PatientInsurance::from(data);
        assert_eq!(insurance.id, None);
        assert_eq!(insurance.patient, None);
        assert_eq!(insurance.plan_name.as_deref(), Some("Gold"));
        assert!(insurance.primary);
    }

    #[test]
    fn empty_lists_stay_empty() {
        assert!(to_record_list(Vec::new()).is_empty());
        assert!(to_data_list(&[]).is_empty());
    }
}
