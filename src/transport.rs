use crate::errors::ValidationError;
use crate::models::{parse_date, Dataset};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssignmentForm {
    pub driver_name: String,
    pub truck_plate: String,
    pub transport_company: String,
    pub estimated_delivery: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub driver_name: String,
    pub truck_plate: String,
    pub transport_company: String,
    pub estimated_delivery: NaiveDate,
    pub note: String,
}

impl AssignmentForm {
    /// Driver and company must come from the loaded lists.
    pub fn validate(&self, dataset: &Dataset) -> Result<Assignment, ValidationError> {
        let driver_name = self.driver_name.trim();
        let truck_plate = self.truck_plate.trim();
        let transport_company = self.transport_company.trim();
        let estimated_delivery = self.estimated_delivery.trim();
        if driver_name.is_empty()
            || truck_plate.is_empty()
            || transport_company.is_empty()
            || estimated_delivery.is_empty()
        {
            return Err(ValidationError::missing_fields());
        }

        if !dataset.has_driver(driver_name) {
            return Err(ValidationError::new(format!("Unknown driver: {driver_name}")));
        }
        if !dataset.has_company(transport_company) {
            return Err(ValidationError::new(format!(
                "Unknown transport company: {transport_company}"
            )));
        }
        let estimated_delivery = parse_date(estimated_delivery)
            .ok_or_else(|| ValidationError::new("Estimated delivery must be a date (YYYY-MM-DD)"))?;

        Ok(Assignment {
            driver_name: driver_name.to_string(),
            truck_plate: truck_plate.to_string(),
            transport_company: transport_company.to_string(),
            estimated_delivery,
            note: self.note.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Driver, TransportCompany};

    fn dataset() -> Dataset {
        Dataset {
            drivers: vec![Driver {
                name: "Goran".into(),
                phone: None,
            }],
            transport_companies: vec![TransportCompany {
                name: "Vardar Trans".into(),
            }],
            ..Dataset::default()
        }
    }

    fn form() -> AssignmentForm {
        AssignmentForm {
            driver_name: "Goran".into(),
            truck_plate: " sk-1234-ab ".into(),
            transport_company: "Vardar Trans".into(),
            estimated_delivery: "2026-10-20".into(),
            note: String::new(),
        }
    }

    #[test]
    fn assignment_validates_against_lists() {
        let assignment = form().validate(&dataset()).unwrap();
        assert_eq!(assignment.truck_plate, "sk-1234-ab");
        assert_eq!(
            assignment.estimated_delivery,
            NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
        );
    }

    #[test]
    fn assignment_requires_every_field_but_note() {
        let mut missing = form();
        missing.truck_plate = " ".into();
        assert_eq!(
            missing.validate(&dataset()).unwrap_err(),
            ValidationError::missing_fields()
        );
    }

    #[test]
    fn unknown_driver_is_rejected() {
        let mut stranger = form();
        stranger.driver_name = "Nobody".into();
        assert!(stranger.validate(&dataset()).is_err());
    }

    #[test]
    fn bad_date_is_rejected() {
        let mut bad = form();
        bad.estimated_delivery = "next week".into();
        assert!(bad.validate(&dataset()).is_err());
    }
}
