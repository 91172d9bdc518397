//! Delivery disputes: variance math, resolution buckets and the two forms
//! (reporting by Transport, resolving by Management).

use crate::errors::ValidationError;
use crate::models::{
    parse_number, MeasurementMethod, ResolutionLevel, ACTIONS_TAKEN, DISPUTE_REASONS,
};
use serde::{Deserialize, Serialize};

/// Actual minus ordered, in liters.
pub fn variance(ordered: f64, actual: f64) -> f64 {
    actual - ordered
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceKind {
    None,
    Over,
    Short,
}

impl VarianceKind {
    pub fn of(variance: f64) -> Self {
        if variance == 0.0 {
            VarianceKind::None
        } else if variance > 0.0 {
            VarianceKind::Over
        } else {
            VarianceKind::Short
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VarianceKind::None => "No variance",
            VarianceKind::Over => "Over delivery",
            VarianceKind::Short => "Short delivery",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            VarianceKind::None => "variance-none",
            VarianceKind::Over => "variance-over",
            VarianceKind::Short => "variance-short",
        }
    }
}

/// Signed two-decimal liters, e.g. `-30.00` or `+12.50`.
pub fn signed_liters(variance: f64) -> String {
    if variance > 0.0 {
        format!("+{variance:.2}")
    } else {
        format!("{variance:.2}")
    }
}

pub fn describe_variance(variance: f64) -> String {
    let kind = VarianceKind::of(variance);
    match kind {
        VarianceKind::None => format!("0 L ({})", kind.label()),
        _ => format!("{} L ({})", signed_liters(variance), kind.label()),
    }
}

pub fn resolution_level_for(variance: f64) -> ResolutionLevel {
    let magnitude = variance.abs();
    if magnitude < 50.0 {
        ResolutionLevel::Under50
    } else if magnitude < 100.0 {
        ResolutionLevel::Under100
    } else {
        ResolutionLevel::Over100
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisputeForm {
    pub client_name: String,
    pub actual_quantity: String,
    pub measurement_method: String,
    pub scale_owner: String,
    pub scale_city: String,
    pub dispute_reason: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisputeReport {
    pub client_name: String,
    pub actual_quantity: f64,
    pub variance: f64,
    pub method: MeasurementMethod,
    pub scale_owner: String,
    pub scale_city: String,
    pub reason: String,
    pub notes: String,
}

impl DisputeForm {
    pub fn validate(&self, ordered_quantity: f64) -> Result<DisputeReport, ValidationError> {
        let client_name = self.client_name.trim();
        let actual = self.actual_quantity.trim();
        let reason = self.dispute_reason.trim();
        let method = self.measurement_method.trim();
        if actual.is_empty() || reason.is_empty() || client_name.is_empty() || method.is_empty() {
            return Err(ValidationError::missing_fields());
        }

        let method = MeasurementMethod::parse(method)
            .ok_or_else(|| ValidationError::new("Unknown measurement method"))?;
        let actual_quantity = parse_number(actual)
            .filter(|value| *value >= 0.0)
            .ok_or_else(|| ValidationError::new("Actual quantity must be a non-negative number"))?;
        if !DISPUTE_REASONS.contains(&reason) {
            return Err(ValidationError::new("Unknown dispute reason"));
        }

        let (scale_owner, scale_city) = match method {
            MeasurementMethod::Scale => {
                let owner = self.scale_owner.trim();
                let city = self.scale_city.trim();
                if owner.is_empty() || city.is_empty() {
                    return Err(ValidationError::new("Please fill in Scale Owner and Location"));
                }
                (owner.to_string(), city.to_string())
            }
            MeasurementMethod::Protometer => (String::new(), String::new()),
        };

        Ok(DisputeReport {
            client_name: client_name.to_string(),
            actual_quantity,
            variance: variance(ordered_quantity, actual_quantity),
            method,
            scale_owner,
            scale_city,
            reason: reason.to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolutionForm {
    pub resolution_level: String,
    pub action_taken: String,
    pub resolution_notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub level: ResolutionLevel,
    pub action_taken: String,
    pub notes: String,
}

impl ResolutionForm {
    pub fn validate(&self) -> Result<Resolution, ValidationError> {
        let level = self.resolution_level.trim();
        let action_taken = self.action_taken.trim();
        let notes = self.resolution_notes.trim();
        if level.is_empty() || action_taken.is_empty() || notes.is_empty() {
            return Err(ValidationError::missing_fields());
        }

        let level = ResolutionLevel::parse(level)
            .ok_or_else(|| ValidationError::new("Unknown resolution level"))?;
        if !ACTIONS_TAKEN.iter().any(|(value, _)| *value == action_taken) {
            return Err(ValidationError::new("Unknown resolution action"));
        }

        Ok(Resolution {
            level,
            action_taken: action_taken.to_string(),
            notes: notes.to_string(),
        })
    }
}
