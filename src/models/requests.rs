use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Gender, ReportCause};

/// Credentials posted to the auth endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1))]
    pub facebook_id: String,
    #[validate(length(min = 1))]
    pub facebook_token: String,
}

/// Discovery filter preferences posted to the profile endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    pub gender: Gender,
    #[validate(range(min = 18, max = 100))]
    pub age_filter_min: u8,
    #[validate(range(min = 18, max = 100))]
    pub age_filter_max: u8,
    /// Max search radius in kilometers
    #[validate(range(min = 1, max = 160))]
    pub distance_filter: u16,
}

/// Coordinates posted to the location ping endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// Report posted for a misbehaving user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub cause: ReportCause,
}

/// Message posted to a per-match endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Message {
    #[validate(length(min = 1))]
    pub message: String,
}
