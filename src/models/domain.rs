use serde::{Deserialize, Serialize};

/// Gender filter accepted by the profile endpoint
///
/// The API speaks wire codes: 0 for male, 1 for female, -1 for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Gender {
    Both,
    Male,
    Female,
}

impl Gender {
    /// Decode a wire code, rejecting anything outside {-1, 0, 1}
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Gender::Both),
            0 => Some(Gender::Male),
            1 => Some(Gender::Female),
            _ => None,
        }
    }

    /// Wire code sent to the API
    pub fn code(self) -> i8 {
        match self {
            Gender::Both => -1,
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }
}

impl From<Gender> for i8 {
    fn from(value: Gender) -> Self {
        value.code()
    }
}

impl TryFrom<i8> for Gender {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Gender::from_code(value).ok_or_else(|| format!("invalid gender code: {}", value))
    }
}

/// Reason accepted by the report endpoint
///
/// Wire codes: 1 for spam, 2 for inappropriate/offensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ReportCause {
    Spam,
    Inappropriate,
}

impl ReportCause {
    /// Decode a wire code, rejecting anything outside {1, 2}
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ReportCause::Spam),
            2 => Some(ReportCause::Inappropriate),
            _ => None,
        }
    }

    /// Wire code sent to the API
    pub fn code(self) -> u8 {
        match self {
            ReportCause::Spam => 1,
            ReportCause::Inappropriate => 2,
        }
    }
}

impl From<ReportCause> for u8 {
    fn from(value: ReportCause) -> Self {
        value.code()
    }
}

impl TryFrom<u8> for ReportCause {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ReportCause::from_code(value).ok_or_else(|| format!("invalid report cause: {}", value))
    }
}

/// Swipe direction for the action-specific GET endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Like,
    Unlike,
}

impl SwipeAction {
    /// Leading path segment of the swipe endpoint
    pub fn as_path(self) -> &'static str {
        match self {
            SwipeAction::Like => "like",
            SwipeAction::Unlike => "unlike",
        }
    }
}
