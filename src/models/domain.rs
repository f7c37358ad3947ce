use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A profile shown in the discovery feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    /// Distance from the viewer in kilometers
    pub distance: f64,
    pub photos: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
}

impl Profile {
    /// First photo, used for the match notification avatar
    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

/// Gender identity picked during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Woman,
    Man,
    #[serde(rename = "Non-binary")]
    NonBinary,
    Other,
}

/// Who the user wants to see in discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowMe {
    Women,
    Men,
    Everyone,
}

/// A decision on the profile currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeAction {
    Nope,
    Like,
    SuperLike,
}

impl SwipeAction {
    /// Probability that this action resolves into a match
    pub fn match_probability(self) -> f64 {
        match self {
            SwipeAction::Nope => 0.0,
            SwipeAction::Like => 0.30,
            SwipeAction::SuperLike => 0.70,
        }
    }
}

/// Record of one applied swipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeEvent {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub action: SwipeAction,
    pub matched: bool,
    pub at: chrono::DateTime<chrono::Utc>,
}

/// Onboarding output handed to the app shell once every step validates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedProfile {
    pub id: uuid::Uuid,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    #[serde(rename = "interestedIn")]
    pub interested_in: ShowMe,
    pub location: String,
    pub photos: Vec<String>,
    pub bio: String,
    pub interests: BTreeSet<String>,
    pub profession: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
