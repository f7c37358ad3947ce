use crate::core::Tab;
use crate::models::domain::{Gender, ShowMe};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Partial edit of the onboarding draft; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDraftRequest {
    #[validate(length(max = 30))]
    pub name: Option<String>,
    #[validate(length(max = 3))]
    pub age: Option<String>,
    pub gender: Option<Gender>,
    #[serde(alias = "interested_in", rename = "interestedIn")]
    pub interested_in: Option<ShowMe>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
    #[validate(length(max = 500))]
    pub bio: Option<String>,
    #[validate(length(max = 100))]
    pub profession: Option<String>,
}

/// Request to attach a photo to the draft
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddPhotoRequest {
    #[validate(url)]
    pub url: String,
}

/// Request to switch the main-screen tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectTabRequest {
    pub tab: Tab,
}

/// Query parameters for copy lookups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyQuery {
    pub locale: Option<String>,
}
