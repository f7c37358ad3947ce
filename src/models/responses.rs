use crate::core::{OnboardingDraft, OnboardingStep, Screen, SessionState, Tab, TabEntry};
use crate::models::domain::{CompletedProfile, Profile, SwipeEvent};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub active_sessions: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagResponse {
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyResponse {
    pub key: String,
    pub locale: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResponse {
    pub path: String,
    pub value: Option<serde_json::Value>,
}

/// Onboarding wizard as seen by the client
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingView {
    pub step: OnboardingStep,
    #[serde(rename = "stepIndex")]
    pub step_index: usize,
    #[serde(rename = "totalSteps")]
    pub total_steps: usize,
    pub progress: f64,
    #[serde(rename = "canAdvance")]
    pub can_advance: bool,
    pub draft: OnboardingDraft,
}

/// Discovery feed as seen by the client
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryView {
    pub state: SessionState,
    #[serde(rename = "currentProfile")]
    pub current_profile: Option<Profile>,
    #[serde(rename = "swipeCount")]
    pub swipe_count: u32,
    #[serde(rename = "swipeLimit")]
    pub swipe_limit: u32,
    pub remaining: usize,
    pub matches: Vec<Profile>,
    #[serde(rename = "pendingMatch")]
    pub pending_match: Option<Profile>,
}

/// Full snapshot of one client session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
    pub screen: Screen,
    #[serde(rename = "activeTab")]
    pub active_tab: Option<Tab>,
    pub tabs: Vec<TabEntry>,
    pub onboarding: Option<OnboardingView>,
    pub discovery: Option<DiscoveryView>,
    #[serde(rename = "userProfile")]
    pub user_profile: Option<CompletedProfile>,
}

/// Result of an onboarding advance
#[derive(Debug, Clone, Serialize)]
pub struct AdvanceResponse {
    pub outcome: String,
    pub step: OnboardingStep,
    pub profile: Option<CompletedProfile>,
    pub session: SessionView,
}

/// Result of a discovery action
#[derive(Debug, Clone, Serialize)]
pub struct SwipeResponse {
    pub applied: bool,
    pub event: Option<SwipeEvent>,
    pub discovery: DiscoveryView,
}
