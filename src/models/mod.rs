// Model exports
pub mod app_config;
pub mod domain;
pub mod requests;
pub mod responses;

pub use app_config::{AppConfig, BusinessRules, FeatureFlag, MembershipTier, PhotoPolicy};
pub use domain::{CompletedProfile, Gender, Profile, ShowMe, SwipeAction, SwipeEvent};
pub use requests::{AddPhotoRequest, CopyQuery, SelectTabRequest, UpdateDraftRequest};
pub use responses::{
    AdvanceResponse, CopyResponse, DiscoveryView, ErrorResponse, FlagResponse, HealthResponse,
    OnboardingView, RuleResponse, SessionView, SwipeResponse,
};
