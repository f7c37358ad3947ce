// Core state machine exports
pub mod onboarding;
pub mod random;
pub mod resolver;
pub mod router;
pub mod swipe;

pub use onboarding::{
    can_advance, Advance, EditRejection, OnboardingDraft, OnboardingStep, OnboardingWizard,
    INTEREST_OPTIONS,
};
pub use random::{FixedRandom, RandomSource, SequenceRandom, StdRandom};
pub use resolver::{ConfigLoadError, ConfigResolver};
pub use router::{Screen, ScreenRouter, Tab, TabEntry};
pub use swipe::{SessionState, SwipeSession};
