//! Cinder - app-shell state machines for the Cinder dating app
//!
//! This library holds the discovery swipe session, the onboarding wizard,
//! the screen router and the configuration resolver they all read from,
//! plus the HTTP routes that host them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    ConfigResolver, OnboardingWizard, RandomSource, ScreenRouter, SessionState, SwipeSession,
};
pub use crate::models::{AppConfig, CompletedProfile, Profile, SwipeAction, SwipeEvent};
