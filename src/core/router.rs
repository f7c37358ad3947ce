use crate::core::onboarding::{Advance, OnboardingWizard};
use crate::core::random::RandomSource;
use crate::core::resolver::ConfigResolver;
use crate::core::swipe::SwipeSession;
use crate::models::{CompletedProfile, Profile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const MESSAGING_FLAG: &str = "messagingEnabled";
pub const DEFAULT_LOCALE: &str = "en";

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Splash,
    Onboarding,
    Main,
}

/// Bottom navigation tabs of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Discover,
    Likes,
    Messages,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Discover, Tab::Likes, Tab::Messages, Tab::Profile];
}

/// A tab as shown in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub tab: Tab,
    pub label: String,
}

/// App shell: splash, onboarding, then the tabbed main screen
///
/// Owns the onboarding wizard and the discovery session for one user. The
/// discovery session lives as long as the shell, so switching tabs does not
/// reset it.
#[derive(Debug)]
pub struct ScreenRouter {
    resolver: Arc<ConfigResolver>,
    screen: Screen,
    active_tab: Tab,
    wizard: OnboardingWizard,
    discovery: SwipeSession,
    user_profile: Option<CompletedProfile>,
}

impl ScreenRouter {
    pub fn new(
        resolver: Arc<ConfigResolver>,
        queue: Vec<Profile>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let limit = resolver.swipe_limit();
        Self {
            resolver,
            screen: Screen::Splash,
            active_tab: Tab::Discover,
            wizard: OnboardingWizard::new(),
            discovery: SwipeSession::new(queue, limit, random),
            user_profile: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    pub fn wizard(&self) -> &OnboardingWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut OnboardingWizard {
        &mut self.wizard
    }

    pub fn discovery(&self) -> &SwipeSession {
        &self.discovery
    }

    pub fn discovery_mut(&mut self) -> &mut SwipeSession {
        &mut self.discovery
    }

    pub fn user_profile(&self) -> Option<&CompletedProfile> {
        self.user_profile.as_ref()
    }

    /// "Create Account" on the splash screen
    pub fn get_started(&mut self) -> bool {
        if self.screen != Screen::Splash {
            return false;
        }
        self.screen = Screen::Onboarding;
        true
    }

    /// Advance the onboarding wizard, entering the main screen on completion
    pub fn advance_onboarding(&mut self) -> Advance {
        if self.screen != Screen::Onboarding {
            return Advance::Blocked(self.wizard.step());
        }

        let config = self.resolver.get_config();
        let outcome = self.wizard.advance(&config);
        if let Advance::Completed(profile) = &outcome {
            self.complete_onboarding(profile.clone());
        }
        outcome
    }

    fn complete_onboarding(&mut self, profile: CompletedProfile) {
        tracing::info!("Entering main screen as {}", profile.name);
        self.user_profile = Some(profile);
        self.screen = Screen::Main;
        self.active_tab = Tab::Discover;
    }

    pub fn is_tab_visible(&self, tab: Tab) -> bool {
        match tab {
            Tab::Messages => self.resolver.is_feature_enabled(MESSAGING_FLAG),
            _ => true,
        }
    }

    /// Tabs currently shown in the navigation bar, in display order
    pub fn visible_tabs(&self) -> Vec<TabEntry> {
        Tab::ALL
            .into_iter()
            .filter(|tab| self.is_tab_visible(*tab))
            .map(|tab| TabEntry {
                tab,
                label: self.tab_label(tab),
            })
            .collect()
    }

    fn tab_label(&self, tab: Tab) -> String {
        match tab {
            Tab::Discover => self.resolver.get_copy("discover_title", DEFAULT_LOCALE),
            Tab::Likes => "Likes".to_string(),
            Tab::Messages => self.resolver.get_copy("messages_title", DEFAULT_LOCALE),
            Tab::Profile => self.resolver.get_copy("profile_title", DEFAULT_LOCALE),
        }
    }

    /// Switch tabs; refused outside the main screen or for hidden tabs
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.screen != Screen::Main || !self.is_tab_visible(tab) {
            tracing::debug!("Tab {:?} not selectable on {:?}", tab, self.screen);
            return false;
        }
        self.active_tab = tab;
        true
    }
}
