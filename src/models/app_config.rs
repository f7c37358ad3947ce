use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete configuration tree read by every screen
///
/// Each section falls back to its defaults when missing from a loaded
/// document, so a config file only needs to carry what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub version: String,
    pub app: AppInfo,
    pub theming: Theming,
    /// locale -> key -> text
    pub copy: HashMap<String, HashMap<String, String>>,
    #[serde(rename = "featureFlags")]
    pub feature_flags: HashMap<String, FeatureFlag>,
    #[serde(rename = "businessRules")]
    pub business_rules: BusinessRules,
    pub matching: MatchingRules,
    pub profile: ProfileRules,
    pub community: Community,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerRadius {
    Sm,
    Md,
    Lg,
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theming {
    pub mode: ThemeMode,
    pub animations_enabled: bool,
    pub corner_radius: CornerRadius,
}

/// Named toggle gating optional functionality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlag {
    #[serde(default)]
    pub description: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rollout: Vec<RolloutRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolloutRule {
    pub percentage: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessRules {
    pub free_tier: FreeTier,
    pub monetization: Monetization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeTier {
    pub swipe_limit_per_day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipModel {
    Contribution,
    Subscription,
    Freemium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monetization {
    pub membership_model: MembershipModel,
    pub suggested_monthly_contribution: u32,
    pub pay_to_boost: bool,
    pub in_app_purchases_enabled: bool,
    pub tiers: Vec<MembershipTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipTier {
    pub name: String,
    pub contribution: u32,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingRules {
    pub algorithm: String,
    pub max_distance_km: u16,
    pub age_range: AgeRange,
    pub allow_cross_community_matching: bool,
    pub allow_nonbinary_matching: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoPolicy {
    pub min_photos: usize,
    pub max_photos: usize,
    pub allow_memes: bool,
    pub allow_group_photos: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRules {
    pub required_fields: Vec<String>,
    pub optional_fields: Vec<String>,
    pub photo_policy: PhotoPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub name: String,
    pub invite_only: bool,
    pub onboarding_flow: String,
    pub admin_moderation_enabled: bool,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn flag(description: &str, enabled: bool) -> FeatureFlag {
    FeatureFlag {
        description: description.to_string(),
        enabled,
        rollout: Vec::new(),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let en: HashMap<String, String> = [
            ("onboarding_title", "Create Your Authentic Profile"),
            ("match_screen_title", "It's a Match!"),
            ("premium_cta", "Become a Supporter"),
            ("app_tagline", "Where authentic connections begin"),
            ("discover_title", "Discover"),
            ("messages_title", "Messages"),
            ("profile_title", "Profile"),
            ("get_verified", "Get Verified"),
            ("safety_first", "Safety First"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let feature_flags = [
            ("messagingEnabled", flag("Enables the core chat and messaging functionality.", true)),
            ("voiceMessages", flag("Allows users to send and receive voice messages in chat.", false)),
            ("videoChat", flag("Enables in-app Face to Face video calls between matches.", true)),
            ("discoveryRadiusSlider", flag("Allows users to set a discovery radius with a slider.", true)),
            ("paidBoostEnabled", flag("Enables the premium Boost feature for increased visibility.", false)),
            (
                "profileVerificationRequired",
                flag("Makes photo verification mandatory for all users during onboarding.", true),
            ),
        ]
        .into_iter()
        .map(|(name, flag)| (name.to_string(), flag))
        .collect();

        Self {
            version: "3.0.0".to_string(),
            app: AppInfo::default(),
            theming: Theming::default(),
            copy: HashMap::from([("en".to_string(), en)]),
            feature_flags,
            business_rules: BusinessRules::default(),
            matching: MatchingRules::default(),
            profile: ProfileRules::default(),
            community: Community::default(),
        }
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "Cinder".to_string(),
            logo_url: "/assets/logo.svg".to_string(),
        }
    }
}

impl Default for Theming {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            animations_enabled: true,
            corner_radius: CornerRadius::Lg,
        }
    }
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            free_tier: FreeTier::default(),
            monetization: Monetization::default(),
        }
    }
}

impl Default for FreeTier {
    fn default() -> Self {
        Self { swipe_limit_per_day: 100 }
    }
}

impl Default for Monetization {
    fn default() -> Self {
        Self {
            membership_model: MembershipModel::Contribution,
            suggested_monthly_contribution: 5,
            pay_to_boost: false,
            in_app_purchases_enabled: false,
            tiers: vec![
                MembershipTier {
                    name: "Member".to_string(),
                    contribution: 5,
                    features: strings(&["full_access", "profile_boosts_monthly_1"]),
                },
                MembershipTier {
                    name: "Supporter".to_string(),
                    contribution: 10,
                    features: strings(&["all_member_features", "invite_others", "influence_roadmap"]),
                },
            ],
        }
    }
}

impl Default for MatchingRules {
    fn default() -> Self {
        Self {
            algorithm: "proximity-weighted-compatibility".to_string(),
            max_distance_km: 30,
            age_range: AgeRange { min: 21, max: 50 },
            allow_cross_community_matching: false,
            allow_nonbinary_matching: true,
        }
    }
}

impl Default for ProfileRules {
    fn default() -> Self {
        Self {
            required_fields: strings(&["name", "age", "pronouns", "location", "photos"]),
            optional_fields: strings(&["interests", "profession", "education", "values"]),
            photo_policy: PhotoPolicy::default(),
        }
    }
}

impl Default for PhotoPolicy {
    fn default() -> Self {
        Self {
            min_photos: 2,
            max_photos: 6,
            allow_memes: false,
            allow_group_photos: false,
        }
    }
}

impl Default for Community {
    fn default() -> Self {
        Self {
            name: "Cinder Community".to_string(),
            invite_only: false,
            onboarding_flow: "safety-first".to_string(),
            admin_moderation_enabled: true,
        }
    }
}
