use crate::models::{AppConfig, CompletedProfile, Gender, ShowMe};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MAX_NAME_CHARS: usize = 30;
pub const MAX_BIO_CHARS: usize = 500;
pub const MIN_AGE: u8 = 18;
pub const MIN_INTERESTS: usize = 3;
pub const MAX_INTERESTS: usize = 10;

/// Interests offered on the last onboarding step
pub const INTEREST_OPTIONS: [&str; 20] = [
    "Art", "Music", "Travel", "Food", "Sports", "Books", "Movies", "Tech",
    "Fitness", "Nature", "Photography", "Gaming", "Dancing", "Cooking",
    "Wine", "Coffee", "Hiking", "Yoga", "Meditation", "Fashion",
];

/// Onboarding steps in the order they are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Name,
    Age,
    GenderPrefs,
    Photos,
    BioProfession,
    Interests,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 6] = [
        OnboardingStep::Name,
        OnboardingStep::Age,
        OnboardingStep::GenderPrefs,
        OnboardingStep::Photos,
        OnboardingStep::BioProfession,
        OnboardingStep::Interests,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self == OnboardingStep::Interests
    }
}

/// Form data collected across the onboarding steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingDraft {
    pub name: String,
    /// Raw text as typed; parsed when validated
    pub age: String,
    pub gender: Option<Gender>,
    #[serde(rename = "interestedIn")]
    pub interested_in: Option<ShowMe>,
    pub location: String,
    pub photos: Vec<String>,
    pub bio: String,
    pub interests: BTreeSet<String>,
    pub profession: String,
}

impl OnboardingDraft {
    /// Ages that do not fit the stored `u8` fail to parse
    fn parsed_age(&self) -> Option<u8> {
        self.age.trim().parse::<u8>().ok()
    }
}

/// Whether `draft` satisfies the requirement of `step`
pub fn can_advance(step: OnboardingStep, draft: &OnboardingDraft, config: &AppConfig) -> bool {
    match step {
        OnboardingStep::Name => !draft.name.trim().is_empty(),
        OnboardingStep::Age => draft.parsed_age().is_some_and(|age| age >= MIN_AGE),
        OnboardingStep::GenderPrefs => draft.gender.is_some() && draft.interested_in.is_some(),
        OnboardingStep::Photos => draft.photos.len() >= config.profile.photo_policy.min_photos,
        OnboardingStep::BioProfession => !draft.bio.trim().is_empty(),
        OnboardingStep::Interests => draft.interests.len() >= MIN_INTERESTS,
    }
}

/// Result of pressing "Continue"
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Current step does not validate yet
    Blocked(OnboardingStep),
    Moved(OnboardingStep),
    Completed(CompletedProfile),
}

/// Why a draft edit was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditRejection {
    PhotoLimit,
    InterestLimit,
    UnknownInterest,
    NoSuchPhoto,
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Linear six-step onboarding flow
#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    step: usize,
    draft: OnboardingDraft,
    completed: bool,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        OnboardingStep::from_index(self.step).unwrap_or(OnboardingStep::Interests)
    }

    pub fn draft(&self) -> &OnboardingDraft {
        &self.draft
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Progress through the flow as a percentage
    pub fn progress(&self) -> f64 {
        (self.step + 1) as f64 / OnboardingStep::ALL.len() as f64 * 100.0
    }

    pub fn can_advance(&self, config: &AppConfig) -> bool {
        can_advance(self.step(), &self.draft, config)
    }

    /// Move forward one step, or finish from the last one
    pub fn advance(&mut self, config: &AppConfig) -> Advance {
        let step = self.step();
        if self.completed || !can_advance(step, &self.draft, config) {
            return Advance::Blocked(step);
        }

        match step.next() {
            Some(next) => {
                self.step = next.index();
                tracing::debug!("Onboarding advanced to {:?}", next);
                Advance::Moved(next)
            }
            None => match self.finalize(config) {
                Ok(profile) => {
                    self.completed = true;
                    tracing::info!("Onboarding completed for profile {}", profile.id);
                    Advance::Completed(profile)
                }
                Err(failed) => {
                    tracing::debug!("Onboarding final check failed at {:?}", failed);
                    Advance::Blocked(failed)
                }
            },
        }
    }

    pub fn retreat(&mut self) -> OnboardingStep {
        if !self.completed {
            self.step = self.step.saturating_sub(1);
        }
        self.step()
    }

    /// Build the finished profile, or name the first step that no longer validates
    fn finalize(&self, config: &AppConfig) -> Result<CompletedProfile, OnboardingStep> {
        if let Some(failed) = OnboardingStep::ALL
            .iter()
            .copied()
            .find(|step| !can_advance(*step, &self.draft, config))
        {
            return Err(failed);
        }

        let draft = &self.draft;
        Ok(CompletedProfile {
            id: uuid::Uuid::new_v4(),
            name: draft.name.trim().to_string(),
            age: draft.parsed_age().ok_or(OnboardingStep::Age)?,
            gender: draft.gender.ok_or(OnboardingStep::GenderPrefs)?,
            interested_in: draft.interested_in.ok_or(OnboardingStep::GenderPrefs)?,
            location: draft.location.trim().to_string(),
            photos: draft.photos.clone(),
            bio: draft.bio.trim().to_string(),
            interests: draft.interests.clone(),
            profession: draft.profession.trim().to_string(),
            created_at: chrono::Utc::now(),
        })
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = truncate_chars(name, MAX_NAME_CHARS);
    }

    pub fn set_age(&mut self, age: &str) {
        self.draft.age = age.to_string();
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = Some(gender);
    }

    pub fn set_interested_in(&mut self, show_me: ShowMe) {
        self.draft.interested_in = Some(show_me);
    }

    pub fn set_location(&mut self, location: &str) {
        self.draft.location = location.to_string();
    }

    pub fn set_bio(&mut self, bio: &str) {
        self.draft.bio = truncate_chars(bio, MAX_BIO_CHARS);
    }

    pub fn set_profession(&mut self, profession: &str) {
        self.draft.profession = profession.to_string();
    }

    pub fn add_photo(&mut self, url: &str, config: &AppConfig) -> Result<usize, EditRejection> {
        if self.draft.photos.len() >= config.profile.photo_policy.max_photos {
            return Err(EditRejection::PhotoLimit);
        }
        self.draft.photos.push(url.to_string());
        Ok(self.draft.photos.len())
    }

    pub fn remove_photo(&mut self, index: usize) -> Result<String, EditRejection> {
        if index >= self.draft.photos.len() {
            return Err(EditRejection::NoSuchPhoto);
        }
        Ok(self.draft.photos.remove(index))
    }

    /// Select or deselect an interest; returns whether it is now selected
    pub fn toggle_interest(&mut self, interest: &str) -> Result<bool, EditRejection> {
        if !INTEREST_OPTIONS.contains(&interest) {
            return Err(EditRejection::UnknownInterest);
        }
        if self.draft.interests.remove(interest) {
            return Ok(false);
        }
        if self.draft.interests.len() >= MAX_INTERESTS {
            return Err(EditRejection::InterestLimit);
        }
        self.draft.interests.insert(interest.to_string());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard(config: &AppConfig) -> OnboardingWizard {
        let mut wizard = OnboardingWizard::new();
        wizard.set_name("  Sam ");
        wizard.set_age("29");
        wizard.set_gender(Gender::NonBinary);
        wizard.set_interested_in(ShowMe::Everyone);
        wizard.set_location("Oakland");
        wizard.add_photo("https://img.example/1.jpg", config).unwrap();
        wizard.add_photo("https://img.example/2.jpg", config).unwrap();
        wizard.set_bio("Bakes bread on weekends");
        wizard.set_profession("Nurse");
        for interest in ["Books", "Cooking", "Hiking"] {
            wizard.toggle_interest(interest).unwrap();
        }
        wizard
    }

    #[test]
    fn test_name_predicate() {
        let config = AppConfig::default();
        let mut draft = OnboardingDraft::default();
        assert!(!can_advance(OnboardingStep::Name, &draft, &config));
        draft.name = "   ".to_string();
        assert!(!can_advance(OnboardingStep::Name, &draft, &config));
        draft.name = "Sam".to_string();
        assert!(can_advance(OnboardingStep::Name, &draft, &config));
    }

    #[test]
    fn test_age_predicate() {
        let config = AppConfig::default();
        let mut draft = OnboardingDraft::default();

        let cases = [
            ("", false),
            ("17", false),
            ("18", true),
            (" 42 ", true),
            ("255", true),
            ("256", false),
            ("300", false),
            ("abc", false),
            ("-20", false),
        ];
        for (age, expected) in cases {
            draft.age = age.to_string();
            let passes = can_advance(OnboardingStep::Age, &draft, &config);
            assert_eq!(passes, expected, "age {:?}", age);
        }
    }

    #[test]
    fn test_gender_prefs_predicate() {
        let config = AppConfig::default();
        let cases = [
            (None, None, false),
            (Some(Gender::Woman), None, false),
            (None, Some(ShowMe::Men), false),
            (Some(Gender::Other), Some(ShowMe::Everyone), true),
        ];

        for (gender, interested_in, expected) in cases {
            let draft = OnboardingDraft {
                gender,
                interested_in,
                ..Default::default()
            };
            assert_eq!(
                can_advance(OnboardingStep::GenderPrefs, &draft, &config),
                expected,
                "gender {:?} interested in {:?}",
                gender,
                interested_in
            );
        }
    }

    #[test]
    fn test_bio_predicate() {
        let config = AppConfig::default();
        let mut draft = OnboardingDraft::default();

        let cases = [
            ("", false),
            ("   ", false),
            ("\n\t ", false),
            ("Hi", true),
            ("  Baker  ", true),
        ];
        for (bio, expected) in cases {
            draft.bio = bio.to_string();
            let passes = can_advance(OnboardingStep::BioProfession, &draft, &config);
            assert_eq!(passes, expected, "bio {:?}", bio);
        }

        // Profession alone is not enough
        draft.bio.clear();
        draft.profession = "Nurse".to_string();
        assert!(!can_advance(OnboardingStep::BioProfession, &draft, &config));
    }

    #[test]
    fn test_interests_predicate() {
        let config = AppConfig::default();

        for (count, expected) in [(0, false), (2, false), (3, true), (MAX_INTERESTS, true)] {
            let draft = OnboardingDraft {
                interests: INTEREST_OPTIONS.iter().take(count).map(|s| s.to_string()).collect(),
                ..Default::default()
            };
            let passes = can_advance(OnboardingStep::Interests, &draft, &config);
            assert_eq!(passes, expected, "{} interests", count);
        }
    }

    #[test]
    fn test_out_of_range_age_blocks_at_age_step() {
        let config = AppConfig::default();
        let mut wizard = filled_wizard(&config);
        wizard.set_age("300");

        assert_eq!(wizard.advance(&config), Advance::Moved(OnboardingStep::Age));
        assert!(!wizard.can_advance(&config));
        assert_eq!(wizard.advance(&config), Advance::Blocked(OnboardingStep::Age));

        wizard.set_age("30");
        for _ in 0..4 {
            assert!(matches!(wizard.advance(&config), Advance::Moved(_)));
        }
        match wizard.advance(&config) {
            Advance::Completed(profile) => assert_eq!(profile.age, 30),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_age_edited_late_names_age_step() {
        let config = AppConfig::default();
        let mut wizard = filled_wizard(&config);
        for _ in 0..5 {
            wizard.advance(&config);
        }

        wizard.set_age("300");
        assert_eq!(wizard.step(), OnboardingStep::Interests);
        assert!(wizard.can_advance(&config));
        assert_eq!(wizard.advance(&config), Advance::Blocked(OnboardingStep::Age));
        assert!(!wizard.is_completed());
    }

    #[test]
    fn test_photo_predicate_uses_policy() {
        let config = AppConfig::default();
        let mut draft = OnboardingDraft::default();
        draft.photos.push("a".to_string());
        assert!(!can_advance(OnboardingStep::Photos, &draft, &config));
        draft.photos.push("b".to_string());
        assert!(can_advance(OnboardingStep::Photos, &draft, &config));
    }

    #[test]
    fn test_advance_blocked_until_valid() {
        let config = AppConfig::default();
        let mut wizard = OnboardingWizard::new();

        assert_eq!(wizard.advance(&config), Advance::Blocked(OnboardingStep::Name));
        wizard.set_name("Sam");
        assert_eq!(wizard.advance(&config), Advance::Moved(OnboardingStep::Age));
        assert_eq!(wizard.retreat(), OnboardingStep::Name);
        assert_eq!(wizard.retreat(), OnboardingStep::Name);
    }

    #[test]
    fn test_full_flow_completes_once() {
        let config = AppConfig::default();
        let mut wizard = filled_wizard(&config);

        for _ in 0..5 {
            assert!(matches!(wizard.advance(&config), Advance::Moved(_)));
        }
        assert_eq!(wizard.step(), OnboardingStep::Interests);
        assert_eq!(wizard.progress(), 100.0);

        let profile = match wizard.advance(&config) {
            Advance::Completed(profile) => profile,
            other => panic!("expected completion, got {:?}", other),
        };
        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.age, 29);
        assert_eq!(profile.interests.len(), 3);

        assert!(wizard.is_completed());
        assert!(matches!(wizard.advance(&config), Advance::Blocked(_)));
    }

    #[test]
    fn test_finalize_revalidates_earlier_steps() {
        let config = AppConfig::default();
        let mut wizard = filled_wizard(&config);
        for _ in 0..5 {
            wizard.advance(&config);
        }

        // Photo removed after the photo step was passed
        wizard.remove_photo(0).unwrap();
        assert!(wizard.can_advance(&config));
        assert_eq!(wizard.advance(&config), Advance::Blocked(OnboardingStep::Photos));
        assert!(!wizard.is_completed());
    }

    #[test]
    fn test_photo_cap() {
        let config = AppConfig::default();
        let mut wizard = OnboardingWizard::new();
        for i in 0..config.profile.photo_policy.max_photos {
            wizard.add_photo(&format!("p{}", i), &config).unwrap();
        }
        assert_eq!(wizard.add_photo("extra", &config), Err(EditRejection::PhotoLimit));
        assert_eq!(wizard.remove_photo(99), Err(EditRejection::NoSuchPhoto));
    }

    #[test]
    fn test_interest_toggle_and_cap() {
        let mut wizard = OnboardingWizard::new();
        assert_eq!(wizard.toggle_interest("Yoga"), Ok(true));
        assert_eq!(wizard.toggle_interest("Yoga"), Ok(false));
        assert_eq!(wizard.toggle_interest("Skydiving"), Err(EditRejection::UnknownInterest));

        for interest in INTEREST_OPTIONS.iter().take(MAX_INTERESTS) {
            wizard.toggle_interest(interest).unwrap();
        }
        assert_eq!(wizard.toggle_interest("Fashion"), Err(EditRejection::InterestLimit));
    }

    #[test]
    fn test_text_limits() {
        let mut wizard = OnboardingWizard::new();
        wizard.set_name(&"x".repeat(40));
        wizard.set_bio(&"é".repeat(600));
        assert_eq!(wizard.draft().name.chars().count(), MAX_NAME_CHARS);
        assert_eq!(wizard.draft().bio.chars().count(), MAX_BIO_CHARS);
    }
}
