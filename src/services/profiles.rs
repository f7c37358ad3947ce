use crate::models::Profile;
use std::collections::BTreeSet;

/// Supplies the ordered profile queue for a new discovery session
pub trait ProfileSource: Send + Sync {
    fn load(&self) -> Vec<Profile>;
}

/// Built-in demo profiles
#[derive(Debug, Clone, Default)]
pub struct SeedProfiles;

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{}?w=400&h=600&fit=crop&crop=face", photo)
}

fn interests(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ProfileSource for SeedProfiles {
    fn load(&self) -> Vec<Profile> {
        vec![
            Profile {
                id: "1".to_string(),
                name: "Emma".to_string(),
                age: 26,
                distance: 2.3,
                photos: vec![
                    unsplash("1494790108755-2616b612b829"),
                    unsplash("1517841905240-472988babdf9"),
                ],
                bio: Some(
                    "Artist & coffee enthusiast. Looking for someone who appreciates deep \
                     conversations and spontaneous adventures. Love hiking, painting, and \
                     trying new restaurants."
                        .to_string(),
                ),
                interests: interests(&["Art", "Coffee", "Hiking", "Photography", "Travel"]),
                verified: true,
                profession: Some("Graphic Designer".to_string()),
                education: Some("Art Institute".to_string()),
            },
            Profile {
                id: "2".to_string(),
                name: "Alex".to_string(),
                age: 29,
                distance: 5.1,
                photos: vec![
                    unsplash("1507003211169-0a1dd7228f2d"),
                    unsplash("1500648767791-00dcc994a43e"),
                ],
                bio: Some(
                    "Software engineer who loves rock climbing and live music. Always up for \
                     trying new cuisines or exploring hidden gems in the city."
                        .to_string(),
                ),
                interests: interests(&["Tech", "Climbing", "Music", "Food", "Startups"]),
                verified: true,
                profession: Some("Software Engineer".to_string()),
                education: Some("UC Berkeley".to_string()),
            },
            Profile {
                id: "3".to_string(),
                name: "Maya".to_string(),
                age: 24,
                distance: 1.8,
                photos: vec![
                    unsplash("1534528741775-53994a69daeb"),
                    unsplash("1506277886164-e25aa3f4ef7f"),
                ],
                bio: Some(
                    "Yoga instructor and wellness coach. Passionate about mindful living, \
                     sustainable fashion, and connecting with nature."
                        .to_string(),
                ),
                interests: interests(&["Yoga", "Wellness", "Sustainability", "Nature", "Meditation"]),
                verified: true,
                profession: Some("Yoga Instructor".to_string()),
                education: Some("Wellness Institute".to_string()),
            },
        ]
    }
}
