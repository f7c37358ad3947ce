use crate::core::random::RandomSource;
use crate::models::{Profile, SwipeAction, SwipeEvent};
use serde::Serialize;

/// Where a discovery session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Browsing,
    /// Every profile in the queue has been swiped
    Exhausted,
    /// The daily swipe allowance is used up
    LimitReached,
    /// A match notification is on screen
    MatchShown,
}

/// Swipe-through-a-queue state machine for one browsing session
///
/// Swipes only apply while [`SessionState::Browsing`]. Each applied swipe
/// advances the cursor and the swipe count by exactly one; likes and super
/// likes may additionally record a match, which stays pending until
/// [`SwipeSession::dismiss_match`].
pub struct SwipeSession {
    queue: Vec<Profile>,
    cursor: usize,
    swipe_count: u32,
    limit: u32,
    matches: Vec<Profile>,
    pending_match: Option<Profile>,
    history: Vec<SwipeEvent>,
    random: Box<dyn RandomSource>,
}

impl std::fmt::Debug for SwipeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeSession")
            .field("queue_len", &self.queue.len())
            .field("cursor", &self.cursor)
            .field("swipe_count", &self.swipe_count)
            .field("limit", &self.limit)
            .field("matches", &self.matches.len())
            .field("pending_match", &self.pending_match.as_ref().map(|p| &p.id))
            .finish()
    }
}

impl SwipeSession {
    pub fn new(queue: Vec<Profile>, limit: u32, random: Box<dyn RandomSource>) -> Self {
        Self {
            queue,
            cursor: 0,
            swipe_count: 0,
            limit,
            matches: Vec::new(),
            pending_match: None,
            history: Vec::new(),
            random,
        }
    }

    /// Exhausted is checked before the limit; both win over a pending match.
    pub fn state(&self) -> SessionState {
        if self.cursor >= self.queue.len() {
            SessionState::Exhausted
        } else if self.swipe_count >= self.limit {
            SessionState::LimitReached
        } else if self.pending_match.is_some() {
            SessionState::MatchShown
        } else {
            SessionState::Browsing
        }
    }

    pub fn current_profile(&self) -> Option<&Profile> {
        self.queue.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn swipe_count(&self) -> u32 {
        self.swipe_count
    }

    pub fn swipe_limit(&self) -> u32 {
        self.limit
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Profiles left to swipe before the queue runs out
    pub fn remaining(&self) -> usize {
        self.queue.len().saturating_sub(self.cursor)
    }

    pub fn matches(&self) -> &[Profile] {
        &self.matches
    }

    pub fn pending_match(&self) -> Option<&Profile> {
        self.pending_match.as_ref()
    }

    pub fn history(&self) -> &[SwipeEvent] {
        &self.history
    }

    pub fn like(&mut self) -> Option<SwipeEvent> {
        self.swipe(SwipeAction::Like)
    }

    pub fn nope(&mut self) -> Option<SwipeEvent> {
        self.swipe(SwipeAction::Nope)
    }

    pub fn super_like(&mut self) -> Option<SwipeEvent> {
        self.swipe(SwipeAction::SuperLike)
    }

    /// Apply `action` to the current profile; `None` when not browsing
    pub fn swipe(&mut self, action: SwipeAction) -> Option<SwipeEvent> {
        if self.state() != SessionState::Browsing {
            tracing::debug!("Ignoring {:?} in state {:?}", action, self.state());
            return None;
        }

        let profile = self.queue.get(self.cursor)?.clone();

        let matched = match action {
            SwipeAction::Nope => false,
            _ => self.random.next_uniform() < action.match_probability(),
        };

        if matched {
            tracing::info!("Matched with profile {}", profile.id);
            self.matches.push(profile.clone());
            self.pending_match = Some(profile.clone());
        }

        self.cursor += 1;
        self.swipe_count += 1;

        let event = SwipeEvent {
            profile_id: profile.id,
            action,
            matched,
            at: chrono::Utc::now(),
        };
        self.history.push(event.clone());

        tracing::debug!(
            "Swipe {}/{} ({:?}, matched: {})",
            self.swipe_count,
            self.limit,
            action,
            matched
        );

        Some(event)
    }

    /// Close the match notification; returns the profile that was shown
    pub fn dismiss_match(&mut self) -> Option<Profile> {
        self.pending_match.take()
    }

    /// Start over from the first profile
    ///
    /// Resets the cursor and swipe count. Matches, history and any match
    /// still on screen are kept.
    pub fn restart(&mut self) {
        tracing::debug!(
            "Restarting discovery after {} swipes ({} matches kept)",
            self.swipe_count,
            self.matches.len()
        );
        self.cursor = 0;
        self.swipe_count = 0;
    }
}
