//! Drives a session against the word collaborators
//!
//! The session itself is synchronous. This module does the asynchronous
//! parts around it: fetching a target (with fallback) before a session
//! exists, and asking the validator before a submission completes.

use super::{GameError, GameSession, SubmitOutcome, WordVerdict};
use crate::config::ValidationPolicy;
use crate::core::{Language, Word};
use crate::services::{Services, WordProvider, WordValidator};
use crate::wordlists;
use tracing::{info, warn};

/// Fetch the target for `language`, falling back to a built-in word
///
/// Provider errors and words outside the language's alphabet both fall back.
pub async fn resolve_target(provider: &dyn WordProvider, language: Language) -> Word {
    match provider.target_word(language).await {
        Ok(word) if word.fits(language) => {
            info!(%language, "target word loaded");
            word
        }
        Ok(word) => {
            warn!(%language, %word, "target word outside alphabet, using fallback");
            wordlists::fallback_target(language, &mut rand::rng())
        }
        Err(err) => {
            warn!(%language, error = %err, "could not load target word, using fallback");
            wordlists::fallback_target(language, &mut rand::rng())
        }
    }
}

/// Ask the validator about `word` and apply the failure policy
pub async fn check_word(
    validator: &dyn WordValidator,
    word: &Word,
    language: Language,
    policy: ValidationPolicy,
) -> WordVerdict {
    policy.resolve(validator.is_valid(word, language).await)
}

/// A session plus the collaborators it is played against
///
/// Used by the line-mode front end, which waits for every answer in turn.
#[derive(Debug)]
pub struct Game {
    services: Services,
    policy: ValidationPolicy,
    session: GameSession,
}

impl Game {
    /// Fetch a target and start the first session
    pub async fn start(services: Services, policy: ValidationPolicy, language: Language) -> Self {
        let target = resolve_target(services.provider.as_ref(), language).await;
        Self {
            services,
            policy,
            session: GameSession::new(target, language),
        }
    }

    /// Start over in the current language with a freshly fetched target
    pub async fn new_game(&mut self) {
        self.switch_language(self.session.language()).await;
    }

    /// Start over in `language`
    pub async fn switch_language(&mut self, language: Language) {
        let target = resolve_target(self.services.provider.as_ref(), language).await;
        self.session.reset_with_language(target, language);
    }

    /// Validate and submit the current row
    ///
    /// # Errors
    /// Any [`GameError`] from preparing or completing the submission.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, GameError> {
        let pending = self.session.prepare_submission()?;
        let verdict = check_word(
            self.services.validator.as_ref(),
            pending.word(),
            self.session.language(),
            self.policy,
        )
        .await;
        self.session.complete_submission(pending, verdict)
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    #[must_use]
    pub const fn services(&self) -> &Services {
        &self.services
    }

    #[must_use]
    pub const fn policy(&self) -> ValidationPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::game::{GameEvent, GameStatus, RejectReason};
    use crate::services::{Dictionary, ServiceError};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that always fails
    struct Offline;

    #[async_trait]
    impl WordProvider for Offline {
        async fn target_word(&self, language: Language) -> Result<Word, ServiceError> {
            Err(ServiceError::EmptyWordList(language))
        }
    }

    #[async_trait]
    impl WordValidator for Offline {
        async fn is_valid(&self, _: &Word, language: Language) -> Result<bool, ServiceError> {
            Err(ServiceError::EmptyWordList(language))
        }
    }

    /// Provider with a fixed word, counting calls
    struct Fixed {
        word: Word,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WordProvider for Fixed {
        async fn target_word(&self, _: Language) -> Result<Word, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.word)
        }
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn fixed(text: &str) -> Arc<Fixed> {
        Arc::new(Fixed {
            word: word(text),
            calls: AtomicUsize::new(0),
        })
    }

    fn type_word(game: &mut Game, text: &str) {
        for ch in text.chars() {
            game.session_mut()
                .add_letter(Letter::new(ch).unwrap())
                .unwrap();
        }
    }

    #[tokio::test]
    async fn resolve_target_uses_provider_word() {
        let provider = fixed("house");
        assert_eq!(
            resolve_target(provider.as_ref(), Language::En).await,
            word("house")
        );
    }

    #[tokio::test]
    async fn resolve_target_falls_back_on_error() {
        let target = resolve_target(&Offline, Language::En).await;
        assert!(wordlists::FALLBACK_EN.contains(&target.to_string().as_str()));
    }

    #[tokio::test]
    async fn resolve_target_falls_back_on_foreign_word() {
        let provider = fixed("niños");
        let target = resolve_target(provider.as_ref(), Language::En).await;
        assert!(target.fits(Language::En));
    }

    #[tokio::test]
    async fn check_word_applies_policy_on_failure() {
        let w = word("mouse");
        assert_eq!(
            check_word(&Offline, &w, Language::En, ValidationPolicy::AcceptAnyFiveLetterWord)
                .await,
            WordVerdict::Accepted
        );
        assert_eq!(
            check_word(&Offline, &w, Language::En, ValidationPolicy::RejectSubmission).await,
            WordVerdict::Unavailable
        );
    }

    #[tokio::test]
    async fn house_scenario_against_dictionary() {
        let dictionary = Arc::new(Dictionary::embedded());
        let services = Services::new(fixed("house"), dictionary);
        let mut game = Game::start(services, ValidationPolicy::RejectSubmission, Language::En).await;

        type_word(&mut game, "mouse");
        let outcome = game.submit().await.unwrap();
        assert_eq!(outcome.status, GameStatus::Playing);
        assert_eq!(game.session().current_row(), 1);

        type_word(&mut game, "house");
        let outcome = game.submit().await.unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(game.submit().await, Err(GameError::GameOver));
    }

    #[tokio::test]
    async fn unknown_word_is_rejected_and_row_kept() {
        let services = Services::new(fixed("house"), Arc::new(Dictionary::embedded()));
        let mut game = Game::start(services, ValidationPolicy::RejectSubmission, Language::En).await;

        type_word(&mut game, "xyzzy");
        game.session_mut().take_events();
        assert_eq!(game.submit().await, Err(GameError::InvalidWord));
        assert_eq!(game.session().current_col(), 5);
        assert_eq!(
            game.session_mut().take_events(),
            vec![GameEvent::GuessRejected {
                reason: RejectReason::InvalidWord
            }]
        );
    }

    #[tokio::test]
    async fn validator_outage_follows_policy() {
        let services = Services::new(fixed("house"), Arc::new(Offline));
        let mut strict = Game::start(
            services.clone(),
            ValidationPolicy::RejectSubmission,
            Language::En,
        )
        .await;
        type_word(&mut strict, "xyzzy");
        assert_eq!(strict.submit().await, Err(GameError::ValidationUnavailable));

        let mut lenient = Game::start(
            services,
            ValidationPolicy::AcceptAnyFiveLetterWord,
            Language::En,
        )
        .await;
        type_word(&mut lenient, "xyzzy");
        assert!(lenient.submit().await.is_ok());
    }

    #[tokio::test]
    async fn new_game_fetches_again_and_advances_epoch() {
        let provider = fixed("house");
        let services = Services::new(provider.clone(), Arc::new(Offline));
        let mut game = Game::start(services, ValidationPolicy::default(), Language::En).await;
        let first_epoch = game.session().epoch();

        game.new_game().await;
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert_eq!(game.session().epoch(), first_epoch.next());

        game.switch_language(Language::Es).await;
        assert_eq!(game.session().language(), Language::Es);
    }
}
