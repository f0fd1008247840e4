pub mod intake;
pub mod pricing;
pub mod score;
pub mod steps;
pub mod submit;
pub mod validation;

pub use intake::{check_intake, IntakeRequest};
pub use steps::{StepNavigator, StepView, LAST_STEP};
pub use submit::{Redirect, Submission};

use chrono::Utc;
use tracing::{error, info, warn};

use crate::error::{NavError, SubmitError};
use crate::media::{encode, MediaAttachments};
use crate::models::{Classification, ListingDraft, SessionUser};
use crate::store::{ListingRepository, SessionStore};

/// One posting session: the draft, where the user is, and the attached media
#[derive(Debug, Default)]
pub struct ListingWizard {
    draft: ListingDraft,
    nav: StepNavigator,
    media: MediaAttachments,
    user: Option<SessionUser>,
    submitting: bool,
}

impl ListingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing draft, e.g. one loaded from disk
    pub fn from_draft(mut draft: ListingDraft) -> Self {
        draft.profile.refresh_price_per_unit_area();
        Self {
            draft,
            ..Self::default()
        }
    }

    /// Seed step 1 from an accepted intake
    pub fn from_intake(classification: Classification) -> Self {
        let mut draft = ListingDraft::default();
        draft.classification = classification;
        Self::from_draft(draft)
    }

    /// Read the session slot once, as the page does on mount
    pub async fn mount(mut self, session: &dyn SessionStore) -> Self {
        self.user = match session.current_user().await {
            Ok(user) => user,
            Err(e) => {
                warn!("Could not read session, continuing logged out: {}", e);
                None
            }
        };
        self
    }

    pub fn with_media(mut self, media: MediaAttachments) -> Self {
        self.media = media;
        self
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ListingDraft {
        &mut self.draft
    }

    pub fn media(&self) -> &MediaAttachments {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut MediaAttachments {
        &mut self.media
    }

    pub fn current_step(&self) -> u8 {
        self.nav.current()
    }

    pub fn completed_steps(&self) -> &[u8] {
        self.nav.completed()
    }

    pub fn steps(&self) -> Vec<StepView> {
        self.nav.views()
    }

    pub fn is_current_step_valid(&self) -> bool {
        validation::is_step_valid(self.nav.current(), &self.draft)
    }

    /// Recomputed from scratch on every call
    pub fn score(&self) -> u8 {
        score::score_for(&self.draft, &self.nav)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn advance(&mut self) -> Result<u8, NavError> {
        let valid = self.is_current_step_valid();
        let step = self.nav.advance(valid)?;
        info!("➡️  Now on step {} (score {}%)", step, self.score());
        Ok(step)
    }

    pub fn jump(&mut self, step: u8) -> Result<u8, NavError> {
        self.nav.jump(step)
    }

    fn check_ready(&self) -> Result<(), NavError> {
        for step in 1..LAST_STEP {
            if !validation::is_step_valid(step, &self.draft) {
                return Err(NavError::StepIncomplete(step));
            }
        }
        if !self.nav.is_last() {
            return Err(NavError::StepLocked(LAST_STEP));
        }
        Ok(())
    }

    /// Encode media, store the listing, and pick the redirect.
    ///
    /// On failure the draft and media stay as they were so the user can retry.
    pub async fn submit(&mut self, repo: &dyn ListingRepository) -> Result<Submission, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InProgress);
        }
        self.check_ready().map_err(SubmitError::Incomplete)?;

        self.submitting = true;
        let result = self.store_listing(repo).await;
        self.submitting = false;

        match &result {
            Ok(submission) => info!(
                "🏠 Posted listing {} \"{}\", redirecting to {}",
                submission.listing.id,
                submission.listing.title,
                submission.redirect.path()
            ),
            Err(e) => error!("Submission failed: {:?}", e),
        }
        result
    }

    async fn store_listing(&self, repo: &dyn ListingRepository) -> Result<Submission, SubmitError> {
        info!(
            "Encoding {} image(s){} for submission",
            self.media.images().len(),
            if self.media.has_video() { " and a video" } else { "" }
        );
        let (images, video) = encode::encode_all(
            self.media.images().iter().map(|image| &image.file),
            self.media.video(),
        )
        .await
        .map_err(SubmitError::Media)?;

        let existing = repo.get_all().await.map_err(SubmitError::Store)?;
        let now = Utc::now();
        let id = submit::next_listing_id(now, &existing);

        let listing = submit::assemble_listing(&self.draft, images, video, self.user.as_ref(), id, now);
        let listing = repo.append(listing).await.map_err(SubmitError::Store)?;

        Ok(Submission {
            redirect: Redirect::for_intent(listing.looking_to()),
            listing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaData, MediaFile, MediaSource, PreviewRegistry};
    use crate::store::{InMemoryRepository, InMemorySession};
    use crate::wizard::validation::tests::complete_draft;
    use std::path::PathBuf;

    fn png(name: &str) -> MediaFile {
        MediaFile::from_bytes(name, "image/png", vec![7, 7, 7])
    }

    fn walk_to_last_step(wizard: &mut ListingWizard) {
        while wizard.current_step() < LAST_STEP {
            wizard.advance().unwrap();
        }
    }

    #[test]
    fn test_advance_blocked_until_location_filled() {
        let mut wizard = ListingWizard::new();
        assert_eq!(wizard.advance(), Ok(2));
        assert_eq!(wizard.advance(), Err(NavError::StepIncomplete(2)));

        wizard.draft_mut().location.city = "Chennai".to_string();
        wizard.draft_mut().location.locality = "Adyar".to_string();
        assert_eq!(wizard.advance(), Ok(3));
        assert_eq!(wizard.completed_steps(), &[1, 2]);
    }

    #[test]
    fn test_score_tracks_navigation() {
        let mut wizard = ListingWizard::from_draft(complete_draft());
        assert_eq!(wizard.score(), 20);
        wizard.advance().unwrap();
        // now on step 2, location not counted yet; step 3 not reached
        assert_eq!(wizard.score(), 20);
        wizard.advance().unwrap();
        assert_eq!(wizard.score(), 70);
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let repo = InMemoryRepository::new();
        let session = InMemorySession::logged_in(SessionUser {
            name: "Kiran".to_string(),
            email: "kiran@example.com".to_string(),
            phone: None,
        });

        let first = {
            let mut wizard = ListingWizard::from_draft(complete_draft()).mount(&session).await;
            walk_to_last_step(&mut wizard);
            wizard.submit(&repo).await.unwrap()
        };

        let mut wizard = ListingWizard::from_draft(complete_draft()).mount(&session).await;
        wizard
            .media_mut()
            .add_images(vec![png("front.png"), png("hall.png")], MediaSource::Picker);
        walk_to_last_step(&mut wizard);

        let submission = wizard.submit(&repo).await.unwrap();
        assert_eq!(submission.redirect, Redirect::Buy);
        assert!(!wizard.is_submitting());

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, submission.listing.id);
        assert_ne!(all[0].id, first.listing.id);
        assert!(all[0].has_photos);
        assert!(!all[0].has_videos);
        assert_eq!(all[0].images.len(), 2);
        assert!(all[0].images[0].starts_with("data:image/png;base64,"));
        assert_eq!(all[0].owner_email.as_deref(), Some("kiran@example.com"));
    }

    #[tokio::test]
    async fn test_submit_refused_before_last_step() {
        let repo = InMemoryRepository::new();
        let mut wizard = ListingWizard::from_draft(complete_draft());
        wizard.advance().unwrap();

        let err = wizard.submit(&repo).await.unwrap_err();
        assert!(matches!(err, SubmitError::Incomplete(NavError::StepLocked(5))));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_rechecks_edited_earlier_steps() {
        let repo = InMemoryRepository::new();
        let mut wizard = ListingWizard::from_draft(complete_draft());
        walk_to_last_step(&mut wizard);
        wizard.draft_mut().profile.description = "too short".to_string();

        let err = wizard.submit(&repo).await.unwrap_err();
        assert!(matches!(err, SubmitError::Incomplete(NavError::StepIncomplete(3))));
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_draft_for_retry() {
        let repo = InMemoryRepository::new();
        repo.reject_writes(true);

        let mut wizard = ListingWizard::from_draft(complete_draft());
        wizard.media_mut().add_images(vec![png("a.png")], MediaSource::DragDrop);
        walk_to_last_step(&mut wizard);
        let before = wizard.draft().clone();

        let err = wizard.submit(&repo).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to submit property. Please try again.");
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.draft(), &before);
        assert_eq!(wizard.media().images().len(), 1);

        repo.reject_writes(false);
        wizard.submit(&repo).await.unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_media_fails_whole_submission() {
        let repo = InMemoryRepository::new();
        let mut wizard = ListingWizard::from_draft(complete_draft());
        let ghost = MediaFile {
            name: "ghost.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            size: 100,
            data: MediaData::Path(PathBuf::from("/no/such/dir/ghost.jpg")),
        };
        wizard.media_mut().add_images(vec![png("ok.png"), ghost], MediaSource::Picker);
        walk_to_last_step(&mut wizard);

        let err = wizard.submit(&repo).await.unwrap_err();
        assert!(matches!(err, SubmitError::Media(_)));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[test]
    fn test_dropping_wizard_releases_previews() {
        let registry = PreviewRegistry::new();
        let mut wizard = ListingWizard::new().with_media(MediaAttachments::with_registry(registry.clone()));
        wizard
            .media_mut()
            .add_images(vec![png("a.png"), png("b.png")], MediaSource::Picker);
        assert_eq!(registry.live_count(), 2);

        drop(wizard);
        assert_eq!(registry.live_count(), 0);
    }

    #[tokio::test]
    async fn test_mount_reads_logged_out_session() {
        let session = InMemorySession::default();
        let wizard = ListingWizard::new().mount(&session).await;
        assert!(wizard.user().is_none());
    }
}
