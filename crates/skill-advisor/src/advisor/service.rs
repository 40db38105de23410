use std::sync::Arc;

use super::domain::{AdviceSet, Profile, ProfileId};
use super::evaluation::{AdviceEngine, EngineError};
use super::hiscores::{parse_hiscores, HiscoresError};
use super::repository::{ProfileRecord, ProfileStore, StoreError};

/// Service composing the profile store and the advice engine.
pub struct AdvisorService<S> {
    store: Arc<S>,
    engine: Arc<AdviceEngine>,
}

impl<S> AdvisorService<S>
where
    S: ProfileStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_engine(store, Arc::new(AdviceEngine::standard()))
    }

    pub fn with_engine(store: Arc<S>, engine: Arc<AdviceEngine>) -> Self {
        Self { store, engine }
    }

    pub fn engine(&self) -> &AdviceEngine {
        &self.engine
    }

    /// Load the primary profile, creating and persisting the default one on first use.
    pub fn profile(&self) -> Result<Profile, AdvisorServiceError> {
        let id = ProfileId::primary();
        if let Some(record) = self.store.load(&id)? {
            return Ok(record.profile);
        }

        tracing::info!(profile_id = %id.0, "no stored profile, creating default");
        let profile = Profile::default();
        self.store.save(ProfileRecord::new(id, profile.clone()))?;
        Ok(profile)
    }

    /// Replace the primary profile. Input is already corrected by deserialization.
    pub fn update_profile(&self, profile: Profile) -> Result<Profile, AdvisorServiceError> {
        self.store
            .save(ProfileRecord::new(ProfileId::primary(), profile.clone()))?;
        tracing::info!(
            game_mode = profile.game_mode.label(),
            goals = profile.goals.len(),
            skills = profile.skills.len(),
            "profile updated"
        );
        Ok(profile)
    }

    /// Advice for the stored primary profile.
    pub fn advise(&self) -> Result<AdviceSet, AdvisorServiceError> {
        let profile = self.profile()?;
        self.advise_for(&profile)
    }

    pub fn advise_for(&self, profile: &Profile) -> Result<AdviceSet, AdvisorServiceError> {
        Ok(self.engine.advise(profile)?)
    }

    /// Merge hiscores levels into the stored profile and persist it.
    pub fn import_hiscores(
        &self,
        player_name: &str,
        payload: &str,
    ) -> Result<Profile, AdvisorServiceError> {
        let levels = parse_hiscores(payload)?;
        let mut profile = self.profile()?;

        for (skill, level) in &levels {
            profile.skills.set(skill, *level);
        }
        profile.player_name = player_name.trim().to_string();

        tracing::info!(
            player = %profile.player_name,
            skills = levels.len(),
            total_level = profile.total_level(),
            "imported hiscores"
        );
        self.update_profile(profile)
    }
}

/// Error raised by the advisor service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Hiscores(#[from] HiscoresError),
}
