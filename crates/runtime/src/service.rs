//! HP service: lookup, rule engine, persistence.
//!
//! Every operation is one read-modify-write against the repository:
//!
//! ```text
//! find_by_name ──► PlayerRecord::hp_state ──► engine ──► save (only if changed)
//! ```
//!
//! There is no per-player locking. Two concurrent requests for the same
//! player each read the stored document, and the later save wins.

use std::sync::Arc;

use hp_core::{
    DamageCategory, DamageReport, HealReport, ModificationRequest, Outcome, PlayerHpState,
    TempHpGrant, Transition,
};

use crate::api::{Applied, PlayerHpView, Result, ServiceError};
use crate::repository::PlayerRepository;

/// Applies HP modifications to stored players.
///
/// Cheap to clone; clones share the repository.
#[derive(Clone)]
pub struct HpService {
    players: Arc<dyn PlayerRepository>,
}

impl HpService {
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }

    /// Deal `amount` damage of `category` to the named player.
    pub async fn deal_damage(
        &self,
        name: &str,
        amount: u32,
        category: DamageCategory,
    ) -> Result<Applied<DamageReport>> {
        self.run(name, "damage", move |state| {
            hp_core::apply_damage(state, amount, category)
        })
        .await
    }

    /// Heal the named player by up to `amount`.
    pub async fn heal(&self, name: &str, amount: u32) -> Result<Applied<HealReport>> {
        self.run(name, "heal", move |state| hp_core::apply_heal(state, amount))
            .await
    }

    /// Grant temporary HP, ignored when the player already has some.
    pub async fn grant_temp_hp(&self, name: &str, amount: u32) -> Result<Applied<TempHpGrant>> {
        self.run(name, "grant_temp_hp", move |state| {
            hp_core::apply_grant_temp_hp(state, amount)
        })
        .await
    }

    /// Run any modification request through the engine's single dispatch.
    pub async fn modify(&self, request: &ModificationRequest) -> Result<Applied<Outcome>> {
        let modification = request.modification;
        self.run(&request.player_name, modification.as_str(), move |state| {
            hp_core::apply(state, &modification)
        })
        .await
    }

    /// Current HP view of the named player. Read-only.
    pub async fn hp_view(&self, name: &str) -> Result<PlayerHpView> {
        let (_, state) = self.load(name).await?;
        Ok(PlayerHpView::new(name, &state))
    }

    async fn load(&self, name: &str) -> Result<(hp_content::PlayerRecord, PlayerHpState)> {
        let record = self
            .players
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::PlayerNotFound {
                name: name.to_owned(),
            })?;

        let state = record
            .hp_state()
            .map_err(|source| ServiceError::InvalidRecord {
                name: name.to_owned(),
                source,
            })?;

        Ok((record, state))
    }

    async fn run<R, F>(&self, name: &str, operation: &'static str, f: F) -> Result<Applied<R>>
    where
        R: std::fmt::Debug + Send,
        F: FnOnce(PlayerHpState) -> Transition<R> + Send,
    {
        let (mut record, state) = self.load(name).await?;
        let Transition {
            state,
            changed,
            report,
        } = f(state);

        if changed {
            record.store_hp(&state);
            self.players.save(&record).await?;
            tracing::info!(
                player = %name,
                operation,
                current_hp = state.current_hp(),
                temp_hp = state.temp_hp(),
                ?report,
                "applied HP change"
            );
        } else {
            tracing::debug!(player = %name, operation, ?report, "HP unchanged, nothing saved");
        }

        Ok(Applied {
            player: PlayerHpView::new(name, &state),
            changed,
            report,
        })
    }
}
