//! Store bootstrap from seed documents.

use hp_content::PlayerRecord;

use super::{PlayerRepository, Result};

/// Counts from one seeding pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Write each record whose name is not stored yet.
///
/// Players already in the repository keep their stored HP, so seeding a
/// persistent store on every start is safe.
pub async fn seed_players(
    repo: &dyn PlayerRepository,
    records: impl IntoIterator<Item = PlayerRecord>,
) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for record in records {
        if repo.insert_if_absent(&record).await? {
            tracing::debug!(player = %record.name, "seeded player");
            summary.inserted += 1;
        } else {
            tracing::debug!(player = %record.name, "player already stored, keeping it");
            summary.skipped += 1;
        }
    }

    tracing::info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "player store seeded"
    );
    Ok(summary)
}
