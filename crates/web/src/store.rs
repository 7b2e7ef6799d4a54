//! In-memory score storage.
//!
//! One row per athlete, activity and event scope. Resubmitting replaces the
//! row and clears its verified flag; the original submission time is kept so
//! board ordering stays deterministic.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use scoring::Score;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Athlete, activity and event scope identify one stored row. Personal
/// scores outside any event use `None` as the scope.
pub type ScoreKey = (Uuid, Uuid, Option<Uuid>);

/// Fields the submission service provides for a new or replaced row.
#[derive(Debug)]
pub struct NewScore {
    pub user_id: Uuid,
    pub activity_id: Uuid,
    pub event_id: Option<Uuid>,
    pub raw_value: f64,
    pub calculated_score: f64,
    pub reps: Option<u32>,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    rows: Arc<RwLock<HashMap<ScoreKey, Score>>>,
}

impl ScoreStore {
    /// Inserts or replaces the row for this athlete and activity. A replaced
    /// row keeps its original `submitted_at` and always drops verification.
    pub async fn upsert(&self, new: NewScore) -> Score {
        let key = (new.user_id, new.activity_id, new.event_id);
        let now = Utc::now().naive_utc();
        let mut rows = self.rows.write().await;
        let submitted_at = rows.get(&key).map(|row| row.submitted_at).unwrap_or(now);
        let row = Score {
            user_id: new.user_id,
            activity_id: new.activity_id,
            event_id: new.event_id,
            raw_value: new.raw_value,
            calculated_score: new.calculated_score,
            reps: new.reps,
            team_id: new.team_id,
            verified: false,
            submitted_at,
            updated_at: now,
        };
        rows.insert(key, row.clone());
        row
    }

    pub async fn get(&self, key: &ScoreKey) -> Option<Score> {
        self.rows.read().await.get(key).cloned()
    }

    /// Marks a row verified, replacing its score with the one recomputed at
    /// the verification check. Returns `None` when no row is stored.
    pub async fn verify(&self, key: &ScoreKey, calculated_score: f64) -> Option<Score> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(key)?;
        row.calculated_score = calculated_score;
        row.verified = true;
        row.updated_at = Utc::now().naive_utc();
        Some(row.clone())
    }

    /// All rows in one event scope, ordered by submission time then athlete.
    pub async fn for_event(&self, event_id: Option<Uuid>) -> Vec<Score> {
        let rows = self.rows.read().await;
        let mut scores: Vec<Score> = rows
            .values()
            .filter(|row| row.event_id == event_id)
            .cloned()
            .collect();
        scores.sort_by(|a, b| (a.submitted_at, a.user_id).cmp(&(b.submitted_at, b.user_id)));
        scores
    }
}
