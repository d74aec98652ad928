use chrono::{Datelike, NaiveDateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::models::FieldMap;

pub const TRANSACTION_PREFIX: &str = "TXN-";
pub const BATCH_PREFIX: &str = "BATCH-";
pub const CLAIM_PREFIX: &str = "CLM-";

const SUBMISSION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Source of the per-claim identifiers and the submission clock.
///
/// Implementations are shared across request handlers and must tolerate
/// concurrent calls.
pub trait ClaimIdSource: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Eight uppercase hexadecimal characters.
    fn transaction_suffix(&self) -> String;

    /// In `1..=999`.
    fn batch_sequence(&self) -> u32;

    /// In `1..=999999`.
    fn claim_sequence(&self) -> u32;
}

/// UUID v4 for transactions, thread-local RNG for sequences, UTC wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdSource;

impl ClaimIdSource for SystemIdSource {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    fn transaction_suffix(&self) -> String {
        Uuid::new_v4().simple().to_string()[..8].to_uppercase()
    }

    fn batch_sequence(&self) -> u32 {
        rand::thread_rng().gen_range(1..=999)
    }

    fn claim_sequence(&self) -> u32 {
        rand::thread_rng().gen_range(1..=999_999)
    }
}

/// Reproducible identifiers drawn from a seeded RNG.
#[derive(Debug)]
pub struct SeededIdSource {
    rng: Mutex<StdRng>,
    fixed_time: Option<NaiveDateTime>,
}

impl SeededIdSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            fixed_time: None,
        }
    }

    /// Pins the submission clock, making the whole claim reproducible.
    pub fn with_fixed_time(mut self, time: NaiveDateTime) -> Self {
        self.fixed_time = Some(time);
        self
    }

    fn draw<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl ClaimIdSource for SeededIdSource {
    fn now(&self) -> NaiveDateTime {
        self.fixed_time.unwrap_or_else(|| Utc::now().naive_utc())
    }

    fn transaction_suffix(&self) -> String {
        self.draw(|rng| format!("{:08X}", rng.gen::<u32>()))
    }

    fn batch_sequence(&self) -> u32 {
        self.draw(|rng| rng.gen_range(1..=999))
    }

    fn claim_sequence(&self) -> u32 {
        self.draw(|rng| rng.gen_range(1..=999_999))
    }
}

/// The generated header and claim identifiers for one claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimIdentifiers {
    pub transaction_id: String,
    pub submission_date: String,
    pub batch_number: String,
    pub claim_number: String,
}

impl ClaimIdentifiers {
    pub fn generate(source: &dyn ClaimIdSource) -> Self {
        let now = source.now();

        Self {
            transaction_id: format!("{}{}", TRANSACTION_PREFIX, source.transaction_suffix()),
            submission_date: now.format(SUBMISSION_DATE_FORMAT).to_string(),
            batch_number: format!("{}{:03}", BATCH_PREFIX, source.batch_sequence()),
            claim_number: format!("{}{}-{:06}", CLAIM_PREFIX, now.year(), source.claim_sequence()),
        }
    }

    pub fn fill(&self, fields: &mut FieldMap) {
        fields.insert("TRANSACTION_ID".to_string(), self.transaction_id.clone());
        fields.insert("SUBMISSION_DATE".to_string(), self.submission_date.clone());
        fields.insert("BATCH_NUMBER".to_string(), self.batch_number.clone());
        fields.insert("CLAIM_NUMBER".to_string(), self.claim_number.clone());
    }
}

/// Chooses the identifier source for an optional seed.
pub fn id_source_for(seed: Option<u64>) -> Arc<dyn ClaimIdSource> {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded claim identifiers");
            Arc::new(SeededIdSource::new(seed))
        }
        None => Arc::new(SystemIdSource),
    }
}
