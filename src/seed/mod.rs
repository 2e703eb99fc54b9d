//! Populates the database with synthetic listings in fixed-size batches.
//!
//! The run is destructive: existing listings are removed first so every run
//! produces a clean, reproducible dataset. Each batch goes to the database in
//! a single bulk insert; there is no retry and no surrounding transaction, so
//! a failed batch aborts the run while earlier batches stay committed.

use std::time::Instant;

use sqlx::PgPool;

use crate::auth::repo::User;
use crate::auth::services::hash_password;
use crate::listings::repo::{self, NewListing};

pub mod generate;

/// Email of the user that owns every seeded listing.
pub const OWNER_EMAIL: &str = "user@example.com";

#[derive(Debug, Clone, Copy)]
pub struct SeedOptions {
    /// Total number of listings to create.
    pub number: u32,
    /// Listings per bulk insert.
    pub batch_size: u32,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            number: 50_000,
            batch_size: 10_000,
        }
    }
}

/// Batch sizes for a run: `number / batch_size` full batches followed by the
/// remainder, if any.
pub fn batch_plan(number: u32, batch_size: u32) -> Vec<u32> {
    assert!(batch_size > 0, "batch_size must be positive");
    let mut plan = vec![batch_size; (number / batch_size) as usize];
    if number % batch_size > 0 {
        plan.push(number % batch_size);
    }
    plan
}

pub async fn run(db: &PgPool, opts: &SeedOptions) -> anyhow::Result<u64> {
    anyhow::ensure!(opts.batch_size > 0, "batch size must be positive");

    println!(
        "Seeding {} listings using a batch size of {}...",
        opts.number, opts.batch_size
    );
    let started = Instant::now();

    println!("Clearing old listing data...");
    let removed = repo::delete_all(db).await?;
    if removed > 0 {
        println!("Removed {removed} existing listings.");
    }

    let owner = owner_user(db).await?;

    let mut rng = rand::thread_rng();
    let mut total: u64 = 0;
    for chunk in batch_plan(opts.number, opts.batch_size) {
        let batch: Vec<NewListing> = (0..chunk).map(|_| generate::listing(&mut rng)).collect();
        repo::insert_batch(db, owner.id, &batch).await?;
        total += u64::from(chunk);
        println!("Inserted batch. Total created: {total} / {}", opts.number);
    }

    println!(
        "Successfully seeded the database with {total} listings in {:.2} seconds.",
        started.elapsed().as_secs_f64()
    );
    Ok(total)
}

/// The designated owner for seeded listings: reused when present, created
/// otherwise.
async fn owner_user(db: &PgPool) -> anyhow::Result<User> {
    let hash = hash_password("password")?;
    let (user, created) = User::get_or_create(db, OWNER_EMAIL, &hash).await?;
    if created {
        println!("Created default user '{OWNER_EMAIL}'.");
    } else {
        println!("Using existing default user '{OWNER_EMAIL}'.");
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_full_batches_and_remainder() {
        assert_eq!(batch_plan(25, 10), vec![10, 10, 5]);
    }

    #[test]
    fn exact_multiple_has_no_partial_batch() {
        assert_eq!(batch_plan(20, 10), vec![10, 10]);
    }

    #[test]
    fn zero_count_means_zero_batches() {
        assert!(batch_plan(0, 10).is_empty());
    }

    #[test]
    fn count_below_batch_size_yields_single_partial_batch() {
        assert_eq!(batch_plan(7, 10), vec![7]);
    }

    #[test]
    fn batch_count_is_ceiling_of_count_over_size() {
        for (number, batch_size) in [(1, 1), (999, 100), (1_000, 100), (1_001, 100), (50_000, 10_000)] {
            let plan = batch_plan(number, batch_size);
            assert_eq!(plan.len() as u32, number.div_ceil(batch_size));
            assert_eq!(plan.iter().sum::<u32>(), number);
            // only the final batch may be short
            for chunk in plan.iter().take(plan.len().saturating_sub(1)) {
                assert_eq!(*chunk, batch_size);
            }
        }
    }

    #[test]
    #[should_panic(expected = "batch_size must be positive")]
    fn zero_batch_size_is_rejected() {
        batch_plan(10, 0);
    }
}
