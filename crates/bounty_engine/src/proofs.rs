use bounty_core::BountyRecord;
use futures_util::future::join_all;
use store_logging::store_warn;

use crate::BountyApi;

/// Fills each record's proof count from the proofs endpoint.
///
/// Lookups run concurrently. A failed lookup degrades that record to zero proofs
/// and never affects its siblings.
pub async fn annotate_proof_counts<A: BountyApi + ?Sized>(api: &A, records: &mut [BountyRecord]) {
    let lookups = records
        .iter()
        .map(|record| api.fetch_proof_count(record.body.id));
    let counts = join_all(lookups).await;

    for (record, count) in records.iter_mut().zip(counts) {
        let count = match count {
            Ok(count) => count,
            Err(err) => {
                store_warn!("Proof lookup for bounty {} failed: {}", record.body.id, err);
                0
            }
        };
        record.body.proof_count = Some(count);
    }
}
