//! Request batching for providers with a per-request point limit.

use std::future::Future;

use futures::stream::{self, StreamExt, TryStreamExt};
use terrain_common::{ElevationSample, GeoPoint, ProviderError};
use tracing::debug;

/// Split points into consecutive batches of at most `batch_size` points.
pub fn create_batches(points: &[GeoPoint], batch_size: usize) -> Vec<&[GeoPoint]> {
    points.chunks(batch_size.max(1)).collect()
}

/// Fetch all points batch by batch and concatenate the results.
///
/// Up to `max_concurrent` batches are in flight at once. Results are
/// yielded in submission order regardless of completion order, and the
/// first failing batch aborts the remaining ones.
pub async fn fetch_in_batches<'a, F, Fut>(
    points: &'a [GeoPoint],
    batch_size: usize,
    max_concurrent: usize,
    fetch_batch: F,
) -> Result<Vec<ElevationSample>, ProviderError>
where
    F: Fn(usize, &'a [GeoPoint]) -> Fut,
    Fut: Future<Output = Result<Vec<ElevationSample>, ProviderError>>,
{
    let batches = create_batches(points, batch_size);
    debug!(
        points = points.len(),
        batches = batches.len(),
        max_concurrent = max_concurrent,
        "Fetching elevations in batches"
    );

    // Requests are lazy; the stream must not hold a closure borrowing `fetch_batch`.
    let requests: Vec<Fut> = batches
        .into_iter()
        .enumerate()
        .map(|(index, batch)| fetch_batch(index, batch))
        .collect();

    let results: Vec<Vec<ElevationSample>> = stream::iter(requests)
        .buffered(max_concurrent.max(1))
        .try_collect()
        .await?;

    Ok(results.into_iter().flatten().collect())
}
