//! Elevation data access.
//!
//! The contour pipeline only sees the [`ElevationProvider`] trait. The
//! production implementation talks to the Google Maps Elevation API:
//!
//! ```text
//! fetch_elevations(points)
//!      │
//!      ├─► split into batches of at most `batch_size` points
//!      │
//!      ├─► encode each batch as a polyline, GET ?locations=enc:...
//!      │         (up to `max_concurrent_batches` in flight)
//!      │
//!      └─► reassemble samples in submission order
//! ```

pub mod batch;
pub mod google;
pub mod polyline;
pub mod provider;

pub use batch::{create_batches, fetch_in_batches};
pub use google::{GoogleElevationProvider, GoogleProviderConfig};
pub use provider::ElevationProvider;
