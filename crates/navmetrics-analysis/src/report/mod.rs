//! Export and presentation of computed metrics.
//!
//! [`MetricsSnapshot`] is the canonical form; everything else here
//! ([`RankedView`], [`render_summary`], [`SiteComparison`]) only reads it.

pub mod compare;
pub mod ranking;
pub mod snapshot;
pub mod summary;

pub use compare::{ComparisonSide, SiteComparison};
pub use ranking::{RankedNode, RankedView};
pub use snapshot::{GraphInfo, MetricsSnapshot};
pub use summary::{ClusteringRating, PathRating, SummaryReport, render_summary};
