use serde::{Deserialize, Serialize};

use sectio::centroid::Centroid;
use sectio::inertia::Inertia;

use crate::config::SectioConfig;

/// Bundled results of one batch run
#[derive(Serialize, Deserialize, Clone)]
pub struct SectioOutput {
    pub config: SectioConfig,
    /// Composite centroid; `valid` is false when the figure has zero net area
    pub centroid: Centroid,
    /// Second moments about the configured reference axis
    pub inertia: Inertia,
}
