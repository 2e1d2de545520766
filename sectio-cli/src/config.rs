use serde::{Deserialize, Serialize};

/// Configuration for the sectio batch runner
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct SectioConfig {
    /// Screen-space point mapped to user-space (0,0)
    pub origin: (f64, f64),
    /// Reference axis point for the inertia reduction, as a user-space offset
    /// from the origin
    pub reference_axis: (f64, f64),
}

impl Default for SectioConfig {
    fn default() -> Self {
        Self {
            origin: (300.0, 200.0),
            reference_axis: (0.0, 0.0),
        }
    }
}
