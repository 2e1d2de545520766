use serde::{Deserialize, Serialize};

/// External representation of a composite figure: the shapes feeding the
/// centroid engine and, separately, those feeding the inertia engine.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct ExtFigure {
    /// Shapes accumulated by the centroid engine
    #[serde(default)]
    pub shapes: Vec<ExtShape>,
    /// Shapes accumulated by the inertia engine
    #[serde(default)]
    pub inertia_shapes: Vec<ExtInertiaShape>,
}

/// Various shapes a figure can be built from.
/// Absent numeric fields default to 0, an absent `cutout` flag to false.
#[derive(Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    /// Rectangle anchored at (x, y) in user space
    Rectangle {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        length: f64,
        #[serde(default)]
        width: f64,
        #[serde(default)]
        cutout: bool,
    },
    /// Circle centered at (x, y)
    Circle {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        radius: f64,
        #[serde(default)]
        cutout: bool,
    },
    /// Triangle over three vertices
    Triangle {
        #[serde(default)]
        x1: f64,
        #[serde(default)]
        y1: f64,
        #[serde(default)]
        x2: f64,
        #[serde(default)]
        y2: f64,
        #[serde(default)]
        x3: f64,
        #[serde(default)]
        y3: f64,
        #[serde(default)]
        cutout: bool,
    },
    /// Half-disc with its flat edge anchored at (x, y)
    SemiCircle {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        radius: f64,
        #[serde(default)]
        cutout: bool,
    },
    /// Closed polygon over its vertex list. Area-only
    Polygon {
        #[serde(default)]
        vertices: Vec<(f64, f64)>,
        #[serde(default)]
        cutout: bool,
    },
}

/// Shapes feeding the inertia engine. The triangle is given as a base/height
/// profile anchored at its centroid, not as three vertices.
#[derive(Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ExtInertiaShape {
    Rectangle {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        length: f64,
        #[serde(default)]
        width: f64,
        #[serde(default)]
        cutout: bool,
    },
    Circle {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        radius: f64,
        #[serde(default)]
        cutout: bool,
    },
    Triangle {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        base: f64,
        #[serde(default)]
        height: f64,
        #[serde(default)]
        cutout: bool,
    },
    SemiCircle {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        radius: f64,
        #[serde(default)]
        cutout: bool,
    },
}
