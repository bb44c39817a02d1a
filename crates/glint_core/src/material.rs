//! Surface material kinds.

use serde::{Deserialize, Serialize};

/// How a sphere's surface responds to an incoming ray.
///
/// The set is closed: the integrator matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Lambertian surface shaded by direct light only
    #[default]
    Diffuse,
    /// Perfect mirror
    Mirror,
    /// Clear dielectric that refracts (and reflects under TIR)
    Glass,
}
