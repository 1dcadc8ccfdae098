//! Linear-algebra and coordinate-geometry kernels.
//!
//! This crate only re-exports the workspace members, for the convenience of
//! the integration tests and of anyone who wants the whole lot at once.

pub use orbis_array_types as array_types;
pub use orbis_matrix as matrix;
pub use orbis_conics as conics;
pub use orbis_coords as coords;
pub use orbis_tasks as tasks;

pub use orbis_array_types::{V2, V3, M22, M33};
pub use orbis_matrix::{Matrix, MatrixError, mtxmg};
pub use orbis_conics::{diags2, saelgv, Ellipse};
pub use orbis_coords::{Curvilinear, CoordsError, drdsph};
