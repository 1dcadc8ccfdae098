/* ************************************************************************ **
** This file is part of orbis, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of orbis is provided under this permissive         **
** license, and that the project as a whole is licensed under the GPL 3.0.  **
** ************************************************************************ */

//! Curvilinear coordinates.
//!
//! Three systems are supported, each a struct implementing [`Curvilinear`]:
//!
//! | System        | Components                          | Rectangular form |
//! |---------------|-------------------------------------|------------------|
//! | [`Spherical`]   | `radius`, `colatitude`, `longitude` | `(r cos φ sin θ, r sin φ sin θ, r cos θ)` |
//! | [`Cylindrical`] | `radius`, `longitude`, `z`          | `(r cos φ, r sin φ, z)` |
//! | [`Latitudinal`] | `radius`, `longitude`, `latitude`   | `(r cos φ cos δ, r sin φ cos δ, r sin δ)` |
//!
//! Jacobians follow the row-based formalism used throughout `orbis`:
//! `J[row][col]` is the derivative of output component `row` with respect to
//! input component `col`, so a velocity transforms as `J * v`.
//!
//! Angles are in radians.

#[cfg(test)]
#[macro_use]
extern crate orbis_assert_close;

pub use self::error::{CoordsError, CoordsResult};
pub use self::spherical::{Spherical, drdsph, dsphdr};
pub use self::cylindrical::{Cylindrical, drdcyl, dcyldr};
pub use self::latitudinal::{Latitudinal, drdlat, dlatdr};

mod error;
mod spherical;
mod cylindrical;
mod latitudinal;

use orbis_array_types::{M33, V3};

/// A coordinate system on 3-space, related to rectangular coordinates by a
/// smooth map.
pub trait Curvilinear: Sized {
    /// Build from components, in the order the fields are declared.
    fn from_components(components: V3) -> Self;

    /// The components, in the order the fields are declared.
    fn components(&self) -> V3;

    fn to_rectangular(&self) -> V3;

    /// Inverse of [`Curvilinear::to_rectangular`].
    ///
    /// Never fails. Where the angles are not uniquely determined (the origin,
    /// and for some systems the z-axis), the undetermined angles are zero.
    fn from_rectangular(rect: &V3) -> Self;

    /// Derivatives of the rectangular coordinates with respect to these ones,
    /// evaluated at this point.
    ///
    /// Defined everywhere, including points where the conversion is singular.
    fn jacobian_to_rectangular(&self) -> M33;

    /// Derivatives of these coordinates with respect to rectangular
    /// coordinates, evaluated at `rect`.
    ///
    /// # Errors
    ///
    /// [`CoordsError::PointOnZAxis`] if `rect` lies on the z-axis, where the
    /// longitude has no derivative.
    fn jacobian_from_rectangular(rect: &V3) -> CoordsResult<M33>;
}

/// Transform a velocity given in the coordinates of `point` to rectangular
/// coordinates.
pub fn velocity_to_rectangular<C: Curvilinear>(point: &C, velocity: &V3) -> V3
{ &point.jacobian_to_rectangular() * velocity }

/// Transform a rectangular velocity at `rect` into the coordinates of `C`.
///
/// # Errors
///
/// [`CoordsError::PointOnZAxis`] if `rect` lies on the z-axis.
pub fn velocity_from_rectangular<C: Curvilinear>(rect: &V3, velocity: &V3) -> CoordsResult<V3>
{ Ok(&C::jacobian_from_rectangular(rect)? * velocity) }

#[cfg(test)]
mod test_util {
    use super::*;
    use rand::Rng;

    pub fn uniform(lo: f64, hi: f64) -> f64
    { rand::thread_rng().gen_range(lo, hi) }

    /// Numerically differentiate `f` at `x` by central differences.
    pub fn numerical_jacobian<F>(f: F, x: &V3) -> M33
    where F: Fn(&V3) -> V3,
    {
        let step = 1e-6;
        let columns: Vec<V3> = (0..3).map(|col| {
            let mut plus = *x;
            let mut minus = *x;
            plus[col] += step;
            minus[col] -= step;
            (f(&plus) - f(&minus)) / (2.0 * step)
        }).collect();
        M33::from_fn(|row, col| columns[col][row])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::uniform;

    fn check_round_trip<C: Curvilinear>(point: C) {
        let velocity = V3([uniform(-1.0, 1.0), uniform(-1.0, 1.0), uniform(-1.0, 1.0)]);
        let rect = point.to_rectangular();
        let rect_velocity = velocity_to_rectangular(&point, &velocity);
        let back = velocity_from_rectangular::<C>(&rect, &rect_velocity).unwrap();
        assert_close!(abs=1e-10, back.0, velocity.0);
    }

    #[test]
    fn velocity_round_trip() {
        for _ in 0..100 {
            let radius = uniform(0.1, 10.0);
            let longitude = uniform(-3.0, 3.0);
            let polar = uniform(0.1, 3.0);

            check_round_trip(Spherical { radius, colatitude: polar, longitude });
            check_round_trip(Latitudinal { radius, longitude, latitude: polar - 1.57 });
            check_round_trip(Cylindrical { radius, longitude, z: uniform(-5.0, 5.0) });
        }
    }

    #[test]
    fn velocity_on_z_axis() {
        let rect = V3([0.0, 0.0, 2.0]);
        let velocity = V3([1.0, 0.0, 0.0]);
        assert_eq!(
            velocity_from_rectangular::<Spherical>(&rect, &velocity),
            Err(CoordsError::PointOnZAxis { point: rect }),
        );
        assert!(velocity_from_rectangular::<Cylindrical>(&rect, &velocity).is_err());
        assert!(velocity_from_rectangular::<Latitudinal>(&rect, &velocity).is_err());
    }

    #[test]
    fn error_message() {
        let err = CoordsError::PointOnZAxis { point: V3([0.0, 0.0, 1.0]) };
        assert!(err.to_string().contains("z-axis"));
    }
}
