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

use orbis_array_types::{M3, M33, V3};

use crate::{Curvilinear, CoordsResult};
use crate::error::{check_finite, check_off_z_axis};

/// Spherical coordinates, measured from the +z axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    /// Angle from the +z axis, in `[0, π]`.
    pub colatitude: f64,
    /// Angle from the +x axis towards +y, in `(-π, π]`.
    pub longitude: f64,
}

impl Curvilinear for Spherical {
    fn from_components(V3([radius, colatitude, longitude]): V3) -> Self
    { Spherical { radius, colatitude, longitude } }

    fn components(&self) -> V3
    { V3([self.radius, self.colatitude, self.longitude]) }

    fn to_rectangular(&self) -> V3
    {
        let Spherical { radius: r, colatitude, longitude } = *self;
        V3([
            r * longitude.cos() * colatitude.sin(),
            r * longitude.sin() * colatitude.sin(),
            r * colatitude.cos(),
        ])
    }

    fn from_rectangular(rect: &V3) -> Self
    {
        let &V3([x, y, z]) = rect;
        let rho = x.hypot(y);
        let radius = rho.hypot(z);
        if radius == 0.0 {
            return Spherical { radius, colatitude: 0.0, longitude: 0.0 };
        }

        let colatitude = rho.atan2(z);
        let longitude = match rho == 0.0 {
            true => 0.0,
            false => y.atan2(x),
        };
        Spherical { radius, colatitude, longitude }
    }

    fn jacobian_to_rectangular(&self) -> M33
    { drdsph(self.radius, self.colatitude, self.longitude) }

    fn jacobian_from_rectangular(rect: &V3) -> CoordsResult<M33>
    { dsphdr(rect[0], rect[1], rect[2]) }
}

/// Jacobian of the spherical-to-rectangular conversion at `(r, colat, slon)`.
///
/// Rows are `x, y, z`; columns are `r, colat, slon`.
pub fn drdsph(r: f64, colat: f64, slon: f64) -> M33
{
    let (sin_colat, cos_colat) = colat.sin_cos();
    let (sin_lon, cos_lon) = slon.sin_cos();

    M3([
        V3([cos_lon * sin_colat, r * cos_lon * cos_colat, -r * sin_lon * sin_colat]),
        V3([sin_lon * sin_colat, r * sin_lon * cos_colat, r * cos_lon * sin_colat]),
        V3([cos_colat, -r * sin_colat, 0.0]),
    ])
}

/// Jacobian of the rectangular-to-spherical conversion at `(x, y, z)`.
///
/// Rows are `r, colat, slon`; columns are `x, y, z`.
///
/// # Errors
///
/// [`crate::CoordsError::PointOnZAxis`] if `x = y = 0`, or if the point is
/// so close to the z-axis that the derivatives are not representable.
pub fn dsphdr(x: f64, y: f64, z: f64) -> CoordsResult<M33>
{
    let point = V3([x, y, z]);
    check_off_z_axis(&point)?;

    // work with ratios of lengths; squared lengths under- and overflow
    let rho = x.hypot(y);
    let r = rho.hypot(z);
    let (cos_lon, sin_lon) = (x / rho, y / rho);
    let (sin_colat, cos_colat) = (rho / r, z / r);

    check_finite(&point, M3([
        V3([sin_colat * cos_lon, sin_colat * sin_lon, cos_colat]),
        V3([cos_colat * cos_lon / r, cos_colat * sin_lon / r, -sin_colat / r]),
        V3([-sin_lon / rho, cos_lon / rho, 0.0]),
    ]))
}
