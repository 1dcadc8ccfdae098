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

use std::f64::consts::PI;

use orbis_array_types::{M3, M33, V3};

use crate::{Curvilinear, CoordsResult};
use crate::error::{check_finite, check_off_z_axis};

/// Cylindrical coordinates about the z axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cylindrical {
    /// Distance from the z axis.
    pub radius: f64,
    /// Angle from the +x axis towards +y, in `[0, 2π)`.
    pub longitude: f64,
    pub z: f64,
}

impl Curvilinear for Cylindrical {
    fn from_components(V3([radius, longitude, z]): V3) -> Self
    { Cylindrical { radius, longitude, z } }

    fn components(&self) -> V3
    { V3([self.radius, self.longitude, self.z]) }

    fn to_rectangular(&self) -> V3
    {
        let (sin, cos) = self.longitude.sin_cos();
        V3([self.radius * cos, self.radius * sin, self.z])
    }

    fn from_rectangular(rect: &V3) -> Self
    {
        let &V3([x, y, z]) = rect;
        let radius = x.hypot(y);
        let longitude = match radius == 0.0 {
            true => 0.0,
            false => {
                let lon = y.atan2(x);
                if lon < 0.0 { lon + 2.0 * PI } else { lon }
            },
        };
        Cylindrical { radius, longitude, z }
    }

    fn jacobian_to_rectangular(&self) -> M33
    { drdcyl(self.radius, self.longitude, self.z) }

    fn jacobian_from_rectangular(rect: &V3) -> CoordsResult<M33>
    { dcyldr(rect[0], rect[1], rect[2]) }
}

/// Jacobian of the cylindrical-to-rectangular conversion at `(r, lon, z)`.
///
/// Rows are `x, y, z`; columns are `r, lon, z`. Note that the result does
/// not depend on `z`.
pub fn drdcyl(r: f64, lon: f64, _z: f64) -> M33
{
    let (sin, cos) = lon.sin_cos();
    M3([
        V3([cos, -r * sin, 0.0]),
        V3([sin, r * cos, 0.0]),
        V3([0.0, 0.0, 1.0]),
    ])
}

/// Jacobian of the rectangular-to-cylindrical conversion at `(x, y, z)`.
///
/// Rows are `r, lon, z`; columns are `x, y, z`.
///
/// # Errors
///
/// [`crate::CoordsError::PointOnZAxis`] if `x = y = 0`, or if the point is
/// so close to the z-axis that the derivatives are not representable.
pub fn dcyldr(x: f64, y: f64, z: f64) -> CoordsResult<M33>
{
    let point = V3([x, y, z]);
    check_off_z_axis(&point)?;

    let rho = x.hypot(y);
    let (cos_lon, sin_lon) = (x / rho, y / rho);
    check_finite(&point, M3([
        V3([cos_lon, sin_lon, 0.0]),
        V3([-sin_lon / rho, cos_lon / rho, 0.0]),
        V3([0.0, 0.0, 1.0]),
    ]))
}
