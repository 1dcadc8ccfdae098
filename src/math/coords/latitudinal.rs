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

/// Latitudinal coordinates, with latitude measured from the xy plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Latitudinal {
    pub radius: f64,
    /// Angle from the +x axis towards +y, in `(-π, π]`.
    pub longitude: f64,
    /// Angle above the xy plane, in `[-π/2, π/2]`.
    pub latitude: f64,
}

impl Curvilinear for Latitudinal {
    fn from_components(V3([radius, longitude, latitude]): V3) -> Self
    { Latitudinal { radius, longitude, latitude } }

    fn components(&self) -> V3
    { V3([self.radius, self.longitude, self.latitude]) }

    fn to_rectangular(&self) -> V3
    {
        let Latitudinal { radius: r, longitude, latitude } = *self;
        V3([
            r * longitude.cos() * latitude.cos(),
            r * longitude.sin() * latitude.cos(),
            r * latitude.sin(),
        ])
    }

    fn from_rectangular(rect: &V3) -> Self
    {
        let &V3([x, y, z]) = rect;
        let rho = x.hypot(y);
        let radius = rho.hypot(z);
        if radius == 0.0 {
            return Latitudinal { radius, longitude: 0.0, latitude: 0.0 };
        }

        let latitude = z.atan2(rho);
        let longitude = match rho == 0.0 {
            true => 0.0,
            false => y.atan2(x),
        };
        Latitudinal { radius, longitude, latitude }
    }

    fn jacobian_to_rectangular(&self) -> M33
    { drdlat(self.radius, self.longitude, self.latitude) }

    fn jacobian_from_rectangular(rect: &V3) -> CoordsResult<M33>
    { dlatdr(rect[0], rect[1], rect[2]) }
}

/// Jacobian of the latitudinal-to-rectangular conversion at `(r, lon, lat)`.
///
/// Rows are `x, y, z`; columns are `r, lon, lat`.
pub fn drdlat(r: f64, lon: f64, lat: f64) -> M33
{
    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    M3([
        V3([cos_lon * cos_lat, -r * sin_lon * cos_lat, -r * cos_lon * sin_lat]),
        V3([sin_lon * cos_lat, r * cos_lon * cos_lat, -r * sin_lon * sin_lat]),
        V3([sin_lat, 0.0, r * cos_lat]),
    ])
}

/// Jacobian of the rectangular-to-latitudinal conversion at `(x, y, z)`.
///
/// Rows are `r, lon, lat`; columns are `x, y, z`.
///
/// # Errors
///
/// [`crate::CoordsError::PointOnZAxis`] if `x = y = 0`, or if the point is
/// so close to the z-axis that the derivatives are not representable.
pub fn dlatdr(x: f64, y: f64, z: f64) -> CoordsResult<M33>
{
    let point = V3([x, y, z]);
    check_off_z_axis(&point)?;

    let rho = x.hypot(y);
    let r = rho.hypot(z);
    let (cos_lon, sin_lon) = (x / rho, y / rho);
    let (cos_lat, sin_lat) = (rho / r, z / r);

    check_finite(&point, M3([
        V3([cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]),
        V3([-sin_lon / rho, cos_lon / rho, 0.0]),
        V3([-sin_lat * cos_lon / r, -sin_lat * sin_lon / r, cos_lat / r]),
    ]))
}
