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

use orbis_array_types::{V3, M33};

pub type CoordsResult<T> = Result<T, CoordsError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordsError {
    /// Derivatives of the longitude (and, for spherical coordinates, the
    /// colatitude) do not exist anywhere on the z-axis. Points close enough
    /// to the axis that the derivatives overflow are reported the same way.
    #[error("the Jacobian is undefined on the z-axis (point: {point:?})")]
    PointOnZAxis { point: V3 },
}

/// Shared guard for the rectangular-to-curvilinear Jacobians.
pub(crate) fn check_off_z_axis(point: &V3) -> CoordsResult<()>
{
    if point[0] == 0.0 && point[1] == 0.0 {
        log::trace!("rejecting point {:?} on the z-axis", point);
        return Err(CoordsError::PointOnZAxis { point: *point });
    }
    Ok(())
}

/// Rejects a Jacobian computed too close to the z-axis to be representable.
pub(crate) fn check_finite(point: &V3, jacobian: M33) -> CoordsResult<M33>
{
    if !jacobian.iter().all(|row| row.iter().all(|x| x.is_finite())) {
        log::trace!("Jacobian at {:?} is not finite", point);
        return Err(CoordsError::PointOnZAxis { point: *point });
    }
    Ok(jacobian)
}
