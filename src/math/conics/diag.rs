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

use orbis_array_types::{M2, M22, V2};

/// A symmetric 2x2 matrix `S` written as `C D Cᵗ`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Diagonalization2 {
    /// Diagonal matrix of eigenvalues.
    pub diagonal: M22,
    /// Rotation whose columns are the unit eigenvectors, in the same order
    /// as the eigenvalues.
    pub rotation: M22,
}

impl Diagonalization2 {
    pub fn eigenvalues(&self) -> [f64; 2]
    { [self.diagonal[0][0], self.diagonal[1][1]] }

    /// The unit eigenvector belonging to eigenvalue `i`.
    pub fn eigenvector(&self, i: usize) -> V2
    { self.rotation.col(i) }
}

/// Diagonalize a symmetric 2x2 matrix.
///
/// The output satisfies `Cᵗ S C = D` up to rounding, where `C` is a rotation
/// matrix. Only `s[0][0]`, `s[0][1]` and `s[1][1]` are read; symmetry is the
/// caller's responsibility.
///
/// The eigenvalues are not sorted. When `S` is already diagonal (which
/// includes the zero matrix), `D` is `S` itself and `C` is the identity.
pub fn diags2(s: &M22) -> Diagonalization2
{
    let (a, b, c) = (s[0][0], s[0][1], s[1][1]);

    if b == 0.0 {
        return Diagonalization2 {
            diagonal: diagonal(a, c),
            rotation: M22::eye(),
        };
    }

    // Work with entries of magnitude at most 1 so that none of the squares
    // below can overflow or underflow.
    let scale = f64::max(a.abs(), f64::max(b.abs(), c.abs()));
    let (a, b, c) = (a / scale, b / scale, c / scale);

    // Eigenvalues are mean ± disc. Compute the one of larger magnitude
    // directly (no cancellation), and get the other from the determinant.
    let mean = 0.5 * (a + c);
    let disc = f64::hypot(0.5 * (a - c), b);
    let big = if mean >= 0.0 { mean + disc } else { mean - disc };
    let small = (a * c - b * b) / big;

    // Both rows of (S - big I) are orthogonal to the eigenvector; take the
    // perpendicular to whichever row is better conditioned.
    let from_row_0 = V2([b, big - a]);
    let from_row_1 = V2([big - c, b]);
    let max_abs = |v: &V2| f64::max(v[0].abs(), v[1].abs());
    let v = match max_abs(&from_row_0) >= max_abs(&from_row_1) {
        true => from_row_0,
        false => from_row_1,
    };
    // (hypot, because b may be small enough for its square to underflow)
    let u = v / f64::hypot(v[0], v[1]);

    Diagonalization2 {
        diagonal: diagonal(big * scale, small * scale),
        rotation: M2([
            V2([u[0], -u[1]]),
            V2([u[1], u[0]]),
        ]),
    }
}

fn diagonal(d0: f64, d1: f64) -> M22
{ M2([V2([d0, 0.0]), V2([0.0, d1])]) }
