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

use log::trace;

use orbis_array_types::{lin_comb, M2, V2, V3};

use crate::diag::{diags2, Diagonalization2};

/// Find the semi-axes of the ellipse generated by `vec1` and `vec2`.
///
/// The ellipse is the set of points `cos θ vec1 + sin θ vec2`. The return
/// value is `(semi_major, semi_minor)`:
///
/// * the two axes are orthogonal;
/// * `|semi_major| >= |semi_minor|`;
/// * either may be the zero vector (the minor axis is zero whenever the
///   generators are linearly dependent, and both are zero if both generators
///   are).
///
/// The sign of each axis is deterministic, but otherwise unspecified.
pub fn saelgv(vec1: &V3, vec2: &V3) -> (V3, V3)
{
    let scale = f64::max(norm(vec1), norm(vec2));
    if scale == 0.0 {
        trace!("both generating vectors are zero; semi-axes are zero");
        return (V3::zero(), V3::zero());
    }

    // Dividing (rather than multiplying by a reciprocal) keeps the scaled
    // vectors exact for power-of-two scales.
    let v1 = vec1 / scale;
    let v2 = vec2 / scale;

    // The ellipse is the image of the unit circle under the 3x2 matrix
    // [v1 v2]. Its semi-axes are the images of the eigenvectors of the Gram
    // matrix, and the eigenvalues are their squared lengths.
    let cross_term = V3::dot(&v1, &v2);
    let gram = M2([
        V2([V3::dot(&v1, &v1), cross_term]),
        V2([cross_term, V3::dot(&v2, &v2)]),
    ]);
    let Diagonalization2 { diagonal, rotation } = diags2(&gram);

    // on a tie the first eigenvector is the major axis
    let (major, minor) = match diagonal[0][0].abs() >= diagonal[1][1].abs() {
        true => (0, 1),
        false => (1, 0),
    };
    let axis = |i: usize| lin_comb(rotation[0][i], &v1, rotation[1][i], &v2) * scale;

    (axis(major), axis(minor))
}

// Euclidean norm that survives components near the limits of f64.
fn norm(v: &V3) -> f64
{
    let max_abs = v.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()));
    match max_abs == 0.0 {
        true => 0.0,
        false => max_abs * (v / max_abs).norm(),
    }
}

/// Largest ratio of minor to major axis length regarded as zero.
const DEGENERACY_TOL: f64 = 16.0 * std::f64::EPSILON;

/// An ellipse in 3-space, stored in terms of its semi-axes.
///
/// Invariants: `semi_major` and `semi_minor` are orthogonal, and
/// `|semi_major| >= |semi_minor|`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipse {
    center: V3,
    semi_major: V3,
    semi_minor: V3,
}

impl Ellipse {
    /// The ellipse `{center + cos θ vec1 + sin θ vec2}`.
    ///
    /// `vec1` and `vec2` may be any generating pair, not necessarily orthogonal.
    pub fn from_generators(center: V3, vec1: V3, vec2: V3) -> Self
    {
        let (semi_major, semi_minor) = saelgv(&vec1, &vec2);
        Ellipse { center, semi_major, semi_minor }
    }

    pub fn center(&self) -> V3 { self.center }
    pub fn semi_major(&self) -> V3 { self.semi_major }
    pub fn semi_minor(&self) -> V3 { self.semi_minor }

    /// Get `(center, semi_major, semi_minor)`.
    ///
    /// The two axes are themselves a generating pair of the ellipse.
    pub fn generators(&self) -> (V3, V3, V3)
    { (self.center, self.semi_major, self.semi_minor) }

    /// The point `center + cos θ semi_major + sin θ semi_minor`.
    pub fn point_at(&self, theta: f64) -> V3
    { self.center + lin_comb(theta.cos(), &self.semi_major, theta.sin(), &self.semi_minor) }

    /// Whether the ellipse has collapsed to a segment or a point.
    ///
    /// This is the case when the generators are linearly dependent. Such
    /// generators still tend to leave a minor axis at the level of rounding
    /// error, so the minor axis is compared against the major one.
    pub fn is_degenerate(&self) -> bool
    { self.semi_minor.norm() <= DEGENERACY_TOL * self.semi_major.norm() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_v3(magnitude: f64) -> V3 {
        let mut rng = rand::thread_rng();
        V3::from_fn(|_| magnitude * rng.gen_range(-1.0, 1.0))
    }

    // Flip an axis so that its first nonzero component is positive.
    fn canonical_sign(v: V3) -> V3 {
        match v.iter().find(|&&x| x != 0.0) {
            Some(&x) if x < 0.0 => -v,
            _ => v,
        }
    }

    #[test]
    fn known_ellipse() {
        let (major, minor) = saelgv(&V3([1.0, 1.0, 1.0]), &V3([1.0, -1.0, 1.0]));
        let root2 = 2f64.sqrt();
        assert_close!(abs=1e-9, canonical_sign(major).0, [root2, 0.0, root2]);
        assert_close!(abs=1e-9, canonical_sign(minor).0, [0.0, root2, 0.0]);
    }

    #[test]
    fn already_axes() {
        // orthogonal generators are their own semi-axes, in size order
        let (major, minor) = saelgv(&V3([0.0, 1.0, 0.0]), &V3([3.0, 0.0, 0.0]));
        assert_close!(abs=1e-14, canonical_sign(major).0, [3.0, 0.0, 0.0]);
        assert_close!(abs=1e-14, canonical_sign(minor).0, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_generators() {
        let (major, minor) = saelgv(&V3::zero(), &V3::zero());
        assert_eq!(major, V3::zero());
        assert_eq!(minor, V3::zero());
    }

    #[test]
    fn one_zero_generator() {
        let v = V3([1.0, -2.0, 0.5]);
        let (major, minor) = saelgv(&V3::zero(), &v);
        assert_close!(abs=1e-15, canonical_sign(major).0, canonical_sign(v).0);
        assert_eq!(minor, V3::zero());
    }

    #[test]
    fn parallel_generators() {
        let v = V3([1.0, 2.0, 3.0]);
        let (major, minor) = saelgv(&v, &(v * 2.0));
        assert_close!(abs=1e-13, major.norm(), 5f64.sqrt() * v.norm());
        assert_close!(abs=1e-13, minor.norm(), 0.0);
        assert_close!(abs=1e-13, major.cross(&v).norm(), 0.0);
    }

    #[test]
    fn circle() {
        // equal eigenvalues; any orthogonal pair of radii will do
        let (major, minor) = saelgv(&V3([2.0, 0.0, 0.0]), &V3([0.0, 0.0, 2.0]));
        assert_close!(abs=1e-14, major.norm(), 2.0);
        assert_close!(abs=1e-14, minor.norm(), 2.0);
        assert_close!(abs=1e-14, V3::dot(&major, &minor), 0.0);
    }

    #[test]
    fn random_generators() {
        for &magnitude in &[1.0, 1e-200, 1e200] {
            for _ in 0..200 {
                let vec1 = random_v3(magnitude);
                let vec2 = random_v3(magnitude);
                let (major, minor) = saelgv(&vec1, &vec2);

                // work in units of the magnitude to keep the checks in range
                let (vec1, vec2) = (vec1 / magnitude, vec2 / magnitude);
                let (major, minor) = (major / magnitude, minor / magnitude);

                assert_close!(abs=1e-12, V3::dot(&major, &minor), 0.0);
                assert!(major.norm() >= minor.norm());

                // invariants of conjugate semi-diameters (Apollonius)
                assert_close!(
                    abs=1e-12,
                    major.sqnorm() + minor.sqnorm(),
                    vec1.sqnorm() + vec2.sqnorm(),
                );
                assert_close!(abs=1e-12, major.cross(&minor).norm(), vec1.cross(&vec2).norm());

                // the axes lie in the plane of the generators
                let normal = vec1.cross(&vec2);
                assert_close!(abs=1e-12, V3::dot(&major, &normal), 0.0);
                assert_close!(abs=1e-12, V3::dot(&minor, &normal), 0.0);
            }
        }
    }

    #[test]
    fn ellipse_points() {
        let center = V3([10.0, 0.0, -1.0]);
        let ellipse = Ellipse::from_generators(center, V3([1.0, 1.0, 1.0]), V3([1.0, -1.0, 1.0]));
        let (c, major, minor) = ellipse.generators();
        assert_eq!(c, center);
        assert_eq!(ellipse.point_at(0.0), center + major);
        assert_close!(abs=1e-14, ellipse.point_at(std::f64::consts::FRAC_PI_2).0, (center + minor).0);
        assert!(!ellipse.is_degenerate());

        // every point of the generator parametrization is on the ellipse
        for i in 0..16 {
            let theta = i as f64 * std::f64::consts::PI / 8.0;
            let p = lin_comb(theta.cos(), &V3([1.0, 1.0, 1.0]), theta.sin(), &V3([1.0, -1.0, 1.0]));
            let x = V3::dot(&p, &major) / major.sqnorm();
            let y = V3::dot(&p, &minor) / minor.sqnorm();
            assert_close!(abs=1e-14, x * x + y * y, 1.0);
        }
    }

    #[test]
    fn degenerate_ellipse() {
        let ellipse = Ellipse::from_generators(V3::zero(), V3([0.0, 4.0, 0.0]), V3::zero());
        assert!(ellipse.is_degenerate());
        assert_close!(abs=1e-15, ellipse.semi_major().norm(), 4.0);

        let point = Ellipse::from_generators(V3([1.0, 2.0, 3.0]), V3::zero(), V3::zero());
        assert!(point.is_degenerate());
        assert_eq!(point.point_at(1.234), V3([1.0, 2.0, 3.0]));
    }

    #[test]
    fn parallel_generators_are_degenerate() {
        let vs = [
            V3([0.3, -0.7, 0.1]),
            V3([0.1, 0.2, 0.3]),
            V3([1e5, 3.3, -2.1]),
            V3([1.0, 2.0, 3.0]),
            V3([1e-100, -4e-100, 2e-100]),
        ];
        for v in &vs {
            for &k in &[3.0, 7.0, 0.37, 2.0, -1.0, -12.5, 1e-3] {
                let ellipse = Ellipse::from_generators(V3::zero(), *v, *v * k);
                assert!(ellipse.is_degenerate(), "{:?} {:?} {:?}", v, k, ellipse);
                let ellipse = Ellipse::from_generators(V3::zero(), *v * k, *v);
                assert!(ellipse.is_degenerate(), "{:?} {:?} {:?}", v, k, ellipse);
            }
        }

        // thin, but not degenerate
        let ellipse = Ellipse::from_generators(V3::zero(), V3([1.0, 0.0, 0.0]), V3([1.0, 1e-6, 0.0]));
        assert!(!ellipse.is_degenerate());
    }
}
