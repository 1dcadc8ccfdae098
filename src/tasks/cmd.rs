use crate::FailResult;
use crate::config::{Job, EllipseJob, ProductJob, System, Direction, ProductKind};

use failure::ResultExt;

use orbis_array_types::{M33, V3};
use orbis_conics::Ellipse;
use orbis_coords::{Curvilinear, CoordsResult, Spherical, Cylindrical, Latitudinal};
use orbis_matrix::Matrix;

/// Output of `orbis batch`, written as JSON.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct BatchOutput {
    pub ellipses: Vec<EllipseAxes>,
    pub jacobians: Vec<JacobianOutput>,
    pub products: Vec<Vec<Vec<f64>>>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct EllipseAxes {
    pub center: V3,
    pub semi_major: V3,
    pub semi_minor: V3,
    pub degenerate: bool,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct JacobianOutput {
    pub system: System,
    pub direction: Direction,
    pub point: V3,
    pub jacobian: M33,
}

pub fn run_batch(job: &Job) -> FailResult<BatchOutput>
{
    let Job { ellipses, jacobians, products } = job;
    info!(
        "Running {} ellipse, {} Jacobian, and {} product computations",
        ellipses.len(), jacobians.len(), products.len(),
    );

    let ellipses = ellipses.iter().map(ellipse_axes).collect();

    let jacobians = jacobians.iter().enumerate().map(|(i, job)| {
        let matrix = {
            jacobian(job.system, job.direction, &job.point)
                .with_context(|_| format!("in jacobians[{}]", i))?
        };
        Ok(JacobianOutput {
            system: job.system,
            direction: job.direction,
            point: job.point,
            jacobian: matrix,
        })
    }).collect::<FailResult<_>>()?;

    let products = products.iter().enumerate().map(|(i, job)| {
        Ok(product(job).with_context(|_| format!("in products[{}]", i))?)
    }).collect::<FailResult<_>>()?;

    Ok(BatchOutput { ellipses, jacobians, products })
}

pub fn ellipse_axes(job: &EllipseJob) -> EllipseAxes
{
    let center = job.center.unwrap_or_else(V3::zero);
    let ellipse = Ellipse::from_generators(center, job.vec1, job.vec2);
    if ellipse.is_degenerate() {
        debug!("ellipse generated by {:?} and {:?} is degenerate", job.vec1, job.vec2);
    }

    let (center, semi_major, semi_minor) = ellipse.generators();
    EllipseAxes { center, semi_major, semi_minor, degenerate: ellipse.is_degenerate() }
}

pub fn jacobian(system: System, direction: Direction, point: &V3) -> FailResult<M33>
{
    Ok(match system {
        System::Spherical => jacobian_in::<Spherical>(direction, point)?,
        System::Cylindrical => jacobian_in::<Cylindrical>(direction, point)?,
        System::Latitudinal => jacobian_in::<Latitudinal>(direction, point)?,
    })
}

fn jacobian_in<C: Curvilinear>(direction: Direction, point: &V3) -> CoordsResult<M33>
{
    match direction {
        Direction::ToRect => Ok(C::from_components(*point).jacobian_to_rectangular()),
        Direction::FromRect => C::jacobian_from_rectangular(point),
    }
}

/// Compute a product of matrices given as lists of rows.
pub fn product(job: &ProductJob) -> FailResult<Vec<Vec<f64>>>
{
    let m1 = Matrix::try_from_rows(job.m1.iter().map(|row| row.iter().cloned())).context("in m1")?;
    let m2 = Matrix::try_from_rows(job.m2.iter().map(|row| row.iter().cloned())).context("in m2")?;
    trace!("{:?} product of {:?} and {:?} matrices", job.kind, m1.dims(), m2.dims());

    let out = match job.kind {
        ProductKind::Mtxm => m1.tmul(&m2)?,
        ProductKind::Mxm => m1.matmul(&m2)?,
        ProductKind::Mxmt => m1.mul_t(&m2)?,
    };
    Ok(out.to_nested())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YamlRead;
    use crate::config::JacobianJob;

    fn full_message(err: &failure::Error) -> String {
        err.iter_chain().map(|fail| fail.to_string()).collect::<Vec<_>>().join(": ")
    }

    #[test]
    fn batch() {
        let job = Job::from_reader("\
ellipses:
  - vec1: [1, 1, 1]
    vec2: [1, -1, 1]
    center: [1, 2, 3]
jacobians:
  - system: spherical
    direction: to-rect
    point: [1, 1.5707963267948966, 0]
products:
  - kind: mtxm
    m1: [[1, 2], [3, 4]]
    m2: [[5, 6], [7, 8]]
".as_bytes()).unwrap();

        let output = run_batch(&job).unwrap();

        let axes = &output.ellipses[0];
        assert_eq!(axes.center, V3([1.0, 2.0, 3.0]));
        assert_close!(abs=1e-9, axes.semi_major.norm(), 2.0);
        assert_close!(abs=1e-9, axes.semi_minor.norm(), 2f64.sqrt());
        assert!(!axes.degenerate);

        let j = output.jacobians[0].jacobian;
        assert_close!(abs=1e-15, j[0][0], 1.0);
        assert_close!(abs=1e-15, j[2][1], -1.0);

        assert_eq!(output.products[0], vec![vec![26.0, 30.0], vec![38.0, 44.0]]);
    }

    #[test]
    fn batch_errors_say_where() {
        let job = Job {
            jacobians: vec![
                JacobianJob { system: System::Cylindrical, direction: Direction::FromRect, point: V3([1.0, 0.0, 0.0]) },
                JacobianJob { system: System::Cylindrical, direction: Direction::FromRect, point: V3([0.0, 0.0, 1.0]) },
            ],
            ..Job::default()
        };
        let message = full_message(&run_batch(&job).unwrap_err());
        assert!(message.contains("jacobians[1]"), "{}", message);
        assert!(message.contains("z-axis"), "{}", message);
    }

    #[test]
    fn product_shapes() {
        let job = |kind, m1: Vec<Vec<f64>>, m2: Vec<Vec<f64>>| ProductJob { kind, m1, m2 };

        // 1x2 and 1x3
        let out = product(&job(ProductKind::Mtxm, vec![vec![1.0, 2.0]], vec![vec![1.0, 0.0, -1.0]])).unwrap();
        assert_eq!(out, vec![vec![1.0, 0.0, -1.0], vec![2.0, 0.0, -2.0]]);

        // results without columns keep their rows
        let out = product(&job(ProductKind::Mtxm, vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![vec![], vec![]])).unwrap();
        assert_eq!(out, vec![Vec::<f64>::new(), vec![]]);
        let out = product(&job(ProductKind::Mxmt, vec![vec![], vec![], vec![]], vec![vec![]])).unwrap();
        assert_eq!(out, vec![vec![0.0], vec![0.0], vec![0.0]]);

        let err = product(&job(ProductKind::Mxm, vec![vec![1.0, 2.0]], vec![vec![1.0, 0.0, -1.0]])).unwrap_err();
        assert!(err.to_string().contains("cannot compute m1 m2"), "{}", err);

        let err = product(&job(ProductKind::Mxm, vec![vec![1.0, 2.0], vec![3.0]], vec![])).unwrap_err();
        assert_eq!(err.to_string(), "in m1");
        assert!(full_message(&err).contains("row 1 has 1 elements"), "{}", full_message(&err));
    }

    #[test]
    fn json_output() {
        let output = BatchOutput {
            ellipses: vec![ellipse_axes(&EllipseJob {
                vec1: V3([0.0, 1.0, 0.0]),
                vec2: V3([0.0, 0.0, 0.0]),
                center: None,
            })],
            ..BatchOutput::default()
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["ellipses"][0]["degenerate"], serde_json::json!(true));
        assert_eq!(json["ellipses"][0]["semi-major"], serde_json::json!([0.0, 1.0, 0.0]));
        assert_eq!(json["products"], serde_json::json!([]));
    }

    #[test]
    fn collinear_generators_are_reported() {
        let axes = ellipse_axes(&EllipseJob {
            vec1: V3([0.5, -1.5, 0.25]),
            vec2: V3([-1.5, 4.5, -0.75]),
            center: Some(V3([1.0, 1.0, 1.0])),
        });
        assert!(axes.degenerate);
    }
}
