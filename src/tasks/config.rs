//! Job files for `orbis batch`.
//!
//! The functions here make use of serde_ignored to catch typos in the config.

// NOTE: Please make sure to use the YamlRead trait!
//       Going through serde_yaml::from_reader directly skips the check
//       for unused keys.

use crate::FailResult;

use std::io::Read;
use std::str::FromStr;

use orbis_array_types::V3;

/// Provides an alternative to serde_yaml::from_reader that warns about
/// config keys that were never read.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, serde_yaml::Error> {
        // serde_ignored needs a Deserializer.
        // serde_yaml doesn't expose one that is constructable from a Read,
        // but it does impl Deserializer for Value.
        Self::from_value(serde_yaml::from_reader(r)?)
    }

    fn from_value(value: serde_yaml::Value) -> Result<Self, serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl YamlRead for $Type {
            fn from_value(value: serde_yaml::Value) -> Result<$Type, serde_yaml::Error> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                )
            }
        }
    };
}

derive_yaml_read!{Job}

/// A batch of independent computations.
///
/// Every section is optional.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Job {
    #[serde(default)]
    pub ellipses: Vec<EllipseJob>,

    #[serde(default)]
    pub jacobians: Vec<JacobianJob>,

    #[serde(default)]
    pub products: Vec<ProductJob>,
}

/// Find the semi-axes of `{center + cos θ vec1 + sin θ vec2}`.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct EllipseJob {
    pub vec1: V3,
    pub vec2: V3,

    /// Defaults to the origin.
    #[serde(default)]
    pub center: Option<V3>,
}

/// Evaluate a conversion Jacobian at a point.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct JacobianJob {
    pub system: System,
    pub direction: Direction,

    /// Given in the coordinates of the conversion's input. That is, curvilinear
    /// components for `to-rect`, and rectangular ones for `from-rect`.
    pub point: V3,
}

/// Multiply two matrices given as lists of rows.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ProductJob {
    pub kind: ProductKind,
    pub m1: Vec<Vec<f64>>,
    pub m2: Vec<Vec<f64>>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum System {
    Spherical,
    Cylindrical,
    Latitudinal,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Derivatives of rectangular coordinates by curvilinear ones.
    ToRect,
    /// Derivatives of curvilinear coordinates by rectangular ones.
    FromRect,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProductKind {
    /// `m1ᵗ m2`
    Mtxm,
    /// `m1 m2`
    Mxm,
    /// `m1 m2ᵗ`
    Mxmt,
}

impl System {
    pub const NAMES: &'static [&'static str] = &["spherical", "cylindrical", "latitudinal"];
}

impl Direction {
    pub const NAMES: &'static [&'static str] = &["to-rect", "from-rect"];
}

impl FromStr for System {
    type Err = failure::Error;

    fn from_str(s: &str) -> FailResult<System> {
        Ok(match s {
            "spherical" => System::Spherical,
            "cylindrical" => System::Cylindrical,
            "latitudinal" => System::Latitudinal,
            _ => bail!("unknown coordinate system: {:?}", s),
        })
    }
}

impl FromStr for Direction {
    type Err = failure::Error;

    fn from_str(s: &str) -> FailResult<Direction> {
        Ok(match s {
            "to-rect" => Direction::ToRect,
            "from-rect" => Direction::FromRect,
            _ => bail!("unknown Jacobian direction: {:?}", s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_job() {
        let yaml = "\
ellipses:
  - vec1: [1, 1, 1]
    vec2: [1, -1, 1]
  - vec1: [1, 0, 0]
    vec2: [0, 2, 0]
    center: [0, 0, 5]
jacobians:
  - system: latitudinal
    direction: from-rect
    point: [1.0, 2.0, 3.0]
products:
  - kind: mxmt
    m1: [[1, 2], [3, 4]]
    m2: [[5, 6]]
";
        let job = Job::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(job.ellipses.len(), 2);
        assert_eq!(job.ellipses[0].center, None);
        assert_eq!(job.ellipses[1].center, Some(V3([0.0, 0.0, 5.0])));
        assert_eq!(job.jacobians[0], JacobianJob {
            system: System::Latitudinal,
            direction: Direction::FromRect,
            point: V3([1.0, 2.0, 3.0]),
        });
        assert_eq!(job.products[0].kind, ProductKind::Mxmt);
        assert_eq!(job.products[0].m2, vec![vec![5.0, 6.0]]);
    }

    #[test]
    fn sections_are_optional() {
        let job = Job::from_reader("products: []".as_bytes()).unwrap();
        assert_eq!(job, Job::default());
    }

    #[test]
    fn unused_keys_are_not_fatal() {
        let job = Job::from_reader("jacobeans: []\nellipses: []".as_bytes()).unwrap();
        assert_eq!(job, Job::default());
    }

    #[test]
    fn bad_values() {
        assert!(Job::from_reader("products: [{kind: mtmx, m1: [], m2: []}]".as_bytes()).is_err());
        assert!(Job::from_reader("ellipses: [{vec1: [1, 2], vec2: [1, 2, 3]}]".as_bytes()).is_err());
    }

    #[test]
    fn cli_names() {
        for &name in System::NAMES {
            let system: System = name.parse().unwrap();
            assert_eq!(serde_json::to_string(&system).unwrap(), format!("{:?}", name));
        }
        for &name in Direction::NAMES {
            let direction: Direction = name.parse().unwrap();
            assert_eq!(serde_json::to_string(&direction).unwrap(), format!("{:?}", name));
        }
        assert!("polar".parse::<System>().is_err());
    }
}
