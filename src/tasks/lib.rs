//! The `orbis` command-line program.
//!
//! Everything in here is pretty high-level glue around the library crates.

#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate failure;

#[cfg(test)]
#[macro_use]
extern crate orbis_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

mod logging;
mod config;
mod cmd;
pub mod entry_points;

pub use crate::config::{YamlRead, Job, EllipseJob, JacobianJob, ProductJob};
pub use crate::config::{System, Direction, ProductKind};
pub use crate::cmd::{run_batch, BatchOutput, EllipseAxes, JacobianOutput};
pub use crate::cmd::{ellipse_axes, jacobian, product};
