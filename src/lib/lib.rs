//! Deterministic `.npy` fixtures for array reader tests.
//!
//! A fixed catalog of arrays covering dtypes, shapes, storage orders and
//! byte orders is generated and written with descriptive file names, e.g.
//! `shape_2x3__dtype_u4__order_F.npy`.

#[macro_use]
extern crate log;

pub mod error;
pub mod dtype;
#[macro_use]
pub mod array;
pub mod npy;
pub mod values;
pub mod fixture;
pub mod catalog;
pub mod settings;
pub mod utils;

pub use crate::array::{ArrayData, FixtureArray, Order};
pub use crate::catalog::{generate_all, generate_all_default};
pub use crate::dtype::{Dtype, Endian, Kind};
pub use crate::error::{FixtureError, Result};
pub use crate::fixture::save_fixture;
pub use crate::settings::Settings;
pub use crate::values::{make_values, manual_values};
