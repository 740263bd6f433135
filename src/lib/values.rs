//! Deterministic array contents.
//!
//! Every generated array is an arithmetic progression laid out row-major:
//! floats get a fractional step so they can't be mistaken for an integer
//! fixture, integers a step of 17 starting below zero so unsigned types wrap.

use ndarray::{ArrayD, IxDyn};

use crate::array::{ArrayData, FixtureArray};
use crate::dtype::{Dtype, Kind};
use crate::error::{FixtureError, Result};

const FLOAT_STEP: f64 = 1.25;
const FLOAT_OFFSET: f64 = 3.0;
const INT_STEP: i64 = 17;
const INT_OFFSET: i64 = 5;

fn reshape<T>(shape: &[usize], values: Vec<T>) -> Result<ArrayD<T>> {
    Ok(ArrayD::from_shape_vec(IxDyn(shape), values)?)
}

/// Narrows each value with `as`, i.e. two's complement truncation
/// (`-5i64 as u8` is 251).
fn narrow<T, F: Fn(i64) -> T>(shape: &[usize], base: &[i64], cast: F) -> Result<ArrayD<T>> {
    reshape(shape, base.iter().map(|&v| cast(v)).collect())
}

/// Generates the progression for `shape` narrowed to `dtype`.
pub fn make_values(shape: &[usize], dtype: Dtype) -> Result<FixtureArray> {
    let n: usize = shape.iter().product();

    let data = match dtype.kind {
        Kind::Float => {
            let base: Vec<f64> = (0..n).map(|k| k as f64 * FLOAT_STEP - FLOAT_OFFSET).collect();
            match dtype.width {
                4 => ArrayData::F4(reshape(shape, base.iter().map(|&v| v as f32).collect())?),
                8 => ArrayData::F8(reshape(shape, base)?),
                _ => return Err(FixtureError::UnsupportedDtype(dtype.descr())),
            }
        }
        Kind::Unsigned | Kind::Signed => {
            let base: Vec<i64> = (0..n as i64).map(|k| k * INT_STEP - INT_OFFSET).collect();
            match (dtype.kind, dtype.width) {
                (Kind::Unsigned, 1) => ArrayData::U1(narrow(shape, &base, |v| v as u8)?),
                (Kind::Unsigned, 2) => ArrayData::U2(narrow(shape, &base, |v| v as u16)?),
                (Kind::Unsigned, 4) => ArrayData::U4(narrow(shape, &base, |v| v as u32)?),
                (Kind::Unsigned, 8) => ArrayData::U8(narrow(shape, &base, |v| v as u64)?),
                (Kind::Signed, 1) => ArrayData::I1(narrow(shape, &base, |v| v as i8)?),
                (Kind::Signed, 2) => ArrayData::I2(narrow(shape, &base, |v| v as i16)?),
                (Kind::Signed, 4) => ArrayData::I4(narrow(shape, &base, |v| v as i32)?),
                (Kind::Signed, 8) => ArrayData::I8(reshape(shape, base)?),
                _ => return Err(FixtureError::UnsupportedDtype(dtype.descr())),
            }
        }
        Kind::Bool | Kind::Complex => {
            return Err(FixtureError::UnsupportedDtypeKind(dtype.descr()));
        }
    };

    debug!("generated {} values of {} for shape {:?}", n, dtype.descr(), shape);
    Ok(FixtureArray::new(dtype, data))
}

/// The hand-written reference fixture `[[1, 2, 3], [4, 5, 6]]` as `<i4`.
pub fn manual_values() -> Result<FixtureArray> {
    let dtype: Dtype = "<i4".parse()?;
    let arr = reshape(&[2, 3], vec![1i32, 2, 3, 4, 5, 6])?;
    Ok(FixtureArray::new(dtype, ArrayData::I4(arr)))
}
