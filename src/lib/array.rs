//! Typed in-memory arrays and their storage order.

use std::fmt;
use std::str::FromStr;

use ndarray::ArrayD;

use crate::dtype::Dtype;
use crate::error::{FixtureError, Result};

/// One variant per supported kind and width.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayData {
    U1(ArrayD<u8>),
    U2(ArrayD<u16>),
    U4(ArrayD<u32>),
    U8(ArrayD<u64>),
    I1(ArrayD<i8>),
    I2(ArrayD<i16>),
    I4(ArrayD<i32>),
    I8(ArrayD<i64>),
    F4(ArrayD<f32>),
    F8(ArrayD<f64>),
}

/// Runs `$body` with `$arr` bound to the typed array inside `$data`.
macro_rules! with_array {
    ($data:expr, $arr:ident => $body:expr) => {
        match $data {
            ArrayData::U1($arr) => $body,
            ArrayData::U2($arr) => $body,
            ArrayData::U4($arr) => $body,
            ArrayData::U8($arr) => $body,
            ArrayData::I1($arr) => $body,
            ArrayData::I2($arr) => $body,
            ArrayData::I4($arr) => $body,
            ArrayData::I8($arr) => $body,
            ArrayData::F4($arr) => $body,
            ArrayData::F8($arr) => $body,
        }
    };
}

/// Like `with_array!` but rewraps the result in the same variant.
macro_rules! map_array {
    ($data:expr, $arr:ident => $body:expr) => {
        match $data {
            ArrayData::U1($arr) => ArrayData::U1($body),
            ArrayData::U2($arr) => ArrayData::U2($body),
            ArrayData::U4($arr) => ArrayData::U4($body),
            ArrayData::U8($arr) => ArrayData::U8($body),
            ArrayData::I1($arr) => ArrayData::I1($body),
            ArrayData::I2($arr) => ArrayData::I2($body),
            ArrayData::I4($arr) => ArrayData::I4($body),
            ArrayData::I8($arr) => ArrayData::I8($body),
            ArrayData::F4($arr) => ArrayData::F4($body),
            ArrayData::F8($arr) => ArrayData::F8($body),
        }
    };
}

/// Memory layout of the backing storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// row-major, last axis varies fastest
    C,
    /// column-major, first axis varies fastest
    F,
}

impl FromStr for Order {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Order> {
        match s {
            "C" => Ok(Order::C),
            "F" => Ok(Order::F),
            _ => Err(FixtureError::UnsupportedOrder(s.to_owned())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Order::C => write!(f, "C"),
            Order::F => write!(f, "F"),
        }
    }
}

fn into_c_order<T: Clone>(arr: ArrayD<T>) -> ArrayD<T> {
    if arr.is_standard_layout() {
        arr
    } else {
        arr.as_standard_layout().into_owned()
    }
}

fn any_nonzero<T: Default + PartialEq>(arr: &ArrayD<T>) -> bool {
    let zero = T::default();
    arr.iter().any(|v| *v != zero)
}

/// Same logical array, column-major storage.
fn into_f_order<T: Clone>(arr: ArrayD<T>) -> ArrayD<T> {
    let t = arr.reversed_axes();
    let c = t.as_standard_layout().into_owned();
    c.reversed_axes()
}

/// A typed array together with the descriptor it is written with.
///
/// The descriptor carries the byte order; the element values are always
/// held in host representation.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureArray {
    dtype: Dtype,
    data: ArrayData,
}

impl FixtureArray {
    pub fn new(dtype: Dtype, data: ArrayData) -> FixtureArray {
        FixtureArray { dtype, data }
    }

    pub fn dtype(&self) -> Dtype {
        self.dtype
    }

    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    pub fn shape(&self) -> &[usize] {
        with_array!(&self.data, a => a.shape())
    }

    pub fn len(&self) -> usize {
        with_array!(&self.data, a => a.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// true if at least one element differs from zero
    pub fn any_nonzero(&self) -> bool {
        with_array!(&self.data, a => any_nonzero(a))
    }

    /// Row-major contiguity, length-1 axes ignored.
    pub fn is_c_contiguous(&self) -> bool {
        with_array!(&self.data, a => a.is_standard_layout())
    }

    /// Column-major contiguity, length-1 axes ignored.
    pub fn is_f_contiguous(&self) -> bool {
        with_array!(&self.data, a => a.t().is_standard_layout())
    }

    /// Value of the `fortran_order` header flag for this array.
    pub fn fortran_order(&self) -> bool {
        self.is_f_contiguous() && !self.is_c_contiguous()
    }

    /// Relays out the backing storage; shape and values are unchanged.
    pub fn into_order(self, order: Order) -> FixtureArray {
        let data = match order {
            Order::C => map_array!(self.data, a => into_c_order(a)),
            Order::F => map_array!(self.data, a => into_f_order(a)),
        };
        FixtureArray { dtype: self.dtype, data }
    }
}
