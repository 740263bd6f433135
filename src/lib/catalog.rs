//! The fixed set of fixtures and the order they are written in.
//!
//! 1. every dtype on shape (2, 3)
//! 2. every shape on `<u4`
//! 3. the hand-written `[[1, 2, 3], [4, 5, 6]]`
//! 4. fortran order shapes on `<u4`
//! 5. big endian dtypes on shape (2, 3)
//! 6. `<u8` on shape (2, 3), only with `Settings::include_u8`

use std::path::PathBuf;

use crate::array::{FixtureArray, Order};
use crate::dtype::Dtype;
use crate::error::Result;
use crate::fixture::save_fixture;
use crate::settings::Settings;
use crate::utils::shape_tag;
use crate::values::{make_values, manual_values};

pub static SHAPES: &[&[usize]] = &[&[1], &[10], &[1, 10], &[2, 3], &[10, 1], &[10, 12]];

pub static FORTRAN_SHAPES: &[&[usize]] = &[&[2, 3], &[10, 12]];

pub static BIG_ENDIAN_SHAPES: &[&[usize]] = &[&[2, 3]];

// no u8: downstream readers without a native unsigned 64 bit type would
// need a big integer fallback
pub static DTYPES: &[(&str, &str)] = &[
    ("u1", "<u1"),
    ("u2", "<u2"),
    ("u4", "<u4"),
    ("i1", "<i1"),
    ("i2", "<i2"),
    ("i4", "<i4"),
    ("i8", "<i8"),
    ("f4", "<f4"),
    ("f8", "<f8"),
];

pub static BIG_ENDIAN_DTYPES: &[(&str, &str)] = &[("i2", ">i2"), ("u4", ">u4"), ("f8", ">f8")];

static U8_DTYPE: (&str, &str) = ("u8", "<u8");

const DTYPE_SWEEP_SHAPE: &[usize] = &[2, 3];
const SHAPE_SWEEP_DTYPE: &str = "<u4";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Content {
    /// arithmetic progression from `make_values`
    Generated,
    /// the hand-written reference array
    Manual,
}

/// A single fixture file to produce.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub name: String,
    pub shape: Vec<usize>,
    pub dtype: Dtype,
    pub order: Order,
    pub content: Content,
}

impl Entry {
    fn generated(name: String, shape: &[usize], dtype: Dtype, order: Order) -> Entry {
        Entry {
            name,
            shape: shape.to_vec(),
            dtype,
            order,
            content: Content::Generated,
        }
    }

    pub fn materialize(&self) -> Result<FixtureArray> {
        match self.content {
            Content::Generated => make_values(&self.shape, self.dtype),
            Content::Manual => manual_values(),
        }
    }
}

/// Appends `entry` unless an entry of that name is already listed.
/// The sweeps overlap on `shape_2x3__dtype_u4`, which is written once.
fn push_unique(ret: &mut Vec<Entry>, entry: Entry) {
    match ret.iter().find(|e| e.name == entry.name) {
        Some(existing) => {
            debug_assert_eq!(existing, &entry);
            debug!("{} already listed", entry.name);
        }
        None => ret.push(entry),
    }
}

/// All entries in write order, names unique.
pub fn entries(include_u8: bool) -> Result<Vec<Entry>> {
    let mut ret = vec![];

    for &(key, descr) in DTYPES {
        let name = format!("shape_{}__dtype_{}", shape_tag(DTYPE_SWEEP_SHAPE), key);
        push_unique(&mut ret, Entry::generated(name, DTYPE_SWEEP_SHAPE, descr.parse()?, Order::C));
    }

    let u4: Dtype = SHAPE_SWEEP_DTYPE.parse()?;
    for shape in SHAPES {
        let name = format!("shape_{}__dtype_u4", shape_tag(shape));
        push_unique(&mut ret, Entry::generated(name, shape, u4, Order::C));
    }

    let manual = manual_values()?;
    push_unique(&mut ret, Entry {
        name: "manual_2x3__dtype_i4".to_owned(),
        shape: manual.shape().to_vec(),
        dtype: manual.dtype(),
        order: Order::C,
        content: Content::Manual,
    });

    for shape in FORTRAN_SHAPES {
        let name = format!("shape_{}__dtype_u4__order_F", shape_tag(shape));
        push_unique(&mut ret, Entry::generated(name, shape, u4, Order::F));
    }

    for shape in BIG_ENDIAN_SHAPES {
        for &(key, descr) in BIG_ENDIAN_DTYPES {
            let name = format!("shape_{}__dtype_{}__endian_B", shape_tag(shape), key);
            push_unique(&mut ret, Entry::generated(name, shape, descr.parse()?, Order::C));
        }
    }

    if include_u8 {
        let (key, descr) = U8_DTYPE;
        let name = format!("shape_{}__dtype_{}", shape_tag(DTYPE_SWEEP_SHAPE), key);
        push_unique(&mut ret, Entry::generated(name, DTYPE_SWEEP_SHAPE, descr.parse()?, Order::C));
    }

    Ok(ret)
}

/// Writes every catalog entry into `settings.output_dir`.
///
/// Stops at the first failure; files written before it stay on disk.
pub fn generate_all(settings: &Settings) -> Result<Vec<PathBuf>> {
    let entries = entries(settings.include_u8)?;
    info!("writing {} fixtures to {}", entries.len(), settings.output_dir.display());

    let mut paths = Vec::with_capacity(entries.len());
    for entry in &entries {
        let arr = entry.materialize()?;
        paths.push(save_fixture(arr, &settings.output_dir, &entry.name, entry.order)?);
    }

    info!("wrote {} fixtures", paths.len());
    Ok(paths)
}

/// `generate_all` with the default output directory and catalog.
pub fn generate_all_default() -> Result<Vec<PathBuf>> {
    generate_all(&Settings::default())
}
