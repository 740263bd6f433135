use std::fs;
use std::path::{Path, PathBuf};

use crate::array::{FixtureArray, Order};
use crate::error::Result;
use crate::npy;
use crate::utils::{py_bool, py_tuple};

/// One line per written file:
///
/// ```text
/// Wrote npy-fixtures/x.npy  dtype=uint32  shape=(2, 3)  C=True F=False
/// ```
pub fn confirmation_line(path: &Path, arr: &FixtureArray) -> String {
    format!(
        "Wrote {}  dtype={}  shape={}  C={} F={}",
        path.display(),
        arr.dtype(),
        py_tuple(arr.shape()),
        py_bool(arr.is_c_contiguous()),
        py_bool(arr.is_f_contiguous())
    )
}

/// Writes `arr` with storage `order` to `<out_dir>/<name>.npy`, creating
/// `out_dir` if needed. Existing files are overwritten.
pub fn save_fixture(arr: FixtureArray, out_dir: &Path, name: &str, order: Order) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{}.npy", name));

    let arr = arr.into_order(order);
    npy::encode(&path, &arr)?;

    println!("{}", confirmation_line(&path, &arr));
    debug!("{}: {} elements, order {}, fortran_order={}", name, arr.len(), order, arr.fortran_order());
    Ok(path)
}
