extern crate npy_fixtures;
extern crate tempdir;

use ndarray::{arr2, Array1, Array2};
use npy_fixtures::catalog::entries;
use npy_fixtures::npy;
use npy_fixtures::{generate_all, ArrayData, FixtureError, Settings};
use std::fs;
use std::path::Path;
use tempdir::TempDir;

fn settings(dir: &Path, include_u8: bool) -> Settings {
    Settings {
        output_dir: dir.join("npy-fixtures"),
        include_u8,
    }
}

#[test]
fn it_writes_the_whole_catalog() {
    let tmp = TempDir::new("npy_fixtures").unwrap();
    let settings = settings(tmp.path(), false);
    let paths = generate_all(&settings).unwrap();
    assert_eq!(paths.len(), 20);

    let mut on_disk: Vec<String> = fs::read_dir(&settings.output_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    on_disk.sort();
    let mut expected: Vec<String> = entries(false).unwrap().into_iter().map(|e| format!("{}.npy", e.name)).collect();
    expected.sort();
    assert_eq!(on_disk, expected);

    for entry in entries(false).unwrap() {
        let path = settings.output_dir.join(format!("{}.npy", entry.name));
        let back = npy::decode(&path).unwrap();
        assert_eq!(back, entry.materialize().unwrap(), "{}", entry.name);
        assert_eq!(back.dtype(), entry.dtype);
        assert_eq!(back.fortran_order(), entry.name.ends_with("__order_F"));
    }
}

#[test]
fn it_writes_known_values() {
    let tmp = TempDir::new("npy_fixtures").unwrap();
    let settings = settings(tmp.path(), false);
    generate_all(&settings).unwrap();

    let manual = npy::decode(settings.output_dir.join("manual_2x3__dtype_i4.npy")).unwrap();
    assert_eq!(manual.dtype().descr(), "<i4");
    assert!(!manual.fortran_order());
    assert_eq!(manual.data(), &ArrayData::I4(arr2(&[[1, 2, 3], [4, 5, 6]]).into_dyn()));

    let u4 = npy::decode(settings.output_dir.join("shape_2x3__dtype_u4.npy")).unwrap();
    assert_eq!(u4.data(), &ArrayData::U4(arr2(&[[4294967291u32, 12, 29], [46, 63, 80]]).into_dyn()));

    let be = npy::decode(settings.output_dir.join("shape_2x3__dtype_u4__endian_B.npy")).unwrap();
    assert_eq!(be.dtype().descr(), ">u4");
    assert_eq!(be.data(), u4.data());

    let u1 = npy::decode(settings.output_dir.join("shape_2x3__dtype_u1.npy")).unwrap();
    match u1.data() {
        ArrayData::U1(a) => assert_eq!(a[[0, 0]], 251),
        _ => panic!("wrong variant"),
    }
}

#[test]
fn it_is_deterministic() {
    let a = TempDir::new("npy_fixtures_a").unwrap();
    let b = TempDir::new("npy_fixtures_b").unwrap();
    let paths_a = generate_all(&settings(a.path(), true)).unwrap();
    let paths_b = generate_all(&settings(b.path(), true)).unwrap();
    assert_eq!(paths_a.len(), 21);

    for (pa, pb) in paths_a.iter().zip(paths_b.iter()) {
        assert_eq!(pa.file_name(), pb.file_name());
        assert_eq!(fs::read(pa).unwrap(), fs::read(pb).unwrap());
    }

    // running again into the same folder overwrites with the same bytes
    let before = fs::read(&paths_a[0]).unwrap();
    generate_all(&settings(a.path(), true)).unwrap();
    assert_eq!(fs::read(&paths_a[0]).unwrap(), before);
}

#[test]
fn it_is_readable_by_ndarray_npy() {
    let tmp = TempDir::new("npy_fixtures").unwrap();
    let settings = settings(tmp.path(), false);
    generate_all(&settings).unwrap();
    let dir = &settings.output_dir;

    let u4: Array2<u32> = ndarray_npy::read_npy(dir.join("shape_2x3__dtype_u4.npy")).unwrap();
    assert_eq!(u4, arr2(&[[4294967291u32, 12, 29], [46, 63, 80]]));

    let f: Array2<u32> = ndarray_npy::read_npy(dir.join("shape_2x3__dtype_u4__order_F.npy")).unwrap();
    assert_eq!(f, u4);

    let u1: Array2<u8> = ndarray_npy::read_npy(dir.join("shape_2x3__dtype_u1.npy")).unwrap();
    assert_eq!(u1, arr2(&[[251u8, 12, 29], [46, 63, 80]]));

    let f8: Array2<f64> = ndarray_npy::read_npy(dir.join("shape_2x3__dtype_f8.npy")).unwrap();
    assert_eq!(f8, arr2(&[[-3.0, -1.75, -0.5], [0.75, 2.0, 3.25]]));

    let v: Array1<u32> = ndarray_npy::read_npy(dir.join("shape_10___dtype_u4.npy")).unwrap();
    assert_eq!(v.len(), 10);
    assert_eq!(v[9], 148);
}

#[test]
fn it_aborts_when_output_is_not_a_folder() {
    let tmp = TempDir::new("npy_fixtures").unwrap();
    let blocker = tmp.path().join("npy-fixtures");
    fs::write(&blocker, b"not a folder").unwrap();

    match generate_all(&settings(tmp.path(), false)) {
        Err(FixtureError::Io(_)) => {}
        other => panic!("unexpected {:?}", other),
    }
    assert!(blocker.is_file());
}
