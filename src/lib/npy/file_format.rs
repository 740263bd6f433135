use byteorder::{BE, LE};
use ndarray::{ArrayD, IxDyn, ShapeBuilder};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::array::{ArrayData, FixtureArray};
use crate::dtype::{Endian, Kind};
use crate::error::{FixtureError, Result};
use crate::npy::element::Element;
use crate::npy::header::{read_header, write_header, Header};

fn write_elements<'a, T, W, I>(wtr: &mut W, items: I, endian: Endian) -> io::Result<()>
where
    T: Element + 'a,
    W: Write + ?Sized,
    I: Iterator<Item = &'a T>,
{
    for &x in items {
        match endian {
            Endian::Big => x.write_to::<BE, _>(wtr)?,
            _ => x.write_to::<LE, _>(wtr)?,
        }
    }
    Ok(())
}

/// Elements in storage order: column-major when `fortran_order`.
fn write_typed<T: Element, W: Write + ?Sized>(
    wtr: &mut W,
    arr: &ArrayD<T>,
    fortran_order: bool,
    endian: Endian,
) -> io::Result<()> {
    if fortran_order {
        write_elements(wtr, arr.t().iter(), endian)
    } else {
        write_elements(wtr, arr.iter(), endian)
    }
}

fn read_typed<T: Element, R: Read + ?Sized>(rdr: &mut R, header: &Header) -> Result<ArrayD<T>> {
    // the count comes from the file, so the payload bounds the allocation
    let n = header.element_count()?;
    let mut values = Vec::new();
    for _ in 0..n {
        let v = match header.descr.endian {
            Endian::Big => T::read_from::<BE, _>(rdr)?,
            _ => T::read_from::<LE, _>(rdr)?,
        };
        values.push(v);
    }
    let shape = IxDyn(&header.shape);
    let arr = if header.fortran_order {
        ArrayD::from_shape_vec(shape.f(), values)?
    } else {
        ArrayD::from_shape_vec(shape, values)?
    };
    Ok(arr)
}

/// Serializes header and payload of `arr`.
pub fn write_array<W: Write + ?Sized>(wtr: &mut W, arr: &FixtureArray) -> Result<()> {
    let header = Header {
        descr: arr.dtype(),
        fortran_order: arr.fortran_order(),
        shape: arr.shape().to_vec(),
    };
    write_header(wtr, &header)?;
    let endian = header.descr.endian;
    with_array!(arr.data(), a => write_typed(wtr, a, header.fortran_order, endian))?;
    Ok(())
}

pub fn read_array<R: Read + ?Sized>(rdr: &mut R) -> Result<FixtureArray> {
    let header = read_header(rdr)?;
    let dtype = header.descr;
    let data = match (dtype.kind, dtype.width) {
        (Kind::Unsigned, 1) => ArrayData::U1(read_typed(rdr, &header)?),
        (Kind::Unsigned, 2) => ArrayData::U2(read_typed(rdr, &header)?),
        (Kind::Unsigned, 4) => ArrayData::U4(read_typed(rdr, &header)?),
        (Kind::Unsigned, 8) => ArrayData::U8(read_typed(rdr, &header)?),
        (Kind::Signed, 1) => ArrayData::I1(read_typed(rdr, &header)?),
        (Kind::Signed, 2) => ArrayData::I2(read_typed(rdr, &header)?),
        (Kind::Signed, 4) => ArrayData::I4(read_typed(rdr, &header)?),
        (Kind::Signed, 8) => ArrayData::I8(read_typed(rdr, &header)?),
        (Kind::Float, 4) => ArrayData::F4(read_typed(rdr, &header)?),
        (Kind::Float, 8) => ArrayData::F8(read_typed(rdr, &header)?),
        _ => return Err(FixtureError::UnsupportedDtypeKind(dtype.descr())),
    };
    Ok(FixtureArray::new(dtype, data))
}

/// Writes `arr` to a new file at `fname`, truncating any existing one.
pub fn encode<P: AsRef<Path>>(fname: P, arr: &FixtureArray) -> Result<()> {
    let mut wtr = BufWriter::new(File::create(fname)?);
    write_array(&mut wtr, arr)?;
    wtr.flush()?;
    Ok(())
}

pub fn decode<P: AsRef<Path>>(fname: P) -> Result<FixtureArray> {
    let mut rdr = BufReader::new(File::open(fname)?);
    read_array(&mut rdr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Order;
    use crate::values::{make_values, manual_values};

    fn to_bytes(arr: &FixtureArray) -> Vec<u8> {
        let mut buf: Vec<u8> = vec![];
        write_array(&mut buf, arr).unwrap();
        buf
    }

    /// payload starts right after the aligned header
    fn payload(buf: &[u8]) -> &[u8] {
        let len = u16::from_le_bytes([buf[8], buf[9]]) as usize;
        &buf[10 + len..]
    }

    #[test]
    fn should_write_manual_fixture_bit_exact() {
        let buf = to_bytes(&manual_values().unwrap());
        assert_eq!(buf.len(), 128 + 24);
        let expected: Vec<u8> = (1..=6i32).flat_map(|v| v.to_le_bytes().to_vec()).collect();
        assert_eq!(payload(&buf), &expected[..]);
        let header = read_header(&mut &buf[..]).unwrap();
        assert_eq!(header.descr.descr(), "<i4");
        assert!(!header.fortran_order);
        assert_eq!(header.shape, vec![2, 3]);
    }

    #[test]
    fn should_write_big_endian_payload() {
        let arr = make_values(&[2, 3], ">u4".parse().unwrap()).unwrap();
        let buf = to_bytes(&arr);
        assert_eq!(&payload(&buf)[..8], &[0xff, 0xff, 0xff, 0xfb, 0, 0, 0, 12]);

        let arr = make_values(&[2, 3], ">i2".parse().unwrap()).unwrap();
        let buf = to_bytes(&arr);
        assert_eq!(&payload(&buf)[..4], &[0xff, 0xfb, 0, 12]);
    }

    #[test]
    fn should_write_fortran_payload_column_major() {
        let arr = make_values(&[2, 3], "<u4".parse().unwrap()).unwrap().into_order(Order::F);
        let buf = to_bytes(&arr);
        let header = read_header(&mut &buf[..]).unwrap();
        assert!(header.fortran_order);
        let expected: Vec<u8> = [4294967291u32, 46, 12, 63, 29, 80]
            .iter()
            .flat_map(|v| v.to_le_bytes().to_vec())
            .collect();
        assert_eq!(payload(&buf), &expected[..]);
    }

    #[test]
    fn should_round_trip_every_layout() {
        let dtypes = ["u1", "<u2", ">u4", "<u8", "i1", ">i2", "<i4", ">i8", "<f4", ">f8"];
        for s in dtypes.iter() {
            for order in &[Order::C, Order::F] {
                let arr = make_values(&[10, 12], s.parse().unwrap()).unwrap().into_order(*order);
                let buf = to_bytes(&arr);
                let back = read_array(&mut &buf[..]).unwrap();
                assert_eq!(back, arr);
                assert_eq!(back.dtype(), arr.dtype());
                assert_eq!(back.fortran_order(), *order == Order::F);
                assert_eq!(to_bytes(&back), buf);
            }
        }
    }

    fn raw_header(dict: &str) -> Vec<u8> {
        let mut buf: Vec<u8> = b"\x93NUMPY\x01\x00".to_vec();
        buf.extend_from_slice(&(dict.len() as u16).to_le_bytes());
        buf.extend_from_slice(dict.as_bytes());
        buf
    }

    #[test]
    fn should_not_trust_huge_element_count() {
        let mut buf = raw_header("{'descr': '|u1', 'fortran_order': False, 'shape': (4611686018427387904,), }\n");
        buf.extend_from_slice(&[1, 2, 3]);
        match read_array(&mut &buf[..]) {
            Err(FixtureError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn should_reject_overflowing_shape_on_read() {
        let buf = raw_header("{'descr': '<u4', 'fortran_order': False, 'shape': (4294967296, 4294967296, 4294967296), }\n");
        match read_array(&mut &buf[..]) {
            Err(FixtureError::InvalidHeader(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn should_fail_on_truncated_payload() {
        let buf = to_bytes(&manual_values().unwrap());
        match read_array(&mut &buf[..buf.len() - 1]) {
            Err(FixtureError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected {:?}", other),
        }
    }
}
