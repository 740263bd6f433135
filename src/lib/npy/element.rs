use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// A fixed-width numeric element that knows its byte representation.
pub trait Element: Copy {
    fn write_to<B: ByteOrder, W: Write + ?Sized>(self, wtr: &mut W) -> io::Result<()>;
    fn read_from<B: ByteOrder, R: Read + ?Sized>(rdr: &mut R) -> io::Result<Self>;
}

// single bytes have no byte order
impl Element for u8 {
    fn write_to<B: ByteOrder, W: Write + ?Sized>(self, wtr: &mut W) -> io::Result<()> {
        wtr.write_u8(self)
    }
    fn read_from<B: ByteOrder, R: Read + ?Sized>(rdr: &mut R) -> io::Result<Self> {
        rdr.read_u8()
    }
}

impl Element for i8 {
    fn write_to<B: ByteOrder, W: Write + ?Sized>(self, wtr: &mut W) -> io::Result<()> {
        wtr.write_i8(self)
    }
    fn read_from<B: ByteOrder, R: Read + ?Sized>(rdr: &mut R) -> io::Result<Self> {
        rdr.read_i8()
    }
}

macro_rules! impl_element {
    ($t:ty, $write:ident, $read:ident) => {
        impl Element for $t {
            fn write_to<B: ByteOrder, W: Write + ?Sized>(self, wtr: &mut W) -> io::Result<()> {
                wtr.$write::<B>(self)
            }
            fn read_from<B: ByteOrder, R: Read + ?Sized>(rdr: &mut R) -> io::Result<Self> {
                rdr.$read::<B>()
            }
        }
    };
}

impl_element!(u16, write_u16, read_u16);
impl_element!(u32, write_u32, read_u32);
impl_element!(u64, write_u64, read_u64);
impl_element!(i16, write_i16, read_i16);
impl_element!(i32, write_i32, read_i32);
impl_element!(i64, write_i64, read_i64);
impl_element!(f32, write_f32, read_f32);
impl_element!(f64, write_f64, read_f64);
