//! NBT (Named Binary Tag) implementation for Minecraft Java Edition.
//!
//! Java edition NBT is big-endian throughout: i32 array lengths, u16 string
//! lengths. Chunk tag trees read with this crate are the input to the biome
//! decoder in `chunkview-world`.

pub mod error;
mod io;
pub mod tag;

pub use error::NbtError;
pub use tag::{NbtCompound, NbtRoot, NbtTag};

use bytes::{Buf, BufMut};

/// Read big-endian NBT from a buffer.
pub fn read_nbt(buf: &mut impl Buf) -> Result<NbtRoot, NbtError> {
    io::read_nbt(buf)
}

/// Write big-endian NBT to a buffer. Fails only on a string or name too long
/// for the format's u16 length prefix.
pub fn write_nbt(buf: &mut impl BufMut, root: &NbtRoot) -> Result<(), NbtError> {
    io::write_nbt(buf, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    fn roundtrip(root: &NbtRoot) {
        let mut buf = BytesMut::new();
        write_nbt(&mut buf, root).unwrap();
        let decoded = read_nbt(&mut buf.freeze()).unwrap();
        assert_eq!(decoded, *root);
    }

    #[test]
    fn empty_compound() {
        roundtrip(&NbtRoot::new("", NbtCompound::new()));
    }

    #[test]
    fn root_name() {
        roundtrip(&NbtRoot::new("Level", NbtCompound::new()));
    }

    #[test]
    fn scalar_tags() {
        let mut c = NbtCompound::new();
        c.insert("b".into(), NbtTag::Byte(-4));
        c.insert("s".into(), NbtTag::Short(-1234));
        c.insert("i".into(), NbtTag::Int(100_000));
        c.insert("l".into(), NbtTag::Long(i64::MAX));
        c.insert("f".into(), NbtTag::Float(3.125));
        c.insert("d".into(), NbtTag::Double(std::f64::consts::PI));
        roundtrip(&NbtRoot::new("", c));
    }

    #[test]
    fn string_unicode() {
        let mut c = NbtCompound::new();
        c.insert("val".into(), NbtTag::String("überwelt".into()));
        roundtrip(&NbtRoot::new("", c));
    }

    #[test]
    fn arrays() {
        let mut c = NbtCompound::new();
        c.insert("bytes".into(), NbtTag::ByteArray(vec![1, -2, 3]));
        c.insert("ints".into(), NbtTag::IntArray(vec![100, -200, 300]));
        c.insert(
            "longs".into(),
            NbtTag::LongArray(vec![i64::MIN, 0, i64::MAX]),
        );
        roundtrip(&NbtRoot::new("", c));
    }

    #[test]
    fn empty_list() {
        let mut c = NbtCompound::new();
        c.insert("list".into(), NbtTag::List(vec![]));
        roundtrip(&NbtRoot::new("", c));
    }

    #[test]
    fn list_of_compounds() {
        let mut section = NbtCompound::new();
        section.insert("Y".into(), NbtTag::Byte(-4));
        section.insert("data".into(), NbtTag::LongArray(vec![0, 1]));

        let mut c = NbtCompound::new();
        c.insert(
            "sections".into(),
            NbtTag::List(vec![
                NbtTag::Compound(section.clone()),
                NbtTag::Compound(section),
            ]),
        );
        roundtrip(&NbtRoot::new("", c));
    }

    #[test]
    fn nested_compound() {
        let mut inner = NbtCompound::new();
        inner.insert("x".into(), NbtTag::Int(10));
        inner.insert("z".into(), NbtTag::Int(-10));

        let mut c = NbtCompound::new();
        c.insert("Level".into(), NbtTag::Compound(inner));
        roundtrip(&NbtRoot::new("", c));
    }

    // Hand-assembled bytes pin the big-endian layout, not just self-consistency.
    #[test]
    fn known_bytes_big_endian() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            10, 0, 0,             // TAG_Compound, name ""
            3, 0, 1, b'v',        // TAG_Int named "v"
            0, 0, 1, 0,           // 256, big-endian
            0,                    // TAG_End
        ];
        let root = read_nbt(&mut bytes::Bytes::from_static(data)).unwrap();
        assert_eq!(root.name, "");
        assert_eq!(root.compound.get("v"), Some(&NbtTag::Int(256)));
    }

    #[test]
    fn empty_buffer_error() {
        let data = bytes::Bytes::new();
        assert!(matches!(
            read_nbt(&mut data.clone()),
            Err(NbtError::UnexpectedEof)
        ));
    }

    #[test]
    fn wrong_root_type_error() {
        // TAG_Byte instead of TAG_Compound
        let data = bytes::Bytes::from_static(&[1]);
        assert!(matches!(
            read_nbt(&mut data.clone()),
            Err(NbtError::ExpectedCompound { got: 1 })
        ));
    }

    #[test]
    fn truncated_array_error() {
        // TAG_LongArray named "a" claiming 2 entries but carrying none.
        let data: &[u8] = &[10, 0, 0, 12, 0, 1, b'a', 0, 0, 0, 2];
        assert!(matches!(
            read_nbt(&mut bytes::Bytes::copy_from_slice(data)),
            Err(NbtError::UnexpectedEof)
        ));
    }

    #[test]
    fn oversized_string_error() {
        let mut c = NbtCompound::new();
        c.insert("val".into(), NbtTag::String("x".repeat(70_000)));
        let mut buf = BytesMut::new();
        assert!(matches!(
            write_nbt(&mut buf, &NbtRoot::new("", c)),
            Err(NbtError::StringTooLong(70_000))
        ));
    }

    #[test]
    fn huge_list_length_is_not_preallocated() {
        // TAG_List named "l" of ints claiming i32::MAX entries, carrying none.
        let data: &[u8] = &[10, 0, 0, 9, 0, 1, b'l', 3, 0x7F, 0xFF, 0xFF, 0xFF];
        assert!(matches!(
            read_nbt(&mut bytes::Bytes::copy_from_slice(data)),
            Err(NbtError::UnexpectedEof)
        ));
    }

    #[test]
    fn negative_length_error() {
        // TAG_ByteArray named "a" with length -1.
        let data: &[u8] = &[10, 0, 0, 7, 0, 1, b'a', 0xFF, 0xFF, 0xFF, 0xFF];
        assert!(matches!(
            read_nbt(&mut bytes::Bytes::copy_from_slice(data)),
            Err(NbtError::NegativeLength(-1))
        ));
    }
}
