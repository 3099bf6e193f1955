//! Big-endian NBT read/write (the Java edition wire format).
//!
//! Operates on uncompressed tag data; region-file decompression is the
//! caller's concern.

use bytes::{Buf, BufMut};

use crate::error::NbtError;
use crate::tag::{NbtCompound, NbtRoot, NbtTag};

/// Maximum nesting depth to prevent stack overflow on crafted input.
const MAX_DEPTH: usize = 512;

/// Read a named root compound from a buffer.
pub fn read_nbt(buf: &mut impl Buf) -> Result<NbtRoot, NbtError> {
    if !buf.has_remaining() {
        return Err(NbtError::UnexpectedEof);
    }
    let tag_type = buf.get_u8();
    if tag_type != 10 {
        return Err(NbtError::ExpectedCompound { got: tag_type });
    }
    let name = read_string(buf)?;
    let compound = read_compound(buf, 0)?;
    Ok(NbtRoot { name, compound })
}

/// Write a named root compound to a buffer. Fails only on a string or name
/// too long for the format's u16 length prefix.
pub fn write_nbt(buf: &mut impl BufMut, root: &NbtRoot) -> Result<(), NbtError> {
    buf.put_u8(10); // TAG_Compound
    write_string(buf, &root.name)?;
    write_compound(buf, &root.compound)
}

fn read_tag(buf: &mut impl Buf, tag_type: u8, depth: usize) -> Result<NbtTag, NbtError> {
    if depth > MAX_DEPTH {
        return Err(NbtError::NestingTooDeep { limit: MAX_DEPTH });
    }

    match tag_type {
        1 => {
            ensure_remaining(buf, 1)?;
            Ok(NbtTag::Byte(buf.get_i8()))
        }
        2 => {
            ensure_remaining(buf, 2)?;
            Ok(NbtTag::Short(buf.get_i16()))
        }
        3 => {
            ensure_remaining(buf, 4)?;
            Ok(NbtTag::Int(buf.get_i32()))
        }
        4 => {
            ensure_remaining(buf, 8)?;
            Ok(NbtTag::Long(buf.get_i64()))
        }
        5 => {
            ensure_remaining(buf, 4)?;
            Ok(NbtTag::Float(buf.get_f32()))
        }
        6 => {
            ensure_remaining(buf, 8)?;
            Ok(NbtTag::Double(buf.get_f64()))
        }
        7 => {
            let len = read_array_len(buf)?;
            ensure_remaining(buf, len)?;
            let mut arr = Vec::with_capacity(len);
            for _ in 0..len {
                arr.push(buf.get_i8());
            }
            Ok(NbtTag::ByteArray(arr))
        }
        8 => Ok(NbtTag::String(read_string(buf)?)),
        9 => {
            ensure_remaining(buf, 1)?;
            let element_type = buf.get_u8();
            let len = read_array_len(buf)?;
            // Every element takes at least one byte, so the remaining buffer
            // bounds the pre-allocation against a crafted length.
            let mut list = Vec::with_capacity(len.min(buf.remaining()));
            for _ in 0..len {
                list.push(read_tag(buf, element_type, depth + 1)?);
            }
            Ok(NbtTag::List(list))
        }
        10 => Ok(NbtTag::Compound(read_compound(buf, depth + 1)?)),
        11 => {
            let len = read_array_len(buf)?;
            ensure_remaining(buf, len * 4)?;
            let mut arr = Vec::with_capacity(len);
            for _ in 0..len {
                arr.push(buf.get_i32());
            }
            Ok(NbtTag::IntArray(arr))
        }
        12 => {
            let len = read_array_len(buf)?;
            ensure_remaining(buf, len * 8)?;
            let mut arr = Vec::with_capacity(len);
            for _ in 0..len {
                arr.push(buf.get_i64());
            }
            Ok(NbtTag::LongArray(arr))
        }
        _ => Err(NbtError::UnknownTagType(tag_type)),
    }
}

fn read_compound(buf: &mut impl Buf, depth: usize) -> Result<NbtCompound, NbtError> {
    if depth > MAX_DEPTH {
        return Err(NbtError::NestingTooDeep { limit: MAX_DEPTH });
    }
    let mut map = NbtCompound::new();
    loop {
        ensure_remaining(buf, 1)?;
        let tag_type = buf.get_u8();
        if tag_type == 0 {
            break; // TAG_End
        }
        let name = read_string(buf)?;
        let tag = read_tag(buf, tag_type, depth)?;
        map.insert(name, tag);
    }
    Ok(map)
}

fn read_array_len(buf: &mut impl Buf) -> Result<usize, NbtError> {
    ensure_remaining(buf, 4)?;
    let len = buf.get_i32();
    if len < 0 {
        return Err(NbtError::NegativeLength(len));
    }
    Ok(len as usize)
}

fn read_string(buf: &mut impl Buf) -> Result<String, NbtError> {
    ensure_remaining(buf, 2)?;
    let len = buf.get_u16() as usize;
    ensure_remaining(buf, len)?;
    let data = buf.copy_to_bytes(len);
    String::from_utf8(data.to_vec()).map_err(|_| NbtError::InvalidUtf8)
}

fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<(), NbtError> {
    if buf.remaining() < needed {
        Err(NbtError::UnexpectedEof)
    } else {
        Ok(())
    }
}

fn write_tag(buf: &mut impl BufMut, tag: &NbtTag) -> Result<(), NbtError> {
    match tag {
        NbtTag::Byte(v) => buf.put_i8(*v),
        NbtTag::Short(v) => buf.put_i16(*v),
        NbtTag::Int(v) => buf.put_i32(*v),
        NbtTag::Long(v) => buf.put_i64(*v),
        NbtTag::Float(v) => buf.put_f32(*v),
        NbtTag::Double(v) => buf.put_f64(*v),
        NbtTag::ByteArray(arr) => {
            buf.put_i32(arr.len() as i32);
            for &b in arr {
                buf.put_i8(b);
            }
        }
        NbtTag::String(s) => write_string(buf, s)?,
        NbtTag::List(list) => {
            if list.is_empty() {
                buf.put_u8(0); // TAG_End type for empty list
                buf.put_i32(0);
            } else {
                buf.put_u8(list[0].tag_type_id());
                buf.put_i32(list.len() as i32);
                for item in list {
                    write_tag(buf, item)?;
                }
            }
        }
        NbtTag::Compound(map) => write_compound(buf, map)?,
        NbtTag::IntArray(arr) => {
            buf.put_i32(arr.len() as i32);
            for &v in arr {
                buf.put_i32(v);
            }
        }
        NbtTag::LongArray(arr) => {
            buf.put_i32(arr.len() as i32);
            for &v in arr {
                buf.put_i64(v);
            }
        }
    }
    Ok(())
}

fn write_compound(buf: &mut impl BufMut, map: &NbtCompound) -> Result<(), NbtError> {
    for (name, tag) in map {
        buf.put_u8(tag.tag_type_id());
        write_string(buf, name)?;
        write_tag(buf, tag)?;
    }
    buf.put_u8(0); // TAG_End
    Ok(())
}

fn write_string(buf: &mut impl BufMut, s: &str) -> Result<(), NbtError> {
    let len = u16::try_from(s.len()).map_err(|_| NbtError::StringTooLong(s.len()))?;
    buf.put_u16(len);
    buf.put_slice(s.as_bytes());
    Ok(())
}
