#![no_main]

use arbitrary::Arbitrary;
use bitwire_codec::{varint, Reader, Writer};
use libfuzzer_sys::fuzz_target;

/// One typed field of a fuzzed message. The same sequence is written and then
/// read back; any divergence or panic is a bug.
#[derive(Arbitrary, Debug)]
enum Op {
    Bool(bool),
    Bits { value: u64, count: u8 },
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    ZigZag { value: i64, count: u8 },
    F32(f32),
    F64(f64),
    VarintUnsigned(u64),
    VarintSigned(i64),
    Blob(Vec<u8>),
    Text(String),
}

/// Clamps a fuzzed width into the codec's valid `1..=64` range.
fn clamp_count(count: u8) -> u32 {
    (count % 64) as u32 + 1
}

/// The low `count` bits of `value` — what the writer actually commits.
fn truncate(value: u64, count: u32) -> u64 {
    if count == 64 {
        value
    } else {
        value & ((1u64 << count) - 1)
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut writer = Writer::new();
    for op in &ops {
        match op {
            Op::Bool(v) => writer.write_bool(*v),
            Op::Bits { value, count } => writer.write_bits(*value, clamp_count(*count)),
            Op::U8(v) => writer.write_u8(*v),
            Op::U16(v) => writer.write_u16(*v),
            Op::U32(v) => writer.write_u32(*v),
            Op::U64(v) => writer.write_u64(*v),
            Op::I8(v) => writer.write_i8(*v),
            Op::I16(v) => writer.write_i16(*v),
            Op::I32(v) => writer.write_i32(*v),
            Op::I64(v) => writer.write_i64(*v),
            Op::ZigZag { value, count } => writer.write_zigzag(*value, clamp_count(*count)),
            Op::F32(v) => writer.write_f32(*v),
            Op::F64(v) => writer.write_f64(*v),
            Op::VarintUnsigned(v) => writer.write_varint_unsigned(*v),
            Op::VarintSigned(v) => writer.write_varint_signed(*v),
            Op::Blob(v) => writer.write_bytes(v),
            Op::Text(v) => writer.write_string(v),
        }
    }
    assert!(writer.is_valid());

    let mut reader = Reader::new(writer.into_bytes());
    for op in &ops {
        match op {
            Op::Bool(v) => assert_eq!(reader.read_bool(), *v),
            Op::Bits { value, count } => {
                let count = clamp_count(*count);
                assert_eq!(reader.read_bits(count), truncate(*value, count));
            }
            Op::U8(v) => assert_eq!(reader.read_u8(), *v),
            Op::U16(v) => assert_eq!(reader.read_u16(), *v),
            Op::U32(v) => assert_eq!(reader.read_u32(), *v),
            Op::U64(v) => assert_eq!(reader.read_u64(), *v),
            Op::I8(v) => assert_eq!(reader.read_i8(), *v),
            Op::I16(v) => assert_eq!(reader.read_i16(), *v),
            Op::I32(v) => assert_eq!(reader.read_i32(), *v),
            Op::I64(v) => assert_eq!(reader.read_i64(), *v),
            Op::ZigZag { value, count } => {
                // Widths too narrow for the magnitude are out of contract;
                // the committed value is the truncated encoding either way.
                let count = clamp_count(*count);
                let expected = varint::zigzag_decode(truncate(varint::zigzag_encode(*value), count));
                assert_eq!(reader.read_zigzag(count), expected);
            }
            Op::F32(v) => assert_eq!(reader.read_f32().to_bits(), v.to_bits()),
            Op::F64(v) => assert_eq!(reader.read_f64().to_bits(), v.to_bits()),
            Op::VarintUnsigned(v) => assert_eq!(reader.read_varint_unsigned(), *v),
            Op::VarintSigned(v) => assert_eq!(reader.read_varint_signed(), *v),
            Op::Blob(v) => assert_eq!(reader.read_bytes(v.len()), &v[..]),
            Op::Text(v) => assert_eq!(reader.read_string(), *v),
        }
    }
    assert!(reader.is_valid());
});
