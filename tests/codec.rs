//! Integration tests for the public codec API.
//!
//! Covers the documented example values, the bounds-checking contract for every reader, and
//! the round-trip properties between decoding and encoding for every kind and byte order.

use fixedbytes::prelude::*;
use strum::IntoEnumIterator;

/// Boundary values worth checking for a given kind: zero, -1 where representable, min, max.
fn boundary_values(kind: IntKind) -> Vec<i64> {
    let mut values = vec![0, kind.min_value(), kind.max_value(), 1];
    if kind.is_signed() {
        values.push(-1);
    }
    values
}

#[test]
fn documented_examples() {
    let le = ByteOrder::LittleEndian;

    assert_eq!(to_hex_string(&[0x01, 0x02, 0xFF]), "01 02 FF");

    let pair = [0x01, 0x00, 0xFF, 0xFF];
    assert_eq!(read_i16(&pair, 0, le).unwrap(), 1);
    assert_eq!(read_i16(&pair, 2, le).unwrap(), -1);
    assert_eq!(read_u16(&pair, 0, le).unwrap(), 1);
    assert_eq!(read_u16(&pair, 2, le).unwrap(), 65535);
    assert_eq!(to_i16_array(&pair), [1, -1]);

    let words = [0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];
    assert_eq!(read_u32(&words, 0, le).unwrap(), 1);
    assert_eq!(read_u32(&words, 4, le).unwrap(), 4_294_967_295);
    assert_eq!(read_i32(&words, 0, le).unwrap(), 1);
    assert_eq!(read_i32(&words, 4, le).unwrap(), -1);

    assert_eq!(first_two_bytes_big_endian(258), [0x01, 0x02]);
    assert_eq!(first_two_bytes_big_endian(42), [0x00, 0x2A]);

    assert_eq!(write_u8(42), vec![42]);
    assert_eq!(
        write_u32(0x1234_5678, ByteOrder::BigEndian),
        vec![0x12, 0x34, 0x56, 0x78]
    );
}

#[test]
fn every_short_read_is_an_error() {
    let data = [0xAAu8; 6];

    for kind in IntKind::iter() {
        for order in ByteOrder::iter() {
            for offset in 0..=data.len() + 4 {
                let result = decode(&data, offset, kind, order);
                if offset + kind.width() <= data.len() {
                    assert!(result.is_ok(), "{kind} {order} at {offset}");
                } else {
                    assert_eq!(
                        result,
                        Err(Error::OutOfBounds {
                            offset,
                            width: kind.width(),
                            len: data.len()
                        }),
                        "{kind} {order} at {offset}"
                    );
                }
            }
        }
    }
}

#[test]
fn named_readers_agree_with_dynamic_decode() {
    let data = [0x80, 0x01, 0xFE, 0x7F, 0x00, 0xFF];

    for order in ByteOrder::iter() {
        for offset in 0..data.len() {
            let expect = |kind| decode(&data, offset, kind, order).ok();

            assert_eq!(read_u8(&data, offset).ok().map(i64::from), expect(IntKind::U8));
            assert_eq!(read_i8(&data, offset).ok().map(i64::from), expect(IntKind::I8));
            assert_eq!(
                read_u16(&data, offset, order).ok().map(i64::from),
                expect(IntKind::U16)
            );
            assert_eq!(
                read_i16(&data, offset, order).ok().map(i64::from),
                expect(IntKind::I16)
            );
            assert_eq!(
                read_u32(&data, offset, order).ok().map(i64::from),
                expect(IntKind::U32)
            );
            assert_eq!(
                read_i32(&data, offset, order).ok().map(i64::from),
                expect(IntKind::I32)
            );
        }
    }
}

#[test]
fn value_round_trip_at_boundaries() {
    for kind in IntKind::iter() {
        for order in ByteOrder::iter() {
            for value in boundary_values(kind) {
                let bytes = encode_value(value, kind, order).unwrap();
                assert_eq!(bytes.len(), kind.width(), "{kind} {order} {value}");
                assert_eq!(
                    decode(&bytes, 0, kind, order).unwrap(),
                    value,
                    "{kind} {order} {value}"
                );
            }
        }
    }
}

#[test]
fn byte_round_trip_from_any_offset() {
    let data: Vec<u8> = (0u8..16).map(|i| i.wrapping_mul(37).wrapping_add(0x81)).collect();

    for kind in IntKind::iter() {
        for order in ByteOrder::iter() {
            for offset in 0..=data.len() - kind.width() {
                let value = decode(&data, offset, kind, order).unwrap();
                let bytes = encode_value(value, kind, order).unwrap();
                assert_eq!(
                    bytes,
                    &data[offset..offset + kind.width()],
                    "{kind} {order} at {offset}"
                );
            }
        }
    }
}

#[test]
fn named_writers_round_trip() {
    for order in ByteOrder::iter() {
        for value in [0u16, 1, 0x0102, u16::MAX] {
            assert_eq!(read_u16(&write_u16(value, order), 0, order).unwrap(), value);
        }
        for value in [0i16, -1, i16::MIN, i16::MAX] {
            assert_eq!(read_i16(&write_i16(value, order), 0, order).unwrap(), value);
        }
        for value in [0u32, 1, 0x0102_0304, u32::MAX] {
            assert_eq!(read_u32(&write_u32(value, order), 0, order).unwrap(), value);
        }
        for value in [0i32, -1, i32::MIN, i32::MAX] {
            assert_eq!(read_i32(&write_i32(value, order), 0, order).unwrap(), value);
        }
    }
    for value in [0u8, 1, u8::MAX] {
        assert_eq!(read_u8(&write_u8(value), 0).unwrap(), value);
    }
    for value in [0i8, -1, i8::MIN, i8::MAX] {
        assert_eq!(read_i8(&write_i8(value), 0).unwrap(), value);
    }
}

#[test]
fn orders_are_mirror_images() {
    for value in [0x0102_0304u32, 0xDEAD_BEEF, 1, u32::MAX] {
        let mut big = write_u32(value, ByteOrder::BigEndian);
        big.reverse();
        assert_eq!(big, write_u32(value, ByteOrder::LittleEndian));
    }
}

#[test]
fn narrowing_keeps_low_bits_only() {
    for value in [0i64, 42, 258, 0xFFFF, 0x1_0000, 0x1234_5678, -1, i64::MIN] {
        let narrowed = first_two_bytes_big_endian(value);
        let back = read_u16(&narrowed, 0, ByteOrder::BigEndian).unwrap();
        assert_eq!(i64::from(back), value & 0xFFFF, "{value}");
    }
}

#[test]
fn in_place_writes_then_parse() {
    let mut buffer = [0u8; 11];
    let mut offset = 0;

    write_at(&mut buffer, &mut offset, 0xCAFEu16, ByteOrder::BigEndian).unwrap();
    write_at(&mut buffer, &mut offset, -7i8, ByteOrder::BigEndian).unwrap();
    write_at(&mut buffer, &mut offset, 1_000_000u32, ByteOrder::LittleEndian).unwrap();
    write_at(&mut buffer, &mut offset, i32::MIN, ByteOrder::BigEndian).unwrap();
    assert_eq!(offset, buffer.len());
    assert!(write_at(&mut buffer, &mut offset, 0u8, ByteOrder::BigEndian).is_err());

    let mut parser = Parser::new(&buffer);
    assert_eq!(parser.read_be::<u16>().unwrap(), 0xCAFE);
    assert_eq!(parser.read_be::<i8>().unwrap(), -7);
    assert_eq!(parser.read_le::<u32>().unwrap(), 1_000_000);
    assert_eq!(parser.read_be::<i32>().unwrap(), i32::MIN);
    assert!(!parser.has_more_data());
}

#[test]
fn encoders_do_not_touch_their_input() {
    let data = vec![0x10, 0x20, 0x30, 0x40];
    let before = data.clone();

    let _ = to_hex_string(&data);
    let _ = to_i16_array(&data);
    let _: Vec<u32> = to_array(&data, ByteOrder::BigEndian);
    let _ = read_u32(&data, 0, ByteOrder::LittleEndian);

    assert_eq!(data, before);
}
