#![no_main]

use fixedbytes::{decode, encode_value, to_hex_string, to_i16_array, ByteOrder, IntKind, Parser};
use libfuzzer_sys::fuzz_target;
use strum::IntoEnumIterator;

fuzz_target!(|data: &[u8]| {
    // First byte picks the offset, the rest is the buffer under test
    let Some((&offset, buffer)) = data.split_first() else {
        return;
    };
    let offset = usize::from(offset);

    for kind in IntKind::iter() {
        for order in ByteOrder::iter() {
            match decode(buffer, offset, kind, order) {
                Ok(value) => {
                    let bytes = encode_value(value, kind, order).unwrap();
                    assert_eq!(bytes, &buffer[offset..offset + kind.width()]);
                }
                Err(_) => assert!(offset + kind.width() > buffer.len()),
            }
        }
    }

    assert_eq!(to_i16_array(buffer).len(), buffer.len() / 2);
    let hex = to_hex_string(buffer);
    assert_eq!(hex.len(), (buffer.len() * 3).saturating_sub(1));

    let mut parser = Parser::new(buffer);
    while parser.read_le::<u16>().is_ok() {}
    assert!(parser.remaining() < 2);
});
