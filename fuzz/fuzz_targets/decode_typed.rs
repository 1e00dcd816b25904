#![no_main]
use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;
use mapack::Decoder;

fuzz_target!(|data: &[u8]| {
    let mut typed: Option<BTreeMap<i64, String>> = None;
    let _ = Decoder::new(data).read_map_into(&mut typed);

    let mut text: Option<BTreeMap<String, String>> = None;
    let _ = Decoder::new(data).read_str_map_into(&mut text);
});
