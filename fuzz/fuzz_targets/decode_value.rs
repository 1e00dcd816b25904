#![no_main]
use libfuzzer_sys::fuzz_target;
use mapack::Decoder;

fuzz_target!(|data: &[u8]| {
    let _ = Decoder::new(data).read_value();
});
