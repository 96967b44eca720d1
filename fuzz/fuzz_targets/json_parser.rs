#![no_main]
use jparse::{BufferReader, Config, Parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = BufferReader::new(data);
    let mut parser = Parser::with_config(&mut reader, Config::default().with_max_depth(64));
    let result = parser.parse();
    assert_eq!(result.is_err(), parser.last_error().is_some());
});
