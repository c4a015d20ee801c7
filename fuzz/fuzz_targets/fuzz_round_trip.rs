#![no_main]

use libfuzzer_sys::fuzz_target;
use sexpr_syntax::{parse, print};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(expr) = parse(s) {
            // Every accepted input prints, and the printed form reparses to
            // the same value.
            let printed = print(&expr).expect("parsed value must print");
            let reparsed = parse(&printed).expect("printed output must reparse");
            assert_eq!(reparsed, expr);
        }
    }
});
