#![no_main]

use libfuzzer_sys::fuzz_target;
use tandem::primitives::{char, filter_char};
use tandem::{ParseConfig, Strategy, Syntax};

// tree = word | '(' tree (',' tree)* ')'
fn grammar() -> Syntax<&'static str, char, char, (), ()> {
    let word = filter_char(|c| c.is_ascii_alphanumeric(), "word character")
        .repeat()
        .transform(|_: Vec<char>| (), |_: &()| vec!['w']);
    let nested = Syntax::defer(grammar)
        .repeat_with_sep0(char(','))
        .between(char('('), char(')'))
        .transform(|_: Vec<()>| (), |_: &()| Vec::new());
    word.or_else(nested)
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let syntax = grammar();

        // Neither backend may panic, and both must agree on outcome and
        // failure position. The recursion limit bounds pathological nesting.
        let slice = syntax.parse_str_with(s, ParseConfig::new().with_strategy(Strategy::Slice));
        let buffered =
            syntax.parse_str_with(s, ParseConfig::new().with_strategy(Strategy::Buffered));
        assert_eq!(slice, buffered);
    }
});
