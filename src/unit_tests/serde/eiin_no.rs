use crate::types::institute::EiinNo;
use serde_test::{assert_de_tokens, assert_tokens, Token};

#[test]
fn eiin_no() {
    // serializes as a string and deserializes from a string
    assert_tokens(&EiinNo::from("118632"), &[Token::Str("118632")]);
    // the registry also emits the identifier as a number
    assert_de_tokens(&EiinNo::from("118632"), &[Token::U64(118632)]);
    assert_de_tokens(&EiinNo::from("118632"), &[Token::I64(118632)]);
}
