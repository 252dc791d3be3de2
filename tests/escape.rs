use regex_examples::{
    Ast, CharClass, ClassItem, Error, ErrorKind, Group, Illegal, Malformed, Repeater, Result,
    Unsupported, parse_pattern,
};

#[track_caller]
fn parse_err(pattern: &str) -> Error {
    match parse_pattern(pattern) {
        Ok(ast) => panic!("Expected error for pattern {pattern:?}, got {ast:?}"),
        Err(err) => err,
    }
}

fn once(group: Group) -> Repeater {
    Repeater::OneTime(Box::new(group))
}

fn literals(chars: &str) -> Vec<Repeater> {
    chars.chars().map(|c| once(Group::single(c))).collect()
}

fn backref(reference: &str) -> Repeater {
    once(Group::BackReference(reference.to_string()))
}

#[test]
fn test_numeric_backreference_escape() -> Result<()> {
    assert_eq!(parse_pattern(r"\1")?, [backref("1")]);
    assert_eq!(parse_pattern(r"\12")?, [backref("12")]);
    let ast = parse_pattern(r"(a)\1b")?;
    assert_eq!(ast[1], backref("1"));
    assert_eq!(ast[2], once(Group::single('b')));
    Ok(())
}

#[test]
fn test_named_backreference_escape() -> Result<()> {
    assert_eq!(parse_pattern(r"\k<name>")?, [backref("name")]);
    let ast = parse_pattern(r"(?<n>a)\k<n>+")?;
    assert_eq!(
        ast[1],
        Repeater::Plus(Box::new(Group::BackReference("n".to_string())))
    );
    Ok(())
}

#[test]
fn test_unterminated_named_backreference_is_literal() -> Result<()> {
    assert_eq!(parse_pattern(r"\k<n")?.into_repeaters(), literals("k<n"));
    Ok(())
}

#[test]
fn test_shorthand_class_escape() -> Result<()> {
    assert_eq!(
        parse_pattern(r"\d")?,
        [once(Group::Char(CharClass::new(
            vec![ClassItem::Range('0', '9')],
            false
        )))]
    );
    assert_eq!(
        parse_pattern(r"\w+")?,
        [Repeater::Plus(Box::new(Group::Char(
            CharClass::from_shorthand('w').unwrap()
        )))]
    );
    assert_eq!(
        parse_pattern(r"\n")?,
        [once(Group::Char(CharClass::new(
            vec![ClassItem::Char('\n')],
            false
        )))]
    );
    Ok(())
}

#[test]
fn test_control_character_escape() -> Result<()> {
    assert_eq!(parse_pattern(r"\cA")?.into_repeaters(), literals("\x01"));
    assert_eq!(parse_pattern(r"\C-a")?.into_repeaters(), literals("\x01"));
    assert_eq!(parse_pattern(r"\c?x")?.into_repeaters(), literals("\x1fx"));
    Ok(())
}

#[test]
fn test_hex_escape() -> Result<()> {
    assert_eq!(parse_pattern(r"\x41")?.into_repeaters(), literals("A"));
    assert_eq!(parse_pattern(r"\x7")?.into_repeaters(), literals("\x07"));
    assert_eq!(parse_pattern(r"\x411")?.into_repeaters(), literals("A1"));
    assert_eq!(parse_pattern(r"\xg")?.into_repeaters(), literals("xg"));
    Ok(())
}

#[test]
fn test_unicode_escape() -> Result<()> {
    assert_eq!(parse_pattern(r"\u00e9")?.into_repeaters(), literals("é"));
    assert_eq!(parse_pattern(r"\u{e9}")?.into_repeaters(), literals("é"));
    assert_eq!(parse_pattern(r"\u{20AC}!")?.into_repeaters(), literals("€!"));
    assert_eq!(
        parse_err(r"\uD800"),
        Error::Malformed {
            pos: 1,
            reason: Malformed::InvalidScalar(0xd800)
        }
    );
    Ok(())
}

#[test]
fn test_named_property_escape() {
    assert_eq!(
        parse_err(r"a\p{Alpha}"),
        Error::UnsupportedSyntax {
            pos: 2,
            feature: Unsupported::NamedProperty("Alpha".to_string())
        }
    );
}

#[test]
fn test_subexpression_call_escape() {
    assert_eq!(
        parse_err(r"(a)\g<1>"),
        Error::UnsupportedSyntax {
            pos: 4,
            feature: Unsupported::SubexpressionCall
        }
    );
}

#[test]
fn test_anchor_escapes() {
    for pattern in [r"\b", r"a\B", r"\Ga"] {
        assert_eq!(parse_err(pattern).kind(), ErrorKind::Illegal, "{pattern}");
    }
    assert_eq!(
        parse_err(r"a\bc"),
        Error::IllegalSyntax {
            pos: 2,
            reason: Illegal::Anchor
        }
    );
}

#[test]
fn test_boundary_anchor_escapes() -> Result<()> {
    let abc = literals("abc");
    assert_eq!(parse_pattern(r"\Aabc")?.into_repeaters(), abc);
    assert_eq!(parse_pattern(r"abc\z")?.into_repeaters(), abc);
    assert_eq!(parse_pattern(r"abc\Z")?.into_repeaters(), abc);
    assert_eq!(parse_pattern(r"\A\z")?, Ast::default());
    assert_eq!(parse_err(r"a\A").pos(), 2);
    assert_eq!(parse_err(r"a\zb").kind(), ErrorKind::Illegal);
    Ok(())
}

#[test]
fn test_escaped_literals() -> Result<()> {
    assert_eq!(parse_pattern(r"\.\*\\")?.into_repeaters(), literals(".*\\"));
    assert_eq!(
        parse_pattern(r"a\*+")?,
        [
            once(Group::single('a')),
            Repeater::Plus(Box::new(Group::single('*')))
        ]
    );
    assert_eq!(parse_pattern(r"\p")?.into_repeaters(), literals("p"));
    Ok(())
}
