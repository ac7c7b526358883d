use super::*;

macro_rules! lit {
    ($v:literal) => {
        Segment::Literal($v.to_string())
    };
}

macro_rules! var {
    ($v:literal, $l:literal, $c:literal) => {
        Segment::Reference(RawReference::new(
            $v.to_string(),
            $v.contains('{'),
            Position::new($l, $c),
        ))
    };
}

fn assert_segments(input: &str, expected: Vec<Segment>) {
    let segments = scan(input, '$').unwrap();
    assert_eq!(expected, segments, "input: {:?}", input);
}

#[test]
fn scan_empty() {
    assert_segments("", vec![]);
}

#[test]
fn scan_plain_text() {
    assert_segments("FOO", vec![lit!("FOO")]);
}

#[test]
fn lone_sigils_are_literal() {
    assert_segments("$", vec![lit!("$")]);
    assert_segments("BAR$", vec![lit!("BAR$")]);
    assert_segments("B$-AR", vec![lit!("B$-AR")]);
    assert_segments("$1", vec![lit!("$1")]);
    assert_segments("$ x", vec![lit!("$ x")]);
}

#[test]
fn sigil_before_a_name_starts_a_reference() {
    assert_segments("$AR", vec![var!("$AR", 1, 1)]);
    assert_segments("B-$AR", vec![lit!("B-"), var!("$AR", 1, 3)]);
}

#[test]
fn unbraced_sigil_inside_a_word_is_literal() {
    assert_segments("B$AR", vec![lit!("B$AR")]);
    assert_segments("lib_$X.so", vec![lit!("lib_$X.so")]);
    assert_segments("B${AR}", vec![lit!("B"), var!("${AR}", 1, 2)]);
}

#[test]
fn references_can_follow_each_other() {
    assert_segments(
        "$A$B${C}$D",
        vec![
            var!("$A", 1, 1),
            var!("$B", 1, 3),
            var!("${C}", 1, 5),
            var!("$D", 1, 9),
        ],
    );
}

#[test]
fn double_sigil_keeps_the_first_literal() {
    assert_segments("$$FOO", vec![lit!("$"), var!("$FOO", 1, 2)]);
}

#[test]
fn simple_reference_stops_at_first_non_identifier_char() {
    assert_segments(
        "$FOO_1.txt",
        vec![var!("$FOO_1", 1, 1), lit!(".txt")],
    );
}

#[test]
fn braced_references() {
    assert_segments(
        "${FOO}:$BIZ",
        vec![var!("${FOO}", 1, 1), lit!(":"), var!("$BIZ", 1, 8)],
    );
    assert_segments("${FOO:-a b}!", vec![var!("${FOO:-a b}", 1, 1), lit!("!")]);
}

#[test]
fn braces_do_not_nest() {
    assert_segments("${A${B}}", vec![var!("${A${B}", 1, 1), lit!("}")]);
}

#[test]
fn positions_track_lines() {
    assert_segments(
        "a\nb $X\n${Y}",
        vec![
            lit!("a\nb "),
            var!("$X", 2, 3),
            lit!("\n"),
            var!("${Y}", 3, 1),
        ],
    );
}

#[test]
fn unterminated_expansion_is_an_error() {
    let err = scan("ab\n  ${FOO:-x", '$').unwrap_err();
    assert_eq!(ErrorKind::UnterminatedExpansion, err.kind());
    assert_eq!(Position::new(2, 3), err.position());
    assert_eq!("bad substitution", err.to_string());
}

#[test]
fn literal_before_an_error_is_still_yielded() {
    let mut scanner = Scanner::new("ab${".chars(), '$');
    assert_eq!(Some(Ok(lit!("ab"))), scanner.next());
    assert!(matches!(scanner.next(), Some(Err(_))));
    assert_eq!(None, scanner.next());
}

#[test]
fn custom_sigil() {
    let segments = scan("100$ %HOME and %{USER}%", '%').unwrap();
    assert_eq!(
        vec![
            lit!("100$ "),
            var!("%HOME", 1, 6),
            lit!(" and "),
            var!("%{USER}", 1, 16),
            lit!("%"),
        ],
        segments
    );
}

#[test]
fn reference_bodies() {
    let segments = scan("$FOO${BAR:1:2}${}", '$').unwrap();
    let bodies: Vec<_> = segments
        .iter()
        .map(|s| match s {
            Segment::Reference(r) => r.body(),
            Segment::Literal(_) => panic!("unexpected literal"),
        })
        .collect();
    assert_eq!(vec!["FOO", "BAR:1:2", ""], bodies);
}

#[test]
fn segments_reproduce_the_input() {
    for input in [
        "",
        "no references here",
        "$",
        "$$",
        "trailing $",
        "$FOO bar ${BAZ:-qux} $ $1 ${X}${Y}",
        "ünïcödé $ÄÖ ${é}",
        "multi\nline\n$VAR\n",
    ] {
        let segments = scan(input, '$').unwrap();
        let rebuilt: String = segments.iter().map(Segment::source).collect();
        assert_eq!(input, rebuilt);
    }
}
