use crate::env::Size;

use super::{ErrorKind, IStr, Split, W};

#[test]
fn test_try_line() {
    let mut input = IStr::new(b"a\n\nb\n");
    assert_eq!(input.try_line::<&str>().unwrap(), Some("a"));
    assert_eq!(input.try_line::<&str>().unwrap(), Some(""));
    assert_eq!(input.try_line::<&str>().unwrap(), Some("b"));
    assert_eq!(input.try_line::<&str>().unwrap(), None);
}

#[test]
fn test_line_indexes() {
    let mut input = IStr::new(b"ab\ncde\nf");

    let indexes = input
        .lines::<IStr>()
        .map(|line| line.map(|line| line.index().get()))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(indexes, [0, 3, 7]);
}

#[test]
fn test_trim() {
    let input = IStr::new(b"  ab \r").trim();
    assert_eq!(input.as_data(), b"ab");
    assert_eq!(input.index().get(), 2);

    let input = IStr::new(b" \t ").trim();
    assert!(input.is_empty());
    assert_eq!(input.index().get(), 3);
}

#[test]
fn test_split_at_str() {
    let input = IStr::new(b"Game 1: 2 red");
    let (head, tail) = input.split_at_str(b": ").unwrap();
    assert_eq!(head.as_data(), b"Game 1");
    assert_eq!(tail.as_data(), b"2 red");
    assert_eq!(tail.index().get(), 8);

    assert!(input.split_at_str(b";").is_none());
}

#[test]
fn test_split_str() {
    let pieces = IStr::new(b"a; bb; c")
        .split_str(b"; ")
        .map(|s| (s.as_bstr().to_string(), s.index().get()))
        .collect::<Vec<_>>();

    assert_eq!(
        pieces,
        [
            (String::from("a"), 0),
            (String::from("bb"), 3),
            (String::from("c"), 7)
        ]
    );

    let pieces = IStr::new(b"").split_str(b"; ").collect::<Vec<_>>();
    assert_eq!(pieces.len(), 1);
    assert!(pieces[0].is_empty());

    let pieces = IStr::new(b"a;;b").split_str(b";").count();
    assert_eq!(pieces, 3);
}

#[test]
fn test_words() {
    let mut input = IStr::new(b"  3   blue ");
    let (count, W(color)) = input.next::<(u32, W<&str>)>().unwrap();
    assert_eq!(count, 3);
    assert_eq!(color, "blue");
    assert!(input.is_blank());
}

#[test]
fn test_not_integer() {
    let error = IStr::new(b"  x1 ").next::<u32>().unwrap_err();
    assert_eq!(*error.kind(), ErrorKind::NotInteger("x1".into()));
    assert_eq!(error.span(), Size::new(2)..Size::new(4));

    let error = IStr::new(b"4294967296").next::<u32>().unwrap_err();
    assert_eq!(*error.kind(), ErrorKind::NotInteger("4294967296".into()));
}

#[test]
fn test_expected_tuple() {
    let error = IStr::new(b"3").next::<(u32, u32)>().unwrap_err();
    assert_eq!(*error.kind(), ErrorKind::ExpectedTuple(2));
}

#[test]
fn test_split() {
    let Split(values) = IStr::new(b"12, 13,14").next::<Split<',', [u32; 3]>>().unwrap();
    assert_eq!(values, [12, 13, 14]);

    let mut input = IStr::new(b"1,2,3,4");
    let Split(values) = input.next::<Split<',', [u32; 3]>>().unwrap();
    assert_eq!(values, [1, 2, 3]);
    assert_eq!(input.as_data(), b"4");

    assert!(IStr::new(b"1,2").next::<Split<',', [u32; 3]>>().is_err());
    assert!(IStr::new(b"1,,3").next::<Split<',', [u32; 3]>>().is_err());
}
