use rstreams::{
    Closable, EnhancedIter, Indexable, IterLimited, LineOpts, ListBuilderIter, ListCursor, Peekable, ReadLinesOpts,
    StreamErr, StringLines, split_n_way,
};
use std::cell::Cell;
use std::io::Cursor;
use std::rc::Rc;

#[test]
fn test_lines_through_list_builder() {
    let text = "header\nrow 1\r\nrow 2\rrow 3\n";
    let mut iter = ListBuilderIter::new(StringLines::new(text));
    assert_eq!(Some(&"header".to_owned()), iter.peek());
    assert_eq!(Some("header".to_owned()), iter.next());
    let body = iter.mark();
    assert_eq!(vec!["row 1", "row 2", "row 3"], iter.by_ref().collect::<Vec<_>>());
    assert!(!iter.has_next());

    iter.reset().unwrap();
    assert_eq!(body, iter.next_index());
    assert_eq!(Ok(&"header".to_owned()), iter.peek_previous());
    assert_eq!(Some("row 1".to_owned()), iter.next());
    assert_eq!(4, iter.iterator_results().len());
}

#[test]
fn test_lines_with_opts() {
    let opts = LineOpts::default().eol_as_two_lines(true).include_eol(true).normalize_eol(true);
    let lines = StringLines::with_opts("a\r\nb\n", opts).collect::<Vec<_>>();
    assert_eq!(vec!["a\n", "b\n", ""], lines);
}

#[test]
fn test_reader_source() {
    let reader = Cursor::new("first\r\nsecond\nthird");
    let closed = Rc::new(Cell::new(0));
    let counter = closed.clone();
    let opts = ReadLinesOpts::default().modifier(|line| line.to_uppercase());
    let mut iter = EnhancedIter::from_reader(reader, opts);
    assert_eq!(None, iter.previous_index());
    let all = iter.by_ref().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(vec!["FIRST", "SECOND", "THIRD"], all);
    assert_eq!(3, iter.next_index());
    iter.close().unwrap();

    let mut iter = EnhancedIter::with_closer(rstreams::IterSource::new(vec![1, 2, 3]), move || {
        counter.set(counter.get() + 1);
        Ok(())
    });
    assert_eq!(Ok(1), iter.try_next());
    iter.close().unwrap();
    assert_eq!(1, closed.get());
}

#[test]
fn test_limited_and_split() {
    let mut limited = IterLimited::new(StringLines::new("1\n2\n3\n4"));
    let numbers = (&mut limited).into_iter().map(|line| line.parse::<u32>().unwrap()).collect::<Vec<_>>();
    let [even, odd] = <[Vec<u32>; 2]>::try_from(split_n_way(numbers, 2, |n| (n % 2) as usize).unwrap()).unwrap();
    assert_eq!(vec![2, 4], even);
    assert_eq!(vec![1, 3], odd);
    assert_eq!(0, (&mut limited).into_iter().count());

    assert_eq!(
        Err(StreamErr::SplitIndexOutOfRange { index: 3, ways: 2 }),
        split_n_way([3], 2, |n| *n as usize)
    );
}
