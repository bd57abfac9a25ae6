use crate::err::StreamErr;
use crate::StreamRes;
use itertools::Itertools;
use log::debug;

/// 把元素拆分到`ways`个集合中，并可过滤掉部分元素。
///
/// `splitter`返回`Some(i)`表示放入第`i`个集合，`i`必须小于`ways`；返回`None`表示丢弃该元素。
pub fn split_filter_n_way<E>(
    items: impl IntoIterator<Item = E>, ways: usize, splitter: impl FnMut(&E) -> Option<usize>,
) -> StreamRes<Vec<Vec<E>>> {
    let mut colls = (0..ways).map(|_| Vec::new()).collect_vec();
    split_filter_n_way_into(items, &mut colls, splitter)?;
    Ok(colls)
}

/// 同[`split_filter_n_way`]，但不过滤任何元素。
pub fn split_n_way<E>(
    items: impl IntoIterator<Item = E>, ways: usize, mut splitter: impl FnMut(&E) -> usize,
) -> StreamRes<Vec<Vec<E>>> {
    split_filter_n_way(items, ways, |e| Some(splitter(e)))
}

/// 拆分到调用方提供的集合中，集合数量即拆分数量。
///
/// 出错时已经放入集合的元素会保留。
pub fn split_filter_n_way_into<E, C: Extend<E>>(
    items: impl IntoIterator<Item = E>, colls: &mut [C], mut splitter: impl FnMut(&E) -> Option<usize>,
) -> StreamRes<()> {
    let ways = colls.len();
    for item in items {
        match splitter(&item) {
            Some(index) if index < ways => colls[index].extend(Some(item)),
            Some(index) => {
                debug!("splitter returned {index} for {ways} ways");
                return Err(StreamErr::SplitIndexOutOfRange { index, ways });
            }
            None => {}
        }
    }
    Ok(())
}

/// 按照断言拆分为两部分，满足断言的元素在前一个集合中。
pub fn split_filter<E, C>(items: impl IntoIterator<Item = E>, mut predicate: impl FnMut(&E) -> bool) -> (C, C)
where
    C: Default + Extend<E>,
{
    let mut matched = C::default();
    let mut rest = C::default();
    for item in items {
        if predicate(&item) {
            matched.extend(Some(item));
        } else {
            rest.extend(Some(item));
        }
    }
    (matched, rest)
}

pub fn split_2_way<E>(items: impl IntoIterator<Item = E>, predicate: impl FnMut(&E) -> bool) -> (Vec<E>, Vec<E>) {
    split_filter(items, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, LinkedList};

    const EXPECTED: [&[i32]; 4] = [&[0, 4, 8, 12, 16], &[1, 5, 9, 13, 17], &[2, 6, 10, 14, 18], &[3, 7, 11, 15, 19]];
    const EXPECTED_FILTERED: [&[i32]; 4] = [&[4, 8, 12, 16], &[1, 5, 9, 13, 17], &[2, 6, 10, 18], &[3, 11, 15, 19]];

    #[test]
    fn test_split_n_way() {
        let res = split_n_way(0..20, 4, |i| (*i % 4) as usize).unwrap();
        assert_eq!(EXPECTED.to_vec(), res);
    }

    #[test]
    fn test_split_filter_n_way() {
        let res = split_filter_n_way(0..20, 4, |i| if i % 7 == 0 { None } else { Some((i % 4) as usize) }).unwrap();
        assert_eq!(EXPECTED_FILTERED.to_vec(), res);
    }

    #[test]
    fn test_split_filter_n_way_into() {
        let mut colls = vec![LinkedList::new(), LinkedList::new(), LinkedList::new(), LinkedList::new()];
        split_filter_n_way_into(0..20, &mut colls, |i| Some((i % 4) as usize)).unwrap();
        for (coll, expected) in colls.iter().zip(EXPECTED) {
            assert_eq!(expected, coll.iter().copied().collect_vec());
        }
    }

    #[test]
    fn test_split_out_of_range() {
        assert_eq!(
            Err(StreamErr::SplitIndexOutOfRange { index: 4, ways: 4 }),
            split_n_way(0..20, 4, |i| (*i % 5) as usize)
        );
        let mut colls: [Vec<i32>; 2] = Default::default();
        assert_eq!(
            Err(StreamErr::SplitIndexOutOfRange { index: 2, ways: 2 }),
            split_filter_n_way_into(0..5, &mut colls, |i| Some(*i as usize))
        );
        assert_eq!([vec![0], vec![1]], colls);
    }

    #[test]
    fn test_split_2_way() {
        let evens = (0..20).step_by(2).collect_vec();
        let odds = (1..20).step_by(2).collect_vec();
        assert_eq!((evens.clone(), odds.clone()), split_2_way(0..20, |i| i % 2 == 0));

        let (even_set, odd_set): (BTreeSet<i32>, BTreeSet<i32>) = split_filter((0..20).rev(), |i| i % 2 == 0);
        assert_eq!(evens, even_set.into_iter().collect_vec());
        assert_eq!(odds, odd_set.into_iter().collect_vec());
    }
}
