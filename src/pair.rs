/// 成对遍历`keys`和`values`，到较短的一方结束为止，返回遍历的对数。
pub fn for_each_pair<K, V>(
    keys: impl IntoIterator<Item = K>, values: impl IntoIterator<Item = V>, mut f: impl FnMut(K, V),
) -> usize {
    let mut count = 0;
    for (k, v) in keys.into_iter().zip(values) {
        f(k, v);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_for_each_pair() {
        let mut res = Vec::new();
        assert_eq!(3, for_each_pair(["a", "b", "c", "d"], [1, 2, 3], |k, v| res.push(format!("{k}{v}"))));
        assert_eq!(vec!["a1", "b2", "c3"], res);
        assert_eq!(0, for_each_pair(Vec::<u8>::new(), 0.., |_, _| unreachable!()));
    }

    quickcheck! {
        fn prop_stops_at_shorter(keys: Vec<u8>, values: Vec<i16>) -> bool {
            let mut seen = Vec::new();
            let count = for_each_pair(&keys, &values, |k, v| seen.push((*k, *v)));
            count == keys.len().min(values.len()) && seen.iter().enumerate().all(|(i, p)| *p == (keys[i], values[i]))
        }
    }
}
