use crate::err::StreamErr;
use crate::StreamRes;
use log::debug;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

/// 转换后出现重复键时的处理方式。
#[derive(Debug, Eq, PartialEq, Clone, Copy, Default)]
pub enum DuplicateKeys {
    /// 后出现的值覆盖先出现的值。
    #[default]
    Overwrite,
    /// 保留先出现的值。
    KeepFirst,
    /// 返回[`StreamErr::DuplicateKey`]错误。
    Error,
}

/// 分别转换键和值，生成新的映射。
pub fn map_check_new_key_uniqueness<K, V, R, S>(
    entries: impl IntoIterator<Item = (K, V)>, mut key_mapper: impl FnMut(&K) -> R,
    mut value_mapper: impl FnMut(V) -> S, policy: DuplicateKeys,
) -> StreamRes<FxHashMap<R, S>>
where
    K: Debug,
    R: Eq + Hash + Debug,
{
    map_entries_check_uniqueness(entries, |k, v| (key_mapper(&k), value_mapper(v)), policy)
}

/// 转换键，值保持不变，转换后的键必须唯一。
pub fn map_require_unique<K, V, R>(
    entries: impl IntoIterator<Item = (K, V)>, key_mapper: impl FnMut(&K) -> R,
) -> StreamRes<FxHashMap<R, V>>
where
    K: Debug,
    R: Eq + Hash + Debug,
{
    map_check_new_key_uniqueness(entries, key_mapper, |v| v, DuplicateKeys::Error)
}

pub fn map_require_unique_with<K, V, R, S>(
    entries: impl IntoIterator<Item = (K, V)>, key_mapper: impl FnMut(&K) -> R, value_mapper: impl FnMut(V) -> S,
) -> StreamRes<FxHashMap<R, S>>
where
    K: Debug,
    R: Eq + Hash + Debug,
{
    map_check_new_key_uniqueness(entries, key_mapper, value_mapper, DuplicateKeys::Error)
}

/// 同时转换键和值，生成新的映射。
///
/// 策略为[`DuplicateKeys::Error`]时，错误中包含冲突的新键以及产生它的两个原始键。
pub fn map_entries_check_uniqueness<K, V, R, S>(
    entries: impl IntoIterator<Item = (K, V)>, mut entry_mapper: impl FnMut(K, V) -> (R, S), policy: DuplicateKeys,
) -> StreamRes<FxHashMap<R, S>>
where
    K: Debug,
    R: Eq + Hash + Debug,
{
    let entries = entries.into_iter();
    let mut res = FxHashMap::default();
    match policy {
        DuplicateKeys::Overwrite => {
            res.extend(entries.map(|(k, v)| entry_mapper(k, v)));
        }
        DuplicateKeys::KeepFirst => {
            for (k, v) in entries {
                let (key, value) = entry_mapper(k, v);
                res.entry(key).or_insert(value);
            }
        }
        DuplicateKeys::Error => {
            // 记录每个新键对应的原始键，用于错误信息
            let mut checked: FxHashMap<R, (S, String)> = FxHashMap::default();
            for (k, v) in entries {
                let original = format!("{k:?}");
                let (key, value) = entry_mapper(k, v);
                match checked.entry(key) {
                    Entry::Occupied(occupied) => {
                        let err = StreamErr::DuplicateKey {
                            key: format!("{:?}", occupied.key()),
                            first: occupied.get().1.clone(),
                            second: original,
                        };
                        debug!("{err}");
                        return Err(err);
                    }
                    Entry::Vacant(vacant) => {
                        vacant.insert((value, original));
                    }
                }
            }
            res.extend(checked.into_iter().map(|(key, (value, _))| (key, value)));
        }
    }
    Ok(res)
}
