//! 可组合的迭代器工具：拉取式数据源适配、可回退的记录迭代器、按行拆分文本以及集合拆分与映射辅助函数。

pub use crate::capability::{Closable, EnhancedIterator, Indexable, ListCursor, Peekable};
pub use crate::config::{LineOpts, ReadLinesOpts};
pub use crate::enhanced::EnhancedIter;
pub use crate::err::{KnownLen, StreamErr};
pub use crate::limited::{Draw, IterLimited};
pub use crate::lines::{ReaderLines, StringLines};
pub use crate::list_builder::ListBuilderIter;
pub use crate::list_iter::ListIter;
pub use crate::map::{
    DuplicateKeys, map_check_new_key_uniqueness, map_entries_check_uniqueness, map_require_unique,
    map_require_unique_with,
};
pub use crate::pair::for_each_pair;
pub use crate::source::{IterSource, Source};
pub use crate::split::{split_2_way, split_filter, split_filter_n_way, split_filter_n_way_into, split_n_way};

mod capability;
mod config;
mod enhanced;
mod err;
mod limited;
mod lines;
mod list_builder;
mod list_iter;
mod map;
mod pair;
mod source;
mod split;

pub type StreamRes<T> = Result<T, StreamErr>;
