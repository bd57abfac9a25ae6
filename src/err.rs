use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum StreamErr {
    #[error("[Exhausted] No more elements in iterator")]
    Exhausted,

    #[error("[Out Of Bounds] Index `{index}` out of [0, {len}]")]
    OutOfBounds { index: usize, len: KnownLen },

    #[error("[Out Of Bounds] No element before the first one")]
    BeforeFirst,

    #[error("[Not Marked] Iterator not yet marked")]
    NotMarked,

    #[error("[Unsupported] Operation `{op}` is not supported")]
    Unsupported { op: &'static str },

    #[error("[Bad Split] Splitter result must be in the range [0, {ways}), was: {index}")]
    SplitIndexOutOfRange { index: usize, ways: usize },

    #[error("[Bad Range] Byte index `{index}` is not a char boundary")]
    NotCharBoundary { index: usize },

    #[error("[Duplicate Key] Duplicate key: `{key}` first: {first}, second: {second}")]
    DuplicateKey { key: String, first: String, second: String },
}

impl StreamErr {
    pub(crate) fn out_of_bounds(index: usize, len: Option<usize>) -> StreamErr {
        StreamErr::OutOfBounds { index, len: KnownLen(len) }
    }

    pub(crate) fn unsupported(op: &'static str) -> StreamErr {
        StreamErr::Unsupported { op }
    }
}

/// 越界错误中的长度，流式数据源的总长度可能未知。
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct KnownLen(pub Option<usize>);

impl Display for KnownLen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(len) => write!(f, "{len}"),
            None => write!(f, "unknown"),
        }
    }
}
