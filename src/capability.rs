use crate::err::StreamErr;
use crate::StreamRes;
use std::io;

/// 可以预览下一个元素而不消费它的数据源。
pub trait Peekable<T> {
    /// 下一个元素，没有更多元素时返回`None`。
    fn peek(&self) -> Option<&T>;
}

/// 持有需要显式释放的外部资源。
pub trait Closable {
    /// 释放资源，资源本身的错误原样返回。
    fn close(&mut self) -> io::Result<()>;
}

/// 可以查询游标位置。
pub trait Indexable {
    /// 最近一次`next`返回的元素索引，尚未返回任何元素时为`None`。
    fn previous_index(&self) -> Option<usize>;

    /// 下一次`next`将返回的元素索引，始终等于`previous_index() + 1`。
    fn next_index(&self) -> usize;
}

/// 同时具备预览、释放、索引能力的迭代器。
pub trait EnhancedIterator<T>: Iterator<Item = T> + Peekable<T> + Closable + Indexable {}

impl<T, I> EnhancedIterator<T> for I where I: Iterator<Item = T> + Peekable<T> + Closable + Indexable {}

/// 双向游标，支持回退和标记/复位。
///
/// 游标只能回放已经产生的元素，`add`、`set`、`remove`这类原地修改操作始终返回
/// [`StreamErr::Unsupported`]。
pub trait ListCursor<T>: Indexable {
    fn has_previous(&self) -> bool;

    /// 游标后退一位并返回该位置的元素。
    fn previous(&mut self) -> StreamRes<&T>;

    /// 返回游标前一位的元素，不移动游标。
    fn peek_previous(&self) -> StreamRes<&T>;

    /// 记录当前游标位置并返回。
    fn mark(&mut self) -> usize;

    /// 游标复位到最近一次`mark`的位置。
    fn reset(&mut self) -> StreamRes<()>;

    /// 游标直接移动到指定位置，不要求事先`mark`。
    fn reset_to(&mut self, position: usize) -> StreamRes<()>;

    fn add(&mut self, _elem: T) -> StreamRes<()> {
        Err(StreamErr::unsupported("add"))
    }

    fn set(&mut self, _elem: T) -> StreamRes<()> {
        Err(StreamErr::unsupported("set"))
    }

    fn remove(&mut self) -> StreamRes<()> {
        Err(StreamErr::unsupported("remove"))
    }
}
