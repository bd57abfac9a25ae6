use std::io;

/// 拉取式数据源，每次调用返回下一个值，`None`表示已经结束。
///
/// 任何`FnMut() -> Option<T>`闭包都是数据源。
pub trait Source {
    type Item;

    fn pull(&mut self) -> Option<Self::Item>;

    /// 数据源自身持有的资源，默认无需释放。
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T, F> Source for F
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self()
    }
}

/// 把普通迭代器当作数据源。
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        IterSource { iter: iter.into_iter() }
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}
