use crate::capability::{Closable, Indexable, Peekable};
use crate::config::ReadLinesOpts;
use crate::err::StreamErr;
use crate::lines::ReaderLines;
use crate::source::{IterSource, Source};
use crate::StreamRes;
use log::trace;
use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

pub(crate) type Closer = Box<dyn FnMut() -> io::Result<()>>;

/// 把拉取式数据源转换为可预览、可释放、可查询索引的迭代器。
///
/// 构造时立即拉取第一个值作为预览，此后每次`next`都会提前拉取下一个值，因此
/// `peek`和`has_next`没有副作用。
pub struct EnhancedIter<S: Source> {
    source: S,
    /// 外部资源，未指定时释放数据源自身。
    closer: Option<Closer>,
    next: Option<S::Item>,
    prev_index: Option<usize>,
}

impl<S: Source> EnhancedIter<S> {
    pub fn new(source: S) -> Self {
        Self::build(source, None)
    }

    pub fn with_closer(source: S, closer: impl FnMut() -> io::Result<()> + 'static) -> Self {
        Self::build(source, Some(Box::new(closer)))
    }

    fn build(mut source: S, closer: Option<Closer>) -> Self {
        let next = source.pull();
        EnhancedIter { source, closer, next, prev_index: None }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// 同`next`，但是没有更多元素时返回[`StreamErr::Exhausted`]。
    pub fn try_next(&mut self) -> StreamRes<S::Item> {
        self.next().ok_or(StreamErr::Exhausted)
    }
}

impl<I: Iterator> EnhancedIter<IterSource<I>> {
    pub fn from_iterable(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self::new(IterSource::new(iter))
    }
}

impl<R: BufRead> EnhancedIter<ReaderLines<R>> {
    /// 按行读取`reader`，`close`时释放读取器。
    pub fn from_reader(reader: R, opts: ReadLinesOpts) -> Self {
        Self::new(ReaderLines::new(reader, opts))
    }
}

impl EnhancedIter<ReaderLines<BufReader<File>>> {
    /// 按行读取文件，文件内容必须是UTF-8编码。
    pub fn from_path(path: impl AsRef<Path>, opts: ReadLinesOpts) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file), opts))
    }
}

impl<S: Source> Iterator for EnhancedIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.next.take()?;
        let index = self.next_index();
        self.next = self.source.pull();
        self.prev_index = Some(index);
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_some() { (1, None) } else { (0, Some(0)) }
    }
}

impl<S: Source> FusedIterator for EnhancedIter<S> {}

impl<S: Source> Peekable<S::Item> for EnhancedIter<S> {
    fn peek(&self) -> Option<&S::Item> {
        self.next.as_ref()
    }
}

impl<S: Source> Closable for EnhancedIter<S> {
    fn close(&mut self) -> io::Result<()> {
        let index = self.next_index();
        match &mut self.closer {
            Some(closer) => {
                trace!("close external resource at index {index}");
                closer()
            }
            None => {
                trace!("close source at index {index}");
                self.source.close()
            }
        }
    }
}

impl<S: Source> Indexable for EnhancedIter<S> {
    fn previous_index(&self) -> Option<usize> {
        self.prev_index
    }

    fn next_index(&self) -> usize {
        self.prev_index.map_or(0, |i| i + 1)
    }
}

impl<S> Debug for EnhancedIter<S>
where
    S: Source + Debug,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnhancedIter")
            .field("source", &self.source)
            .field("closer", &self.closer.is_some())
            .field("next", &self.next)
            .field("prev_index", &self.prev_index)
            .finish()
    }
}
