use crate::capability::{Closable, Indexable, ListCursor, Peekable};
use crate::enhanced::EnhancedIter;
use crate::err::StreamErr;
use crate::source::Source;
use crate::StreamRes;
use std::io;
use std::iter::FusedIterator;

/// 在[`EnhancedIter`]之上记录所有已产生的元素，从而支持回退、标记和复位。
///
/// 游标`cursor`独立于内部迭代器的索引：游标落在已记录范围内时回放历史元素，
/// 否则从内部迭代器拉取新元素并追加到历史中。回退从不丢弃历史。
pub struct ListBuilderIter<S: Source> {
    iter: EnhancedIter<S>,
    results: Vec<S::Item>,
    cursor: usize,
    mark: Option<usize>,
}

impl<S: Source> ListBuilderIter<S>
where
    S::Item: Clone,
{
    pub fn new(source: S) -> Self {
        Self::from_enhanced(EnhancedIter::new(source))
    }

    pub fn with_closer(source: S, closer: impl FnMut() -> io::Result<()> + 'static) -> Self {
        Self::from_enhanced(EnhancedIter::with_closer(source, closer))
    }

    pub fn from_enhanced(iter: EnhancedIter<S>) -> Self {
        ListBuilderIter { iter, results: Vec::new(), cursor: 0, mark: None }
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.results.len() || self.iter.has_next()
    }

    pub fn try_next(&mut self) -> StreamRes<S::Item> {
        self.next().ok_or(StreamErr::Exhausted)
    }

    /// 已记录的全部元素。
    ///
    /// 只有在`has_next()`返回`false`之后才能保证包含数据源的全部元素。
    pub fn iterator_results(&self) -> &[S::Item] {
        &self.results
    }

    /// 取出已记录的元素，丢弃内部迭代器。
    pub fn into_results(self) -> Vec<S::Item> {
        self.results
    }
}

impl<S: Source> Iterator for ListBuilderIter<S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(elem) = self.results.get(self.cursor) {
            self.cursor += 1;
            return Some(elem.clone());
        }
        let elem = self.iter.next()?;
        self.results.push(elem.clone());
        self.cursor += 1;
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.results.len() - self.cursor;
        let (lower, upper) = self.iter.size_hint();
        (buffered + lower, upper.map(|upper| buffered + upper))
    }
}

impl<S: Source> FusedIterator for ListBuilderIter<S> where S::Item: Clone {}

impl<S: Source> Peekable<S::Item> for ListBuilderIter<S> {
    fn peek(&self) -> Option<&S::Item> {
        self.results.get(self.cursor).or_else(|| self.iter.peek())
    }
}

impl<S: Source> Closable for ListBuilderIter<S> {
    fn close(&mut self) -> io::Result<()> {
        self.iter.close()
    }
}

impl<S: Source> Indexable for ListBuilderIter<S> {
    fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    fn next_index(&self) -> usize {
        self.cursor
    }
}

impl<S: Source> ListCursor<S::Item> for ListBuilderIter<S> {
    fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    fn previous(&mut self) -> StreamRes<&S::Item> {
        if self.cursor == 0 {
            return Err(StreamErr::BeforeFirst);
        }
        self.cursor -= 1;
        Ok(&self.results[self.cursor])
    }

    fn peek_previous(&self) -> StreamRes<&S::Item> {
        match self.cursor.checked_sub(1) {
            Some(index) => Ok(&self.results[index]),
            None => Err(StreamErr::BeforeFirst),
        }
    }

    fn mark(&mut self) -> usize {
        self.mark = Some(self.cursor);
        self.cursor
    }

    fn reset(&mut self) -> StreamRes<()> {
        let mark = self.mark.ok_or(StreamErr::NotMarked)?;
        self.reset_to(mark)
    }

    fn reset_to(&mut self, position: usize) -> StreamRes<()> {
        if position > self.results.len() {
            return Err(StreamErr::out_of_bounds(position, Some(self.results.len())));
        }
        self.cursor = position;
        Ok(())
    }
}
