use crate::capability::{Closable, Indexable, ListCursor, Peekable};
use crate::err::StreamErr;
use crate::StreamRes;
use std::io;
use std::iter::FusedIterator;

/// 在已知列表上的双向游标，与[`ListBuilderIter`](crate::ListBuilderIter)行为一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListIter<T> {
    list: Vec<T>,
    cursor: usize,
    mark: Option<usize>,
}

impl<T> ListIter<T> {
    pub fn new(list: Vec<T>) -> Self {
        ListIter { list, cursor: 0, mark: None }
    }

    pub fn from_slice(list: &[T]) -> Self
    where
        T: Clone,
    {
        Self::new(list.to_vec())
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.list.len()
    }

    pub fn try_next(&mut self) -> StreamRes<T>
    where
        T: Clone,
    {
        self.next().ok_or(StreamErr::Exhausted)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.list
    }
}

impl<T: Clone> Iterator for ListIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.list.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.list.len() - self.cursor;
        (left, Some(left))
    }
}

impl<T: Clone> ExactSizeIterator for ListIter<T> {}

impl<T: Clone> FusedIterator for ListIter<T> {}

impl<T> Peekable<T> for ListIter<T> {
    fn peek(&self) -> Option<&T> {
        self.list.get(self.cursor)
    }
}

impl<T> Closable for ListIter<T> {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T> Indexable for ListIter<T> {
    fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    fn next_index(&self) -> usize {
        self.cursor
    }
}

impl<T> ListCursor<T> for ListIter<T> {
    fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    fn previous(&mut self) -> StreamRes<&T> {
        if self.cursor == 0 {
            return Err(StreamErr::BeforeFirst);
        }
        self.cursor -= 1;
        Ok(&self.list[self.cursor])
    }

    fn peek_previous(&self) -> StreamRes<&T> {
        match self.cursor.checked_sub(1) {
            Some(index) => Ok(&self.list[index]),
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
        if position > self.list.len() {
            return Err(StreamErr::out_of_bounds(position, Some(self.list.len())));
        }
        self.cursor = position;
        Ok(())
    }
}
