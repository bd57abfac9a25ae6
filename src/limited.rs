/// 只能被取用有限次数的迭代器容器，次数用尽后每次取用都得到空迭代。
///
/// [`draw`](IterLimited::draw)每次交出的都是同一个迭代器，多次取用共享迭代状态：
/// 前一次未迭代完的元素会被下一次取用继续迭代。需要每次都从头开始时使用
/// [`draw_fresh`](IterLimited::draw_fresh)。
#[derive(Debug, Clone)]
pub struct IterLimited<I> {
    iter: Option<I>,
    remaining: usize,
}

impl<I: Iterator> IterLimited<I> {
    pub fn new(iter: I) -> Self {
        Self::with_limit(iter, 1)
    }

    pub fn with_limit(iter: I, limit: usize) -> Self {
        IterLimited { iter: Some(iter), remaining: limit }
    }

    /// 剩余可取用次数。
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// 取用内部迭代器，次数用尽时释放内部迭代器并返回`None`。
    pub fn draw(&mut self) -> Option<&mut I> {
        if !self.consume() {
            return None;
        }
        self.iter.as_mut()
    }

    /// 取用内部迭代器的副本，每个副本都从存储时的状态开始迭代。
    pub fn draw_fresh(&mut self) -> Option<I>
    where
        I: Clone,
    {
        if !self.consume() {
            return None;
        }
        self.iter.clone()
    }

    fn consume(&mut self) -> bool {
        if self.remaining == 0 {
            self.iter = None;
            return false;
        }
        self.remaining -= 1;
        true
    }
}

impl<'a, I: Iterator> IntoIterator for &'a mut IterLimited<I> {
    type Item = I::Item;
    type IntoIter = Draw<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        Draw { iter: self.draw() }
    }
}

/// 一次取用，次数用尽时为空迭代。
#[derive(Debug)]
pub struct Draw<'a, I> {
    iter: Option<&'a mut I>,
}

impl<I: Iterator> Iterator for Draw<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.as_ref().map_or((0, Some(0)), |iter| iter.size_hint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_draw_once() {
        let lines = vec!["A1", "B22", "", "C333"];
        let mut limited = IterLimited::new(lines.clone().into_iter());
        let mut seen = Vec::new();
        for line in &mut limited {
            seen.push(line);
        }
        assert_eq!(lines, seen);
        assert_eq!(0, limited.remaining());
        assert_eq!(0, (&mut limited).into_iter().count());
        assert!(limited.draw().is_none());
    }

    #[test]
    fn test_draw_fresh_with_limit() {
        let mut limited = IterLimited::with_limit(vec![1, 2, 3].into_iter(), 2);
        assert_eq!(Some(vec![1, 2, 3]), limited.draw_fresh().map(|it| it.collect_vec()));
        assert_eq!(Some(vec![1, 2, 3]), limited.draw_fresh().map(|it| it.collect_vec()));
        assert!(limited.draw_fresh().is_none());
        assert!(limited.draw_fresh().is_none());
    }

    #[test]
    fn test_draw_shares_state() {
        let mut limited = IterLimited::with_limit(vec![1, 2, 3].into_iter(), 2);
        assert_eq!(Some(1), limited.draw().and_then(|it| it.next()));
        // 第二次取用从上一次停下的位置继续
        assert_eq!(vec![2, 3], (&mut limited).into_iter().collect_vec());
        assert_eq!(0, (&mut limited).into_iter().count());
    }

    #[test]
    fn test_zero_limit() {
        let mut limited = IterLimited::with_limit(std::iter::repeat(7), 0);
        assert!(limited.draw().is_none());
        assert_eq!((0, Some(0)), (&mut limited).into_iter().size_hint());
    }
}
