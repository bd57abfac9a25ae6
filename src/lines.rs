use crate::config::{LineOpts, ReadLinesOpts};
use crate::err::StreamErr;
use crate::source::Source;
use crate::StreamRes;
use log::{debug, trace};
use std::io;
use std::io::BufRead;
use std::iter::FusedIterator;

/// 按行拆分字符串，行分隔符为`\n`、`\r`或`\r\n`，与标准的缓冲读取器行为一致。
///
/// 以换行符结尾的文本，例如`"a\nb\n"`，可以根据[`LineOpts::treat_eol_as_two_lines`]
/// 视为2行或3行，而`"a\nb\nc"`始终为3行。
#[derive(Debug, Clone)]
pub struct StringLines<S: AsRef<str>> {
    text: S,
    start: usize,
    off: usize,
    end: usize,
    opts: LineOpts,
    done: bool,
}

impl<S: AsRef<str>> StringLines<S> {
    pub fn new(text: S) -> Self {
        Self::with_opts(text, LineOpts::default())
    }

    pub fn with_opts(text: S, opts: LineOpts) -> Self {
        let end = text.as_ref().len();
        StringLines { text, start: 0, off: 0, end, opts, done: false }
    }

    /// 仅拆分`text`中从字节偏移`off`开始、长度为`len`的部分。
    pub fn with_range(text: S, off: usize, len: usize, opts: LineOpts) -> StreamRes<Self> {
        let s = text.as_ref();
        let end = match off.checked_add(len) {
            Some(end) if end <= s.len() => end,
            _ => return Err(StreamErr::out_of_bounds(off.saturating_add(len), Some(s.len()))),
        };
        if let Some(index) = [off, end].into_iter().find(|&i| !s.is_char_boundary(i)) {
            return Err(StreamErr::NotCharBoundary { index });
        }
        Ok(StringLines { text, start: off, off, end, opts, done: false })
    }

    /// 尚未拆分部分的起始字节偏移。
    pub fn offset(&self) -> usize {
        self.off
    }

    fn edge_line(&mut self) -> Option<String> {
        self.done = true;
        if self.opts.treat_empty_as_line && self.start == 0 && self.end == 0 {
            return Some(String::new());
        }
        if self.opts.treat_eol_as_two_lines
            && self.end > self.start
            && matches!(self.text.as_ref().as_bytes()[self.end - 1], b'\n' | b'\r')
        {
            return Some(String::new());
        }
        trace!("string lines finished at byte {}", self.end);
        None
    }
}

impl<S: AsRef<str>> Source for StringLines<S> {
    type Item = String;

    fn pull(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if self.off >= self.end {
            return self.edge_line();
        }
        let off = self.off;
        let text = &self.text.as_ref()[..self.end];
        let rest = &text.as_bytes()[off..];
        // 分隔符都是ASCII字符，按字节扫描不会切开多字节字符
        let (line_len, eol_len) = match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if rest[i] == b'\r' && rest.get(i + 1) == Some(&b'\n') => (i, 2),
            Some(i) => (i, 1),
            None => (rest.len(), 0),
        };
        self.off = off + line_len + eol_len;
        let line = if self.opts.include_eol && eol_len > 0 {
            if self.opts.normalize_eol {
                let mut line = String::with_capacity(line_len + 1);
                line.push_str(&text[off..off + line_len]);
                line.push('\n');
                line
            } else {
                text[off..self.off].to_string()
            }
        } else {
            text[off..off + line_len].to_string()
        };
        Some(line)
    }
}

impl<S: AsRef<str>> Iterator for StringLines<S> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }
}

impl<S: AsRef<str>> FusedIterator for StringLines<S> {}

/// 从缓冲读取器按行读取，行分隔符与[`StringLines`]相同，为`\n`、`\r`或`\r\n`，返回的行不含分隔符。
///
/// 读取出错时返回一次错误，此后不再读取。
#[derive(Debug)]
pub struct ReaderLines<R: BufRead> {
    reader: Option<R>,
    opts: ReadLinesOpts,
    line_no: usize,
    /// 上一行以缓冲区末尾的`\r`结束，下一个字节若是`\n`则属于同一个分隔符。
    skip_lf: bool,
    done: bool,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R, opts: ReadLinesOpts) -> Self {
        ReaderLines { reader: Some(reader), opts, line_no: 0, skip_lf: false, done: false }
    }
}

/// 读取一行的原始字节，不含分隔符。没有更多数据时返回`None`。
fn read_line_bytes(reader: &mut impl BufRead, skip_lf: &mut bool) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    let mut read_any = false;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            return Ok(read_any.then_some(line));
        }
        if std::mem::take(skip_lf) && available[0] == b'\n' {
            reader.consume(1);
            continue;
        }
        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                line.extend_from_slice(&available[..i]);
                let is_cr = available[i] == b'\r';
                let crlf = is_cr && available.get(i + 1) == Some(&b'\n');
                // `\r`恰好位于缓冲区末尾时，后续的`\n`留到下一次读取时跳过
                *skip_lf = is_cr && i + 1 == available.len();
                reader.consume(i + 1 + usize::from(crlf));
                return Ok(Some(line));
            }
            None => {
                let len = available.len();
                line.extend_from_slice(available);
                reader.consume(len);
                read_any = true;
            }
        }
    }
}

impl<R: BufRead> Source for ReaderLines<R> {
    type Item = io::Result<String>;

    fn pull(&mut self) -> Option<io::Result<String>> {
        if self.done {
            return None;
        }
        let reader = self.reader.as_mut()?;
        let read = read_line_bytes(reader, &mut self.skip_lf).and_then(|bytes| {
            bytes.map(String::from_utf8).transpose().map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
        });
        match read {
            Ok(None) => {
                self.done = true;
                trace!("reader lines finished after {} lines", self.line_no);
                None
            }
            Ok(Some(mut line)) => {
                self.line_no += 1;
                if self.opts.include_eol {
                    line.push('\n');
                }
                if let Some(modifier) = &mut self.opts.modifier {
                    line = modifier(line);
                }
                Some(Ok(line))
            }
            Err(err) => {
                self.done = true;
                debug!("read line {} error, stop reading: {err}", self.line_no + 1);
                Some(Err(err))
            }
        }
    }

    fn close(&mut self) -> io::Result<()> {
        if self.reader.take().is_some() {
            trace!("reader closed after {} lines", self.line_no);
        }
        Ok(())
    }
}
