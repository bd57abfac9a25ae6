use std::fmt::{Debug, Formatter};

/// 按行拆分字符串时的边界处理选项。
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct LineOpts {
    /// 空字符串视为一个空行，而不是没有任何行。默认开启。
    pub treat_empty_as_line: bool,
    /// 以换行符结尾的文本在末尾额外产生一个空行，例如`"a\n"`视为两行。
    pub treat_eol_as_two_lines: bool,
    /// 返回的行保留行尾换行符。
    pub include_eol: bool,
    /// 保留的换行符统一为`\n`，仅当`include_eol`开启时生效。
    pub normalize_eol: bool,
}

impl Default for LineOpts {
    fn default() -> Self {
        LineOpts { treat_empty_as_line: true, treat_eol_as_two_lines: false, include_eol: false, normalize_eol: false }
    }
}

impl LineOpts {
    pub const fn empty_as_line(mut self, on: bool) -> Self {
        self.treat_empty_as_line = on;
        self
    }
    pub const fn eol_as_two_lines(mut self, on: bool) -> Self {
        self.treat_eol_as_two_lines = on;
        self
    }
    pub const fn include_eol(mut self, on: bool) -> Self {
        self.include_eol = on;
        self
    }
    pub const fn normalize_eol(mut self, on: bool) -> Self {
        self.normalize_eol = on;
        self
    }
}

pub(crate) type LineModifier = Box<dyn FnMut(String) -> String>;

/// 从读取器按行读取时的选项。
#[derive(Default)]
pub struct ReadLinesOpts {
    /// 每行末尾追加`\n`。
    pub include_eol: bool,
    /// 返回前对每行进行变换，可选。
    pub modifier: Option<LineModifier>,
}

impl ReadLinesOpts {
    pub fn include_eol(mut self, on: bool) -> Self {
        self.include_eol = on;
        self
    }

    pub fn modifier(mut self, f: impl FnMut(String) -> String + 'static) -> Self {
        self.modifier = Some(Box::new(f));
        self
    }
}

impl Debug for ReadLinesOpts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadLinesOpts")
            .field("include_eol", &self.include_eol)
            .field("modifier", &self.modifier.as_ref().map(|_| "FnMut(String) -> String"))
            .finish()
    }
}
