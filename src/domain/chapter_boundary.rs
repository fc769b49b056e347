//! 章节标题识别
//!
//! 按优先级排列的匹配函数表，每个函数只看已去除首尾空白的整行，
//! 从行首开始匹配，返回匹配到的标题标记区间。

use std::ops::Range;

/// 章节标记字符 `第`
const CHAPTER_MARKER: char = '第';

/// 标题识别规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// 第一章 / 第12节 / 第三百回
    NumberedHeading,
    /// Chapter 1 / CHAPTER12
    EnglishHeading,
    /// 12章 / 第12回（只接受阿拉伯数字）
    NumberedSuffix,
}

/// 一次成功的匹配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryMatch {
    pub kind: BoundaryKind,
    /// 标题标记在行内的字节区间（不含其后的任意标题文字）
    pub span: Range<usize>,
}

type Matcher = fn(&str) -> Option<usize>;

/// 匹配规则表，自上而下尝试，首个命中即停止
const BOUNDARY_PATTERNS: &[(BoundaryKind, Matcher)] = &[
    (BoundaryKind::NumberedHeading, match_numbered_heading),
    (BoundaryKind::EnglishHeading, match_english_heading),
    (BoundaryKind::NumberedSuffix, match_numbered_suffix),
];

#[inline]
fn is_cjk_numeral(ch: char) -> bool {
    matches!(
        ch,
        '一' | '二' | '三' | '四' | '五' | '六' | '七' | '八' | '九' | '十' | '百' | '千' | '万' | '零'
    )
}

#[inline]
fn is_chapter_suffix(ch: char) -> bool {
    matches!(ch, '章' | '节' | '回')
}

/// 从 `start` 起跳过满足条件的字符，返回结束位置；一个都没有时返回 None
fn scan_run(line: &str, start: usize, pred: impl Fn(char) -> bool) -> Option<usize> {
    let rest = &line[start..];
    let len: usize = rest
        .chars()
        .take_while(|&ch| pred(ch))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(start + len)
}

/// 在 `pos` 处匹配一个章节后缀字符
fn scan_suffix(line: &str, pos: usize) -> Option<usize> {
    line[pos..]
        .chars()
        .next()
        .filter(|&ch| is_chapter_suffix(ch))
        .map(|ch| pos + ch.len_utf8())
}

/// `第` + 中文数字或阿拉伯数字 + `章|节|回`
pub fn match_numbered_heading(line: &str) -> Option<usize> {
    let start = line.strip_prefix(CHAPTER_MARKER).map(|_| CHAPTER_MARKER.len_utf8())?;
    let digits_end = scan_run(line, start, |ch| is_cjk_numeral(ch) || ch.is_ascii_digit())?;
    scan_suffix(line, digits_end)
}

/// `chapter`（不区分大小写）+ 可选空白 + 阿拉伯数字
pub fn match_english_heading(line: &str) -> Option<usize> {
    const WORD: &str = "chapter";

    let head = line.get(..WORD.len())?;
    if !head.eq_ignore_ascii_case(WORD) {
        return None;
    }
    let after_ws = line[WORD.len()..]
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map(|(i, _)| WORD.len() + i)?;
    scan_run(line, after_ws, |ch| ch.is_ascii_digit())
}

/// 可选 `第` + 阿拉伯数字 + `章|节|回`
pub fn match_numbered_suffix(line: &str) -> Option<usize> {
    let start = if line.starts_with(CHAPTER_MARKER) {
        CHAPTER_MARKER.len_utf8()
    } else {
        0
    };
    let digits_end = scan_run(line, start, |ch| ch.is_ascii_digit())?;
    scan_suffix(line, digits_end)
}

/// 判断一行是否为章节标题
///
/// `line` 应已去除首尾空白。返回首个命中的规则。
pub fn detect_boundary(line: &str) -> Option<BoundaryMatch> {
    BOUNDARY_PATTERNS.iter().find_map(|(kind, matcher)| {
        matcher(line).map(|end| BoundaryMatch {
            kind: *kind,
            span: 0..end,
        })
    })
}
