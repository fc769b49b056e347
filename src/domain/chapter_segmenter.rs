//! 章节分割器
//!
//! 单遍扫描整段文本，按章节标题行把文本切分为有序的章节列表。
//!
//! 分割策略：
//! 1. 按行扫描，每行保留自身的换行符（\n 或 \r\n）
//! 2. 每行去除首尾空白（含 BOM）后按优先级匹配章节标题规则
//! 3. 标题行开启新章节，其余行连同换行符原样追加到当前章节
//! 4. 第一个标题之前的文本被丢弃
//! 5. 全文没有任何标题时，整段文本作为唯一的回退章节

use super::chapter_boundary::detect_boundary;
use super::novel::{resolve_fallback_title, Chapter, ChapterNumber};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// 去除行首尾的空白与 BOM
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// 正在累积的章节
#[derive(Debug)]
struct ChapterAccumulator {
    number: ChapterNumber,
    title: String,
    content: String,
}

impl ChapterAccumulator {
    fn open(number: ChapterNumber, title: &str) -> Self {
        Self {
            number,
            title: title.to_string(),
            content: String::new(),
        }
    }

    /// 追加一行（含原换行符）；末行没有换行符时补 \n
    fn push_line(&mut self, line: &str) {
        self.content.push_str(line);
        if !line.ends_with('\n') {
            self.content.push('\n');
        }
    }

    fn close(self) -> Chapter {
        Chapter::new(self.number, self.title, self.content)
    }
}

/// 扫描状态
#[derive(Debug)]
enum ScanState {
    NoOpenChapter,
    OpenChapter(ChapterAccumulator),
}

/// 逐行推进的分章状态机
#[derive(Debug)]
struct ChapterScanner {
    state: ScanState,
    next_number: ChapterNumber,
    chapters: Vec<Chapter>,
}

impl ChapterScanner {
    fn new() -> Self {
        Self {
            state: ScanState::NoOpenChapter,
            next_number: ChapterNumber::FIRST,
            chapters: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        let trimmed = trim_line(line);

        if detect_boundary(trimmed).is_some() {
            let number = self.next_number;
            self.next_number = number.next();

            let previous = std::mem::replace(
                &mut self.state,
                ScanState::OpenChapter(ChapterAccumulator::open(number, trimmed)),
            );
            if let ScanState::OpenChapter(acc) = previous {
                self.chapters.push(acc.close());
            }
            return;
        }

        // 第一个标题之前的行没有归属，直接丢弃
        if let ScanState::OpenChapter(acc) = &mut self.state {
            acc.push_line(line);
        }
    }

    fn finish(mut self) -> Vec<Chapter> {
        if let ScanState::OpenChapter(acc) = self.state {
            self.chapters.push(acc.close());
        }
        self.chapters
    }
}

/// 将文本切分为章节
///
/// 总是返回至少一个章节；`fallback_title` 仅在全文没有识别到任何章节标题时使用，
/// 为空或未提供时使用默认标题。
pub fn segment_chapters(text: &str, fallback_title: Option<&str>) -> Vec<Chapter> {
    let mut scanner = ChapterScanner::new();
    for line in text.split_inclusive('\n') {
        scanner.feed(line);
    }

    let chapters = scanner.finish();
    if !chapters.is_empty() {
        return chapters;
    }

    vec![Chapter::new(
        ChapterNumber::FIRST,
        resolve_fallback_title(fallback_title),
        text,
    )]
}

/// 使用默认回退标题分章（便捷方法）
pub fn segment_chapters_default(text: &str) -> Vec<Chapter> {
    segment_chapters(text, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::novel::DEFAULT_FALLBACK_TITLE;

    fn summary(chapters: &[Chapter]) -> Vec<(usize, &str, &str)> {
        chapters
            .iter()
            .map(|c| (c.number().get(), c.title(), c.content()))
            .collect()
    }

    #[test]
    fn test_two_chinese_chapters() {
        let text = "第一章 开始\nHello\nWorld\n第二章 结束\nBye";
        let chapters = segment_chapters(text, None);

        assert_eq!(
            summary(&chapters),
            vec![
                (1, "第一章 开始", "Hello\nWorld\n"),
                (2, "第二章 结束", "Bye\n"),
            ]
        );
    }

    #[test]
    fn test_no_markers_uses_fallback_title() {
        let text = "Just some text with no markers.";
        let chapters = segment_chapters(text, Some("Untitled"));

        assert_eq!(summary(&chapters), vec![(1, "Untitled", text)]);
    }

    #[test]
    fn test_empty_input_yields_default_chapter() {
        let chapters = segment_chapters_default("");

        assert_eq!(summary(&chapters), vec![(1, DEFAULT_FALLBACK_TITLE, "")]);
    }

    #[test]
    fn test_blank_fallback_title_uses_default() {
        let chapters = segment_chapters("no headings here", Some("   "));
        assert_eq!(chapters[0].title(), DEFAULT_FALLBACK_TITLE);
    }

    #[test]
    fn test_adjacent_headings_yield_empty_chapter() {
        let chapters = segment_chapters_default("第一章\n第二章\nText");

        assert_eq!(
            summary(&chapters),
            vec![(1, "第一章", ""), (2, "第二章", "Text\n")]
        );
    }

    #[test]
    fn test_leading_text_is_discarded() {
        let text = "作者：某人\n简介\n\n第1章 起\n正文";
        let chapters = segment_chapters_default(text);

        assert_eq!(summary(&chapters), vec![(1, "第1章 起", "正文\n")]);
    }

    #[test]
    fn test_fallback_preserves_text_verbatim() {
        let text = "  line one  \r\n\r\nline two\n";
        let chapters = segment_chapters(text, Some("T"));

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].content(), text);
    }

    #[test]
    fn test_title_is_trimmed_but_content_is_not() {
        let text = "   Chapter 1: Dawn  \n    indented line\n\n";
        let chapters = segment_chapters_default(text);

        assert_eq!(
            summary(&chapters),
            vec![(1, "Chapter 1: Dawn", "    indented line\n\n")]
        );
    }

    #[test]
    fn test_crlf_line_endings_are_kept() {
        let text = "第一章\r\nA\r\nB\r\n第二章\r\nC\r\n";
        let chapters = segment_chapters_default(text);

        assert_eq!(
            summary(&chapters),
            vec![(1, "第一章", "A\r\nB\r\n"), (2, "第二章", "C\r\n")]
        );

        let rebuilt: String = chapters
            .iter()
            .map(|c| format!("{}\r\n{}", c.title(), c.content()))
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_crlf_last_line_without_terminator() {
        let chapters = segment_chapters_default("第一章\r\nA\r\nB");
        assert_eq!(chapters[0].content(), "A\r\nB\n");
    }

    #[test]
    fn test_leading_bom_does_not_hide_first_heading() {
        let text = "\u{FEFF}第一章 开始\n正文一\n第二章 结束\n正文二";
        let chapters = segment_chapters_default(text);

        assert_eq!(
            summary(&chapters),
            vec![
                (1, "第一章 开始", "正文一\n"),
                (2, "第二章 结束", "正文二\n"),
            ]
        );
    }

    #[test]
    fn test_numbering_ignores_title_digits() {
        let text = "第5章\na\nChapter 2\nb\n第99回\nc";
        let chapters = segment_chapters_default(text);
        let numbers: Vec<usize> = chapters.iter().map(|c| c.number().get()).collect();

        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(chapters[2].title(), "第99回");
    }

    #[test]
    fn test_whitespace_line_is_content() {
        let chapters = segment_chapters_default("第一章\n   \n正文");
        assert_eq!(chapters[0].content(), "   \n正文\n");
    }

    #[test]
    fn test_mixed_languages() {
        let text = "Chapter 1\nIt begins.\n12章 中段\n文字\n第三节\nend";
        let chapters = segment_chapters_default(text);

        assert_eq!(
            summary(&chapters),
            vec![
                (1, "Chapter 1", "It begins.\n"),
                (2, "12章 中段", "文字\n"),
                (3, "第三节", "end\n"),
            ]
        );
    }

    #[test]
    fn test_content_reconstruction() {
        let text = "序言\n第一章 甲\n一\n\n二\n第二章 乙\n三\nChapter 3\n四\n";
        let chapters = segment_chapters_default(text);

        let mut rebuilt = String::new();
        for chapter in &chapters {
            rebuilt.push_str(chapter.title());
            rebuilt.push('\n');
            rebuilt.push_str(chapter.content());
        }

        let from_first_heading = &text[text.find("第一章").unwrap()..];
        assert_eq!(rebuilt, from_first_heading);
    }

    #[test]
    fn test_total_on_garbled_input() {
        let inputs = ["", "\n", "\n\n\n", "\u{FFFD}\u{0}\u{1}", "第", "Chapter", "章节回"];
        for input in inputs {
            let chapters = segment_chapters(input, Some("X"));
            assert_eq!(chapters.len(), 1, "input: {:?}", input);
            assert_eq!(chapters[0].content(), input);
            assert_eq!(chapters[0].title(), "X");
        }
    }

    #[test]
    fn test_numbering_is_contiguous() {
        let text: String = (1..=50)
            .map(|i| format!("Chapter {}\nbody {}\n", i * 3, i))
            .collect();
        let chapters = segment_chapters_default(&text);

        assert_eq!(chapters.len(), 50);
        for (i, chapter) in chapters.iter().enumerate() {
            assert_eq!(chapter.number().get(), i + 1);
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "第一章\na\n第二章\nb";
        assert_eq!(segment_chapters_default(text), segment_chapters_default(text));
    }
}
