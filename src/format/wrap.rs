//! Word wrapping with padding, filling and justification.

use std::borrow::Cow;

use console::measure_text_width;

use crate::format::options::FormatConfig;

/// Wrap `text` according to `config`.
///
/// Every produced line is `padding_left + content + padding_right`, where the
/// content is at most [`FormatConfig::content_width`] wide and, with a filler,
/// exactly that wide. Empty input produces an empty string.
pub fn wrap(text: &str, config: &FormatConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text: Cow<'_, str> = if config.ansi {
        Cow::Borrowed(text)
    } else {
        console::strip_ansi_codes(text)
    };

    let width = config.content_width();
    let options = textwrap::Options::new(width)
        .subsequent_indent(&config.hanging_indent)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .break_words(true);

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = trim_paragraph(paragraph, config);
        let wrapped = textwrap::wrap(paragraph, &options);
        let last = wrapped.len().saturating_sub(1);

        for (index, line) in wrapped.iter().enumerate() {
            let mut line = if config.trim_end_of_line {
                line.trim_end().to_string()
            } else {
                line.to_string()
            };
            if config.justify && index < last {
                line = justify_line(&line, width);
            }
            fill_line(&mut line, &config.filler, width);
            lines.push(format!(
                "{}{}{}",
                config.padding_left, line, config.padding_right
            ));
        }
    }

    lines.join("\n")
}

fn trim_paragraph<'a>(paragraph: &'a str, config: &FormatConfig) -> &'a str {
    let paragraph = paragraph.trim_end_matches('\r');
    let paragraph = if config.trim_start_of_line {
        paragraph.trim_start()
    } else {
        paragraph
    };
    if config.trim_end_of_line {
        paragraph.trim_end()
    } else {
        paragraph
    }
}

/// Widen the gaps between words, left to right, until `line` is `width` wide.
///
/// Leading indentation is kept as is and never counts as a gap.
pub fn justify_line(line: &str, width: usize) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    let words: Vec<&str> = body.split_whitespace().collect();
    if words.len() < 2 {
        return line.to_string();
    }

    let used = measure_text_width(indent)
        + words.iter().map(|w| measure_text_width(w)).sum::<usize>();
    if used >= width {
        return line.to_string();
    }

    let gaps = words.len() - 1;
    let spaces = width - used;
    let (base, extra) = (spaces / gaps, spaces % gaps);

    let mut justified = String::with_capacity(line.len() + spaces);
    justified.push_str(indent);
    for (index, word) in words.iter().enumerate() {
        justified.push_str(word);
        if index < gaps {
            let gap = base + usize::from(index < extra);
            justified.push_str(&" ".repeat(gap));
        }
    }
    justified
}

/// Pad `line` to `width` with the filler. A wide filler never overshoots; any
/// remaining columns are padded with spaces.
fn fill_line(line: &mut String, filler: &str, width: usize) {
    let Some(fill) = filler.chars().next() else {
        return;
    };
    let missing = width.saturating_sub(measure_text_width(line));
    let fill_width = measure_text_width(&fill.to_string());
    let (count, rest) = match fill_width {
        0 => (0, missing),
        w => (missing / w, missing % w),
    };
    line.extend(std::iter::repeat(fill).take(count));
    line.extend(std::iter::repeat(' ').take(rest));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: usize) -> FormatConfig {
        FormatConfig {
            width,
            ..FormatConfig::default()
        }
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert_eq!(wrap("", &config(60)), "");
    }

    #[test]
    fn test_lines_are_padded_and_filled() {
        let wrapped = wrap("hello", &config(10));
        assert_eq!(wrapped, " hello    ");
        assert_eq!(measure_text_width(&wrapped), 10);
    }

    #[test]
    fn test_long_text_wraps_within_width() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(5);
        let wrapped = wrap(&text, &config(60));

        assert!(wrapped.lines().count() > 1);
        for line in wrapped.lines() {
            assert_eq!(measure_text_width(line), 60);
        }
    }

    #[test]
    fn test_divider_fill() {
        let opts = FormatConfig {
            filler: "-".to_string(),
            ..config(60)
        };
        let wrapped = wrap("-", &opts);
        assert_eq!(wrapped, format!(" {} ", "-".repeat(58)));
    }

    #[test]
    fn test_wide_filler_keeps_width() {
        for width in [60, 61] {
            let opts = FormatConfig {
                filler: "中".to_string(),
                ..config(width)
            };
            let wrapped = wrap("中", &opts);
            assert_eq!(measure_text_width(&wrapped), width, "wrapped = {:?}", wrapped);
        }
    }

    #[test]
    fn test_empty_filler_leaves_lines_short() {
        let opts = FormatConfig {
            filler: String::new(),
            padding_left: String::new(),
            padding_right: String::new(),
            ..config(60)
        };
        assert_eq!(wrap("banner", &opts), "banner");
    }

    #[test]
    fn test_newlines_start_new_paragraphs() {
        let opts = FormatConfig {
            filler: String::new(),
            ..config(60)
        };
        let wrapped = wrap("one\ntwo\n", &opts);
        let lines: Vec<&str> = wrapped.split('\n').collect();
        assert_eq!(lines, vec![" one ", " two ", "  "]);
    }

    #[test]
    fn test_trim_start_is_optional() {
        let trimmed = FormatConfig {
            filler: String::new(),
            ..config(60)
        };
        assert_eq!(wrap("   art", &trimmed), " art ");

        let kept = FormatConfig {
            trim_start_of_line: false,
            ..trimmed
        };
        assert_eq!(wrap("   art", &kept), "    art ");
    }

    #[test]
    fn test_hanging_indent_on_continuation_lines() {
        let opts = FormatConfig {
            filler: String::new(),
            padding_left: String::new(),
            padding_right: String::new(),
            hanging_indent: "    ".to_string(),
            trim_start_of_line: false,
            ..config(60)
        };
        let text = format!(" X  {}", "word ".repeat(20));
        let wrapped = wrap(&text, &opts);
        let lines: Vec<&str> = wrapped.lines().collect();

        assert!(lines.len() > 1);
        assert!(lines[0].starts_with(" X  word"));
        for line in &lines[1..] {
            assert!(line.starts_with("    word"), "line = {:?}", line);
        }
    }

    #[test]
    fn test_justify_line_spreads_gaps() {
        assert_eq!(justify_line("a b c", 9), "a   b   c");
        assert_eq!(justify_line("a b c", 8), "a   b  c");
        assert_eq!(justify_line("single", 20), "single");
        assert_eq!(justify_line("  a b", 7), "  a   b");
    }

    #[test]
    fn test_justify_skips_last_line() {
        let opts = FormatConfig {
            justify: true,
            filler: String::new(),
            padding_left: String::new(),
            padding_right: String::new(),
            ..config(60)
        };
        let text = "lorem ipsum dolor sit amet ".repeat(4);
        let wrapped = wrap(&text, &opts);
        let lines: Vec<&str> = wrapped.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(measure_text_width(lines[0]), 60);
        assert!(measure_text_width(lines[1]) < 60);
    }

    #[test]
    fn test_ansi_stripped_unless_enabled() {
        let colored = "\u{1b}[31mred\u{1b}[0m";
        let plain = FormatConfig {
            filler: String::new(),
            ..config(60)
        };
        assert_eq!(wrap(colored, &plain), " red ");

        let ansi = FormatConfig {
            ansi: true,
            ..plain
        };
        assert_eq!(wrap(colored, &ansi), format!(" {} ", colored));
    }
}
