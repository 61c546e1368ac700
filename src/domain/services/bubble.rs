#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

// Widths are counted in characters, not bytes. The content here is
// multilingual, byte lengths would break the borders.
fn char_count(text: &str) -> usize {
    return text.chars().count();
}

fn repeat_from_subtractions(text: &str, subtractions: Vec<usize>) -> String {
    let count = subtractions
        .into_iter()
        .map(|e| {
            return i32::try_from(e).unwrap();
        })
        .reduce(|a, b| {
            return a - b;
        })
        .unwrap();

    if count <= 0 {
        return "".to_string();
    }

    return [text].repeat(count.try_into().unwrap()).join("");
}

fn wrap_text(text: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![];

    for full_line in text.split('\n') {
        if full_line.trim().is_empty() {
            lines.push(" ".to_string());
            continue;
        }

        if char_count(full_line) <= line_max_width {
            lines.push(full_line.to_string());
            continue;
        }

        let mut char_counter = 0;
        let mut current_line: Vec<&str> = vec![];

        for word in full_line.split(' ') {
            let word_length = char_count(word);
            if word_length + char_counter > line_max_width && !current_line.is_empty() {
                lines.push(current_line.join(" ").trim_end().to_string());
                current_line = vec![word];
                char_counter = word_length + 1;
            } else {
                current_line.push(word);
                char_counter += word_length + 1;
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line.join(" ").trim_end().to_string());
        }
    }

    return lines;
}

impl<'a> Bubble<'_> {
    pub fn new(message: &'a Message, alignment: BubbleAlignment, window_max_width: usize) -> Bubble {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'a>> {
        let max_line_length = self.get_max_line_length();
        let mut lines: Vec<Line> = vec![];

        for line in wrap_text(&self.message.text, max_line_length) {
            lines.push(self.spans_to_line(vec![Span::from(line)], max_line_length));
        }

        for annotation in self.annotations() {
            for line in wrap_text(&annotation, max_line_length) {
                lines.push(self.spans_to_line(
                    vec![Span::styled(
                        line,
                        Style {
                            fg: Some(Color::DarkGray),
                            ..Style::default()
                        },
                    )],
                    max_line_length,
                ));
            }
        }

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    /// Derived facts rendered beneath submitted text. System messages carry
    /// none.
    fn annotations(&self) -> Vec<String> {
        if self.message.author != Author::User {
            return vec![];
        }

        let mut detected = "unknown".to_string();
        if let Some(language) = self.message.detected_language {
            detected = format!("{} ({language})", language.display_name());
        }

        let mut annotations = vec![format!("Detected: {detected}")];

        if self.message.has_summary() {
            annotations.push(format!("Summary: \"{}\"", self.message.summary));
        }

        if !self.message.translation.is_empty() {
            annotations.push(format!("Translation: {}", self.message.translation));
        }

        return annotations;
    }

    fn spans_to_line(&self, mut spans: Vec<Span<'a>>, max_line_length: usize) -> Line<'a> {
        let line_str_len: usize = spans
            .iter()
            .map(|e| {
                return char_count(&e.content);
            })
            .sum();
        let fill = repeat_from_subtractions(" ", vec![max_line_length, line_str_len]);
        let formatted_line_length =
            line_str_len + char_count(&fill) + Bubble::style_config().bubble_padding;

        let mut wrapped_spans = vec![self.highlight_span("│ ".to_string())];
        wrapped_spans.append(&mut spans);
        wrapped_spans.push(self.highlight_span(format!("{fill} │")));

        let outer_bubble_padding =
            repeat_from_subtractions(" ", vec![self.window_max_width, formatted_line_length]);

        if self.alignment == BubbleAlignment::Left {
            wrapped_spans.push(Span::from(outer_bubble_padding));
            return Line::from(wrapped_spans);
        }

        let mut line_spans = vec![Span::from(outer_bubble_padding)];
        line_spans.extend(wrapped_spans);

        return Line::from(line_spans);
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;

        let mut max_line_length = self
            .message
            .text
            .lines()
            .map(|line| {
                return char_count(line);
            })
            .max()
            .unwrap_or(0);

        for annotation in self.annotations() {
            let annotation_length = char_count(&annotation);
            if annotation_length > max_line_length {
                max_line_length = annotation_length;
            }
        }

        if max_line_length > (self.window_max_width - line_border_width) {
            max_line_length = self.window_max_width - line_border_width;
        }

        let username = self.message.author.to_string();
        if max_line_length < char_count(&username) {
            max_line_length = char_count(&username);
        }

        return max_line_length;
    }

    fn wrap_lines_in_bubble(&self, lines: Vec<Line<'a>>, max_line_length: usize) -> Vec<Line<'a>> {
        // Add 2 for the vertical bars.
        let inner_bar = ["─"].repeat(max_line_length + 2).join("");
        let top_left_border = "╭";
        let mut top_bar = format!("{top_left_border}{inner_bar}╮");
        let bottom_bar = format!("╰{inner_bar}╯");
        let bar_bubble_padding = repeat_from_subtractions(
            " ",
            vec![
                self.window_max_width,
                max_line_length,
                Bubble::style_config().bubble_padding,
            ],
        );

        let username = self.message.author.to_string();
        let top_replace = ["─"].repeat(char_count(&username)).join("");
        top_bar = top_bar.replace(
            format!("{top_left_border}{top_replace}").as_str(),
            format!("{top_left_border}{username}").as_str(),
        );

        if self.alignment == BubbleAlignment::Left {
            let mut res = vec![self.highlight_line(format!("{top_bar}{bar_bubble_padding}"))];
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_bubble_padding}")));
            return res;
        } else {
            let mut res = vec![self.highlight_line(format!("{bar_bubble_padding}{top_bar}"))];
            res.extend(lines);
            res.push(self.highlight_line(format!("{bar_bubble_padding}{bottom_bar}")));
            return res;
        }
    }

    fn highlight_span(&self, text: String) -> Span<'a> {
        if self.message.message_type() == MessageType::Error {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            );
        } else if self.message.author == Author::Polyglot {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Rgb(90, 135, 173)), // Steel blue
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }

    fn highlight_line(&self, text: String) -> Line<'a> {
        return Line::from(self.highlight_span(text));
    }
}
