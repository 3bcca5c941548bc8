//! Title markup: plain text with `<b>…</b>` for the accent letters and
//! `<br />` for line breaks, e.g. `"the j<b>o</b>urney to <br /> the mystic w<b>o</b>rld"`.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

pub type Word = Vec<Segment>;
pub type Line = Vec<Word>;

/// Distance in px a title must clear above the viewport bottom before it reveals.
pub const REVEAL_MARGIN: f64 = 100.0;
/// Seconds between consecutive words fading in.
pub const WORD_STAGGER: f64 = 0.02;

pub fn parse(markup: &str) -> Vec<Line> {
    let mut bold = false;
    split_lines(markup)
        .into_iter()
        .map(|line| {
            line.split_whitespace()
                .map(|word| parse_word(word, &mut bold))
                .filter(|word| !word.is_empty())
                .collect::<Line>()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

fn split_lines(markup: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = markup;
    while let Some(start) = rest.find("<br") {
        lines.push(&rest[..start]);
        rest = match rest[start..].find('>') {
            Some(end) => &rest[start + end + 1..],
            None => "",
        };
    }
    lines.push(rest);
    lines
}

fn parse_word(word: &str, bold: &mut bool) -> Word {
    let mut segments = Vec::new();
    let mut rest = word;
    loop {
        let tag = if *bold { "</b>" } else { "<b>" };
        match rest.find(tag) {
            Some(at) => {
                push_segment(&mut segments, &rest[..at], *bold);
                *bold = !*bold;
                rest = &rest[at + tag.len()..];
            }
            None => {
                push_segment(&mut segments, rest, *bold);
                return segments;
            }
        }
    }
}

fn push_segment(segments: &mut Word, text: &str, bold: bool) {
    if !text.is_empty() {
        segments.push(Segment { text: text.to_string(), bold });
    }
}

/// Whether a title whose top edge sits at `top` (viewport px) has scrolled into view.
pub fn in_reveal_zone(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN
}

pub fn word_delay(index: usize) -> String {
    format!("transition-delay: {:.2}s;", index as f64 * WORD_STAGGER)
}
