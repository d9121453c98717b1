use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Vertical advance between wrapped lines, in `em`.
pub const LINE_HEIGHT_EM: f64 = 1.1;

/// Marker appended to character-truncated words.
pub const ELLIPSIS: &str = "...";

/// Pixel-width measurement capability supplied by the rendering environment.
///
/// Wrapping decisions are driven entirely by this measure, so hosts with real
/// font metrics and deterministic test surfaces share one code path.
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f64;
}

/// Deterministic fixed-advance measure for tests and headless surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub advance: f64,
}

impl FixedAdvance {
    #[must_use]
    pub const fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

/// One wrapped line, anchored at x = 0 with a per-line vertical offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineFragment {
    pub text: String,
    pub line_index: usize,
    pub dy_em: f64,
}

impl LineFragment {
    #[must_use]
    pub fn new(text: impl Into<String>, line_index: usize) -> Self {
        Self {
            text: text.into(),
            line_index,
            dy_em: line_index as f64 * LINE_HEIGHT_EM,
        }
    }
}

/// Wrapped rendering plan for one label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrapPlan {
    pub lines: SmallVec<[LineFragment; 2]>,
    rendered: bool,
}

impl WrapPlan {
    /// Whether the final line kept any text. A `false` here poisons the whole
    /// batch in [`format_labels`].
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    fn cleared() -> Self {
        Self::default()
    }
}

/// Word-wraps `text` into at most `max_lines` lines, none of which measures at
/// or above `max_width`.
///
/// Greedy packing with two fallbacks:
/// - a first word too wide for an empty line is character-truncated with an
///   `...` marker, or cleared entirely when not even a short prefix fits;
/// - a word overflowing the last allowed line is merged with the previously
///   accepted word and the merge is character-truncated in place.
pub fn wrap_label(
    text: &str,
    measure: &dyn TextMeasure,
    max_width: f64,
    max_lines: usize,
) -> WrapPlan {
    let words: Vec<&str> = text.split_whitespace().collect();

    let mut lines: Vec<String> = vec![String::new()];
    let mut current: Vec<String> = Vec::new();
    let mut line_number = 0usize;

    for word in &words {
        let was_empty = current.is_empty();
        current.push((*word).to_owned());
        let candidate = current.join(" ");

        if fits(measure, &candidate, max_width) {
            *lines.last_mut().expect("at least one line") = candidate;
            continue;
        }

        if was_empty {
            // A lone word already overflows the empty line.
            *lines.last_mut().expect("at least one line") =
                break_word(measure, max_width, &[], word).unwrap_or_default();
            break;
        }

        current.pop();
        *lines.last_mut().expect("at least one line") = current.join(" ");

        if line_number + 1 > max_lines.saturating_sub(1) {
            // Last allowed line: merge the rejected word with the previously
            // accepted one and truncate the merge after the remaining words.
            let merged = match current.pop() {
                Some(previous) => format!("{previous} {word}"),
                None => (*word).to_owned(),
            };
            *lines.last_mut().expect("at least one line") =
                break_word(measure, max_width, &current, &merged).unwrap_or_default();
            break;
        }

        line_number += 1;
        lines.push(String::new());
        current.clear();

        if fits(measure, word, max_width) {
            current.push((*word).to_owned());
            *lines.last_mut().expect("at least one line") = (*word).to_owned();
        } else {
            *lines.last_mut().expect("at least one line") =
                break_word(measure, max_width, &[], word).unwrap_or_default();
            break;
        }
    }

    let rendered = lines.last().is_some_and(|line| !line.is_empty());

    let fragments = lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| LineFragment::new(line, index))
        .collect();

    WrapPlan {
        lines: fragments,
        rendered,
    }
}

/// Wraps a batch of axis labels under one shared budget.
///
/// All-or-nothing: if any label ends up with zero rendered text, every label
/// in the batch is cleared so a shared axis never shows partial labeling.
pub fn format_labels(
    labels: &[String],
    measure: &dyn TextMeasure,
    max_width: f64,
    max_lines: usize,
) -> Vec<WrapPlan> {
    let plans: Vec<WrapPlan> = labels
        .iter()
        .map(|label| wrap_label(label, measure, max_width, max_lines))
        .collect();

    if plans.iter().any(|plan| !plan.is_rendered()) {
        return plans.iter().map(|_| WrapPlan::cleared()).collect();
    }

    plans
}

/// Character-level truncation of `overflow`, appended after `accepted`.
///
/// Grows a prefix from 3 characters up, keeping the longest candidate that
/// still fits. Returns `None` when not even the shortest prefix fits (the
/// line renders nothing). The marker is omitted when the prefix already
/// reaches the final character.
fn break_word(
    measure: &dyn TextMeasure,
    max_width: f64,
    accepted: &[String],
    overflow: &str,
) -> Option<String> {
    let chars: Vec<char> = overflow.chars().collect();

    if chars.len() <= 3 {
        let mut line = accepted.join(" ");
        line.push_str(ELLIPSIS);
        return fits(measure, &line, max_width).then_some(line);
    }

    for i in 3..chars.len() {
        let marker = if i < chars.len() - 1 { ELLIPSIS } else { "" };
        let prefix: String = chars[..=i].iter().collect();
        let candidate = join_after(accepted, &format!("{prefix}{marker}"));

        if !fits(measure, &candidate, max_width) {
            if i == 3 {
                return None;
            }

            let shorter: String = chars[..i].iter().collect();
            return Some(join_after(accepted, &format!("{shorter}{marker}")));
        }
    }

    Some(join_after(accepted, overflow))
}

fn join_after(accepted: &[String], tail: &str) -> String {
    if accepted.is_empty() {
        tail.to_owned()
    } else {
        format!("{} {tail}", accepted.join(" "))
    }
}

fn fits(measure: &dyn TextMeasure, text: &str, max_width: f64) -> bool {
    measure.text_width(text) < max_width
}

#[cfg(test)]
mod tests {
    use super::{FixedAdvance, LINE_HEIGHT_EM, TextMeasure, format_labels, wrap_label};

    const ADVANCE: FixedAdvance = FixedAdvance::new(4.0);

    #[test]
    fn short_text_stays_on_one_line() {
        let plan = wrap_label("ab cd", &ADVANCE, 100.0, 2);

        assert!(plan.is_rendered());
        assert_eq!(plan.lines.len(), 1);
        assert_eq!(plan.lines[0].text, "ab cd");
        assert_eq!(plan.lines[0].dy_em, 0.0);
    }

    #[test]
    fn overflow_starts_a_new_line_with_the_rejected_word() {
        // "alpha beta" at 4px/char: the pair is 40px, budget 30px.
        let plan = wrap_label("alpha beta", &ADVANCE, 30.0, 2);

        assert!(plan.is_rendered());
        let texts: Vec<&str> = plan.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "beta"]);
        assert_eq!(plan.lines[1].dy_em, LINE_HEIGHT_EM);
    }

    #[test]
    fn long_single_word_is_character_truncated_with_marker() {
        let plan = wrap_label("supercalifragilisticexpialidocious", &ADVANCE, 40.0, 1);

        assert!(plan.is_rendered());
        assert_eq!(plan.lines.len(), 1);
        let text = &plan.lines[0].text;
        assert!(text.ends_with("..."), "got {text:?}");
        assert!(ADVANCE.text_width(text) <= 40.0);
    }

    #[test]
    fn last_line_merges_and_truncates_the_rejected_word() {
        // Budget fits "aa bb" (20px) but not "aa bb cccccc" (48px); with a
        // single allowed line the tail is merged and truncated.
        let plan = wrap_label("aa bb cccccc", &ADVANCE, 45.0, 1);

        assert!(plan.is_rendered());
        assert_eq!(plan.lines.len(), 1);
        let text = &plan.lines[0].text;
        assert_eq!(text, "aa bb cc...");
        assert!(ADVANCE.text_width(text) <= 45.0);
    }

    #[test]
    fn impossible_budget_clears_the_line() {
        let plan = wrap_label("unrepresentable", &ADVANCE, 10.0, 2);

        assert!(!plan.is_rendered());
        assert!(plan.lines.is_empty());
    }

    #[test]
    fn overflowing_word_on_a_fresh_line_is_truncated_in_place() {
        // "aa" fits; "enormouslylong" overflows the second line on its own.
        let plan = wrap_label("aa enormouslylong", &ADVANCE, 30.0, 3);

        assert!(plan.is_rendered());
        assert_eq!(plan.lines.len(), 2);
        let tail = &plan.lines[1].text;
        assert!(tail.ends_with("..."), "got {tail:?}");
        assert!(ADVANCE.text_width(tail) < 30.0);
    }

    #[test]
    fn never_more_lines_than_allowed() {
        let plan = wrap_label("one two three four five six", &ADVANCE, 30.0, 2);

        assert!(plan.lines.len() <= 2);
    }

    #[test]
    fn batch_clears_all_labels_when_one_renders_nothing() {
        let labels = vec!["fits".to_owned(), "unrepresentable".to_owned()];
        let plans = format_labels(&labels, &ADVANCE, 18.0, 1);

        assert_eq!(plans.len(), 2);
        assert!(plans.iter().all(|plan| plan.lines.is_empty()));
    }

    #[test]
    fn batch_keeps_all_labels_when_all_render() {
        let labels = vec!["aa".to_owned(), "bb cc".to_owned()];
        let plans = format_labels(&labels, &ADVANCE, 100.0, 2);

        assert!(plans.iter().all(|plan| plan.is_rendered()));
        assert_eq!(plans[1].lines[0].text, "bb cc");
    }
}
