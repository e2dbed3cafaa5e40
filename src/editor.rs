use std::borrow::Cow::{self, Borrowed, Owned};

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::{Context, Helper, Hinter, Validator};

/// Line editor helper: completes command keywords, hints from history.
#[derive(Helper, Hinter, Validator)]
pub(crate) struct TallyHelper {
    pub(crate) keywords: &'static [&'static str],
    #[rustyline(Hinter)]
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored_prompt: String,
}

impl TallyHelper {
    pub(crate) fn new(keywords: &'static [&'static str], prompt: &str) -> TallyHelper {
        TallyHelper {
            keywords,
            hinter: HistoryHinter {},
            colored_prompt: format!("\x1b[1;32m{prompt}\x1b[0m"),
        }
    }
}

impl Completer for TallyHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = complete_keyword(self.keywords, line, pos);
        let candidates = words.into_iter()
            .map(|w| Pair { display: w.to_string(), replacement: w.to_string() })
            .collect();
        Ok((start, candidates))
    }
}

/// Keywords starting with the word under the cursor, ignoring case.
/// Returns where the word starts and the matching keywords.
fn complete_keyword(keywords: &'static [&'static str], line: &str, pos: usize) -> (usize, Vec<&'static str>) {
    let line = &line[..pos];
    let start = line.rfind(|c: char| c.is_ascii_whitespace()).map(|i| i + 1).unwrap_or(0);
    let word = line[start..].to_uppercase();
    if word.is_empty() {
        return (start, vec![]);
    }
    (start, keywords.iter().copied().filter(|k| k.starts_with(&word)).collect())
}

impl Highlighter for TallyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored_prompt)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned("\x1b[2m".to_owned() + hint + "\x1b[m")
    }
}
