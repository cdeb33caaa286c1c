//! Presentation-layer formatting of solved words.
//!
//! The solver hands back raw words in discovery order; everything about how
//! they look on screen (sorting, grouping by length, column layout, headers)
//! lives here and never leaks into the engine.

/// Display options for [`format_words`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Sort words alphabetically.
    pub sort: bool,
    /// Group words by length (shortest first).
    pub group_by_length: bool,
    /// Print a "===> N letter words" header above each length group.
    /// Ignored unless `group_by_length` is set.
    pub headers: bool,
    /// One word per line instead of tab-separated columns.
    pub single_column: bool,
}

/// Render a word list for the terminal according to `options`.
#[must_use]
pub fn format_words(words: &[String], options: &ReportOptions) -> String {
    let mut words: Vec<&str> = words.iter().map(String::as_str).collect();
    if options.sort {
        words.sort_unstable();
    }

    let divider = if options.single_column { "\n" } else { "\t" };

    if !options.group_by_length {
        return words.join(divider);
    }

    // stable sort keeps any alphabetical order within each length group
    words.sort_by_key(|word| word.len());

    let mut blocks: Vec<String> = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let length = words[start].len();
        let end = start
            + words[start..]
                .iter()
                .position(|word| word.len() != length)
                .unwrap_or(words.len() - start);

        let body = words[start..end].join(divider);
        blocks.push(if options.headers {
            format!("===> {length} letter words\n{body}")
        } else {
            body
        });
        start = end;
    }

    let separator = if options.headers { "\n\n" } else { "\n" };
    blocks.join(separator)
}
