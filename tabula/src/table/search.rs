//! Search filtering over visible columns.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

use super::item::{Column, TableRow};

/// How a search string is matched against cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Case-insensitive fuzzy match using nucleo-matcher.
    Fuzzy,
}

/// Filter rows by a case-insensitive substring search.
///
/// A search that is empty after trimming returns `rows` untouched. Otherwise
/// a row is kept when any visible column's value contains the trimmed
/// search. Null cells never match.
pub fn filter_by_search<'a, T: TableRow>(
    rows: Vec<&'a T>,
    columns: &[Column],
    search: &str,
) -> Vec<&'a T> {
    filter_by_search_with(rows, columns, search, SearchMode::Substring)
}

/// Filter rows using the given [`SearchMode`].
///
/// Row order is preserved in both modes; fuzzy scores are not used to rank.
pub fn filter_by_search_with<'a, T: TableRow>(
    rows: Vec<&'a T>,
    columns: &[Column],
    search: &str,
    mode: SearchMode,
) -> Vec<&'a T> {
    let Some(mut filter) = SearchFilter::new(columns, search, mode) else {
        return rows;
    };
    rows.into_iter().filter(|row| filter.matches(*row)).collect()
}

/// A search compiled against a column set.
pub(crate) struct SearchFilter<'c> {
    visible: Vec<&'c Column>,
    needle: Needle,
}

enum Needle {
    Substring(String),
    Fuzzy {
        pattern: Pattern,
        matcher: Box<Matcher>,
        buf: Vec<char>,
    },
}

impl<'c> SearchFilter<'c> {
    /// `None` when the search is blank after trimming.
    pub(crate) fn new(columns: &'c [Column], search: &str, mode: SearchMode) -> Option<Self> {
        let needle = search.trim();
        if needle.is_empty() {
            return None;
        }
        let needle = match mode {
            SearchMode::Substring => Needle::Substring(needle.to_lowercase()),
            SearchMode::Fuzzy => Needle::Fuzzy {
                pattern: Pattern::new(
                    needle,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                ),
                matcher: Box::new(Matcher::new(Config::DEFAULT)),
                buf: Vec::new(),
            },
        };
        Some(Self {
            visible: columns.iter().filter(|c| c.visible).collect(),
            needle,
        })
    }

    /// Whether any visible cell of `row` matches.
    pub(crate) fn matches<T: TableRow + ?Sized>(&mut self, row: &T) -> bool {
        let Self { visible, needle } = self;
        visible.iter().any(|column| {
            let Some(text) = row.cell(&column.id).to_text() else {
                return false;
            };
            match needle {
                Needle::Substring(needle) => text.to_lowercase().contains(needle.as_str()),
                Needle::Fuzzy {
                    pattern,
                    matcher,
                    buf,
                } => {
                    let haystack = Utf32Str::new(&text, buf);
                    pattern.score(haystack, matcher).is_some()
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Record;

    fn rows() -> Vec<Record> {
        vec![
            Record::with_id("btc").set("name", "Bitcoin").set("price", 64000),
            Record::with_id("eth").set("name", "Ethereum").set("price", 3100.5),
            Record::with_id("sol").set("name", "Solana").set("note", "fast"),
        ]
    }

    #[test]
    fn test_fuzzy_matches_scattered_letters() {
        let rows = rows();
        let columns = vec![Column::new("name", "Name")];
        let refs: Vec<&Record> = rows.iter().collect();
        let matched = filter_by_search_with(refs, &columns, "etm", SearchMode::Fuzzy);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.as_deref(), Some("eth"));
    }

    #[test]
    fn test_fuzzy_keeps_row_order() {
        let rows = rows();
        let columns = vec![Column::new("name", "Name")];
        let refs: Vec<&Record> = rows.iter().collect();
        let matched = filter_by_search_with(refs, &columns, "o", SearchMode::Fuzzy);
        let ids: Vec<_> = matched.iter().filter_map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, vec!["btc", "sol"]);
    }
}
