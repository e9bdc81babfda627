//! Tolerant parsers for the two frequency-page layouts.
//!
//! Older pages carry a `wikitable` with rank/word/…/lemma-forms columns;
//! newer dumps render as plain text rows like `"9001.  moisés  5  moisés"`.
//! Both parsers return lemmas sorted by rank and silently skip rows they
//! cannot make sense of.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use palabras_core::normalize::clean_spanish_token;

static WIKITABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.wikitable").expect("static selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("static selector"));

/// `"<rank>.  <word>  <count>  <lemma forms…>"`
static TEXT_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(\S+)\s+\d+\s+(.*)$").expect("static regex"));

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ")
}

/// Pick the lemma for a row: first usable token of the lemma-forms blob,
/// falling back to the word column.
fn row_lemma(word: &str, lemma_blob: &str) -> String {
    let lemma = clean_spanish_token(lemma_blob);
    if lemma.is_empty() {
        clean_spanish_token(word)
    } else {
        lemma
    }
}

/// Extract ranked lemmas from the first wikitable on the page.
///
/// Returns an empty list when no wikitable is present so the caller can
/// fall through to the plain-text layout.
pub fn parse_wikitable(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let Some(table) = doc.select(&WIKITABLE).next() else {
        return Vec::new();
    };

    let mut rows: Vec<(u32, String)> = Vec::new();
    for tr in table.select(&ROW) {
        let cells: Vec<ElementRef<'_>> = tr.select(&CELL).collect();
        if cells.len() < 2 {
            continue;
        }

        let rank_text = element_text(&cells[0]).trim().replace('.', "");
        let Ok(rank) = rank_text.parse::<u32>() else {
            continue;
        };

        let word = element_text(&cells[1]);
        // Column 2 is the word; the last column carries lemma forms when
        // the table has the wider layout.
        let lemma_blob = if cells.len() >= 4 {
            element_text(&cells[cells.len() - 1])
        } else {
            word.clone()
        };

        let lemma = row_lemma(&word, &lemma_blob);
        if lemma.is_empty() {
            continue;
        }

        rows.push((rank, lemma));
    }

    rows.sort_by_key(|&(rank, _)| rank);
    rows.into_iter().map(|(_, lemma)| lemma).collect()
}

/// Extract ranked lemmas from a page rendered as plain text rows.
pub fn parse_plaintext_rows(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let text = doc.root_element().text().collect::<Vec<_>>().join("\n");

    let mut rows: Vec<(u32, String)> = Vec::new();
    for line in text.lines() {
        let Some(caps) = TEXT_ROW.captures(line.trim()) else {
            continue;
        };
        let Ok(rank) = caps[1].parse::<u32>() else {
            continue;
        };

        let lemma = row_lemma(&caps[2], &caps[3]);
        if lemma.is_empty() {
            continue;
        }

        rows.push((rank, lemma));
    }

    rows.sort_by_key(|&(rank, _)| rank);
    rows.into_iter().map(|(_, lemma)| lemma).collect()
}
