//! Streaming parser for the FreeDict TEI dictionary body.
//!
//! FreeDict markup is inconsistent across releases, so extraction is
//! tolerant: the part-of-speech code may sit in `<pos>` or in
//! `<gram type="pos">`, and the gloss in a translation citation's
//! `<quote>` or in a bare `<quote>`. Entries missing a headword or a
//! usable gloss are skipped rather than reported.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use palabras_core::entry::{DictionaryIndex, Sense};
use palabras_core::normalize::{clean_gloss, clean_headword};
use palabras_core::pos::PartOfSpeech;

use crate::error::DictError;

/// Fields accumulated while walking one `<entry>`.
#[derive(Default)]
struct EntryState {
    orth: Option<String>,
    pos: Option<String>,
    gram_pos: Option<String>,
    trans_quote: Option<String>,
    any_quote: Option<String>,
}

impl EntryState {
    fn finish(self, index: &mut DictionaryIndex) -> bool {
        let Some(orth) = self.orth else {
            return false;
        };
        let headword = clean_headword(&orth);
        if headword.is_empty() {
            return false;
        }

        let gloss = self
            .trans_quote
            .or(self.any_quote)
            .map(|q| clean_gloss(&q))
            .unwrap_or_default();
        if gloss.is_empty() {
            return false;
        }

        let code = self
            .pos
            .filter(|p| !p.trim().is_empty())
            .or(self.gram_pos)
            .unwrap_or_default();

        index.insert_first(
            headword,
            Sense {
                gloss,
                pos: PartOfSpeech::parse(&code),
            },
        )
    }
}

/// Text currently being captured, until the named element closes.
struct Capture {
    end_tag: Vec<u8>,
    field: Field,
    buf: String,
}

enum Field {
    Orth,
    Pos,
    GramPos,
    Quote { trans: bool },
}

fn attr(start: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    start
        .attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key)
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.to_string())
}

/// Build the headword index from the extracted TEI document.
pub fn parse_tei(xml: &[u8]) -> Result<DictionaryIndex, DictError> {
    let mut reader = Reader::from_reader(xml);

    let mut index = DictionaryIndex::new();
    let mut entries_seen = 0usize;

    let mut in_entry = false;
    let mut entry = EntryState::default();
    // One flag per open <cit>: was it a translation citation?
    let mut cit_stack: Vec<bool> = Vec::new();
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = start.local_name().as_ref().to_vec();
                match name.as_slice() {
                    b"entry" => {
                        in_entry = true;
                        entry = EntryState::default();
                        cit_stack.clear();
                    }
                    b"cit" if in_entry => {
                        let trans = attr(&start, b"type").as_deref() == Some("trans");
                        cit_stack.push(trans);
                    }
                    b"orth" if in_entry && capture.is_none() && entry.orth.is_none() => {
                        capture = Some(Capture {
                            end_tag: name,
                            field: Field::Orth,
                            buf: String::new(),
                        });
                    }
                    b"pos" if in_entry && capture.is_none() && entry.pos.is_none() => {
                        capture = Some(Capture {
                            end_tag: name,
                            field: Field::Pos,
                            buf: String::new(),
                        });
                    }
                    b"gram"
                        if in_entry
                            && capture.is_none()
                            && entry.gram_pos.is_none()
                            && attr(&start, b"type").as_deref() == Some("pos") =>
                    {
                        capture = Some(Capture {
                            end_tag: name,
                            field: Field::GramPos,
                            buf: String::new(),
                        });
                    }
                    b"quote" if in_entry && capture.is_none() => {
                        let trans = cit_stack.iter().any(|&t| t);
                        let wanted = (trans && entry.trans_quote.is_none())
                            || entry.any_quote.is_none();
                        if wanted {
                            capture = Some(Capture {
                                end_tag: name,
                                field: Field::Quote { trans },
                                buf: String::new(),
                            });
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(text) => {
                if let Some(cap) = capture.as_mut() {
                    let piece = text.unescape()?;
                    if !cap.buf.is_empty() {
                        cap.buf.push(' ');
                    }
                    cap.buf.push_str(&piece);
                }
            }
            Event::CData(data) => {
                if let Some(cap) = capture.as_mut() {
                    if !cap.buf.is_empty() {
                        cap.buf.push(' ');
                    }
                    cap.buf.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(end) => {
                let name = end.local_name().as_ref().to_vec();

                if let Some(cap) = capture.take_if(|cap| cap.end_tag == name) {
                    match cap.field {
                        Field::Orth => entry.orth = Some(cap.buf),
                        Field::Pos => entry.pos = Some(cap.buf),
                        Field::GramPos => entry.gram_pos = Some(cap.buf),
                        Field::Quote { trans } => {
                            if trans && entry.trans_quote.is_none() {
                                entry.trans_quote = Some(cap.buf.clone());
                            }
                            if entry.any_quote.is_none() {
                                entry.any_quote = Some(cap.buf);
                            }
                        }
                    }
                    continue;
                }

                match name.as_slice() {
                    b"cit" if in_entry => {
                        cit_stack.pop();
                    }
                    b"entry" if in_entry => {
                        entries_seen += 1;
                        std::mem::take(&mut entry).finish(&mut index);
                        in_entry = false;
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(
        "parsed {} TEI entries into {} unique headwords",
        entries_seen,
        index.len()
    );
    Ok(index)
}
