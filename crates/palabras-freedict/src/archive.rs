use std::io::Read;

use tar::Archive;
use xz2::read::XzDecoder;

use crate::error::DictError;

/// Pull the TEI dictionary body out of a `.src.tar.xz` archive.
///
/// A member whose name signals the main TEI document wins; readme and
/// license files never qualify. When nothing matches that, any member with
/// a `.tei`/`.tei.xml`/`.xml` extension is accepted.
pub fn extract_tei(archive_bytes: &[u8]) -> Result<Vec<u8>, DictError> {
    let decoder = XzDecoder::new(archive_bytes);
    let mut archive = Archive::new(decoder);

    // Candidates are collected in archive order; selection happens after
    // the walk so a preferred name later in the archive still beats an
    // earlier fallback-only match.
    let mut candidates: Vec<(String, Vec<u8>)> = Vec::new();
    for entry in archive.entries()? {
        let mut entry = entry?;
        let name = entry.path()?.to_string_lossy().to_lowercase();
        if !(name.contains("tei") || name.ends_with(".xml")) {
            continue;
        }

        let mut body = Vec::new();
        entry.read_to_end(&mut body)?;
        candidates.push((name, body));
    }

    let preferred = candidates.iter().position(|(name, _)| {
        (name.contains("tei") || name.ends_with(".tei") || name.ends_with(".tei.xml"))
            && !name.contains("readme")
            && !name.contains("license")
    });
    let fallback = candidates.iter().position(|(name, _)| {
        name.ends_with(".tei") || name.ends_with(".tei.xml") || name.ends_with(".xml")
    });

    let Some(chosen) = preferred.or(fallback) else {
        return Err(DictError::MissingTeiMember);
    };

    let body = std::mem::take(&mut candidates[chosen].1);
    if body.is_empty() {
        return Err(DictError::EmptyTeiMember);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn tar_xz(members: &[(&str, &[u8])]) -> Vec<u8> {
        let mut tar_bytes = Vec::new();
        {
            let mut builder = tar::Builder::new(&mut tar_bytes);
            for (name, data) in members {
                let mut header = tar::Header::new_gnu();
                header.set_size(data.len() as u64);
                header.set_mode(0o644);
                builder.append_data(&mut header, name, *data).unwrap();
            }
            builder.finish().unwrap();
        }

        let mut compressed = Vec::new();
        {
            let mut encoder = xz2::write::XzEncoder::new(&mut compressed, 6);
            encoder.write_all(&tar_bytes).unwrap();
            encoder.finish().unwrap();
        }
        compressed
    }

    #[test]
    fn prefers_tei_member_over_incidental_files() {
        let archive = tar_xz(&[
            ("readme.txt", b"read me".as_slice()),
            ("license.txt", b"GPL".as_slice()),
            ("dict.tei", b"<TEI/>".as_slice()),
        ]);

        assert_eq!(extract_tei(&archive).unwrap(), b"<TEI/>");
    }

    #[test]
    fn readme_named_like_tei_does_not_win() {
        let archive = tar_xz(&[
            ("README.tei", b"about".as_slice()),
            ("spa-eng/spa-eng.tei", b"<TEI>real</TEI>".as_slice()),
        ]);

        assert_eq!(extract_tei(&archive).unwrap(), b"<TEI>real</TEI>");
    }

    #[test]
    fn falls_back_to_plain_xml_member() {
        let archive = tar_xz(&[
            ("notes.txt", b"n".as_slice()),
            ("dictionary.xml", b"<xml/>".as_slice()),
        ]);

        assert_eq!(extract_tei(&archive).unwrap(), b"<xml/>");
    }

    #[test]
    fn missing_member_is_an_error() {
        let archive = tar_xz(&[("readme.txt", b"nothing else".as_slice())]);
        assert!(matches!(
            extract_tei(&archive),
            Err(DictError::MissingTeiMember)
        ));
    }

    #[test]
    fn empty_member_is_an_error() {
        let archive = tar_xz(&[("dict.tei", b"".as_slice())]);
        assert!(matches!(
            extract_tei(&archive),
            Err(DictError::EmptyTeiMember)
        ));
    }
}
