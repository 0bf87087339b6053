//! Streaming-Parser für AIXM-4.5-Snapshots.
//!
//! Gelesen werden nur die Elemente, die für die Grenzkonvertierung nötig sind:
//! `Gbr`, `Abd`, `Ase` und `Adg`. Alles andere wird überlesen.

mod builder;

use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::AixmCatalog;
use builder::{CatalogRecords, RecordBuilder};

/// Liest eine AIXM-Datei und baut den Katalog auf.
pub fn load_aixm_file(path: &Path) -> Result<AixmCatalog> {
    let xml_content = std::fs::read_to_string(path)
        .with_context(|| format!("AIXM-Datei konnte nicht gelesen werden: {}", path.display()))?;
    parse_aixm_document(&xml_content)
        .with_context(|| format!("AIXM-Datei ungueltig: {}", path.display()))
}

/// Parst ein AIXM-Dokument aus einem XML-String.
pub fn parse_aixm_document(xml_content: &str) -> Result<AixmCatalog> {
    let mut reader = Reader::from_str(xml_content);
    // Nicht trimmen: Text wird an Entity-Referenzen aufgeteilt
    reader.config_mut().trim_text(false);

    let mut buffer = Vec::new();
    let mut records = CatalogRecords::default();

    // Pfad der offenen Elemente innerhalb des aktuellen Records
    let mut path: Vec<String> = Vec::new();
    let mut current: Option<RecordBuilder> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let tag = reader.decoder().decode(e.name().as_ref())?.into_owned();
                text.clear();

                match current.as_mut() {
                    Some(builder) => {
                        path.push(tag);
                        builder.open(&path);
                        if let Some(mid) = read_mid(&reader, e)? {
                            builder.set_mid(&path, mid);
                        }
                    }
                    None => current = RecordBuilder::start(&tag),
                }
            }
            Ok(Event::Empty(ref e)) => {
                // Leere Elemente tragen in AIXM nur Referenzen (`mid`)
                if let Some(builder) = current.as_mut() {
                    let tag = reader.decoder().decode(e.name().as_ref())?.into_owned();
                    path.push(tag);
                    builder.open(&path);
                    if let Some(mid) = read_mid(&reader, e)? {
                        builder.set_mid(&path, mid);
                    }
                    path.pop();
                }
            }
            Ok(Event::Text(e)) => {
                if current.is_some() {
                    text.push_str(&e.xml_content()?);
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if current.is_some() {
                    if let Some(ch) = e.resolve_char_ref()? {
                        text.push(ch);
                    } else {
                        let entity = e.decode()?;
                        match resolve_predefined_entity(&entity) {
                            Some(value) => text.push_str(value),
                            None => log::warn!("Unbekannte Entity '&{};' ignoriert", entity),
                        }
                    }
                }
            }
            Ok(Event::End(_)) => {
                let Some(builder) = current.as_mut() else {
                    buffer.clear();
                    continue;
                };

                if path.is_empty() {
                    // Record-Element schließt
                    if let Some(finished) = current.take() {
                        finished.finish_into(&mut records);
                    }
                } else {
                    let value = text.trim();
                    if !value.is_empty() {
                        builder.set_text(&path, value.to_string());
                    }
                    path.pop();
                }
                text.clear();
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des AIXM-XML"),
            _ => {}
        }

        buffer.clear();
    }

    if current.is_some() {
        anyhow::bail!("AIXM-Dokument endet innerhalb eines Records");
    }

    log::info!(
        "AIXM gelesen: {} Gbr, {} Abd, {} Ase, {} Adg",
        records.borders.len(),
        records.boundaries.len(),
        records.zones.len(),
        records.derivations.len()
    );

    Ok(AixmCatalog::from_records(
        records.borders,
        records.boundaries,
        records.zones,
        records.derivations,
    ))
}

/// Liest das `mid`-Attribut eines Elements.
fn read_mid(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Option<String>> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?;
        if key == "mid" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
