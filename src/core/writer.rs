//! Serializes a [`Catalog`] back into a TS document.
//!
//! The output is tab-indented with one element per line and parses back to
//! the same catalog (document line numbers aside).

use std::fmt::Display;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::core::{
    data::{Catalog, CatalogEntry},
    error::CatalogError,
};

fn write_error(err: impl Display) -> CatalogError {
    CatalogError::Write(err.to_string())
}

pub fn write_catalog(catalog: &Catalog) -> Result<String, CatalogError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(write_error)?;
    writer
        .write_event(Event::DocType(BytesText::from_escaped("TS")))
        .map_err(write_error)?;

    let mut root = BytesStart::new("TS");
    if let Some(version) = &catalog.version {
        root.push_attribute(("version", version.as_str()));
    }
    if let Some(language) = &catalog.language {
        root.push_attribute(("language", language.as_str()));
    }
    if let Some(source_language) = &catalog.source_language {
        root.push_attribute(("sourcelanguage", source_language.as_str()));
    }
    writer
        .write_event(Event::Start(root))
        .map_err(write_error)?;

    for context in catalog.contexts() {
        writer
            .write_event(Event::Start(BytesStart::new("context")))
            .map_err(write_error)?;
        writer
            .create_element("name")
            .write_text_content(BytesText::new(&context.name))
            .map_err(write_error)?;

        for entry in &context.entries {
            write_entry(&mut writer, entry)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("context")))
            .map_err(write_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("TS")))
        .map_err(write_error)?;

    let mut document = String::from_utf8(writer.into_inner()).map_err(write_error)?;
    document.push('\n');
    Ok(document)
}

fn write_entry(writer: &mut Writer<Vec<u8>>, entry: &CatalogEntry) -> Result<(), CatalogError> {
    writer
        .write_event(Event::Start(BytesStart::new("message")))
        .map_err(write_error)?;

    let key = entry.key.to_string();
    let reference_line = entry.reference_line.to_string();
    writer
        .create_element("location")
        .with_attribute(("filename", key.as_str()))
        .with_attribute(("line", reference_line.as_str()))
        .write_empty()
        .map_err(write_error)?;

    writer
        .create_element("source")
        .write_text_content(BytesText::new(&entry.source_text))
        .map_err(write_error)?;

    let comments = [
        ("comment", &entry.comment),
        ("extracomment", &entry.extra_comment),
        ("translatorcomment", &entry.translator_comment),
    ];
    for (element, text) in comments {
        if let Some(text) = text {
            writer
                .create_element(element)
                .write_text_content(BytesText::new(text))
                .map_err(write_error)?;
        }
    }

    let mut translation = writer.create_element("translation");
    if let Some(status) = entry.status.type_attribute() {
        translation = translation.with_attribute(("type", status));
    }
    translation
        .write_text_content(BytesText::new(&entry.translated_text))
        .map_err(write_error)?;

    writer
        .write_event(Event::End(BytesEnd::new("message")))
        .map_err(write_error)?;
    Ok(())
}
