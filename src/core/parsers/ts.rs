//! Loader for Qt Linguist TS catalogs.
//!
//! Expected shape:
//!
//! ```text
//! <TS language="ja" version="2.1">
//!   <context>
//!     <name>policy</name>
//!     <message>
//!       <location filename="com.example.action!message" line="0"/>
//!       <source>Authentication is required to ...</source>
//!       <translation>...</translation>
//!     </message>
//!   </context>
//! </TS>
//! ```
//!
//! Unknown elements are skipped together with their children. Anything that
//! breaks the shape above fails the whole document with
//! [`CatalogError::MalformedDocument`].

use std::{collections::HashMap, fs, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, BytesText, Event},
};

use crate::core::{
    data::{Catalog, CatalogContext, CatalogEntry, MessageKey, TranslationStatus},
    error::{CatalogError, MalformedReason},
};

const ROOT: &str = "TS";

pub fn parse_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&content, &path.to_string_lossy())
}

pub fn parse_catalog(content: &str, file_path: &str) -> Result<Catalog, CatalogError> {
    TsParser::new(content).parse(file_path)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

fn is_blank(text: &BytesText<'_>) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

/// Fields collected from the children of one `<message>`.
#[derive(Default)]
struct MessageParts {
    location: Option<(String, u32)>,
    source: Option<String>,
    translation: Option<(String, TranslationStatus)>,
    comment: Option<String>,
    extra_comment: Option<String>,
    translator_comment: Option<String>,
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    line_index: Vec<usize>,
    /// Line of the `<message>` that first defined each key.
    seen_keys: HashMap<MessageKey, usize>,
}

impl<'a> TsParser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            line_index: build_line_index(content),
            seen_keys: HashMap::new(),
        }
    }

    fn parse(mut self, file_path: &str) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new(file_path);

        // Prolog: declaration, doctype and comments before the root.
        loop {
            match self.next_event()? {
                Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
                Event::Text(text) if is_blank(&text) => {}
                Event::Start(element) => {
                    self.read_root(&element, &mut catalog)?;
                    self.parse_root(&mut catalog)?;
                    break;
                }
                Event::Empty(element) => {
                    self.read_root(&element, &mut catalog)?;
                    break;
                }
                Event::Eof => return Err(self.malformed(MalformedReason::MissingRoot)),
                _ => return Err(self.malformed(MalformedReason::UnexpectedText("document".into()))),
            }
        }

        // Epilog: only comments and whitespace may follow the root.
        loop {
            match self.next_event()? {
                Event::Eof => break,
                Event::Comment(_) | Event::PI(_) => {}
                Event::Text(text) if is_blank(&text) => {}
                _ => return Err(self.malformed(MalformedReason::ContentAfterRoot)),
            }
        }

        Ok(catalog)
    }

    fn read_root(
        &self,
        element: &BytesStart<'_>,
        catalog: &mut Catalog,
    ) -> Result<(), CatalogError> {
        let name = element_name(element);
        if name != ROOT {
            return Err(self.malformed(MalformedReason::UnexpectedRoot(name)));
        }

        let mut attributes = self.attributes(element)?;
        catalog.language = attributes.remove("language");
        catalog.source_language = attributes.remove("sourcelanguage");
        catalog.version = attributes.remove("version");
        Ok(())
    }

    fn parse_root(&mut self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        loop {
            match self.next_event()? {
                Event::Start(element) => {
                    let name = element_name(&element);
                    if name == "context" {
                        let context = self.parse_context()?;
                        catalog.push_context(context).map_err(|key| {
                            let first_line = self.seen_keys.get(&key).copied().unwrap_or_default();
                            self.malformed(MalformedReason::DuplicateKey {
                                key: key.to_string(),
                                first_line,
                            })
                        })?;
                    } else {
                        self.skip_element(&name)?;
                    }
                }
                Event::Empty(element) => {
                    if element.name().as_ref() == b"context" {
                        return Err(self.malformed(MalformedReason::MissingElement {
                            element: "context",
                            child: "name",
                        }));
                    }
                }
                Event::End(_) => return Ok(()),
                Event::Text(text) if is_blank(&text) => {}
                Event::Text(_) | Event::CData(_) => {
                    return Err(self.malformed(MalformedReason::UnexpectedText(ROOT.into())));
                }
                Event::Eof => {
                    return Err(self.malformed(MalformedReason::UnclosedElement(ROOT.into())));
                }
                _ => {}
            }
        }
    }

    fn parse_context(&mut self) -> Result<CatalogContext, CatalogError> {
        let mut name: Option<String> = None;
        let mut entries = Vec::new();

        loop {
            match self.next_event()? {
                Event::Start(element) => match element.name().as_ref() {
                    b"name" => {
                        let text = self.read_text("name")?;
                        self.set_once(&mut name, text, "context", "name")?;
                    }
                    b"message" => {
                        let line = self.current_line();
                        entries.push(self.parse_message(line)?);
                    }
                    _ => self.skip_element(&element_name(&element))?,
                },
                Event::Empty(element) => match element.name().as_ref() {
                    b"name" => self.set_once(&mut name, String::new(), "context", "name")?,
                    b"message" => {
                        return Err(self.malformed(MalformedReason::MissingElement {
                            element: "message",
                            child: "location",
                        }));
                    }
                    _ => {}
                },
                Event::End(_) => break,
                Event::Text(text) if is_blank(&text) => {}
                Event::Text(_) | Event::CData(_) => {
                    return Err(self.malformed(MalformedReason::UnexpectedText("context".into())));
                }
                Event::Eof => {
                    return Err(self.malformed(MalformedReason::UnclosedElement("context".into())));
                }
                _ => {}
            }
        }

        let name = name.ok_or_else(|| {
            self.malformed(MalformedReason::MissingElement {
                element: "context",
                child: "name",
            })
        })?;

        Ok(CatalogContext { name, entries })
    }

    fn parse_message(&mut self, line: usize) -> Result<CatalogEntry, CatalogError> {
        let mut parts = MessageParts::default();

        loop {
            match self.next_event()? {
                Event::Start(element) => {
                    let name = element_name(&element);
                    self.parse_message_child(&element, &name, false, &mut parts)?;
                }
                Event::Empty(element) => {
                    let name = element_name(&element);
                    self.parse_message_child(&element, &name, true, &mut parts)?;
                }
                Event::End(_) => break,
                Event::Text(text) if is_blank(&text) => {}
                Event::Text(_) | Event::CData(_) => {
                    return Err(self.malformed(MalformedReason::UnexpectedText("message".into())));
                }
                Event::Eof => {
                    return Err(self.malformed(MalformedReason::UnclosedElement("message".into())));
                }
                _ => {}
            }
        }

        let missing = |child| {
            self.malformed_at(
                line,
                MalformedReason::MissingElement {
                    element: "message",
                    child,
                },
            )
        };
        let (filename, reference_line) = parts.location.ok_or_else(|| missing("location"))?;
        let source_text = parts.source.ok_or_else(|| missing("source"))?;
        let (translated_text, status) = parts.translation.ok_or_else(|| missing("translation"))?;

        let key: MessageKey = filename.parse().map_err(|reason| {
            self.malformed_at(
                line,
                MalformedReason::InvalidKey {
                    key: filename.clone(),
                    reason,
                },
            )
        })?;

        if let Some(&first_line) = self.seen_keys.get(&key) {
            return Err(self.malformed_at(
                line,
                MalformedReason::DuplicateKey {
                    key: key.to_string(),
                    first_line,
                },
            ));
        }
        self.seen_keys.insert(key.clone(), line);

        Ok(CatalogEntry {
            key,
            source_text,
            translated_text,
            status,
            comment: parts.comment,
            extra_comment: parts.extra_comment,
            translator_comment: parts.translator_comment,
            reference_line,
            line,
        })
    }

    fn parse_message_child(
        &mut self,
        element: &BytesStart<'_>,
        name: &str,
        is_empty: bool,
        parts: &mut MessageParts,
    ) -> Result<(), CatalogError> {
        match name {
            "location" => {
                let mut attributes = self.attributes(element)?;
                let filename = attributes.remove("filename").ok_or_else(|| {
                    self.malformed(MalformedReason::MissingAttribute {
                        element: "location",
                        attribute: "filename",
                    })
                })?;
                let reference_line = match attributes.remove("line") {
                    Some(value) => match value.trim().parse::<u32>() {
                        Ok(line) => line,
                        Err(_) => {
                            return Err(self.malformed(MalformedReason::InvalidAttribute {
                                element: "location",
                                attribute: "line",
                                value,
                            }));
                        }
                    },
                    None => 0,
                };
                if !is_empty {
                    self.skip_element(name)?;
                }
                self.set_once(&mut parts.location, (filename, reference_line), "message", "location")
            }
            "translation" => {
                let status = match self.attributes(element)?.remove("type") {
                    Some(value) => match TranslationStatus::from_type_attribute(&value) {
                        Some(status) => status,
                        None => {
                            return Err(self.malformed(MalformedReason::InvalidAttribute {
                                element: "translation",
                                attribute: "type",
                                value,
                            }));
                        }
                    },
                    None => TranslationStatus::Finished,
                };
                let text = self.element_text(name, is_empty)?;
                self.set_once(&mut parts.translation, (text, status), "message", "translation")
            }
            "source" => {
                let text = self.element_text(name, is_empty)?;
                self.set_once(&mut parts.source, text, "message", "source")
            }
            "comment" => {
                let text = self.element_text(name, is_empty)?;
                self.set_once(&mut parts.comment, text, "message", "comment")
            }
            "extracomment" => {
                let text = self.element_text(name, is_empty)?;
                self.set_once(&mut parts.extra_comment, text, "message", "extracomment")
            }
            "translatorcomment" => {
                let text = self.element_text(name, is_empty)?;
                self.set_once(&mut parts.translator_comment, text, "message", "translatorcomment")
            }
            _ if is_empty => Ok(()),
            _ => self.skip_element(name),
        }
    }

    fn element_text(&mut self, name: &str, is_empty: bool) -> Result<String, CatalogError> {
        if is_empty {
            Ok(String::new())
        } else {
            self.read_text(name)
        }
    }

    /// Read the character data of the current element up to its end tag.
    ///
    /// Nested elements (e.g. `<numerusform>`) are skipped.
    fn read_text(&mut self, name: &str) -> Result<String, CatalogError> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                Event::Text(chunk) => {
                    let unescaped = chunk
                        .unescape()
                        .map_err(|e| self.malformed(MalformedReason::Syntax(e.to_string())))?;
                    text.push_str(&unescaped);
                }
                Event::CData(chunk) => text.push_str(&String::from_utf8_lossy(&chunk)),
                Event::Start(element) => self.skip_element(&element_name(&element))?,
                Event::End(_) => return Ok(text),
                Event::Eof => {
                    return Err(self.malformed(MalformedReason::UnclosedElement(name.to_string())));
                }
                _ => {}
            }
        }
    }

    /// Consume events up to and including the end tag of the current element.
    fn skip_element(&mut self, name: &str) -> Result<(), CatalogError> {
        let mut depth = 0usize;
        loop {
            match self.next_event()? {
                Event::Start(_) => depth += 1,
                Event::End(_) if depth == 0 => return Ok(()),
                Event::End(_) => depth -= 1,
                Event::Eof => {
                    return Err(self.malformed(MalformedReason::UnclosedElement(name.to_string())));
                }
                _ => {}
            }
        }
    }

    fn set_once<T>(
        &self,
        slot: &mut Option<T>,
        value: T,
        element: &'static str,
        child: &'static str,
    ) -> Result<(), CatalogError> {
        if slot.is_some() {
            return Err(self.malformed(MalformedReason::RepeatedElement { element, child }));
        }
        *slot = Some(value);
        Ok(())
    }

    fn attributes(&self, element: &BytesStart<'_>) -> Result<HashMap<String, String>, CatalogError> {
        let mut attributes = HashMap::new();
        for attribute in element.attributes() {
            let attribute =
                attribute.map_err(|e| self.malformed(MalformedReason::Syntax(e.to_string())))?;
            let value = attribute
                .unescape_value()
                .map_err(|e| self.malformed(MalformedReason::Syntax(e.to_string())))?;
            attributes.insert(
                String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
                value.into_owned(),
            );
        }
        Ok(attributes)
    }

    fn next_event(&mut self) -> Result<Event<'a>, CatalogError> {
        self.reader
            .read_event()
            .map_err(|e| self.malformed(MalformedReason::Syntax(e.to_string())))
    }

    fn current_line(&self) -> usize {
        offset_to_line(&self.line_index, self.reader.buffer_position() as usize)
    }

    fn malformed(&self, reason: MalformedReason) -> CatalogError {
        self.malformed_at(self.current_line(), reason)
    }

    fn malformed_at(&self, line: usize, reason: MalformedReason) -> CatalogError {
        CatalogError::MalformedDocument { line, reason }
    }
}
