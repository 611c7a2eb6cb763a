/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Pull parser behind the mock `XMLParser`.
//!
//! Reads one node per [`XmlReader::read`] call. Whitespace-only text between tags is skipped, entities in text and
//! attribute values are decoded. Malformed markup yields an `UNKNOWN` node instead of an error.

const OK: i64 = 0;
const ERR_FILE_EOF: i64 = 18;

/// Ordinals of `XMLParser.NodeType`.
mod node_type {
    pub const NONE: i64 = 0;
    pub const ELEMENT: i64 = 1;
    pub const ELEMENT_END: i64 = 2;
    pub const TEXT: i64 = 3;
    pub const COMMENT: i64 = 4;
    pub const CDATA: i64 = 5;
    pub const UNKNOWN: i64 = 6;
}

#[derive(Default)]
struct XmlNode {
    node_type: i64,
    name: String,
    data: String,
    attributes: Vec<(String, String)>,
    empty: bool,
    offset: usize,
    line: i64,
}

#[derive(Default)]
pub(crate) struct XmlReader {
    text: String,
    pos: usize,
    node: XmlNode,
}

impl XmlReader {
    /// Replaces the document; the next `read` returns its first node.
    pub fn open(&mut self, bytes: Vec<u8>) {
        self.text = String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned());
        self.pos = 0;
        self.node = XmlNode::default();
    }

    /// Advances to the next node. Returns `ERR_FILE_EOF` once the document is exhausted, or if none is open.
    pub fn read(&mut self) -> i64 {
        loop {
            if self.pos >= self.text.len() {
                self.node = XmlNode::default();
                return ERR_FILE_EOF;
            }

            let start = self.pos;
            let node = if self.rest().starts_with('<') {
                self.parse_markup()
            } else {
                match self.parse_text() {
                    Some(node) => node,
                    None => continue,
                }
            };

            self.node = XmlNode {
                offset: start,
                line: self.text[..start].matches('\n').count() as i64,
                ..node
            };
            return OK;
        }
    }

    pub fn node_type(&self) -> i64 {
        self.node.node_type
    }

    /// Name of an element or element end; empty otherwise.
    pub fn node_name(&self) -> &str {
        &self.node.name
    }

    /// Contents of a text, comment or CDATA node; empty otherwise.
    pub fn node_data(&self) -> &str {
        &self.node.data
    }

    /// Byte offset of the current node in the document.
    pub fn node_offset(&self) -> i64 {
        self.node.offset as i64
    }

    /// Zero-based line of the current node.
    pub fn current_line(&self) -> i64 {
        self.node.line
    }

    pub fn is_empty(&self) -> bool {
        self.node.empty
    }

    pub fn attribute_count(&self) -> usize {
        self.node.attributes.len()
    }

    pub fn attribute_name(&self, index: usize) -> Option<&str> {
        self.node.attributes.get(index).map(|(name, _)| name.as_str())
    }

    pub fn attribute_value(&self, index: usize) -> Option<&str> {
        self.node.attributes.get(index).map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.named_attribute_value(name).is_some()
    }

    pub fn named_attribute_value(&self, name: &str) -> Option<&str> {
        self.node
            .attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Skips the children of the current element, up to and including its end.
    pub fn skip_section(&mut self) {
        if self.node.node_type != node_type::ELEMENT || self.node.empty {
            return;
        }

        let mut depth = 1;
        while depth > 0 && self.read() == OK {
            match self.node.node_type {
                node_type::ELEMENT if !self.node.empty => depth += 1,
                node_type::ELEMENT_END => depth -= 1,
                _ => {}
            }
        }
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------

    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    /// Moves past `terminator`, returning the text before it. Without terminator, consumes everything.
    fn take_until(&mut self, terminator: &str) -> Option<String> {
        match self.rest().find(terminator) {
            Some(len) => {
                let taken = self.rest()[..len].to_string();
                self.pos += len + terminator.len();
                Some(taken)
            }
            None => {
                self.pos = self.text.len();
                None
            }
        }
    }

    fn parse_text(&mut self) -> Option<XmlNode> {
        let len = self.rest().find('<').unwrap_or(self.rest().len());
        let raw = &self.rest()[..len];
        let node = (!raw.trim().is_empty()).then(|| XmlNode {
            node_type: node_type::TEXT,
            data: decode_entities(raw),
            ..XmlNode::default()
        });

        self.pos += len;
        node
    }

    fn parse_markup(&mut self) -> XmlNode {
        let unknown = || XmlNode {
            node_type: node_type::UNKNOWN,
            ..XmlNode::default()
        };

        if self.rest().starts_with("<!--") {
            self.pos += "<!--".len();
            return match self.take_until("-->") {
                Some(comment) => XmlNode {
                    node_type: node_type::COMMENT,
                    data: comment,
                    ..XmlNode::default()
                },
                None => unknown(),
            };
        }

        if self.rest().starts_with("<![CDATA[") {
            self.pos += "<![CDATA[".len();
            return match self.take_until("]]>") {
                Some(data) => XmlNode {
                    node_type: node_type::CDATA,
                    data,
                    ..XmlNode::default()
                },
                None => unknown(),
            };
        }

        if self.rest().starts_with("<?") {
            self.take_until("?>");
            return unknown();
        }

        if self.rest().starts_with("<!") {
            self.take_until(">");
            return unknown();
        }

        if self.rest().starts_with("</") {
            self.pos += "</".len();
            return match self.take_until(">") {
                Some(name) => XmlNode {
                    node_type: node_type::ELEMENT_END,
                    name: name.trim().to_string(),
                    ..XmlNode::default()
                },
                None => unknown(),
            };
        }

        self.pos += "<".len();
        match self.take_until(">") {
            Some(tag) => parse_element(&tag).unwrap_or_else(unknown),
            None => unknown(),
        }
    }
}

/// Parses the inside of `<...>`: name, attributes and an optional trailing `/`.
fn parse_element(tag: &str) -> Option<XmlNode> {
    let (tag, empty) = match tag.trim_end().strip_suffix('/') {
        Some(inner) => (inner, true),
        None => (tag, false),
    };

    let name_len = tag.find(char::is_whitespace).unwrap_or(tag.len());
    let name = &tag[..name_len];
    if name.is_empty() {
        return None;
    }

    let mut attributes = Vec::new();
    let mut rest = tag[name_len..].trim_start();
    while !rest.is_empty() {
        let (attr, after_eq) = rest.split_once('=')?;
        let after_eq = after_eq.trim_start();

        let quote = after_eq.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let value_and_rest = &after_eq[1..];
        let end = value_and_rest.find(quote)?;

        attributes.push((attr.trim().to_string(), decode_entities(&value_and_rest[..end])));
        rest = value_and_rest[end + 1..].trim_start();
    }

    Some(XmlNode {
        node_type: node_type::ELEMENT,
        name: name.to_string(),
        attributes,
        empty,
        ..XmlNode::default()
    })
}

/// Replaces the predefined entities and numeric character references. Unknown entities are kept as-is.
fn decode_entities(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let replacement = rest.find(';').and_then(|semi| {
            let entity = &rest[1..semi];
            let c = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => {
                    let code = match entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => entity.strip_prefix('#').and_then(|dec| dec.parse().ok()),
                    };
                    code.and_then(char::from_u32)
                }
            };
            c.map(|c| (c, semi + 1))
        });

        match replacement {
            Some((c, consumed)) => {
                decoded.push(c);
                rest = &rest[consumed..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
