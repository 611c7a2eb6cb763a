/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::{GString, PackedByteArray};
use crate::global::Error;
use crate::obj::EngineEnum;
use crate::sys::{self, interface_fn};

crate::engine_class! {
    /// Low-level pull parser for XML files, e.g. for custom file formats.
    pub struct XMLParser: RefCounted: Object {
        level: Core,
        memory: MemRefCounted,
        construct: gd,
    }
}

crate::engine_methods! {
    impl XMLParser {
        /// Parses the next node. Returns `ERR_FILE_EOF` after the last node.
        fn read(&mut self) -> Error = 166280745;
        fn get_node_type(&self) -> NodeType = 2984359541;

        /// Name of the current element node; empty for text nodes.
        fn get_node_name(&self) -> GString = 201670096;

        /// Contents of the current text, comment or CDATA node.
        fn get_node_data(&self) -> GString = 201670096;
        fn get_node_offset(&self) -> i64 = 3905245786;
        fn get_attribute_count(&self) -> i32 = 3905245786;
        fn get_attribute_name(&self, idx: i32) -> GString = 844755477;
        fn get_attribute_value(&self, idx: i32) -> GString = 844755477;
        fn has_attribute(&self, name: GString) -> bool = 3927539163;

        /// Value of the attribute `name`, or an empty string if the current element has no such attribute.
        fn get_named_attribute_value_safe(&self, name: GString) -> GString = 3135753539;
        fn is_empty(&self) -> bool = 36873697;
        fn get_current_line(&self) -> i32 = 3905245786;
        fn skip_section(&mut self) = 3218959716;
        fn open(&mut self, file: GString) -> Error = 166001499;
        fn open_buffer(&mut self, buffer: PackedByteArray) -> Error = 680677267;
    }
}

impl XMLParser {
    /// Opens an XML document held in memory, without copying it into a `PackedByteArray` first.
    pub fn open_buffer_slice(&mut self, buffer: &[u8]) -> Error {
        // SAFETY: the parser copies the buffer before returning.
        let code = unsafe { interface_fn!(xml_parser_open_buffer)(self.object_ptr, buffer.as_ptr(), buffer.len()) };

        i32::try_from(code)
            .ok()
            .and_then(Error::try_from_ord)
            .unwrap_or_else(|| {
                sys::out!("XMLParser::open_buffer_slice: unknown error code {code}");
                Error::FAILED
            })
    }
}

crate::engine_enum! {
    /// Type of the node the parser is currently on.
    pub enum NodeType {
        /// There's no node (no file or buffer opened).
        NONE = 0,
        /// An element node type, also known as a tag, e.g. `<title>`.
        ELEMENT = 1,
        /// An end of element node type, e.g. `</title>`.
        ELEMENT_END = 2,
        /// A text node type, i.e. text that is not inside an element.
        TEXT = 3,
        /// A comment node type, e.g. `<!--A comment-->`.
        COMMENT = 4,
        /// A node type for CDATA sections, e.g. `<![CDATA[content]]>`.
        CDATA = 5,
        /// An unknown node type.
        UNKNOWN = 6,
    }
}
