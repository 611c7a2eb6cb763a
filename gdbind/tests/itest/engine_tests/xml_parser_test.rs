/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{GString, PackedByteArray};
use gdbind::classes::xml_parser::NodeType;
use gdbind::classes::XMLParser;
use gdbind::global::Error;
use gdbind::obj::{Gd, NewGd};

use crate::framework::expect_engine_error;

const SCENE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<scene name="Main" format='3'>
  <node type="Node2D">Hello &amp; welcome</node>
  <marker/>
  <!-- trailing -->
</scene>"#;

fn parser_for(doc: &str) -> Gd<XMLParser> {
    let mut parser = XMLParser::new_gd();
    assert_eq!(parser.open_buffer_slice(doc.as_bytes()), Error::OK);
    parser
}

/// Reads to the end, collecting type, name and data of each node.
fn read_all(parser: &mut Gd<XMLParser>) -> Vec<(NodeType, String, String)> {
    let mut nodes = Vec::new();
    while parser.read() == Error::OK {
        nodes.push((
            parser.get_node_type(),
            parser.get_node_name().to_string(),
            parser.get_node_data().to_string(),
        ));
    }
    nodes
}

fn node(node_type: NodeType, name: &str, data: &str) -> (NodeType, String, String) {
    (node_type, name.to_string(), data.to_string())
}

fn xml_parser_node_sequence() {
    let mut parser = parser_for(SCENE);

    assert_eq!(read_all(&mut parser), [
        node(NodeType::UNKNOWN, "", ""),
        node(NodeType::ELEMENT, "scene", ""),
        node(NodeType::ELEMENT, "node", ""),
        node(NodeType::TEXT, "", "Hello & welcome"),
        node(NodeType::ELEMENT_END, "node", ""),
        node(NodeType::ELEMENT, "marker", ""),
        node(NodeType::COMMENT, "", " trailing "),
        node(NodeType::ELEMENT_END, "scene", ""),
    ]);

    assert_eq!(parser.get_node_type(), NodeType::NONE);
    assert_eq!(parser.read(), Error::ERR_FILE_EOF);
}

fn xml_parser_attributes() {
    let mut parser = parser_for(SCENE);
    parser.read();
    parser.read();

    assert_eq!(parser.get_node_name(), GString::from("scene"));
    assert_eq!(parser.get_attribute_count(), 2);
    assert_eq!(parser.get_attribute_name(0), GString::from("name"));
    assert_eq!(parser.get_attribute_value(0), GString::from("Main"));
    assert_eq!(parser.get_attribute_name(1), GString::from("format"));
    assert_eq!(parser.get_attribute_value(1), GString::from("3"));

    assert!(parser.has_attribute("format".into()));
    assert!(!parser.has_attribute("version".into()));
    assert_eq!(parser.get_named_attribute_value_safe("name".into()), GString::from("Main"));
    assert_eq!(parser.get_named_attribute_value_safe("missing".into()), GString::new());
    assert!(!parser.is_empty());
}

fn xml_parser_attribute_out_of_range() {
    let mut parser = parser_for("<item id=\"7\"/>");
    parser.read();

    let (name, errors) = expect_engine_error("attribute index", || parser.get_attribute_name(3));
    assert_eq!(name, GString::new());
    assert_eq!(errors, ["Index p_idx = 3 is out of bounds (attributes.size() = 1)."]);

    expect_engine_error("negative index", || parser.get_attribute_value(-1));
}

fn xml_parser_position() {
    let mut parser = parser_for("<a/>\n\n<item label=\"&lt;x&gt;\" />");

    parser.read();
    assert!(parser.is_empty());
    assert_eq!(parser.get_current_line(), 0);
    assert_eq!(parser.get_node_offset(), 0);

    parser.read();
    assert!(parser.is_empty());
    assert_eq!(parser.get_node_offset(), 6);
    assert_eq!(parser.get_current_line(), 2);
    assert_eq!(parser.get_attribute_value(0), GString::from("<x>"));
}

fn xml_parser_skip_section() {
    let mut parser = parser_for("<root><skip><a/><b>text</b></skip><keep/></root>");
    parser.read();
    parser.read();
    assert_eq!(parser.get_node_name(), GString::from("skip"));

    parser.skip_section();
    assert_eq!(parser.get_node_type(), NodeType::ELEMENT_END);
    assert_eq!(parser.get_node_name(), GString::from("skip"));

    parser.read();
    assert_eq!(parser.get_node_name(), GString::from("keep"));
}

fn xml_parser_cdata() {
    let mut parser = parser_for("<script><![CDATA[if a < b {}]]></script>");

    let nodes = read_all(&mut parser);
    assert_eq!(nodes[1], node(NodeType::CDATA, "", "if a < b {}"));
}

fn xml_parser_open_buffer() {
    let mut parser = XMLParser::new_gd();
    let bytes = PackedByteArray::from(b"<doc>body</doc>");

    assert_eq!(parser.open_buffer(bytes.clone()), Error::OK);
    assert_eq!(read_all(&mut parser).len(), 3);

    // The buffer was copied; reopening parses from the start.
    assert_eq!(parser.open_buffer(bytes), Error::OK);
    assert_eq!(parser.read(), Error::OK);
    assert_eq!(parser.get_node_name(), GString::from("doc"));
}

fn xml_parser_empty_buffer() {
    let mut parser = XMLParser::new_gd();

    let (code, errors) = expect_engine_error("empty slice", || parser.open_buffer_slice(&[]));
    assert_eq!(code, Error::ERR_INVALID_DATA);
    assert_eq!(errors, ["Condition \"p_buffer.size() == 0\" is true. Returning: ERR_INVALID_DATA"]);

    let (code, _) = expect_engine_error("empty array", || parser.open_buffer(PackedByteArray::new()));
    assert_eq!(code, Error::ERR_INVALID_DATA);
}

fn xml_parser_open_file() {
    let path = std::env::temp_dir().join(format!("gdbind_itest_{}.xml", std::process::id()));
    std::fs::write(&path, "<config debug=\"true\"/>").expect("write temp file");

    let mut parser = XMLParser::new_gd();
    let opened = parser.open(GString::from(&*path.to_string_lossy()));
    std::fs::remove_file(&path).expect("remove temp file");

    assert_eq!(opened, Error::OK);
    assert_eq!(parser.read(), Error::OK);
    assert_eq!(parser.get_named_attribute_value_safe("debug".into()), GString::from("true"));
}

fn xml_parser_open_missing_file() {
    let mut parser = XMLParser::new_gd();
    let missing = std::env::temp_dir().join("gdbind_itest_does_not_exist.xml");

    assert_eq!(parser.open(GString::from(&*missing.to_string_lossy())), Error::ERR_FILE_NOT_FOUND);
    assert_eq!(parser.read(), Error::ERR_FILE_EOF);
}

itests![
    xml_parser_node_sequence,
    xml_parser_attributes,
    xml_parser_attribute_out_of_range,
    xml_parser_position,
    xml_parser_skip_section,
    xml_parser_cdata,
    xml_parser_open_buffer,
    xml_parser_empty_buffer,
    xml_parser_open_file,
    xml_parser_open_missing_file,
];
