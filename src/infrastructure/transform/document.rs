//! XML document parsing into the JSON tree exposed to stylesheets.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::{Map, Value, json};

/// Parse an XML document into the shape stylesheets consume.
///
/// Every element becomes an object with four keys: `name` (qualified tag
/// name), `attributes` (string map), `text` (trimmed character data of the
/// element itself), and `children` (element objects in document order).
pub fn parse_document(source: &str) -> Result<Value, String> {
    let mut reader = Reader::from_str(source);
    let config = reader.config_mut();
    config.trim_text_start = true;
    config.trim_text_end = true;

    let mut stack: Vec<ElementNode> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(start) => {
                stack.push(ElementNode::from_start(&start)?);
            }
            Event::Empty(start) => {
                let node = ElementNode::from_start(&start)?;
                attach(node.into_value(), &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| "unbalanced closing tag".to_string())?;
                attach(node.into_value(), &mut stack, &mut root)?;
            }
            Event::Text(text) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&text.unescape().map_err(|e| e.to_string())?);
                }
            }
            Event::CData(cdata) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&String::from_utf8_lossy(&cdata));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            // carry nothing the stylesheets consume.
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err("document ended with unclosed elements".to_string());
    }
    root.ok_or_else(|| "document has no root element".to_string())
}

struct ElementNode {
    name: String,
    attributes: Map<String, Value>,
    text: String,
    children: Vec<Value>,
}

impl ElementNode {
    fn from_start(start: &quick_xml::events::BytesStart<'_>) -> Result<Self, String> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Map::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| e.to_string())?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value().map_err(|e| e.to_string())?;
            attributes.insert(key, Value::String(value.into_owned()));
        }

        Ok(Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn into_value(self) -> Value {
        json!({
            "name": self.name,
            "attributes": Value::Object(self.attributes),
            "text": self.text.trim(),
            "children": self.children,
        })
    }
}

fn attach(
    value: Value,
    stack: &mut [ElementNode],
    root: &mut Option<Value>,
) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(value);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(value);
            Ok(())
        }
        None => Err("document has more than one root element".to_string()),
    }
}
