use anyhow::Result;
use regex::Regex;

use super::common::{single_line_doc, strip_comment_prefix, trim_line};
use super::{DeclarationParser, InterfaceRecord, PropertyRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    InDocComment,
}

/// Line-oriented extractor for exported interfaces in `.d.ts` declarations.
///
/// Only property lines following the `<type> | undefined;` convention are
/// recognized. Everything else is skipped without diagnostics.
pub struct TypeScriptDeclarationParser {
    interface_decl: Regex,
    property_head: Regex,
    property_decl: Regex,
}

impl TypeScriptDeclarationParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            interface_decl: Regex::new(r"export interface (?-u:(\w+)(?: extends (\w+))?) \{")?,
            property_head: Regex::new(r"^(?-u:\w)+\??:")?,
            property_decl: Regex::new(r"((?-u:\w)+)(\??): (.+) \| undefined;")?,
        })
    }

    fn parse_interface(&self, line: &str, description: &str) -> Option<InterfaceRecord> {
        let caps = self.interface_decl.captures(line)?;
        Some(InterfaceRecord {
            name: caps[1].to_string(),
            description: description.trim().to_string(),
            parent: caps.get(2).map(|m| m.as_str().to_string()),
            properties: Vec::new(),
        })
    }

    fn parse_property(&self, line: &str, description: &str) -> Option<PropertyRecord> {
        let caps = self.property_decl.captures(line)?;
        Some(PropertyRecord {
            name: caps[1].to_string(),
            optional: &caps[2] == "?",
            type_text: caps[3].to_string(),
            description: description.trim().to_string(),
        })
    }
}

impl DeclarationParser for TypeScriptDeclarationParser {
    fn parse_source(&self, source: &str) -> Vec<InterfaceRecord> {
        let mut interfaces: Vec<InterfaceRecord> = Vec::new();
        let mut comment = String::new();
        let mut state = ScanState::Scanning;
        // Index into `interfaces` of the body being read
        let mut current: Option<usize> = None;

        for raw in source.lines() {
            let line = trim_line(raw);

            if line.starts_with("/**") {
                comment.clear();
                match single_line_doc(line) {
                    Some(body) => comment.push_str(body),
                    None => state = ScanState::InDocComment,
                }
            } else if state == ScanState::InDocComment {
                if line.starts_with("*/") {
                    state = ScanState::Scanning;
                } else {
                    comment.push_str(strip_comment_prefix(line));
                    comment.push('\n');
                }
            } else if line.starts_with("export interface") {
                if let Some(record) = self.parse_interface(line, &comment) {
                    interfaces.push(record);
                    current = Some(interfaces.len() - 1);
                    comment.clear();
                }
            } else if let Some(index) = current.filter(|_| self.property_head.is_match(line)) {
                if let Some(property) = self.parse_property(line, &comment) {
                    interfaces[index].properties.push(property);
                    comment.clear();
                }
            } else if line == "}" {
                current = None;
            }
        }

        interfaces
    }

    fn dialect_name(&self) -> &str {
        "typescript"
    }
}
