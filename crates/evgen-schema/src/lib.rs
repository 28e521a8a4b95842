//! # evgen schema
//!
//! Output model of the event extractor. These values are handed to the
//! native code generators, so the serialized field names and type tags
//! below are a wire contract and must not change.

use serde::Serialize;
use std::fmt;

/// Event delivery policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BubblingType {
    /// Propagates up the view hierarchy
    Bubble,
    /// Delivered to the target listener only
    Direct,
}

/// A named, possibly optional, typed entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedShape<T> {
    pub name: String,
    pub optional: bool,
    pub type_annotation: T,
}

/// Type of a single event payload property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum EventTypeAnnotation {
    #[serde(rename = "BooleanTypeAnnotation")]
    Boolean,
    #[serde(rename = "StringTypeAnnotation")]
    String,
    #[serde(rename = "Int32TypeAnnotation")]
    Int32,
    #[serde(rename = "DoubleTypeAnnotation")]
    Double,
    #[serde(rename = "FloatTypeAnnotation")]
    Float,
    #[serde(rename = "StringEnumTypeAnnotation")]
    StringEnum { options: Vec<String> },
    #[serde(rename = "ObjectTypeAnnotation")]
    Object {
        properties: Vec<NamedShape<EventTypeAnnotation>>,
    },
}

/// Payload object of an event
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "ObjectTypeAnnotation")]
pub struct ObjectTypeAnnotation {
    pub properties: Vec<NamedShape<EventTypeAnnotation>>,
}

/// Type annotation of the handler itself
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "EventTypeAnnotation")]
pub struct EventHandlerAnnotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<ObjectTypeAnnotation>,
}

/// Fully resolved event of a component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeShape {
    pub name: String,
    pub optional: bool,
    pub bubbling_type: BubblingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_top_level_name_deprecated: Option<String>,
    pub type_annotation: EventHandlerAnnotation,
}

impl EventTypeShape {
    /// Payload properties, empty when the event carries no payload
    pub fn argument_properties(&self) -> &[NamedShape<EventTypeAnnotation>] {
        self.type_annotation
            .argument
            .as_ref()
            .map(|argument| argument.properties.as_slice())
            .unwrap_or(&[])
    }
}

impl ObjectTypeAnnotation {
    pub fn new(properties: Vec<NamedShape<EventTypeAnnotation>>) -> Self {
        Self { properties }
    }
}

impl fmt::Display for BubblingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BubblingType::Bubble => write!(f, "bubble"),
            BubblingType::Direct => write!(f, "direct"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prop(name: &str, optional: bool, ty: EventTypeAnnotation) -> NamedShape<EventTypeAnnotation> {
        NamedShape {
            name: name.to_string(),
            optional,
            type_annotation: ty,
        }
    }

    #[test]
    fn test_event_shape_wire_format() {
        let shape = EventTypeShape {
            name: "onChange".to_string(),
            optional: true,
            bubbling_type: BubblingType::Bubble,
            paper_top_level_name_deprecated: Some("topChange".to_string()),
            type_annotation: EventHandlerAnnotation {
                argument: Some(ObjectTypeAnnotation::new(vec![
                    prop("value", false, EventTypeAnnotation::Double),
                    prop(
                        "mode",
                        true,
                        EventTypeAnnotation::StringEnum {
                            options: vec!["on".to_string(), "off".to_string()],
                        },
                    ),
                ])),
            },
        };

        let value = serde_json::to_value(&shape).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "onChange",
                "optional": true,
                "bubblingType": "bubble",
                "paperTopLevelNameDeprecated": "topChange",
                "typeAnnotation": {
                    "type": "EventTypeAnnotation",
                    "argument": {
                        "type": "ObjectTypeAnnotation",
                        "properties": [
                            {
                                "name": "value",
                                "optional": false,
                                "typeAnnotation": {"type": "DoubleTypeAnnotation"}
                            },
                            {
                                "name": "mode",
                                "optional": true,
                                "typeAnnotation": {
                                    "type": "StringEnumTypeAnnotation",
                                    "options": ["on", "off"]
                                }
                            }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn test_legacy_name_omitted_when_absent() {
        let shape = EventTypeShape {
            name: "onLoad".to_string(),
            optional: false,
            bubbling_type: BubblingType::Direct,
            paper_top_level_name_deprecated: None,
            type_annotation: EventHandlerAnnotation {
                argument: Some(ObjectTypeAnnotation::default()),
            },
        };

        let value = serde_json::to_value(&shape).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("paperTopLevelNameDeprecated"));
        assert_eq!(object["bubblingType"], "direct");
        assert_eq!(
            object["typeAnnotation"]["argument"],
            json!({"type": "ObjectTypeAnnotation", "properties": []})
        );
        assert!(shape.argument_properties().is_empty());
    }

    #[test]
    fn test_nested_object_tag() {
        let nested = EventTypeAnnotation::Object {
            properties: vec![prop("x", false, EventTypeAnnotation::Int32)],
        };
        assert_eq!(
            serde_json::to_value(&nested).unwrap(),
            json!({
                "type": "ObjectTypeAnnotation",
                "properties": [
                    {"name": "x", "optional": false, "typeAnnotation": {"type": "Int32TypeAnnotation"}}
                ]
            })
        );
    }

    #[test]
    fn test_bubbling_type_display() {
        assert_eq!(BubblingType::Bubble.to_string(), "bubble");
        assert_eq!(BubblingType::Direct.to_string(), "direct");
    }
}
