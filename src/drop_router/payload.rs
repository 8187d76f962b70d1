use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Error, Result};
use crate::render::{LightType, PrimitiveMesh};

/// Discriminant of a drop payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropObjectType {
    Model,
    BasicShape,
    Light,
}

/// A parsed drop payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPayload {
    /// Model id to look up in the model store / registry.
    Model(String),
    BasicShape(PrimitiveMesh),
    Light(LightType),
}

/// Wire shape: `{ "dropObjectType": "...", "data": ... }`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDropData {
    drop_object_type: String,
    data: Value,
}

impl DropPayload {
    /// Parses the text transfer payload of a drop event.
    ///
    /// Malformed JSON, or a `data` value of the wrong shape, is a
    /// `ParseFailure`. A well-formed payload naming an unknown object type,
    /// primitive or light kind is `UnsupportedPayload`.
    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawDropData = serde_json::from_str(text)?;

        let kind = match raw.drop_object_type.as_str() {
            "Model" => DropObjectType::Model,
            "BasicShape" => DropObjectType::BasicShape,
            "Light" => DropObjectType::Light,
            other => {
                return Err(Error::UnsupportedPayload(format!("unknown drop object type '{other}'")));
            }
        };

        let Value::String(data) = raw.data else {
            return Err(Error::ParseFailure(format!(
                "{kind:?} drop expects a string value, got {}",
                raw.data
            )));
        };

        Ok(match kind {
            DropObjectType::Model => DropPayload::Model(data),
            DropObjectType::BasicShape => DropPayload::BasicShape(
                data.parse()
                    .map_err(|_| Error::UnsupportedPayload(format!("unknown primitive mesh '{data}'")))?,
            ),
            DropObjectType::Light => DropPayload::Light(
                serde_json::from_value(Value::String(data.clone()))
                    .map_err(|_| Error::UnsupportedPayload(format!("unknown light type '{data}'")))?,
            ),
        })
    }

    #[must_use]
    pub fn object_type(&self) -> DropObjectType {
        match self {
            DropPayload::Model(_) => DropObjectType::Model,
            DropPayload::BasicShape(_) => DropObjectType::BasicShape,
            DropPayload::Light(_) => DropObjectType::Light,
        }
    }

    /// Serializes to the wire shape, as a drag source would.
    #[must_use]
    pub fn to_json(&self) -> String {
        let data = match self {
            DropPayload::Model(id) => id.clone(),
            DropPayload::BasicShape(kind) => kind.key().to_string(),
            DropPayload::Light(light) => format!("{light:?}"),
        };
        let raw = RawDropData {
            drop_object_type: format!("{:?}", self.object_type()),
            data: Value::String(data),
        };
        // A struct of two plain fields always serializes.
        serde_json::to_string(&raw).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_kind() {
        assert_eq!(
            DropPayload::parse(r#"{"dropObjectType":"Model","data":"m-42"}"#).unwrap(),
            DropPayload::Model("m-42".into())
        );
        assert_eq!(
            DropPayload::parse(r#"{"dropObjectType":"BasicShape","data":"Sphere"}"#).unwrap(),
            DropPayload::BasicShape(PrimitiveMesh::Sphere)
        );
        assert_eq!(
            DropPayload::parse(r#"{"dropObjectType":"Light","data":"RectArea"}"#).unwrap(),
            DropPayload::Light(LightType::RectArea)
        );
    }

    #[test]
    fn to_json_is_accepted_by_parse() {
        let payload = DropPayload::Light(LightType::Spot);
        assert_eq!(DropPayload::parse(&payload.to_json()).unwrap(), payload);
    }

    #[test]
    fn non_string_data_is_a_parse_failure() {
        let err = DropPayload::parse(r#"{"dropObjectType":"Model","data":7}"#).unwrap_err();
        assert!(matches!(err, Error::ParseFailure(_)));
    }
}
