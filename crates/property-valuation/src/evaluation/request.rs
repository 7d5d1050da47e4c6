use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Client-submitted description of a property to be valued.
///
/// `area` and `city` are kept as the client sent them, whatever their JSON type; every
/// other attribute is carried in `attributes`. All of it is forwarded to the valuation
/// engine as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<Value>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// `null`, `false`, `0`, `NaN` and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|number| number != 0.0 && !number.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl EvaluationRequest {
    pub fn new(area: f64, city: impl Into<String>) -> Self {
        Self {
            area: Number::from_f64(area).map(Value::Number),
            city: Some(Value::String(city.into())),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The area when the client sent it as a JSON number.
    pub fn area_value(&self) -> Option<f64> {
        self.area.as_ref().and_then(Value::as_f64)
    }

    /// The city when the client sent it as a JSON string.
    pub fn city_name(&self) -> Option<&str> {
        self.city.as_ref().and_then(Value::as_str)
    }

    /// Shallow presence check: both fields present and truthy.
    ///
    /// Type, range, and whether the city exists are left to the valuation engine.
    pub fn has_required_fields(&self) -> bool {
        let present = |field: &Option<Value>| field.as_ref().is_some_and(is_truthy);
        present(&self.area) && present(&self.city)
    }
}
