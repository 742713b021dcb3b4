use crate::error::MarshalingError;
use zbus::zvariant::Value;

/// A notification hint value.
///
/// Only the kinds a notification server is expected to understand are
/// representable here; anything else is rejected by [`Hint::from_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Bool(bool),
    Byte(u8),
    Int(i32),
    Str(String),
    /// Sent as `av`.
    Array(Vec<Hint>),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Hint {
    pub fn from_value(key: &str, value: &Value<'_>) -> Result<Self, MarshalingError> {
        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::U8(n) => Ok(Self::Byte(*n)),
            Value::I32(n) => Ok(Self::Int(*n)),
            Value::Str(s) => Ok(Self::Str(s.as_str().into())),
            Value::Value(inner) => Self::from_value(key, inner),
            Value::Array(array) if array.element_signature().to_string() == "v" => array
                .iter()
                .map(|v| Self::from_value(key, v))
                .collect::<Result<_, _>>()
                .map(Self::Array),
            v => Err(MarshalingError::UnsupportedHint {
                key: key.into(),
                signature: v.value_signature().to_string(),
            }),
        }
    }

    pub(crate) fn to_value(&self) -> Value<'_> {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Byte(n) => Value::U8(*n),
            Self::Int(n) => Value::I32(*n),
            Self::Str(s) => Value::from(s.as_str()),
            Self::Array(hints) => {
                Value::from(hints.iter().map(Self::to_value).collect::<Vec<Value<'_>>>())
            }
        }
    }

    pub(crate) fn has_nul(&self) -> bool {
        match self {
            Self::Str(s) => s.contains('\0'),
            Self::Array(hints) => hints.iter().any(Self::has_nul),
            _ => false,
        }
    }
}

impl From<bool> for Hint {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u8> for Hint {
    fn from(n: u8) -> Self {
        Self::Byte(n)
    }
}

impl From<i32> for Hint {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Hint {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for Hint {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Urgency> for Hint {
    fn from(urgency: Urgency) -> Self {
        Self::Byte(match urgency {
            Urgency::Low => 0,
            Urgency::Normal => 1,
            Urgency::Critical => 2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_values() {
        assert_eq!(
            Hint::from_value("resident", &Value::Bool(true)).unwrap(),
            Hint::Bool(true)
        );
        assert_eq!(
            Hint::from_value("urgency", &Value::U8(2)).unwrap(),
            Hint::Byte(2)
        );
        assert_eq!(
            Hint::from_value("value", &Value::I32(-10)).unwrap(),
            Hint::Int(-10)
        );
        assert_eq!(
            Hint::from_value("category", &Value::from("im.received")).unwrap(),
            Hint::Str("im.received".into())
        );
    }

    #[test]
    fn nested_variant_is_unwrapped() {
        let value = Value::Value(Box::new(Value::I32(75)));
        assert_eq!(Hint::from_value("value", &value).unwrap(), Hint::Int(75));
    }

    #[test]
    fn unsupported_value() {
        let err = Hint::from_value("progress", &Value::F64(0.5)).unwrap_err();
        match err {
            MarshalingError::UnsupportedHint { key, signature } => {
                assert_eq!(key, "progress");
                assert_eq!(signature, "d");
            }
            e => panic!("unexpected error: {e}"),
        }

        assert!(Hint::from_value("x", &Value::I64(1)).is_err());
    }

    #[test]
    fn typed_arrays_are_unsupported() {
        let err = Hint::from_value("list", &Value::from(vec![1i32, 2])).unwrap_err();
        match err {
            MarshalingError::UnsupportedHint { key, signature } => {
                assert_eq!(key, "list");
                assert_eq!(signature, "ai");
            }
            e => panic!("unexpected error: {e}"),
        }

        let err = Hint::from_value("image-data", &Value::from(vec![1u8, 2, 3])).unwrap_err();
        assert!(matches!(
            err,
            MarshalingError::UnsupportedHint { signature, .. } if signature == "ay"
        ));
    }

    #[test]
    fn array_round_trips_through_variants() {
        let hint = Hint::Array(vec![Hint::Int(1), Hint::from("two"), Hint::Bool(false)]);
        let value = hint.to_value();
        assert_eq!(value.value_signature().to_string(), "av");
        assert_eq!(Hint::from_value("list", &value).unwrap(), hint);
    }

    #[test]
    fn urgency_is_a_byte() {
        assert_eq!(Hint::from(Urgency::Low), Hint::Byte(0));
        assert_eq!(Hint::from(Urgency::default()), Hint::Byte(1));
        assert_eq!(Hint::from(Urgency::Critical), Hint::Byte(2));
    }

    #[test]
    fn nul_in_nested_string() {
        assert!(!Hint::from("plain").has_nul());
        assert!(Hint::Array(vec![Hint::Int(1), Hint::from("a\0b")]).has_nul());
    }
}
