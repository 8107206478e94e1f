use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of a server-side apply document that can be left out, set to an explicit `null`, or
/// set to a value. The apply wire format treats these differently: an absent field is not owned by
/// the field manager, while an explicit `null` is owned and cleared.
///
/// Fields of this type must be annotated with
/// `#[serde(default, skip_serializing_if = "Nullable::is_absent")]` so that `Absent` survives a
/// round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(some) => Self::Value(some),
            None => Self::Null,
        }
    }
}

impl<T> Serialize for Nullable<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de>,
{
    /// Only called when the key is present, so a missing value can only be an explicit `null`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T> JsonSchema for Nullable<T>
where
    T: JsonSchema,
{
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        format!("Nullable_{}", T::schema_name())
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        Option::<T>::json_schema(gen)
    }
}

#[cfg(test)]
mod test {
    use super::Nullable;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
    struct Document {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        field: Nullable<String>,
    }

    #[test]
    fn absent_null_and_value_are_distinguished() {
        let absent: Document = serde_json::from_value(json!({})).unwrap();
        assert!(absent.field.is_absent());
        assert_eq!(serde_json::to_value(&absent).unwrap(), json!({}));

        let null: Document = serde_json::from_value(json!({ "field": null })).unwrap();
        assert!(null.field.is_null());
        assert_eq!(serde_json::to_value(&null).unwrap(), json!({ "field": null }));

        let value: Document = serde_json::from_value(json!({ "field": "x" })).unwrap();
        assert_eq!(value.field.as_option().map(String::as_str), Some("x"));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({ "field": "x" }));
    }

    #[test]
    fn option_conversion() {
        assert!(Nullable::<u8>::from(None).is_null());
        assert_eq!(Nullable::from(Some(3u8)).into_option(), Some(3));
        assert_eq!(Nullable::<u8>::default().into_option(), None);
    }
}
