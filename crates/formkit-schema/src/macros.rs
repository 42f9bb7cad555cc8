/// Serialize/deserialize a token enum through its `Display`/`FromStr` forms,
/// so the wire shape matches the flat property representation.
macro_rules! impl_token_serde {
    ($ty:ty) => {
        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;

                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_token_serde;
