//! Serde adapters for numbers that must keep their written digits.
//!
//! `serde_json` is built with `arbitrary_precision`, so a JSON number reaches
//! `deserialize_any` as a one-entry map holding its source text instead of
//! as an `f64`. The adapters here read that text directly. Enums tagged by a
//! field buffer their content first, which turns even plain integers into
//! that map form, so integer fields inside them go through [`count`].
use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, MapAccess, Unexpected, Visitor};

/// Key `serde_json` uses for the text of an arbitrary precision number.
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Pull the number text out of the map `serde_json` hands a visitor.
fn number_text<'de, A: MapAccess<'de>>(mut map: A, expected: &dyn de::Expected) -> Result<String, A::Error> {
    match map.next_key::<String>()? {
        Some(key) if key == NUMBER_TOKEN => map.next_value(),
        _ => Err(de::Error::invalid_type(Unexpected::Map, expected)),
    }
}

/// Exact decimal from JSON number text. Plain notation must fit a `Decimal`
/// without losing digits; exponents are accepted for the small and large
/// values some encoders write that way.
fn decimal_from_number_text(text: &str) -> Option<Decimal> {
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text).ok()
    } else {
        Decimal::from_str_exact(text).ok()
    }
}

pub(crate) mod amount {
    use rust_decimal::Decimal;
    use serde::{Deserializer, Serializer};

    use super::*;

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal amount as a string or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            crate::hand_history::parse_amount(v).map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        // A binary float has already lost the written digits, so it is
        // refused rather than guessed at.
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            Err(E::invalid_type(Unexpected::Float(v), &self))
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Decimal, A::Error> {
            let text = number_text(map, &self)?;
            decimal_from_number_text(&text)
                .ok_or_else(|| de::Error::invalid_value(Unexpected::Str(&text), &self))
        }
    }

    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }

    pub(crate) mod option {
        use rust_decimal::Decimal;
        use serde::{Deserialize, Deserializer, Serializer};

        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "super")] Decimal);

        pub fn serialize<S: Serializer>(
            amount: &Option<Decimal>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match amount {
                Some(amount) => serializer.collect_str(amount),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Decimal>, D::Error> {
            let wrapped = Option::<Wrapped>::deserialize(deserializer)?;
            Ok(wrapped.map(|Wrapped(d)| d))
        }
    }

    pub(crate) mod list {
        use rust_decimal::Decimal;
        use serde::ser::SerializeSeq;
        use serde::{Deserialize, Deserializer, Serializer};

        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "super")] Decimal);

        pub fn serialize<S: Serializer>(
            amounts: &[Decimal],
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(amounts.len()))?;
            for amount in amounts {
                seq.serialize_element(&amount.to_string())?;
            }
            seq.end()
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<Decimal>, D::Error> {
            let wrapped = Vec::<Wrapped>::deserialize(deserializer)?;
            Ok(wrapped.into_iter().map(|Wrapped(d)| d).collect())
        }
    }
}

/// Non-negative integers such as decimal places or hand strength ranks.
pub(crate) mod count {
    use serde::{Deserializer, Serializer};

    use super::*;

    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<u32, A::Error> {
            let text = number_text(map, &self)?;
            text.parse()
                .map_err(|_| de::Error::invalid_value(Unexpected::Str(&text), &self))
        }
    }

    pub fn serialize<S: Serializer>(count: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(*count)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }

    pub(crate) mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "super")] u32);

        pub fn serialize<S: Serializer>(
            count: &Option<u32>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match count {
                Some(count) => serializer.serialize_some(count),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<u32>, D::Error> {
            let wrapped = Option::<Wrapped>::deserialize(deserializer)?;
            Ok(wrapped.map(|Wrapped(c)| c))
        }
    }

    pub(crate) mod map {
        use std::collections::HashMap;

        use serde::{Deserialize, Deserializer, Serializer};

        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "super")] u32);

        pub fn serialize<S: Serializer>(
            counts: &HashMap<String, u32>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.collect_map(counts)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<HashMap<String, u32>, D::Error> {
            let wrapped = HashMap::<String, Wrapped>::deserialize(deserializer)?;
            Ok(wrapped.into_iter().map(|(k, Wrapped(c))| (k, c)).collect())
        }
    }
}
