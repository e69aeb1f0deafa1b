//! Serde support (feature `serde`): a `Rational` travels as its `"n/d"` text.
//! Human-readable formats also accept bare integers on input; compact
//! formats carry no type tags, so they are read back as strings only.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::rational::Rational;

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RationalVisitor;

impl<'de> Visitor<'de> for RationalVisitor {
    type Value = Rational;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rational as \"n/d\" or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Rational, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Rational, E> {
        Ok(Rational::integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Rational, E> {
        i64::try_from(v)
            .map(Rational::integer)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(RationalVisitor)
        } else {
            deserializer.deserialize_str(RationalVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{RatError, Rational};

    #[test]
    fn serializes_as_text() {
        let r = Rational::new(-6, 8).unwrap();
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"-3/4\"");
    }

    #[test]
    fn deserializes_text_and_integers() {
        let r: Rational = serde_json::from_str("\"1420/452\"").unwrap();
        assert_eq!(r, Rational::new(355, 113).unwrap());
        let r: Rational = serde_json::from_str("-4").unwrap();
        assert_eq!(r, Rational::integer(-4));
        let r: Rational = serde_json::from_str("12").unwrap();
        assert_eq!(r, Rational::integer(12));
    }

    #[test]
    fn compact_binary_round_trip() {
        for r in [Rational::new(3, 4).unwrap(), Rational::integer(-7), Rational::ZERO] {
            let bytes = bincode::serialize(&r).unwrap();
            assert_eq!(bincode::deserialize::<Rational>(&bytes).unwrap(), r);
        }
    }

    #[test]
    fn rejects_bad_input() {
        let err = serde_json::from_str::<Rational>("\"1/0\"").unwrap_err();
        assert!(err.to_string().contains(&RatError::InvalidArgument("zero denominator").to_string()));
        assert!(serde_json::from_str::<Rational>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Rational>("1.5").is_err());
    }
}
