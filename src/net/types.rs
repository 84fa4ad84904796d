//! Wire DTOs for the recommendation service.
//!
//! DESIGN
//! ======
//! Catalog rows come from a loosely typed data pipeline, so product fields are
//! decoded leniently: a field with the wrong shape becomes absent instead of
//! failing the whole response. Envelope fields (`products`, `total_products`)
//! stay strict so a malformed payload is still reported as an error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A catalog item exactly as the service returned it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawProduct {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub ai_description: Option<String>,
    /// Cosine similarity in `[0, 1]`.
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub similarity_score: Option<f64>,
}

/// Body of `GET /api/recommend`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecommendResponse {
    pub products: Vec<RawProduct>,
}

/// One entry of the analytics brand histogram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandCount {
    pub brand: String,
    pub count: u64,
}

/// Body of `GET /api/analytics`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub total_products: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub avg_price: Option<f64>,
    /// Brand counts in the order the service listed them.
    #[serde(default, deserialize_with = "deserialize_brand_counts")]
    pub top_brands: Vec<BrandCount>,
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let number = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Decode a `brand -> count` object into a list, keeping document order.
///
/// A repeated key overwrites the earlier count in place. `null` decodes as an
/// empty list.
fn deserialize_brand_counts<'de, D>(deserializer: D) -> Result<Vec<BrandCount>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BrandCountsVisitor;

    impl<'de> Visitor<'de> for BrandCountsVisitor {
        type Value = Vec<BrandCount>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of brand name to product count")
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut out: Vec<BrandCount> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((brand, count)) = map.next_entry::<String, u64>()? {
                match out.iter_mut().find(|entry| entry.brand == brand) {
                    Some(entry) => entry.count = count,
                    None => out.push(BrandCount { brand, count }),
                }
            }
            Ok(out)
        }
    }

    deserializer.deserialize_any(BrandCountsVisitor)
}
