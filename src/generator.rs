//! Synthetic record generation.
//!
//! Endpoint schemas map field names to type tags; each tag resolves
//! through the [`FieldType`] registry. A schema that does not parse as a
//! tag mapping selects the generic fallback shape instead.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// One generated field value, serialized as the raw JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

/// One synthetic record. Field order is alphabetical in serialized output.
pub type Record = BTreeMap<String, Scalar>;

/// Failure to encode a generated payload into a JSON body.
#[derive(Debug, Error)]
#[error("failed to encode generated data: {0}")]
pub struct GenerationError(#[from] serde_json::Error);

/// Serialize a payload built from generated records into a JSON body.
pub fn encode<T: Serialize>(payload: &T) -> Result<Vec<u8>, GenerationError> {
    Ok(serde_json::to_vec(payload)?)
}

/// Generator type tags recognized in endpoint schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Uuid,
    Name,
    Email,
    Bool,
    Int,
    Word,
    Lat,
    Lng,
    Ipv4,
    Url,
    Username,
    Password,
    Phone,
    Date,
    Timestamp,
}

impl FieldType {
    /// Resolve a schema type tag. Unknown tags yield `None`; the caller
    /// emits null for those fields rather than failing.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "uuid" => Some(FieldType::Uuid),
            "name" => Some(FieldType::Name),
            "email" => Some(FieldType::Email),
            "bool" => Some(FieldType::Bool),
            "int" => Some(FieldType::Int),
            "string" => Some(FieldType::Word),
            "lat" => Some(FieldType::Lat),
            "lng" => Some(FieldType::Lng),
            "ipv4" => Some(FieldType::Ipv4),
            "url" => Some(FieldType::Url),
            "username" => Some(FieldType::Username),
            "password" => Some(FieldType::Password),
            "phone" => Some(FieldType::Phone),
            "date" => Some(FieldType::Date),
            "timestamp" => Some(FieldType::Timestamp),
            _ => None,
        }
    }

    /// Draw one value of this type from `rng`. The `timestamp` tag reads
    /// the wall clock, not the random source.
    pub fn sample(self, rng: &mut impl Rng) -> Scalar {
        match self {
            FieldType::Uuid => Scalar::Text(random_uuid(rng)),
            FieldType::Name => Scalar::Text(format!(
                "{} {}",
                pick(rng, FIRST_NAMES),
                pick(rng, LAST_NAMES)
            )),
            FieldType::Email => {
                let first = pick(rng, FIRST_NAMES).to_lowercase();
                let last = pick(rng, LAST_NAMES).to_lowercase();
                Scalar::Text(format!("{}.{}@{}", first, last, pick(rng, DOMAINS)))
            }
            FieldType::Bool => Scalar::Bool(rng.gen_bool(0.5)),
            FieldType::Int => Scalar::Int(rng.gen_range(0..1000)),
            FieldType::Word => Scalar::Text(pick(rng, WORDS).to_string()),
            FieldType::Lat => Scalar::Float(round6(rng.gen_range(-90.0..=90.0))),
            FieldType::Lng => Scalar::Float(round6(rng.gen_range(-180.0..=180.0))),
            FieldType::Ipv4 => Scalar::Text(format!(
                "{}.{}.{}.{}",
                rng.gen_range(1..=254),
                rng.gen_range(0..=255u8),
                rng.gen_range(0..=255u8),
                rng.gen_range(1..=254)
            )),
            FieldType::Url => Scalar::Text(format!(
                "https://www.{}/{}",
                pick(rng, DOMAINS),
                pick(rng, WORDS)
            )),
            FieldType::Username => Scalar::Text(format!(
                "{}{}",
                pick(rng, FIRST_NAMES).to_lowercase(),
                rng.gen_range(1..1000)
            )),
            FieldType::Password => Scalar::Text(alphanumeric(rng, 12)),
            FieldType::Phone => Scalar::Text(format!(
                "{:03}-{:03}-{:04}",
                rng.gen_range(200..1000),
                rng.gen_range(100..1000),
                rng.gen_range(0..10000)
            )),
            FieldType::Date => Scalar::Text(format!(
                "{:04}-{:02}-{:02}",
                rng.gen_range(1970..2025),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28)
            )),
            FieldType::Timestamp => Scalar::Int(chrono::Utc::now().timestamp()),
        }
    }
}

/// Generate `count` records from a schema string.
///
/// A schema that parses as a JSON object of field name to type tag drives
/// the registry; anything else yields generic fallback records. Unknown
/// tags produce null fields, never an error.
pub fn generate(schema: &str, count: usize, rng: &mut impl Rng) -> Vec<Record> {
    match serde_json::from_str::<BTreeMap<String, String>>(schema) {
        Ok(fields) => (0..count).map(|_| schema_record(&fields, rng)).collect(),
        Err(_) => (0..count).map(|_| fallback_record(rng)).collect(),
    }
}

fn schema_record(fields: &BTreeMap<String, String>, rng: &mut impl Rng) -> Record {
    fields
        .iter()
        .map(|(name, tag)| {
            let value = match FieldType::from_tag(tag) {
                Some(field_type) => field_type.sample(rng),
                None => Scalar::Null,
            };
            (name.clone(), value)
        })
        .collect()
}

/// Default record shape used when no usable schema is configured. A few
/// extra fields come and go per record, so shapes vary across a response.
fn fallback_record(rng: &mut impl Rng) -> Record {
    let mut record = Record::new();
    record.insert("id".to_string(), FieldType::Uuid.sample(rng));
    record.insert("name".to_string(), FieldType::Name.sample(rng));
    record.insert("email".to_string(), FieldType::Email.sample(rng));
    record.insert("active".to_string(), FieldType::Bool.sample(rng));
    record.insert("created_at".to_string(), FieldType::Timestamp.sample(rng));

    if rng.gen_bool(0.5) {
        record.insert("age".to_string(), Scalar::Int(rng.gen_range(18..80)));
    }
    if rng.gen_bool(0.5) {
        record.insert("city".to_string(), FieldType::Word.sample(rng));
    }
    if rng.gen_bool(0.5) {
        record.insert(
            "score".to_string(),
            Scalar::Float(round6(rng.gen_range(0.0..100.0))),
        );
    }
    record
}

// Random v4 uuid built from the caller's random source, so seeded
// generation stays reproducible.
fn random_uuid(rng: &mut impl Rng) -> String {
    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        rng.gen::<u32>(),
        rng.gen::<u16>(),
        rng.gen::<u16>() & 0x0fff,
        (rng.gen::<u16>() & 0x3fff) | 0x8000,
        rng.gen::<u64>() & 0xffffffffffff,
    )
}

fn alphanumeric(rng: &mut impl Rng, len: usize) -> String {
    use rand::distributions::Alphanumeric;
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

fn pick<'a>(rng: &mut impl Rng, items: &'a [&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carla", "David", "Elena", "Frank", "Grace", "Hugo", "Irene", "James", "Kira",
    "Liam", "Maria", "Noah", "Olivia", "Pavel", "Quinn", "Rosa", "Samuel", "Tara",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Baker", "Chen", "Dubois", "Evans", "Fischer", "Garcia", "Hansen", "Ivanov",
    "Johnson", "Kim", "Lopez", "Miller", "Nguyen", "Olsen", "Petrov", "Quintero", "Rossi",
    "Schmidt", "Tanaka",
];

const WORDS: &[&str] = &[
    "apple", "bridge", "canyon", "delta", "ember", "forest", "granite", "harbor", "island",
    "jungle", "kernel", "lantern", "meadow", "nebula", "ocean", "prairie", "quartz", "river",
    "summit", "tundra", "valley", "willow",
];

const DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.test",
    "mockdata.dev",
];
