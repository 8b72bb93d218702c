use authdns_domain::{DomainError, QueryType, Record, Zone};
use serde::{Deserialize, Deserializer};
use std::net::Ipv4Addr;

/// On-disk JSON layout of a zone. Keys other than these are ignored.
#[derive(Debug, Deserialize)]
struct ZoneFile {
    #[serde(rename = "$origin")]
    origin: String,

    #[serde(default)]
    a: Vec<RecordEntry>,
}

#[derive(Debug, Deserialize)]
struct RecordEntry {
    #[serde(deserialize_with = "deserialize_ttl")]
    ttl: u32,
    value: String,
}

/// Accepts any JSON number with an integral value in `u32` range, so
/// `60` and `60.0` are the same TTL.
fn deserialize_ttl<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(ttl) = number.as_u64() {
        return u32::try_from(ttl)
            .map_err(|_| D::Error::custom(format!("ttl {ttl} is out of range")));
    }
    match number.as_f64() {
        Some(ttl) if ttl.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&ttl) => {
            Ok(ttl as u32)
        }
        _ => Err(D::Error::custom(format!(
            "ttl {number} is not a non-negative integer"
        ))),
    }
}

/// Dotted-quad parsing that tolerates leading zeros in an octet
/// (`010.0.0.1` is `10.0.0.1`).
fn parse_ipv4(value: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = value.split('.');
    for octet in &mut octets {
        *octet = parts.next()?.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

/// Parses and validates one JSON zone document.
///
/// `source_name` only labels errors. A trailing dot on the origin is
/// dropped so the origin matches names as they are joined from labels.
pub fn parse_zone(source_name: &str, contents: &str) -> Result<Zone, DomainError> {
    let file: ZoneFile = serde_json::from_str(contents)
        .map_err(|e| DomainError::zone_load(source_name, e.to_string()))?;

    let origin = file.origin.trim_end_matches('.');
    if origin.is_empty() {
        return Err(DomainError::zone_load(source_name, "$origin is empty"));
    }

    let a_records = file
        .a
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            parse_ipv4(&entry.value)
                .map(|address| Record::address(entry.ttl, address))
                .ok_or_else(|| {
                    DomainError::zone_load(
                        source_name,
                        format!("a[{i}]: '{}' is not a dotted IPv4 address", entry.value),
                    )
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Zone::new(origin).with_records(QueryType::A, a_records))
}
