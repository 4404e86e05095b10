//! Conversions between integers, bytes and '0'/'1' digit strings.
//!
//! Digit strings are handled as text so they can be logged, diffed and
//! pasted between peers. Every function here is pure.

use base64::Engine;
use hpackx_core::{HpackError, Result};

fn ensure_binary(bits: &str) -> Result<()> {
    match bits.bytes().position(|b| b != b'0' && b != b'1') {
        None => Ok(()),
        Some(pos) => Err(HpackError::InvalidFormat(format!(
            "non-binary character at offset {} in {:?}",
            pos, bits
        ))),
    }
}

/// Renders `value` as exactly `width` binary digits.
///
/// Short values are left-padded with '0'. Values that need more than `width`
/// bits keep only the low `width` bits; callers must check `value < 2^width`
/// when that loss matters.
pub fn to_fixed_width_binary(value: u64, width: usize) -> String {
    let digits = format!("{:0width$b}", value, width = width);
    let excess = digits.len() - width;
    digits[excess..].to_string()
}

/// Splits `bits` into `group_size`-digit groups, right-padding the last one
/// with '0'. Empty input gives no groups.
pub fn split_into_groups(bits: &str, group_size: usize) -> Result<Vec<String>> {
    if group_size == 0 {
        return Err(HpackError::InvalidFormat("group size must be positive".into()));
    }
    ensure_binary(bits)?;

    // The input is ASCII after validation, so byte chunks are char chunks.
    Ok(bits
        .as_bytes()
        .chunks(group_size)
        .map(|chunk| {
            let mut group = String::with_capacity(group_size);
            group.extend(chunk.iter().map(|&b| b as char));
            while group.len() < group_size {
                group.push('0');
            }
            group
        })
        .collect())
}

/// Parses a digit string as an unsigned integer.
pub fn to_integer(bits: &str) -> Result<u64> {
    if bits.is_empty() {
        return Err(HpackError::InvalidFormat("empty binary string".into()));
    }
    ensure_binary(bits)?;
    if bits.len() > 64 {
        return Err(HpackError::InvalidFormat(format!(
            "{} binary digits exceed 64-bit range",
            bits.len()
        )));
    }
    u64::from_str_radix(bits, 2).map_err(|e| HpackError::InvalidFormat(e.to_string()))
}

pub fn join_groups<S: AsRef<str>>(groups: &[S]) -> String {
    groups.iter().map(AsRef::as_ref).collect()
}

fn byte_groups(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|&b| format!("{:08b}", b)).collect()
}

/// One 8-bit group per UTF-8 byte of `text`.
pub fn text_to_groups(text: &str) -> Vec<String> {
    byte_groups(text.as_bytes())
}

/// One 8-bit group per byte of a hex string. A `0x` prefix is accepted and an
/// odd digit count is treated as having a leading '0'.
pub fn hex_to_groups(hex_str: &str) -> Result<Vec<String>> {
    let digits = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);
    if digits.is_empty() {
        return Ok(Vec::new());
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HpackError::InvalidFormat(format!("not a hex string: {:?}", hex_str)));
    }

    let bytes = if digits.len() % 2 != 0 {
        hex::decode(format!("0{}", digits))
    } else {
        hex::decode(digits)
    }
    .map_err(|e| HpackError::InvalidFormat(e.to_string()))?;
    Ok(byte_groups(&bytes))
}

/// One 8-bit group per byte of standard, padded base64.
pub fn base64_to_groups(b64: &str) -> Result<Vec<String>> {
    if b64.is_empty() {
        return Ok(Vec::new());
    }
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(b64)
        .map_err(|e| HpackError::InvalidFormat(format!("invalid base64: {}", e)))?;
    Ok(byte_groups(&bytes))
}

/// Inverse of the `*_to_groups` functions. Every group must be exactly eight
/// binary digits.
pub fn groups_to_bytes<S: AsRef<str>>(groups: &[S]) -> Result<Vec<u8>> {
    groups
        .iter()
        .map(|g| {
            let g = g.as_ref();
            if g.len() != 8 {
                return Err(HpackError::InvalidFormat(format!(
                    "group {:?} is not 8 digits",
                    g
                )));
            }
            to_integer(g).map(|v| v as u8)
        })
        .collect()
}

pub fn groups_to_text<S: AsRef<str>>(groups: &[S]) -> Result<String> {
    let bytes = groups_to_bytes(groups)?;
    String::from_utf8(bytes).map_err(|e| HpackError::InvalidFormat(e.to_string()))
}

/// Uppercase hex, two digits per group.
pub fn groups_to_hex<S: AsRef<str>>(groups: &[S]) -> Result<String> {
    groups_to_bytes(groups).map(hex::encode_upper)
}

/// Emits a header event carrying `label` and the group count, then one debug
/// event per group with its decimal and hex forms.
pub fn trace_groups<S: AsRef<str>>(groups: &[S], label: &str) {
    tracing::debug!(label, groups = groups.len(), "=== {} ===", label);
    for (pos, group) in groups.iter().enumerate() {
        let group = group.as_ref();
        match to_integer(group) {
            Ok(value) => tracing::debug!(
                label,
                byte = pos + 1,
                bits = group,
                decimal = value,
                hex = %format_args!("{:02X}", value),
            ),
            Err(e) => tracing::debug!(label, byte = pos + 1, bits = group, error = %e),
        }
    }
}
