use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::Claims;

/// Decodes the claims from a compact three-segment token.
///
/// The signature is NOT verified. Decoded claims are informational only
/// (display, expiry heuristics, redirects); the server re-checks
/// authorization on every request, so a token with forged claims gains
/// nothing beyond a different-looking UI.
///
/// Returns `None` for anything that is not a well-formed token: wrong
/// segment count, empty segments, payload that is not valid base64url, or
/// payload JSON that is not an object. Never panics.
pub fn decode(token: &str) -> Option<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|segment| segment.is_empty()) {
        log::debug!(
            target: "vestibule_session",
            "msg=\"token rejected\", reason=\"expected 3 non-empty segments, got {}\"",
            segments.len()
        );
        return None;
    }

    let payload = decode_segment(segments[1])?;

    match serde_json::from_slice::<Claims>(&payload) {
        Ok(claims) => Some(claims),
        Err(err) => {
            log::debug!(
                target: "vestibule_session",
                "msg=\"token payload is not valid claims JSON\", error=\"{err}\""
            );
            None
        }
    }
}

/// Decodes one base64url segment to bytes.
///
/// The url-safe alphabet is mapped back to the standard one (`-` to `+`,
/// `_` to `/`) and padding is restored from the segment length: length
/// `% 4 == 2` gets `==`, `== 3` gets `=`, `== 0` gets none. A length
/// `% 4 == 1` cannot come from any byte sequence and is rejected. Already
/// padded standard base64 therefore decodes as well.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    let mut normalized = segment.replace('-', "+").replace('_', "/");

    match normalized.len() % 4 {
        0 => {}
        2 => normalized.push_str("=="),
        3 => normalized.push('='),
        _ => {
            log::debug!(
                target: "vestibule_session",
                "msg=\"token segment has impossible base64 length\", len=\"{}\"",
                normalized.len()
            );
            return None;
        }
    }

    match STANDARD.decode(&normalized) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            log::debug!(
                target: "vestibule_session",
                "msg=\"token segment is not valid base64\", error=\"{err}\""
            );
            None
        }
    }
}
