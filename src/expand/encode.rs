/// Percent-encodes everything outside `[A-Za-z0-9-._~]`.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Reverses [`encode_component`]; text that does not decode to UTF-8 is kept as is.
pub fn decode_component(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}
