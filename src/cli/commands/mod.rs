pub mod dedup;
pub mod map;

/// Parse a single-byte field delimiter from a CLI string.
pub fn parse_delimiter(raw: &str) -> anyhow::Result<u8> {
    match raw.as_bytes() {
        [b] => Ok(*b),
        [b'\\', b't'] => Ok(b'\t'),
        _ => anyhow::bail!("delimiter must be a single character, got {:?}", raw),
    }
}
