use serde_json::Value;
use std::io::{self, Read};

/// Read piped JSON from stdin. An interactive terminal or an empty
/// pipe yields None so the caller can fall back to flags or files.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    match buffer.trim() {
        "" => Ok(None),
        piped => Ok(Some(serde_json::from_str(piped)?)),
    }
}
