use serde_json::Value;

/// Render the result as indented JSON on stdout. This is the default
/// format and round-trips the full envelope.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("failed to render JSON: {e}"),
    }
}
