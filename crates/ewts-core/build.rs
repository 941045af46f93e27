fn main() {
    // Validate the embedded mapping table at compile time.
    let content = include_str!("src/table/default_acip.toml");
    if let Err(e) = content.parse::<toml::Value>() {
        panic!("src/table/default_acip.toml contains invalid TOML: {e}");
    }
}
