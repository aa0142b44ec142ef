/// Embedded TOML files and the top-level tables each must define.
const EMBEDDED: &[(&str, &str, &[&str])] = &[
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        &["exception"],
    ),
    (
        "src/glyphs/default_glyphs.toml",
        include_str!("src/glyphs/default_glyphs.toml"),
        &["vowels", "consonants", "chillus", "compounds", "modifiers"],
    ),
];

fn main() {
    for (path, content, tables) in EMBEDDED {
        println!("cargo:rerun-if-changed={path}");
        check_tables(path, content, tables);
    }
}

fn check_tables(path: &str, content: &str, tables: &[&str]) {
    let value: toml::Table = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for name in tables {
        match value.get(*name) {
            Some(toml::Value::Table(t)) if !t.is_empty() => {}
            Some(toml::Value::Table(_)) => panic!("{path}: [{name}] is empty"),
            _ => panic!("{path}: missing [{name}] table"),
        }
    }
}
