use std::path::Path;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn glyphs_export() {
    print!("{}", mlphone::api::glyphs_default_config());
}

pub fn glyphs_validate(file: &str) {
    let n = die!(mlphone::api::glyphs_validate(Path::new(file)), "Error: {}");
    println!("OK: {n} mappings");
}

pub fn settings_export() {
    print!("{}", mlphone::api::settings_default_config());
}

pub fn settings_validate(file: &str) {
    let s = die!(mlphone::api::settings_validate(Path::new(file)), "Error: {}");
    let ex = &s.exception;
    println!(
        "OK: exception.enabled={}, leads={}, pivot={}, trails={}",
        ex.enabled,
        ex.leads.join("|"),
        ex.pivot,
        ex.trails.join("|")
    );
}

/// Install custom configuration before any key is computed.
pub fn load_custom(glyphs: Option<&str>, settings: Option<&str>) {
    if let Some(path) = glyphs {
        die!(
            mlphone::api::glyphs_load_config(Path::new(path)),
            "Error loading glyph tables: {}"
        );
    }
    if let Some(path) = settings {
        die!(
            mlphone::api::settings_load_config(Path::new(path)),
            "Error loading settings: {}"
        );
    }
}
