//! Architecture enforcement lint - the document theme attribute has one writer.
//!
//! Styling reads `<html data-theme>`, so only the theme controller's DOM slot
//! may set it. Anything else toggling the attribute would let the page and
//! the controller disagree about the active theme.
//!
//! This test scans the source tree and flags:
//! - any `set_attribute(` call mentioning the theme attribute outside the
//!   theme slot
//! - the `"data-theme"` literal outside the module that defines it

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// The only file allowed to write the attribute to the DOM
const THEME_WRITER: &str = "app/theme.rs";

/// The only file allowed to spell out the attribute name
const THEME_DEFINITION: &str = "view_state/theme.rs";

fn normalized(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

fn analyze_file(path: &Path) -> Vec<(String, String)> {
    let path_str = normalized(path);

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    let mut violations = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }

        let location = format!("{}:{}", path_str, idx + 1);

        if trimmed.contains("set_attribute(")
            && (trimmed.contains("THEME_ATTRIBUTE") || trimmed.contains("data-theme"))
            && !path_str.ends_with(THEME_WRITER)
        {
            violations.push((location.clone(), "writes the theme attribute".to_string()));
        }

        if trimmed.contains("\"data-theme\"") && !path_str.ends_with(THEME_DEFINITION) {
            violations.push((
                location,
                "spells out \"data-theme\"; use view_state::theme::THEME_ATTRIBUTE".to_string(),
            ));
        }
    }

    violations
}

#[test]
fn theme_attribute_has_single_writer() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        all_violations.extend(analyze_file(entry.path()));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\nARCHITECTURE VIOLATION: data-theme must only be written by the theme controller\n\n\
            Violations found:\n\n",
        );

        for (location, problem) in &all_violations {
            error_msg.push_str(&format!("  {}\n    {}\n\n", location, problem));
        }

        error_msg.push_str("Route theme changes through ThemeContext::toggle instead.\n");

        panic!("{}", error_msg);
    }
}

#[test]
fn theme_writer_exists() {
    let writer = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join(THEME_WRITER);

    let content = fs::read_to_string(&writer).expect("Failed to read app/theme.rs");

    assert!(
        content.contains("set_attribute(THEME_ATTRIBUTE"),
        "app/theme.rs must write the theme through THEME_ATTRIBUTE"
    );
}
