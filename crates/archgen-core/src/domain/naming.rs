//! Identifier case conversions shared by templates and code emitters.

/// Convert `CamelCase` to `snake_case`.
///
/// Every ASCII uppercase letter after the first character gets a leading
/// underscore, so acronyms split per letter (`GetByID` → `get_by_i_d`).
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, ch) in s.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Lower-case the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the unexported struct implementing `interface`.
pub fn struct_name(interface: &str) -> String {
    lower_first(interface)
}

/// Name of the exported constructor for `interface`.
pub fn constructor_name(interface: &str) -> String {
    format!("New{interface}")
}
