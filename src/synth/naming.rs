//! Property names derived from accessor method names.
//!
//! Only ASCII case folding is meaningful here; identifiers with non-ASCII
//! leading characters fall through unchanged.

/// First "word" of a camelCase or snake_case identifier, lowercased.
///
/// The first character is always taken. After it, lowercase letters are
/// appended, an underscore is appended and ends the word, an uppercase letter
/// ends the word without being taken, and anything else is skipped.
pub fn first_word(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    
    let mut word: String = first.to_lowercase().collect();
    for c in chars {
        if c.is_lowercase() {
            word.push(c);
            continue;
        }
        if c == '_' {
            word.push(c);
            break;
        }
        if c.is_uppercase() {
            break;
        }
    }
    word
}

/// Whether `word` is one of `prefixes`, optionally followed by an underscore
pub fn matches_word(word: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| {
        word == *prefix || word.strip_prefix(prefix).is_some_and(|rest| rest == "_")
    })
}

/// Name with its first character lowercased
pub fn lowercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name with its first character uppercased
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The part of `name` following `word`, when `name` really is spelled with it
fn strip_word<'a>(name: &'a str, word: &str) -> Option<&'a str> {
    let head = name.get(..word.len())?;
    if head.eq_ignore_ascii_case(word) {
        name.get(word.len()..)
    } else {
        None
    }
}

/// Property name for a getter: `getWidth` -> `width`, `getX` -> `x`.
///
/// Names without a `get`/`get_` first word, or whose remainder is empty or
/// starts with a digit, are returned unchanged.
pub fn property_name_from_getter(name: &str) -> String {
    let word = first_word(name);
    if !matches_word(&word, &["get"]) {
        return name.to_string();
    }
    
    match strip_word(name, &word) {
        Some(rest) if rest.chars().next().is_some_and(|c| !c.is_ascii_digit()) => lowercase_first(rest),
        _ => name.to_string(),
    }
}

/// Property name for a setter: `setWidth` -> `width`, `set_width_` -> `width`.
///
/// An empty result means the method cannot name a property.
pub fn property_name_from_setter(name: &str) -> String {
    let word = first_word(name);
    let rest = if matches_word(&word, &["set"]) {
        strip_word(name, &word).unwrap_or(name)
    } else {
        name
    };
    
    let trimmed = rest.trim_matches('_');
    if trimmed.is_empty() {
        return String::new();
    }
    
    let starts_lower = name.chars().next().is_some_and(char::is_lowercase);
    if starts_lower && !trimmed.chars().next().is_some_and(char::is_lowercase) {
        lowercase_first(trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Getter name as it would pair with a setter-derived name.
///
/// `isReady` pairs with `ready`. The `is` prefix is stripped once only, so
/// `isIsReady` becomes `isReady`, never `ready`.
pub fn read_write_property_name(getter_name: &str, setter_name: &str) -> String {
    let name = property_name_from_getter(getter_name);
    if name != setter_name && name.len() > 2 && name.starts_with("is") {
        return lowercase_first(&name[2..]);
    }
    name
}
