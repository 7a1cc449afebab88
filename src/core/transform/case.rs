use super::words::split_words;

/// Upper-case the first character, lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalize the first letter of each whitespace-delimited word. Whitespace
/// and leading punctuation are copied through untouched, so `"(hello)"`
/// becomes `"(Hello)"`. A leading digit ends the word start (`3rd`).
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            result.push(c);
            at_word_start = true;
        } else if !at_word_start {
            result.extend(c.to_lowercase());
        } else if c.is_alphabetic() {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = !c.is_alphanumeric();
        }
    }

    result
}

/// `hello_world` → `helloWorld`. Input with no words comes back as-is.
pub fn camel_case(text: &str) -> String {
    let words = split_words(text);
    let Some((first, rest)) = words.split_first() else {
        return text.to_string();
    };

    let mut result = first.to_lowercase();
    for word in rest {
        result.push_str(&capitalize(word));
    }
    result
}

pub fn snake_case(text: &str) -> String {
    join_lowercase(text, "_")
}

pub fn kebab_case(text: &str) -> String {
    join_lowercase(text, "-")
}

// Same empty-input policy as camel_case: nothing to join, return the input.
fn join_lowercase(text: &str, separator: &str) -> String {
    let words = split_words(text);
    if words.is_empty() {
        return text.to_string();
    }
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
