//! C++ identifier validation for component names and namespaces.
//!
//! Both values end up spliced into generated identifiers, file names, and
//! namespace declarations, so the same rules apply to each.

use crate::error::{Error, Result};

/// Punctuation that is unsafe to interpolate into C++ source or file paths.
/// Whitespace is checked separately via `char::is_whitespace`.
const FORBIDDEN_CHARS: &[char] = &[
    '*', '?', '+', '-', ',', ';', '=', '&', '%', '$', '`', '"', '\'', '/', '\\', '[', ']', '{',
    '}', '~', '#', '|', '<', '>', '!', '^', '@', '(', ')', ':',
];

/// C++ reserved keywords (through C++20), compared case-sensitively.
const CPP_KEYWORDS: &[&str] = &[
    "alignas",
    "alignof",
    "and",
    "and_eq",
    "asm",
    "auto",
    "bitand",
    "bitor",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "char16_t",
    "char32_t",
    "char8_t",
    "class",
    "co_await",
    "co_return",
    "co_yield",
    "compl",
    "concept",
    "const",
    "const_cast",
    "consteval",
    "constexpr",
    "continue",
    "decltype",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "not",
    "not_eq",
    "nullptr",
    "operator",
    "or",
    "or_eq",
    "private",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "requires",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "static_cast",
    "struct",
    "switch",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
    "xor",
    "xor_eq",
];

/// Validate a proposed C++ identifier (component name or namespace).
///
/// Rejects empty input, forbidden punctuation and whitespace, identifiers
/// that do not start with a letter or single underscore, reserved-identifier
/// prefixes (`__` or `_` + uppercase), and C++ keywords.
pub fn validate_identifier(value: &str, field: &str) -> Result<()> {
    let mut chars = value.chars();
    let first = match chars.next() {
        None => {
            return Err(Error::validation_invalid_argument(
                field,
                "The name cannot be empty",
                None,
            ));
        }
        Some(c) => c,
    };

    if let Some(invalid) = value
        .chars()
        .find(|c| c.is_whitespace() || FORBIDDEN_CHARS.contains(c))
    {
        // Whitespace would render invisibly; show it escaped instead
        let shown = if invalid.is_whitespace() {
            format!("{:?}", invalid)
        } else {
            invalid.to_string()
        };
        return Err(Error::validation_invalid_argument(
            field,
            format!("The name contains invalid character: {}", shown),
            Some(value.to_string()),
        ));
    }

    let second_is_upper = chars.next().is_some_and(|c| c.is_uppercase());
    if !(first.is_alphabetic() || first == '_')
        || value.starts_with("__")
        || (first == '_' && second_is_upper)
    {
        return Err(Error::validation_invalid_argument(
            field,
            "The name must start with a letter or single underscore",
            Some(value.to_string()),
        ));
    }

    if CPP_KEYWORDS.contains(&value) {
        return Err(Error::validation_invalid_argument(
            field,
            format!("'{}' is a C++ keyword. Please choose a different name", value),
            Some(value.to_string()),
        ));
    }

    Ok(())
}
