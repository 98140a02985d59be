//! Identifier derivation from header text and cell values
//!
//! Every function here is total: any input, including the empty string,
//! yields a (possibly empty) identifier.

/// Characters rewritten when deriving a class name, with their replacement.
const CLASS_NAME_TABLE: &[(char, &str)] = &[
    (' ', "_"),
    ('*', ""),
    ('#', ""),
    ('\\', ""),
    ('/', "_"),
    ('|', "_"),
    ('(', "_"),
    (')', "_"),
];

/// Characters rewritten when deriving a column report file name.
const REPORT_BASENAME_TABLE: &[(char, &str)] = &[
    (' ', ""),
    ('*', ""),
    ('\\', ""),
    ('/', "_"),
    ('|', "_"),
    ('(', "_"),
    (')', "_"),
];

/// Derive a field name: ASCII alphanumerics only, lowercased.
///
/// Punctuation and non-ASCII characters are stripped, whitespace is removed.
///
/// ```
/// use schema_profiler::inference::derive_attribute_name;
///
/// assert_eq!(derive_attribute_name("Sample ID (#)"), "sampleid");
/// ```
pub fn derive_attribute_name(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Derive an UpperCamelCase type name from header text.
///
/// ```
/// use schema_profiler::inference::derive_class_name;
///
/// assert_eq!(derive_class_name("sample type/kind"), "SampleTypeKind");
/// ```
pub fn derive_class_name(text: &str) -> String {
    let snake = apply_table(text, CLASS_NAME_TABLE);
    snake.split('_').map(capitalize).collect()
}

/// Derive the file-name stem used for a column's report.
pub fn derive_report_basename(text: &str) -> String {
    apply_table(text, REPORT_BASENAME_TABLE)
}

/// Derive the symbolic enum member name for a raw cell value.
///
/// Names that would be a single character, empty, or start with a digit are
/// qualified with the uppercased class name so that they remain legal and
/// unambiguous identifiers.
pub fn derive_enum_member_name(value: &str, class_name: &str) -> String {
    let member = derive_attribute_name(value).to_uppercase();

    let needs_prefix = member.chars().count() <= 1
        || member.chars().next().is_some_and(|c| c.is_ascii_digit());

    if needs_prefix {
        format!("{}_{}", class_name.to_uppercase(), member)
    } else {
        member
    }
}

fn apply_table(text: &str, table: &[(char, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// First character uppercased, remainder lowercased.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
