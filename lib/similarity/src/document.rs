// Token documents from comma-joined catalog fields

/// Split a comma-joined field (genre tags, participant ids) into tokens.
///
/// Empty pieces are dropped, so `""` and `"a,,b"` behave as expected.
pub fn tokens_from_field(field: &str) -> Vec<String> {
    field
        .split(',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokens of several fields concatenated into one document.
pub fn document_from_fields<'a, I>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    fields.into_iter().flat_map(tokens_from_field).collect()
}
