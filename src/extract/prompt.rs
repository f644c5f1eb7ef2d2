// src/extract/prompt.rs

/// First `max_chars` characters of `s`, cut on a char boundary.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// The fixed extraction instruction with the page URL and markup embedded.
pub fn build_prompt(url: &str, html: &str) -> String {
    format!(
        "Extract art exhibition information from this webpage. Return ONLY a JSON object with these exact fields:
- venue_name: The name of the gallery or venue
- title: The title of the exhibition
- start_date: The start date of the exhibition (format: YYYY-MM-DD)
- end_date: The end date of the exhibition (format: YYYY-MM-DD)
- website: The URL ({url})

If any field cannot be determined, use an empty string \"\".

HTML content:
{html}"
    )
}
