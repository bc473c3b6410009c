/// Normalize a raw date-of-birth value to `DD-MM-YYYY`.
///
/// Accepts `-` or `/` between day, month and year tokens. A `"00"` day or
/// month token means "unknown" in the source convention and is substituted
/// with `"01"` — a documented lossy rewrite, not date inference. Day and
/// month are zero-padded to width 2.
///
/// Returns `None` for anything that cannot be assembled into the exact
/// output shape: wrong token count, non-numeric or over-long day/month,
/// a year that is not four digits, or a blank value. The result is never
/// a partially-formed date string.
pub fn normalize_dob(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    let value = value.replace('-', "/");
    let mut tokens = value.split('/');
    let day = day_or_month(tokens.next()?)?;
    let month = day_or_month(tokens.next()?)?;
    let year = tokens.next()?.trim();
    if tokens.next().is_some() {
        return None;
    }
    if year.len() != 4 || !year.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    Some(format!("{day}-{month}-{year}"))
}

fn day_or_month(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() || token.len() > 2 || !token.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    // "00" marks an unknown component in the source data.
    let token = if token == "00" { "01" } else { token };
    Some(format!("{token:0>2}"))
}
