use chrono::Utc;

/// Reserved token names injected into every non-`None` replacement call.
pub const DATETIME_TOKEN: &str = "DATETIME";
pub const DATE_TOKEN: &str = "DATE";
pub const TIME_TOKEN: &str = "TIME";

/// Literal marker a theme must contain for template content to be wrapped in.
pub const BODY_MARKER: &str = "$BODY$";

/// An insertion-ordered set of token values.
///
/// Names are case-insensitive: a token inserted as `name` replaces the
/// marker `$NAME$`, and re-inserting an existing name updates its value in
/// place without changing its position. Replacement order follows insertion
/// order, which is observable (see [`replace_tokens`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    entries: Vec<(String, String)>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token value. If the name is already present (case-insensitive)
    /// the value is updated in place and the original position is kept.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Appends a token only when the name is not already present.
    fn ensure(&mut self, name: &str, value: String) {
        if !self.contains(name) {
            self.entries.push((name.to_string(), value));
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TokenMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Replaces `$TOKEN$` markers in `content` with the supplied values.
///
/// `None` returns the content unchanged; no reserved tokens are injected.
/// With `Some`, the reserved `DATETIME`, `DATE` and `TIME` tokens are
/// appended (current UTC instant, culture-neutral formats) unless the caller
/// already supplied them, then the map is applied in insertion order. Each
/// step replaces every occurrence of `"$" + UPPERCASE(name) + "$"` in the
/// current string, so a substituted value that itself contains another
/// token's marker is re-matched by a later iteration. This order dependence
/// is intentional and relied upon; callers who need literal `$` text in
/// values should avoid marker-shaped substrings.
pub fn replace_tokens(content: &str, tokens: Option<&TokenMap>) -> String {
    let Some(tokens) = tokens else {
        return content.to_string();
    };

    let now = Utc::now();
    let mut working = tokens.clone();
    working.ensure(DATETIME_TOKEN, now.format("%m/%d/%Y %H:%M:%S").to_string());
    working.ensure(DATE_TOKEN, now.format("%m/%d/%Y").to_string());
    working.ensure(TIME_TOKEN, now.format("%H:%M").to_string());

    let mut result = content.to_string();
    for (name, value) in working.iter() {
        let marker = format!("${}$", name.to_uppercase());
        result = result.replace(&marker, value);
    }
    result
}
