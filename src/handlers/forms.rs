/// Form structures shared by the HTML handlers.
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct UnlockForm {
    pub csrf_token: String,
    pub passphrase: String,
}

#[derive(Deserialize)]
pub struct PublishForm {
    pub csrf_token: String,
    pub title: String,
}

/// Raw `key=value` pairs of an urlencoded body.
///
/// Checkbox lists and multi-selects repeat the same key, which a plain struct
/// cannot capture, so those forms are read as pairs.
pub struct FormPairs(pub Vec<(String, String)>);

impl FormPairs {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn csrf_token(&self) -> &str {
        self.first("csrf_token").unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> FormPairs {
        FormPairs(
            raw.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn all_collects_repeated_keys_in_order() {
        let form = pairs(&[("time", "09:00"), ("date", "2026-03-01"), ("time", "14:00")]);
        assert_eq!(form.all("time").collect::<Vec<_>>(), vec!["09:00", "14:00"]);
        assert_eq!(form.first("date"), Some("2026-03-01"));
        assert_eq!(form.first("missing"), None);
        assert_eq!(form.csrf_token(), "");
    }
}
