//! Keyword collection handler.

use super::handler::{Handler, Keyword};

/// Accumulates keywords into an ordered key → values multimap.
///
/// Keys appear in first-encounter order; every value of a repeated key is
/// kept, in document order. Nothing is overwritten or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCollector {
    keywords: Vec<(String, Vec<String>)>,
}

impl KeywordCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values collected for `key`, in document order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.keywords
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.keywords
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Consume the collector, returning the ordered mapping.
    pub fn into_keywords(self) -> Vec<(String, Vec<String>)> {
        self.keywords
    }
}

impl Handler for KeywordCollector {
    fn keyword(&mut self, keyword: &Keyword) {
        match self.keywords.iter_mut().find(|(key, _)| key == &keyword.key) {
            Some((_, values)) => values.push(keyword.value.clone()),
            None => self
                .keywords
                .push((keyword.key.clone(), vec![keyword.value.clone()])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(key: &str, value: &str) -> Keyword {
        Keyword {
            key: key.into(),
            optional: None,
            value: value.into(),
        }
    }

    #[test]
    fn repeated_keys_keep_every_value_in_order() {
        let mut collector = KeywordCollector::new();
        collector.keyword(&kw("TITLE", "v1"));
        collector.keyword(&kw("FOO", "v2"));
        collector.keyword(&kw("TITLE", "v3"));

        assert_eq!(collector.get("TITLE"), Some(&["v1".to_string(), "v3".to_string()][..]));
        assert_eq!(collector.get("FOO"), Some(&["v2".to_string()][..]));

        let keys: Vec<&str> = collector.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["TITLE", "FOO"]);
    }

    #[test]
    fn duplicate_values_are_not_deduplicated() {
        let mut collector = KeywordCollector::new();
        collector.keyword(&kw("TAGS", "a"));
        collector.keyword(&kw("TAGS", "a"));
        assert_eq!(collector.get("TAGS").map(<[String]>::len), Some(2));
    }
}
