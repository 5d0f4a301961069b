//! Test-only queries over rendered markup, in the spirit of
//! `getByTestId`: find an opening tag by its `data-testid`.

use std::collections::HashMap;

use regex::Regex;

#[derive(Debug)]
pub struct Element {
    pub tag: String,
    pub attrs: HashMap<String, String>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

pub fn query_all_by_test_id(html: &str, test_id: &str) -> Vec<Element> {
    let tag_re = Regex::new(r"<([a-zA-Z][a-zA-Z0-9]*)(\s[^>]*)?>").unwrap();
    let attr_re = Regex::new(r#"([a-zA-Z][a-zA-Z0-9-]*)(?:="([^"]*)")?"#).unwrap();
    tag_re
        .captures_iter(html)
        .filter_map(|cap| {
            let raw = cap.get(2).map(|m| m.as_str()).unwrap_or("");
            let attrs: HashMap<String, String> = attr_re
                .captures_iter(raw)
                .map(|a| {
                    let value = a.get(2).map(|m| m.as_str()).unwrap_or("");
                    (a[1].to_string(), value.to_string())
                })
                .collect();
            (attrs.get("data-testid").map(String::as_str) == Some(test_id)).then(|| Element {
                tag: cap[1].to_string(),
                attrs,
            })
        })
        .collect()
}

pub fn query_by_test_id(html: &str, test_id: &str) -> Option<Element> {
    query_all_by_test_id(html, test_id).into_iter().next()
}

pub fn get_by_test_id(html: &str, test_id: &str) -> Element {
    let mut found = query_all_by_test_id(html, test_id);
    assert_eq!(found.len(), 1, "expected exactly one element with data-testid={test_id}");
    found.remove(0)
}
