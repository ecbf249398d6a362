//! Cookie-string parsing for the anti-forgery token. The browser exposes
//! cookies as a single `name=value; name2=value2` string.

/// Returns the first value for `name` in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::cookie_value;

    #[test]
    fn finds_cookie_among_others() {
        let cookies = "theme=dark; csrftoken=Zx9aQ; sessionid=ignored";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("Zx9aQ"));
    }

    #[test]
    fn returns_none_when_absent_or_empty() {
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("theme=dark", "csrftoken"), None);
    }

    #[test]
    fn does_not_match_name_prefixes() {
        let cookies = "xcsrftoken=wrong; csrftoken=right";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("right"));
    }

    #[test]
    fn keeps_equals_signs_inside_the_value() {
        let cookies = "csrftoken=a=b=c";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("a=b=c"));
    }
}
