//! Cookie Parsing and Session-Cookie Relay
//!
//! Splits backend `Set-Cookie` values into structured descriptors and
//! rebuilds the one session cookie the gateway relays to the browser. This
//! is deliberately not a general cookie jar: of all cookies a backend
//! response may set, only the expected session cookie is applied.

use http::{HeaderMap, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }

    /// Case-insensitive parse; unrecognized values yield `None`
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "strict" => Some(SameSite::Strict),
            "lax" => Some(SameSite::Lax),
            "none" => Some(SameSite::None),
            _ => None,
        }
    }
}

/// Attributes carried by one `Set-Cookie` value
///
/// Everything is optional; the relay applies defaults for whatever the
/// backend omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CookieOptions {
    pub http_only: Option<bool>,
    pub secure: Option<bool>,
    pub same_site: Option<SameSite>,
    pub max_age: Option<i64>,
    pub path: Option<String>,
    pub domain: Option<String>,
}

/// One parsed `Set-Cookie` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub options: CookieOptions,
}

impl SetCookie {
    /// Rebuild a `Set-Cookie` header value for the gateway's own response
    ///
    /// Defaults mirror what the backend is assumed to mean when it omits an
    /// attribute: `HttpOnly`, not `Secure`, `SameSite=Lax`, `Path=/`.
    pub fn to_header_value(&self) -> String {
        let mut parts = vec![format!("{}={}", self.name, self.value)];

        if self.options.http_only.unwrap_or(true) {
            parts.push("HttpOnly".to_string());
        }
        if self.options.secure.unwrap_or(false) {
            parts.push("Secure".to_string());
        }
        parts.push(format!(
            "SameSite={}",
            self.options.same_site.unwrap_or_default().as_str()
        ));
        parts.push(format!(
            "Path={}",
            self.options.path.as_deref().unwrap_or("/")
        ));
        if let Some(max_age) = self.options.max_age {
            parts.push(format!("Max-Age={max_age}"));
        }
        if let Some(domain) = &self.options.domain {
            parts.push(format!("Domain={domain}"));
        }

        parts.join("; ")
    }
}

/// Parse one `Set-Cookie`-style string
///
/// The first `;` segment is the name=value pair, split on the first `=`
/// only. Remaining segments are matched case-insensitively; unrecognized
/// attributes and unparsable values are silently ignored so future
/// attributes cannot break the relay.
pub fn parse_set_cookie(raw: &str) -> Option<SetCookie> {
    let mut segments = raw.split(';').map(str::trim);

    let (name, value) = segments.next()?.split_once('=')?;
    if name.is_empty() {
        return None;
    }

    let mut options = CookieOptions::default();
    for segment in segments {
        let lowered = segment.to_ascii_lowercase();
        if lowered == "httponly" {
            options.http_only = Some(true);
        } else if lowered.starts_with("secure") {
            options.secure = Some(true);
        } else if let Some(v) = lowered.strip_prefix("samesite=") {
            if let Some(same_site) = SameSite::parse(v) {
                options.same_site = Some(same_site);
            }
        } else if let Some(v) = lowered.strip_prefix("max-age=") {
            if let Ok(max_age) = v.parse::<i64>() {
                options.max_age = Some(max_age);
            }
        } else if lowered.starts_with("path=") {
            // slice the original so value case survives
            options.path = Some(segment["path=".len()..].to_string());
        } else if lowered.starts_with("domain=") {
            options.domain = Some(segment["domain=".len()..].to_string());
        }
    }

    Some(SetCookie {
        name: name.to_string(),
        value: value.to_string(),
        options,
    })
}

/// Pick the expected session cookie out of a flattened `Set-Cookie` header
///
/// The header bag joins multi-valued headers with `", "`; each candidate is
/// parsed on its own and only the one matching `expected_name` survives.
pub fn find_session_cookie(joined: &str, expected_name: &str) -> Option<SetCookie> {
    joined
        .split(", ")
        .filter_map(parse_set_cookie)
        .find(|cookie| cookie.name == expected_name)
}

/// Extract a cookie value from a request `Cookie` header
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

/// Build a `Set-Cookie` value that deletes the named cookie
pub fn clear_cookie_value(name: &str) -> String {
    format!("{name}=; HttpOnly; Path=/; Max-Age=0")
}
