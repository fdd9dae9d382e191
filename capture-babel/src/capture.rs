//! Capture requests
//!
//! A capture bundles an optional source URL, title, capture template key and
//! styled body. It is delivered to Emacs either as an `org-protocol://` URL or
//! as a clipboard message rendered in the target dialect.

use crate::dialect::DialectTag;
use crate::error::CaptureError;
use crate::ir::nodes::StyledDocument;
use crate::translate::translate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use url::Url;

/// Everything outside RFC 3986 unreserved characters is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const ACCEPTED_SCHEMES: &[&str] = &["http", "https", "file"];

/// True for absolute URLs using a scheme Emacs can open.
pub fn validate_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| ACCEPTED_SCHEMES.contains(&url.scheme()))
        .unwrap_or(false)
}

/// The content of one capture request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturePayload {
    pub url: Option<String>,
    pub title: Option<String>,
    pub template: Option<String>,
    pub body: Option<StyledDocument>,
}

impl CapturePayload {
    /// Build a payload from raw form fields. Blank fields are dropped, as is a
    /// URL that does not validate.
    pub fn from_fields(
        url: &str,
        title: &str,
        template: &str,
        body: Option<StyledDocument>,
    ) -> Self {
        let url = non_empty(url).filter(|url| {
            let valid = validate_url(url);
            if !valid {
                debug!(url = url.as_str(), "dropping invalid capture URL");
            }
            valid
        });
        Self {
            url,
            title: non_empty(title),
            template: non_empty(template),
            body: body.filter(|doc| !doc.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.title.is_none() && self.body.is_none()
    }
}

fn non_empty(field: &str) -> Option<String> {
    let field = field.trim();
    (!field.is_empty()).then(|| field.to_string())
}

/// The org-protocol sub-protocol a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrgProtocol {
    StoreLink,
    Capture,
}

impl OrgProtocol {
    pub fn name(self) -> &'static str {
        match self {
            OrgProtocol::StoreLink => "store-link",
            OrgProtocol::Capture => "capture",
        }
    }
}

impl fmt::Display for OrgProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrgProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "store-link" | "storelink" => Ok(OrgProtocol::StoreLink),
            "capture" => Ok(OrgProtocol::Capture),
            other => Err(format!("Unknown org-protocol '{other}'")),
        }
    }
}

/// The shape of a clipboard message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadKind {
    Link,
    Capture,
}

impl FromStr for PayloadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "link" => Ok(PayloadKind::Link),
            "capture" => Ok(PayloadKind::Capture),
            other => Err(format!("Unknown payload kind '{other}'")),
        }
    }
}

/// Build the `org-protocol://` URL for a request.
///
/// Query items are emitted in the order `url`, `title`, `template`, `body`.
/// `store-link` only carries the URL and title, and fails without a URL.
pub fn org_protocol_url(
    protocol: OrgProtocol,
    payload: &CapturePayload,
    dialect: DialectTag,
) -> Result<Url, CaptureError> {
    let mut items: Vec<(&str, String)> = Vec::new();

    match protocol {
        OrgProtocol::StoreLink => {
            let url = payload
                .url
                .clone()
                .ok_or(CaptureError::MissingUrl(OrgProtocol::StoreLink.name()))?;
            items.push(("url", url));
            if let Some(title) = &payload.title {
                items.push(("title", title.clone()));
            }
        }
        OrgProtocol::Capture => {
            if payload.is_empty() {
                return Err(CaptureError::EmptyPayload);
            }
            if let Some(url) = &payload.url {
                items.push(("url", url.clone()));
            }
            if let Some(title) = &payload.title {
                items.push(("title", title.clone()));
            }
            if let Some(template) = &payload.template {
                items.push(("template", template.clone()));
            }
            if let Some(body) = &payload.body {
                let body = translate(body, dialect);
                if !body.is_empty() {
                    items.push(("body", body));
                }
            }
        }
    }

    let query = items
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");

    let mut address = format!("org-protocol://{protocol}");
    if !query.is_empty() {
        address.push('?');
        address.push_str(&query);
    }
    debug!(%protocol, items = items.len(), "built org-protocol URL");

    Url::parse(&address).map_err(|err| CaptureError::InvalidUrl(format!("{address}: {err}")))
}

/// Render the clipboard message for a request, or `None` when there is
/// nothing to say.
pub fn message(kind: PayloadKind, payload: &CapturePayload, dialect: DialectTag) -> Option<String> {
    let syntax = dialect.dialect();
    match kind {
        PayloadKind::Link => payload
            .url
            .as_deref()
            .map(|url| syntax.link(url, payload.title.as_deref())),
        PayloadKind::Capture => {
            let mut lines = Vec::new();
            if let Some(title) = &payload.title {
                lines.push(syntax.header(title, 1));
            }
            if let Some(url) = &payload.url {
                lines.push(syntax.link(url, payload.title.as_deref()));
            }
            if let Some(body) = &payload.body {
                let body = translate(body, dialect);
                if !body.is_empty() {
                    lines.push(body);
                }
            }
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
    }
}
