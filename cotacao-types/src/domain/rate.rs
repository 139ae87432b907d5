//! Exchange rate domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency-pair quotation as returned by the upstream rate API.
///
/// `bid` is carried as opaque text: it is never parsed into a number, so the
/// upstream precision and formatting survive untouched all the way to the
/// database row and the client file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency symbol, e.g. "USD".
    #[serde(default)]
    pub code: String,
    /// Target currency symbol, e.g. "BRL".
    #[serde(default)]
    pub codein: String,
    /// Human-readable pair label.
    #[serde(default)]
    pub name: String,
    pub bid: String,
}

impl ExchangeRate {
    pub fn new(
        code: impl Into<String>,
        codein: impl Into<String>,
        name: impl Into<String>,
        bid: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            codein: codein.into(),
            name: name.into(),
            bid: bid.into(),
        }
    }
}

/// Renders as `{code:USD codein:BRL name:... bid:5.00}`.
///
/// Downstream readers of `cotacao.txt` depend on this exact field order.
/// Each value is prefixed with its field name; the plain positional form
/// (`{USD BRL ... 5.00}`) is not produced, so readers expecting that layout
/// must strip the `code:`/`codein:`/`name:`/`bid:` prefixes.
impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{code:{} codein:{} name:{} bid:{}}}",
            self.code, self.codein, self.name, self.bid
        )
    }
}

/// A persisted row of the `exchange_rate` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRate {
    pub id: i64,
    pub bid: String,
}
