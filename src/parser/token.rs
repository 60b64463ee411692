//! Name token families
//!
//! A raw name taken from a diagram line is one of three things: the
//! initial/final pseudostate marker `[*]`, a history marker (`[H]`, `[H*]`,
//! optionally prefixed by its owner as in `Owner[H*]`), or a plain name.

/// The initial/final pseudostate marker
pub const INITIAL_TOKEN: &str = "[*]";

/// Classified name token, borrowing from the raw line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameToken<'a> {
    /// `[*]`
    Initial,
    /// `[H]` / `[H*]`, with the owner name when one was written
    History {
        owner: Option<&'a str>,
        marker: &'a str,
    },
    /// Anything else
    Plain(&'a str),
}

impl<'a> NameToken<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.trim();
        if raw == INITIAL_TOKEN {
            return NameToken::Initial;
        }

        if let Some((owner, marker)) = split_history(raw) {
            return NameToken::History {
                owner: (!owner.is_empty()).then_some(owner),
                marker,
            };
        }

        NameToken::Plain(raw)
    }
}

/// Split `Owner[H*]` into `("Owner", "[H*]")`.
///
/// Matches when the token holds a bracket pair with an `H` between the
/// brackets. The owner part is trimmed and may be empty.
pub fn split_history(raw: &str) -> Option<(&str, &str)> {
    let open = raw.find('[')?;
    let close = open + raw[open..].find(']')?;
    if !raw[open + 1..close].contains('H') {
        return None;
    }
    Some((raw[..open].trim(), &raw[open..=close]))
}

/// Strip one pair of surrounding double quotes, if present.
pub fn unquote(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
}
