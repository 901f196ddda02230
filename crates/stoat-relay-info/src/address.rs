use url::Url;

use crate::error::RelayInfoError;

/// Translate a relay address into the URL its metadata document is served at.
///
/// The first `wss://` becomes `https://`, then the first `ws://` becomes
/// `http://`; host, port, and path carry over untouched. The substitution is
/// a literal substring replace, not anchored to the scheme position.
pub fn metadata_url(relay: &str) -> Result<Url, RelayInfoError> {
    let translated = relay.replacen("wss://", "https://", 1);
    let translated = translated.replacen("ws://", "http://", 1);
    Ok(Url::parse(&translated)?)
}
