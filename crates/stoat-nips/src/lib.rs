//! Catalogue of published NIPs and their reference links.
//!
//! Display helpers for a relay's `supported_nips` list: each number gets a
//! fixed-width zero-padded label and, when the catalogue knows the NIP, a
//! link into the nips repository. Numbers the catalogue does not know are
//! dropped from display output entirely; callers that need the raw list
//! read it off the metadata record instead.

use url::Url;

const NIPS_REPO_BASE: &str = "https://github.com/nostr-protocol/nips/blob/master";

/// NIP numbers with a canonical document in the nips repository.
const KNOWN_NIPS: &[u32] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 42, 44, 45, 46, 47, 48, 49, 50,
    51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 64, 65, 68, 70, 71, 72, 73, 75, 78, 84, 86, 88,
    89, 90, 92, 94, 96, 98, 99,
];

/// Fixed-width label for a NIP number, zero-padded to two digits.
pub fn format_nip(nip: u32) -> String {
    format!("{nip:02}")
}

/// Canonical reference link for `nip`, if the catalogue knows one.
pub fn link(nip: u32) -> Option<Url> {
    if !KNOWN_NIPS.contains(&nip) {
        return None;
    }
    Url::parse(&format!("{NIPS_REPO_BASE}/{}.md", format_nip(nip))).ok()
}

/// A supported-NIP display entry: the number, its label, and its link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NipLink {
    pub nip: u32,
    pub label: String,
    pub url: Url,
}

/// Display entries for `nips` in their original order.
///
/// Lossy: numbers with no catalogue entry are dropped, duplicates are kept.
pub fn links(nips: &[u32]) -> Vec<NipLink> {
    nips.iter()
        .filter_map(|&nip| {
            link(nip).map(|url| NipLink {
                nip,
                label: format_nip(nip),
                url,
            })
        })
        .collect()
}

/// Labels of the entries [`links`] keeps, joined with `", "`.
pub fn display(nips: &[u32]) -> String {
    links(nips)
        .iter()
        .map(|entry| entry.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_zero_padded_to_two_digits() {
        assert_eq!(format_nip(1), "01");
        assert_eq!(format_nip(9), "09");
        assert_eq!(format_nip(11), "11");
        assert_eq!(format_nip(9999), "9999");
    }

    #[test]
    fn known_nip_links_into_the_nips_repository() {
        let url = link(1).unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.com/nostr-protocol/nips/blob/master/01.md"
        );
        assert!(link(42).unwrap().as_str().ends_with("/42.md"));
    }

    #[test]
    fn unknown_nip_has_no_link() {
        assert!(link(9999).is_none());
        assert!(link(0).is_none());
    }

    #[test]
    fn links_drop_unknown_numbers_and_keep_order() {
        let entries = links(&[1, 2, 9999]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].nip, 1);
        assert_eq!(entries[1].nip, 2);
    }

    #[test]
    fn display_joins_surviving_labels() {
        assert_eq!(display(&[1, 2, 9999]), "01, 02");
    }

    #[test]
    fn display_preserves_declared_order_and_duplicates() {
        assert_eq!(display(&[42, 1, 1, 11]), "42, 01, 01, 11");
    }

    #[test]
    fn display_of_nothing_is_empty() {
        assert_eq!(display(&[]), "");
        assert_eq!(display(&[9999]), "");
    }
}
