//! Boundary-sensitive mention scanner
//!
//! Hand-written character-class scanner rather than a single regex: the sigil
//! boundary rule, the quoted-content reader and the unquoted-run reader are
//! each small enough to test independently.

use super::model::Mention;
use tracing::trace;

/// Characters allowed in an unquoted mention id.
///
/// Embedded `@` supports email-like ids (`foo@bar.com`) and doubled-sigil ids
/// (`@@chef` yields the id `@chef`); dots and hyphens support domains and
/// UUID-like tokens.
fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '@')
}

/// A sigil only starts a mention when the preceding character is absent,
/// whitespace, or non-connector punctuation. Alphanumeric predecessors rule
/// out `@` inside words and emails; `/` rules out URL path segments such as
/// `.../@oil`.
fn is_valid_boundary(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => !c.is_alphanumeric() && c != '/',
    }
}

/// Whether quoted content names a guest: the literal prefix `guest/` followed
/// by one or more non-whitespace characters.
fn is_guest_token(content: &str) -> bool {
    content
        .strip_prefix("guest/")
        .map_or(false, |rest| {
            !rest.is_empty() && !rest.chars().any(char::is_whitespace)
        })
}

/// Keep the first occurrence of each `(kind, id)` pair.
fn push_unique(mentions: &mut Vec<Mention>, mention: Mention) {
    if !mentions.contains(&mention) {
        mentions.push(mention);
    }
}

/// Scan a message left-to-right and extract its mention references.
///
/// A mention starts at a `@` sigil on a valid boundary and takes one of two
/// forms: `@"<content>"`, classified as guest when the content is a
/// `guest/`-prefixed token and as user otherwise, or a maximal unquoted run
/// of id characters, always classified as user. Results are deduplicated by
/// `(kind, id)` preserving first-occurrence order.
///
/// The scanner never fails; malformed or absent mentions contribute nothing.
pub fn extract_mentions(message: &str) -> Vec<Mention> {
    let chars: Vec<char> = message.chars().collect();
    let mut mentions: Vec<Mention> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '@' {
            i += 1;
            continue;
        }

        let prev = if i == 0 { None } else { Some(chars[i - 1]) };
        if !is_valid_boundary(prev) {
            i += 1;
            continue;
        }

        if chars.get(i + 1) == Some(&'"') {
            // Quoted form: everything up to the closing quote
            match chars[i + 2..].iter().position(|&c| c == '"') {
                Some(offset) => {
                    let end = i + 2 + offset;
                    let content: String = chars[i + 2..end].iter().collect();
                    if !content.is_empty() {
                        let mention = if is_guest_token(&content) {
                            Mention::guest(content)
                        } else {
                            Mention::user(content)
                        };
                        push_unique(&mut mentions, mention);
                    }
                    i = end + 1;
                }
                None => {
                    // Unterminated quote, not a mention
                    i += 1;
                }
            }
            continue;
        }

        // Unquoted form: maximal run of id characters after the sigil. The
        // stop character is not consumed; characters inside the run are never
        // re-scanned as new sigils.
        let start = i + 1;
        let mut end = start;
        while end < chars.len() && is_id_char(chars[end]) {
            end += 1;
        }

        if end > start {
            let id: String = chars[start..end].iter().collect();
            push_unique(&mut mentions, Mention::user(id));
            i = end;
        } else {
            i += 1;
        }
    }

    trace!("extracted {} mentions", mentions.len());
    mentions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn users(ids: &[&str]) -> Vec<Mention> {
        ids.iter().copied().map(Mention::user).collect()
    }

    #[test]
    fn test_simple_mentions() {
        assert_eq!(
            extract_mentions("@alice @bob look look, a cook!"),
            users(&["alice", "bob"])
        );
    }

    #[test]
    fn test_no_mentions() {
        assert_eq!(extract_mentions("no mentions in this message"), vec![]);
        assert_eq!(extract_mentions(""), vec![]);
    }

    #[test]
    fn test_duplicates_collapsed_in_first_seen_order() {
        assert_eq!(
            extract_mentions("@alice @bob look look, a duplication @alice test @bob!"),
            users(&["alice", "bob"])
        );
    }

    #[test]
    fn test_emails_and_urls() {
        let message = "@foobar and @barfoo you should know, @foo@bar.com is valid \
                       and so is @bar@foo.org@foobar.io I hope that clarifies everything. \
                       cc @23452-4333-54353-2342 @yolo! \
                       however the most important thing to know is that \
                       www.croissant.com/@oil is not valid and won't match anything at all";

        assert_eq!(
            extract_mentions(message),
            users(&[
                "foobar",
                "barfoo",
                "foo@bar.com",
                "bar@foo.org@foobar.io",
                "23452-4333-54353-2342",
                "yolo",
            ])
        );
    }

    #[test]
    fn test_doubled_sigil() {
        assert_eq!(
            extract_mentions("@@chef is also a valid mention, no matter how strange it looks"),
            users(&["@chef"])
        );
    }

    #[test]
    fn test_quoted_mention_with_spaces() {
        assert_eq!(
            extract_mentions("Also @\"user with spaces\" are now supported"),
            users(&["user with spaces"])
        );
    }

    #[test]
    fn test_quoted_guest_mention() {
        assert_eq!(
            extract_mentions("Also @\"guest/0123456789abcdef\" are now supported"),
            vec![Mention::guest("guest/0123456789abcdef")]
        );
    }

    #[test]
    fn test_sigil_inside_url_path_is_ignored() {
        assert_eq!(extract_mentions("see www.croissant.com/@oil for details"), vec![]);
    }

    #[test]
    fn test_sigil_after_alphanumeric_is_ignored() {
        assert_eq!(extract_mentions("mail me at foo@bar.com"), vec![]);
    }

    #[test]
    fn test_sigil_after_punctuation_is_valid() {
        assert_eq!(extract_mentions("(@alice)"), users(&["alice"]));
        assert_eq!(extract_mentions("hey,@bob!"), users(&["bob"]));
    }

    #[test]
    fn test_bare_sigil_yields_nothing() {
        assert_eq!(extract_mentions("a lonely @ sigil"), vec![]);
        assert_eq!(extract_mentions("@!"), vec![]);
        assert_eq!(extract_mentions("@"), vec![]);
    }

    #[test]
    fn test_unterminated_quote_yields_nothing() {
        assert_eq!(extract_mentions("@\"never closed"), vec![]);
    }

    #[test]
    fn test_empty_quotes_yield_nothing() {
        assert_eq!(extract_mentions("@\"\" and nothing else"), vec![]);
    }

    #[test]
    fn test_quoted_guest_with_whitespace_is_a_user() {
        // Not a guest token: whitespace after the prefix
        assert_eq!(
            extract_mentions("@\"guest/has space\""),
            users(&["guest/has space"])
        );
    }

    #[test]
    fn test_quoted_bare_guest_prefix_is_a_user() {
        assert_eq!(extract_mentions("@\"guest/\""), users(&["guest/"]));
    }

    #[test]
    fn test_unquoted_guest_prefix_stops_at_slash() {
        // '/' is not an id character, so only the prefix is captured
        assert_eq!(extract_mentions("@guest/abc"), users(&["guest"]));
    }

    #[test]
    fn test_duplicate_quoted_guests_collapse() {
        assert_eq!(
            extract_mentions("@\"guest/abc\" again @\"guest/abc\""),
            vec![Mention::guest("guest/abc")]
        );
    }

    #[test]
    fn test_trailing_period_is_part_of_the_id() {
        assert_eq!(extract_mentions("ping @alice."), users(&["alice."]));
    }

    #[test]
    fn test_unicode_ids() {
        assert_eq!(extract_mentions("servus @jürgen!"), users(&["jürgen"]));
    }

    #[test]
    fn test_scan_is_deterministic() {
        let message = "@alice @\"guest/abc\" @bob @alice";
        assert_eq!(extract_mentions(message), extract_mentions(message));
    }
}
