//! Remote id to HCL identifier mapping

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Spelled-out replacement for `.`
const DOT: &str = "dot";

/// Convert a remote id into a bare Terraform identifier
///
/// Each decimal digit `d` becomes the `d`-th letter of `A..Z` (`0 -> A`,
/// `9 -> J`), each `.` becomes `dot`, and everything else passes through.
/// The mapping is total but not injective: `"a0"` and `"aA"` both yield
/// `"aA"`. Callers that care must detect collisions on the output.
pub fn sanitize(raw: &str) -> String {
    let dots = raw.bytes().filter(|b| *b == b'.').count();
    let mut out = String::with_capacity(raw.len() + dots * (DOT.len() - 1));
    for c in raw.chars() {
        if c == '.' {
            out.extend(DOT.chars().map(remap));
        } else {
            out.push(remap(c));
        }
    }
    out
}

fn remap(c: char) -> char {
    match c.to_digit(10) {
        Some(d) => ALPHABET[d as usize] as char,
        None => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_letters() {
        assert_eq!(sanitize("0123456789"), "ABCDEFGHIJ");
    }

    #[test]
    fn test_object_id() {
        assert_eq!(sanitize("64de89736993ba01d4fc06ba"), "GEdeIJHDGJJDbaABdEfcAGba");
    }

    #[test]
    fn test_dot_becomes_word() {
        assert_eq!(sanitize("corp.bad-ips"), "corpdotbad-ips");
        assert_eq!(sanitize("site.tag.v2"), "sitedottagdotvC");
        assert_eq!(sanitize("."), "dot");
    }

    #[test]
    fn test_letters_pass_through() {
        assert_eq!(sanitize("LOGINATTEMPT"), "LOGINATTEMPT");
        assert_eq!(sanitize("www"), "www");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_length_without_dots_is_preserved() {
        for id in ["abc123", "5f3e2a", "ZZZ999zzz", "7"] {
            let out = sanitize(id);
            assert_eq!(out.chars().count(), id.chars().count(), "{id}");
            assert!(out.chars().all(|c| c.is_ascii_alphabetic()), "{out}");
        }
    }

    #[test]
    fn test_each_dot_adds_three_letters() {
        let id = "a.b1.c";
        let out = sanitize(id);
        assert_eq!(out.len(), id.len() - 2 + 2 * 3);
        assert_eq!(out, "adotbBdotc");
    }

    #[test]
    fn test_deterministic() {
        let id = "64de89736993ba01d4fc06ba";
        assert_eq!(sanitize(id), sanitize(id));
    }

    #[test]
    fn test_known_collision() {
        // Documented risk: a digit and its letter image are indistinguishable
        assert_eq!(sanitize("a0"), sanitize("aA"));
    }

    #[test]
    fn test_non_ascii_digits_pass_through() {
        assert_eq!(sanitize("x٣"), "x٣");
    }
}
