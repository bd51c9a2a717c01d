use phf::{Map, phf_map};
use std::collections::BTreeMap;

/// Canonical token of a translation-termination codon.
pub const STOP_TOKEN: char = 'z';

static CODE_TABLE: Map<&'static str, char> = phf_map! {
    "Ala" => 'a', "Arg" => 'r', "Asn" => 'n', "Asp" => 'd', "Cys" => 'c',
    "Gln" => 'q', "Glu" => 'e', "Gly" => 'g', "His" => 'h', "Ile" => 'i',
    "Leu" => 'l', "Lys" => 'k', "Met" => 'm', "Phe" => 'f', "Pro" => 'p',
    "Ser" => 's', "Thr" => 't', "Trp" => 'w', "Tyr" => 'y', "Val" => 'v',
    "Ter" => 'z',
    "A" => 'a', "R" => 'r', "N" => 'n', "D" => 'd', "C" => 'c',
    "Q" => 'q', "E" => 'e', "G" => 'g', "H" => 'h', "I" => 'i',
    "L" => 'l', "K" => 'k', "M" => 'm', "F" => 'f', "P" => 'p',
    "S" => 's', "T" => 't', "W" => 'w', "Y" => 'y', "V" => 'v',
    "Z" => 'z',
};

/// Returns the canonical token for `code`.
///
/// Keys are case-sensitive (`"Ala"`, `"A"`). Anything else falls back to the lowercased
/// input, so an already canonical token such as `"a"` maps to itself.
pub fn lookup(code: &str) -> String {
    match CODE_TABLE.get(code) {
        Some(token) => token.to_string(),
        None => code.to_lowercase(),
    }
}

/// Whether `code` is a table key or one of the canonical tokens.
pub fn is_recognized(code: &str) -> bool {
    CODE_TABLE.contains_key(code) || is_canonical_token(code)
}

/// The single-character canonical token of a recognized code.
pub fn canonical(code: &str) -> Option<char> {
    if let Some(&token) = CODE_TABLE.get(code) {
        return Some(token);
    }
    if is_canonical_token(code) {
        return code.chars().next();
    }
    None
}

/// Whether `code` is recognized and denotes a termination codon.
pub fn is_stop(code: &str) -> bool {
    canonical(code) == Some(STOP_TOKEN)
}

/// Every canonical token with the codes that map to it, ordered by token.
pub fn codes_by_token() -> BTreeMap<char, Vec<&'static str>> {
    let mut grouped: BTreeMap<char, Vec<&'static str>> = BTreeMap::new();
    for (code, token) in CODE_TABLE.entries() {
        grouped.entry(*token).or_default().push(code);
    }
    for codes in grouped.values_mut() {
        codes.sort_by_key(|code| std::cmp::Reverse(code.len()));
    }
    grouped
}

fn is_canonical_token(code: &str) -> bool {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => CODE_TABLE.values().any(|&token| token == c),
        _ => false,
    }
}
