// Random test data
//
// Field payload generators for data objects: identifier strings, emails,
// text blocks, colors, and known attack payloads for negative tests.
//
// Every generator has a `_with` variant taking the RNG, so tests can seed.

use rand::Rng;
use rand::distributions::Alphanumeric;

const WORDS: &[&str] = &[
    "amber", "basil", "cedar", "delta", "ember", "fable", "grove", "haven", "indigo", "juniper",
    "kestrel", "larch", "meadow", "nimbus", "ochre", "pine", "quartz", "raven", "sable", "thistle",
    "umber", "vesper", "willow", "yarrow", "zephyr",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "test.example.net"];

/// Known attack payloads for populating free-text fields in negative tests.
///
/// Covers script injection, SQL injection, path traversal, template
/// injection, and format-string probes. The table is stable: tests may
/// index into it.
pub const ATTACK_PAYLOADS: &[&str] = &[
    "<script>alert(1)</script>",
    "<img src=x onerror=alert(1)>",
    "'; DROP TABLE users; --",
    "\" OR \"1\"=\"1",
    "' OR 1=1 --",
    "../../../../etc/passwd",
    "..\\..\\..\\windows\\system32\\config\\sam",
    "{{7*7}}",
    "${7*7}",
    "%s%s%s%s%n",
    "\u{0000}",
    "\u{202e}gnp.exe",
];

/// Random alphanumeric string of the given length.
pub fn alphanumeric(len: usize) -> String {
    alphanumeric_with(&mut rand::thread_rng(), len)
}

pub fn alphanumeric_with<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Random lowercase-letter string of the given length.
pub fn lowercase(len: usize) -> String {
    lowercase_with(&mut rand::thread_rng(), len)
}

pub fn lowercase_with<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// Random digit string of the given length.
pub fn digits(len: usize) -> String {
    digits_with(&mut rand::thread_rng(), len)
}

pub fn digits_with<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'0'..=b'9') as char).collect()
}

/// Random plausible email address on a reserved example domain.
pub fn email() -> String {
    email_with(&mut rand::thread_rng())
}

pub fn email_with<R: Rng>(rng: &mut R) -> String {
    let user = WORDS[rng.gen_range(0..WORDS.len())];
    let suffix = digits_with(rng, 4);
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
    format!("{user}.{suffix}@{domain}")
}

/// `count` random words joined by spaces.
pub fn words(count: usize) -> String {
    words_with(&mut rand::thread_rng(), count)
}

pub fn words_with<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

/// One capitalized sentence of 6 to 12 words.
pub fn sentence() -> String {
    sentence_with(&mut rand::thread_rng())
}

pub fn sentence_with<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(6..=12);
    let body = words_with(rng, count);
    let mut chars = body.chars();
    let first = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or('A');
    format!("{first}{}.", chars.as_str())
}

/// A text block of the given number of sentences.
pub fn paragraph(sentences: usize) -> String {
    paragraph_with(&mut rand::thread_rng(), sentences)
}

pub fn paragraph_with<R: Rng>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| sentence_with(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Random CSS hex color, `#rrggbb`.
pub fn hex_color() -> String {
    hex_color_with(&mut rand::thread_rng())
}

pub fn hex_color_with<R: Rng>(rng: &mut R) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        rng.r#gen::<u8>(),
        rng.r#gen::<u8>(),
        rng.r#gen::<u8>()
    )
}

/// One payload from [`ATTACK_PAYLOADS`], chosen at random.
pub fn attack_payload() -> &'static str {
    attack_payload_with(&mut rand::thread_rng())
}

pub fn attack_payload_with<R: Rng>(rng: &mut R) -> &'static str {
    ATTACK_PAYLOADS[rng.gen_range(0..ATTACK_PAYLOADS.len())]
}
