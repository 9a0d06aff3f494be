//! Fixed equivalence tables for Devanagari text typed on Kruti Dev layouts.

/// Nukta, removed entirely before comparison.
pub const NUKTA: char = '\u{093C}';
/// Chandra-bindu, folded onto the anusvar.
pub const CHANDRABINDU: char = '\u{0901}';
/// Anusvar, the canonical nasalization mark.
pub const ANUSVAR: char = '\u{0902}';
/// Virama (halant).
pub const VIRAMA: char = '\u{094D}';

/// Half-nasal + class consonant clusters and their anusvar spelling.
///
/// Each cluster is nasal consonant, virama, consonant of the same class.
pub const NASAL_CLUSTERS: [(&str, &str); 23] = [
    // labial म्
    ("म्ब", "ंब"),
    ("म्भ", "ंभ"),
    ("म्प", "ंप"),
    ("म्फ", "ंफ"),
    ("म्म", "ंम"),
    // dental न्
    ("न्त", "ंत"),
    ("न्थ", "ंथ"),
    ("न्द", "ंद"),
    ("न्ध", "ंध"),
    ("न्न", "ंन"),
    // retroflex ण्
    ("ण्ट", "ंट"),
    ("ण्ठ", "ंठ"),
    ("ण्ड", "ंड"),
    ("ण्ढ", "ंढ"),
    ("ण्ण", "ंण"),
    // velar ङ्
    ("ङ्क", "ंक"),
    ("ङ्ख", "ंख"),
    ("ङ्ग", "ंग"),
    ("ङ्घ", "ंघ"),
    // palatal ञ्
    ("ञ्च", "ंच"),
    ("ञ्छ", "ंछ"),
    ("ञ्ज", "ंज"),
    ("ञ्झ", "ंझ"),
];

/// Whole-word equivalence classes.
///
/// These spellings only match as complete words; the character rules alone
/// do not fold them together (e.g. `गिरफतार` lacks the virama).
pub const WORD_EXCEPTIONS: &[&[&str]] = &[
    &["गिरफ्तार", "गिरफ़्तार", "गिरफतार", "गिरफ़तार"],
    &["फैसला", "फ़ैसला"],
    &["जरूरत", "ज़रूरत"],
    &["सफर", "सफ़र"],
    &["कफन", "कफ़न"],
];

/// Kruti Dev alt-code glyphs and the keystroke sequences they stand for,
/// followed by visually confusable keys that render the same shape.
///
/// Order matters: expansions are applied before the single-key folds.
pub const LEGACY_GLYPHS: [(&str, &str); 14] = [
    ("ä", "Dr"),   // Alt+0228
    ("Ñ", "d`"),   // Alt+0209
    ("Ø", "dz"),   // Alt+0216
    ("Ù", "Rr"),   // Alt+0217
    ("˜", "n~n"),  // dda
    ("™", "n~`"),  // dha
    ("š", "n~o"),  // dva
    ("¶", "Q~"),   // ffa
    ("Ì", "n~nk"), // dda variant
    ("U", "a"),
    ("E", "a"),
    ("i", "a"),
    ("j", "a"),
    (".", "a"),
];
