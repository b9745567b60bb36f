//! Instruction translator
//!
//! Rewrites English routing instructions into Spanish with an ordered
//! phrase/word substitution table. Entries are applied strictly in table
//! order, and compound phrases must come before the words they contain or
//! "turn left" would be split into "turn" and "left" first.
//!
//! Substitution is plain text replacement, so the output is deterministic
//! but not idempotent: a replacement can produce text that a later entry
//! matches again.

/// Ordered (English, Spanish) substitution pairs
const TRANSLATIONS: &[(&str, &str)] = &[
    // Compound phrases
    ("keep left", "mantente a la izquierda"),
    ("keep right", "mantente a la derecha"),
    ("turn left", "gira a la izquierda"),
    ("turn right", "gira a la derecha"),
    ("slight left", "levemente a la izquierda"),
    ("slight right", "levemente a la derecha"),
    ("sharp left", "cerrado a la izquierda"),
    ("sharp right", "cerrado a la derecha"),
    ("u-turn", "da vuelta en U"),
    ("and take", "y toma"),
    ("take the", "toma la"),
    // Single words
    ("towards", "hacia"),
    ("toward", "hacia"),
    ("onto", "hacia"),
    ("continue", "continúa"),
    ("arrive", "llega"),
    ("destination", "destino"),
    ("roundabout", "rotonda"),
    ("exit", "salida"),
    ("enter", "entra"),
    ("ferry", "ferry"),
    ("merge", "incorpórate"),
    ("ramp", "rampa"),
    ("fork", "bifurcación"),
    ("straight", "recto"),
    ("uturn", "da vuelta en U"),
    ("left", "izquierda"),
    ("right", "derecha"),
    ("keep", "mantente"),
    ("turn", "gira"),
    ("take", "toma"),
    ("and", "y"),
    ("the", "la"),
    ("at", "en"),
    ("to", "a"),
    ("for", "por"),
];

/// Translate one routing instruction to Spanish
///
/// For each table entry, a capitalized occurrence at the very start of the
/// text is replaced by the capitalized target, then every lowercase
/// occurrence anywhere is replaced. Matching is case-sensitive.
#[must_use]
pub fn translate(text: &str) -> String {
    let mut translated = text.to_string();

    for &(source, target) in TRANSLATIONS {
        let capitalized_source = capitalize(source);
        if let Some(rest) = translated.strip_prefix(&capitalized_source) {
            translated = format!("{}{rest}", capitalize(target));
        }
        if translated.contains(source) {
            translated = translated.replace(source, target);
        }
    }

    translated
}

/// Upper-case the first character and lower-case the rest
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
