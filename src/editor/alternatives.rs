use crate::squads::CopySquad;

/// Replacement suggestions for one forbidden word, one list per squad.
struct AlternativeRow {
    word: &'static str,
    scientists: &'static [&'static str],
    storytellers: &'static [&'static str],
    provocateurs: &'static [&'static str],
}

const ALTERNATIVES: &[AlternativeRow] = &[
    AlternativeRow {
        word: "amazing",
        scientists: &["measurable", "proven", "consistent", "verified"],
        storytellers: &["unforgettable", "remarkable", "vivid"],
        provocateurs: &["undeniable", "unignorable"],
    },
    AlternativeRow {
        word: "revolutionary",
        scientists: &["novel", "first documented", "state of the art"],
        storytellers: &["life-changing", "a turning point"],
        provocateurs: &["rule-breaking", "heretical"],
    },
    AlternativeRow {
        word: "incredible",
        scientists: &["significant", "substantial", "demonstrated"],
        storytellers: &["breathtaking", "moving"],
        provocateurs: &["outrageous", "indefensible to ignore"],
    },
    AlternativeRow {
        word: "game-changing",
        scientists: &["outcome-shifting", "category-leading by the numbers"],
        storytellers: &["the moment everything turned"],
        provocateurs: &["the end of the old playbook"],
    },
    AlternativeRow {
        word: "best",
        scientists: &["highest-rated", "top-ranked in independent tests"],
        storytellers: &["the one people come back to"],
        provocateurs: &["the only serious option"],
    },
];

/// Static word-alternative suggester keyed by forbidden word and squad.
/// Returns an empty list for words the table does not cover.
pub fn suggest_alternatives(word: &str, squad: CopySquad) -> Vec<&'static str> {
    ALTERNATIVES
        .iter()
        .find(|row| row.word.eq_ignore_ascii_case(word))
        .map(|row| match squad {
            CopySquad::Scientists => row.scientists.to_vec(),
            CopySquad::Storytellers => row.storytellers.to_vec(),
            CopySquad::Provocateurs => row.provocateurs.to_vec(),
        })
        .unwrap_or_default()
}
