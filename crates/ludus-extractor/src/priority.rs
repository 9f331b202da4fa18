//! Hand-curated priority records
//!
//! These rows are served ahead of the lexicon file so that they win
//! duplicate resolution against the file's own rows for the same words.
//! They cover the irregular verbs, the core pronouns and numerals, and a
//! few common words the lexicon lists in an unhelpful form.

use ludus_domain::{LexicalRecord, PartOfSpeech};

/// Stems, part of speech, code, gloss
type PriorityRow = (&'static [&'static str], PartOfSpeech, &'static str, &'static str);

const PRIORITY_ROWS: &[PriorityRow] = &[
    (&["su", "es", "fu", "fut"], PartOfSpeech::Verb, "5 1 TO_BEING", "be; exist; (also used to form verb perfect passive tenses) with NOM PERF PPL"),
    (&["poss", "pot", "potu", "zzz"], PartOfSpeech::Verb, "5 2 TO_BEING", "be able, can; [multum posse => have much/more/most influence/power]"),
    (&["vol", "vel", "volu", "zzz"], PartOfSpeech::Verb, "6 2", "wish, want, prefer; be willing, will"),
    (&["nol", "nol", "nolu", "zzz"], PartOfSpeech::Verb, "6 2", "be unwilling; wish not; refuse"),
    (&["mal", "mal", "malu", "zzz"], PartOfSpeech::Verb, "6 2", "prefer; incline toward, wish rather"),
    (&["e", "i", "iv", "it"], PartOfSpeech::Verb, "6 1", "go, walk; march, advance; pass; flow; pass (time); ride; sail"),
    (&["fer", "fer", "tul", "lat"], PartOfSpeech::Verb, "3 2 TRANS", "bring, bear; tell/speak of; consider; carry off, win, receive, produce; get"),
    (&["ed", "ed", "ed", "es"], PartOfSpeech::Verb, "3 1 TRANS", "eat, consume; devour"),
    (&["ed", "ed", "ed", "ess"], PartOfSpeech::Verb, "3 1 TRANS", "eat, consume; devour"),
    (&["fi", "f", "zzz", "fact"], PartOfSpeech::Verb, "3 3 SEMIDEP", "happen, come about; result; be made/done; become"),
    (&["inqu", "inqu", "zzz", "zzz"], PartOfSpeech::Verb, "7 1", "say (inserted in direct speech)"),
    (&["ai", "a", "zzz", "zzz"], PartOfSpeech::Verb, "7 2", "say, assert; say yes"),
    (&["zzz", "zzz", "memin", "zzz"], PartOfSpeech::Verb, "1 1 PERFDEF", "remember, recollect; be mindful of"),
    (&["zzz", "zzz", "od", "os"], PartOfSpeech::Verb, "1 1 PERFDEF", "hate, dislike; be disinclined/reluctant/averse to"),
    (&["con", "con", "zzz", "conat"], PartOfSpeech::Verb, "1 1 DEP", "attempt, try, endeavor, venture"),
    (&["im", "im", "ima", "imum"], PartOfSpeech::Adjective, "1 1", "lowest, deepest; bottom of; last"),
    (&["ego", "mei"], PartOfSpeech::Pronoun, "5 1", "I, me; myself"),
    (&["tu", "tui"], PartOfSpeech::Pronoun, "5 1", "you (sing.); thou/thine/thee/thy"),
    (&["hic", "haec", "hoc"], PartOfSpeech::Pronoun, "3 1", "this; these; he/she/it, they"),
    (&["ille", "illa", "illud"], PartOfSpeech::Pronoun, "9 8", "that; those; he/she/it, they"),
    (&["is", "ea", "id"], PartOfSpeech::Pronoun, "4 1", "he/she/it/they (by GENDER/NUMBER); that"),
    (&["qui", "quae", "quod"], PartOfSpeech::Pronoun, "1 0", "who, which, what; that"),
    (&["du", "du", "du", "du"], PartOfSpeech::Numeral, "2 2", "two"),
    (&["tre", "tre", "tre", "tre"], PartOfSpeech::Numeral, "3 3", "three"),
    (&["iam"], PartOfSpeech::Adverb, "", "now, already, by this time; soon, at once"),
];

/// The priority records, in serving order
pub fn priority_records() -> Vec<LexicalRecord> {
    PRIORITY_ROWS
        .iter()
        .map(|(stems, pos, code, gloss)| {
            LexicalRecord::new(
                stems.iter().map(|stem| stem.to_string()).collect(),
                *pos,
                *code,
                None,
                *gloss,
            )
        })
        .collect()
}
