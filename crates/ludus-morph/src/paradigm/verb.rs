//! Conjugation tables

use ludus_domain::Mood::{Imperative, Indicative, Subjunctive};
use ludus_domain::Tense::{Future, FuturePerfect, Imperfect, Perfect, Pluperfect, Present};
use ludus_domain::{
    Conjugation, Gap, GapScope, LexicalRecord, Mood, NonFinite, NonFiniteForm, ParadigmTable,
    Person, PersonForms, Tense, TenseRow, Valency, VerbClass, VerbKind, VerbTable, Voice,
};
use tracing::debug;

use crate::endings::{
    PresentEndings, Row, DEFAULT_INFINITIVES, ESSE_FUTURE, ESSE_IMPERFECT,
    ESSE_IMPERFECT_SUBJUNCTIVE, ESSE_PRESENT, ESSE_PRESENT_SUBJUNCTIVE, FUTURE_PERFECT, PERFECT,
    PERFECT_INFINITIVE, PERFECT_SUBJUNCTIVE, PLUPERFECT, PLUPERFECT_SUBJUNCTIVE,
};
use crate::irregular::{self, verbs};
use crate::stems::{compound_of, present_stem, CompoundBase};

/// Conjugation table and gaps for a verb without its own override
pub(crate) fn conjugation(record: &LexicalRecord, verb: VerbClass) -> (ParadigmTable, Vec<Gap>) {
    if verb.kind == VerbKind::PerfectOnly {
        return perfect_only(record);
    }

    if let Some((base, prefix)) = compound_of(record, &verb) {
        let data = match base {
            CompoundBase::Sum => &verbs::SUM,
            CompoundBase::Eo => &verbs::EO,
        };
        let table = data.table(prefix, record.stem(2), record.stem(3));
        return (ParadigmTable::Conjugation(table), irregular::gaps(data.gaps));
    }

    match verb.conjugation {
        Conjugation::First | Conjugation::Second | Conjugation::Third | Conjugation::Fourth => {
            regular(record, verb, verb.conjugation)
        }
        Conjugation::Esse | Conjugation::Irregular => {
            debug!(
                stem = record.main_stem(),
                code = %record.code,
                "irregular verb without its own table, using third conjugation"
            );
            regular(record, verb, Conjugation::Third)
        }
        Conjugation::Defective => defective(record),
        Conjugation::Unrecognized => unrecognized(record),
    }
}

fn regular(
    record: &LexicalRecord,
    verb: VerbClass,
    conjugation: Conjugation,
) -> (ParadigmTable, Vec<Gap>) {
    let Some((endings, stem)) = present_stem(conjugation, record.main_stem()) else {
        return unrecognized(record);
    };

    let mut rows = Vec::new();
    let mut non_finite = Vec::new();
    let mut gaps = Vec::new();

    let has_active = matches!(verb.kind, VerbKind::Regular | VerbKind::SemiDeponent);
    let has_passive = matches!(verb.kind, VerbKind::Regular | VerbKind::Deponent);
    let impersonal_passive = verb.kind == VerbKind::Regular && verb.valency == Valency::Intransitive;

    if has_active {
        rows.extend(present_active_rows(endings, stem));
        non_finite.push(form(NonFinite::PresentActiveInfinitive, stem, endings.infinitive));
    }

    if has_passive {
        let mut passive = present_passive_rows(endings, stem, verb.kind == VerbKind::Deponent);
        if impersonal_passive {
            keep_third_singular(&mut passive);
            gaps.push(Gap::new(GapScope::PassiveVoice, "passive is impersonal only"));
        }
        rows.extend(passive);
        non_finite.push(form(NonFinite::PresentPassiveInfinitive, stem, endings.passive_infinitive));
    }

    non_finite.push(form(NonFinite::PresentParticiple, stem, endings.participle));
    non_finite.push(form(NonFinite::Gerundive, stem, endings.gerundive));

    match verb.kind {
        VerbKind::Deponent => gaps.push(Gap::new(
            GapScope::ActiveVoice,
            "deponent: passive in form, active in meaning",
        )),
        VerbKind::SemiDeponent => gaps.push(Gap::new(
            GapScope::PerfectActive,
            "semi-deponent: perfect system is passive in form",
        )),
        VerbKind::Regular | VerbKind::PerfectOnly => match record.stem(2) {
            Some(perfect) => {
                rows.extend(perfect_active_rows(perfect));
                non_finite.push(form(NonFinite::PerfectActiveInfinitive, perfect, PERFECT_INFINITIVE));
            }
            None => gaps.push(Gap::new(GapScope::PerfectSystem, "no perfect stem attested")),
        },
    }

    match record.stem(3) {
        Some(participle) => {
            if !impersonal_passive {
                rows.extend(perfect_passive_rows(participle));
                non_finite.push(form(NonFinite::PerfectPassiveInfinitive, participle, "us esse"));
            }
            non_finite.push(form(NonFinite::PerfectParticiple, participle, "us"));
            non_finite.push(form(NonFinite::FutureActiveInfinitive, participle, "urus esse"));
            non_finite.push(form(NonFinite::FutureParticiple, participle, "urus"));
            non_finite.push(form(NonFinite::Supine, participle, "um"));
        }
        None => gaps.push(Gap::new(GapScope::Participles, "no participle stem attested")),
    }

    if verb.impersonal {
        keep_third_singular(&mut rows);
        gaps.push(Gap::new(GapScope::Persons, "impersonal: third person singular only"));
    }

    (ParadigmTable::Conjugation(VerbTable { rows, non_finite }), gaps)
}

/// Perfect-only verbs: perfect forms carry present meaning
fn perfect_only(record: &LexicalRecord) -> (ParadigmTable, Vec<Gap>) {
    let perfect = record.stem(2).unwrap_or(record.main_stem());

    let rows = perfect_active_rows(perfect);
    let mut non_finite = vec![form(NonFinite::PerfectActiveInfinitive, perfect, PERFECT_INFINITIVE)];
    if let Some(participle) = record.stem(3) {
        non_finite.push(form(NonFinite::FutureParticiple, participle, "urus"));
    }

    let gaps = vec![
        Gap::new(GapScope::PresentSystem, "perfect forms with present meaning"),
        Gap::new(GapScope::PassiveVoice, "no passive forms"),
    ];

    (ParadigmTable::Conjugation(VerbTable { rows, non_finite }), gaps)
}

/// Class 7 verbs without their own table
fn defective(record: &LexicalRecord) -> (ParadigmTable, Vec<Gap>) {
    let rows = vec![row(
        Indicative,
        Present,
        Voice::Active,
        record.main_stem(),
        &verbs::DEFECTIVE_PRESENT,
    )];

    let gaps = vec![
        Gap::new(GapScope::Persons, "defective: only some present forms are attested"),
        Gap::new(GapScope::PassiveVoice, "no passive forms"),
    ];

    (
        ParadigmTable::Conjugation(VerbTable {
            rows,
            non_finite: Vec::new(),
        }),
        gaps,
    )
}

fn unrecognized(record: &LexicalRecord) -> (ParadigmTable, Vec<Gap>) {
    debug!(stem = record.main_stem(), code = %record.code, "unrecognized verb class");

    let main = record.main_stem();
    let forms = DEFAULT_INFINITIVES
        .iter()
        .map(|ending| format!("{}{}", main, ending))
        .collect();

    (
        ParadigmTable::Forms(forms),
        vec![Gap::new(
            GapScope::UnrecognizedClass,
            format!("paradigm class \"{}\" not recognized", record.code),
        )],
    )
}

fn present_active_rows(endings: &PresentEndings, stem: &str) -> Vec<TenseRow> {
    vec![
        row(Indicative, Present, Voice::Active, stem, &endings.present),
        row(Indicative, Imperfect, Voice::Active, stem, &endings.imperfect),
        row(Indicative, Future, Voice::Active, stem, &endings.future),
        row(Subjunctive, Present, Voice::Active, stem, &endings.present_subjunctive),
        row(Subjunctive, Imperfect, Voice::Active, stem, &endings.imperfect_subjunctive),
        imperative(Voice::Active, stem, endings.imperative),
    ]
}

fn present_passive_rows(endings: &PresentEndings, stem: &str, with_imperative: bool) -> Vec<TenseRow> {
    let mut rows = vec![
        row(Indicative, Present, Voice::Passive, stem, &endings.passive_present),
        row(Indicative, Imperfect, Voice::Passive, stem, &endings.passive_imperfect),
        row(Indicative, Future, Voice::Passive, stem, &endings.passive_future),
        row(Subjunctive, Present, Voice::Passive, stem, &endings.passive_present_subjunctive),
        row(Subjunctive, Imperfect, Voice::Passive, stem, &endings.passive_imperfect_subjunctive),
    ];
    if with_imperative {
        rows.push(imperative(Voice::Passive, stem, endings.passive_imperative));
    }
    rows
}

/// Perfect, pluperfect and future perfect active on the perfect stem
pub(crate) fn perfect_active_rows(perfect: &str) -> Vec<TenseRow> {
    vec![
        row(Indicative, Perfect, Voice::Active, perfect, &PERFECT),
        row(Indicative, Pluperfect, Voice::Active, perfect, &PLUPERFECT),
        row(Indicative, FuturePerfect, Voice::Active, perfect, &FUTURE_PERFECT),
        row(Subjunctive, Perfect, Voice::Active, perfect, &PERFECT_SUBJUNCTIVE),
        row(Subjunctive, Pluperfect, Voice::Active, perfect, &PLUPERFECT_SUBJUNCTIVE),
    ]
}

/// Periphrastic perfect passive: participle plus a form of *esse*
pub(crate) fn perfect_passive_rows(participle: &str) -> Vec<TenseRow> {
    [
        (Indicative, Perfect, ESSE_PRESENT),
        (Indicative, Pluperfect, ESSE_IMPERFECT),
        (Indicative, FuturePerfect, ESSE_FUTURE),
        (Subjunctive, Perfect, ESSE_PRESENT_SUBJUNCTIVE),
        (Subjunctive, Pluperfect, ESSE_IMPERFECT_SUBJUNCTIVE),
    ]
    .into_iter()
    .map(|(mood, tense, auxiliary)| {
        let mut forms = [""; 6].map(String::from);
        for (index, esse) in auxiliary.iter().enumerate() {
            let ending = if index < 3 { "us" } else { "i" };
            forms[index] = format!("{}{} {}", participle, ending, esse);
        }
        TenseRow {
            mood,
            tense,
            voice: Voice::Passive,
            forms: PersonForms::from_forms(forms),
        }
    })
    .collect()
}

fn row(mood: Mood, tense: Tense, voice: Voice, stem: &str, endings: &Row) -> TenseRow {
    TenseRow {
        mood,
        tense,
        voice,
        forms: PersonForms::from_forms(endings.map(|ending| format!("{}{}", stem, ending))),
    }
}

fn imperative(voice: Voice, stem: &str, [singular, plural]: [&str; 2]) -> TenseRow {
    let mut forms = [""; 6].map(String::from);
    forms[1] = format!("{}{}", stem, singular);
    forms[4] = format!("{}{}", stem, plural);
    TenseRow {
        mood: Imperative,
        tense: Present,
        voice,
        forms: PersonForms::from_forms(forms),
    }
}

fn form(kind: NonFinite, stem: &str, ending: &str) -> NonFiniteForm {
    NonFiniteForm {
        kind,
        form: format!("{}{}", stem, ending),
    }
}

/// Keep only third person singular cells, dropping rows left empty
fn keep_third_singular(rows: &mut Vec<TenseRow>) {
    for row in rows.iter_mut() {
        row.forms.retain(&[Person::ThirdSingular]);
    }
    rows.retain(|row| !row.forms.is_empty());
}
