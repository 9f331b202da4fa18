//! Paradigm tables - the complete inflection of one entry
//!
//! A paradigm is generated on demand for display and never persisted.
//! Cells are `Option<String>`: `None` is a structurally absent cell, and the
//! reason for any absent slice is carried in [`Paradigm::gaps`]. A cell may
//! hold attested alternates separated by [`Paradigm::ALTERNATE_SEPARATOR`].

use std::fmt;

use crate::PartOfSpeech;

/// Grammatical case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Nominative
    Nominative,
    /// Genitive
    Genitive,
    /// Dative
    Dative,
    /// Accusative
    Accusative,
    /// Ablative
    Ablative,
    /// Vocative
    Vocative,
}

impl Case {
    /// Every case, in traditional table order
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Ablative,
        Case::Vocative,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Ablative => "ablative",
            Case::Vocative => "vocative",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Grammatical number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// Singular
    Singular,
    /// Plural
    Plural,
}

/// Gender grouping of a declension column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderGroup {
    /// One column for the whole word (nouns, personal pronouns)
    All,
    /// Masculine
    Masculine,
    /// Feminine
    Feminine,
    /// Neuter
    Neuter,
    /// Masculine and feminine share forms (3rd declension adjectives)
    MasculineFeminine,
}

impl GenderGroup {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            GenderGroup::All => "forms",
            GenderGroup::Masculine => "masculine",
            GenderGroup::Feminine => "feminine",
            GenderGroup::Neuter => "neuter",
            GenderGroup::MasculineFeminine => "masculine/feminine",
        }
    }
}

/// One form per case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseForms([Option<String>; 6]);

impl CaseForms {
    /// Build from six forms in [`Case::ALL`] order; empty strings are absent cells
    pub fn from_forms<S: AsRef<str>>(forms: [S; 6]) -> Self {
        Self(forms.map(|form| non_empty(form.as_ref())))
    }

    /// Form for a case
    pub fn get(&self, case: Case) -> Option<&str> {
        self.0[case.index()].as_deref()
    }

    /// Set the form for a case
    pub fn set(&mut self, case: Case, form: impl Into<String>) {
        self.0[case.index()] = non_empty(&form.into());
    }

    /// Iterate over every case with its form
    pub fn iter(&self) -> impl Iterator<Item = (Case, Option<&str>)> {
        Case::ALL.into_iter().map(|case| (case, self.get(case)))
    }
}

/// Declension of one gender group in both numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclensionColumn {
    /// Gender group
    pub gender: GenderGroup,

    /// Singular forms
    pub singular: CaseForms,

    /// Plural forms
    pub plural: CaseForms,
}

impl DeclensionColumn {
    /// Form for a case and number
    pub fn get(&self, case: Case, number: Number) -> Option<&str> {
        match number {
            Number::Singular => self.singular.get(case),
            Number::Plural => self.plural.get(case),
        }
    }
}

/// Grammatical person and number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    /// 1st singular
    FirstSingular,
    /// 2nd singular
    SecondSingular,
    /// 3rd singular
    ThirdSingular,
    /// 1st plural
    FirstPlural,
    /// 2nd plural
    SecondPlural,
    /// 3rd plural
    ThirdPlural,
}

impl Person {
    /// Every person, in traditional table order
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// Short display label, e.g. `"3sg"`
    pub fn label(&self) -> &'static str {
        match self {
            Person::FirstSingular => "1sg",
            Person::SecondSingular => "2sg",
            Person::ThirdSingular => "3sg",
            Person::FirstPlural => "1pl",
            Person::SecondPlural => "2pl",
            Person::ThirdPlural => "3pl",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// One form per person
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForms([Option<String>; 6]);

impl PersonForms {
    /// Build from six forms in [`Person::ALL`] order; empty strings are absent cells
    pub fn from_forms<S: AsRef<str>>(forms: [S; 6]) -> Self {
        Self(forms.map(|form| non_empty(form.as_ref())))
    }

    /// Form for a person
    pub fn get(&self, person: Person) -> Option<&str> {
        self.0[person.index()].as_deref()
    }

    /// Keep only the listed persons
    pub fn retain(&mut self, keep: &[Person]) {
        for person in Person::ALL {
            if !keep.contains(&person) {
                self.0[person.index()] = None;
            }
        }
    }

    /// Whether every cell is absent
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Iterate over every person with its form
    pub fn iter(&self) -> impl Iterator<Item = (Person, Option<&str>)> {
        Person::ALL.into_iter().map(|person| (person, self.get(person)))
    }
}

/// Verbal mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Indicative
    Indicative,
    /// Subjunctive
    Subjunctive,
    /// Imperative
    Imperative,
}

impl Mood {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Indicative => "indicative",
            Mood::Subjunctive => "subjunctive",
            Mood::Imperative => "imperative",
        }
    }
}

/// Verbal tense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    /// Present
    Present,
    /// Imperfect
    Imperfect,
    /// Future
    Future,
    /// Perfect
    Perfect,
    /// Pluperfect
    Pluperfect,
    /// Future perfect
    FuturePerfect,
}

impl Tense {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Imperfect => "imperfect",
            Tense::Future => "future",
            Tense::Perfect => "perfect",
            Tense::Pluperfect => "pluperfect",
            Tense::FuturePerfect => "future perfect",
        }
    }
}

/// Grammatical voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    /// Active
    Active,
    /// Passive (also the form of deponent verbs)
    Passive,
}

impl Voice {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Voice::Active => "active",
            Voice::Passive => "passive",
        }
    }
}

/// One mood/tense/voice slice of a verb paradigm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenseRow {
    /// Mood
    pub mood: Mood,

    /// Tense
    pub tense: Tense,

    /// Voice
    pub voice: Voice,

    /// Six person forms
    pub forms: PersonForms,
}

impl TenseRow {
    /// Display label, e.g. `"present indicative active"`
    pub fn label(&self) -> String {
        format!(
            "{} {} {}",
            self.tense.label(),
            self.mood.label(),
            self.voice.label()
        )
    }
}

/// Non-finite verb forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonFinite {
    /// Present active infinitive
    PresentActiveInfinitive,
    /// Present passive infinitive
    PresentPassiveInfinitive,
    /// Perfect active infinitive
    PerfectActiveInfinitive,
    /// Perfect passive infinitive
    PerfectPassiveInfinitive,
    /// Future active infinitive
    FutureActiveInfinitive,
    /// Present active participle
    PresentParticiple,
    /// Perfect passive participle
    PerfectParticiple,
    /// Future active participle
    FutureParticiple,
    /// Gerundive
    Gerundive,
    /// Supine
    Supine,
}

impl NonFinite {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            NonFinite::PresentActiveInfinitive => "present active infinitive",
            NonFinite::PresentPassiveInfinitive => "present passive infinitive",
            NonFinite::PerfectActiveInfinitive => "perfect active infinitive",
            NonFinite::PerfectPassiveInfinitive => "perfect passive infinitive",
            NonFinite::FutureActiveInfinitive => "future active infinitive",
            NonFinite::PresentParticiple => "present participle",
            NonFinite::PerfectParticiple => "perfect participle",
            NonFinite::FutureParticiple => "future participle",
            NonFinite::Gerundive => "gerundive",
            NonFinite::Supine => "supine",
        }
    }
}

/// One non-finite form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonFiniteForm {
    /// Which form
    pub kind: NonFinite,

    /// Surface form
    pub form: String,
}

/// Finite rows plus non-finite forms of a verb
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbTable {
    /// Finite rows in display order
    pub rows: Vec<TenseRow>,

    /// Infinitives, participles, gerundive, supine
    pub non_finite: Vec<NonFiniteForm>,
}

impl VerbTable {
    /// The row for a mood, tense and voice
    pub fn row(&self, mood: Mood, tense: Tense, voice: Voice) -> Option<&TenseRow> {
        self.rows
            .iter()
            .find(|row| row.mood == mood && row.tense == tense && row.voice == voice)
    }

    /// A single finite cell
    pub fn get(&self, mood: Mood, tense: Tense, voice: Voice, person: Person) -> Option<&str> {
        self.row(mood, tense, voice)?.forms.get(person)
    }

    /// A non-finite form
    pub fn non_finite(&self, kind: NonFinite) -> Option<&str> {
        self.non_finite
            .iter()
            .find(|form| form.kind == kind)
            .map(|form| form.form.as_str())
    }

    /// Whether any row of the given voice has a form
    pub fn has_voice(&self, voice: Voice) -> bool {
        self.rows
            .iter()
            .any(|row| row.voice == voice && !row.forms.is_empty())
    }
}

/// Table part of a paradigm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParadigmTable {
    /// Nouns, adjectives, pronouns, declined numerals
    Declension(Vec<DeclensionColumn>),

    /// Verbs
    Conjugation(VerbTable),

    /// A single form that never inflects
    Indeclinable(String),

    /// A flat listing, used when no structured table applies
    Forms(Vec<String>),
}

/// Slice of a paradigm that can be structurally absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapScope {
    /// No passive voice
    PassiveVoice,
    /// No active forms (deponents)
    ActiveVoice,
    /// No present system (perfect-only verbs)
    PresentSystem,
    /// No perfect system
    PerfectSystem,
    /// Perfect system is passive in form (semi-deponents)
    PerfectActive,
    /// Missing participles
    Participles,
    /// Missing supine
    Supine,
    /// No imperative mood
    Imperative,
    /// Only some persons exist
    Persons,
    /// No singular (plural-only words)
    Singular,
    /// Paradigm class not recognized
    UnrecognizedClass,
}

impl GapScope {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            GapScope::PassiveVoice => "passive voice",
            GapScope::ActiveVoice => "active voice",
            GapScope::PresentSystem => "present system",
            GapScope::PerfectSystem => "perfect system",
            GapScope::PerfectActive => "perfect active",
            GapScope::Participles => "participles",
            GapScope::Supine => "supine",
            GapScope::Imperative => "imperative",
            GapScope::Persons => "persons",
            GapScope::Singular => "singular",
            GapScope::UnrecognizedClass => "paradigm class",
        }
    }
}

/// An explained structural gap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    /// Which slice is absent
    pub scope: GapScope,

    /// Human-readable explanation
    pub reason: String,
}

impl Gap {
    /// Create a gap annotation
    pub fn new(scope: GapScope, reason: impl Into<String>) -> Self {
        Self {
            scope,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope.label(), self.reason)
    }
}

/// The complete inflection of one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paradigm {
    /// Citation form of the entry
    pub citation_form: String,

    /// Part of speech of the entry
    pub part_of_speech: PartOfSpeech,

    /// The table
    pub table: ParadigmTable,

    /// Structurally absent slices and why
    pub gaps: Vec<Gap>,
}

impl ParadigmTable {
    /// Every present cell, in table order
    pub fn cells(&self) -> Vec<&str> {
        match self {
            ParadigmTable::Declension(columns) => columns
                .iter()
                .flat_map(|column| {
                    column
                        .singular
                        .iter()
                        .chain(column.plural.iter())
                        .filter_map(|(_, form)| form)
                })
                .collect(),
            ParadigmTable::Conjugation(table) => table
                .rows
                .iter()
                .flat_map(|row| row.forms.iter().filter_map(|(_, form)| form))
                .chain(table.non_finite.iter().map(|form| form.form.as_str()))
                .collect(),
            ParadigmTable::Indeclinable(form) => vec![form.as_str()],
            ParadigmTable::Forms(forms) => forms.iter().map(String::as_str).collect(),
        }
    }

    /// Every single-word surface form, with alternates split apart
    ///
    /// Periphrastic cells such as `"amatus sum"` are skipped.
    pub fn surface_forms(&self) -> Vec<&str> {
        self.cells()
            .into_iter()
            .flat_map(|cell| cell.split(Paradigm::ALTERNATE_SEPARATOR))
            .map(str::trim)
            .filter(|form| !form.is_empty() && !form.contains(char::is_whitespace))
            .collect()
    }
}

impl Paradigm {
    /// Separator between attested alternates within one cell
    pub const ALTERNATE_SEPARATOR: &'static str = " / ";

    /// Whether a gap of the given scope is annotated
    pub fn has_gap(&self, scope: GapScope) -> bool {
        self.gaps.iter().any(|gap| gap.scope == scope)
    }

    /// Every present cell, in table order
    pub fn cells(&self) -> Vec<&str> {
        self.table.cells()
    }

    /// Every single-word surface form, with alternates split apart
    pub fn surface_forms(&self) -> Vec<&str> {
        self.table.surface_forms()
    }
}

fn non_empty(form: &str) -> Option<String> {
    if form.is_empty() {
        None
    } else {
        Some(form.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_verb() -> Paradigm {
        Paradigm {
            citation_form: "edo, esse, edi, esum".to_string(),
            part_of_speech: PartOfSpeech::Verb,
            table: ParadigmTable::Conjugation(VerbTable {
                rows: vec![TenseRow {
                    mood: Mood::Indicative,
                    tense: Tense::Perfect,
                    voice: Voice::Passive,
                    forms: PersonForms::from_forms(["esus sum", "", "", "", "", ""]),
                }, TenseRow {
                    mood: Mood::Indicative,
                    tense: Tense::Present,
                    voice: Voice::Active,
                    forms: PersonForms::from_forms(["edo", "edis / es", "", "", "", ""]),
                }],
                non_finite: vec![NonFiniteForm {
                    kind: NonFinite::PresentActiveInfinitive,
                    form: "edere / esse".to_string(),
                }],
            }),
            gaps: vec![Gap::new(GapScope::Persons, "sample")],
        }
    }

    #[test]
    fn test_case_forms_empty_cells() {
        let forms = CaseForms::from_forms(["ego", "mei", "mihi", "me", "me", ""]);
        assert_eq!(forms.get(Case::Genitive), Some("mei"));
        assert_eq!(forms.get(Case::Vocative), None);
    }

    #[test]
    fn test_person_forms_retain() {
        let mut forms = PersonForms::from_forms(["a", "b", "c", "d", "e", "f"]);
        forms.retain(&[Person::ThirdSingular]);
        assert_eq!(forms.get(Person::ThirdSingular), Some("c"));
        assert_eq!(forms.get(Person::FirstSingular), None);
        assert!(!forms.is_empty());
    }

    #[test]
    fn test_verb_table_lookup() {
        let paradigm = sample_verb();
        let ParadigmTable::Conjugation(table) = &paradigm.table else {
            panic!("Expected conjugation");
        };
        assert_eq!(
            table.get(Mood::Indicative, Tense::Present, Voice::Active, Person::FirstSingular),
            Some("edo")
        );
        assert!(table.has_voice(Voice::Passive));
        assert_eq!(
            table.non_finite(NonFinite::PresentActiveInfinitive),
            Some("edere / esse")
        );
    }

    #[test]
    fn test_surface_forms_split_alternates_and_skip_periphrasis() {
        let paradigm = sample_verb();
        let forms = paradigm.surface_forms();
        assert_eq!(forms, vec!["edo", "edis", "es", "edere", "esse"]);
        assert!(paradigm.has_gap(GapScope::Persons));
        assert!(!paradigm.has_gap(GapScope::PassiveVoice));
    }
}
