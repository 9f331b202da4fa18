//! Ending tables shared by the search-form and paradigm generators
//!
//! Rows are in [`Case::ALL`](ludus_domain::Case::ALL) or
//! [`Person::ALL`](ludus_domain::Person::ALL) order.

/// Six endings, one per case or person
pub(crate) type Row = [&'static str; 6];

/// Singular and plural case endings
pub(crate) struct CaseEndings {
    pub singular: Row,
    pub plural: Row,
}

// ---------------------------------------------------------------------------
// Nouns and adjectives
// ---------------------------------------------------------------------------

pub(crate) const FIRST_DECLENSION: CaseEndings = CaseEndings {
    singular: ["a", "ae", "ae", "am", "a", "a"],
    plural: ["ae", "arum", "is", "as", "is", "ae"],
};

pub(crate) const SECOND_DECLENSION: CaseEndings = CaseEndings {
    singular: ["us", "i", "o", "um", "o", "e"],
    plural: ["i", "orum", "is", "os", "is", "i"],
};

pub(crate) const SECOND_DECLENSION_NEUTER: CaseEndings = CaseEndings {
    singular: ["um", "i", "o", "um", "o", "um"],
    plural: ["a", "orum", "is", "a", "is", "a"],
};

/// Oblique endings only; the nominative and vocative singular are the bare
/// nominative (and the neuter accusative singular too).
pub(crate) const THIRD_DECLENSION: CaseEndings = CaseEndings {
    singular: ["", "is", "i", "em", "e", ""],
    plural: ["es", "um", "ibus", "es", "ibus", "es"],
};

pub(crate) const THIRD_DECLENSION_NEUTER: CaseEndings = CaseEndings {
    singular: ["", "is", "i", "", "e", ""],
    plural: ["a", "um", "ibus", "a", "ibus", "a"],
};

pub(crate) const FOURTH_DECLENSION: CaseEndings = CaseEndings {
    singular: ["us", "us", "ui", "um", "u", "us"],
    plural: ["us", "uum", "ibus", "us", "ibus", "us"],
};

pub(crate) const FOURTH_DECLENSION_NEUTER: CaseEndings = CaseEndings {
    singular: ["u", "us", "u", "u", "u", "u"],
    plural: ["ua", "uum", "ibus", "ua", "ibus", "ua"],
};

pub(crate) const FIFTH_DECLENSION: CaseEndings = CaseEndings {
    singular: ["es", "ei", "ei", "em", "e", "es"],
    plural: ["es", "erum", "ebus", "es", "ebus", "es"],
};

/// Third-declension adjectives (i-stem), masculine and feminine
pub(crate) const THIRD_ADJECTIVE: CaseEndings = CaseEndings {
    singular: ["is", "is", "i", "em", "i", "is"],
    plural: ["es", "ium", "ibus", "es", "ibus", "es"],
};

/// Third-declension adjectives (i-stem), neuter
pub(crate) const THIRD_ADJECTIVE_NEUTER: CaseEndings = CaseEndings {
    singular: ["e", "is", "i", "e", "i", "e"],
    plural: ["ia", "ium", "ibus", "ia", "ibus", "ia"],
};

/// Minimal default for nominals whose class is not recognized
pub(crate) const DEFAULT_NOMINAL: &[&str] = &["us", "a", "um", "i", "is", "e", "es"];

/// Oblique endings of a comparative adjective (`peior`, `peioris`, ...)
pub(crate) const COMPARATIVE: &[&str] = &[
    "or", "us", "oris", "ori", "orem", "ore", "ores", "ora", "orum", "oribus",
];

/// Declined forms of a present participle after the `-nt-` stem
pub(crate) const PARTICIPLE_OBLIQUE: &[&str] =
    &["is", "i", "em", "e", "es", "ium", "ibus", "ia"];

/// First/second-declension endings used for participles and gerundives
pub(crate) const FIRST_SECOND_ADJECTIVE: &[&str] = &[
    "us", "a", "um", "i", "ae", "o", "am", "os", "as", "orum", "arum", "is",
];

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

/// Present-system endings of one conjugation, applied to the present stem
pub(crate) struct PresentEndings {
    pub present: Row,
    pub imperfect: Row,
    pub future: Row,
    pub present_subjunctive: Row,
    pub imperfect_subjunctive: Row,
    /// 2nd singular, 2nd plural
    pub imperative: [&'static str; 2],
    pub passive_present: Row,
    pub passive_imperfect: Row,
    pub passive_future: Row,
    pub passive_present_subjunctive: Row,
    pub passive_imperfect_subjunctive: Row,
    /// 2nd singular, 2nd plural
    pub passive_imperative: [&'static str; 2],
    pub infinitive: &'static str,
    pub passive_infinitive: &'static str,
    /// Nominative singular, e.g. `ans`
    pub participle: &'static str,
    /// Oblique stem ending, e.g. `ant`
    pub participle_oblique: &'static str,
    pub gerundive: &'static str,
}

pub(crate) const FIRST_CONJUGATION: PresentEndings = PresentEndings {
    present: ["o", "as", "at", "amus", "atis", "ant"],
    imperfect: ["abam", "abas", "abat", "abamus", "abatis", "abant"],
    future: ["abo", "abis", "abit", "abimus", "abitis", "abunt"],
    present_subjunctive: ["em", "es", "et", "emus", "etis", "ent"],
    imperfect_subjunctive: ["arem", "ares", "aret", "aremus", "aretis", "arent"],
    imperative: ["a", "ate"],
    passive_present: ["or", "aris", "atur", "amur", "amini", "antur"],
    passive_imperfect: ["abar", "abaris", "abatur", "abamur", "abamini", "abantur"],
    passive_future: ["abor", "aberis", "abitur", "abimur", "abimini", "abuntur"],
    passive_present_subjunctive: ["er", "eris", "etur", "emur", "emini", "entur"],
    passive_imperfect_subjunctive: ["arer", "areris", "aretur", "aremur", "aremini", "arentur"],
    passive_imperative: ["are", "amini"],
    infinitive: "are",
    passive_infinitive: "ari",
    participle: "ans",
    participle_oblique: "ant",
    gerundive: "andus",
};

pub(crate) const SECOND_CONJUGATION: PresentEndings = PresentEndings {
    present: ["eo", "es", "et", "emus", "etis", "ent"],
    imperfect: ["ebam", "ebas", "ebat", "ebamus", "ebatis", "ebant"],
    future: ["ebo", "ebis", "ebit", "ebimus", "ebitis", "ebunt"],
    present_subjunctive: ["eam", "eas", "eat", "eamus", "eatis", "eant"],
    imperfect_subjunctive: ["erem", "eres", "eret", "eremus", "eretis", "erent"],
    imperative: ["e", "ete"],
    passive_present: ["eor", "eris", "etur", "emur", "emini", "entur"],
    passive_imperfect: ["ebar", "ebaris", "ebatur", "ebamur", "ebamini", "ebantur"],
    passive_future: ["ebor", "eberis", "ebitur", "ebimur", "ebimini", "ebuntur"],
    passive_present_subjunctive: ["ear", "earis", "eatur", "eamur", "eamini", "eantur"],
    passive_imperfect_subjunctive: ["erer", "ereris", "eretur", "eremur", "eremini", "erentur"],
    passive_imperative: ["ere", "emini"],
    infinitive: "ere",
    passive_infinitive: "eri",
    participle: "ens",
    participle_oblique: "ent",
    gerundive: "endus",
};

pub(crate) const THIRD_CONJUGATION: PresentEndings = PresentEndings {
    present: ["o", "is", "it", "imus", "itis", "unt"],
    imperfect: ["ebam", "ebas", "ebat", "ebamus", "ebatis", "ebant"],
    future: ["am", "es", "et", "emus", "etis", "ent"],
    present_subjunctive: ["am", "as", "at", "amus", "atis", "ant"],
    imperfect_subjunctive: ["erem", "eres", "eret", "eremus", "eretis", "erent"],
    imperative: ["e", "ite"],
    passive_present: ["or", "eris", "itur", "imur", "imini", "untur"],
    passive_imperfect: ["ebar", "ebaris", "ebatur", "ebamur", "ebamini", "ebantur"],
    passive_future: ["ar", "eris", "etur", "emur", "emini", "entur"],
    passive_present_subjunctive: ["ar", "aris", "atur", "amur", "amini", "antur"],
    passive_imperfect_subjunctive: ["erer", "ereris", "eretur", "eremur", "eremini", "erentur"],
    passive_imperative: ["ere", "imini"],
    infinitive: "ere",
    passive_infinitive: "i",
    participle: "ens",
    participle_oblique: "ent",
    gerundive: "endus",
};

/// Third conjugation `-io` verbs, applied to the short stem (`cap`, `pat`)
pub(crate) const THIRD_IO_CONJUGATION: PresentEndings = PresentEndings {
    present: ["io", "is", "it", "imus", "itis", "iunt"],
    imperfect: ["iebam", "iebas", "iebat", "iebamus", "iebatis", "iebant"],
    future: ["iam", "ies", "iet", "iemus", "ietis", "ient"],
    present_subjunctive: ["iam", "ias", "iat", "iamus", "iatis", "iant"],
    imperfect_subjunctive: ["erem", "eres", "eret", "eremus", "eretis", "erent"],
    imperative: ["e", "ite"],
    passive_present: ["ior", "eris", "itur", "imur", "imini", "iuntur"],
    passive_imperfect: ["iebar", "iebaris", "iebatur", "iebamur", "iebamini", "iebantur"],
    passive_future: ["iar", "ieris", "ietur", "iemur", "iemini", "ientur"],
    passive_present_subjunctive: ["iar", "iaris", "iatur", "iamur", "iamini", "iantur"],
    passive_imperfect_subjunctive: ["erer", "ereris", "eretur", "eremur", "eremini", "erentur"],
    passive_imperative: ["ere", "imini"],
    infinitive: "ere",
    passive_infinitive: "i",
    participle: "iens",
    participle_oblique: "ient",
    gerundive: "iendus",
};

pub(crate) const FOURTH_CONJUGATION: PresentEndings = PresentEndings {
    present: ["io", "is", "it", "imus", "itis", "iunt"],
    imperfect: ["iebam", "iebas", "iebat", "iebamus", "iebatis", "iebant"],
    future: ["iam", "ies", "iet", "iemus", "ietis", "ient"],
    present_subjunctive: ["iam", "ias", "iat", "iamus", "iatis", "iant"],
    imperfect_subjunctive: ["irem", "ires", "iret", "iremus", "iretis", "irent"],
    imperative: ["i", "ite"],
    passive_present: ["ior", "iris", "itur", "imur", "imini", "iuntur"],
    passive_imperfect: ["iebar", "iebaris", "iebatur", "iebamur", "iebamini", "iebantur"],
    passive_future: ["iar", "ieris", "ietur", "iemur", "iemini", "ientur"],
    passive_present_subjunctive: ["iar", "iaris", "iatur", "iamur", "iamini", "iantur"],
    passive_imperfect_subjunctive: ["irer", "ireris", "iretur", "iremur", "iremini", "irentur"],
    passive_imperative: ["ire", "imini"],
    infinitive: "ire",
    passive_infinitive: "iri",
    participle: "iens",
    participle_oblique: "ient",
    gerundive: "iendus",
};

// Perfect system, applied to the perfect stem
pub(crate) const PERFECT: Row = ["i", "isti", "it", "imus", "istis", "erunt"];
pub(crate) const PLUPERFECT: Row = ["eram", "eras", "erat", "eramus", "eratis", "erant"];
pub(crate) const FUTURE_PERFECT: Row = ["ero", "eris", "erit", "erimus", "eritis", "erint"];
pub(crate) const PERFECT_SUBJUNCTIVE: Row = ["erim", "eris", "erit", "erimus", "eritis", "erint"];
pub(crate) const PLUPERFECT_SUBJUNCTIVE: Row =
    ["issem", "isses", "isset", "issemus", "issetis", "issent"];
pub(crate) const PERFECT_INFINITIVE: &str = "isse";

// Forms of esse used in periphrastic perfect passives
pub(crate) const ESSE_PRESENT: Row = ["sum", "es", "est", "sumus", "estis", "sunt"];
pub(crate) const ESSE_IMPERFECT: Row = ["eram", "eras", "erat", "eramus", "eratis", "erant"];
pub(crate) const ESSE_FUTURE: Row = ["ero", "eris", "erit", "erimus", "eritis", "erunt"];
pub(crate) const ESSE_PRESENT_SUBJUNCTIVE: Row = ["sim", "sis", "sit", "simus", "sitis", "sint"];
pub(crate) const ESSE_IMPERFECT_SUBJUNCTIVE: Row =
    ["essem", "esses", "esset", "essemus", "essetis", "essent"];

/// Minimal default infinitives for verbs whose class is not recognized
pub(crate) const DEFAULT_INFINITIVES: &[&str] = &["are", "ere", "ire"];
