//! Hand-written paradigms of the irregular and defective verbs
//!
//! Cells list attested alternates separated by `" / "`; an empty cell is
//! absent. Perfect-system rows are generated from `perfect_stem` and
//! `participle_stem` with the regular endings.

use ludus_domain::Mood::{Imperative, Indicative, Subjunctive};
use ludus_domain::Tense::{Future, Imperfect, Perfect, Present};
use ludus_domain::{
    GapScope, Mood, NonFinite, NonFiniteForm, Paradigm, PersonForms, Tense, TenseRow, VerbTable,
    Voice,
};

use crate::endings::Row;
use crate::paradigm::verb::{perfect_active_rows, perfect_passive_rows};

/// One row of hand-written forms
pub(crate) struct Cells {
    mood: Mood,
    tense: Tense,
    voice: Voice,
    forms: Row,
}

const fn active(mood: Mood, tense: Tense, forms: Row) -> Cells {
    Cells {
        mood,
        tense,
        voice: Voice::Active,
        forms,
    }
}

const fn passive(mood: Mood, tense: Tense, forms: Row) -> Cells {
    Cells {
        mood,
        tense,
        voice: Voice::Passive,
        forms,
    }
}

/// Complete paradigm data for one irregular verb
pub(crate) struct IrregularVerb {
    pub citation: &'static str,
    rows: &'static [Cells],
    non_finite: &'static [(NonFinite, &'static str)],
    perfect_stem: Option<&'static str>,
    participle_stem: Option<&'static str>,
    /// The participle stem also yields a perfect passive participle and
    /// periphrastic perfect passive (`latus sum`)
    passive_perfect: bool,
    /// The participle stem yields a future active participle (`futurus`)
    future_participle: bool,
    pub extra_forms: &'static [&'static str],
    pub gaps: &'static [(GapScope, &'static str)],
}

impl IrregularVerb {
    /// Build the table with `prefix` applied to every hand-written form
    ///
    /// `perfect` and `participle` replace the built-in stems; compounds
    /// pass their own attested stems (`afu` for `absum`).
    pub(crate) fn table(
        &self,
        prefix: &str,
        perfect: Option<&str>,
        participle: Option<&str>,
    ) -> VerbTable {
        let mut rows: Vec<TenseRow> = self
            .rows
            .iter()
            .map(|cells| TenseRow {
                mood: cells.mood,
                tense: cells.tense,
                voice: cells.voice,
                forms: PersonForms::from_forms(cells.forms.map(|cell| prefixed(prefix, cell))),
            })
            .collect();

        let mut non_finite: Vec<NonFiniteForm> = self
            .non_finite
            .iter()
            .map(|&(kind, form)| NonFiniteForm {
                kind,
                form: prefixed(prefix, form),
            })
            .collect();

        let perfect = perfect
            .map(str::to_string)
            .or_else(|| self.perfect_stem.map(|stem| format!("{}{}", prefix, stem)));
        let participle = participle
            .map(str::to_string)
            .or_else(|| self.participle_stem.map(|stem| format!("{}{}", prefix, stem)));

        if let Some(perfect) = &perfect {
            rows.extend(perfect_active_rows(perfect));
            non_finite.push(NonFiniteForm {
                kind: NonFinite::PerfectActiveInfinitive,
                form: format!("{}isse", perfect),
            });
        }

        if let Some(participle) = &participle {
            if self.passive_perfect {
                rows.extend(perfect_passive_rows(participle));
                non_finite.push(NonFiniteForm {
                    kind: NonFinite::PerfectPassiveInfinitive,
                    form: format!("{}us esse", participle),
                });
                non_finite.push(NonFiniteForm {
                    kind: NonFinite::PerfectParticiple,
                    form: format!("{}us", participle),
                });
            }
            if self.future_participle {
                non_finite.push(NonFiniteForm {
                    kind: NonFinite::FutureActiveInfinitive,
                    form: format!("{}urus esse", participle),
                });
                non_finite.push(NonFiniteForm {
                    kind: NonFinite::FutureParticiple,
                    form: format!("{}urus", participle),
                });
            }
        }

        VerbTable { rows, non_finite }
    }
}

/// Prefix every alternate in a cell: `("ab", "es")` gives `"abes"`
fn prefixed(prefix: &str, cell: &str) -> String {
    if prefix.is_empty() || cell.is_empty() {
        return cell.to_string();
    }
    cell.split(Paradigm::ALTERNATE_SEPARATOR)
        .map(|form| format!("{}{}", prefix, form))
        .collect::<Vec<_>>()
        .join(Paradigm::ALTERNATE_SEPARATOR)
}

const NO_PASSIVE: (GapScope, &str) = (GapScope::PassiveVoice, "no passive forms");
const NO_IMPERATIVE: (GapScope, &str) = (GapScope::Imperative, "no imperative");

pub(crate) const SUM: IrregularVerb = IrregularVerb {
    citation: "sum, esse, fui, futurus",
    rows: &[
        active(Indicative, Present, ["sum", "es", "est", "sumus", "estis", "sunt"]),
        active(Indicative, Imperfect, ["eram", "eras", "erat", "eramus", "eratis", "erant"]),
        active(Indicative, Future, ["ero", "eris", "erit", "erimus", "eritis", "erunt"]),
        active(Subjunctive, Present, ["sim", "sis", "sit", "simus", "sitis", "sint"]),
        active(
            Subjunctive,
            Imperfect,
            ["essem / forem", "esses / fores", "esset / foret", "essemus", "essetis", "essent / forent"],
        ),
        active(Imperative, Present, ["", "es", "", "", "este", ""]),
        active(Imperative, Future, ["", "esto", "esto", "", "estote", "sunto"]),
    ],
    non_finite: &[(NonFinite::PresentActiveInfinitive, "esse")],
    perfect_stem: Some("fu"),
    participle_stem: Some("fut"),
    passive_perfect: false,
    future_participle: true,
    extra_forms: &["fore", "ens"],
    gaps: &[
        (GapScope::PassiveVoice, "no passive forms: linking verb"),
        (GapScope::Supine, "no supine"),
    ],
};

pub(crate) const POSSUM: IrregularVerb = IrregularVerb {
    citation: "possum, posse, potui",
    rows: &[
        active(Indicative, Present, ["possum", "potes", "potest", "possumus", "potestis", "possunt"]),
        active(
            Indicative,
            Imperfect,
            ["poteram", "poteras", "poterat", "poteramus", "poteratis", "poterant"],
        ),
        active(Indicative, Future, ["potero", "poteris", "poterit", "poterimus", "poteritis", "poterunt"]),
        active(Subjunctive, Present, ["possim", "possis", "possit", "possimus", "possitis", "possint"]),
        active(Subjunctive, Imperfect, ["possem", "posses", "posset", "possemus", "possetis", "possent"]),
    ],
    non_finite: &[
        (NonFinite::PresentActiveInfinitive, "posse"),
        (NonFinite::PresentParticiple, "potens"),
    ],
    perfect_stem: Some("potu"),
    participle_stem: None,
    passive_perfect: false,
    future_participle: false,
    extra_forms: &["potentis"],
    gaps: &[
        NO_PASSIVE,
        NO_IMPERATIVE,
        (GapScope::Participles, "only the present participle potens"),
    ],
};

pub(crate) const VOLO: IrregularVerb = IrregularVerb {
    citation: "volo, velle, volui",
    rows: &[
        active(Indicative, Present, ["volo", "vis", "vult / volt", "volumus", "vultis / voltis", "volunt"]),
        active(Indicative, Imperfect, ["volebam", "volebas", "volebat", "volebamus", "volebatis", "volebant"]),
        active(Indicative, Future, ["volam", "voles", "volet", "volemus", "voletis", "volent"]),
        active(Subjunctive, Present, ["velim", "velis", "velit", "velimus", "velitis", "velint"]),
        active(Subjunctive, Imperfect, ["vellem", "velles", "vellet", "vellemus", "velletis", "vellent"]),
    ],
    non_finite: &[
        (NonFinite::PresentActiveInfinitive, "velle"),
        (NonFinite::PresentParticiple, "volens"),
    ],
    perfect_stem: Some("volu"),
    participle_stem: None,
    passive_perfect: false,
    future_participle: false,
    extra_forms: &["volentis"],
    gaps: &[NO_PASSIVE, NO_IMPERATIVE],
};

pub(crate) const NOLO: IrregularVerb = IrregularVerb {
    citation: "nolo, nolle, nolui",
    rows: &[
        active(Indicative, Present, ["nolo", "non vis", "non vult", "nolumus", "non vultis", "nolunt"]),
        active(Indicative, Imperfect, ["nolebam", "nolebas", "nolebat", "nolebamus", "nolebatis", "nolebant"]),
        active(Indicative, Future, ["nolam", "noles", "nolet", "nolemus", "noletis", "nolent"]),
        active(Subjunctive, Present, ["nolim", "nolis", "nolit", "nolimus", "nolitis", "nolint"]),
        active(Subjunctive, Imperfect, ["nollem", "nolles", "nollet", "nollemus", "nolletis", "nollent"]),
        active(Imperative, Present, ["", "noli", "", "", "nolite", ""]),
        active(Imperative, Future, ["", "nolito", "nolito", "", "nolitote", "nolunto"]),
    ],
    non_finite: &[
        (NonFinite::PresentActiveInfinitive, "nolle"),
        (NonFinite::PresentParticiple, "nolens"),
    ],
    perfect_stem: Some("nolu"),
    participle_stem: None,
    passive_perfect: false,
    future_participle: false,
    extra_forms: &["nolentis"],
    gaps: &[NO_PASSIVE],
};

pub(crate) const MALO: IrregularVerb = IrregularVerb {
    citation: "malo, malle, malui",
    rows: &[
        active(Indicative, Present, ["malo", "mavis", "mavult", "malumus", "mavultis", "malunt"]),
        active(Indicative, Imperfect, ["malebam", "malebas", "malebat", "malebamus", "malebatis", "malebant"]),
        active(Indicative, Future, ["malam", "males", "malet", "malemus", "maletis", "malent"]),
        active(Subjunctive, Present, ["malim", "malis", "malit", "malimus", "malitis", "malint"]),
        active(Subjunctive, Imperfect, ["mallem", "malles", "mallet", "mallemus", "malletis", "mallent"]),
    ],
    non_finite: &[(NonFinite::PresentActiveInfinitive, "malle")],
    perfect_stem: Some("malu"),
    participle_stem: None,
    passive_perfect: false,
    future_participle: false,
    extra_forms: &[],
    gaps: &[
        NO_PASSIVE,
        NO_IMPERATIVE,
        (GapScope::Participles, "no participles"),
    ],
};

pub(crate) const EO: IrregularVerb = IrregularVerb {
    citation: "eo, ire, ii, itum",
    rows: &[
        active(Indicative, Present, ["eo", "is", "it", "imus", "itis", "eunt"]),
        active(Indicative, Imperfect, ["ibam", "ibas", "ibat", "ibamus", "ibatis", "ibant"]),
        active(Indicative, Future, ["ibo", "ibis", "ibit", "ibimus", "ibitis", "ibunt"]),
        active(Subjunctive, Present, ["eam", "eas", "eat", "eamus", "eatis", "eant"]),
        active(Subjunctive, Imperfect, ["irem", "ires", "iret", "iremus", "iretis", "irent"]),
        active(Imperative, Present, ["", "i", "", "", "ite", ""]),
        active(Imperative, Future, ["", "ito", "ito", "", "itote", "eunto"]),
        passive(Indicative, Present, ["", "", "itur", "", "", ""]),
        passive(Indicative, Imperfect, ["", "", "ibatur", "", "", ""]),
        passive(Indicative, Future, ["", "", "ibitur", "", "", ""]),
    ],
    non_finite: &[
        (NonFinite::PresentActiveInfinitive, "ire"),
        (NonFinite::PresentPassiveInfinitive, "iri"),
        (NonFinite::PresentParticiple, "iens"),
        (NonFinite::Gerundive, "eundum"),
        (NonFinite::Supine, "itum"),
    ],
    perfect_stem: Some("iv"),
    participle_stem: Some("it"),
    passive_perfect: false,
    future_participle: true,
    extra_forms: &["ii", "iit", "iisti", "ierunt", "ieram", "iero", "isse", "euntis"],
    gaps: &[(GapScope::PassiveVoice, "passive is impersonal only: itur")],
};

pub(crate) const FERO: IrregularVerb = IrregularVerb {
    citation: "fero, ferre, tuli, latum",
    rows: &[
        active(Indicative, Present, ["fero", "fers", "fert", "ferimus", "fertis", "ferunt"]),
        active(Indicative, Imperfect, ["ferebam", "ferebas", "ferebat", "ferebamus", "ferebatis", "ferebant"]),
        active(Indicative, Future, ["feram", "feres", "feret", "feremus", "feretis", "ferent"]),
        active(Subjunctive, Present, ["feram", "feras", "ferat", "feramus", "feratis", "ferant"]),
        active(Subjunctive, Imperfect, ["ferrem", "ferres", "ferret", "ferremus", "ferretis", "ferrent"]),
        active(Imperative, Present, ["", "fer", "", "", "ferte", ""]),
        active(Imperative, Future, ["", "ferto", "ferto", "", "fertote", "ferunto"]),
        passive(Indicative, Present, ["feror", "ferris", "fertur", "ferimur", "ferimini", "feruntur"]),
        passive(
            Indicative,
            Imperfect,
            ["ferebar", "ferebaris", "ferebatur", "ferebamur", "ferebamini", "ferebantur"],
        ),
        passive(Indicative, Future, ["ferar", "fereris", "feretur", "feremur", "feremini", "ferentur"]),
        passive(Subjunctive, Present, ["ferar", "feraris", "feratur", "feramur", "feramini", "ferantur"]),
        passive(
            Subjunctive,
            Imperfect,
            ["ferrer", "ferreris", "ferretur", "ferremur", "ferremini", "ferrentur"],
        ),
    ],
    non_finite: &[
        (NonFinite::PresentActiveInfinitive, "ferre"),
        (NonFinite::PresentPassiveInfinitive, "ferri"),
        (NonFinite::PresentParticiple, "ferens"),
        (NonFinite::Gerundive, "ferendus"),
        (NonFinite::Supine, "latum"),
    ],
    perfect_stem: Some("tul"),
    participle_stem: Some("lat"),
    passive_perfect: true,
    future_participle: true,
    extra_forms: &["ferentis", "lata", "latum"],
    gaps: &[],
};

pub(crate) const EDO: IrregularVerb = IrregularVerb {
    citation: "edo, edere, edi, esum",
    rows: &[
        active(
            Indicative,
            Present,
            ["edo", "edis / es", "edit / est", "edimus", "editis / estis", "edunt"],
        ),
        active(Indicative, Imperfect, ["edebam", "edebas", "edebat", "edebamus", "edebatis", "edebant"]),
        active(Indicative, Future, ["edam", "edes", "edet", "edemus", "edetis", "edent"]),
        active(
            Subjunctive,
            Present,
            ["edam / edim", "edas / edis", "edat / edit", "edamus / edimus", "edatis / editis", "edant / edint"],
        ),
        active(
            Subjunctive,
            Imperfect,
            ["ederem / essem", "ederes / esses", "ederet / esset", "ederemus / essemus", "ederetis / essetis", "ederent / essent"],
        ),
        active(Imperative, Present, ["", "ede / es", "", "", "edite / este", ""]),
        passive(Indicative, Present, ["edor", "ederis", "editur / estur", "edimur", "edimini", "eduntur"]),
        passive(Indicative, Imperfect, ["edebar", "edebaris", "edebatur", "edebamur", "edebamini", "edebantur"]),
        passive(Indicative, Future, ["edar", "ederis", "edetur", "edemur", "edemini", "edentur"]),
    ],
    non_finite: &[
        (NonFinite::PresentActiveInfinitive, "edere / esse"),
        (NonFinite::PresentPassiveInfinitive, "edi"),
        (NonFinite::PresentParticiple, "edens"),
        (NonFinite::Gerundive, "edendus"),
        (NonFinite::Supine, "esum"),
    ],
    perfect_stem: Some("ed"),
    participle_stem: Some("es"),
    passive_perfect: true,
    future_participle: true,
    extra_forms: &["edentis", "essum"],
    gaps: &[],
};

pub(crate) const FIO: IrregularVerb = IrregularVerb {
    citation: "fio, fieri, factus sum",
    rows: &[
        active(Indicative, Present, ["fio", "fis", "fit", "fimus", "fitis", "fiunt"]),
        active(Indicative, Imperfect, ["fiebam", "fiebas", "fiebat", "fiebamus", "fiebatis", "fiebant"]),
        active(Indicative, Future, ["fiam", "fies", "fiet", "fiemus", "fietis", "fient"]),
        active(Subjunctive, Present, ["fiam", "fias", "fiat", "fiamus", "fiatis", "fiant"]),
        active(Subjunctive, Imperfect, ["fierem", "fieres", "fieret", "fieremus", "fieretis", "fierent"]),
        active(Imperative, Present, ["", "fi", "", "", "fite", ""]),
    ],
    non_finite: &[
        (NonFinite::PresentActiveInfinitive, "fieri"),
        (NonFinite::Gerundive, "faciendus"),
        (NonFinite::Supine, "factum"),
    ],
    perfect_stem: None,
    participle_stem: Some("fact"),
    passive_perfect: true,
    future_participle: false,
    extra_forms: &["facta", "factum"],
    gaps: &[
        (GapScope::PassiveVoice, "serves as the passive of facio"),
        (GapScope::PerfectActive, "perfect system is passive in form: factus sum"),
    ],
};

pub(crate) const INQUAM: IrregularVerb = IrregularVerb {
    citation: "inquam",
    rows: &[
        active(Indicative, Present, ["inquam", "inquis", "inquit", "inquimus", "inquitis", "inquiunt"]),
        active(Indicative, Imperfect, ["", "", "inquiebat", "", "", ""]),
        active(Indicative, Future, ["", "inquies", "inquiet", "", "", ""]),
        active(Indicative, Perfect, ["inquii", "inquisti", "inquit", "", "", ""]),
        active(Imperative, Present, ["", "inque", "", "", "", ""]),
        active(Imperative, Future, ["", "inquito", "", "", "", ""]),
    ],
    non_finite: &[],
    perfect_stem: None,
    participle_stem: None,
    passive_perfect: false,
    future_participle: false,
    extra_forms: &[],
    gaps: &[
        (GapScope::Persons, "defective: only scattered forms are attested"),
        NO_PASSIVE,
        (GapScope::Participles, "no participles"),
    ],
};

pub(crate) const AIO: IrregularVerb = IrregularVerb {
    citation: "aio",
    rows: &[
        active(Indicative, Present, ["aio", "ais", "ait", "", "", "aiunt"]),
        active(Indicative, Imperfect, ["aiebam", "aiebas", "aiebat", "aiebamus", "aiebatis", "aiebant"]),
        active(Subjunctive, Present, ["", "aias", "aiat", "", "", "aiant"]),
        active(Imperative, Present, ["", "ai", "", "", "", ""]),
    ],
    non_finite: &[(NonFinite::PresentParticiple, "aiens")],
    perfect_stem: None,
    participle_stem: None,
    passive_perfect: false,
    future_participle: false,
    extra_forms: &["ait"],
    gaps: &[
        (GapScope::Persons, "defective: only scattered forms are attested"),
        NO_PASSIVE,
        (GapScope::PerfectSystem, "no perfect system"),
    ],
};

pub(crate) const QUAESO: IrregularVerb = IrregularVerb {
    citation: "quaeso, quaesere, quaesivi, quaesitum",
    rows: &[
        active(Indicative, Present, ["quaeso", "quaesis", "quaesit", "quaesumus", "quaesitis", "quaesunt"]),
        active(Subjunctive, Present, ["quaesam", "quaesas", "quaesat", "quaesamus", "quaesatis", "quaesant"]),
    ],
    non_finite: &[
        (NonFinite::PresentActiveInfinitive, "quaesere"),
        (NonFinite::Supine, "quaesitum"),
    ],
    perfect_stem: Some("quaesiv"),
    participle_stem: Some("quaesit"),
    passive_perfect: true,
    future_participle: false,
    extra_forms: &["quaesii", "quaesiisti", "quaesiit", "quaesivere", "quaesita"],
    gaps: &[
        (GapScope::Persons, "present system mostly limited to quaeso and quaesumus"),
        (GapScope::Imperative, "no imperative"),
    ],
};

pub(crate) const MEMINI: IrregularVerb = IrregularVerb {
    citation: "memini, meminisse",
    rows: &[active(Imperative, Future, ["", "memento", "", "", "mementote", ""])],
    non_finite: &[],
    perfect_stem: Some("memin"),
    participle_stem: None,
    passive_perfect: false,
    future_participle: false,
    extra_forms: &[],
    gaps: &[
        (GapScope::PresentSystem, "perfect forms with present meaning"),
        NO_PASSIVE,
        (GapScope::Participles, "no participles"),
    ],
};

pub(crate) const ODI: IrregularVerb = IrregularVerb {
    citation: "odi, odisse, osurus",
    rows: &[],
    non_finite: &[],
    perfect_stem: Some("od"),
    participle_stem: Some("os"),
    passive_perfect: false,
    future_participle: true,
    extra_forms: &["osus"],
    gaps: &[
        (GapScope::PresentSystem, "perfect forms with present meaning"),
        NO_PASSIVE,
        (GapScope::Imperative, "no imperative"),
    ],
};

/// Generic defective present for class 7 verbs without their own table
pub(crate) const DEFECTIVE_PRESENT: Row = ["o", "is", "it", "", "", "unt"];

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::Person;

    #[test]
    fn test_sum_table() {
        let table = SUM.table("", None, None);
        assert_eq!(
            table.get(Indicative, Present, Voice::Active, Person::ThirdSingular),
            Some("est")
        );
        assert_eq!(
            table.get(Indicative, Tense::Perfect, Voice::Active, Person::FirstSingular),
            Some("fui")
        );
        assert_eq!(table.non_finite(NonFinite::FutureParticiple), Some("futurus"));
        assert!(!table.has_voice(Voice::Passive));
    }

    #[test]
    fn test_prefixed_compound() {
        let table = SUM.table("ab", Some("afu"), Some("afut"));
        assert_eq!(
            table.get(Indicative, Present, Voice::Active, Person::SecondSingular),
            Some("abes")
        );
        assert_eq!(
            table.get(Indicative, Tense::Perfect, Voice::Active, Person::FirstSingular),
            Some("afui")
        );
        assert_eq!(table.non_finite(NonFinite::FutureParticiple), Some("afuturus"));
    }

    #[test]
    fn test_prefixed_alternates() {
        assert_eq!(prefixed("com", "edis / es"), "comedis / comes");
        assert_eq!(prefixed("ab", ""), "");
        assert_eq!(prefixed("", "fers"), "fers");
    }

    #[test]
    fn test_fero_perfect_passive() {
        let table = FERO.table("", None, None);
        assert_eq!(
            table.get(Indicative, Tense::Perfect, Voice::Passive, Person::FirstSingular),
            Some("latus sum")
        );
        assert_eq!(table.non_finite(NonFinite::PerfectParticiple), Some("latus"));
    }

    #[test]
    fn test_memini_is_perfect_only() {
        let table = MEMINI.table("", None, None);
        assert!(table.row(Indicative, Present, Voice::Active).is_none());
        assert_eq!(
            table.get(Indicative, Tense::Perfect, Voice::Active, Person::ThirdSingular),
            Some("meminit")
        );
        assert_eq!(table.non_finite(NonFinite::PerfectActiveInfinitive), Some("meminisse"));
    }
}
