//! Integration tests for the build pipeline
//!
//! These tests run lexicon text through the loader, filter, merger and
//! index, and check the finished dictionary.

use std::io::Cursor;

use ludus_domain::{EntryId, GapScope, LexicalRecord, NonFinite, ParadigmTable, PartOfSpeech};
use ludus_domain::{Mood, Person, Tense, Voice};
use ludus_extractor::{priority_records, ExtractorConfig, RecordReader};
use ludus_gatekeeper::{FilterConfig, Gatekeeper};
use ludus_morph::{citation_form, full_paradigm, search_forms};
use ludus_store::{
    build_dictionary, normalize_form, BuildConfig, BuildContext, Dictionary, IngestOutcome,
};

fn fixed_width(stems: &str, code: &str, gloss: &str) -> String {
    format!("{:<76}{:<34}{}\n", stems, code, gloss)
}

fn record(stems: &[&str], pos: PartOfSpeech, code: &str, gloss: &str) -> LexicalRecord {
    LexicalRecord::new(
        stems.iter().map(|s| s.to_string()).collect(),
        pos,
        code,
        None,
        gloss,
    )
}

fn build(records: Vec<LexicalRecord>) -> Dictionary {
    let mut context = BuildContext::with_defaults();
    for record in records {
        context.ingest(record);
    }
    context.finish()
}

fn sample_lexicon() -> String {
    [
        fixed_width("aqu", "N 1 1 F T", "water; (also used of rain)"),
        fixed_width("am am amav amat", "V 1 1 TRANS", "love, like; fall in love with"),
        fixed_width("pati pat zzz pass", "V 3 1 DEP", "suffer, endure; permit"),
        fixed_width("zzz zzz", "N 1 1 F T", "test entry"),
        "short line\n".to_string(),
        fixed_width("bon bon mel optim", "ADJ 1 1 POS", "good, honest, brave"),
        fixed_width(
            "su es fu fut",
            "V 5 1 TO_BEING",
            "be; exist; (also used to form verb perfect passive tenses) with NOM PERF PPL",
        ),
    ]
    .concat()
}

fn build_sample(with_priority: bool) -> Dictionary {
    let reader = RecordReader::new(Cursor::new(sample_lexicon()), ExtractorConfig::default());
    let mut reader = if with_priority {
        reader.with_priority(priority_records())
    } else {
        reader
    };
    build_dictionary(&mut reader, BuildConfig::default(), Gatekeeper::default_config()).unwrap()
}

/// Every indexed (form, id) pair is produced by the entry, and every
/// produced form is indexed for it
fn assert_index_integrity(dictionary: &Dictionary) {
    for (form, ids) in dictionary.index().iter() {
        for id in ids {
            let entry = dictionary.entry(*id).expect("id refers to a live entry");
            let produced = search_forms(&entry.record);
            assert!(
                produced.iter().any(|p| normalize_form(p) == form),
                "form '{}' is indexed for entry {} but not produced by it",
                form,
                id
            );
        }
    }

    for entry in dictionary.entries() {
        for form in search_forms(&entry.record) {
            assert!(
                dictionary.index().get(&form).contains(&entry.id),
                "form '{}' of entry {} is not indexed",
                form,
                entry.id
            );
        }
    }
}

#[test]
fn test_end_to_end_build() {
    let dictionary = build_sample(false);

    assert_eq!(dictionary.len(), 5);
    let metadata = dictionary.metadata();
    assert_eq!(metadata.records_processed, 6);
    assert_eq!(metadata.records_rejected, 1);
    assert_eq!(metadata.total_entries, 5);
    assert_eq!(metadata.total_forms, dictionary.index().len());

    assert_eq!(dictionary.lookup("amavit")[0].citation_form, "amo, amare, amavi, amatum");
    assert_eq!(dictionary.lookup("meliorem")[0].citation_form, "bonus, melior, optimus");
    assert_index_integrity(&dictionary);
}

#[test]
fn test_priority_records_win_duplicates() {
    let dictionary = build_sample(true);

    // The lexicon's own row for sum duplicates the priority row and loses
    let sum = dictionary.lookup("sumus");
    assert_eq!(sum.len(), 1);
    assert_eq!(sum[0].id, EntryId::new(0));
    assert!(dictionary.metadata().duplicates_discarded >= 1);
    assert_index_integrity(&dictionary);
}

#[test]
fn test_scenario_first_declension_noun() {
    let dictionary = build(vec![record(&["aqu"], PartOfSpeech::Noun, "1", "water")]);
    let entry = &dictionary.entries()[0];

    assert_eq!(entry.citation_form, "aqua, aquae");
    for form in ["aqu", "aqua", "aquae", "aquam", "aquas", "aquarum", "aquis"] {
        assert_eq!(dictionary.lookup(form), vec![entry], "missing {}", form);
    }
}

#[test]
fn test_scenario_to_be() {
    let dictionary = build(priority_records());
    let entry = dictionary.lookup("sumus")[0];

    for form in ["sum", "es", "est", "sumus", "estis", "sunt", "esse", "fui"] {
        assert!(
            dictionary.lookup(form).iter().any(|found| found.id == entry.id),
            "missing {}",
            form
        );
    }

    let paradigm = dictionary.paradigm(entry.id).unwrap();
    assert!(paradigm.has_gap(GapScope::PassiveVoice));
    assert!(paradigm.gaps.iter().any(|gap| gap.reason.contains("no passive forms")));
}

#[test]
fn test_scenario_third_conjugation_io_deponent() {
    let dictionary = build(vec![record(
        &["pati", "pat", "zzz", "pass"],
        PartOfSpeech::Verb,
        "3 1 DEP",
        "suffer, endure",
    )]);
    let entry = &dictionary.entries()[0];
    let paradigm = full_paradigm(entry);

    let ParadigmTable::Conjugation(table) = &paradigm.table else {
        panic!("expected a conjugation, got {:?}", paradigm.table);
    };
    let present = |person| table.get(Mood::Indicative, Tense::Present, Voice::Passive, person);

    assert_eq!(present(Person::ThirdSingular), Some("patitur"));
    assert_eq!(present(Person::FirstSingular), Some("patior"));
    assert_eq!(present(Person::ThirdPlural), Some("patiuntur"));
    assert_eq!(table.non_finite(NonFinite::PresentPassiveInfinitive), Some("pati"));
    assert!(!table.has_voice(Voice::Active));

    // The index agrees with the paradigm
    assert_eq!(dictionary.lookup("patitur"), vec![entry]);
    assert!(dictionary.lookup("patitor").is_empty());
}

#[test]
fn test_dedup_is_order_independent() {
    let worse = record(&["am", "am", "amav", "amat", "zzz"], PartOfSpeech::Verb, "1 1", "love");
    let better = record(&["am", "am", "amav", "amat"], PartOfSpeech::Verb, "1 1", "love");
    let other = record(&["aqu"], PartOfSpeech::Noun, "1 1", "water");

    let forward = build(vec![worse.clone(), better.clone(), other.clone()]);
    let backward = build(vec![better.clone(), worse.clone(), other]);

    assert_eq!(forward.entries(), backward.entries());
    assert_eq!(forward.entries()[0].record, better);
    assert_eq!(forward.metadata().duplicates_replaced, 1);
    assert_eq!(backward.metadata().duplicates_discarded, 1);

    let forward_forms: Vec<&str> = forward.index().iter().map(|(form, _)| form).collect();
    let backward_forms: Vec<&str> = backward.index().iter().map(|(form, _)| form).collect();
    assert_eq!(forward_forms, backward_forms);
}

#[test]
fn test_replace_keeps_id_and_repairs_index() {
    let mut context = BuildContext::with_defaults();
    context.ingest(record(&["aqu"], PartOfSpeech::Noun, "1 1", "water"));
    context.ingest(record(&["am", "zzz", "amav"], PartOfSpeech::Verb, "1 1", "love"));
    let outcome = context.ingest(record(&["am", "amav"], PartOfSpeech::Verb, "1 1", "love"));

    assert_eq!(outcome, IngestOutcome::Replaced(EntryId::new(1)));
    let dictionary = context.finish();
    assert!(dictionary.lookup("amavisti").is_empty());
    assert_index_integrity(&dictionary);
}

#[test]
fn test_build_is_deterministic() {
    let first = build_sample(true).to_json().unwrap();
    let second = build_sample(true).to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_citation_form_is_reproducible() {
    let dictionary = build_sample(true);
    for entry in dictionary.entries() {
        assert_eq!(citation_form(&entry.record), entry.citation_form);
    }
}

#[test]
fn test_artifact_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.json");

    let dictionary = build_sample(true);
    dictionary.save(&path).unwrap();
    let loaded = Dictionary::load(&path).unwrap();

    assert_eq!(loaded.entries(), dictionary.entries());
    assert_eq!(loaded.index(), dictionary.index());
    assert_eq!(loaded.lookup_english("water"), dictionary.lookup_english("water"));
    assert_index_integrity(&loaded);
}

#[test]
fn test_strict_filter_rejects_perfect_only_rows() {
    let mut reader = priority_records().into_iter();
    let strict = build_dictionary(
        &mut reader,
        BuildConfig::default(),
        Gatekeeper::new(FilterConfig::strict()),
    )
    .unwrap();

    assert!(strict.lookup("meminisse").is_empty());
    assert!(strict.metadata().records_rejected >= 2);

    let default = build(priority_records());
    assert!(!default.lookup("meminisse").is_empty());
}
