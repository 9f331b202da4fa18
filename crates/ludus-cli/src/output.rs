//! Output formatting for the CLI.

use colored::*;
use ludus_domain::{
    Case, DeclensionColumn, DictionaryEntry, Number, Paradigm, ParadigmTable, Person, VerbTable,
};
use ludus_store::{entry_to_dto, ArtifactMetadata, EntryDto};
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

use crate::config::OutputFormat;
use crate::error::Result;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format dictionary entries.
    pub fn format_entries(&self, entries: &[&DictionaryEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let dtos: Vec<EntryDto> = entries.iter().map(|entry| entry_to_dto(entry)).collect();
                Ok(serde_json::to_string_pretty(&dtos)?)
            }
            OutputFormat::Table => Ok(self.format_entries_table(entries)),
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|entry| entry.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_entries_table(&self, entries: &[&DictionaryEntry]) -> String {
        if entries.is_empty() {
            return self.colorize("No entries found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Citation form", "Part of speech", "Meaning"]);

        for entry in entries {
            builder.push_record([
                entry.id.to_string(),
                entry.citation_form.clone(),
                entry.record.part_of_speech.display_name().to_string(),
                entry.record.gloss.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a full paradigm.
    pub fn format_paradigm(&self, paradigm: &Paradigm) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&paradigm_json(paradigm))?),
            OutputFormat::Quiet => Ok(paradigm.surface_forms().join("\n")),
            OutputFormat::Table => Ok(self.format_paradigm_table(paradigm)),
        }
    }

    fn format_paradigm_table(&self, paradigm: &Paradigm) -> String {
        let mut sections = vec![self.colorize(
            &format!(
                "{} ({})",
                paradigm.citation_form,
                paradigm.part_of_speech.display_name()
            ),
            "cyan",
        )];

        match &paradigm.table {
            ParadigmTable::Declension(columns) => sections.push(declension_table(columns)),
            ParadigmTable::Conjugation(table) => {
                if !table.rows.is_empty() {
                    sections.push(finite_table(table));
                }
                if !table.non_finite.is_empty() {
                    sections.push(non_finite_table(table));
                }
            }
            ParadigmTable::Indeclinable(form) => {
                sections.push(format!("{} (indeclinable)", form));
            }
            ParadigmTable::Forms(forms) => sections.push(forms.join(", ")),
        }

        for gap in &paradigm.gaps {
            sections.push(self.warning(&gap.to_string()));
        }

        sections.join("\n")
    }

    /// Format artifact metadata.
    pub fn format_metadata(&self, metadata: &ArtifactMetadata) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(metadata)?),
            OutputFormat::Quiet => Ok(format!("{} {}", metadata.total_entries, metadata.total_forms)),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                let rows = [
                    ("Source", metadata.source.clone()),
                    ("Version", metadata.version.clone()),
                    ("Entries", metadata.total_entries.to_string()),
                    ("Forms", metadata.total_forms.to_string()),
                    ("Records processed", metadata.records_processed.to_string()),
                    ("Records rejected", metadata.records_rejected.to_string()),
                    ("Duplicates replaced", metadata.duplicates_replaced.to_string()),
                    ("Duplicates discarded", metadata.duplicates_discarded.to_string()),
                ];
                for (field, value) in rows {
                    builder.push_record([field.to_string(), value]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn cell(form: Option<&str>) -> String {
    form.unwrap_or("-").to_string()
}

/// Case rows against gender and number columns.
fn declension_table(columns: &[DeclensionColumn]) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Case".to_string()];
    for column in columns {
        header.push(format!("{} sg.", column.gender.label()));
        header.push(format!("{} pl.", column.gender.label()));
    }
    builder.push_record(header);

    for case in Case::ALL {
        let mut row = vec![case.label().to_string()];
        for column in columns {
            row.push(cell(column.get(case, Number::Singular)));
            row.push(cell(column.get(case, Number::Plural)));
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn finite_table(verbs: &VerbTable) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Tense".to_string()];
    header.extend(Person::ALL.iter().map(|person| person.label().to_string()));
    builder.push_record(header);

    for row in &verbs.rows {
        let mut record = vec![row.label()];
        record.extend(Person::ALL.iter().map(|person| cell(row.forms.get(*person))));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn non_finite_table(verbs: &VerbTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Form", "Value"]);
    for form in &verbs.non_finite {
        builder.push_record([form.kind.label().to_string(), form.form.clone()]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// JSON shape of a paradigm; absent cells are `null`.
fn paradigm_json(paradigm: &Paradigm) -> serde_json::Value {
    let table = match &paradigm.table {
        ParadigmTable::Declension(columns) => {
            let columns: Vec<serde_json::Value> = columns
                .iter()
                .map(|column| {
                    let number = |number: Number| {
                        Case::ALL
                            .iter()
                            .map(|case| (case.label().to_string(), json!(column.get(*case, number))))
                            .collect::<serde_json::Map<_, _>>()
                    };
                    json!({
                        "gender": column.gender.label(),
                        "singular": number(Number::Singular),
                        "plural": number(Number::Plural),
                    })
                })
                .collect();
            json!({ "declension": columns })
        }
        ParadigmTable::Conjugation(verbs) => {
            let rows: Vec<serde_json::Value> = verbs
                .rows
                .iter()
                .map(|row| {
                    let forms: serde_json::Map<_, _> = Person::ALL
                        .iter()
                        .map(|person| (person.label().to_string(), json!(row.forms.get(*person))))
                        .collect();
                    json!({ "label": row.label(), "forms": forms })
                })
                .collect();
            let non_finite: serde_json::Map<_, _> = verbs
                .non_finite
                .iter()
                .map(|form| (form.kind.label().to_string(), json!(form.form)))
                .collect();
            json!({ "conjugation": { "rows": rows, "nonFinite": non_finite } })
        }
        ParadigmTable::Indeclinable(form) => json!({ "indeclinable": form }),
        ParadigmTable::Forms(forms) => json!({ "forms": forms }),
    };

    let gaps: Vec<serde_json::Value> = paradigm
        .gaps
        .iter()
        .map(|gap| json!({ "scope": gap.scope.label(), "reason": gap.reason }))
        .collect();

    json!({
        "citationForm": paradigm.citation_form,
        "partOfSpeech": paradigm.part_of_speech.tag(),
        "table": table,
        "gaps": gaps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::{EntryId, LexicalRecord, PartOfSpeech};
    use ludus_morph::full_paradigm;

    fn create_test_entry() -> DictionaryEntry {
        let record = LexicalRecord::new(
            vec!["aqu".to_string()],
            PartOfSpeech::Noun,
            "1 1",
            None,
            "water",
        );
        DictionaryEntry::new(EntryId::new(7), record, "aqua, aquae")
    }

    fn create_test_verb() -> DictionaryEntry {
        let record = LexicalRecord::new(
            ["am", "am", "amav", "amat"].iter().map(|s| s.to_string()).collect(),
            PartOfSpeech::Verb,
            "1 1 TRANS",
            None,
            "love, like",
        );
        DictionaryEntry::new(EntryId::new(3), record, "amo, amare, amavi, amatum")
    }

    #[test]
    fn test_json_entries() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let entry = create_test_entry();
        let output = formatter.format_entries(&[&entry]).unwrap();
        assert!(output.contains("\"citationForm\": \"aqua, aquae\""));
        assert!(output.contains("\"meaning\": \"water\""));
    }

    #[test]
    fn test_quiet_entries() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let entry = create_test_entry();
        assert_eq!(formatter.format_entries(&[&entry]).unwrap(), "7");
    }

    #[test]
    fn test_table_entries() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let entry = create_test_entry();
        let output = formatter.format_entries(&[&entry]).unwrap();
        assert!(output.contains("Citation form"));
        assert!(output.contains("aqua, aquae"));
    }

    #[test]
    fn test_empty_entries() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_entries(&[]).unwrap();
        assert!(output.contains("No entries found"));
    }

    #[test]
    fn test_declension_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let paradigm = full_paradigm(&create_test_entry());
        let output = formatter.format_paradigm(&paradigm).unwrap();
        assert!(output.contains("aquarum"));
        assert!(output.contains(Case::ALL[0].label()));
    }

    #[test]
    fn test_conjugation_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let paradigm = full_paradigm(&create_test_verb());
        let output = formatter.format_paradigm(&paradigm).unwrap();
        assert!(output.contains("amavit"));
        assert!(output.contains(Person::ALL[0].label()));
    }

    #[test]
    fn test_paradigm_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let paradigm = full_paradigm(&create_test_verb());
        let output = formatter.format_paradigm(&paradigm).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["citationForm"], "amo, amare, amavi, amatum");
        assert!(value["table"]["conjugation"]["rows"].is_array());
    }

    #[test]
    fn test_paradigm_quiet_lists_forms() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let paradigm = full_paradigm(&create_test_entry());
        let output = formatter.format_paradigm(&paradigm).unwrap();
        assert!(output.lines().any(|line| line == "aquis"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("gap"), "⚠ gap");
    }
}
