use std::io::{self, BufRead, Write};

use crate::data::model::TableSummary;

// ---------------------------------------------------------------------------
// Console interaction
// ---------------------------------------------------------------------------
//
// Prompts are generic over reader/writer so they can be driven from
// tests with in-memory buffers.

/// How many filtered identifiers to list before truncating.
const MAX_LISTED: usize = 10;

pub fn show_info(message: &str) {
    println!("ℹ️  INFO: {message}");
}

pub fn show_success(message: &str) {
    println!("✅ SUCCESS: {message}");
}

pub fn show_error(message: &str) {
    eprintln!("❌ ERROR: {message}");
}

fn read_trimmed(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Ask for a keyword; re-prompts until non-empty.
pub fn prompt_keyword(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    loop {
        write!(output, "Inserire una parola chiave per filtrare i dati: ")?;
        output.flush()?;
        let keyword = read_trimmed(input)?;
        if !keyword.is_empty() {
            return Ok(keyword);
        }
        writeln!(output, "Inserire una parola chiave valida.")?;
    }
}

/// Show the filtered identifiers (first ten) and ask the user to pick
/// one; re-prompts until the answer is in the list.
pub fn prompt_selection(
    input: &mut impl BufRead,
    output: &mut impl Write,
    identifiers: &[String],
) -> io::Result<String> {
    writeln!(output, "\nDataset disponibili:")?;
    for (i, id) in identifiers.iter().take(MAX_LISTED).enumerate() {
        writeln!(output, "{}. {id}", i + 1)?;
    }
    if identifiers.len() > MAX_LISTED {
        writeln!(output, "... e altri {} dataset", identifiers.len() - MAX_LISTED)?;
    }

    loop {
        write!(output, "\nInserisci il nome del dato che desideri selezionare: ")?;
        output.flush()?;
        let selection = read_trimmed(input)?;
        if identifiers.contains(&selection) {
            return Ok(selection);
        }
        writeln!(output, "Selezionare un dataset presente nella lista.")?;
    }
}

/// Ask for a CSV URL; re-prompts until it starts with `http`.
pub fn prompt_manual_url(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    loop {
        write!(output, "Inserisci l'URL del file CSV manualmente: ")?;
        output.flush()?;
        let url = read_trimmed(input)?;
        if url.starts_with("http") {
            return Ok(url);
        }
        writeln!(output, "Inserire un URL valido che inizi con http.")?;
    }
}

/// Print the table summary: counts, columns, missing values and types.
pub fn display_summary(output: &mut impl Write, summary: &TableSummary) -> io::Result<()> {
    writeln!(output, "\n=== RIEPILOGO DATI ===")?;
    writeln!(output, "Numero totale di record: {}", summary.rows)?;
    writeln!(output, "Numero di colonne: {}", summary.columns.len())?;
    if !summary.columns.is_empty() {
        writeln!(output, "\nColonne disponibili:")?;
        for col in &summary.columns {
            writeln!(
                output,
                "  - {} ({}, {} mancanti)",
                col.name, col.inferred, col.missing
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn keyword_prompt_rejects_empty_input() {
        let mut input = Cursor::new("\n  \nincidenti\n");
        let mut output = Vec::new();
        let keyword = prompt_keyword(&mut input, &mut output).unwrap();
        assert_eq!(keyword, "incidenti");
    }

    #[test]
    fn selection_prompt_loops_until_a_listed_identifier() {
        let identifiers = vec!["a".to_string(), "b".to_string()];
        let mut input = Cursor::new("z\nb\n");
        let mut output = Vec::new();
        let picked = prompt_selection(&mut input, &mut output, &identifiers).unwrap();
        assert_eq!(picked, "b");

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("1. a"));
        assert!(shown.contains("2. b"));
    }

    #[test]
    fn selection_prompt_truncates_long_lists() {
        let identifiers: Vec<String> = (0..12).map(|i| format!("dataset-{i}")).collect();
        let mut input = Cursor::new("dataset-11\n");
        let mut output = Vec::new();
        prompt_selection(&mut input, &mut output, &identifiers).unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("dataset-9"));
        assert!(!shown.contains("11. dataset-10"));
        assert!(shown.contains("... e altri 2 dataset"));
    }

    #[test]
    fn manual_url_must_start_with_http() {
        let mut input = Cursor::new("ftp://x\nhttp://x/data.csv\n");
        let mut output = Vec::new();
        let url = prompt_manual_url(&mut input, &mut output).unwrap();
        assert_eq!(url, "http://x/data.csv");
    }

    #[test]
    fn closed_input_is_an_error_not_a_hang() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt_keyword(&mut input, &mut output).is_err());
    }
}
