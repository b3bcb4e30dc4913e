//! Subcommand handlers

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use exam_model::{find_subject, ExamPaper, SUBJECTS};
use paper_layout::{generate_exam_docx, LayoutSettings};
use store::{inspect_docx, DocxSummary};

use crate::cli::{Command, GenerateArgs, InspectArgs, SubjectsArgs};

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => {
            let path = generate(&args)?;
            println!("{}", path.display());
            Ok(())
        }
        Command::Subjects(args) => subjects(&args),
        Command::Inspect(args) => inspect(&args),
    }
}

/// Render the request and write it; returns the written path
pub fn generate(args: &GenerateArgs) -> Result<PathBuf> {
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let paper = ExamPaper::from_json(&json)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let settings = match &args.settings {
        Some(path) => LayoutSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => LayoutSettings::default(),
    };

    let bytes = generate_exam_docx(&paper, &settings).context("failed to generate document")?;

    let path = output_path(args.output.as_deref(), &paper.metadata.download_name());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(&path, &bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(
        "Wrote {} ({} bytes, {} question(s))",
        path.display(),
        bytes.len(),
        paper.question_count()
    );
    Ok(path)
}

/// Where the document goes: the given file, the download name inside a
/// given directory, or the download name in the working directory
pub fn output_path(output: Option<&Path>, download_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(download_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(download_name),
    }
}

fn subjects(args: &SubjectsArgs) -> Result<()> {
    let json = match &args.name {
        Some(name) => match find_subject(name) {
            Some(subject) => serde_json::to_string_pretty(subject)?,
            None => bail!("unknown subject: {}", name),
        },
        None => serde_json::to_string_pretty(SUBJECTS)?,
    };
    println!("{}", json);
    Ok(())
}

fn inspect(args: &InspectArgs) -> Result<()> {
    let summary = inspect_docx(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    print!("{}", render_summary(&summary));
    Ok(())
}

/// Plain-text listing of a package: title, tables row by row, paragraphs, footer
pub fn render_summary(summary: &DocxSummary) -> String {
    let mut out = String::new();

    if let Some(title) = &summary.title {
        out.push_str(&format!("Title: {}\n", title));
    }
    for (i, table) in summary.tables.iter().enumerate() {
        out.push_str(&format!("Table {} ({} rows)\n", i + 1, table.len()));
        for row in table {
            let cells: Vec<String> = row.iter().map(|c| c.replace('\n', " / ")).collect();
            out.push_str(&format!("  | {} |\n", cells.join(" | ")));
        }
    }
    for para in summary.paragraphs.iter().filter(|p| !p.is_empty()) {
        out.push_str(&format!("{}\n", para));
    }
    if let Some(footer) = &summary.footer {
        out.push_str(&format!("Footer: {}\n", footer));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"{
        "metadata": {"schoolName": "Hill School", "subject": "Science", "examType": "Unit Test"},
        "sections": [{"id": "A", "questions": [{"text": "Name a metal.", "marks": 1}]}]
    }"#;

    fn write_request(dir: &Path) -> PathBuf {
        let input = dir.join("paper.json");
        std::fs::write(&input, REQUEST).unwrap();
        input
    }

    #[test]
    fn test_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let name = "A_B_C.docx";

        assert_eq!(output_path(None, name), PathBuf::from(name));
        assert_eq!(output_path(Some(dir.path()), name), dir.path().join(name));

        let file = dir.path().join("custom.docx");
        assert_eq!(output_path(Some(&file), name), file);
    }

    #[test]
    fn test_generate_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            input: write_request(dir.path()),
            output: Some(dir.path().to_path_buf()),
            settings: None,
        };

        let path = generate(&args).unwrap();
        assert_eq!(path, dir.path().join("Hill_School_Science_Unit_Test.docx"));

        let summary = inspect_docx(&path).unwrap();
        assert!(summary.contains_text("Name a metal."));

        let listing = render_summary(&summary);
        assert!(listing.starts_with("Title: Hill School - Science - Unit Test\n"));
        assert!(listing.contains("| 1. | Name a metal. | 1 |"));
        assert!(listing.ends_with("Footer: Page 1 of 1\n"));
    }

    #[test]
    fn test_generate_keeps_slashed_school_name_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.json");
        std::fs::write(
            &input,
            r#"{"metadata": {"schoolName": "St. Mary's / Pune", "subject": "Science", "examType": "Unit Test"}}"#,
        )
        .unwrap();
        let args = GenerateArgs {
            input,
            output: Some(dir.path().to_path_buf()),
            settings: None,
        };

        let path = generate(&args).unwrap();
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("St._Mary's___Pune_Science_Unit_Test.docx")
        );
        assert!(path.exists());
    }

    #[test]
    fn test_generate_with_missing_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            input: write_request(dir.path()),
            output: Some(dir.path().join("nested").join("paper.docx")),
            settings: Some(dir.path().join("absent.json")),
        };

        let path = generate(&args).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_generate_reports_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        std::fs::write(&input, "{not json").unwrap();

        let err = generate(&GenerateArgs {
            input: input.clone(),
            output: Some(dir.path().to_path_buf()),
            settings: None,
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse"));

        let err = generate(&GenerateArgs {
            input: dir.path().join("missing.json"),
            output: None,
            settings: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_unknown_subject() {
        let err = subjects(&SubjectsArgs {
            name: Some("Astrology".to_string()),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown subject: Astrology");
    }
}
