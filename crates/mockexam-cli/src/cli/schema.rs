use crate::cli::opt;
use anyhow::Context;
use mockexam_config::exam::VersionConfig;
use schemars::schema_for;
use std::path::Path;

const TITLE: &str = "Mock Exam";

pub(crate) fn exec(schema: opt::Schema) -> Result<(), anyhow::Error> {
    let opt::Schema { output_folder } = schema;
    let output_folder = Path::new(&output_folder);
    std::fs::create_dir_all(output_folder)
        .with_context(|| format!("Failed to create {}", output_folder.display()))?;

    let output_path = output_folder.join("exam.json");
    std::fs::write(&output_path, exam_schema()?)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("Generated exam schema in {}", output_path.display());
    Ok(())
}

/// Pretty JSON Schema of the exam file format.
fn exam_schema() -> Result<String, serde_json::Error> {
    let mut schema = schema_for!(VersionConfig);
    schema.insert("title".to_owned(), TITLE.into());
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_exam_schema() {
        let schema: serde_json::Value = serde_json::from_str(&exam_schema().unwrap()).unwrap();
        assert_eq!(schema["title"], TITLE);
        let text = schema.to_string();
        assert!(text.contains("total-questions"));
        assert!(text.contains("correct-answer"));
    }
}
