use axum::extract::Multipart;

/// An uploaded file with its data and original filename.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parsed form fields from the multipart submission upload.
#[derive(Debug)]
pub struct SubmissionForm {
    pub title: String,
    pub domain: String,
    pub degree_level: String,
    pub github_url: Option<String>,
    pub file: UploadedFile,
    pub dataset: Option<UploadedFile>,
}

/// Parse a multipart submission form into structured fields.
pub async fn parse_submission(mut multipart: Multipart) -> Result<SubmissionForm, String> {
    let mut title: Option<String> = None;
    let mut domain: Option<String> = None;
    let mut degree_level: Option<String> = None;
    let mut github_url: Option<String> = None;
    let mut file: Option<UploadedFile> = None;
    let mut dataset: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "title" => {
                let val = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read title: {}", e))?;
                if !val.is_empty() {
                    title = Some(val);
                }
            }
            "domain" => {
                let val = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read domain: {}", e))?;
                if !val.is_empty() {
                    domain = Some(val);
                }
            }
            "degree_level" => {
                let val = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read degree_level: {}", e))?;
                if !val.is_empty() {
                    degree_level = Some(val);
                }
            }
            "github_url" => {
                let val = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read github_url: {}", e))?;
                if !val.is_empty() {
                    github_url = Some(val);
                }
            }
            "file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {}", e))?
                    .to_vec();
                file = Some(UploadedFile { filename, data });
            }
            "dataset" => {
                let filename = field.file_name().unwrap_or("dataset.csv").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read dataset data: {}", e))?
                    .to_vec();
                if !data.is_empty() {
                    dataset = Some(UploadedFile { filename, data });
                }
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    Ok(SubmissionForm {
        title: title.ok_or("Missing title")?,
        domain: domain.ok_or("Missing domain")?,
        degree_level: degree_level.ok_or("Missing degree_level")?,
        github_url,
        file: file.ok_or("No file uploaded")?,
        dataset,
    })
}

/// Storage name for the paper: the submission id plus the original
/// extension, so `paper.pdf` for submission 7 lands as `7.pdf`.
pub fn saved_filename(id: u64, original: &str) -> String {
    match original.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{id}.{ext}"),
        _ => id.to_string(),
    }
}

/// Storage name for the optional dataset, `7_data.csv` style.
pub fn saved_dataset_filename(id: u64, original: &str) -> String {
    match original.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{id}_data.{ext}"),
        _ => format!("{id}_data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_filename_keeps_extension() {
        assert_eq!(saved_filename(7, "paper.pdf"), "7.pdf");
        assert_eq!(saved_filename(7, "thesis.final.docx"), "7.docx");
        assert_eq!(saved_dataset_filename(7, "results.csv"), "7_data.csv");
    }

    #[test]
    fn test_saved_filename_without_extension() {
        assert_eq!(saved_filename(3, "paper"), "3");
        assert_eq!(saved_filename(3, "paper."), "3");
        assert_eq!(saved_dataset_filename(3, "data"), "3_data");
    }
}
