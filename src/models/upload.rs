use serde::Serialize;

/// Structured body returned by `POST /products/upload`, for both the accepted
/// and the rejected cases. Record counts are only present on acceptance.
#[derive(Debug, Serialize)]
pub struct UploadReport {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_records: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_records: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_id: Option<u32>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl UploadReport {
    /// The canned acceptance body. Counts are fixed placeholders until a real
    /// ingestion pipeline (parse, validate, per-row report) replaces the stub.
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: "Products uploaded successfully".to_string(),
            total_records: Some(15),
            successful_records: Some(15),
            failed_records: Some(0),
            upload_id: Some(17),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn rejected(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            total_records: None,
            successful_records: None,
            failed_records: None,
            upload_id: None,
            errors,
            warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_body_carries_fixed_counts() {
        let json = serde_json::to_value(UploadReport::accepted()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["total_records"], 15);
        assert_eq!(json["successful_records"], 15);
        assert_eq!(json["failed_records"], 0);
        assert_eq!(json["upload_id"], 17);
    }

    #[test]
    fn rejected_body_omits_counts() {
        let report = UploadReport::rejected("no file", vec!["no file selected".to_string()]);
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("total_records").is_none());
        assert!(json.get("upload_id").is_none());
        assert_eq!(json["errors"][0], "no file selected");
    }
}
