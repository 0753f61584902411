#[cfg(test)]
mod tests {
    use crate::error::ProposalError;
    use crate::generator::outlet::{DiskOutlet, Outlet, ProposalDocument};
    use chrono::{Local, TimeZone};
    use std::fs;
    use tempfile::TempDir;

    fn at(sec: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, sec).unwrap()
    }

    fn is_timestamped_name(name: &str, company: &str) -> bool {
        let prefix = format!("ai_proposal_{}_", company);
        let Some(rest) = name.strip_prefix(&prefix) else {
            return false;
        };
        let Some(stamp) = rest.strip_suffix(".md") else {
            return false;
        };
        let parts: Vec<&str> = stamp.split('_').collect();
        parts.len() == 2
            && parts[0].len() == 8
            && parts[1].len() == 6
            && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
    }

    #[test]
    fn test_file_name_format() {
        let doc = ProposalDocument::with_timestamp("Acme", "body".to_string(), at(7));
        assert_eq!(doc.file_name(), "ai_proposal_Acme_20240309_140507.md");
        assert!(is_timestamped_name(&doc.file_name(), "Acme"));

        let now = ProposalDocument::new("Acme", String::new());
        assert!(is_timestamped_name(&now.file_name(), "Acme"));
    }

    #[test]
    fn test_file_name_unique_across_seconds_and_companies() {
        let a = ProposalDocument::with_timestamp("Acme", String::new(), at(1));
        let b = ProposalDocument::with_timestamp("Acme", String::new(), at(2));
        let c = ProposalDocument::with_timestamp("Globex", String::new(), at(1));

        assert_ne!(a.file_name(), b.file_name());
        assert_ne!(a.file_name(), c.file_name());
    }

    #[test]
    fn test_file_name_keeps_spaces_and_replaces_separators() {
        let doc = ProposalDocument::with_timestamp("Acme Corp", String::new(), at(0));
        assert_eq!(doc.file_name(), "ai_proposal_Acme Corp_20240309_140500.md");

        let doc = ProposalDocument::with_timestamp("A/B: \"C\"", String::new(), at(0));
        assert_eq!(doc.file_name(), "ai_proposal_A_B_ _C__20240309_140500.md");
    }

    #[test]
    fn test_save_writes_body_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let body = "# Proposal\n\n| a | b |\n|---|---|\n\n```mermaid\ngraph TD\n```\n";
        let doc = ProposalDocument::with_timestamp("Acme", body.to_string(), at(3));

        let path = DiskOutlet::new(temp_dir.path()).save(&doc).unwrap();

        assert_eq!(path, temp_dir.path().join(doc.file_name()));
        assert_eq!(fs::read_to_string(&path).unwrap(), body);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("reports").join("2024");
        let doc = ProposalDocument::with_timestamp("Acme", "x".to_string(), at(4));

        let path = DiskOutlet::new(&output_dir).save(&doc).unwrap();

        assert!(path.starts_with(&output_dir));
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_same_second() {
        let temp_dir = TempDir::new().unwrap();
        let outlet = DiskOutlet::new(temp_dir.path());

        let first = ProposalDocument::with_timestamp("Acme", "first".to_string(), at(5));
        let second = ProposalDocument::with_timestamp("Acme", "second".to_string(), at(5));
        outlet.save(&first).unwrap();
        let path = outlet.save(&second).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "second");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_reports_persistence_error() {
        let temp_dir = TempDir::new().unwrap();
        // 输出目录被一个普通文件占用
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "occupied").unwrap();

        let doc = ProposalDocument::with_timestamp("Acme", "x".to_string(), at(6));
        let err = DiskOutlet::new(blocker.join("nested")).save(&doc).unwrap_err();

        assert!(matches!(err, ProposalError::Persistence { .. }));
        assert!(err.to_string().starts_with("failed to write proposal to"));
    }
}
