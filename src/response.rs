use std::{
    io::{self, Write},
    path::PathBuf,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub source_path: PathBuf,
    pub public_url: String,
}

/// Outcome of one pass over the source directory.
#[derive(Debug, Default)]
pub struct UploadReport {
    pub uploaded: Vec<UploadResult>,
    pub failed: usize,
}

impl UploadReport {
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Total uploaded: {}", self.uploaded.len())?;
        for result in &self.uploaded {
            writeln!(out, "{}", result.public_url)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_urls() {
        let report = UploadReport {
            uploaded: vec![
                UploadResult {
                    source_path: PathBuf::from("Authflow/a.png"),
                    public_url: "https://s.example/b/a.png".to_owned(),
                },
                UploadResult {
                    source_path: PathBuf::from("Authflow/c.gif"),
                    public_url: "https://s.example/b/c.gif".to_owned(),
                },
            ],
            failed: 3,
        };

        let mut out = Vec::new();
        report.write_summary(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nTotal uploaded: 2\nhttps://s.example/b/a.png\nhttps://s.example/b/c.gif\n"
        );
    }
}
