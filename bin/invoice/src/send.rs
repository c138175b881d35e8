use crate::error::CliError;
use api::{InvoiceApi, Transport};
use common::{SendItem, Signature};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

/// Flags of the `send` command
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Ask the server to validate before accepting
    pub validate: bool,
    pub signature: Signature,
    /// Remove each local file once it has been accepted
    pub delete: bool,
}

/// A local file selected for sending, with its encoded payload
#[derive(Debug, Clone)]
pub struct PendingFile {
    pub path: PathBuf,
    pub item: SendItem,
}

/// Expand every pattern, in argument order, and encode each matched file.
///
/// All files are read before anything is sent, so an unreadable file stops
/// the command before the first request.
pub fn collect_files(patterns: &[String]) -> Result<Vec<PendingFile>, CliError> {
    let mut files = Vec::new();
    for pattern in patterns {
        let entries = glob::glob(pattern).map_err(|source| CliError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        let before = files.len();
        for entry in entries {
            let path = entry?;
            if !path.is_file() {
                debug!("{} skipped (not a file)", path.display());
                continue;
            }
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            let payload = codec::encode_file(&path)?;
            debug!("{} selected and encoded (base64)", file_name);

            files.push(PendingFile {
                item: SendItem {
                    payload,
                    file_name,
                    file_path: path.to_string_lossy().into_owned(),
                },
                path,
            });
        }
        if files.len() == before {
            warn!("{} matched no files", pattern);
        }
    }
    Ok(files)
}

/// Sends files one request at a time, stopping at the first failure
pub struct FileSender<'a, T> {
    api: &'a InvoiceApi<T>,
    options: SendOptions,
}

impl<'a, T: Transport> FileSender<'a, T> {
    pub fn new(api: &'a InvoiceApi<T>, options: SendOptions) -> Self {
        Self { api, options }
    }

    /// Send every file in order; returns how many were sent
    pub fn send_all(&self, files: &[PendingFile]) -> Result<usize, CliError> {
        for file in files {
            self.send_one(file)?;
        }
        Ok(files.len())
    }

    fn send_one(&self, file: &PendingFile) -> Result<(), CliError> {
        let status = self
            .api
            .send(&file.item, self.options.validate, self.options.signature)?;
        info!("{} sent successfully ({})", file.item.file_name, status);

        if self.options.delete {
            fs::remove_file(&file.path).map_err(|source| CliError::DeleteLocal {
                file_name: file.item.file_name.clone(),
                source,
            })?;
            debug!("{} deleted (--delete)", file.item.file_name);
        }
        Ok(())
    }
}

/// Expand `patterns` and send the matched files (convenience function)
pub fn send_files<T: Transport>(
    api: &InvoiceApi<T>,
    patterns: &[String],
    options: SendOptions,
) -> Result<usize, CliError> {
    let files = collect_files(patterns)?;
    FileSender::new(api, options).send_all(&files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::mock::MockTransport;
    use api::{ApiClient, ApiError, Credential, Endpoint, Method, StatusCode};
    use std::path::Path;

    fn api(transport: MockTransport) -> InvoiceApi<MockTransport> {
        InvoiceApi::new(ApiClient::new(
            transport,
            Endpoint::new("https://api.example.com", 1).unwrap(),
            Credential::new("key").unwrap(),
        ))
    }

    fn pattern(dir: &Path, name: &str) -> String {
        dir.join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_one_request_per_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file1.xml"), "<one/>").unwrap();
        fs::write(dir.path().join("file2.xml"), "<two/>").unwrap();

        let api = api(MockTransport::new());
        let options = SendOptions {
            validate: true,
            signature: Signature::Apply,
            delete: false,
        };
        let patterns = vec![
            pattern(dir.path(), "file1.xml"),
            pattern(dir.path(), "file2.xml"),
        ];
        assert_eq!(send_files(&api, &patterns, options).unwrap(), 2);

        let requests = api.client().transport().requests();
        assert_eq!(requests.len(), 2);
        for (request, expected) in requests.iter().zip(["file1.xml", "file2.xml"]) {
            assert_eq!(request.method, Method::Post);
            assert_eq!(request.url.path(), "/v1/send");
            assert_eq!(request.url.query(), Some("validate=true&signature=Apply"));
            let body: serde_json::Value =
                serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
            assert_eq!(body["FileName"], expected);
        }
    }

    #[test]
    fn test_wildcard_expansion_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.xml", "a.xml", "c.txt"] {
            fs::write(dir.path().join(name), name).unwrap();
        }
        fs::create_dir(dir.path().join("sub.xml")).unwrap();

        let files = collect_files(&[pattern(dir.path(), "*.xml")]).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.item.file_name.as_str()).collect();
        assert_eq!(names, ["a.xml", "b.xml"]);
        assert_eq!(files[0].item.payload, codec::encode(b"a.xml"));
    }

    #[test]
    fn test_unmatched_pattern_sends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(MockTransport::new());
        let sent = send_files(
            &api,
            &[pattern(dir.path(), "*.xml")],
            SendOptions::default(),
        )
        .unwrap();
        assert_eq!(sent, 0);
        assert!(api.client().transport().requests().is_empty());
    }

    #[test]
    fn test_malformed_pattern() {
        let err = collect_files(&["[".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::Pattern { .. }));
    }

    #[test]
    fn test_delete_after_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.xml");
        fs::write(&path, "<a/>").unwrap();

        let api = api(MockTransport::new());
        let options = SendOptions {
            delete: true,
            ..SendOptions::default()
        };
        send_files(&api, &[pattern(dir.path(), "a.xml")], options).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_first_failure_stops_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.xml", "b.xml", "c.xml"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let api = api(
            MockTransport::new()
                .respond(StatusCode::OK, "")
                .respond(StatusCode::BAD_REQUEST, "invalid document"),
        );
        let options = SendOptions {
            delete: true,
            ..SendOptions::default()
        };
        let err = send_files(&api, &[pattern(dir.path(), "*.xml")], options).unwrap_err();

        assert!(matches!(err, CliError::Api(ApiError::Status { .. })));
        assert_eq!(err.response_body(), Some("invalid document"));
        assert_eq!(api.client().transport().requests().len(), 2);
        assert!(!dir.path().join("a.xml").exists());
        assert!(dir.path().join("b.xml").exists());
        assert!(dir.path().join("c.xml").exists());
    }
}
