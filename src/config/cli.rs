use crate::core::FormatRequest;
use crate::utils::error::Result;
use crate::utils::validation::validate_path;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where batch requests are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &str) -> Result<Self> {
        if arg == "-" {
            return Ok(InputSource::Stdin);
        }
        validate_path("input", arg)?;
        Ok(InputSource::File(PathBuf::from(arg)))
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            InputSource::File(path) => Ok(fs::read_to_string(path)?),
        }
    }

    pub fn read_requests(&self) -> Result<Vec<FormatRequest>> {
        let content = self.read_to_string()?;
        let requests: Vec<FormatRequest> = serde_json::from_str(&content)?;
        tracing::debug!("Read {} batch requests from {:?}", requests.len(), self);
        Ok(requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg("-").unwrap(), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg("requests.json").unwrap(),
            InputSource::File(PathBuf::from("requests.json"))
        );
        assert!(InputSource::from_arg("").is_err());
    }

    #[test]
    fn test_read_requests_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"[{"kind": "duration", "value": 59}]"#)
            .unwrap();

        let source = InputSource::File(temp_file.path().to_path_buf());
        let requests = source.read_requests().unwrap();
        assert_eq!(requests, vec![FormatRequest::Duration { value: 59.0 }]);
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{not json").unwrap();

        let source = InputSource::File(temp_file.path().to_path_buf());
        let err = source.read_requests().unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::FormatError::SerializationError(_)
        ));
    }
}
