//! Translation service
//!
//! Decodes messages from strings, files and readers using a shared decoder.

use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Decoder, ToTermTree};
use crate::infrastructure::traits::FileSystem;

/// What to do with a code token that has no letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissPolicy {
    /// Contribute nothing for that letter and keep going.
    #[default]
    Skip,
    /// Abort the whole translation.
    Fail,
}

impl FromStr for MissPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(MissPolicy::Skip),
            "fail" => Ok(MissPolicy::Fail),
            other => Err(format!("unknown miss policy: {other} (expected skip or fail)")),
        }
    }
}

/// Service for translating Morse input into English.
pub struct TranslationService {
    decoder: Decoder,
    fs: Arc<dyn FileSystem>,
    policy: MissPolicy,
}

impl TranslationService {
    /// Create a service backed by the standard decoder.
    pub fn new(fs: Arc<dyn FileSystem>, policy: MissPolicy) -> Self {
        Self::with_decoder(Decoder::new(), fs, policy)
    }

    pub fn with_decoder(decoder: Decoder, fs: Arc<dyn FileSystem>, policy: MissPolicy) -> Self {
        Self {
            decoder,
            fs,
            policy,
        }
    }

    pub fn policy(&self) -> MissPolicy {
        self.policy
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Translate a single message according to the miss policy.
    #[instrument(level = "debug", skip(self))]
    pub fn decode(&self, message: &str) -> ApplicationResult<String> {
        match self.policy {
            MissPolicy::Skip => Ok(self.decoder.translate(message)),
            MissPolicy::Fail => Ok(self.decoder.translate_strict(message)?),
        }
    }

    /// Translate a file. All lines are concatenated without a separator
    /// before decoding.
    #[instrument(level = "debug", skip(self))]
    pub fn decode_file(&self, path: &Path) -> ApplicationResult<String> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read code file", path)?;
        let message: String = content.lines().collect();
        debug!("decode_file: {} chars of code", message.len());
        self.decode(&message)
    }

    /// Translate everything readable from `reader`, joined the same way as
    /// `decode_file`.
    pub fn decode_reader<R: BufRead>(&self, reader: R) -> ApplicationResult<String> {
        let message = reader
            .lines()
            .collect::<std::io::Result<String>>()
            .map_err(|e| ApplicationError::OperationFailed {
                context: "read code input".to_string(),
                source: Box::new(e),
            })?;
        self.decode(&message)
    }

    pub fn fingerprint(&self) -> String {
        self.decoder.fingerprint()
    }

    pub fn render_tree(&self) -> String {
        self.decoder.tree().to_term_tree().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::RealFileSystem;

    fn service(policy: MissPolicy) -> TranslationService {
        TranslationService::new(Arc::new(RealFileSystem), policy)
    }

    #[test]
    fn given_skip_policy_when_decoding_unknown_then_empty() {
        assert_eq!(service(MissPolicy::Skip).decode("......").unwrap(), "");
    }

    #[test]
    fn given_fail_policy_when_decoding_unknown_then_domain_error() {
        let err = service(MissPolicy::Fail).decode("......").unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[test]
    fn given_multiline_reader_when_decoding_then_lines_are_concatenated() {
        let input = "- .... . /\n . -. -..\n";
        let text = service(MissPolicy::Fail)
            .decode_reader(input.as_bytes())
            .unwrap();
        assert_eq!(text, "the end");
    }

    #[test]
    fn given_mixed_case_policy_when_parsing_then_accepts() {
        assert_eq!(" Fail ".parse::<MissPolicy>(), Ok(MissPolicy::Fail));
        assert!("abort".parse::<MissPolicy>().is_err());
    }

    #[test]
    fn given_policy_name_when_deserializing_then_maps_variant() {
        #[derive(Deserialize)]
        struct Wrapper {
            on_miss: MissPolicy,
        }
        let w: Wrapper = toml::from_str(r#"on_miss = "fail""#).unwrap();
        assert_eq!(w.on_miss, MissPolicy::Fail);
    }
}
