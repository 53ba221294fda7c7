use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    /// The text-generation call behind one advisory category failed.
    #[error("failed to {context}: {source}")]
    Backend {
        context: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn backend(context: &'static str, source: Error) -> Self {
        Self::Backend {
            context,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_names_the_failing_category() {
        let err = Error::backend("check symptoms", Error::llm("quota exceeded"));
        assert_eq!(
            err.to_string(),
            "failed to check symptoms: LLM error: quota exceeded"
        );
    }

    #[test]
    fn test_backend_error_exposes_source() {
        let err = Error::backend("get medication info", Error::llm("boom"));
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("LLM error: boom"));
    }
}
