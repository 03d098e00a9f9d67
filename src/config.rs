use envconfig::Envconfig;
use std::{convert::Infallible, str::FromStr};
use thiserror::Error;

pub const REQUIRED_VARS: &str = "ACCESS_KEY, SECRET_KEY, BUCKET_NAME and ENDPOINT_URL";

#[derive(Envconfig)]
pub struct Config {
    #[envconfig(from = "ACCESS_KEY")]
    pub access_key: String,

    #[envconfig(from = "SECRET_KEY")]
    pub secret_key: String,

    #[envconfig(from = "BUCKET_NAME")]
    pub bucket: String,

    #[envconfig(from = "ENDPOINT_URL")]
    pub endpoint_url: String,

    // Bucket CORS is not managed here, the value is only reported.
    #[envconfig(from = "ALLOWED_ORIGINS")]
    pub allowed_origins: Option<String>,

    #[envconfig(from = "IMAGE_DIR", default = "Authflow")]
    pub image_dir: String,

    #[envconfig(from = "PUBLIC_UPLOAD", default = "true")]
    pub public_upload: Flag,

    #[envconfig(from = "REGION", default = "us-east-1")]
    pub region: String,
}

impl Config {
    /// Rejects values that are present but unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("ACCESS_KEY", &self.access_key),
            ("SECRET_KEY", &self.secret_key),
            ("BUCKET_NAME", &self.bucket),
            ("ENDPOINT_URL", &self.endpoint_url),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(name));
            }
        }

        url::Url::parse(&self.endpoint_url)
            .map_err(|err| ConfigError::InvalidEndpoint(self.endpoint_url.clone(), err))?;

        Ok(())
    }

    pub fn visibility(&self) -> ObjectVisibility {
        if self.public_upload.0 {
            ObjectVisibility::PublicRead
        } else {
            ObjectVisibility::Default
        }
    }
}

/// Boolean switch that reads `true`, `1` and `yes` in any case as on and
/// everything else as off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag(pub bool);

impl FromStr for Flag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        Ok(Flag(matches!(value.as_str(), "true" | "1" | "yes")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectVisibility {
    PublicRead,
    /// No ACL is sent; the bucket policy decides.
    Default,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),
    #[error("Invalid endpoint URL {0:?}: {1}")]
    InvalidEndpoint(String, #[source] url::ParseError),
}
