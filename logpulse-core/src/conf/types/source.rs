use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wire form of a log source, as written by operators.
///
/// `type` is free-form here so that unknown transports reach validation as
/// a reportable problem. Everything downstream works on [`Source`], obtained
/// through [`SourceSpec::lower`].
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceSpec {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pattern: String,

    // sftp
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<SftpAuthSpec>,

    // http
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<HttpIndexSpec>,

    // s3
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bucket: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub access_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secret_key: String,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SftpAuthSpec {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpIndexSpec {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Local,
    Sftp,
    Http,
    S3,
    Agent,
}

impl SourceKind {
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Local,
        SourceKind::Sftp,
        SourceKind::Http,
        SourceKind::S3,
        SourceKind::Agent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Local => "local",
            SourceKind::Sftp => "sftp",
            SourceKind::Http => "http",
            SourceKind::S3 => "s3",
            SourceKind::Agent => "agent",
        }
    }

    /// Case-insensitive, whitespace-tolerant lookup.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceTypeError {
    #[error("source type is missing")]
    Missing,

    #[error("unsupported source type '{0}'")]
    Unsupported(String),
}

/// A log source with the fields its transport needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Local(LocalSource),
    Sftp(SftpSource),
    Http(HttpSource),
    S3(S3Source),
    Agent,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LocalSource {
    pub path: Option<String>,
    pub pattern: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SftpSource {
    pub host: String,
    pub port: Option<u16>,
    pub user: String,
    pub auth: Option<SftpAuth>,
    pub path: Option<String>,
    pub pattern: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SftpAuth {
    pub key_file: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct HttpSource {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub index: Option<HttpIndex>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct HttpIndex {
    pub url: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct S3Source {
    pub bucket: String,
    pub prefix: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl Source {
    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Local(_) => SourceKind::Local,
            Source::Sftp(_) => SourceKind::Sftp,
            Source::Http(_) => SourceKind::Http,
            Source::S3(_) => SourceKind::S3,
            Source::Agent => SourceKind::Agent,
        }
    }
}

impl SourceSpec {
    /// Resolve the `type` field and pick out the fields that transport uses.
    pub fn lower(&self) -> Result<Source, SourceTypeError> {
        if self.kind.trim().is_empty() {
            return Err(SourceTypeError::Missing);
        }

        let kind = SourceKind::parse(&self.kind)
            .ok_or_else(|| SourceTypeError::Unsupported(self.kind.trim().to_string()))?;

        Ok(match kind {
            SourceKind::Local => Source::Local(LocalSource {
                path: present(&self.path),
                pattern: present(&self.pattern),
            }),
            SourceKind::Sftp => Source::Sftp(SftpSource {
                host: self.host.clone(),
                port: self.port,
                user: self.user.clone(),
                auth: self.auth.as_ref().map(|auth| SftpAuth {
                    key_file: present(&auth.key_file),
                    password: present(&auth.password),
                }),
                path: present(&self.path),
                pattern: present(&self.pattern),
            }),
            SourceKind::Http => Source::Http(HttpSource {
                url: self.url.clone(),
                headers: self.headers.clone(),
                index: self.index.as_ref().map(|index| HttpIndex {
                    url: index.url.clone(),
                }),
            }),
            SourceKind::S3 => Source::S3(S3Source {
                bucket: self.bucket.clone(),
                prefix: present(&self.prefix),
                region: present(&self.region),
                endpoint: present(&self.endpoint),
                access_key: present(&self.access_key),
                secret_key: present(&self.secret_key),
            }),
            SourceKind::Agent => Source::Agent,
        })
    }

    /// Build the wire form of a typed source.
    pub fn new(id: impl Into<String>, source: Source) -> Self {
        let mut spec = SourceSpec {
            id: id.into(),
            kind: source.kind().as_str().to_string(),
            ..Default::default()
        };

        match source {
            Source::Local(local) => {
                spec.path = local.path.unwrap_or_default();
                spec.pattern = local.pattern.unwrap_or_default();
            }
            Source::Sftp(sftp) => {
                spec.host = sftp.host;
                spec.port = sftp.port;
                spec.user = sftp.user;
                spec.auth = sftp.auth.map(|auth| SftpAuthSpec {
                    key_file: auth.key_file.unwrap_or_default(),
                    password: auth.password.unwrap_or_default(),
                });
                spec.path = sftp.path.unwrap_or_default();
                spec.pattern = sftp.pattern.unwrap_or_default();
            }
            Source::Http(http) => {
                spec.url = http.url;
                spec.headers = http.headers;
                spec.index = http.index.map(|index| HttpIndexSpec { url: index.url });
            }
            Source::S3(s3) => {
                spec.bucket = s3.bucket;
                spec.prefix = s3.prefix.unwrap_or_default();
                spec.region = s3.region.unwrap_or_default();
                spec.endpoint = s3.endpoint.unwrap_or_default();
                spec.access_key = s3.access_key.unwrap_or_default();
                spec.secret_key = s3.secret_key.unwrap_or_default();
            }
            Source::Agent => {}
        }

        spec
    }

    pub fn from_local(id: impl Into<String>, local: LocalSource) -> Self {
        Self::new(id, Source::Local(local))
    }
}

/// Empty strings mean "not configured". Whitespace-only values are kept so
/// validation can report them.
fn present(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
