use crate::entity_fields;
use crate::models::{SslVerify, TlsVersion};
use serde::{Deserialize, Serialize};

/// TLS settings shared by binds, servers and `default-server`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SslOptions {
    #[serde(default)]
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_certificate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crl_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<SslVerify>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_min_ver: Option<TlsVersion>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_max_ver: Option<TlsVersion>,

    /// OpenSSL cipher list for TLSv1.2 and below.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphers: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphersuites: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub curves: Option<Vec<String>>,

    #[serde(default)]
    pub no_tls_tickets: bool,
}

entity_fields!(SslOptions {
    scalar enabled,
    optional ssl_certificate,
    optional ca_file,
    optional crl_file,
    optional verify,
    optional ssl_min_ver,
    optional ssl_max_ver,
    optional ciphers,
    optional ciphersuites,
    optional alpn,
    optional sni,
    sequence curves,
    scalar no_tls_tickets,
});
