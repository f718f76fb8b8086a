use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyMode {
    #[default]
    Http,
    Tcp,
}

/// HAProxy's `enabled`/`disabled` keyword pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceAlgorithm {
    #[default]
    Roundrobin,
    #[serde(rename = "static-rr")]
    StaticRr,
    Leastconn,
    First,
    Source,
    Uri,
    #[serde(rename = "url_param")]
    UrlParam,
    #[serde(rename = "hdr")]
    Header,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieType {
    Rewrite,
    Insert,
    Prefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StickTableType {
    Ip,
    Ipv6,
    Integer,
    String,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SslVerify {
    None,
    Optional,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TlsVersion {
    #[serde(rename = "SSLv3")]
    Sslv3,
    #[serde(rename = "TLSv1.0")]
    Tlsv10,
    #[serde(rename = "TLSv1.1")]
    Tlsv11,
    #[serde(rename = "TLSv1.2")]
    Tlsv12,
    #[serde(rename = "TLSv1.3")]
    Tlsv13,
}

/// `if` / `unless` guard on a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    If,
    Unless,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HttpRequestRuleType {
    #[default]
    Allow,
    Deny,
    Redirect,
    AddHeader,
    SetHeader,
    DelHeader,
    Return,
}
