use crate::value::Value;

/// Placeholder substituted for secret values before they leave the process.
pub const FAKE_SETTING: &str = "********************************";

/// Configuration paths whose values are never exposed verbatim.
pub const SENSITIVE_PATHS: &[&str] = &[
    "LdapSettings.BindPassword",
    "FileSettings.PublicLinkSalt",
    "FileSettings.AmazonS3SecretAccessKey",
    "SqlSettings.DataSource",
    "SqlSettings.AtRestEncryptKey",
    "SqlSettings.DataSourceReplicas",
    "SqlSettings.DataSourceSearchReplicas",
    "EmailSettings.SMTPPassword",
    "GitLabSettings.Secret",
    "GoogleSettings.Secret",
    "Office365Settings.Secret",
    "OpenIdSettings.Secret",
    "ElasticsearchSettings.Password",
    "MessageExportSettings.GlobalRelaySettings.SMTPUsername",
    "MessageExportSettings.GlobalRelaySettings.SMTPPassword",
    "MessageExportSettings.GlobalRelaySettings.EmailAddress",
    "ServiceSettings.GfycatAPISecret",
    "ServiceSettings.SplitKey",
    "PluginSettings.Plugins",
];

/// A configuration node that knows where its own secrets live.
///
/// Implementations replace secret values in place with [`FAKE_SETTING`].
/// Redacting twice must give the same result as redacting once.
pub trait SupportsRedaction {
    fn redact(&mut self);
}

impl SupportsRedaction for Value {
    fn redact(&mut self) {
        if let Some(target) = self.as_redactable_mut() {
            target.redact();
        }
    }
}
