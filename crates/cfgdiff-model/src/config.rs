use cfgdiff_types::{config_record, Record, SENSITIVE_PATHS};
use serde::{Deserialize, Serialize};

use crate::settings::{
    ElasticsearchSettings, EmailSettings, FileSettings, LdapSettings, LogSettings,
    MessageExportSettings, PluginSettings, ServiceSettings, SqlSettings, SsoSettings,
};

config_record! {
    @redact redact_config;
    /// Complete server configuration.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Config {
        pub service_settings: ServiceSettings => "ServiceSettings",
        pub sql_settings: SqlSettings => "SqlSettings",
        pub log_settings: LogSettings => "LogSettings",
        pub file_settings: FileSettings => "FileSettings",
        pub email_settings: EmailSettings => "EmailSettings",
        pub ldap_settings: LdapSettings => "LdapSettings",
        pub gitlab_settings: SsoSettings => "GitLabSettings",
        pub google_settings: SsoSettings => "GoogleSettings",
        pub office365_settings: SsoSettings => "Office365Settings",
        pub openid_settings: SsoSettings => "OpenIdSettings",
        pub elasticsearch_settings: ElasticsearchSettings => "ElasticsearchSettings",
        pub message_export_settings: MessageExportSettings => "MessageExportSettings",
        pub plugin_settings: PluginSettings => "PluginSettings",
    }
}

/// Mask every set secret in a configuration record.
fn redact_config(record: &mut Record) {
    for path in SENSITIVE_PATHS {
        record.mask(path);
    }
}
