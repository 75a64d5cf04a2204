//! Settings sections of the server configuration.
//!
//! Fields tagged `restart = "true"` only take effect after a server restart.
//! `access` lists the console areas allowed to read or write a field.

use std::collections::BTreeMap;

use cfgdiff_types::config_record;
use serde::{Deserialize, Serialize};

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ServiceSettings {
        pub site_url: Option<String> => "SiteURL"
            [access = "environment_web_server,authentication_saml,write_restrictable"],
        pub listen_address: Option<String> => "ListenAddress"
            [access = "environment_web_server,write_restrictable", restart = "true"],
        pub connection_security: Option<String> => "ConnectionSecurity"
            [access = "environment_web_server,write_restrictable", restart = "true"],
        pub read_timeout: Option<u32> => "ReadTimeout"
            [access = "environment_web_server,write_restrictable", restart = "true"],
        pub allow_cors_from: Option<String> => "AllowCorsFrom"
            [access = "integrations_cors,write_restrictable"],
        pub enable_developer: Option<bool> => "EnableDeveloper"
            [access = "environment_developer,write_restrictable"],
        pub gfycat_api_secret: Option<String> => "GfycatAPISecret"
            [access = "integrations_gif"],
        pub split_key: Option<String> => "SplitKey"
            [access = "experimental_feature_flags"],
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SqlSettings {
        pub driver_name: Option<String> => "DriverName"
            [access = "environment_database,write_restrictable", restart = "true"],
        pub data_source: Option<String> => "DataSource"
            [access = "environment_database,write_restrictable", restart = "true"],
        pub data_source_replicas: Vec<String> => "DataSourceReplicas"
            [access = "environment_database,write_restrictable", restart = "true"],
        pub data_source_search_replicas: Vec<String> => "DataSourceSearchReplicas"
            [access = "environment_database,write_restrictable", restart = "true"],
        pub max_idle_conns: Option<i32> => "MaxIdleConns"
            [access = "environment_database,write_restrictable", restart = "true"],
        pub max_open_conns: Option<i32> => "MaxOpenConns"
            [access = "environment_database,write_restrictable", restart = "true"],
        pub query_timeout: Option<i32> => "QueryTimeout"
            [access = "environment_database,write_restrictable"],
        pub trace: Option<bool> => "Trace"
            [access = "environment_database,write_restrictable"],
        pub at_rest_encrypt_key: Option<String> => "AtRestEncryptKey"
            [access = "environment_database,write_restrictable"],
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct LogSettings {
        pub enable_console: Option<bool> => "EnableConsole"
            [access = "environment_logging,write_restrictable"],
        pub console_level: Option<String> => "ConsoleLevel"
            [access = "environment_logging,write_restrictable"],
        pub enable_file: Option<bool> => "EnableFile"
            [access = "environment_logging,write_restrictable"],
        pub file_location: Option<String> => "FileLocation"
            [access = "environment_logging,write_restrictable", restart = "true"],
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct FileSettings {
        pub driver_name: Option<String> => "DriverName"
            [access = "environment_file_storage,write_restrictable", restart = "true"],
        pub directory: Option<String> => "Directory"
            [access = "environment_file_storage,write_restrictable", restart = "true"],
        pub public_link_salt: Option<String> => "PublicLinkSalt"
            [access = "site_public_links"],
        pub amazon_s3_bucket: Option<String> => "AmazonS3Bucket"
            [access = "environment_file_storage,write_restrictable"],
        pub amazon_s3_access_key_id: Option<String> => "AmazonS3AccessKeyId"
            [access = "environment_file_storage,write_restrictable"],
        pub amazon_s3_secret_access_key: Option<String> => "AmazonS3SecretAccessKey"
            [access = "environment_file_storage,write_restrictable"],
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct EmailSettings {
        pub send_email_notifications: Option<bool> => "SendEmailNotifications"
            [access = "site_notifications"],
        pub smtp_server: Option<String> => "SMTPServer"
            [access = "environment_smtp,write_restrictable"],
        pub smtp_port: Option<String> => "SMTPPort"
            [access = "environment_smtp,write_restrictable"],
        pub smtp_username: Option<String> => "SMTPUsername"
            [access = "environment_smtp,write_restrictable"],
        pub smtp_password: Option<String> => "SMTPPassword"
            [access = "environment_smtp,write_restrictable"],
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct LdapSettings {
        pub enable: Option<bool> => "Enable"
            [access = "authentication_ldap"],
        pub ldap_server: Option<String> => "LdapServer"
            [access = "authentication_ldap"],
        pub bind_username: Option<String> => "BindUsername"
            [access = "authentication_ldap"],
        pub bind_password: Option<String> => "BindPassword"
            [access = "authentication_ldap"],
    }
}

config_record! {
    /// OAuth provider settings, shared by every single sign-on section.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SsoSettings {
        pub enable: Option<bool> => "Enable"
            [access = "authentication_openid"],
        pub id: Option<String> => "Id"
            [access = "authentication_openid"],
        pub secret: Option<String> => "Secret"
            [access = "authentication_openid"],
        pub scope: Option<String> => "Scope"
            [access = "authentication_openid"],
        pub auth_endpoint: Option<String> => "AuthEndpoint"
            [access = "authentication_openid"],
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ElasticsearchSettings {
        pub connection_url: Option<String> => "ConnectionURL"
            [access = "environment_elasticsearch,write_restrictable"],
        pub username: Option<String> => "Username"
            [access = "environment_elasticsearch,write_restrictable"],
        pub password: Option<String> => "Password"
            [access = "environment_elasticsearch,write_restrictable"],
        pub enable_indexing: Option<bool> => "EnableIndexing"
            [access = "environment_elasticsearch,write_restrictable"],
        pub sniff: Option<bool> => "Sniff"
            [access = "environment_elasticsearch,write_restrictable"],
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct GlobalRelaySettings {
        pub customer_type: Option<String> => "CustomerType"
            [access = "compliance_compliance_export"],
        pub smtp_username: Option<String> => "SMTPUsername"
            [access = "compliance_compliance_export"],
        pub smtp_password: Option<String> => "SMTPPassword"
            [access = "compliance_compliance_export"],
        pub email_address: Option<String> => "EmailAddress"
            [access = "compliance_compliance_export"],
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct MessageExportSettings {
        pub enable_export: Option<bool> => "EnableExport"
            [access = "compliance_compliance_export"],
        pub export_format: Option<String> => "ExportFormat"
            [access = "compliance_compliance_export"],
        pub daily_run_time: Option<String> => "DailyRunTime"
            [access = "compliance_compliance_export"],
        pub global_relay_settings: Option<GlobalRelaySettings> => "GlobalRelaySettings"
            [access = "compliance_compliance_export"],
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct PluginState {
        pub enable: bool => "Enable",
    }
}

config_record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct PluginSettings {
        pub enable: Option<bool> => "Enable"
            [access = "plugins,write_restrictable", restart = "true"],
        pub directory: Option<String> => "Directory"
            [access = "plugins,write_restrictable", restart = "true"],
        pub plugins: BTreeMap<String, BTreeMap<String, serde_json::Value>> => "Plugins"
            [access = "plugins"],
        pub plugin_states: BTreeMap<String, PluginState> => "PluginStates"
            [access = "plugins"],
    }
}
