//! Server configuration schema diffed by cfgdiff.
//!
//! [`Config`] is the root record. Each settings section is declared with
//! [`cfgdiff_types::config_record!`], which records the path labels and scope
//! tags the diff engine reads. `Config` registers a self-redaction hook that
//! masks its own secrets when a whole configuration ends up in one change.

pub mod config;
pub mod settings;

pub use config::Config;
pub use settings::{
    ElasticsearchSettings, EmailSettings, FileSettings, GlobalRelaySettings, LdapSettings,
    LogSettings, MessageExportSettings, PluginSettings, PluginState, ServiceSettings,
    SqlSettings, SsoSettings,
};
