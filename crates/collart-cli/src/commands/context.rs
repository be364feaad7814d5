use anyhow::{Context, Result};
use collart_api::CollartClient;
use collart_application::AuthViewModel;
use collart_core::Session;
use collart_core::config::ClientConfig;
use collart_core::settings::{SettingKey, SettingsStore};
use collart_core::user::User;
use collart_infrastructure::{CollartPaths, ConfigService, TomlSettingsStore};
use std::path::Path;
use std::sync::Arc;

/// Everything a command needs, wired once per invocation.
pub struct AppContext {
    pub paths: CollartPaths,
    pub config: ClientConfig,
    pub session: Session,
    pub settings: Arc<dyn SettingsStore>,
    pub client: Arc<CollartClient>,
}

impl AppContext {
    pub async fn bootstrap(config_dir: Option<&Path>) -> Result<Self> {
        let paths = CollartPaths::new(config_dir);
        let config = ConfigService::new(&paths)?
            .load()
            .context("Failed to load configuration")?;
        super::init_tracing(&config.log_level);
        tracing::debug!(target: "collart::cli", "Using backend {}", config.base_url);

        let settings_file = paths
            .settings_file()
            .map_err(|e| anyhow::anyhow!("Failed to resolve settings path: {e}"))?;
        let settings: Arc<dyn SettingsStore> = Arc::new(TomlSettingsStore::new(settings_file));

        let session = Session::restore(settings.as_ref())
            .await
            .context("Failed to restore session")?;
        if settings.get(SettingKey::Language)?.is_none() {
            session.set_language(config.language).await;
        }

        let client = Arc::new(CollartClient::new(&config, session.clone(), settings.clone())?);

        Ok(Self {
            paths,
            config,
            session,
            settings,
            client,
        })
    }

    pub fn auth(&self) -> AuthViewModel {
        AuthViewModel::new(self.client.clone(), self.session.clone(), self.settings.clone())
    }

    /// Resumes the stored session, failing with a hint when there is none.
    pub async fn require_user(&self) -> Result<User> {
        let auth = self.auth();
        if !auth.restore().await? {
            anyhow::bail!("Not signed in. Run `collart login --email <EMAIL>` first.");
        }
        self.session
            .user()
            .await
            .context("Session has no user after restore")
    }
}
