//! Adding and removing portfolio projects of the current user.

use crate::lifecycle::ViewScope;
use crate::observable::Observable;
use collart_core::Session;
use collart_core::error::{CollartError, Result};
use collart_core::portfolio::{NewPortfolioProject, PortfolioProject, PortfolioService};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioEditorState {
    pub is_saving: bool,
    pub projects: Vec<PortfolioProject>,
}

pub struct PortfolioEditorViewModel {
    service: Arc<dyn PortfolioService>,
    session: Session,
    state: Observable<PortfolioEditorState>,
    scope: ViewScope,
}

impl PortfolioEditorViewModel {
    pub fn new(service: Arc<dyn PortfolioService>, session: Session) -> Self {
        Self {
            service,
            session,
            state: Observable::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PortfolioEditorState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> PortfolioEditorState {
        self.state.snapshot()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Starts from the projects already cached on the session user.
    pub async fn load(&self) {
        let projects = self
            .session
            .user()
            .await
            .map(|user| user.portfolio_projects)
            .unwrap_or_default();
        self.state.update(|state| state.projects = projects);
    }

    pub async fn add_project(&self, project: &NewPortfolioProject) -> Result<PortfolioProject> {
        if project.name.trim().is_empty() {
            return Err(CollartError::invalid_input("Project name is required"));
        }

        self.state.update(|state| state.is_saving = true);
        let outcome = self.scope.run(self.service.add_project(project)).await;
        self.state.update(|state| state.is_saving = false);
        let created = outcome
            .map_err(|err| log_failure!("collart::portfolio", "add project", err))?;

        self.state
            .update(|state| state.projects.push(created.clone()));
        self.session
            .update_user(|user| user.portfolio_projects.push(created.clone()))
            .await;
        tracing::info!(target: "collart::portfolio", "Added portfolio project {}", created.id);
        Ok(created)
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.state.update(|state| state.is_saving = true);
        let outcome = self.scope.run(self.service.delete_project(project_id)).await;
        self.state.update(|state| state.is_saving = false);
        outcome.map_err(|err| log_failure!("collart::portfolio", "delete project", err))?;

        self.state
            .update(|state| state.projects.retain(|p| p.id != project_id));
        self.session
            .update_user(|user| user.portfolio_projects.retain(|p| p.id != project_id))
            .await;
        Ok(())
    }
}
