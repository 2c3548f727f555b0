//! Per-process application state.
//!
//! 进程级应用状态：目录、主题用例、导航以及当前作品页控制器。

use std::sync::Arc;

use anyhow::Context;
use pf_app::usecases::{
    CatalogOverview, GetCatalogOverview, GetTheme, LoadCatalog, ProjectsViewController,
    SubmitContactError, SubmitContactMessage, ToggleTheme,
};
use pf_app::AppDeps;
use pf_core::catalog::{Catalog, PageSize};
use pf_core::{ContactForm, ContactReceipt, Navigator, Route, SiteMetadata, Theme};
use thiserror::Error;
use tracing::info;

use super::defaults::ShellDefaults;

#[derive(Debug, Error)]
pub enum ContactUnavailable {
    #[error("contact form is not configured")]
    NotConfigured,

    #[error(transparent)]
    Submit(#[from] SubmitContactError),
}

pub struct AppContext {
    catalog: Arc<Catalog>,
    overview: CatalogOverview,
    get_theme: GetTheme,
    toggle_theme: ToggleTheme,
    submit_contact: Option<SubmitContactMessage>,
    navigator: Navigator,
    projects: Option<ProjectsViewController>,
    page_size: PageSize,
    metadata: SiteMetadata,
}

impl AppContext {
    /// Load the catalog and build the use cases. Starts on the home page.
    pub fn new(deps: AppDeps, defaults: &ShellDefaults) -> anyhow::Result<Self> {
        let catalog = LoadCatalog::new(deps.catalog_source)
            .execute()
            .context("Failed to load the project catalog")?;
        let catalog = Arc::new(catalog);
        let overview = GetCatalogOverview::new(Arc::clone(&catalog)).execute();

        Ok(Self {
            catalog,
            overview,
            get_theme: GetTheme::new(Arc::clone(&deps.theme)),
            toggle_theme: ToggleTheme::new(deps.theme),
            submit_contact: deps.contact.map(SubmitContactMessage::new),
            navigator: Navigator::default(),
            projects: None,
            page_size: defaults.page_size,
            metadata: defaults.metadata.clone(),
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn overview(&self) -> &CatalogOverview {
        &self.overview
    }

    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn toggle_menu(&mut self) {
        self.navigator.toggle_menu();
    }

    /// Switch page. Entering Projects starts a fresh controller; leaving drops it.
    pub fn navigate(&mut self, route: Route) -> bool {
        let changed = self.navigator.navigate(route);
        if changed {
            self.projects = (route == Route::Projects)
                .then(|| ProjectsViewController::with_page_size(Arc::clone(&self.catalog), self.page_size));
            info!(route = route.path(), "Navigated");
        }
        changed
    }

    /// The projects controller, only while the Projects page is open.
    pub fn projects(&self) -> Option<&ProjectsViewController> {
        self.projects.as_ref()
    }

    pub fn projects_mut(&mut self) -> Option<&mut ProjectsViewController> {
        self.projects.as_mut()
    }

    pub async fn theme(&self) -> anyhow::Result<Theme> {
        self.get_theme.execute().await
    }

    pub async fn toggle_theme(&self) -> anyhow::Result<Theme> {
        self.toggle_theme.execute().await
    }

    pub fn contact_available(&self) -> bool {
        self.submit_contact.is_some()
    }

    /// Field errors are reported even when no endpoint is configured.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<ContactReceipt, ContactUnavailable> {
        form.validate().map_err(SubmitContactError::Invalid)?;
        let usecase = self
            .submit_contact
            .as_ref()
            .ok_or(ContactUnavailable::NotConfigured)?;
        Ok(usecase.execute(form).await?)
    }
}
