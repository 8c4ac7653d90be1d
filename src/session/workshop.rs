// session/workshop.rs - Top-level navigation between the overview and module labs

use serde::Serialize;
use uuid::Uuid;

use super::ModuleSession;
use crate::catalog::LabModule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AppTab {
    #[default]
    Overview,
    Module(LabModule),
}

/// Owns the active tab and, on module tabs, that module's lab state
#[derive(Debug, Clone, Serialize)]
pub struct Workshop {
    pub id: String,
    tab: AppTab,
    session: Option<ModuleSession>,
}

impl Workshop {
    pub fn new() -> Self {
        let id = Uuid::new_v4().to_string();
        tracing::info!("Started workshop: {}", id);
        Self {
            id,
            tab: AppTab::Overview,
            session: None,
        }
    }

    pub fn tab(&self) -> AppTab {
        self.tab
    }

    /// Every switch starts the module from scratch
    pub fn select_tab(&mut self, tab: AppTab) {
        self.tab = tab;
        self.session = match tab {
            AppTab::Overview => None,
            AppTab::Module(module) => Some(ModuleSession::new(module)),
        };
        tracing::debug!("Workshop {}: tab -> {:?}", self.id, tab);
    }

    pub fn session(&self) -> Option<&ModuleSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut ModuleSession> {
        self.session.as_mut()
    }
}

impl Default for Workshop {
    fn default() -> Self {
        Self::new()
    }
}
