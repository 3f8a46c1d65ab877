// Application state for HTTP handlers
use crate::application::copy_service::DashboardCopyService;

#[derive(Clone)]
pub struct AppState {
    pub copy_service: DashboardCopyService,
    pub default_base_url: String,
}
