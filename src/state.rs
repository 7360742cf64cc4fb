use std::sync::Arc;

use crate::service::ContentService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ContentService>,
}
