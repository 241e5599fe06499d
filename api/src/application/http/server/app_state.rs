use std::sync::Arc;

use plantcare_core::application::PlantcareService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<PlantcareService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: Arc<PlantcareService>) -> Self {
        Self { args, service }
    }
}
