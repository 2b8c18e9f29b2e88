use std::sync::Arc;

use bapsang_core::application::BapsangService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BapsangService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BapsangService) -> Self {
        Self { args, service }
    }
}
