use std::sync::Arc;

use nutrilens_core::application::NutrilensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrilensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrilensService) -> Self {
        Self { args, service }
    }

    /// Public URL of a stored upload.
    pub fn upload_url(&self, file_name: &str) -> String {
        format!("{}/uploads/{}", self.args.server.root_path, file_name)
    }
}
