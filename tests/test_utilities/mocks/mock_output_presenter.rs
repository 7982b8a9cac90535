use env2reqs::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that keeps the last presented content
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub content: Arc<Mutex<Option<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_content(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(())
    }

    fn destination(&self) -> String {
        "mock".to_string()
    }
}
