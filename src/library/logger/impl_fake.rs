use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

/// Keeps every error line so tests can check what was reported. Namespaced
/// children share the same record.
#[derive(Clone, Default)]
pub struct LoggerFake {
    errors: Arc<Mutex<Vec<String>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Logger for LoggerFake {
    fn info(&self, _message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.errors.lock().unwrap().push(message.to_string());
        Ok(())
    }

    fn with_namespace(&self, _namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(self.clone())
    }
}
