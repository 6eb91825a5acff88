use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use shaderwatch::compile::{CompileOutcome, CompilerBackend};
use shaderwatch::watch::CompileRequest;

/// A fake compiler that:
/// - records every request it was handed
/// - immediately reports `Success`, unless an outcome was scripted for that
///   file name.
#[derive(Clone, Default)]
pub struct FakeCompiler {
    compiled: Arc<Mutex<Vec<CompileRequest>>>,
    outcomes: Arc<Mutex<HashMap<String, CompileOutcome>>>,
}

impl FakeCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every compile of `file_name` (e.g. `broken.frag`) return `outcome`.
    pub fn fail_with(&self, file_name: &str, outcome: CompileOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(file_name.to_string(), outcome);
    }

    /// All requests so far, in the order they were compiled.
    pub fn requests(&self) -> Vec<CompileRequest> {
        self.compiled.lock().unwrap().clone()
    }

    /// File names compiled so far, sorted.
    pub fn compiled_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .compiled
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.file_name())
            .collect();
        names.sort();
        names
    }

    pub fn count(&self) -> usize {
        self.compiled.lock().unwrap().len()
    }

    /// Forget recorded requests (scripted outcomes are kept).
    pub fn clear(&self) {
        self.compiled.lock().unwrap().clear();
    }
}

impl CompilerBackend for FakeCompiler {
    fn compile(
        &mut self,
        request: CompileRequest,
    ) -> Pin<Box<dyn Future<Output = CompileOutcome> + Send + '_>> {
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .get(&request.file_name())
            .cloned()
            .unwrap_or(CompileOutcome::Success);

        self.compiled.lock().unwrap().push(request);

        Box::pin(async move { outcome })
    }
}
