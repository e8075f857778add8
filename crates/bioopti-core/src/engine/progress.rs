#[derive(Debug, Clone)]
pub enum Progress {
    /// The search is starting with the given generation budget.
    SearchStart { max_generations: u64 },
    /// One generation finished; carries the best objective cost seen so far.
    Generation { index: u64, best_cost: f64 },
    /// The search ended, either by convergence or budget exhaustion.
    SearchFinish { converged: bool },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
