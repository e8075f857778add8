use bioopti::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Bridges the engine's generation events onto an indicatif bar. The bar
/// shows the best rate found so far, which is the negated objective cost.
#[derive(Clone)]
pub struct SearchProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl SearchProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_style(Self::bar_style());
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::SearchStart { max_generations } => {
                    pb_guard.reset();
                    pb_guard.set_length(max_generations);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                    pb_guard.set_message("searching".to_string());
                }
                Progress::Generation { index, best_cost } => {
                    pb_guard.set_position(index);
                    pb_guard.set_message(format!("best rate {:.4}", -best_cost));
                }
                Progress::SearchFinish { converged } => {
                    if converged {
                        pb_guard.finish_with_message("✓ converged");
                    } else {
                        pb_guard.finish_with_message("generation budget exhausted");
                    }
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<28} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for SearchProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
