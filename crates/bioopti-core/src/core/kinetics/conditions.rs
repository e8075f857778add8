/// A single set of environmental conditions to evaluate a rate under.
///
/// Conditions are ephemeral value objects; nothing retains them between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionConditions {
    /// Substrate concentration [S] in mM.
    pub substrate_conc: f64,
    pub ph: f64,
    /// Temperature in °C.
    pub temp: f64,
    /// Inhibitor concentration [I] in mM. Only has an effect when the
    /// parameter set carries an inhibition constant.
    pub inhibitor_conc: Option<f64>,
}

impl ReactionConditions {
    pub fn new(substrate_conc: f64, ph: f64, temp: f64) -> Self {
        Self {
            substrate_conc,
            ph,
            temp,
            inhibitor_conc: None,
        }
    }

    pub fn with_inhibitor(mut self, inhibitor_conc: f64) -> Self {
        self.inhibitor_conc = Some(inhibitor_conc);
        self
    }
}
