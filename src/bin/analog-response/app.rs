//! Single-shot evaluation and the one line it prints

use color_eyre::eyre::Result as EyreResult;
use tracing::info;

use analog_response::{Complex64, FilterCharacter, FilterParams};

/// One evaluation, configured builder-style and run once.
pub struct Evaluation {
    character: FilterCharacter,
    params: FilterParams,
}

impl Evaluation {
    pub fn new(character: FilterCharacter) -> Self {
        Self {
            character,
            params: FilterParams::default(),
        }
    }

    /// Set the operating point
    pub fn params(mut self, params: FilterParams) -> Self {
        self.params = params;
        self
    }

    pub fn output(&self) -> Complex64 {
        self.character.evaluate(&self.params)
    }

    /// Evaluate and print the result line to stdout
    pub fn run(self) -> EyreResult<()> {
        let output = self.output();
        info!(character = %self.character, params = ?self.params, "filter evaluated");
        println!("{}", render_line(self.character, output));
        Ok(())
    }
}

pub fn render_line(character: FilterCharacter, output: Complex64) -> String {
    format!("Ausgangssignal für {character} Charakteristik: {output}")
}
