pub mod batch;
pub mod error;
pub mod listing;
pub mod model;
pub mod report;
pub mod tone;
pub mod trust;

pub use error::VetError;
pub use model::{Candidate, ScoreInput, ScoreResult, ScoredCandidate, Status};
pub use tone::{ToneReport, analyze};
pub use trust::evaluate;

pub fn print_banner() {
    println!(
        r#"
            __  ___      __
 _   _____  / /_/ (_)___  / /__
| | / / _ \/ __/ / / __ \/ //_/
| |/ /  __/ /_/ / / / / / ,<
|___/\___/\__/_/_/_/ /_/_/|_|   v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
