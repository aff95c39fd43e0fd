pub mod errors;
pub mod mutate;
mod runner;
pub mod seq;

pub use runner::mutate_fasta;

use crate::errors::SeqMutError;

pub fn run() -> Result<(), SeqMutError> {
    runner::run()
}
