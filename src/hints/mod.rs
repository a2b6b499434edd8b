//! Progressive hints
//!
//! Definition and letter hints that unlock over time, by guess count, or on
//! request, plus masking of the answer inside definitions.

mod censor;
pub mod timeline;

pub use censor::censor_definition;
pub use timeline::{
    HintConfig, HintConfigError, HintDisclosure, HintInputs, HintTimeline, LetterOrder,
    LetterReveal,
};
