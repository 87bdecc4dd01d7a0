//! Deterministic multi-factor lead scoring.
//!
//! [`analyze_lead`] is a pure function over the lead and the scraped signal
//! map: five weighted sub-scores, an overall score and verdict, a
//! confidence estimate from signal volume/consistency, and templated
//! narrative output. Aside from the embedded creation timestamp it is fully
//! deterministic given its inputs.

mod scorer;

pub use scorer::analyze_lead;
