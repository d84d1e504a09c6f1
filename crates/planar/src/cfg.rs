//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants so call sites never juggle epsilons.
//!   Settings that callers legitimately tune (the Bézier circle constant) live
//!   in `BezierCfg` instead.

/// Below this magnitude the quadratic coefficient of a cubic's derivative is
/// treated as zero and the extremum solve falls back to the linear case.
pub(crate) const QUAD_EPS: f64 = 1e-12;

/// Endpoint coincidence tolerance used by `BezierCurveChain::is_closed` callers
/// that do not pass their own.
pub const CHAIN_CLOSE_EPS: f64 = 1e-9;

/// Control-point offset factor for a quarter-ellipse cubic, minimizing radial
/// error against the true arc (Mortensen, "Approximate a circle with cubic
/// Bézier curves").
pub const KAPPA: f64 = 0.551915024494;
