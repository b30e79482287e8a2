use crate::parse::{Components, ParseError};
use base::vector::{angle, angle_deg, cross, dist, dot};

/// Operation evaluated by the `vec` command.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecOp {
    /// Magnitude of A.
    Magnitude,
    /// A + B.
    Add,
    /// A - B.
    Sub,
    /// Dot product of A and B.
    Dot,
    /// Cross product of A and B, both 3D.
    Cross,
    /// Distance between A and B.
    Dist,
    /// Angle between A and B.
    Angle,
    /// A scaled to unit length.
    Normalize,
}

/// Options of the `vec` command.
#[derive(clap::Args, Debug, Clone)]
pub struct VecOptions {
    /// Operation to evaluate.
    #[arg(value_enum)]
    pub op: VecOp,

    /// First operand, e.g. "(1; 2; 3)".
    pub a: Components,

    /// Second operand, required by binary operations.
    pub b: Option<Components>,
}

/// Error raised when a vector operation cannot be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// An operand could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A binary operation was given a single operand.
    #[error("Operation '{0:?}' needs a second vector")]
    MissingOperand(VecOp),

    /// The cross product was asked for vectors that are not 3D.
    #[error("The cross product is only available for 3D vectors")]
    NotThreeDimensional,
}

/// Evaluates `op` and renders the result the way the interactive calculator
/// does.
pub fn evaluate(op: VecOp, a: &Components, b: Option<&Components>) -> Result<String, EvalError> {
    let va = a.to_vector();
    let second = || b.ok_or(EvalError::MissingOperand(op));
    let result = match op {
        VecOp::Magnitude => format!("|{}| = {}", a, va.magnitude()),
        VecOp::Normalize => {
            let n = va.normalized();
            format!("{} / |{}| = {}", a, a, Components(n.as_slice()[..a.len()].to_vec()))
        },
        VecOp::Add => {
            let b = second()?;
            let sum = va + b.to_vector();
            format!("{} + {} = {}", a, b, Components::from_vector(&sum, a.len().max(b.len())))
        },
        VecOp::Sub => {
            let b = second()?;
            let diff = va - b.to_vector();
            format!("{} - {} = {}", a, b, Components::from_vector(&diff, a.len().max(b.len())))
        },
        VecOp::Dot => {
            let b = second()?;
            format!("{} . {} = {}", a, b, dot(&va, &b.to_vector()))
        },
        VecOp::Cross => {
            let b = second()?;
            if a.len() != 3 || b.len() != 3 {
                return Err(EvalError::NotThreeDimensional);
            }
            let c = cross(&va.resize::<3>(), &b.to_vector().resize::<3>());
            format!("{} X {} = {}", a, b, c)
        },
        VecOp::Dist => {
            let b = second()?;
            format!("Distance between {} and {} = {}", a, b, dist(&va, &b.to_vector()))
        },
        VecOp::Angle => {
            let b = second()?;
            let vb = b.to_vector();
            format!(
                "Angle between {} and {} = {} degrees or {} radians",
                a,
                b,
                angle_deg(&va, &vb),
                angle(&va, &vb)
            )
        },
    };
    log::debug!("evaluated {:?}", op);
    Ok(result)
}
