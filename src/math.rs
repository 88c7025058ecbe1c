use crate::Num;

/// Newton's method ran out of steps or left the domain of the function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoConvergence {
    pub iterations: usize,
    pub last: Num,
}

/// Approximates the root of a function using the Newton-Raphson method.
///
/// # Arguments
/// f - The function to approximate the root of.
/// f_prime - The derivative of the function.
/// x0 - The initial guess.
/// epsilon - Convergence is reached once |x_n - x_(n-1)| < epsilon.
/// max_steps - Number of steps tried before giving up.
///
/// # Returns
/// The approximate root of the function, or [`NoConvergence`] when the
/// step cap is hit or an iterate stops being finite.
pub fn newton_approx(
    f: impl Fn(Num) -> Num,
    f_prime: impl Fn(Num) -> Num,
    x0: Num,
    epsilon: Num,
    max_steps: usize,
) -> Result<Num, NoConvergence> {
    let mut x = x0;

    for step in 0..max_steps {
        let x_next = x - f(x) / f_prime(x);

        if !x_next.is_finite() {
            return Err(NoConvergence {
                iterations: step + 1,
                last: x,
            });
        }

        if (x_next - x).abs() < epsilon {
            return Ok(x_next);
        }

        x = x_next;
    }

    tracing::trace!(x0, x, max_steps, "newton iteration exhausted");

    Err(NoConvergence {
        iterations: max_steps,
        last: x,
    })
}
