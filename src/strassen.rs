use crate::errors::DncError;
use crate::matrix::{Matrix, Quadrants, Scalar};

/*
                                                  ╒══════════════════╕
    ============================================= │  IMPLEMENTATION  │ =============================================
                                                  ╘══════════════════╛
*/

fn check_operand<T: Scalar>(m: &Matrix<T>, name: &str) -> Result<(), DncError> {
    if !m.is_square() || !m.nrows().is_power_of_two() {
        return Err(DncError::dimension_mismatch(format!(
            "Strassen multiplication needs square matrices with a power of two size, {} is {}x{}",
            name, m.nrows(), m.ncols()
        )));
    }

    Ok(())
}

/// Multiplies two square matrices whose size is a power of two.
///
/// Operands with `x.ncols() != y.nrows()` fail with `DimensionMismatch`, and so do compatible
/// operands that are not square or not a power of two in size. No padding is attempted.
pub fn multiply<T: Scalar>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>, DncError> {
    if x.ncols() != y.nrows() {
        return Err(DncError::dimension_mismatch(format!(
            "Cannot multiply a {}x{} matrix by a {}x{} matrix", x.nrows(), x.ncols(), y.nrows(), y.ncols()
        )));
    }

    check_operand(x, "the left operand")?;
    check_operand(y, "the right operand")?;

    Ok(strassen(x, y))
}

fn strassen<T: Scalar>(x: &Matrix<T>, y: &Matrix<T>) -> Matrix<T> {
    if x.nrows() == 1 {
        return Matrix::from_fn(1, 1, |_, _| x.get(0, 0).times(y.get(0, 0)));
    }

    let Quadrants { top_left: a, top_right: b, bottom_left: c, bottom_right: d } = x.quadrants();
    let Quadrants { top_left: e, top_right: f, bottom_left: g, bottom_right: h } = y.quadrants();

    let p1 = strassen(&a, &(&f - &h));
    let p2 = strassen(&(&a + &b), &h);
    let p3 = strassen(&(&c + &d), &e);
    let p4 = strassen(&d, &(&g - &e));
    let p5 = strassen(&(&a + &d), &(&e + &h));
    let p6 = strassen(&(&b - &d), &(&g + &h));
    let p7 = strassen(&(&a - &c), &(&e + &f));

    Quadrants {
        top_left: &p5 + &p4 - &p2 + &p6,
        top_right: &p1 + &p2,
        bottom_left: &p3 + &p4,
        bottom_right: &p1 + &p5 - &p3 - &p7
    }.join()
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/
