use nalgebra::DMatrix;

/// n! for small n, saturating at usize::MAX. Stoichiometric coefficients
/// of elementary steps are single-digit in practice.
pub fn factorial(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    let mut result: usize = 1;
    for i in 2..=n {
        result = result.saturating_mul(i);
    }
    result
}

/// Integer matrix product. Panics on a dimension mismatch; user input
/// never reaches this function.
pub fn mat_mul(a: &DMatrix<i64>, b: &DMatrix<i64>) -> DMatrix<i64> {
    if a.ncols() != b.nrows() {
        panic!(
            "Incompatible matrix dimensions: {}x{} * {}x{}",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        );
    }
    let mut result = DMatrix::<i64>::zeros(a.nrows(), b.ncols());
    for i in 0..a.nrows() {
        for k in 0..a.ncols() {
            let aik = a[(i, k)];
            // ladder matrices are mostly zeros
            if aik == 0 {
                continue;
            }
            for j in 0..b.ncols() {
                result[(i, j)] += aik * b[(k, j)];
            }
        }
    }
    result
}

/// Matrix power by repeated squaring. `exp == 0` gives the identity of
/// matching size, `exp == 1` gives the matrix itself.
pub fn mat_exp(m: &DMatrix<i64>, exp: usize) -> DMatrix<i64> {
    if exp == 0 {
        return DMatrix::<i64>::identity(m.nrows(), m.nrows());
    }
    if exp == 1 {
        return m.clone();
    }
    let mut result = m.clone();
    let mut base = m.clone();
    let mut power = exp - 1;
    while power > 0 {
        if power % 2 == 1 {
            result = mat_mul(&result, &base);
        }
        base = mat_mul(&base, &base);
        power /= 2;
    }
    result
}

/// Renders a matrix as a LaTeX bmatrix block, cells joined by `&`, rows by `\\`.
/// An empty matrix renders as an empty string.
pub fn matrix_to_latex(m: &DMatrix<i64>) -> String {
    if m.nrows() == 0 || m.ncols() == 0 {
        return String::new();
    }
    let rows: Vec<String> = (0..m.nrows())
        .map(|i| {
            (0..m.ncols())
                .map(|j| m[(i, j)].to_string())
                .collect::<Vec<String>>()
                .join(" & ")
        })
        .collect();
    format!(r"\begin{{bmatrix}} {} \end{{bmatrix}}", rows.join(r" \\ "))
}

/// Truncated 4x4 raising operator: ones on the subdiagonal.
/// Illustrative only, the sqrt(n) amplitudes are rounded away.
pub fn creation_matrix() -> DMatrix<i64> {
    DMatrix::from_row_slice(
        4,
        4,
        &[
            0, 0, 0, 0, //
            1, 0, 0, 0, //
            0, 1, 0, 0, //
            0, 0, 1, 0,
        ],
    )
}

/// Truncated 4x4 lowering operator: 1, 2, 3 on the superdiagonal.
pub fn annihilation_matrix() -> DMatrix<i64> {
    DMatrix::from_row_slice(
        4,
        4,
        &[
            0, 1, 0, 0, //
            0, 0, 2, 0, //
            0, 0, 0, 3, //
            0, 0, 0, 0,
        ],
    )
}

/// Ladder matrix raised to the given power, rendered for a hover tooltip.
pub fn ladder_matrix_latex(is_creation: bool, exponent: usize) -> String {
    let base = if is_creation {
        creation_matrix()
    } else {
        annihilation_matrix()
    };
    matrix_to_latex(&mat_exp(&base, exponent))
}
